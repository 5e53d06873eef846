//! Deterministic blockies-style identicon generation.
//!
//! Derives a small square icon from a seed string: a seeded Xorshift
//! generator, a derived three-color HSL palette, and a left-right mirrored
//! tri-state cell grid. Output is bit-identical to the JavaScript blockies
//! generator used for Ethereum identicons, which requires exact 32-bit
//! wraparound, arithmetic shift, and draw-order semantics throughout.
//!
//! This crate is the pure core: it produces a grid and palette and never
//! touches a drawing surface. Rendering lives in `identicon-render`.

mod color;
mod grid;
mod identicon;
mod rng;

pub use color::{Color, Hsl, Palette};
pub use grid::{Cell, Grid};
pub use identicon::{
    DEFAULT_SCALE, DEFAULT_SIZE, GenerateError, Identicon, IdenticonOptions,
};
pub use rng::SeededRng;
