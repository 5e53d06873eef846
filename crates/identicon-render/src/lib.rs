//! Rendering collaborators for `identicon-core`.
//!
//! The core hands back a grid and palette and never touches a drawing
//! surface; this crate is the consumer side. It defines the `Surface`
//! capability (size + rectangle fill), an RGBA `Framebuffer`
//! implementation, color realization (derived HSL conversion plus parsing
//! of override strings, which the core carries uninterpreted), and PNG
//! capture.

mod capture;
mod color;
mod framebuffer;
mod render;
mod surface;

pub use capture::save_png;
pub use color::{ColorError, hsl_to_rgb, realize};
pub use framebuffer::Framebuffer;
pub use render::render;
pub use surface::{Rgba, Surface};
