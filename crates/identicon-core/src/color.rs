//! Palette colors and their derivation from the seeded generator.

use std::fmt;

use crate::rng::SeededRng;

/// An HSL color triple.
///
/// Hue is a whole number of degrees, saturation 40–100%, lightness 0–100%
/// with a bell-curve bias around 50% (sum of four uniform draws). Components
/// are kept as the exact `f64` values the derivation produced; nothing is
/// rounded or clamped here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsl {
    /// Derive one color, consuming exactly six draws.
    ///
    /// One draw for hue, one for saturation, four for lightness, in that
    /// order. The draw count is part of the format: every consumer after
    /// this call depends on the generator having advanced exactly six steps.
    pub fn draw(rng: &mut SeededRng) -> Self {
        // Hue spans the whole color wheel
        let h = (rng.next() * 360.0).floor();
        // Saturation 40-100% avoids greyish colors
        let s = rng.next() * 60.0 + 40.0;
        // Sum of four uniforms biases lightness toward 50%
        let l = (rng.next() + rng.next() + rng.next() + rng.next()) * 25.0;
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({},{}%,{}%)", self.h, self.s, self.l)
    }
}

/// A palette slot: either a derived HSL color or a caller-supplied override.
///
/// Overrides are carried verbatim and never interpreted by the core; whether
/// the string is meaningful is the renderer's problem.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Hsl(Hsl),
    Custom(String),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hsl(hsl) => hsl.fmt(f),
            Self::Custom(s) => f.write_str(s),
        }
    }
}

/// The three colors of an identicon.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
    pub spot: Color,
}

impl Palette {
    /// Resolve the palette, consuming the generator only for unset slots.
    ///
    /// Slots resolve in the fixed order foreground, background, spot. An
    /// override skips its six draws entirely, so the generator state seen by
    /// grid synthesis depends on which slots were overridden. That is the
    /// reference behavior and is pinned by the regression vectors.
    pub fn resolve(
        rng: &mut SeededRng,
        foreground: Option<String>,
        background: Option<String>,
        spot: Option<String>,
    ) -> Self {
        let mut slot = |value: Option<String>| match value {
            Some(custom) => Color::Custom(custom),
            None => Color::Hsl(Hsl::draw(rng)),
        };
        let foreground = slot(foreground);
        let background = slot(background);
        let spot = slot(spot);
        Self {
            foreground,
            background,
            spot,
        }
    }
}
