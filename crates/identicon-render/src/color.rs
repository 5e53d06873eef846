//! Color realization: palette colors to concrete RGBA.
//!
//! The core carries override strings through uninterpreted; syntax
//! validation is this layer's job. Accepted forms are `#rgb`, `#rrggbb`,
//! and `hsl(H,S%,L%)`.

use std::fmt;

use identicon_core::{Color, Hsl};

use crate::surface::Rgba;

/// A color string the renderer could not interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    Unparseable(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparseable(s) => write!(f, "unparseable color: {s:?}"),
        }
    }
}

impl std::error::Error for ColorError {}

/// Convert an HSL triple to RGBA.
///
/// Hue wraps modulo 360 and saturation/lightness clamp to [0, 100] here,
/// at realization time only; the core's derived values are never altered.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgba {
    let h = hsl.h.rem_euclid(360.0);
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = chroma * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match h_prime as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Rgba::opaque(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

/// Realize a palette color as RGBA.
///
/// Derived colors convert directly; overrides are parsed and fail with
/// `ColorError::Unparseable` if they are in none of the accepted forms.
pub fn realize(color: &Color) -> Result<Rgba, ColorError> {
    match color {
        Color::Hsl(hsl) => Ok(hsl_to_rgb(*hsl)),
        Color::Custom(s) => {
            parse_css(s).ok_or_else(|| ColorError::Unparseable(s.clone()))
        }
    }
}

fn parse_css(s: &str) -> Option<Rgba> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(body) = s
        .strip_prefix("hsl(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_hsl_body(body);
    }
    None
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let channel = |pair: &str| u8::from_str_radix(pair, 16).ok();
    match hex.len() {
        // #rgb doubles each digit
        3 => {
            let mut chars = hex.chars();
            let mut next = || {
                let c = chars.next()?;
                channel(&format!("{c}{c}"))
            };
            Some(Rgba::opaque(next()?, next()?, next()?))
        }
        6 => Some(Rgba::opaque(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

fn parse_hsl_body(body: &str) -> Option<Rgba> {
    let mut parts = body.split(',');
    let h: f64 = parts.next()?.trim().parse().ok()?;
    let s: f64 = parts.next()?.trim().strip_suffix('%')?.trim().parse().ok()?;
    let l: f64 = parts.next()?.trim().strip_suffix('%')?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(hsl_to_rgb(Hsl { h, s, l }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues_convert_exactly() {
        let red = Hsl { h: 0.0, s: 100.0, l: 50.0 };
        let green = Hsl { h: 120.0, s: 100.0, l: 25.0 };
        let blue = Hsl { h: 240.0, s: 100.0, l: 50.0 };
        assert_eq!(hsl_to_rgb(red), Rgba::opaque(0xFF, 0, 0));
        assert_eq!(hsl_to_rgb(green), Rgba::opaque(0, 0x80, 0));
        assert_eq!(hsl_to_rgb(blue), Rgba::opaque(0, 0, 0xFF));
    }

    #[test]
    fn zero_saturation_is_grey() {
        let white = Hsl { h: 77.0, s: 0.0, l: 100.0 };
        let mid = Hsl { h: 200.0, s: 0.0, l: 50.0 };
        assert_eq!(hsl_to_rgb(white), Rgba::opaque(0xFF, 0xFF, 0xFF));
        assert_eq!(hsl_to_rgb(mid), Rgba::opaque(0x80, 0x80, 0x80));
    }

    #[test]
    fn out_of_range_hue_wraps() {
        let a = Hsl { h: 480.0, s: 100.0, l: 50.0 };
        let b = Hsl { h: 120.0, s: 100.0, l: 50.0 };
        assert_eq!(hsl_to_rgb(a), hsl_to_rgb(b));
    }

    #[test]
    fn hex_overrides_parse() {
        let color = |s: &str| realize(&Color::Custom(s.to_string()));
        assert_eq!(color("#fff"), Ok(Rgba::opaque(0xFF, 0xFF, 0xFF)));
        assert_eq!(color("#123456"), Ok(Rgba::opaque(0x12, 0x34, 0x56)));
        assert_eq!(color(" #FF0000 "), Ok(Rgba::opaque(0xFF, 0, 0)));
    }

    #[test]
    fn hsl_strings_parse() {
        let got = realize(&Color::Custom("hsl(240, 100%, 50%)".into()));
        assert_eq!(got, Ok(Rgba::opaque(0, 0, 0xFF)));
    }

    #[test]
    fn derived_and_formatted_colors_realize_identically() {
        // A derived color and its Display round-trip must paint the same.
        let hsl = Hsl { h: 197.0, s: 83.5, l: 39.75 };
        let direct = realize(&Color::Hsl(hsl)).expect("derived");
        let parsed = realize(&Color::Custom(hsl.to_string())).expect("parsed");
        assert_eq!(direct, parsed);
    }

    #[test]
    fn garbage_is_rejected() {
        for bad in ["", "red", "#12345", "#gggggg", "hsl(1,2,3)", "hsl(1,2%)"] {
            let got = realize(&Color::Custom(bad.to_string()));
            assert_eq!(got, Err(ColorError::Unparseable(bad.to_string())), "{bad:?}");
        }
    }
}
