//! Painting a generated identicon onto a surface.

use identicon_core::{Cell, Identicon};

use crate::color::{ColorError, realize};
use crate::surface::Surface;

/// Paint an identicon.
///
/// Sizes the surface to `output_dimension` squared, fills it with the
/// background color, then paints one `scale × scale` rectangle per
/// non-background cell: foreground for foreground cells, spot for
/// everything else. Consumes no generator state; rendering the same
/// identicon twice paints identical output.
pub fn render<S: Surface>(icon: &Identicon, surface: &mut S) -> Result<(), ColorError> {
    let palette = icon.palette();
    let foreground = realize(&palette.foreground)?;
    let background = realize(&palette.background)?;
    let spot = realize(&palette.spot)?;

    let dimension = icon.output_dimension();
    let scale = icon.scale();
    surface.set_dimensions(dimension, dimension);
    surface.fill_rect(0, 0, dimension, dimension, background);

    let grid = icon.grid();
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let color = match grid.cell(row, col) {
                Cell::Background => continue,
                Cell::Foreground => foreground,
                Cell::Spot => spot,
            };
            surface.fill_rect(col * scale, row * scale, scale, scale, color);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use identicon_core::IdenticonOptions;

    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::surface::Rgba;

    const RED: Rgba = Rgba::opaque(0xFF, 0, 0);
    const GREEN: Rgba = Rgba::opaque(0, 0xFF, 0);
    const BLUE: Rgba = Rgba::opaque(0, 0, 0xFF);

    /// An icon with all three colors overridden so every painted pixel is
    /// predictable. The seed's opening draws give rows mixing all three
    /// cell states at size 4.
    fn test_icon(scale: u32) -> Identicon {
        Identicon::generate(IdenticonOptions {
            seed: Some("0x8ba1f109551bd432803012645ac136ddd64dba72".into()),
            size: Some(4),
            scale: Some(scale),
            color: Some("#f00".into()),
            bg_color: Some("#00f".into()),
            spot_color: Some("#0f0".into()),
        })
        .expect("valid options")
    }

    #[test]
    fn paints_each_cell_state_with_its_color() {
        // Grid for this seed at size 4 with every slot overridden:
        //   row 0: background row
        //   row 1: bg, fg, fg, bg
        //   row 2: bg, fg, fg, bg
        //   row 3: fg, spot, spot, fg
        let icon = test_icon(1);
        let mut fb = Framebuffer::new(0, 0);
        render(&icon, &mut fb).expect("renders");

        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 4);
        assert_eq!(fb.pixel(0, 0), BLUE);
        assert_eq!(fb.pixel(3, 0), BLUE);
        assert_eq!(fb.pixel(0, 1), BLUE);
        assert_eq!(fb.pixel(1, 1), RED);
        assert_eq!(fb.pixel(2, 2), RED);
        assert_eq!(fb.pixel(0, 3), RED);
        assert_eq!(fb.pixel(1, 3), GREEN);
        assert_eq!(fb.pixel(2, 3), GREEN);
        assert_eq!(fb.pixel(3, 3), RED);
    }

    #[test]
    fn scale_multiplies_every_rectangle() {
        let icon = test_icon(3);
        let mut fb = Framebuffer::new(0, 0);
        render(&icon, &mut fb).expect("renders");

        assert_eq!(fb.width(), 12);
        // Cell (1, 1) is foreground; all nine of its pixels are red.
        for y in 3..6 {
            for x in 3..6 {
                assert_eq!(fb.pixel(x, y), RED, "pixel ({x}, {y})");
            }
        }
        // Cell (0, 0) is background.
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(fb.pixel(x, y), BLUE, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn unparseable_override_fails_rendering() {
        let icon = Identicon::generate(IdenticonOptions {
            seed: Some("bad-color".into()),
            color: Some("magenta-ish".into()),
            ..IdenticonOptions::default()
        })
        .expect("valid options");
        let mut fb = Framebuffer::new(0, 0);
        let err = render(&icon, &mut fb);
        assert_eq!(
            err,
            Err(ColorError::Unparseable("magenta-ish".to_string()))
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let icon = test_icon(2);
        let mut a = Framebuffer::new(0, 0);
        let mut b = Framebuffer::new(0, 0);
        render(&icon, &mut a).expect("renders");
        render(&icon, &mut b).expect("renders");
        assert_eq!(a, b);
    }
}
