//! PNG capture.

use std::error::Error;
use std::fs;
use std::io::BufWriter;
use std::path::Path;

use identicon_core::Identicon;

use crate::framebuffer::Framebuffer;
use crate::render::render;

/// Render an identicon and save it as an RGBA PNG file.
pub fn save_png(icon: &Identicon, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut fb = Framebuffer::new(0, 0);
    render(icon, &mut fb)?;

    let file = fs::File::create(path)?;
    let w = BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, fb.width(), fb.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(fb.data())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use identicon_core::IdenticonOptions;

    #[test]
    fn saved_png_has_the_output_dimension() {
        let icon = Identicon::generate(IdenticonOptions {
            seed: Some("capture".into()),
            size: Some(8),
            scale: Some(4),
            ..IdenticonOptions::default()
        })
        .expect("valid options");

        let path = std::env::temp_dir().join("identicon-capture-test.png");
        save_png(&icon, &path).expect("saves");

        let file = fs::File::open(&path).expect("readable");
        let decoder = png::Decoder::new(file);
        let reader = decoder.read_info().expect("decodes");
        let info = reader.info();
        assert_eq!(info.width, 32);
        assert_eq!(info.height, 32);
        assert_eq!(info.color_type, png::ColorType::Rgba);

        fs::remove_file(&path).ok();
    }
}
