mod raster;
mod surface;
pub mod svg;

pub use surface::{Color, Element, FontConfig, Line, Surface, Text};

use std::path::Path;

/// Writes the surface to `path`, picking the output format from its extension
pub fn generate_image(surface: &Surface, font: &FontConfig, path: &Path) -> Result<(), String> {
    let svg_content = svg::generate_string(surface, font);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("svg") => svg::render_from_string(&svg_content, path),
        Some("png") => raster::render_png(&svg_content, path),
        _ => Err(format!(
            "Unsupported image extension: {}. Must be .svg or .png",
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
        assert_eq!(bytes[..8], PNG_SIGNATURE);
        assert_eq!(&bytes[12..16], b"IHDR");
        let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
        (width, height)
    }

    fn sample_surface() -> Surface {
        let mut track = Surface::new(60, 20);
        track.draw_line(0.0, 10.0, 60.0, 10.0, 12.0, "#000000");
        let mut surface = Surface::new(100, 40);
        surface.compose(track, 20.0, 10.0);
        surface
    }

    #[test]
    fn svg_file_matches_generated_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let surface = sample_surface();
        let font = FontConfig::default();

        generate_image(&surface, &font, &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            svg::generate_string(&surface, &font)
        );
    }

    #[test]
    fn png_has_canvas_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let surface = sample_surface();

        generate_image(&surface, &FontConfig::default(), &path).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(png_dimensions(&bytes), (100, 40));
    }

    #[test]
    fn png_with_quoted_font_family_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let mut surface = sample_surface();
        surface.draw_text(2.0, 15.0, "r1");
        let mut font = FontConfig::default();
        font.set_family("Fira \"Mono\"");

        assert!(generate_image(&surface, &font, &path).is_ok());
    }

    #[test]
    fn unsupported_extension_err() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        assert!(generate_image(&sample_surface(), &FontConfig::default(), &path).is_err());
        assert!(!path.exists());
    }
}
