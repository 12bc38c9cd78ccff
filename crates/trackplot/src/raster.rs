use resvg::{tiny_skia, usvg};
use std::path::Path;

pub fn render_png(svg_content: &str, path: &Path) -> Result<(), String> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg_content, &options).map_err(|e| e.to_string())?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        format!(
            "Failed to allocate a {}x{} pixmap",
            size.width(),
            size.height()
        )
    })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap.save_png(path).map_err(|e| e.to_string())
}
