//! SVG to PNG rasterization.

use resvg::tiny_skia::{Pixmap, Transform};

use crate::{
    error::DepictError,
    options::{RasterOptions, MAX_CANVAS_SIDE},
};

/// Rasterize `svg` onto a `width` × `height` pixel canvas and encode it as
/// PNG. The drawing is stretched to fill the canvas if its declared size
/// differs.
///
/// # Errors
///
/// Returns [`DepictError::Rasterize`] if the SVG cannot be parsed, the canvas
/// is empty or larger than [`MAX_CANVAS_SIDE`] on a side, or PNG encoding
/// fails.
pub fn rasterize_svg(
    svg: &str,
    width: u32,
    height: u32,
    options: &RasterOptions,
) -> Result<Vec<u8>, DepictError> {
    if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
        return Err(DepictError::Rasterize(format!(
            "{width}x{height} canvas exceeds {MAX_CANVAS_SIDE} pixels per side"
        )));
    }

    let mut usvg_options = usvg::Options::default();
    if options.load_system_fonts {
        usvg_options.fontdb_mut().load_system_fonts();
    }
    let tree = usvg::Tree::from_str(svg, &usvg_options)
        .map_err(|e| DepictError::Rasterize(e.to_string()))?;

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        DepictError::Rasterize(format!("cannot allocate {width}x{height} canvas"))
    })?;

    let size = tree.size();
    let transform = Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    log::debug!(
        "rasterized {}x{} drawing onto {width}x{height} canvas",
        size.width(),
        size.height()
    );

    pixmap
        .encode_png()
        .map_err(|e| DepictError::Rasterize(e.to_string()))
}
