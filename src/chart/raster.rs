use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{AtelierError, AtelierResult};

// Charts are small; anything beyond this is a caller mistake.
const MAX_DIM: u32 = 16_384;

/// Rasterize SVG text at `scale` into straight-alpha RGBA8.
pub fn rasterize(svg: &str, scale: f32) -> AtelierResult<image::RgbaImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(AtelierError::render(format!("invalid raster scale {scale}")));
    }

    let mut opts = usvg::Options::default();
    opts.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse chart svg")?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(AtelierError::render(format!(
            "raster size {width}x{height} out of range (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| AtelierError::render("failed to allocate chart pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| AtelierError::render("pixmap size does not match image buffer"))
}

/// Rasterize SVG text and save it as a PNG preview.
pub fn write_png(svg: &str, path: &Path, scale: f32) -> AtelierResult<()> {
    let img = rasterize(svg, scale)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::info!(path = %path.display(), width = img.width(), height = img.height(), "wrote chart preview");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/chart/raster.rs"]
mod tests;
