use crate::{
    eval::frame::Frame,
    foundation::core::Viewport,
    foundation::error::{NightscrollError, NightscrollResult},
    render::svg::frame_to_svg,
    scene::config::SceneConfig,
};

const MAX_DIM: u32 = 16_384;

/// Rasterized frame as premultiplied RGBA8, row-major.
///
/// The scene paints an opaque black page first, so every pixel has alpha 255 and the data is
/// also valid straight-alpha RGBA.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl RasterFrame {
    /// RGBA of the pixel at `(x, y)`, if inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Parse an SVG document and rasterize it at `width x height`.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> NightscrollResult<RasterFrame> {
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(NightscrollError::render(format!(
            "raster size {width}x{height} out of range (1..={MAX_DIM})"
        )));
    }
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| NightscrollError::render(format!("svg parse failed: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| NightscrollError::render("failed to allocate pixmap"))?;
    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&tree, xform, &mut pixmap.as_mut());
    Ok(RasterFrame {
        width,
        height,
        data: pixmap.data().to_vec(),
    })
}

/// Render `frame` through the SVG path and rasterize it at the viewport's pixel size.
#[tracing::instrument(level = "debug", skip_all, fields(width = viewport.width, height = viewport.height))]
pub fn render_frame_rgba(
    scene: &SceneConfig,
    frame: &Frame,
    viewport: Viewport,
) -> NightscrollResult<RasterFrame> {
    let svg = frame_to_svg(scene, frame, viewport)?;
    rasterize_svg(&svg, viewport.width_px(), viewport.height_px())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
