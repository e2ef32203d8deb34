//! Reference rendering collaborator: SVG documents and their rasterization.

/// usvg/resvg rasterization.
pub mod raster;
/// Frame to SVG.
pub mod svg;
