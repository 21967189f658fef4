pub(crate) mod raster;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod svg;
