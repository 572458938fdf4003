pub mod jpeg;
pub mod raster;
