//! Core processing building blocks: crop geometry, resizing, raster ops,
//! colour enhancement, and the square/slide/comic stages. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
