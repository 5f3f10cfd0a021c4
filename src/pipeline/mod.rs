pub mod driver;
pub mod engine;
pub mod output;
pub mod profile;
pub mod raster;
