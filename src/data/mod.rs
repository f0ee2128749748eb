//! Data module - sample file loading and the time-indexed series

mod loader;
mod series;

pub use loader::SampleLoader;
pub use series::SampleSeries;
