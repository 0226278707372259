//! Drives the searcher over the full number range

mod builder;
mod map;
mod observer;

pub use builder::{BuildConfig, SolutionMapBuilder, build};
pub use map::{SolutionMap, Summary};
pub use observer::{LogObserver, NoopObserver, ProgressObserver};
