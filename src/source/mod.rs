//! Row sources: the seam in front of the stats backend

mod json;
mod memory;
mod traits;

pub use json::JsonFileSource;
pub use memory::StaticSource;
pub use traits::{JourneySource, SourceError, SourceResult};
