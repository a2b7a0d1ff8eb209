pub mod dataset;
pub mod loader;
pub mod schema;

pub use dataset::Dataset;
pub use loader::{load, load_slice, LoadError};
