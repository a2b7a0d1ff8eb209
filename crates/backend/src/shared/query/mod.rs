pub mod engine;

pub use engine::{aggregate, QueryError};
