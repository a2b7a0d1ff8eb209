pub mod record;

pub use record::{fields, OrderRecord};
