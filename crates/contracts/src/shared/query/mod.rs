pub mod result;
pub mod schema;
pub mod spec;

pub use result::*;
pub use schema::*;
pub use spec::*;
