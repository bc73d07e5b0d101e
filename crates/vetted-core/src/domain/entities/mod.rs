// Entities
pub mod common;
pub mod field;
pub mod request;
pub mod selection;

pub use common::*;
pub use field::*;
pub use request::*;
pub use selection::*;
