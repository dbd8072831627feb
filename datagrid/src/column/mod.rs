//! Column definitions and the registry that resolves them by id.

mod definition;
mod registry;

pub use definition::*;
pub use registry::*;
