//! Filter state and the filter stage of the view pipeline.

mod global;
mod set;
mod stage;

pub use global::*;
pub use set::*;
pub(crate) use stage::apply_filters;
