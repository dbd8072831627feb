//! Sort state and the sort stage of the view pipeline.

mod stage;
mod state;

pub(crate) use stage::apply_sort;
pub use state::*;
