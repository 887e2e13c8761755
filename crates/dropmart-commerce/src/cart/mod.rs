//! Cart module.
//!
//! Contains the selection set and the derived cart summary.

mod selection;
mod summary;

pub use selection::Selection;
pub use summary::{summarize, CartSummary};
