//! The editing surface: raw buffer and fold state.

mod buffer;
mod folds;

pub use buffer::{Cursor, Direction, RawBuffer};
pub use folds::FoldState;
