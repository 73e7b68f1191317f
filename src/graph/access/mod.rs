//! Per-invocation bookkeeping shared by the traversal-based algorithms.

pub mod colors;

pub use colors::{Color, ColorMap};
