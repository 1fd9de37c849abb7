//! Board primitives.
//!
//! - [`coord`]: 1-based `(column, row)` coordinates and the dark-square mask.
//! - [`piece`]: sides, ranks and the promotion rule.
//! - [`board`]: the fixed 8x8 grid, change-set overlays and its persisted shape.

pub mod board;
pub mod coord;
pub mod piece;
