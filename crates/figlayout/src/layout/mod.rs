//! Axis rectangle geometry: read, nest, merge and split regions.
//!
//! Purpose
//! - Compute axis bounding boxes in normalized figure coordinates and turn
//!   them into new regions on the owning `Figure`.
//! - Keep the arithmetic in pure `*_rects` helpers so it can be tested and
//!   reused (grids, sequences) without a host.
//!
//! Side effects
//! - Every operation that returns an `AxesId` creates a new region; inputs
//!   keep their rectangles. Splitting hides the input's ticks so it acts as
//!   a placeholder container.
//!
//! Code cross-refs: `Rect`, `SubplotParams`, `Figure`

mod ops;
mod split;

pub use ops::{add_axes, get_rect, get_size_inches, merge_axes, replace_axes};
pub use split::{equal_shares, hsplit, hsplit_rects, vsplit, vsplit_rects, Split};
