//! Flat re-export of every layout operation.
//!
//! Backend adapters and the CLI import from here so call sites read the
//! same regardless of which module an operation lives in.

// Geometry and configuration
pub use crate::cfg::{LayoutConfig, SubplotParams};
pub use crate::rect::Rect;
// Host boundary
pub use crate::error::LayoutError;
pub use crate::figure::{AxesId, AxesOpts, Canvas, Figure, HostError, Region};
// Axis operations
pub use crate::layout::{
    add_axes, equal_shares, get_rect, get_size_inches, hsplit, hsplit_rects, merge_axes,
    replace_axes, vsplit, vsplit_rects, Split,
};
// Grids and subplot sequences
pub use crate::grid::{figsize_for, Direction, Grid, GridIter, GridSpec, Span, DEFAULT_GRID_FIGSIZE};
pub use crate::sequence::{SubplotSequence, SubplotSlot};
