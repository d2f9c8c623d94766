//! Axis layout helpers over a host figure.
//!
//! Rectangles are normalized figure coordinates `(left, bottom, width, height)`.
//! The host plotting backend sits behind the `Figure` trait; `Canvas` is an
//! in-memory implementation.
//!
//! API Policy
//! - Defaults (margins, spacing) are explicit `SubplotParams` values, never
//!   global state.
//! - Inputs are accepted permissively; only split counts and grid shapes are
//!   validated. Host failures pass through as `LayoutError::Host`.

pub mod api;
pub mod cfg;
pub mod error;
pub mod figure;
pub mod grid;
pub mod layout;
pub mod rect;
pub mod sequence;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{LayoutConfig, SubplotParams};
pub use error::LayoutError;
pub use figure::{AxesId, AxesOpts, Canvas, Figure, HostError};
pub use rect::Rect;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{LayoutConfig, SubplotParams};
    pub use crate::figure::{AxesId, AxesOpts, Canvas, Figure};
    pub use crate::grid::{Direction, Grid, GridSpec, Span};
    pub use crate::layout::{hsplit, merge_axes, vsplit, Split};
    pub use crate::rect::Rect;
    pub use nalgebra::Vector2 as Vec2;
}
