//! Normalized figure rectangles.
//!
//! - `Rect`: `(left, bottom, width, height)` in figure fractions, origin at
//!   the lower-left corner. Bounds in `[0, 1]` are a convention of the host
//!   coordinate system and are not enforced here.
//!
//! References
//! - Code cross-refs: `layout::{merge_axes, vsplit, hsplit}`, `grid::GridSpec`

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in normalized figure coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    /// Build from edge coordinates instead of extents.
    #[inline]
    pub fn from_edges(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self::new(left, bottom, right - left, top - bottom)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.bottom + self.height
    }

    /// Lower-left corner.
    #[inline]
    pub fn origin(&self) -> Vector2<f64> {
        Vector2::new(self.left, self.bottom)
    }

    /// `(width, height)` as a vector.
    #[inline]
    pub fn size(&self) -> Vector2<f64> {
        Vector2::new(self.width, self.height)
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_edges(
            self.left.min(other.left),
            self.bottom.min(other.bottom),
            self.right().max(other.right()),
            self.top().max(other.top()),
        )
    }

    /// Map `frac`, given in fractions of `self`, to absolute figure coordinates.
    ///
    /// `left = l0 + w0*lr`, `bottom = b0 + h0*br`, `width = w0*wr`, `height = h0*hr`.
    pub fn nest(&self, frac: &Rect) -> Rect {
        let origin = self.origin() + self.size().component_mul(&frac.origin());
        let size = self.size().component_mul(&frac.size());
        Rect::new(origin.x, origin.y, size.x, size.y)
    }

    /// All four components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Componentwise max-abs comparison.
    pub fn approx_eq(&self, other: &Rect, eps: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.left, self.bottom, self.width, self.height]
    }
}

impl From<[f64; 4]> for Rect {
    fn from(v: [f64; 4]) -> Self {
        Rect::new(v[0], v[1], v[2], v[3])
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    fn from((left, bottom, width, height): (f64, f64, f64, f64)) -> Self {
        Rect::new(left, bottom, width, height)
    }
}
