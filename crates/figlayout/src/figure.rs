//! Host figure boundary.
//!
//! - `Figure`: what a plotting backend must expose so layout operations can
//!   read and create regions (axes). The figure owns every region; layout
//!   code only passes `AxesId` handles around.
//! - `Canvas`: in-memory recording figure. Used by tests, benches and the
//!   CLI, and as a reference for backend adapters.

use crate::cfg::LayoutConfig;
use crate::rect::Rect;
use nalgebra::Vector2;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Opaque handle to a region owned by a host figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AxesId(pub usize);

/// Style options forwarded verbatim to the host when a region is created.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AxesOpts {
    pub label: Option<String>,
    pub props: BTreeMap<String, String>,
}

impl AxesOpts {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            props: BTreeMap::new(),
        }
    }

    /// Builder-style property insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }
}

/// Failures reported by a host figure.
#[derive(Clone, Debug, PartialEq)]
pub enum HostError {
    /// Handle was never issued by this figure.
    UnknownAxes(AxesId),
    /// Handle refers to a region that has been removed.
    Detached(AxesId),
    /// Host refused to create a region at `rect`.
    RejectedRect { rect: Rect, reason: String },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::UnknownAxes(ax) => write!(f, "unknown axes handle {}", ax.0),
            HostError::Detached(ax) => write!(f, "axes {} has been removed", ax.0),
            HostError::RejectedRect { rect, reason } => write!(
                f,
                "rejected rect ({}, {}, {}, {}): {reason}",
                rect.left, rect.bottom, rect.width, rect.height
            ),
        }
    }
}

impl std::error::Error for HostError {}

/// Minimal surface a plotting backend provides to layout code.
pub trait Figure {
    /// Create a new region at `rect` (normalized figure coordinates).
    fn add_axes(&mut self, rect: Rect, opts: &AxesOpts) -> Result<AxesId, HostError>;
    /// Current normalized rectangle of `ax`.
    fn rect(&self, ax: AxesId) -> Result<Rect, HostError>;
    /// Physical figure size in inches `(width, height)`.
    fn size_inches(&self) -> Vector2<f64>;
    /// Turn off ticks and tick labels on all four sides of `ax`.
    fn hide_ticks(&mut self, ax: AxesId) -> Result<(), HostError>;
    /// Detach `ax` from the figure.
    fn remove_axes(&mut self, ax: AxesId) -> Result<(), HostError>;
}

/// One region recorded by `Canvas`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Region {
    pub rect: Rect,
    pub opts: AxesOpts,
    pub ticks_visible: bool,
    pub removed: bool,
}

/// Recording figure: stores regions in creation order, handles are indices.
#[derive(Clone, Debug)]
pub struct Canvas {
    size: Vector2<f64>,
    regions: Vec<Region>,
}

impl Canvas {
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            size: Vector2::new(width_in, height_in),
            regions: Vec::new(),
        }
    }

    pub fn from_config(cfg: &LayoutConfig) -> Self {
        Self::new(cfg.figsize[0], cfg.figsize[1])
    }

    pub fn region(&self, ax: AxesId) -> Option<&Region> {
        self.regions.get(ax.0)
    }

    /// Regions still attached to the figure, in creation order.
    pub fn live(&self) -> impl Iterator<Item = (AxesId, &Region)> + '_ {
        self.regions
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.removed)
            .map(|(i, r)| (AxesId(i), r))
    }

    /// Total number of regions ever created (including removed ones).
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    fn live_mut(&mut self, ax: AxesId) -> Result<&mut Region, HostError> {
        match self.regions.get_mut(ax.0) {
            None => Err(HostError::UnknownAxes(ax)),
            Some(r) if r.removed => Err(HostError::Detached(ax)),
            Some(r) => Ok(r),
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl Figure for Canvas {
    fn add_axes(&mut self, rect: Rect, opts: &AxesOpts) -> Result<AxesId, HostError> {
        if !rect.is_finite() {
            return Err(HostError::RejectedRect {
                rect,
                reason: "non-finite coordinate".into(),
            });
        }
        let id = AxesId(self.regions.len());
        self.regions.push(Region {
            rect,
            opts: opts.clone(),
            ticks_visible: true,
            removed: false,
        });
        Ok(id)
    }

    fn rect(&self, ax: AxesId) -> Result<Rect, HostError> {
        match self.regions.get(ax.0) {
            None => Err(HostError::UnknownAxes(ax)),
            Some(r) if r.removed => Err(HostError::Detached(ax)),
            Some(r) => Ok(r.rect),
        }
    }

    fn size_inches(&self) -> Vector2<f64> {
        self.size
    }

    fn hide_ticks(&mut self, ax: AxesId) -> Result<(), HostError> {
        self.live_mut(ax)?.ticks_visible = false;
        Ok(())
    }

    fn remove_axes(&mut self, ax: AxesId) -> Result<(), HostError> {
        self.live_mut(ax)?.removed = true;
        Ok(())
    }
}
