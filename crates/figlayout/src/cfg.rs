//! Layout defaults passed explicitly into every operation.
//!
//! Policy
//! - No ambient global state: callers hold a `SubplotParams` (or a full
//!   `LayoutConfig`) and hand it to the operations that need defaults.
//! - Default values follow the common plotting convention for subplot
//!   margins and spacing.

use crate::rect::Rect;
use serde::{Deserialize, Serialize};

/// Default subplot margins (figure fractions) and spacing.
///
/// `wspace`/`hspace` are expressed as a fraction of the average axis
/// width/height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubplotParams {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub wspace: f64,
    pub hspace: f64,
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self {
            left: 0.125,
            right: 0.9,
            bottom: 0.11,
            top: 0.88,
            wspace: 0.2,
            hspace: 0.2,
        }
    }
}

impl SubplotParams {
    /// Margin box as `(left, bottom, right - left, top - bottom)`.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_edges(self.left, self.bottom, self.right, self.top)
    }
}

/// Figure-level configuration: physical size plus subplot defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Figure size in inches `[width, height]`.
    pub figsize: [f64; 2],
    pub subplot: SubplotParams,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            figsize: [6.4, 4.8],
            subplot: SubplotParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_margin_rect() {
        let r = SubplotParams::default().rect();
        assert!(r.approx_eq(&Rect::new(0.125, 0.11, 0.775, 0.77), 1e-12));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: LayoutConfig =
            serde_json::from_str(r#"{"subplot": {"hspace": 0.5}}"#).unwrap();
        assert_eq!(cfg.figsize, [6.4, 4.8]);
        assert_eq!(cfg.subplot.hspace, 0.5);
        assert_eq!(cfg.subplot.wspace, 0.2);
        assert_eq!(cfg.subplot.left, 0.125);
    }
}
