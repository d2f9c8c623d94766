use crate::cfg::SubplotParams;
use crate::error::LayoutError;
use crate::figure::{AxesId, AxesOpts, Figure};
use crate::rect::Rect;

/// How to divide an axis along one direction.
#[derive(Clone, Debug, PartialEq)]
pub enum Split {
    /// `n` equal shares separated by `n - 1` spacing gaps.
    Count(usize),
    /// Explicit shares of the full extent, in layout order, no gaps.
    /// Used as given: not normalized, not checked unless `validate` is called.
    Shares(Vec<f64>),
}

impl Split {
    /// Opt-in strict check: non-zero count, or non-empty positive finite
    /// shares summing to at most one.
    pub fn validate(&self) -> Result<(), LayoutError> {
        match self {
            Split::Count(0) => Err(LayoutError::invalid("split count must be >= 1, got 0")),
            Split::Count(_) => Ok(()),
            Split::Shares(v) if v.is_empty() => {
                Err(LayoutError::invalid("share sequence is empty"))
            }
            Split::Shares(v) => {
                if let Some(bad) = v.iter().find(|s| !(s.is_finite() && **s > 0.0)) {
                    return Err(LayoutError::invalid(format!(
                        "shares must be positive and finite, got {bad}"
                    )));
                }
                let total: f64 = v.iter().sum();
                if total > 1.0 + 1e-9 {
                    return Err(LayoutError::invalid(format!(
                        "shares sum to {total}, exceeding 1"
                    )));
                }
                Ok(())
            }
        }
    }

    /// Segment fractions and the `len - 1` gap fractions between them.
    fn fractions(&self, space: f64) -> Result<(Vec<f64>, Vec<f64>), LayoutError> {
        match self {
            Split::Count(n) => {
                let shares = equal_shares(*n, space)?;
                let gap = shares[0] * space;
                Ok((shares, vec![gap; n - 1]))
            }
            Split::Shares(v) => {
                if v.is_empty() {
                    return Err(LayoutError::invalid("share sequence is empty"));
                }
                Ok((v.clone(), vec![0.0; v.len() - 1]))
            }
        }
    }

    fn short_circuit(&self) -> Result<bool, LayoutError> {
        match self {
            Split::Count(0) => Err(LayoutError::invalid("split count must be >= 1, got 0")),
            Split::Count(1) => Ok(true),
            _ => Ok(false),
        }
    }
}

impl From<usize> for Split {
    fn from(n: usize) -> Self {
        Split::Count(n)
    }
}

impl From<Vec<f64>> for Split {
    fn from(v: Vec<f64>) -> Self {
        Split::Shares(v)
    }
}

impl From<&[f64]> for Split {
    fn from(v: &[f64]) -> Self {
        Split::Shares(v.to_vec())
    }
}

/// `n` equal shares `1 / (n + (n-1)*spacing)`; `n < 2` is an invalid argument.
pub fn equal_shares(n: usize, spacing: f64) -> Result<Vec<f64>, LayoutError> {
    if n < 2 {
        return Err(LayoutError::invalid(format!(
            "equal split needs at least 2 parts, got {n}"
        )));
    }
    let share = 1.0 / (n as f64 + (n - 1) as f64 * spacing);
    Ok(vec![share; n])
}

/// Child rectangles of a vertical split, top to bottom.
///
/// `Count(1)` yields `[rect]`.
pub fn vsplit_rects(rect: Rect, split: &Split, hspace: f64) -> Result<Vec<Rect>, LayoutError> {
    if split.short_circuit()? {
        return Ok(vec![rect]);
    }
    let (shares, gaps) = split.fractions(hspace)?;
    let mut out = Vec::with_capacity(shares.len());
    let mut bottom = rect.top();
    for (i, share) in shares.iter().enumerate() {
        let height = share * rect.height;
        let gap = if i == 0 { 0.0 } else { gaps[i - 1] * rect.height };
        bottom -= height + gap;
        out.push(Rect::new(rect.left, bottom, rect.width, height));
    }
    Ok(out)
}

/// Child rectangles of a horizontal split, left to right.
///
/// `Count(1)` yields `[rect]`.
pub fn hsplit_rects(rect: Rect, split: &Split, wspace: f64) -> Result<Vec<Rect>, LayoutError> {
    if split.short_circuit()? {
        return Ok(vec![rect]);
    }
    let (shares, gaps) = split.fractions(wspace)?;
    let mut out: Vec<Rect> = Vec::with_capacity(shares.len());
    let mut left = rect.left;
    for (i, share) in shares.iter().enumerate() {
        if let Some(prev) = out.last() {
            left += prev.width + gaps[i - 1] * rect.width;
        }
        out.push(Rect::new(left, rect.bottom, share * rect.width, rect.height));
    }
    Ok(out)
}

/// Split `ax` vertically into new regions, ordered top to bottom.
///
/// `hspace` defaults to `cfg.hspace`. `Count(1)` returns `[ax]` untouched;
/// otherwise `ax` has its ticks hidden before the children are created.
pub fn vsplit<F: Figure + ?Sized>(
    fig: &mut F,
    ax: AxesId,
    split: &Split,
    hspace: Option<f64>,
    cfg: &SubplotParams,
    opts: &AxesOpts,
) -> Result<Vec<AxesId>, LayoutError> {
    let rect = fig.rect(ax)?;
    if split.short_circuit()? {
        return Ok(vec![ax]);
    }
    let rects = vsplit_rects(rect, split, hspace.unwrap_or(cfg.hspace))?;
    populate(fig, ax, rects, opts)
}

/// Split `ax` horizontally into new regions, ordered left to right.
///
/// Mirror of `vsplit`; `wspace` defaults to `cfg.wspace`.
pub fn hsplit<F: Figure + ?Sized>(
    fig: &mut F,
    ax: AxesId,
    split: &Split,
    wspace: Option<f64>,
    cfg: &SubplotParams,
    opts: &AxesOpts,
) -> Result<Vec<AxesId>, LayoutError> {
    let rect = fig.rect(ax)?;
    if split.short_circuit()? {
        return Ok(vec![ax]);
    }
    let rects = hsplit_rects(rect, split, wspace.unwrap_or(cfg.wspace))?;
    populate(fig, ax, rects, opts)
}

fn populate<F: Figure + ?Sized>(
    fig: &mut F,
    container: AxesId,
    rects: Vec<Rect>,
    opts: &AxesOpts,
) -> Result<Vec<AxesId>, LayoutError> {
    fig.hide_ticks(container)?;
    let children = rects
        .into_iter()
        .map(|r| fig.add_axes(r, opts))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(container = container.0, children = children.len(), "split");
    Ok(children)
}
