use crate::cfg::SubplotParams;
use crate::error::LayoutError;
use crate::figure::{AxesId, AxesOpts, Figure};
use crate::rect::Rect;
use nalgebra::Vector2;

/// Current normalized rectangle of `ax`.
pub fn get_rect<F: Figure + ?Sized>(fig: &F, ax: AxesId) -> Result<Rect, LayoutError> {
    Ok(fig.rect(ax)?)
}

/// Physical size of `ax` in inches: its fractional extent times the figure size.
pub fn get_size_inches<F: Figure + ?Sized>(
    fig: &F,
    ax: AxesId,
) -> Result<Vector2<f64>, LayoutError> {
    let rect = get_rect(fig, ax)?;
    Ok(fig.size_inches().component_mul(&rect.size()))
}

/// New region at exactly `ax`'s rectangle.
///
/// The original region stays attached; callers wanting swap semantics
/// follow up with `Figure::remove_axes`.
pub fn replace_axes<F: Figure + ?Sized>(
    fig: &mut F,
    ax: AxesId,
    opts: &AxesOpts,
) -> Result<AxesId, LayoutError> {
    let rect = get_rect(fig, ax)?;
    let new = fig.add_axes(rect, opts)?;
    tracing::debug!(old = ax.0, new = new.0, "replace_axes");
    Ok(new)
}

/// New region nested inside `ax`.
///
/// `rect` is in fractions of `ax`'s own rectangle; `None` uses the default
/// subplot margins from `cfg`.
pub fn add_axes<F: Figure + ?Sized>(
    fig: &mut F,
    ax: AxesId,
    rect: Option<Rect>,
    cfg: &SubplotParams,
    opts: &AxesOpts,
) -> Result<AxesId, LayoutError> {
    let parent = get_rect(fig, ax)?;
    let frac = rect.unwrap_or_else(|| cfg.rect());
    let child = parent.nest(&frac);
    let new = fig.add_axes(child, opts)?;
    tracing::debug!(container = ax.0, new = new.0, ?child, "add_axes");
    Ok(new)
}

/// New region covering the bounding-box union of `a` and `b`.
pub fn merge_axes<F: Figure + ?Sized>(
    fig: &mut F,
    a: AxesId,
    b: AxesId,
    opts: &AxesOpts,
) -> Result<AxesId, LayoutError> {
    let merged = get_rect(fig, a)?.union(&get_rect(fig, b)?);
    let new = fig.add_axes(merged, opts)?;
    tracing::debug!(a = a.0, b = b.0, new = new.0, ?merged, "merge_axes");
    Ok(new)
}
