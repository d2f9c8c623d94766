//! Regular grids of axes.
//!
//! - `GridSpec`: pure cell geometry. The default margin box is split into
//!   `nrows` equal rows (`hspace`) and `ncols` equal columns (`wspace`),
//!   top row first.
//! - `Grid`: one region per cell on a `Figure`, addressed by `(row, col)`
//!   with negative indices counting from the end, iterated row- or
//!   column-major, with helpers to merge a whole row/column into one panel.
//!
//! Code cross-refs: `layout::{vsplit_rects, hsplit_rects, merge_axes}`

use crate::cfg::SubplotParams;
use crate::error::LayoutError;
use crate::figure::{AxesId, AxesOpts, Figure};
use crate::layout::{hsplit_rects, merge_axes, vsplit_rects, Split};
use crate::rect::Rect;
use nalgebra::Vector2;
use std::str::FromStr;

/// Figure size used when neither a figure size nor a cell size is given.
pub const DEFAULT_GRID_FIGSIZE: (f64, f64) = (5.0, 3.0);

/// Grid shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    nrows: usize,
    ncols: usize,
}

impl GridSpec {
    pub fn new(nrows: usize, ncols: usize) -> Result<Self, LayoutError> {
        if nrows == 0 || ncols == 0 {
            return Err(LayoutError::invalid(format!(
                "grid needs at least one row and column, got {nrows}x{ncols}"
            )));
        }
        Ok(Self { nrows, ncols })
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Cell rectangles in row-major order.
    pub fn cell_rects(&self, cfg: &SubplotParams) -> Result<Vec<Rect>, LayoutError> {
        let (rows, cols) = self.bands(cfg)?;
        Ok(rows
            .iter()
            .flat_map(|r| {
                cols.iter()
                    .map(move |c| Rect::new(c.left, r.bottom, c.width, r.height))
            })
            .collect())
    }

    /// Rectangle of a single cell; `row`/`col` must be in range.
    pub fn cell_rect(
        &self,
        row: usize,
        col: usize,
        cfg: &SubplotParams,
    ) -> Result<Rect, LayoutError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(LayoutError::invalid(format!(
                "cell ({row}, {col}) outside {}x{} grid",
                self.nrows, self.ncols
            )));
        }
        let (rows, cols) = self.bands(cfg)?;
        Ok(Rect::new(
            cols[col].left,
            rows[row].bottom,
            cols[col].width,
            rows[row].height,
        ))
    }

    fn bands(&self, cfg: &SubplotParams) -> Result<(Vec<Rect>, Vec<Rect>), LayoutError> {
        let outer = cfg.rect();
        let rows = vsplit_rects(outer, &Split::Count(self.nrows), cfg.hspace)?;
        let cols = hsplit_rects(outer, &Split::Count(self.ncols), cfg.wspace)?;
        Ok((rows, cols))
    }
}

/// Resolve a grid figure size in inches.
///
/// Explicit `figsize` wins but must agree with `axsize * (ncols, nrows)`
/// when both are given; `axsize` alone scales by the grid shape.
pub fn figsize_for(
    figsize: Option<Vector2<f64>>,
    axsize: Option<Vector2<f64>>,
    spec: &GridSpec,
) -> Result<Vector2<f64>, LayoutError> {
    let shape = Vector2::new(spec.ncols as f64, spec.nrows as f64);
    match (figsize, axsize) {
        (Some(fs), Some(ax)) => {
            let implied = ax.component_mul(&shape);
            if (fs - implied).amax() > 1e-9 {
                return Err(LayoutError::invalid(format!(
                    "figsize ({}, {}) disagrees with axsize * grid ({}, {})",
                    fs.x, fs.y, implied.x, implied.y
                )));
            }
            Ok(fs)
        }
        (Some(fs), None) => Ok(fs),
        (None, Some(ax)) => Ok(ax.component_mul(&shape)),
        (None, None) => Ok(Vector2::new(DEFAULT_GRID_FIGSIZE.0, DEFAULT_GRID_FIGSIZE.1)),
    }
}

/// Iteration order over grid cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Row,
    Col,
}

impl FromStr for Direction {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Direction::Row),
            "col" => Ok(Direction::Col),
            other => Err(LayoutError::invalid(format!(
                "direction must be 'row' or 'col', got '{other}'"
            ))),
        }
    }
}

impl TryFrom<i64> for Direction {
    type Error = LayoutError;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Direction::Row),
            1 => Ok(Direction::Col),
            other => Err(LayoutError::invalid(format!(
                "direction index must be 0 or 1, got {other}"
            ))),
        }
    }
}

/// Which cells `Grid::merged` joins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span {
    /// First and last cell of a row.
    Row(isize),
    /// First and last cell of a column.
    Col(isize),
    /// Top-left and bottom-right cells.
    All,
}

/// Axes created for every cell of a `GridSpec`.
#[derive(Clone, Debug)]
pub struct Grid {
    spec: GridSpec,
    axes: Vec<AxesId>,
    direction: Direction,
}

impl Grid {
    pub fn new<F: Figure + ?Sized>(
        fig: &mut F,
        spec: GridSpec,
        cfg: &SubplotParams,
        opts: &AxesOpts,
    ) -> Result<Self, LayoutError> {
        let axes = spec
            .cell_rects(cfg)?
            .into_iter()
            .map(|r| fig.add_axes(r, opts))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(nrows = spec.nrows, ncols = spec.ncols, "grid created");
        Ok(Self {
            spec,
            axes,
            direction: Direction::Row,
        })
    }

    #[inline]
    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.spec.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.spec.ncols
    }

    /// Handle at `(row, col)`; negative indices count from the end.
    pub fn get(&self, row: isize, col: isize) -> Option<AxesId> {
        self.slot(row, col).map(|i| self.axes[i])
    }

    /// Replace the handle at `(row, col)`, returning the previous one.
    pub fn set(&mut self, row: isize, col: isize, ax: AxesId) -> Result<AxesId, LayoutError> {
        let i = self.slot(row, col).ok_or_else(|| {
            LayoutError::invalid(format!(
                "cell ({row}, {col}) outside {}x{} grid",
                self.spec.nrows, self.spec.ncols
            ))
        })?;
        Ok(std::mem::replace(&mut self.axes[i], ax))
    }

    #[inline]
    pub fn is_left(&self, col: usize) -> bool {
        col == 0
    }

    #[inline]
    pub fn is_right(&self, col: usize) -> bool {
        col + 1 == self.spec.ncols
    }

    #[inline]
    pub fn is_top(&self, row: usize) -> bool {
        row == 0
    }

    #[inline]
    pub fn is_bottom(&self, row: usize) -> bool {
        row + 1 == self.spec.nrows
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Handles in the current direction's order.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            next: 0,
        }
    }

    /// New region spanning the cells selected by `span`.
    pub fn merged<F: Figure + ?Sized>(
        &self,
        fig: &mut F,
        span: Span,
        opts: &AxesOpts,
    ) -> Result<AxesId, LayoutError> {
        let (first, last) = match span {
            Span::Row(r) => ((r, 0), (r, -1)),
            Span::Col(c) => ((0, c), (-1, c)),
            Span::All => ((0, 0), (-1, -1)),
        };
        let a = self.require(first)?;
        let b = self.require(last)?;
        merge_axes(fig, a, b, opts)
    }

    fn require(&self, (row, col): (isize, isize)) -> Result<AxesId, LayoutError> {
        self.get(row, col).ok_or_else(|| {
            LayoutError::invalid(format!(
                "cell ({row}, {col}) outside {}x{} grid",
                self.spec.nrows, self.spec.ncols
            ))
        })
    }

    fn slot(&self, row: isize, col: isize) -> Option<usize> {
        let r = wrap_index(row, self.spec.nrows)?;
        let c = wrap_index(col, self.spec.ncols)?;
        Some(r * self.spec.ncols + c)
    }
}

fn wrap_index(idx: isize, len: usize) -> Option<usize> {
    let resolved = if idx < 0 {
        len.checked_sub(idx.unsigned_abs())?
    } else {
        idx as usize
    };
    (resolved < len).then_some(resolved)
}

/// Iterator over grid handles, see `Grid::iter`.
pub struct GridIter<'a> {
    grid: &'a Grid,
    next: usize,
}

impl Iterator for GridIter<'_> {
    type Item = AxesId;

    fn next(&mut self) -> Option<AxesId> {
        let (nrows, ncols) = (self.grid.spec.nrows, self.grid.spec.ncols);
        if self.next >= nrows * ncols {
            return None;
        }
        let k = self.next;
        self.next += 1;
        let i = match self.grid.direction {
            Direction::Row => k,
            Direction::Col => (k % nrows) * ncols + k / nrows,
        };
        Some(self.grid.axes[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.grid.axes.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = AxesId;
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Canvas;

    fn grid(nrows: usize, ncols: usize) -> (Canvas, Grid) {
        let mut fig = Canvas::default();
        let g = Grid::new(
            &mut fig,
            GridSpec::new(nrows, ncols).unwrap(),
            &SubplotParams::default(),
            &AxesOpts::default(),
        )
        .unwrap();
        (fig, g)
    }

    #[test]
    fn cells_tile_margin_box() {
        let cfg = SubplotParams::default();
        let cells = GridSpec::new(2, 3).unwrap().cell_rects(&cfg).unwrap();
        assert_eq!(cells.len(), 6);
        let outer = cfg.rect();
        assert!((cells[0].left - outer.left).abs() < 1e-12);
        assert!((cells[0].top() - outer.top()).abs() < 1e-12);
        assert!((cells[5].right() - outer.right()).abs() < 1e-12);
        assert!((cells[5].bottom - outer.bottom).abs() < 1e-12);
        // Same row shares bottom, same column shares left.
        assert_eq!(cells[0].bottom, cells[2].bottom);
        assert_eq!(cells[1].left, cells[4].left);
        let single = GridSpec::new(2, 3).unwrap().cell_rect(1, 1, &cfg).unwrap();
        assert_eq!(single, cells[4]);
    }

    #[test]
    fn one_by_one_is_margin_box() {
        let cfg = SubplotParams::default();
        let cells = GridSpec::new(1, 1).unwrap().cell_rects(&cfg).unwrap();
        assert_eq!(cells, vec![cfg.rect()]);
    }

    #[test]
    fn empty_shape_is_invalid() {
        assert!(GridSpec::new(0, 2).is_err());
        assert!(GridSpec::new(2, 0).is_err());
        assert!(GridSpec::new(2, 2)
            .unwrap()
            .cell_rect(2, 0, &SubplotParams::default())
            .is_err());
    }

    #[test]
    fn negative_indices_and_set() {
        let (_fig, mut g) = grid(2, 3);
        assert_eq!(g.get(-1, -1), g.get(1, 2));
        assert_eq!(g.get(0, -3), g.get(0, 0));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.get(0, -4), None);
        let old = g.set(-1, 0, AxesId(99)).unwrap();
        assert_eq!(g.get(1, 0), Some(AxesId(99)));
        assert_ne!(old, AxesId(99));
        assert!(g.set(5, 0, AxesId(1)).is_err());
    }

    #[test]
    fn iteration_follows_direction() {
        let (_fig, mut g) = grid(2, 3);
        let by_row: Vec<usize> = g.iter().map(|a| a.0).collect();
        assert_eq!(by_row, vec![0, 1, 2, 3, 4, 5]);
        g.set_direction("col".parse().unwrap());
        let by_col: Vec<usize> = (&g).into_iter().map(|a| a.0).collect();
        assert_eq!(by_col, vec![0, 3, 1, 4, 2, 5]);
        assert_eq!(g.iter().len(), 6);
    }

    #[test]
    fn direction_parsing() {
        assert_eq!(Direction::try_from(0i64).unwrap(), Direction::Row);
        assert_eq!(Direction::try_from(1i64).unwrap(), Direction::Col);
        assert!(Direction::try_from(2i64).is_err());
        assert!("diag".parse::<Direction>().is_err());
    }

    #[test]
    fn edge_predicates() {
        let (_fig, g) = grid(3, 2);
        assert!(g.is_top(0) && !g.is_top(1));
        assert!(g.is_bottom(2) && !g.is_bottom(1));
        assert!(g.is_left(0) && !g.is_left(1));
        assert!(g.is_right(1) && !g.is_right(0));
    }

    #[test]
    fn merged_spans() {
        let (mut fig, g) = grid(2, 2);
        let opts = AxesOpts::default();
        let cfg = SubplotParams::default();
        let all = g.merged(&mut fig, Span::All, &opts).unwrap();
        assert!(fig.rect(all).unwrap().approx_eq(&cfg.rect(), 1e-12));

        let row = g.merged(&mut fig, Span::Row(-1), &opts).unwrap();
        let r = fig.rect(row).unwrap();
        let bottom_left = fig.rect(g.get(1, 0).unwrap()).unwrap();
        assert!((r.width - cfg.rect().width).abs() < 1e-12);
        assert_eq!(r.bottom, bottom_left.bottom);
        assert!((r.height - bottom_left.height).abs() < 1e-12);

        let col = g.merged(&mut fig, Span::Col(1), &opts).unwrap();
        let c = fig.rect(col).unwrap();
        assert!((c.height - cfg.rect().height).abs() < 1e-12);
        assert!((c.right() - cfg.right).abs() < 1e-12);

        assert!(g.merged(&mut fig, Span::Row(4), &opts).is_err());
    }

    #[test]
    fn figsize_resolution() {
        let spec = GridSpec::new(2, 3).unwrap();
        let ax = Vector2::new(2.0, 1.5);
        assert_eq!(
            figsize_for(None, Some(ax), &spec).unwrap(),
            Vector2::new(6.0, 3.0)
        );
        assert_eq!(
            figsize_for(Some(Vector2::new(6.0, 3.0)), Some(ax), &spec).unwrap(),
            Vector2::new(6.0, 3.0)
        );
        assert!(figsize_for(Some(Vector2::new(7.0, 3.0)), Some(ax), &spec).is_err());
        assert_eq!(
            figsize_for(None, None, &spec).unwrap(),
            Vector2::new(5.0, 3.0)
        );
    }
}
