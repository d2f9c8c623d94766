//! Subplot numbering across figure pages.
//!
//! A `SubplotSequence` hands out subplot slots one at a time for an
//! `nrows x ncols` page, rolling over to a new page when the current one is
//! full. With `transpose`, slots fill the page column by column instead of
//! row by row.

use crate::cfg::SubplotParams;
use crate::error::LayoutError;
use crate::grid::GridSpec;
use crate::rect::Rect;
use serde::Serialize;

/// One yielded subplot position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SubplotSlot {
    /// Page (figure) number.
    pub page: usize,
    /// 1-based count of subplots on this page.
    pub number: usize,
    /// 1-based row-major grid position the subplot occupies.
    pub position: usize,
    /// Slots per page.
    pub per_page: usize,
    pub rect: Rect,
}

impl SubplotSlot {
    /// First slot of its page.
    #[inline]
    pub fn is_first(&self) -> bool {
        self.number == 1
    }

    /// Last slot of its page; the page is complete after this one.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.number == self.per_page
    }
}

/// Infinite iterator of subplot slots; use `take` to bound it.
#[derive(Clone, Debug)]
pub struct SubplotSequence {
    spec: GridSpec,
    transpose: bool,
    params: SubplotParams,
    cells: Vec<Rect>,
    page: usize,
    number: usize,
}

impl SubplotSequence {
    pub fn new(
        nrows: usize,
        ncols: usize,
        transpose: bool,
        params: SubplotParams,
    ) -> Result<Self, LayoutError> {
        let spec = GridSpec::new(nrows, ncols)?;
        let cells = spec.cell_rects(&params)?;
        Ok(Self {
            spec,
            transpose,
            params,
            cells,
            page: 0,
            number: 0,
        })
    }

    /// First page number to hand out (default 0).
    pub fn starting_at(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    #[inline]
    pub fn per_page(&self) -> usize {
        self.spec.nrows() * self.spec.ncols()
    }

    #[inline]
    pub fn params(&self) -> &SubplotParams {
        &self.params
    }

    /// Row-major position of the `number`-th subplot (both 1-based).
    pub fn position_index(&self, number: usize) -> Result<usize, LayoutError> {
        self.check(number)?;
        Ok(self.locate(number))
    }

    /// Positions outside `1..=per_page` are on no edge.
    #[inline]
    pub fn is_top(&self, position: usize) -> bool {
        self.on_page(position) && position <= self.spec.ncols()
    }

    #[inline]
    pub fn is_bottom(&self, position: usize) -> bool {
        self.on_page(position) && position > self.spec.ncols() * (self.spec.nrows() - 1)
    }

    #[inline]
    pub fn is_left(&self, position: usize) -> bool {
        self.on_page(position) && (position - 1) % self.spec.ncols() == 0
    }

    #[inline]
    pub fn is_right(&self, position: usize) -> bool {
        self.on_page(position) && position % self.spec.ncols() == 0
    }

    /// Rectangle of the `number`-th subplot on a page.
    pub fn cell_rect(&self, number: usize) -> Result<Rect, LayoutError> {
        self.check(number)?;
        Ok(self.cells[self.locate(number) - 1])
    }

    #[inline]
    fn on_page(&self, n: usize) -> bool {
        (1..=self.per_page()).contains(&n)
    }

    fn check(&self, n: usize) -> Result<(), LayoutError> {
        if self.on_page(n) {
            return Ok(());
        }
        Err(LayoutError::invalid(format!(
            "subplot number {n} outside 1..={}",
            self.per_page()
        )))
    }

    // `number` must already be in `1..=per_page`.
    fn locate(&self, number: usize) -> usize {
        if !self.transpose {
            return number;
        }
        let (nrows, ncols) = (self.spec.nrows(), self.spec.ncols());
        let k = number - 1;
        (k % nrows) * ncols + k / nrows + 1
    }
}

impl Iterator for SubplotSequence {
    type Item = SubplotSlot;

    fn next(&mut self) -> Option<SubplotSlot> {
        if self.number == self.per_page() {
            self.number = 0;
            self.page += 1;
            tracing::debug!(page = self.page, "new page");
        }
        self.number += 1;
        let position = self.locate(self.number);
        Some(SubplotSlot {
            page: self.page,
            number: self.number,
            position,
            per_page: self.per_page(),
            rect: self.cells[position - 1],
        })
    }
}
