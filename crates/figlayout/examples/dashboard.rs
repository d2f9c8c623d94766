//! Dashboard layout walk-through on an in-memory canvas.
//!
//! Builds a 3x3 grid, merges the top row into a single header panel, splits
//! the centre cell into a stacked pair and the bottom-right cell into three
//! columns, then prints every live region.
//!
//! Run: `cargo run -p figlayout --example dashboard`

use figlayout::api::*;

fn main() -> Result<(), LayoutError> {
    let cfg = LayoutConfig::default();
    let mut fig = Canvas::from_config(&cfg);

    let grid = Grid::new(
        &mut fig,
        GridSpec::new(3, 3)?,
        &cfg.subplot,
        &AxesOpts::default(),
    )?;
    let header = grid.merged(&mut fig, Span::Row(0), &AxesOpts::labeled("header"))?;
    for col in 0..3 {
        if let Some(ax) = grid.get(0, col) {
            fig.remove_axes(ax)?;
        }
    }

    let centre = grid.get(1, 1).ok_or(LayoutError::InvalidArgument {
        reason: "centre cell".into(),
    })?;
    let stacked = vsplit(
        &mut fig,
        centre,
        &Split::from(vec![0.7, 0.3]),
        None,
        &cfg.subplot,
        &AxesOpts::labeled("stack"),
    )?;

    let corner = grid.get(-1, -1).ok_or(LayoutError::InvalidArgument {
        reason: "corner cell".into(),
    })?;
    let cols = hsplit(
        &mut fig,
        corner,
        &Split::Count(3),
        Some(0.1),
        &cfg.subplot,
        &AxesOpts::labeled("strip"),
    )?;

    let inset = add_axes(
        &mut fig,
        header,
        Some(Rect::new(0.7, 0.6, 0.25, 0.3)),
        &cfg.subplot,
        &AxesOpts::labeled("inset"),
    )?;

    let size = get_size_inches(&fig, header)?;
    println!("header: {:.2} x {:.2} in", size.x, size.y);
    println!(
        "stacked={} strip={} inset={}",
        stacked.len(),
        cols.len(),
        inset.0
    );
    for (id, region) in fig.live() {
        let r = region.rect;
        println!(
            "{:>3} {:<8} l={:.3} b={:.3} w={:.3} h={:.3} ticks={}",
            id.0,
            region.opts.label.as_deref().unwrap_or("-"),
            r.left,
            r.bottom,
            r.width,
            r.height,
            region.ticks_visible
        );
    }
    Ok(())
}
