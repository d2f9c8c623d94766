use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use figlayout::api::*;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Compute axis layouts in normalized figure coordinates")]
struct Cmd {
    /// Layout config JSON (figsize, subplot margins and spacing)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write JSON here plus a provenance sidecar instead of printing it
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Cell rectangles of an R x C grid
    Grid {
        #[arg(long, default_value_t = 1)]
        rows: usize,
        #[arg(long, default_value_t = 1)]
        cols: usize,
        /// Order cells column by column
        #[arg(long)]
        transpose: bool,
        /// Merge cells into one panel: `row:N`, `col:N` or `all`
        #[arg(long)]
        merge: Option<String>,
    },
    /// Split one rectangle into child rectangles
    Split {
        /// Parent rectangle `left,bottom,width,height`
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        rect: Vec<f64>,
        /// Stack parts top to bottom (default)
        #[arg(long, conflicts_with = "horizontal")]
        vertical: bool,
        /// Lay parts out left to right
        #[arg(long)]
        horizontal: bool,
        /// Number of equal parts
        #[arg(long, conflicts_with = "shares")]
        count: Option<usize>,
        /// Explicit shares of the extent, e.g. `0.7,0.3`
        #[arg(long, value_delimiter = ',')]
        shares: Vec<f64>,
        /// Gap as a fraction of the average part; defaults from config
        #[arg(long)]
        space: Option<f64>,
        /// Reject empty, non-positive or over-full share lists
        #[arg(long)]
        strict: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug)]
enum Orient {
    Vertical,
    Horizontal,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = config::load(cmd.config.as_deref())?;
    match cmd.action {
        Action::Grid {
            rows,
            cols,
            transpose,
            merge,
        } => {
            let params = json!({"rows": rows, "cols": cols, "transpose": transpose, "merge": merge});
            let doc = grid(&cfg, rows, cols, transpose, merge.as_deref())?;
            emit("grid", &doc, params, &cfg, cmd.out.as_deref())
        }
        Action::Split {
            rect,
            vertical: _,
            horizontal,
            count,
            shares,
            space,
            strict,
        } => {
            let orient = if horizontal {
                Orient::Horizontal
            } else {
                Orient::Vertical
            };
            let params = json!({
                "rect": rect,
                "orient": format!("{orient:?}"),
                "count": count,
                "shares": shares,
                "space": space,
                "strict": strict
            });
            let split = match count {
                Some(n) => Split::Count(n),
                None if !shares.is_empty() => Split::Shares(shares),
                None => bail!("one of --count or --shares is required"),
            };
            let doc = split_rect(&cfg, &rect, orient, &split, space, strict)?;
            emit("split", &doc, params, &cfg, cmd.out.as_deref())
        }
        Action::Report => report(),
    }
}

fn grid(
    cfg: &LayoutConfig,
    rows: usize,
    cols: usize,
    transpose: bool,
    merge: Option<&str>,
) -> Result<Value> {
    tracing::info!(rows, cols, transpose, merge, "grid");
    let mut fig = Canvas::from_config(cfg);
    let mut grid = Grid::new(
        &mut fig,
        GridSpec::new(rows, cols)?,
        &cfg.subplot,
        &AxesOpts::default(),
    )?;
    if transpose {
        grid.set_direction(Direction::Col);
    }
    let cells = grid
        .iter()
        .map(|ax| -> Result<Value, HostError> {
            Ok(json!({"axes": ax.0, "rect": fig.rect(ax)?}))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let merged = match merge {
        Some(spec) => {
            let ax = grid.merged(&mut fig, parse_span(spec)?, &AxesOpts::default())?;
            Some(get_rect(&fig, ax)?)
        }
        None => None,
    };
    Ok(json!({
        "figsize": cfg.figsize,
        "cells": cells,
        "merged": merged,
    }))
}

fn split_rect(
    cfg: &LayoutConfig,
    rect: &[f64],
    orient: Orient,
    split: &Split,
    space: Option<f64>,
    strict: bool,
) -> Result<Value> {
    let &[left, bottom, width, height] = rect else {
        bail!("--rect needs exactly 4 values, got {}", rect.len());
    };
    if strict {
        split.validate()?;
    }
    tracing::info!(?orient, ?split, ?space, "split");
    let mut fig = Canvas::from_config(cfg);
    let parent = fig.add_axes(Rect::new(left, bottom, width, height), &AxesOpts::default())?;
    let opts = AxesOpts::default();
    let children = match orient {
        Orient::Vertical => vsplit(&mut fig, parent, split, space, &cfg.subplot, &opts)?,
        Orient::Horizontal => hsplit(&mut fig, parent, split, space, &cfg.subplot, &opts)?,
    };
    let rects = children
        .iter()
        .map(|ax| get_rect(&fig, *ax))
        .collect::<Result<Vec<_>, _>>()?;
    let sizes = children
        .iter()
        .map(|ax| get_size_inches(&fig, *ax).map(|s| [s.x, s.y]))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(json!({
        "parent": get_rect(&fig, parent)?,
        "children": rects,
        "size_inches": sizes,
    }))
}

fn parse_span(spec: &str) -> Result<Span> {
    if spec == "all" {
        return Ok(Span::All);
    }
    let (kind, idx) = spec
        .split_once(':')
        .with_context(|| format!("merge spec '{spec}' is not row:N, col:N or all"))?;
    let idx: isize = idx
        .parse()
        .with_context(|| format!("merge index '{idx}' is not an integer"))?;
    match kind {
        "row" => Ok(Span::Row(idx)),
        "col" => Ok(Span::Col(idx)),
        other => bail!("merge kind '{other}' must be row or col"),
    }
}

fn emit(
    command: &str,
    doc: &Value,
    params: Value,
    cfg: &LayoutConfig,
    out: Option<&Path>,
) -> Result<()> {
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(doc)?);
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = provenance::Payload::new(command, params, *cfg);
    let prov = provenance::write_sidecar(out, &payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote layout");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": figlayout::VERSION,
        "defaults": LayoutConfig::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cmd::command().debug_assert();
    }

    #[test]
    fn span_specs() {
        assert_eq!(parse_span("all").unwrap(), Span::All);
        assert_eq!(parse_span("row:-1").unwrap(), Span::Row(-1));
        assert_eq!(parse_span("col:2").unwrap(), Span::Col(2));
        assert!(parse_span("diag:1").is_err());
        assert!(parse_span("row").is_err());
        assert!(parse_span("row:x").is_err());
    }

    #[test]
    fn split_reports_children_top_down() {
        let cfg = LayoutConfig::default();
        let doc = split_rect(
            &cfg,
            &[0.1, 0.1, 0.8, 0.8],
            Orient::Vertical,
            &Split::Count(3),
            Some(0.1),
            false,
        )
        .unwrap();
        let kids = doc["children"].as_array().unwrap();
        assert_eq!(kids.len(), 3);
        let first_bottom = kids[0]["bottom"].as_f64().unwrap();
        assert!((first_bottom - 0.65).abs() < 1e-12);
    }

    #[test]
    fn split_strict_rejects_overfull_shares() {
        let cfg = LayoutConfig::default();
        let over = Split::Shares(vec![0.8, 0.8]);
        let rect = [0.0, 0.0, 1.0, 1.0];
        assert!(split_rect(&cfg, &rect, Orient::Horizontal, &over, None, true).is_err());
        assert!(split_rect(&cfg, &rect, Orient::Horizontal, &over, None, false).is_ok());
        assert!(split_rect(&cfg, &[0.0, 0.0], Orient::Horizontal, &over, None, false).is_err());
    }

    #[test]
    fn grid_merge_all_spans_margins() {
        let cfg = LayoutConfig::default();
        let doc = grid(&cfg, 2, 2, true, Some("all")).unwrap();
        assert_eq!(doc["cells"].as_array().unwrap().len(), 4);
        // Column-major order: second cell is the bottom-left one.
        assert_eq!(doc["cells"][1]["axes"], 2);
        let merged: Rect = serde_json::from_value(doc["merged"].clone()).unwrap();
        assert!(merged.approx_eq(&cfg.subplot.rect(), 1e-12));
    }

    #[test]
    fn emit_writes_artifact_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("grid.json");
        let doc = json!({"cells": []});
        let mut cfg = LayoutConfig::default();
        cfg.subplot.wspace = 0.05;
        emit("grid", &doc, json!({"rows": 1}), &cfg, Some(out.as_path())).unwrap();
        assert!(out.exists());
        let sidecar = dir.path().join("nested").join("grid.provenance.json");
        let prov: Value = serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["config"]["subplot"]["wspace"], 0.05);
    }

    #[test]
    fn command_name_matches_binary() {
        use clap::CommandFactory;
        assert_eq!(Cmd::command().get_name(), env!("CARGO_BIN_NAME"));
    }

    #[test]
    fn orientation_flags() {
        let parsed = Cmd::try_parse_from([
            "cli", "split", "--rect", "0,0,1,1", "--horizontal", "--count", "2",
        ])
        .unwrap();
        assert!(matches!(
            parsed.action,
            Action::Split { horizontal: true, vertical: false, .. }
        ));
        let default = Cmd::try_parse_from(["cli", "split", "--rect", "0,0,1,1", "--count", "2"])
            .unwrap();
        assert!(matches!(default.action, Action::Split { horizontal: false, .. }));
        assert!(Cmd::try_parse_from([
            "cli", "split", "--rect", "0,0,1,1", "--vertical", "--horizontal", "--count", "2",
        ])
        .is_err());
    }
}
