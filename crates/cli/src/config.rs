use anyhow::{Context, Result};
use figlayout::LayoutConfig;
use std::fs;
use std::path::Path;

/// Load a layout config from JSON; `None` yields the defaults.
pub fn load(path: Option<&Path>) -> Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: LayoutConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::info!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_path_gives_defaults() {
        assert_eq!(load(None).unwrap(), LayoutConfig::default());
    }

    #[test]
    fn reads_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(&path, r#"{"figsize": [8.0, 6.0], "subplot": {"wspace": 0.05}}"#).unwrap();
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.figsize, [8.0, 6.0]);
        assert_eq!(cfg.subplot.wspace, 0.05);
        assert_eq!(cfg.subplot.hspace, 0.2);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        let err = load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }
}
