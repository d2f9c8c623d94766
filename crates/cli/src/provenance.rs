use anyhow::{Context, Result};
use figlayout::LayoutConfig;
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced a layout artifact: the subcommand, its arguments, and the
/// resolved config (file values merged over defaults).
pub struct Payload {
    pub command: String,
    pub params: Value,
    pub config: LayoutConfig,
}

impl Payload {
    pub fn new(command: impl Into<String>, params: Value, config: LayoutConfig) -> Self {
        Self {
            command: command.into(),
            params,
            config,
        }
    }

    fn to_doc(&self, artifact: &Path, callsite: &Location<'_>) -> Value {
        json!({
            "code_rev": current_git_rev(),
            "version": figlayout::VERSION,
            "callsite": format!("{}:{}", callsite.file(), callsite.line()),
            "command": self.command,
            "params": self.params,
            "config": self.config,
            "outputs": [artifact.to_string_lossy()]
        })
    }
}

/// Write the `<stem>.provenance.json` sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: &Payload) -> Result<PathBuf> {
    let doc = payload.to_doc(artifact, Location::caller());
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Sidecar lives next to the artifact; extensions are dropped from the stem.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "layout".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit of the running build: compile-time `GIT_COMMIT`, then runtime
/// `GIT_COMMIT`, then `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    let from_build = option_env!("GIT_COMMIT").map(str::to_owned);
    let from_env = std::env::var("GIT_COMMIT").ok();
    from_build
        .into_iter()
        .chain(from_env)
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_layout() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/layouts/grid.json")),
            Path::new("/tmp/layouts/grid.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("split")),
            Path::new("split.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_resolved_config() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("split.json");
        fs::write(&artifact, "{}").unwrap();
        let mut config = LayoutConfig::default();
        config.subplot.hspace = 0.45;
        config.figsize = [9.0, 3.0];
        let payload = Payload::new("split", json!({"count": 3}), config);
        let path = write_sidecar(&artifact, &payload).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["command"], "split");
        assert_eq!(doc["params"]["count"], 3);
        assert_eq!(doc["config"]["subplot"]["hspace"], 0.45);
        assert_eq!(doc["config"]["figsize"][0], 9.0);
        assert_eq!(doc["outputs"][0], artifact.to_string_lossy().as_ref());
        assert!(doc["callsite"].as_str().unwrap().contains("provenance.rs:"));
    }
}
