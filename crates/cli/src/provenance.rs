use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What went into one placement run, recorded next to its output.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    /// Display form of every kernel diagnostic.
    pub diagnostics: Vec<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            diagnostics: Vec::new(),
        }
    }
}

/// Write `<stem>.provenance.json` next to `artifact`.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let doc = json!({
        "code_rev": current_git_rev(),
        "railkit": railkit::VERSION,
        "command": payload.command,
        "params": payload.params,
        "diagnostics": payload.diagnostics,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `run.csv` -> `run.provenance.json` in the same directory.
fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or(Cow::Borrowed("placements"), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit of the running build. First non-empty of: `GIT_COMMIT` baked in at
/// build time, `GIT_COMMIT` at run time, the checkout's `HEAD`.
pub fn current_git_rev() -> String {
    [option_env!("GIT_COMMIT").map(String::from), std::env::var("GIT_COMMIT").ok()]
        .into_iter()
        .flatten()
        .find(|rev| !rev.is_empty())
        .or_else(checkout_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn checkout_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_name_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/site/deck.csv"));
        assert_eq!(derived, Path::new("/tmp/site/deck.provenance.json"));
    }

    #[test]
    fn sidecar_name_without_extension() {
        let derived = provenance_path(Path::new("out/layout"));
        assert_eq!(derived, Path::new("out/layout.provenance.json"));
    }

    #[test]
    fn git_rev_is_never_empty() {
        assert!(!current_git_rev().is_empty());
    }

    #[test]
    fn sidecar_records_params_and_diagnostics() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("run.csv");
        fs::write(&artifact, "kind,x,y,z,dx,dy,distance\n").unwrap();
        let mut payload = Payload::new("place", json!({"post_spacing": 50.0}));
        payload.diagnostics.push("bay 3 skipped".to_string());
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "place");
        assert_eq!(parsed["params"]["post_spacing"], 50.0);
        assert_eq!(parsed["diagnostics"][0], "bay 3 skipped");
    }
}
