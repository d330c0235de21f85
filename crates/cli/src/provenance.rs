use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsStr;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }
}

/// Provenance block shared by sidecars and the `report` command.
pub fn document(params: Value, inputs: &[String], outputs: &[String]) -> Value {
    json!({
        "code_rev": code_rev(),
        "engine": format!("filletpath {}", filletpath::VERSION),
        "inputs": inputs,
        "params": params,
        "outputs": outputs
    })
}

/// Write the provenance document for `artifact` next to it and return its path.
///
/// The document also records the source location of the call.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let caller = Location::caller();
    let outputs = [artifact.to_string_lossy().into_owned()];
    let mut doc = document(payload.params, &payload.inputs, &outputs);
    doc["callsite"] = json!({ "file": caller.file(), "line": caller.line() });

    let target = sidecar_path(artifact);
    if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(&target, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", target.display()))?;
    Ok(target)
}

/// `path.csv` -> `path.provenance.json` in the same directory.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact.file_stem().unwrap_or(OsStr::new("artifact"));
    artifact.with_file_name(format!("{}.provenance.json", stem.to_string_lossy()))
}

/// Commit of the running code: `GIT_COMMIT` if set, else `git rev-parse HEAD`.
pub fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}
