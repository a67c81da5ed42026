use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct GuardCopy {
    headline: String,
    body: String,
    open_button: String,
    manual_heading: String,
    mobile_label: String,
    mobile_steps: String,
    desktop_label: String,
    desktop_steps: String,
    dismiss_button: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct GuardManifest {
    schema_version: u32,
    dismissal_key: String,
    user_agent_tokens: Vec<String>,
    bridge_globals: Vec<String>,
    copy: GuardCopy,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("guard.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: GuardManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    if manifest.schema_version != 1 {
        panic!(
            "guard manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    if manifest.dismissal_key.trim().is_empty() {
        panic!("guard manifest in {} has an empty dismissal_key", path.display());
    }
    if manifest.user_agent_tokens.is_empty() && manifest.bridge_globals.is_empty() {
        panic!("guard manifest in {} declares no detection signals", path.display());
    }
    for token in &manifest.user_agent_tokens {
        if token.trim().is_empty() {
            panic!("guard manifest in {} has an empty user agent token", path.display());
        }
    }
    for global in &manifest.bridge_globals {
        if global.trim().is_empty() {
            panic!("guard manifest in {} has an empty bridge global", path.display());
        }
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize guard manifest");
    let generated = format!(
        "/// Build-time generated guard manifest JSON.\n\
pub const GUARD_MANIFEST_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("guard_manifest_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
