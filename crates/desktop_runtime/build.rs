use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManifest {
    name: String,
    title: String,
    glyph: String,
    #[serde(default)]
    dock: bool,
    #[serde(default)]
    desktop_icon: bool,
    #[serde(default)]
    open_on_boot: bool,
    #[serde(default)]
    body: String,
    bounds: WindowDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowCatalog {
    schema_version: u32,
    #[serde(rename = "window")]
    windows: Vec<WindowManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopConfig {
    schema_version: u32,
    shell: toml::Table,
    #[serde(default)]
    wm: toml::Table,
}

fn read_toml<T: for<'de> Deserialize<'de>>(path: &Path) -> T {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    toml::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

fn check_schema(path: &Path, found: u32) {
    if found != 1 {
        panic!(
            "schema mismatch in {}: expected 1 found {}",
            path.display(),
            found
        );
    }
}

fn validate_catalog(path: &Path, catalog: &WindowCatalog) {
    check_schema(path, catalog.schema_version);
    let mut seen = BTreeSet::new();
    for window in &catalog.windows {
        if window.name.is_empty()
            || !window
                .name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            panic!(
                "invalid window name `{}` in {}: use lowercase letters, digits and `-`",
                window.name,
                path.display()
            );
        }
        if !seen.insert(window.name.as_str()) {
            panic!("duplicate window `{}` in {}", window.name, path.display());
        }
        if window.bounds.width <= 0 || window.bounds.height <= 0 {
            panic!(
                "window `{}` in {} needs a positive default size",
                window.name,
                path.display()
            );
        }
    }
}

fn emit(out_dir: &Path, file: &str, doc: &str, constant: &str, json: String) {
    let generated = format!("/// {doc}\npub const {constant}: &str = r##\"{json}\"##;\n");
    let out_file = out_dir.join(file);
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));

    let catalog_path = crate_root.join("apps.manifest.toml");
    let catalog: WindowCatalog = read_toml(&catalog_path);
    validate_catalog(&catalog_path, &catalog);
    emit(
        &out_dir,
        "window_catalog_generated.rs",
        "Build-time generated window catalog JSON.",
        "WINDOW_CATALOG_JSON",
        serde_json::to_string_pretty(&catalog).expect("serialize window catalog"),
    );

    let config_path = crate_root.join("desktop.toml");
    let config: DesktopConfig = read_toml(&config_path);
    check_schema(&config_path, config.schema_version);
    emit(
        &out_dir,
        "desktop_config_generated.rs",
        "Build-time generated desktop shell configuration JSON.",
        "DESKTOP_CONFIG_JSON",
        serde_json::to_string_pretty(&config).expect("serialize desktop config"),
    );
}
