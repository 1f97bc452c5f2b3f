//! Window catalog and shell configuration embedded at build time.
//!
//! `build.rs` validates `apps.manifest.toml` and `desktop.toml` and re-emits them as JSON; this
//! module decodes that JSON into typed values.

use desktop_wm::{Rect, WmConfig};
use serde::{Deserialize, Serialize};

use crate::error::ShellError;

include!(concat!(env!("OUT_DIR"), "/window_catalog_generated.rs"));
include!(concat!(env!("OUT_DIR"), "/desktop_config_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDefaults {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// One window the shell can show, with its dock/icon presence and default geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowManifest {
    pub name: String,
    pub title: String,
    pub glyph: String,
    #[serde(default)]
    pub dock: bool,
    #[serde(default)]
    pub desktop_icon: bool,
    #[serde(default)]
    pub open_on_boot: bool,
    #[serde(default)]
    pub body: String,
    pub bounds: WindowDefaults,
}

impl WindowManifest {
    pub fn default_bounds(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.bounds.height,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowCatalog {
    pub schema_version: u32,
    #[serde(rename = "window", default)]
    pub windows: Vec<WindowManifest>,
}

impl WindowCatalog {
    pub fn docked(&self) -> impl Iterator<Item = &WindowManifest> {
        self.windows.iter().filter(|w| w.dock)
    }

    pub fn desktop_icons(&self) -> impl Iterator<Item = &WindowManifest> {
        self.windows.iter().filter(|w| w.desktop_icon)
    }

    pub fn open_on_boot(&self) -> impl Iterator<Item = &WindowManifest> {
        self.windows.iter().filter(|w| w.open_on_boot)
    }
}

/// `[shell]` table of `desktop.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Fallback menu bar height used until the rendered bar can be measured.
    pub menu_bar_height: i32,
    /// Inset kept between windows and the viewport edges by the containment pass.
    pub padding: i32,
    pub clock_24_hour: bool,
    /// Shown in the menu bar when no window is active.
    pub title: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            menu_bar_height: 30,
            padding: 12,
            clock_24_hour: false,
            title: "Desktop".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopConfig {
    pub schema_version: u32,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub wm: WmConfig,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            shell: ShellConfig::default(),
            wm: WmConfig::default(),
        }
    }
}

pub fn parse_window_catalog(raw: &str) -> Result<WindowCatalog, ShellError> {
    serde_json::from_str(raw).map_err(ShellError::Catalog)
}

pub fn parse_desktop_config(raw: &str) -> Result<DesktopConfig, ShellError> {
    serde_json::from_str(raw).map_err(ShellError::Config)
}

/// Decodes the embedded window catalog.
pub fn window_catalog() -> Result<WindowCatalog, ShellError> {
    parse_window_catalog(WINDOW_CATALOG_JSON)
}

/// Decodes the embedded `desktop.toml`.
pub fn desktop_config() -> Result<DesktopConfig, ShellError> {
    parse_desktop_config(DESKTOP_CONFIG_JSON)
}
