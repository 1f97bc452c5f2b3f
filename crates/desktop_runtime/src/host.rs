//! Browser-backed [`ShellHost`] for the window manager.

use std::collections::BTreeSet;

use desktop_wm::{CursorStyle, ShellHost, Viewport};
use leptos::*;

use crate::catalog::ShellConfig;

/// DOM id of the rendered menu bar, measured for the live chrome height.
pub const MENU_BAR_DOM_ID: &str = "desktop-menu-bar";

const FALLBACK_WIDTH: i32 = 1024;
const FALLBACK_HEIGHT: i32 = 768;

/// Reactive state the host writes and the shell components read.
#[derive(Debug, Clone, Copy)]
pub struct HostSignals {
    /// Names whose dock item shows a running dot.
    pub indicators: RwSignal<BTreeSet<String>>,
    pub cursor: RwSignal<Option<CursorStyle>>,
    pub text_selection: RwSignal<bool>,
}

impl HostSignals {
    pub fn new() -> Self {
        Self {
            indicators: create_rw_signal(BTreeSet::new()),
            cursor: create_rw_signal(None),
            text_selection: create_rw_signal(true),
        }
    }

    /// Inline style for the shell root while a gesture overrides the cursor.
    pub fn root_style(&self) -> String {
        let mut style = String::new();
        if let Some(cursor) = self.cursor.get() {
            style.push_str(&format!("cursor:{};", cursor.css_value()));
        }
        if !self.text_selection.get() {
            style.push_str("user-select:none;-webkit-user-select:none;");
        }
        style
    }
}

impl Default for HostSignals {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BrowserShellHost {
    signals: HostSignals,
    menu_bar_height: i32,
    padding: i32,
}

impl BrowserShellHost {
    pub fn new(config: &ShellConfig, signals: HostSignals) -> Self {
        Self {
            signals,
            menu_bar_height: config.menu_bar_height,
            padding: config.padding,
        }
    }

    pub fn signals(&self) -> HostSignals {
        self.signals
    }
}

impl ShellHost for BrowserShellHost {
    fn viewport(&self) -> Viewport {
        let (width, height) = browser_inner_size();
        Viewport::new(
            width,
            height,
            measured_menu_bar_height().unwrap_or(self.menu_bar_height),
            self.padding,
        )
    }

    fn set_indicator(&mut self, name: &str, present: bool) {
        let changed = self
            .signals
            .indicators
            .with_untracked(|set| set.contains(name) != present);
        if changed {
            self.signals.indicators.update(|set| {
                if present {
                    set.insert(name.to_string());
                } else {
                    set.remove(name);
                }
            });
        }
    }

    fn set_cursor(&mut self, cursor: Option<CursorStyle>) {
        self.signals.cursor.set(cursor);
    }

    fn set_text_selection(&mut self, enabled: bool) {
        self.signals.text_selection.set(enabled);
    }
}

fn browser_inner_size() -> (i32, i32) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_WIDTH);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_HEIGHT);
            return (width, height);
        }
    }

    (FALLBACK_WIDTH, FALLBACK_HEIGHT)
}

fn measured_menu_bar_height() -> Option<i32> {
    #[cfg(target_arch = "wasm32")]
    {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(MENU_BAR_DOM_ID)?;
        let height = element.client_height();
        return (height > 0).then_some(height);
    }

    #[cfg(not(target_arch = "wasm32"))]
    None
}
