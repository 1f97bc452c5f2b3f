//! Shell-side services the engine calls out to: viewport metrics, dock indicators, and pointer
//! feedback during gestures.

use std::collections::BTreeMap;

use crate::geometry::Viewport;
use crate::model::CursorStyle;

/// Environment the window manager runs in.
pub trait ShellHost {
    /// Current viewport, including the live menu bar height.
    fn viewport(&self) -> Viewport;

    /// One-way notification that a window's dock item should (not) show its running dot.
    fn set_indicator(&mut self, name: &str, present: bool);

    /// Overrides the page cursor while a gesture runs; `None` restores the default.
    fn set_cursor(&mut self, cursor: Option<CursorStyle>);

    /// Enables or disables text selection across the page.
    fn set_text_selection(&mut self, enabled: bool);
}

/// In-memory host that records notifications for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryShellHost {
    pub viewport: Viewport,
    pub indicators: BTreeMap<String, bool>,
    pub cursor: Option<CursorStyle>,
    pub text_selection: bool,
}

impl Default for MemoryShellHost {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl MemoryShellHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            indicators: BTreeMap::new(),
            cursor: None,
            text_selection: true,
        }
    }

    /// Last indicator value sent for `name`; `false` when never notified.
    pub fn indicator(&self, name: &str) -> bool {
        self.indicators.get(name).copied().unwrap_or(false)
    }
}

impl ShellHost for MemoryShellHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_indicator(&mut self, name: &str, present: bool) {
        self.indicators.insert(name.to_string(), present);
    }

    fn set_cursor(&mut self, cursor: Option<CursorStyle>) {
        self.cursor = cursor;
    }

    fn set_text_selection(&mut self, enabled: bool) {
        self.text_selection = enabled;
    }
}
