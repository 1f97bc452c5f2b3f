//! Tunables for the window manager.

use serde::{Deserialize, Serialize};

use crate::geometry::{minimum_extent, Size, Viewport};
use crate::stacking::DEFAULT_STACK_BASE;

/// Engine configuration, usually read from the `[wm]` table of the shell config.
///
/// Every field has a default so partial tables deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WmConfig {
    /// First stacking value handed out is `stack_base + 1`; keeps windows above static chrome.
    pub stack_base: u32,
    /// Vertical distance between the pointer and the top edge when a maximized window is torn off.
    pub tear_off_offset_y: i32,
    pub min_width: i32,
    /// Below this much available width the minimum becomes the full available width.
    pub min_width_floor: i32,
    pub min_height: i32,
    /// Below this much available height the minimum becomes the full available height.
    pub min_height_floor: i32,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            stack_base: DEFAULT_STACK_BASE,
            tear_off_offset_y: 50,
            min_width: 400,
            min_width_floor: 240,
            min_height: 300,
            min_height_floor: 220,
        }
    }
}

impl WmConfig {
    /// Smallest size a resize may produce in `viewport`.
    pub fn minimum_window_size(&self, viewport: &Viewport) -> Size {
        Size::new(
            minimum_extent(
                viewport.available_width(),
                self.min_width,
                self.min_width_floor,
            ),
            minimum_extent(
                viewport.available_height(),
                self.min_height,
                self.min_height_floor,
            ),
        )
    }
}
