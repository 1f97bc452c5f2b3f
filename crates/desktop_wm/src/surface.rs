//! Contract between the engine and a window's visual representation.

use crate::geometry::{Rect, Size};
use crate::model::WindowState;

/// A window's on-screen representation, owned by the rendering layer.
///
/// The engine only reads and writes geometry and presentation through this trait; it never
/// paints. Bounds are free (non-maximized) geometry relative to the desktop origin. A maximized
/// window keeps its free bounds and the rendering layer stretches it to the viewport.
pub trait WindowSurface {
    /// Current free geometry.
    fn bounds(&self) -> Rect;

    /// Applies new free geometry; must be visible immediately.
    fn set_bounds(&mut self, rect: Rect);

    /// Switches the presentation (hidden, shown, minimized, full-viewport).
    fn set_presentation(&mut self, state: WindowState);

    /// Toggles the focused title bar highlight.
    fn set_active(&mut self, active: bool);

    fn set_stack_order(&mut self, order: u32);

    /// Natural size of the content, used when a window opens without usable bounds.
    fn intrinsic_size(&self) -> Size;
}

/// Headless surface that records what the engine wrote.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemorySurface {
    pub bounds: Rect,
    pub presentation: WindowState,
    pub active: bool,
    pub stack_order: u32,
    pub intrinsic: Size,
}

impl MemorySurface {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            intrinsic: bounds.size(),
            ..Self::default()
        }
    }
}

impl WindowSurface for MemorySurface {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, rect: Rect) {
        self.bounds = rect;
    }

    fn set_presentation(&mut self, state: WindowState) {
        self.presentation = state;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn set_stack_order(&mut self, order: u32) {
        self.stack_order = order;
    }

    fn intrinsic_size(&self) -> Size {
        self.intrinsic
    }
}
