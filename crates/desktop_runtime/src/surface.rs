//! Engine surfaces backed by Leptos signals.

use desktop_wm::{Rect, Size, WindowState, WindowSurface};
use leptos::*;

/// Everything a window frame renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceView {
    pub bounds: Rect,
    pub state: WindowState,
    pub active: bool,
    pub stack_order: u32,
}

impl SurfaceView {
    /// Inline style for the frame. Maximized frames are stretched by the stylesheet.
    pub fn frame_style(&self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.bounds.height,
            self.stack_order
        )
    }

    pub fn frame_class(&self) -> String {
        let mut class = String::from("desktop-window");
        match self.state {
            WindowState::Closed => class.push_str(" closed"),
            WindowState::Minimized => class.push_str(" minimized"),
            WindowState::Maximized => class.push_str(" maximized"),
            WindowState::Open => {}
        }
        if self.active {
            class.push_str(" active");
        }
        class
    }
}

/// A window surface whose writes land in a reactive signal the frame component reads.
#[derive(Debug, Clone, Copy)]
pub struct SignalSurface {
    view: RwSignal<SurfaceView>,
    intrinsic: Size,
}

impl SignalSurface {
    pub fn new(bounds: Rect) -> Self {
        Self {
            view: create_rw_signal(SurfaceView {
                bounds,
                ..SurfaceView::default()
            }),
            intrinsic: bounds.size(),
        }
    }

    pub fn view(&self) -> RwSignal<SurfaceView> {
        self.view
    }

    fn write(&self, apply: impl FnOnce(&mut SurfaceView)) {
        let mut next = self.view.get_untracked();
        apply(&mut next);
        if next != self.view.get_untracked() {
            self.view.set(next);
        }
    }
}

impl WindowSurface for SignalSurface {
    fn bounds(&self) -> Rect {
        self.view.with_untracked(|view| view.bounds)
    }

    fn set_bounds(&mut self, rect: Rect) {
        self.write(|view| view.bounds = rect);
    }

    fn set_presentation(&mut self, state: WindowState) {
        self.write(|view| view.state = state);
    }

    fn set_active(&mut self, active: bool) {
        self.write(|view| view.active = active);
    }

    fn set_stack_order(&mut self, order: u32) {
        self.write(|view| view.stack_order = order);
    }

    fn intrinsic_size(&self) -> Size {
        self.intrinsic
    }
}
