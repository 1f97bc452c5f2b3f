//! Named window records and lookup.

use crate::error::WmError;
use crate::geometry::Rect;
use crate::model::{WindowSnapshot, WindowState};
use crate::surface::WindowSurface;

/// Per-window state held by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord<S> {
    pub(crate) name: String,
    pub(crate) state: WindowState,
    pub(crate) active: bool,
    pub(crate) restore_bounds: Option<Rect>,
    pub(crate) stack_order: u32,
    pub(crate) surface: S,
}

impl<S: WindowSurface> WindowRecord<S> {
    fn new(name: String, mut surface: S) -> Self {
        surface.set_presentation(WindowState::Closed);
        surface.set_active(false);
        Self {
            name,
            state: WindowState::Closed,
            active: false,
            restore_bounds: None,
            stack_order: 0,
            surface,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn restore_bounds(&self) -> Option<Rect> {
        self.restore_bounds
    }

    pub fn stack_order(&self) -> u32 {
        self.stack_order
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn bounds(&self) -> Rect {
        self.surface.bounds()
    }

    pub(crate) fn set_state(&mut self, state: WindowState) {
        self.state = state;
        self.surface.set_presentation(state);
        if !state.is_visible() {
            self.set_active(false);
        }
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
        self.surface.set_active(active);
    }

    pub(crate) fn set_stack_order(&mut self, order: u32) {
        self.stack_order = order;
        self.surface.set_stack_order(order);
    }

    pub(crate) fn set_bounds(&mut self, rect: Rect) {
        self.surface.set_bounds(rect);
    }

    /// Gives a window that never had a layout its intrinsic size before it is shown.
    pub(crate) fn ensure_sized(&mut self) {
        let bounds = self.surface.bounds();
        if bounds.size().is_empty() {
            let size = self.surface.intrinsic_size();
            self.surface.set_bounds(bounds.with_size(size));
        }
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            name: self.name.clone(),
            state: self.state,
            active: self.active,
            stack_order: self.stack_order,
            bounds: self.surface.bounds(),
            restore_bounds: self.restore_bounds,
        }
    }
}

/// Windows in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegistry<S> {
    windows: Vec<WindowRecord<S>>,
}

impl<S> Default for WindowRegistry<S> {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
        }
    }
}

impl<S: WindowSurface> WindowRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a closed window.
    ///
    /// # Errors
    ///
    /// Returns [`WmError::DuplicateWindow`] when `name` is already taken.
    pub fn register(&mut self, name: impl Into<String>, surface: S) -> Result<(), WmError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(WmError::DuplicateWindow(name));
        }
        self.windows.push(WindowRecord::new(name, surface));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&WindowRecord<S>> {
        self.windows.iter().find(|w| w.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut WindowRecord<S>> {
        self.windows.iter_mut().find(|w| w.name == name)
    }

    pub(crate) fn find(&self, name: &str) -> Result<&WindowRecord<S>, WmError> {
        self.get(name)
            .ok_or_else(|| WmError::WindowNotFound(name.to_string()))
    }

    pub(crate) fn find_mut(&mut self, name: &str) -> Result<&mut WindowRecord<S>, WmError> {
        self.get_mut(name)
            .ok_or_else(|| WmError::WindowNotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord<S>> {
        self.windows.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut WindowRecord<S>> {
        self.windows.iter_mut()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.windows.iter().map(|w| w.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn active(&self) -> Option<&WindowRecord<S>> {
        self.windows.iter().find(|w| w.active)
    }
}
