//! Stacking order and focus.

use crate::error::WmError;
use crate::registry::WindowRegistry;
use crate::surface::WindowSurface;

/// Default seed for the stacking counter; sits above the menu bar, dock and icons.
pub const DEFAULT_STACK_BASE: u32 = 200;

/// Hands out strictly increasing stacking values.
///
/// The counter never decreases and values are never reused, so the most recently activated window
/// always sorts last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackingManager {
    counter: u32,
}

impl Default for StackingManager {
    fn default() -> Self {
        Self::new(DEFAULT_STACK_BASE)
    }
}

impl StackingManager {
    pub fn new(base: u32) -> Self {
        Self { counter: base }
    }

    /// Last value handed out (the seed when nothing was raised yet).
    pub fn current(&self) -> u32 {
        self.counter
    }

    /// Raises `name` above every other window and makes it the only active one.
    ///
    /// Returns the stacking value assigned.
    ///
    /// # Errors
    ///
    /// [`WmError::WindowNotFound`] for unknown names, [`WmError::InvalidState`] when the window is
    /// closed or minimized (such a window can never be active).
    pub fn bring_to_front<S: WindowSurface>(
        &mut self,
        registry: &mut WindowRegistry<S>,
        name: &str,
    ) -> Result<u32, WmError> {
        let state = registry.find(name)?.state();
        if !state.is_visible() {
            return Err(WmError::invalid_state(name, "bring to front", state));
        }

        self.counter = self.counter.saturating_add(1);
        let order = self.counter;
        for window in registry.iter_mut() {
            if window.name() == name {
                window.set_stack_order(order);
                window.set_active(true);
            } else if window.is_active() {
                window.set_active(false);
            }
        }
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::geometry::Rect;
    use crate::model::WindowState;
    use crate::surface::MemorySurface;

    fn registry_with(names: &[&str]) -> WindowRegistry<MemorySurface> {
        let mut registry = WindowRegistry::new();
        for name in names {
            registry
                .register(*name, MemorySurface::new(Rect::new(40, 60, 500, 400)))
                .unwrap();
            registry.get_mut(name).unwrap().set_state(WindowState::Open);
        }
        registry
    }

    #[test]
    fn later_activation_always_wins() {
        let mut registry = registry_with(&["about", "notes", "terminal"]);
        let mut stacking = StackingManager::default();

        assert_eq!(stacking.bring_to_front(&mut registry, "about").unwrap(), 201);
        assert_eq!(stacking.bring_to_front(&mut registry, "notes").unwrap(), 202);
        assert_eq!(stacking.bring_to_front(&mut registry, "about").unwrap(), 203);

        let active: Vec<&str> = registry
            .iter()
            .filter(|w| w.is_active())
            .map(|w| w.name())
            .collect();
        assert_eq!(active, vec!["about"]);
        assert_eq!(registry.get("about").unwrap().surface().stack_order, 203);
        assert!(!registry.get("notes").unwrap().surface().active);
    }

    #[test]
    fn hidden_windows_cannot_be_raised() {
        let mut registry = registry_with(&["about"]);
        registry
            .get_mut("about")
            .unwrap()
            .set_state(WindowState::Minimized);
        let mut stacking = StackingManager::new(10);

        let err = stacking.bring_to_front(&mut registry, "about").unwrap_err();
        assert!(matches!(err, WmError::InvalidState { .. }));
        assert_eq!(stacking.current(), 10);
        assert!(registry.active().is_none());
    }

    #[test]
    fn unknown_names_are_reported() {
        let mut registry = registry_with(&["about"]);
        let mut stacking = StackingManager::default();
        assert_eq!(
            stacking.bring_to_front(&mut registry, "ghost"),
            Err(WmError::WindowNotFound("ghost".to_string()))
        );
    }
}
