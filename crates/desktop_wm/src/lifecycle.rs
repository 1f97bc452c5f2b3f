//! Window lifecycle transitions.
//!
//! ```text
//! Closed    --open/toggle-->  Open
//! Minimized --open/toggle-->  Open
//! Open      --maximize----->  Maximized
//! Maximized --maximize----->  Open
//! Open      --minimize----->  Minimized
//! Maximized --minimize----->  Minimized
//! any       --close-------->  Closed
//! ```
//!
//! Each function takes the registry, stacking counter and host explicitly and reports misuse
//! through [`WmError`]; the [`crate::WindowManager`] entry points turn those into silent no-ops.

use crate::containment::clamp_to_viewport;
use crate::error::WmError;
use crate::geometry::Viewport;
use crate::host::ShellHost;
use crate::model::WindowState;
use crate::registry::{WindowRecord, WindowRegistry};
use crate::stacking::StackingManager;
use crate::surface::WindowSurface;

/// Reveals a closed window or restores a minimized one, then raises it.
///
/// Already visible windows are only raised.
pub fn open<S: WindowSurface, H: ShellHost>(
    registry: &mut WindowRegistry<S>,
    stacking: &mut StackingManager,
    host: &mut H,
    name: &str,
) -> Result<(), WmError> {
    let viewport = host.viewport();
    let window = registry.find_mut(name)?;
    match window.state() {
        WindowState::Closed | WindowState::Minimized => {
            window.ensure_sized();
            window.set_state(WindowState::Open);
            reclamp(window, &viewport);
        }
        WindowState::Open => reclamp(window, &viewport),
        WindowState::Maximized => {}
    }
    stacking.bring_to_front(registry, name)?;
    host.set_indicator(name, true);
    Ok(())
}

/// Hides the window from any state.
pub fn close<S: WindowSurface, H: ShellHost>(
    registry: &mut WindowRegistry<S>,
    host: &mut H,
    name: &str,
) -> Result<(), WmError> {
    let window = registry.find_mut(name)?;
    window.set_state(WindowState::Closed);
    host.set_indicator(name, false);
    Ok(())
}

/// Sends an open or maximized window to the dock. The dock indicator stays lit.
pub fn minimize<S: WindowSurface>(
    registry: &mut WindowRegistry<S>,
    name: &str,
) -> Result<(), WmError> {
    let window = registry.find_mut(name)?;
    let state = window.state();
    if !state.is_visible() {
        return Err(WmError::invalid_state(name, "minimize", state));
    }
    window.set_state(WindowState::Minimized);
    Ok(())
}

/// Toggles between open and maximized.
///
/// Maximizing records the free geometry as restore bounds; the rendering layer stretches the
/// window. Restoring reapplies those bounds (if any were recorded) and clamps them to the
/// viewport.
pub fn maximize<S: WindowSurface, H: ShellHost>(
    registry: &mut WindowRegistry<S>,
    stacking: &mut StackingManager,
    host: &mut H,
    name: &str,
) -> Result<(), WmError> {
    let viewport = host.viewport();
    let window = registry.find_mut(name)?;
    match window.state() {
        WindowState::Maximized => {
            if let Some(restore) = window.restore_bounds {
                window.set_bounds(restore);
            }
            window.set_state(WindowState::Open);
            reclamp(window, &viewport);
        }
        WindowState::Open => {
            window.restore_bounds = Some(window.bounds());
            window.set_state(WindowState::Maximized);
        }
        state @ (WindowState::Closed | WindowState::Minimized) => {
            return Err(WmError::invalid_state(name, "maximize", state));
        }
    }
    stacking.bring_to_front(registry, name)?;
    Ok(())
}

/// Dock/icon behaviour: hidden windows open, visible ones come to the front.
pub fn toggle<S: WindowSurface, H: ShellHost>(
    registry: &mut WindowRegistry<S>,
    stacking: &mut StackingManager,
    host: &mut H,
    name: &str,
) -> Result<(), WmError> {
    match registry.find(name)?.state() {
        WindowState::Closed | WindowState::Minimized => open(registry, stacking, host, name),
        WindowState::Open | WindowState::Maximized => {
            stacking.bring_to_front(registry, name)?;
            host.set_indicator(name, true);
            Ok(())
        }
    }
}

fn reclamp<S: WindowSurface>(window: &mut WindowRecord<S>, viewport: &Viewport) {
    let bounds = window.bounds();
    let clamped = clamp_to_viewport(bounds, viewport);
    if clamped != bounds {
        window.set_bounds(clamped);
    }
}
