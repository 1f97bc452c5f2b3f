//! Title-bar drag gesture.

use tracing::trace;

use crate::config::WmConfig;
use crate::error::WmError;
use crate::geometry::{clamp, Point, Rect, Viewport};
use crate::host::ShellHost;
use crate::model::{CursorStyle, DragSession, WindowState};
use crate::registry::WindowRegistry;
use crate::stacking::StackingManager;
use crate::surface::WindowSurface;

/// Starts dragging `name` from `pointer`.
///
/// Raises the window and records the pointer offset from its top-left corner. For a maximized
/// window the free geometry is kept as restore bounds so the first move can tear it off.
pub fn begin_drag<S: WindowSurface, H: ShellHost>(
    registry: &mut WindowRegistry<S>,
    stacking: &mut StackingManager,
    host: &mut H,
    name: &str,
    pointer: Point,
) -> Result<DragSession, WmError> {
    stacking.bring_to_front(registry, name)?;
    let window = registry.find_mut(name)?;
    let bounds = window.bounds();
    if window.state() == WindowState::Maximized && window.restore_bounds.is_none() {
        window.restore_bounds = Some(bounds);
    }

    host.set_cursor(Some(CursorStyle::Move));
    host.set_text_selection(false);
    Ok(DragSession {
        target: name.to_string(),
        offset: Point::new(pointer.x - bounds.x, pointer.y - bounds.y),
    })
}

/// Moves the dragged window so the pointer keeps its offset, clamped to the viewport.
///
/// A window that is still maximized is restored first and re-anchored with the pointer over the
/// horizontal centre of the title bar. Returns the applied bounds, or `None` when the window is no
/// longer on screen.
pub fn update_drag<S: WindowSurface>(
    session: &mut DragSession,
    registry: &mut WindowRegistry<S>,
    viewport: &Viewport,
    config: &WmConfig,
    pointer: Point,
) -> Result<Option<Rect>, WmError> {
    let window = registry.find_mut(&session.target)?;
    let mut bounds = match window.state() {
        WindowState::Open => window.bounds(),
        WindowState::Maximized => {
            let restored = window.restore_bounds.unwrap_or_else(|| window.bounds());
            window.set_state(WindowState::Open);
            session.offset = Point::new(restored.width / 2, config.tear_off_offset_y);
            trace!(window = %session.target, "maximized window torn off by drag");
            restored
        }
        WindowState::Closed | WindowState::Minimized => return Ok(None),
    };

    bounds.x = clamp(
        pointer.x - session.offset.x,
        0,
        viewport.width - bounds.width,
    );
    bounds.y = clamp(
        pointer.y - session.offset.y,
        viewport.chrome_height,
        viewport.height - bounds.height,
    );
    window.set_bounds(bounds);
    Ok(Some(bounds))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::host::MemoryShellHost;
    use crate::lifecycle;
    use crate::surface::MemorySurface;

    fn open_window(
        viewport: Viewport,
        bounds: Rect,
    ) -> (WindowRegistry<MemorySurface>, StackingManager, MemoryShellHost) {
        let mut registry = WindowRegistry::new();
        registry.register("finder", MemorySurface::new(bounds)).unwrap();
        let mut stacking = StackingManager::default();
        let mut host = MemoryShellHost::new(viewport);
        lifecycle::open(&mut registry, &mut stacking, &mut host, "finder").unwrap();
        (registry, stacking, host)
    }

    #[test]
    fn drag_keeps_pointer_offset() {
        let viewport = Viewport::new(1200, 800, 30, 12);
        let (mut registry, mut stacking, mut host) =
            open_window(viewport, Rect::new(100, 100, 400, 300));

        let mut session = begin_drag(
            &mut registry,
            &mut stacking,
            &mut host,
            "finder",
            Point::new(150, 110),
        )
        .unwrap();
        assert_eq!(session.offset, Point::new(50, 10));
        assert_eq!(host.cursor, Some(CursorStyle::Move));
        assert!(!host.text_selection);

        let moved = update_drag(
            &mut session,
            &mut registry,
            &viewport,
            &WmConfig::default(),
            Point::new(400, 300),
        )
        .unwrap();
        assert_eq!(moved, Some(Rect::new(350, 290, 400, 300)));
        assert_eq!(
            registry.get("finder").unwrap().surface().bounds,
            Rect::new(350, 290, 400, 300)
        );
    }

    #[test]
    fn drag_stops_at_menu_bar_and_edges() {
        let viewport = Viewport::new(1200, 800, 30, 12);
        let (mut registry, mut stacking, mut host) =
            open_window(viewport, Rect::new(100, 100, 400, 300));
        let mut session = begin_drag(
            &mut registry,
            &mut stacking,
            &mut host,
            "finder",
            Point::new(110, 110),
        )
        .unwrap();

        let config = WmConfig::default();
        let top_left = update_drag(
            &mut session,
            &mut registry,
            &viewport,
            &config,
            Point::new(-500, -500),
        )
        .unwrap();
        assert_eq!(top_left, Some(Rect::new(0, 30, 400, 300)));

        let bottom_right = update_drag(
            &mut session,
            &mut registry,
            &viewport,
            &config,
            Point::new(5000, 5000),
        )
        .unwrap();
        assert_eq!(bottom_right, Some(Rect::new(800, 500, 400, 300)));
    }

    #[test]
    fn dragging_a_closed_window_does_nothing() {
        let viewport = Viewport::default();
        let (mut registry, mut stacking, mut host) =
            open_window(viewport, Rect::new(100, 100, 400, 300));
        let mut session = begin_drag(
            &mut registry,
            &mut stacking,
            &mut host,
            "finder",
            Point::new(110, 110),
        )
        .unwrap();
        lifecycle::close(&mut registry, &mut host, "finder").unwrap();

        let moved = update_drag(
            &mut session,
            &mut registry,
            &viewport,
            &WmConfig::default(),
            Point::new(300, 300),
        )
        .unwrap();
        assert_eq!(moved, None);
        assert_eq!(
            registry.get("finder").unwrap().bounds(),
            Rect::new(100, 100, 400, 300)
        );
    }

    proptest! {
        #[test]
        fn drag_result_stays_inside_viewport(
            vw in 400i32..2400,
            vh in 300i32..1600,
            chrome in 0i32..60,
            width in 50i32..400,
            height in 50i32..240,
            grab_x in 0i32..50,
            grab_y in 0i32..20,
            px in -3000i32..5000,
            py in -3000i32..5000,
        ) {
            let viewport = Viewport::new(vw, vh, chrome, 12);
            let (mut registry, mut stacking, mut host) =
                open_window(viewport, Rect::new(100, 100, width, height));
            let start = registry.get("finder").unwrap().bounds();
            let mut session = begin_drag(
                &mut registry,
                &mut stacking,
                &mut host,
                "finder",
                Point::new(start.x + grab_x, start.y + grab_y),
            )
            .unwrap();
            let rect = update_drag(
                &mut session,
                &mut registry,
                &viewport,
                &WmConfig::default(),
                Point::new(px, py),
            )
            .unwrap()
            .unwrap();

            prop_assert!(rect.x >= 0 && rect.x <= vw - rect.width);
            prop_assert!(rect.y >= chrome && rect.y <= vh - rect.height);
        }
    }
}
