//! Edge/corner resize gesture.

use tracing::trace;

use crate::error::WmError;
use crate::geometry::{clamp, Point, Rect, Size, Viewport};
use crate::host::ShellHost;
use crate::model::{ResizeEdge, ResizeSession, WindowState};
use crate::registry::WindowRegistry;
use crate::stacking::StackingManager;
use crate::surface::WindowSurface;

/// Applies a pointer delta to `start` for the given handle.
///
/// Each side a handle touches moves independently, so corners combine two. The result is held at
/// `min` (keeping the opposite edge fixed when the dragged edge is left or top, as far as the
/// viewport allows) and then clipped to the viewport: overflow past the left edge or under the
/// menu bar is taken out of the size, and the right/bottom edges are pulled back inside. Windows
/// that started below `min` come out at `min`.
pub fn resize_rect(
    start: Rect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    viewport: &Viewport,
    min: Size,
) -> Rect {
    let mut x = start.x;
    let mut y = start.y;
    let mut width = start.width;
    let mut height = start.height;

    if edge.has_east() {
        width += dx;
    }
    if edge.has_west() {
        width -= dx;
        x += dx;
    }
    if edge.has_south() {
        height += dy;
    }
    if edge.has_north() {
        height -= dy;
        y += dy;
    }

    if width < min.width {
        width = min.width;
        if edge.has_west() {
            x = (start.right() - width).max(0);
        }
    }
    if height < min.height {
        height = min.height;
        if edge.has_north() {
            y = (start.bottom() - height).max(viewport.chrome_height);
        }
    }

    if x < 0 {
        width += x;
        x = 0;
    }
    if y < viewport.chrome_height {
        height -= viewport.chrome_height - y;
        y = viewport.chrome_height;
    }
    if x + width > viewport.width {
        width = viewport.width - x;
    }
    if y + height > viewport.height {
        height = viewport.height - y;
    }

    // Clipping must not undo the minimum while the viewport can still hold it.
    if width < min.width {
        width = min.width.min(viewport.width);
        x = clamp(x, 0, viewport.width - width);
    }
    let area_height = viewport.height - viewport.chrome_height;
    if height < min.height {
        height = min.height.min(area_height);
        y = clamp(y, viewport.chrome_height, viewport.height - height);
    }

    Rect {
        x,
        y,
        width: width.max(0),
        height: height.max(0),
    }
}

/// Starts resizing `name` from the `edge` handle.
///
/// Only open windows resize; maximized, minimized and closed ones report
/// [`WmError::InvalidState`].
pub fn begin_resize<S: WindowSurface, H: ShellHost>(
    registry: &mut WindowRegistry<S>,
    stacking: &mut StackingManager,
    host: &mut H,
    name: &str,
    edge: ResizeEdge,
    pointer: Point,
) -> Result<ResizeSession, WmError> {
    let state = registry.find(name)?.state();
    if state != WindowState::Open {
        return Err(WmError::invalid_state(name, "resize", state));
    }
    stacking.bring_to_front(registry, name)?;
    let rect_start = registry.find(name)?.bounds();

    host.set_cursor(Some(edge.cursor()));
    host.set_text_selection(false);
    Ok(ResizeSession {
        target: name.to_string(),
        edge,
        pointer_start: pointer,
        rect_start,
    })
}

/// Resizes the target of `session` for the current pointer position.
///
/// Returns the applied bounds, or `None` when the window stopped being open mid-gesture.
pub fn update_resize<S: WindowSurface>(
    session: &ResizeSession,
    registry: &mut WindowRegistry<S>,
    viewport: &Viewport,
    min: Size,
    pointer: Point,
) -> Result<Option<Rect>, WmError> {
    let window = registry.find_mut(&session.target)?;
    if window.state() != WindowState::Open {
        return Ok(None);
    }
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;
    let rect = resize_rect(session.rect_start, session.edge, dx, dy, viewport, min);
    trace!(window = %session.target, edge = ?session.edge, ?rect, "resize");
    window.set_bounds(rect);
    Ok(Some(rect))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::config::WmConfig;
    use crate::host::MemoryShellHost;
    use crate::lifecycle;
    use crate::model::CursorStyle;
    use crate::surface::MemorySurface;

    const VIEWPORT: Viewport = Viewport {
        width: 1200,
        height: 800,
        chrome_height: 30,
        padding: 12,
    };
    const MIN: Size = Size {
        width: 400,
        height: 300,
    };

    #[test]
    fn east_and_south_grow_from_the_anchor() {
        let start = Rect::new(100, 100, 500, 400);
        assert_eq!(
            resize_rect(start, ResizeEdge::SouthEast, 60, 40, &VIEWPORT, MIN),
            Rect::new(100, 100, 560, 440)
        );
    }

    #[test]
    fn west_and_north_move_the_origin() {
        let start = Rect::new(300, 200, 500, 400);
        assert_eq!(
            resize_rect(start, ResizeEdge::NorthWest, -50, -30, &VIEWPORT, MIN),
            Rect::new(250, 170, 550, 430)
        );
    }

    #[test]
    fn shrinking_past_minimum_pins_the_opposite_edge() {
        let start = Rect::new(300, 200, 500, 400);
        let rect = resize_rect(start, ResizeEdge::West, 300, 0, &VIEWPORT, MIN);
        assert_eq!(rect, Rect::new(400, 200, 400, 400));
        assert_eq!(rect.right(), start.right());

        let rect = resize_rect(start, ResizeEdge::South, 0, -350, &VIEWPORT, MIN);
        assert_eq!(rect, Rect::new(300, 200, 500, 300));
    }

    #[test]
    fn overflow_is_absorbed_into_size() {
        let start = Rect::new(20, 60, 500, 400);
        assert_eq!(
            resize_rect(start, ResizeEdge::NorthWest, -100, -100, &VIEWPORT, MIN),
            Rect::new(0, 30, 520, 430)
        );

        let start = Rect::new(800, 400, 400, 300);
        assert_eq!(
            resize_rect(start, ResizeEdge::SouthEast, 200, 200, &VIEWPORT, MIN),
            Rect::new(800, 400, 400, 400)
        );
    }

    #[test]
    fn maximized_windows_refuse_to_resize() {
        let mut registry = WindowRegistry::new();
        registry
            .register("notes", MemorySurface::new(Rect::new(100, 100, 500, 400)))
            .unwrap();
        let mut stacking = StackingManager::default();
        let mut host = MemoryShellHost::new(VIEWPORT);
        lifecycle::open(&mut registry, &mut stacking, &mut host, "notes").unwrap();
        lifecycle::maximize(&mut registry, &mut stacking, &mut host, "notes").unwrap();
        let before = stacking.current();

        let err = begin_resize(
            &mut registry,
            &mut stacking,
            &mut host,
            "notes",
            ResizeEdge::East,
            Point::new(600, 300),
        )
        .unwrap_err();
        assert!(matches!(err, WmError::InvalidState { .. }));
        assert_eq!(stacking.current(), before);
        assert_eq!(host.cursor, None);
    }

    #[test]
    fn resize_session_sets_directional_cursor() {
        let mut registry = WindowRegistry::new();
        registry
            .register("notes", MemorySurface::new(Rect::new(100, 100, 500, 400)))
            .unwrap();
        let mut stacking = StackingManager::default();
        let mut host = MemoryShellHost::new(VIEWPORT);
        lifecycle::open(&mut registry, &mut stacking, &mut host, "notes").unwrap();

        let session = begin_resize(
            &mut registry,
            &mut stacking,
            &mut host,
            "notes",
            ResizeEdge::NorthEast,
            Point::new(600, 100),
        )
        .unwrap();
        assert_eq!(host.cursor, Some(CursorStyle::NeswResize));
        assert_eq!(session.rect_start, Rect::new(100, 100, 500, 400));

        let rect = update_resize(&session, &mut registry, &VIEWPORT, MIN, Point::new(650, 80))
            .unwrap()
            .unwrap();
        assert_eq!(rect, Rect::new(100, 80, 550, 420));
    }

    #[test]
    fn undersized_window_grows_to_minimum_at_the_edges() {
        let rect = resize_rect(
            Rect::new(0, 100, 300, 300),
            ResizeEdge::West,
            10,
            0,
            &VIEWPORT,
            MIN,
        );
        assert_eq!(rect, Rect::new(0, 100, 400, 300));

        let rect = resize_rect(
            Rect::new(100, 30, 500, 250),
            ResizeEdge::North,
            0,
            10,
            &VIEWPORT,
            MIN,
        );
        assert_eq!(rect, Rect::new(100, 30, 500, 300));
    }

    #[test]
    fn far_west_drag_keeps_minimum_against_right_edge() {
        let rect = resize_rect(
            Rect::new(300, 200, 500, 400),
            ResizeEdge::West,
            2000,
            0,
            &VIEWPORT,
            MIN,
        );
        assert_eq!(rect.width, MIN.width);
        assert!(rect.right() <= VIEWPORT.width);
    }

    fn edge_strategy() -> impl Strategy<Value = ResizeEdge> {
        prop::sample::select(ResizeEdge::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn resize_never_goes_below_minimum(
            vw in 300i32..2400,
            vh in 300i32..1600,
            fx in 0.0f64..=1.0,
            fy in 0.0f64..=1.0,
            fw in 0.0f64..=1.0,
            fh in 0.0f64..=1.0,
            edge in edge_strategy(),
            dx in -3000i32..3000,
            dy in -3000i32..3000,
        ) {
            let viewport = Viewport::new(vw, vh, 30, 12);
            let min = WmConfig::default().minimum_window_size(&viewport);
            let area_h = vh - viewport.chrome_height;

            let width = 1 + ((vw - 1) as f64 * fw) as i32;
            let height = 1 + ((area_h - 1) as f64 * fh) as i32;
            let x = ((vw - width) as f64 * fx) as i32;
            let y = viewport.chrome_height + ((area_h - height) as f64 * fy) as i32;
            let start = Rect::new(x, y, width, height);

            let rect = resize_rect(start, edge, dx, dy, &viewport, min);
            prop_assert!(rect.width >= min.width, "{:?} -> {:?} (min {:?})", start, rect, min);
            prop_assert!(rect.height >= min.height, "{:?} -> {:?} (min {:?})", start, rect, min);
            prop_assert!(rect.x >= 0 && rect.right() <= vw);
            prop_assert!(rect.y >= viewport.chrome_height && rect.bottom() <= vh);
        }
    }
}
