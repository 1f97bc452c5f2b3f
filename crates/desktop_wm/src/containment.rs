//! Viewport containment.
//!
//! Two clamps live here. [`contain_rect`] is the padded containment pass run on every viewport
//! change; it keeps a gutter around the working area. [`clamp_to_viewport`] is the looser clamp
//! used when a window comes back on screen (open, restore from maximized); it uses the same bounds
//! a drag does, so a window dragged flush against an edge stays there.

use tracing::info;

use crate::geometry::{clamp, Rect, Viewport};
use crate::model::WindowState;
use crate::registry::WindowRegistry;
use crate::surface::WindowSurface;

/// Shrinks `rect` to the padded working area and moves it inside.
///
/// Never grows a window. Idempotent for a fixed viewport.
pub fn contain_rect(rect: Rect, viewport: &Viewport) -> Rect {
    let max = viewport.maximum_window_size();
    let width = rect.width.min(max.width);
    let height = rect.height.min(max.height);
    let padding = viewport.padding;

    Rect {
        x: clamp(rect.x, padding, viewport.width - width - padding),
        y: clamp(
            rect.y,
            viewport.chrome_height + padding,
            viewport.height - height - padding,
        ),
        width,
        height,
    }
}

/// Keeps `rect` below the menu bar and inside the viewport edges, without gutters.
pub fn clamp_to_viewport(rect: Rect, viewport: &Viewport) -> Rect {
    let width = rect.width.min(viewport.width.max(0));
    let height = rect
        .height
        .min((viewport.height - viewport.chrome_height).max(0));

    Rect {
        x: clamp(rect.x, 0, viewport.width - width),
        y: clamp(
            rect.y,
            viewport.chrome_height,
            viewport.height - height,
        ),
        width,
        height,
    }
}

/// Runs the containment pass over every open window.
///
/// Closed and minimized windows are hidden and maximized ones are sized by the rendering layer,
/// so all three are skipped. Returns how many windows moved or shrank.
pub fn contain_all<S: WindowSurface>(registry: &mut WindowRegistry<S>, viewport: &Viewport) -> usize {
    let mut adjusted = 0;
    for window in registry.iter_mut() {
        if window.state() != WindowState::Open {
            continue;
        }
        let bounds = window.bounds();
        let contained = contain_rect(bounds, viewport);
        if contained != bounds {
            window.set_bounds(contained);
            adjusted += 1;
        }
    }
    if adjusted > 0 {
        info!(
            adjusted,
            width = viewport.width,
            height = viewport.height,
            "windows re-contained after viewport change"
        );
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn oversized_window_shrinks_and_lands_at_padding_origin() {
        let viewport = Viewport::new(600, 400, 30, 12);
        let contained = contain_rect(Rect::new(300, 200, 900, 700), &viewport);
        assert_eq!(contained, Rect::new(12, 42, 576, 346));
    }

    #[test]
    fn containment_never_grows_a_window() {
        let viewport = Viewport::new(1200, 800, 30, 12);
        let rect = Rect::new(100, 100, 200, 150);
        assert_eq!(contain_rect(rect, &viewport), rect);
    }

    #[test]
    fn degenerate_viewport_collapses_to_zero() {
        let viewport = Viewport::new(10, 20, 30, 12);
        let contained = contain_rect(Rect::new(5, 5, 300, 300), &viewport);
        assert_eq!(contained, Rect::new(12, 42, 0, 0));
    }

    #[test]
    fn viewport_clamp_allows_edges() {
        let viewport = Viewport::new(1000, 700, 30, 12);
        assert_eq!(
            clamp_to_viewport(Rect::new(-40, 0, 400, 300), &viewport),
            Rect::new(0, 30, 400, 300)
        );
        assert_eq!(
            clamp_to_viewport(Rect::new(900, 650, 400, 300), &viewport),
            Rect::new(600, 400, 400, 300)
        );
    }

    #[test]
    fn only_open_windows_are_contained() {
        let viewport = Viewport::new(600, 400, 30, 12);
        let mut registry = WindowRegistry::new();
        for (name, state) in [
            ("open", WindowState::Open),
            ("closed", WindowState::Closed),
            ("minimized", WindowState::Minimized),
            ("maximized", WindowState::Maximized),
        ] {
            registry
                .register(name, MemorySurface::new(Rect::new(800, 600, 900, 700)))
                .unwrap();
            registry.get_mut(name).unwrap().set_state(state);
        }

        assert_eq!(contain_all(&mut registry, &viewport), 1);
        assert_eq!(
            registry.get("open").unwrap().bounds(),
            Rect::new(12, 42, 576, 346)
        );
        for name in ["closed", "minimized", "maximized"] {
            assert_eq!(
                registry.get(name).unwrap().bounds(),
                Rect::new(800, 600, 900, 700)
            );
        }
    }

    proptest! {
        #[test]
        fn containment_is_idempotent(
            x in -2000i32..4000,
            y in -2000i32..4000,
            width in 0i32..3000,
            height in 0i32..3000,
            vw in 0i32..2500,
            vh in 0i32..1600,
            chrome in 0i32..60,
            padding in 0i32..40,
        ) {
            let viewport = Viewport::new(vw, vh, chrome, padding);
            let once = contain_rect(Rect::new(x, y, width, height), &viewport);
            let twice = contain_rect(once, &viewport);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn contained_windows_fit_the_working_area(
            x in -2000i32..4000,
            y in -2000i32..4000,
            width in 0i32..3000,
            height in 0i32..3000,
            vw in 200i32..2500,
            vh in 200i32..1600,
        ) {
            let viewport = Viewport::new(vw, vh, 30, 12);
            let rect = contain_rect(Rect::new(x, y, width, height), &viewport);
            prop_assert!(rect.x >= 12);
            prop_assert!(rect.y >= 42);
            prop_assert!(rect.right() <= vw - 12);
            prop_assert!(rect.bottom() <= vh - 12);
        }
    }
}
