//! Screen-space geometry shared by the drag, resize and containment controllers.
//!
//! All coordinates are integer CSS pixels relative to the desktop origin (top-left of the page).

use serde::{Deserialize, Serialize};

/// Pointer or corner position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Axis-aligned window bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(self) -> i32 {
        self.y + self.height
    }

    pub fn with_origin(self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }

    pub fn with_size(self, size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            ..self
        }
    }
}

/// Visible working area the windows live in.
///
/// `chrome_height` is the band reserved by the menu bar at the top; `padding` is the gutter the
/// containment pass keeps between windows and the viewport edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub chrome_height: i32,
    pub padding: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            chrome_height: 30,
            padding: 12,
        }
    }
}

impl Viewport {
    pub fn new(width: i32, height: i32, chrome_height: i32, padding: i32) -> Self {
        Self {
            width,
            height,
            chrome_height,
            padding,
        }
    }

    /// Horizontal space left once both side gutters are taken out.
    pub fn available_width(&self) -> i32 {
        (self.width - 2 * self.padding).max(0)
    }

    /// Vertical space left below the menu bar once both gutters are taken out.
    pub fn available_height(&self) -> i32 {
        (self.height - self.chrome_height - 2 * self.padding).max(0)
    }

    /// Largest size a contained window may have.
    pub fn maximum_window_size(&self) -> Size {
        Size::new(self.available_width(), self.available_height())
    }
}

/// Clamps `value` into `[min, max]`.
///
/// When the range is inverted (`max < min`, e.g. a window wider than the viewport) the lower bound
/// wins, so the window lands at the origin of the range instead of an invalid coordinate.
pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
    value.min(max).max(min)
}

/// Minimum extent along one axis.
///
/// Narrow viewports (`available <= floor`) give the whole available space as the minimum so a
/// window can still fill the screen; otherwise the minimum is `preferred`, capped at `available`.
pub fn minimum_extent(available: i32, preferred: i32, floor: i32) -> i32 {
    let available = available.max(0);
    if available <= floor {
        available
    } else {
        preferred.min(available)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clamp_prefers_lower_bound_for_inverted_range() {
        assert_eq!(clamp(50, 0, 100), 50);
        assert_eq!(clamp(-5, 0, 100), 0);
        assert_eq!(clamp(150, 0, 100), 100);
        assert_eq!(clamp(40, 12, -20), 12);
    }

    #[test]
    fn minimum_extent_degrades_on_narrow_viewports() {
        assert_eq!(minimum_extent(1000, 400, 240), 400);
        assert_eq!(minimum_extent(300, 400, 240), 300);
        assert_eq!(minimum_extent(240, 400, 240), 240);
        assert_eq!(minimum_extent(180, 400, 240), 180);
        assert_eq!(minimum_extent(-30, 400, 240), 0);
    }

    #[test]
    fn available_space_excludes_chrome_and_padding() {
        let viewport = Viewport::new(600, 400, 30, 12);
        assert_eq!(viewport.maximum_window_size(), Size::new(576, 346));

        let tiny = Viewport::new(10, 20, 30, 12);
        assert_eq!(tiny.maximum_window_size(), Size::new(0, 0));
    }
}
