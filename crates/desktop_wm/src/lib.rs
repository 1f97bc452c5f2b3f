//! Window-management engine for the simulated desktop.
//!
//! The engine owns every piece of window state the shell needs: the per-window lifecycle
//! ([`WindowState`]), stacking order and the single active window, the drag/resize interaction
//! session, and the viewport containment pass. It never paints. Geometry and presentation are
//! pushed into a [`WindowSurface`] supplied by the rendering layer, and viewport/dock/cursor
//! side effects go through a [`ShellHost`].
//!
//! - [`geometry`]: rectangles, viewport metrics and the minimum-size policy
//! - [`registry`]: named window records
//! - [`stacking`]: stacking counter and focus
//! - [`lifecycle`]: open/close/minimize/maximize/toggle transitions
//! - [`drag`] and [`resize`]: pointer gesture controllers
//! - [`containment`]: viewport clamping
//! - [`manager`]: the [`WindowManager`] aggregate that wires the pieces together

pub mod config;
pub mod containment;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod host;
pub mod lifecycle;
pub mod manager;
pub mod model;
pub mod registry;
pub mod resize;
pub mod stacking;
pub mod surface;

pub use config::WmConfig;
pub use containment::{clamp_to_viewport, contain_all, contain_rect};
pub use error::WmError;
pub use geometry::{clamp, minimum_extent, Point, Rect, Size, Viewport};
pub use host::{MemoryShellHost, ShellHost};
pub use manager::WindowManager;
pub use model::{
    CursorStyle, DragSession, InteractionSession, ResizeEdge, ResizeSession, WindowCommand,
    WindowSnapshot, WindowState,
};
pub use registry::{WindowRecord, WindowRegistry};
pub use resize::resize_rect;
pub use stacking::{StackingManager, DEFAULT_STACK_BASE};
pub use surface::{MemorySurface, WindowSurface};
