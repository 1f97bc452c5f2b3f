use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// Lifecycle state of a window. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowState {
    #[default]
    Closed,
    Open,
    Minimized,
    Maximized,
}

impl WindowState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
            Self::Minimized => "minimized",
            Self::Maximized => "maximized",
        }
    }

    /// Whether the window is on screen (open or maximized).
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Open | Self::Maximized)
    }
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge or corner a resize handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ];

    pub fn has_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn has_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn has_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn has_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Cursor shown while this handle is hovered or dragged.
    pub fn cursor(self) -> CursorStyle {
        match self {
            Self::NorthWest | Self::SouthEast => CursorStyle::NwseResize,
            Self::NorthEast | Self::SouthWest => CursorStyle::NeswResize,
            Self::East | Self::West => CursorStyle::EwResize,
            Self::North | Self::South => CursorStyle::NsResize,
        }
    }
}

/// Pointer cursor feedback requested from the host while a gesture runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorStyle {
    Move,
    EwResize,
    NsResize,
    NwseResize,
    NeswResize,
}

impl CursorStyle {
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::EwResize => "ew-resize",
            Self::NsResize => "ns-resize",
            Self::NwseResize => "nwse-resize",
            Self::NeswResize => "nesw-resize",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub target: String,
    /// Pointer position relative to the window's top-left corner.
    pub offset: Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub target: String,
    pub edge: ResizeEdge,
    pub pointer_start: Point,
    pub rect_start: Rect,
}

/// The single process-wide pointer gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionSession {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

impl InteractionSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Name of the window being manipulated, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(&session.target),
            Self::Resizing(session) => Some(&session.target),
        }
    }
}

/// Commands the dispatch layer (control buttons, dock, desktop icons) maps raw input onto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "name", rename_all = "snake_case")]
pub enum WindowCommand {
    Open(String),
    Close(String),
    Minimize(String),
    Maximize(String),
    Toggle(String),
    BringToFront(String),
}

impl WindowCommand {
    pub fn name(&self) -> &str {
        match self {
            Self::Open(name)
            | Self::Close(name)
            | Self::Minimize(name)
            | Self::Maximize(name)
            | Self::Toggle(name)
            | Self::BringToFront(name) => name,
        }
    }
}

/// Serializable view of one window, used for debugging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub name: String,
    pub state: WindowState,
    pub active: bool,
    pub stack_order: u32,
    pub bounds: Rect,
    pub restore_bounds: Option<Rect>,
}
