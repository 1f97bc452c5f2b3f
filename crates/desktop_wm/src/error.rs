//! Engine errors.
//!
//! Public command entry points on [`crate::WindowManager`] swallow these after logging them; the
//! controllers use them internally to bail out early with `?`.

use thiserror::Error;

use crate::model::WindowState;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WmError {
    /// The name is not in the registry.
    #[error("window `{0}` not found")]
    WindowNotFound(String),
    /// A window with this name was already registered.
    #[error("window `{0}` is already registered")]
    DuplicateWindow(String),
    /// The transition is not defined for the window's current state.
    #[error("cannot {operation} window `{name}` while it is {state}")]
    InvalidState {
        name: String,
        operation: &'static str,
        state: WindowState,
    },
}

impl WmError {
    pub(crate) fn invalid_state(name: &str, operation: &'static str, state: WindowState) -> Self {
        Self::InvalidState {
            name: name.to_string(),
            operation,
            state,
        }
    }
}
