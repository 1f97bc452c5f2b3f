//! The window manager aggregate.
//!
//! [`WindowManager`] owns the registry, the stacking counter, the interaction session and the
//! host, and exposes the command and pointer entry points the shell calls from its event
//! handlers. Commands naming unknown windows, or transitions that make no sense for the current
//! state, are logged at debug level and otherwise ignored.

use tracing::debug;

use crate::config::WmConfig;
use crate::containment::contain_all;
use crate::drag::{begin_drag, update_drag};
use crate::error::WmError;
use crate::geometry::{Point, Viewport};
use crate::host::ShellHost;
use crate::lifecycle;
use crate::model::{InteractionSession, ResizeEdge, WindowCommand, WindowSnapshot, WindowState};
use crate::registry::{WindowRecord, WindowRegistry};
use crate::resize::{begin_resize, update_resize};
use crate::stacking::StackingManager;
use crate::surface::WindowSurface;

pub struct WindowManager<S, H> {
    registry: WindowRegistry<S>,
    stacking: StackingManager,
    session: InteractionSession,
    host: H,
    config: WmConfig,
}

impl<S: WindowSurface, H: ShellHost> WindowManager<S, H> {
    pub fn new(host: H, config: WmConfig) -> Self {
        Self {
            registry: WindowRegistry::new(),
            stacking: StackingManager::new(config.stack_base),
            session: InteractionSession::Idle,
            host,
            config,
        }
    }

    /// Adds a closed window backed by `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`WmError::DuplicateWindow`] when the name is taken.
    pub fn register(&mut self, name: impl Into<String>, surface: S) -> Result<(), WmError> {
        self.registry.register(name, surface)
    }

    pub fn open(&mut self, name: &str) {
        let result = lifecycle::open(&mut self.registry, &mut self.stacking, &mut self.host, name);
        ignore("open", name, result);
    }

    pub fn close(&mut self, name: &str) {
        self.cancel_gesture_on(name);
        let result = lifecycle::close(&mut self.registry, &mut self.host, name);
        ignore("close", name, result);
    }

    pub fn minimize(&mut self, name: &str) {
        self.cancel_gesture_on(name);
        let result = lifecycle::minimize(&mut self.registry, name);
        ignore("minimize", name, result);
    }

    /// Maximizes an open window or restores a maximized one.
    pub fn maximize(&mut self, name: &str) {
        let result =
            lifecycle::maximize(&mut self.registry, &mut self.stacking, &mut self.host, name);
        ignore("maximize", name, result);
    }

    pub fn toggle(&mut self, name: &str) {
        let result =
            lifecycle::toggle(&mut self.registry, &mut self.stacking, &mut self.host, name);
        ignore("toggle", name, result);
    }

    pub fn bring_to_front(&mut self, name: &str) {
        let result = self
            .stacking
            .bring_to_front(&mut self.registry, name)
            .map(|_| ());
        ignore("bring to front", name, result);
    }

    pub fn dispatch(&mut self, command: WindowCommand) {
        match command {
            WindowCommand::Open(name) => self.open(&name),
            WindowCommand::Close(name) => self.close(&name),
            WindowCommand::Minimize(name) => self.minimize(&name),
            WindowCommand::Maximize(name) => self.maximize(&name),
            WindowCommand::Toggle(name) => self.toggle(&name),
            WindowCommand::BringToFront(name) => self.bring_to_front(&name),
        }
    }

    /// Pointer went down on a title bar.
    pub fn begin_drag(&mut self, name: &str, pointer: Point) {
        match begin_drag(
            &mut self.registry,
            &mut self.stacking,
            &mut self.host,
            name,
            pointer,
        ) {
            Ok(session) => self.session = InteractionSession::Dragging(session),
            Err(err) => ignore("drag", name, Err(err)),
        }
    }

    /// Pointer went down on a resize handle.
    pub fn begin_resize(&mut self, name: &str, edge: ResizeEdge, pointer: Point) {
        match begin_resize(
            &mut self.registry,
            &mut self.stacking,
            &mut self.host,
            name,
            edge,
            pointer,
        ) {
            Ok(session) => self.session = InteractionSession::Resizing(session),
            Err(err) => ignore("resize", name, Err(err)),
        }
    }

    /// Global pointer-move handler; routes to whichever gesture is running.
    pub fn pointer_move(&mut self, pointer: Point) {
        let viewport = self.host.viewport();
        let result = match &mut self.session {
            InteractionSession::Idle => return,
            InteractionSession::Resizing(session) => {
                let min = self.config.minimum_window_size(&viewport);
                update_resize(session, &mut self.registry, &viewport, min, pointer)
            }
            InteractionSession::Dragging(session) => update_drag(
                session,
                &mut self.registry,
                &viewport,
                &self.config,
                pointer,
            ),
        };
        if let Err(err) = result {
            debug!(error = %err, "pointer move ignored");
        }
    }

    /// Global pointer-up handler; ends any gesture.
    pub fn pointer_up(&mut self) {
        if self.session.is_idle() {
            return;
        }
        self.session = InteractionSession::Idle;
        self.host.set_cursor(None);
        self.host.set_text_selection(true);
    }

    /// Re-runs the containment pass against the host's current viewport.
    ///
    /// Called once at startup and on every viewport change. Returns how many windows moved.
    pub fn viewport_changed(&mut self) -> usize {
        let viewport = self.host.viewport();
        contain_all(&mut self.registry, &viewport)
    }

    pub fn viewport(&self) -> Viewport {
        self.host.viewport()
    }

    pub fn state(&self, name: &str) -> Option<WindowState> {
        self.registry.get(name).map(WindowRecord::state)
    }

    pub fn window(&self, name: &str) -> Option<&WindowRecord<S>> {
        self.registry.get(name)
    }

    pub fn windows(&self) -> impl Iterator<Item = &WindowRecord<S>> {
        self.registry.iter()
    }

    pub fn active_window(&self) -> Option<&str> {
        self.registry.active().map(WindowRecord::name)
    }

    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Windows sorted back to front.
    pub fn snapshot(&self) -> Vec<WindowSnapshot> {
        let mut windows: Vec<WindowSnapshot> =
            self.registry.iter().map(WindowRecord::snapshot).collect();
        windows.sort_by_key(|w| w.stack_order);
        windows
    }

    fn cancel_gesture_on(&mut self, name: &str) {
        if self.session.target() == Some(name) {
            self.pointer_up();
        }
    }
}

fn ignore(operation: &'static str, name: &str, result: Result<(), WmError>) {
    if let Err(err) = result {
        debug!(operation, window = name, error = %err, "window command ignored");
    }
}
