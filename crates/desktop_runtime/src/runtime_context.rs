//! Runtime provider and context wiring for the desktop shell.
//!
//! The provider owns the long-lived [`WindowManager`], registers every catalog window against a
//! signal-backed surface, and installs the global pointer and resize listeners. UI composition
//! stays in [`crate::components`].

use desktop_wm::{Point, ResizeEdge, WindowCommand, WindowManager};
use leptos::*;

use crate::{
    catalog::{self, DesktopConfig, WindowCatalog, WindowManifest},
    error::ShellError,
    host::{BrowserShellHost, HostSignals},
    surface::{SignalSurface, SurfaceView},
};

pub type ShellWindowManager = WindowManager<SignalSurface, BrowserShellHost>;

/// A registered catalog window and the signal its frame renders from.
#[derive(Debug, Clone)]
pub struct ShellWindow {
    pub manifest: WindowManifest,
    pub view: RwSignal<SurfaceView>,
}

#[derive(Clone, Copy)]
/// Leptos context for reading window views and driving the window manager.
pub struct DesktopRuntimeContext {
    /// The engine. Only event handlers touch it; views read the surface signals.
    pub wm: StoredValue<ShellWindowManager>,
    /// Registered windows in catalog order.
    pub windows: StoredValue<Vec<ShellWindow>>,
    /// Window catalog decoded at boot, used for the dock and desktop icons.
    pub catalog: StoredValue<WindowCatalog>,
    /// Shell and engine configuration from `desktop.toml`.
    pub config: StoredValue<DesktopConfig>,
    /// Dock indicator, cursor and text-selection signals written by the host.
    pub host: HostSignals,
}

impl DesktopRuntimeContext {
    pub fn dispatch(&self, command: WindowCommand) {
        self.wm.update_value(|wm| wm.dispatch(command));
    }

    pub fn begin_drag(&self, name: &str, pointer: Point) {
        self.wm.update_value(|wm| wm.begin_drag(name, pointer));
    }

    pub fn begin_resize(&self, name: &str, edge: ResizeEdge, pointer: Point) {
        self.wm
            .update_value(|wm| wm.begin_resize(name, edge, pointer));
    }

    pub fn pointer_move(&self, pointer: Point) {
        self.wm.update_value(|wm| wm.pointer_move(pointer));
    }

    pub fn pointer_up(&self) {
        self.wm.update_value(|wm| wm.pointer_up());
    }

    /// Re-contains open windows against the current viewport. Returns how many moved.
    pub fn viewport_changed(&self) -> usize {
        let mut moved = 0;
        self.wm.update_value(|wm| moved = wm.viewport_changed());
        if moved > 0 {
            logging::log!("viewport change moved {moved} window(s)");
        }
        moved
    }

    pub fn shell_windows(&self) -> Vec<ShellWindow> {
        self.windows.get_value()
    }

    pub fn window_view(&self, name: &str) -> Option<RwSignal<SurfaceView>> {
        self.windows
            .with_value(|windows| windows.iter().find(|w| w.manifest.name == name).map(|w| w.view))
    }
}

/// Builds the engine for `catalog`, registering one signal surface per window.
///
/// Windows flagged `open_on_boot` are opened, then the startup containment pass runs over them.
/// Windows that fail to register are skipped with a warning.
pub fn build_window_manager(
    catalog: &WindowCatalog,
    config: &DesktopConfig,
    host: BrowserShellHost,
) -> (ShellWindowManager, Vec<ShellWindow>) {
    let mut wm = WindowManager::new(host, config.wm.clone());
    let mut windows = Vec::with_capacity(catalog.windows.len());

    for manifest in &catalog.windows {
        let surface = SignalSurface::new(manifest.default_bounds());
        let registered = wm
            .register(manifest.name.clone(), surface)
            .map_err(|source| ShellError::Register {
                name: manifest.name.clone(),
                source,
            });
        match registered {
            Ok(()) => windows.push(ShellWindow {
                manifest: manifest.clone(),
                view: surface.view(),
            }),
            Err(err) => logging::warn!("{err}"),
        }
    }

    for manifest in catalog.open_on_boot() {
        wm.open(&manifest.name);
    }
    wm.viewport_changed();
    (wm, windows)
}

fn load_catalog() -> WindowCatalog {
    catalog::window_catalog().unwrap_or_else(|err| {
        logging::warn!("{err}");
        WindowCatalog {
            schema_version: 1,
            windows: Vec::new(),
        }
    })
}

fn load_config() -> DesktopConfig {
    catalog::desktop_config().unwrap_or_else(|err| {
        logging::warn!("{err}; using defaults");
        DesktopConfig::default()
    })
}

fn install_global_listeners(runtime: DesktopRuntimeContext) {
    let pointer_move = window_event_listener(ev::pointermove, move |ev| {
        runtime.pointer_move(pointer_from_pointer_event(&ev));
    });
    let pointer_up = window_event_listener(ev::pointerup, move |_| runtime.pointer_up());
    let pointer_cancel = window_event_listener(ev::pointercancel, move |_| runtime.pointer_up());
    let resize = window_event_listener(ev::resize, move |_| {
        runtime.viewport_changed();
    });

    on_cleanup(move || {
        pointer_move.remove();
        pointer_up.remove();
        pointer_cancel.remove();
        resize.remove();
    });
}

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Point {
    Point::new(ev.client_x(), ev.client_y())
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots the window manager.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let catalog = load_catalog();
    let config = load_config();
    let signals = HostSignals::new();
    let host = BrowserShellHost::new(&config.shell, signals);
    let (wm, windows) = build_window_manager(&catalog, &config, host);

    let runtime = DesktopRuntimeContext {
        wm: store_value(wm),
        windows: store_value(windows),
        catalog: store_value(catalog),
        config: store_value(config),
        host: signals,
    };

    provide_context(runtime);
    install_global_listeners(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
