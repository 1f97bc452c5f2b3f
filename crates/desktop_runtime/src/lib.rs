//! Leptos desktop shell around the [`desktop_wm`] window manager.
//!
//! Windows come from the build-time catalog in `apps.manifest.toml`; each one is registered with
//! the engine against a [`SignalSurface`] so engine writes re-render the frame. The browser
//! viewport, dock indicators and gesture feedback are provided by [`BrowserShellHost`].

pub mod catalog;
pub mod clock;
pub mod components;
pub mod error;
pub mod host;
pub mod logging;
pub mod runtime_context;
pub mod surface;

pub use catalog::{DesktopConfig, ShellConfig, WindowCatalog, WindowManifest};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use error::ShellError;
pub use host::{BrowserShellHost, HostSignals};
pub use runtime_context::{ShellWindow, ShellWindowManager};
pub use surface::{SignalSurface, SurfaceView};
