//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod icons;
mod menu_bar;
mod window;

use desktop_wm::{ResizeEdge, WindowCommand, WindowState};
use leptos::*;

use self::{dock::Dock, icons::DesktopIcons, menu_bar::MenuBar, window::DesktopWindow};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Root desktop view: menu bar, icon grid, window layer and dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let host = runtime.host;

    // The engine booted before the menu bar existed; contain again once its height can be measured.
    request_animation_frame(move || {
        runtime.viewport_changed();
    });

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            style=move || host.root_style()
        >
            <MenuBar />
            <DesktopIcons />
            <div class="desktop-window-layer">
                <For
                    each=move || runtime.shell_windows()
                    key=|window| window.manifest.name.clone()
                    let:window
                >
                    <DesktopWindow window=window />
                </For>
            </div>
            <Dock />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}

/// Title the menu bar shows: the active window's, else the shell's own.
fn menu_bar_title<'a>(
    windows: impl IntoIterator<Item = (&'a str, bool)>,
    fallback: &'a str,
) -> &'a str {
    windows
        .into_iter()
        .find_map(|(title, active)| active.then_some(title))
        .unwrap_or(fallback)
}

fn maximize_button_label(state: WindowState) -> &'static str {
    if state == WindowState::Maximized {
        "Restore window"
    } else {
        "Maximize window"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_edge_has_a_distinct_class() {
        let classes: std::collections::BTreeSet<_> =
            ResizeEdge::ALL.iter().map(|edge| resize_edge_class(*edge)).collect();
        assert_eq!(classes.len(), ResizeEdge::ALL.len());
        assert_eq!(resize_edge_class(ResizeEdge::SouthWest), "edge-sw");
    }

    #[test]
    fn menu_bar_follows_the_active_window() {
        let windows = [("About", false), ("Notes", true)];
        assert_eq!(menu_bar_title(windows, "Desktop"), "Notes");
        assert_eq!(menu_bar_title([("About", false)], "Desktop"), "Desktop");
    }

    #[test]
    fn maximize_label_flips_when_maximized() {
        assert_eq!(maximize_button_label(WindowState::Open), "Maximize window");
        assert_eq!(
            maximize_button_label(WindowState::Maximized),
            "Restore window"
        );
    }
}
