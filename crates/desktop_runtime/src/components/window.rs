use super::*;
use crate::runtime_context::{pointer_from_pointer_event, ShellWindow};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(window: ShellWindow) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let surface = window.view;
    let name = store_value(window.manifest.name.clone());
    let title = window.manifest.title.clone();
    let aria_label = title.clone();
    let glyph = window.manifest.glyph.clone();
    let body = window.manifest.body.clone();

    let command = move |make: fn(String) -> WindowCommand| {
        runtime.dispatch(make(name.get_value()));
    };
    let focus = move |_: web_sys::PointerEvent| {
        if !surface.get_untracked().active {
            command(WindowCommand::BringToFront);
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        let pointer = pointer_from_pointer_event(&ev);
        name.with_value(|name| runtime.begin_drag(name, pointer));
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        command(WindowCommand::Maximize);
    };
    let swallow_pointer = move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    view! {
        <section
            class=move || surface.get().frame_class()
            style=move || surface.get().frame_style()
            data-window=name.get_value()
            on:pointerdown=focus
            role="dialog"
            aria-label=aria_label
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <div class="titlebar-controls">
                    <button
                        class="titlebar-button close"
                        aria-label="Close window"
                        on:pointerdown=swallow_pointer
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            command(WindowCommand::Close);
                        }
                    />
                    <button
                        class="titlebar-button minimize"
                        aria-label="Minimize window"
                        on:pointerdown=swallow_pointer
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            command(WindowCommand::Minimize);
                        }
                    />
                    <button
                        class="titlebar-button maximize"
                        aria-label=move || maximize_button_label(surface.get().state)
                        on:pointerdown=swallow_pointer
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            command(WindowCommand::Maximize);
                        }
                    />
                </div>
                <div class="titlebar-title">
                    <span class="titlebar-glyph" aria-hidden="true">{glyph}</span>
                    <span>{title}</span>
                </div>
            </header>
            <div class="window-body">
                <p class="window-body-content">{body}</p>
            </div>
            <Show when=move || surface.get().state == WindowState::Open fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle name=name edge=edge /> })
                    .collect_view()}
            </Show>
        </section>
    }
}

#[component]
fn WindowResizeHandle(name: StoredValue<String>, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        let pointer = pointer_from_pointer_event(&ev);
        name.with_value(|name| runtime.begin_resize(name, edge, pointer));
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}
