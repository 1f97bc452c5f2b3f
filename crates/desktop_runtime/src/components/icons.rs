use super::*;

#[component]
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icons = runtime
        .catalog
        .with_value(|catalog| catalog.desktop_icons().cloned().collect::<Vec<_>>());

    view! {
        <div class="desktop-icons" role="list">
            <For each=move || icons.clone() key=|icon| icon.name.clone() let:icon>
                {
                    let name = store_value(icon.name.clone());
                    view! {
                        <button
                            class="desktop-icon"
                            role="listitem"
                            on:dblclick=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch(WindowCommand::Open(name.get_value()));
                            }
                        >
                            <span class="desktop-icon-glyph" aria-hidden="true">
                                {icon.glyph.clone()}
                            </span>
                            <span class="desktop-icon-label">{icon.title.clone()}</span>
                        </button>
                    }
                }
            </For>
        </div>
    }
}
