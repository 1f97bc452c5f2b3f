use super::*;

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let indicators = runtime.host.indicators;
    let items = runtime
        .catalog
        .with_value(|catalog| catalog.docked().cloned().collect::<Vec<_>>());

    view! {
        <footer class="dock" aria-label="Dock">
            <For each=move || items.clone() key=|item| item.name.clone() let:item>
                {
                    let name = store_value(item.name.clone());
                    let running = move || name.with_value(|name| indicators.get().contains(name));
                    view! {
                        <button
                            class="dock-item"
                            title=item.title.clone()
                            aria-label=item.title.clone()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch(WindowCommand::Toggle(name.get_value()));
                            }
                        >
                            <span class="dock-glyph" aria-hidden="true">{item.glyph.clone()}</span>
                            <span class="dock-indicator" class:running=running />
                        </button>
                    }
                }
            </For>
        </footer>
    }
}
