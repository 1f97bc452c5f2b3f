use std::time::Duration;

use super::*;
use crate::clock::{format_menu_bar_clock, ClockSnapshot};
use crate::host::MENU_BAR_DOM_ID;

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let windows = runtime.windows;
    let (fallback_title, use_24_hour) = runtime
        .config
        .with_value(|config| (config.shell.title.clone(), config.shell.clock_24_hour));

    let clock_now = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let active_title = move || {
        windows.with_value(|windows| {
            let entries: Vec<(&str, bool)> = windows
                .iter()
                .map(|w| (w.manifest.title.as_str(), w.view.get().active))
                .collect();
            menu_bar_title(entries, &fallback_title).to_string()
        })
    };

    view! {
        <nav id=MENU_BAR_DOM_ID class="menu-bar" aria-label="Menu bar">
            <span class="menu-bar-logo" aria-hidden="true">"◆"</span>
            <span class="menu-bar-title">{active_title}</span>
            <span class="menu-bar-spacer" />
            <time class="menu-bar-clock">
                {move || format_menu_bar_clock(clock_now.get(), use_24_hour)}
            </time>
        </nav>
    }
}
