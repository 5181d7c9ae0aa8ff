//! Light / dark / system theme switch

use leptos::prelude::*;

use crate::state::{AppState, Theme};

/// Cycles Light -> Dark -> System on each press
#[component]
pub fn ModeToggle() -> impl IntoView {
    let state = expect_context::<AppState>();
    let theme = state.theme;

    view! {
        <button
            on:click=move |_| state.cycle_theme()
            title=move || format!("Theme: {}", theme.get().label())
            aria-label="Toggle theme"
            class="w-9 h-9 rounded-md border border-gray-200 dark:border-slate-700 flex items-center justify-center
                   hover:bg-gray-100 dark:hover:bg-slate-800 transition-colors"
        >
            {move || match theme.get() {
                Theme::Light => "☀️",
                Theme::Dark => "🌙",
                Theme::System => "🖥️",
            }}
        </button>
    }
}
