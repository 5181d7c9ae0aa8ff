//! Header component

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::ModeToggle;
use crate::routes::Page;

/// In-page sections reachable from the navigation
pub const SECTIONS: [(&str, &str); 4] = [
    ("how-it-works", "How It Works"),
    ("why-choose-us", "Why Choose Us"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

/// Smooth-scroll to the element with the given id, if it is on the page
pub fn scroll_to_section(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

pub(crate) fn toggle(flag: RwSignal<bool>) {
    flag.update(|value| *value = !*value);
}

/// Sticky site header with section navigation and a collapsible mobile menu
#[component]
pub fn Header() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    let section_link = move |id: &'static str, label: &'static str, class: &'static str| {
        view! {
            <a
                href=format!("#{}", id)
                on:click=move |ev| {
                    ev.prevent_default();
                    menu_open.set(false);
                    scroll_to_section(id);
                }
                class=class
            >
                {label}
            </a>
        }
    };

    view! {
        <header class="sticky top-0 z-40 w-full border-b border-gray-200 dark:border-slate-800 bg-white/95 dark:bg-slate-950/95 backdrop-blur">
            <div class="max-w-7xl mx-auto px-4 h-16 flex items-center justify-between">
                <a href=Page::Home.path() class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                    <div class="w-8 h-8 rounded-md bg-teal-600 text-white font-bold flex items-center justify-center">"S"</div>
                    <span class="text-xl font-bold">"SoftSell"</span>
                </a>

                <nav class="hidden md:flex items-center gap-6">
                    {SECTIONS
                        .into_iter()
                        .map(|(id, label)| section_link(id, label, "text-sm font-medium hover:text-teal-600"))
                        .collect::<Vec<_>>()}
                </nav>

                <div class="flex items-center gap-3">
                    <ModeToggle />
                    <div class="hidden md:flex items-center gap-3">
                        <a
                            href=Page::Login.path()
                            class="px-4 py-2 text-sm font-medium rounded-md border border-gray-300 dark:border-slate-700
                                   hover:bg-gray-100 dark:hover:bg-slate-800 transition-colors"
                        >
                            "Log In"
                        </a>
                        <button
                            on:click=move |_| scroll_to_section("contact")
                            class="px-4 py-2 text-sm font-medium rounded-md bg-teal-600 text-white hover:bg-teal-700 transition-colors"
                        >
                            "Get Started"
                        </button>
                    </div>
                    <button
                        on:click=move |_| toggle(menu_open)
                        aria-label="Toggle menu"
                        class="md:hidden w-9 h-9 flex items-center justify-center rounded-md hover:bg-gray-100 dark:hover:bg-slate-800"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden border-t border-gray-200 dark:border-slate-800 px-4 py-4 space-y-1">
                    {SECTIONS
                        .into_iter()
                        .map(|(id, label)| {
                            section_link(id, label, "block py-2 text-sm font-medium hover:text-teal-600")
                        })
                        .collect::<Vec<_>>()}
                    <a
                        href=Page::Login.path()
                        on:click=move |_| menu_open.set(false)
                        class="block py-2 text-sm font-medium hover:text-teal-600"
                    >
                        "Log In"
                    </a>
                </div>
            </Show>
        </header>
    }
}
