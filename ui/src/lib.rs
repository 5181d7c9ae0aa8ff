//! SoftSell UI - Leptos frontend
//!
//! Marketing site for software license resale with a floating support chat
//! backed by the SoftSell server.

pub mod api;
pub mod components;
pub mod forms;
pub mod pages;
pub mod routes;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};

use pages::{home::HomePage, login::LoginPage};
use routes::{follow_location, Page};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Title text="SoftSell - Software License Resale Platform" />
        <Meta
            name="description"
            content="Turn unused software licenses into cash with SoftSell's secure resale platform."
        />
        <Router>
            <PageTracker />
            <div class="min-h-screen bg-white text-gray-900 dark:bg-slate-950 dark:text-slate-100">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            </div>
        </Router>
    }
}

/// Tracks the shown page, including back/forward navigation
#[component]
fn PageTracker() -> impl IntoView {
    let location = use_location();
    let current = RwSignal::new(None::<Page>);

    Effect::new(move |_| {
        let path = location.pathname.get();
        if follow_location(current, &path) {
            match current.get_untracked() {
                Some(page) => tracing::debug!("Showing {:?} page", page),
                None => tracing::debug!("No page for {}", path),
            }
        }
    });
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-400 mb-4">"404"</h1>
                <p class="text-xl text-gray-500 mb-8">"Page not found"</p>
                <a
                    href=Page::Home.path()
                    class="px-6 py-3 bg-teal-600 hover:bg-teal-700 text-white rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
