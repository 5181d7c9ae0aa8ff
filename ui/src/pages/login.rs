//! Login page
//!
//! There is no real authentication: a valid submission waits briefly and
//! then reloads the site at `/`.

use gloo_storage::{LocalStorage, Storage};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::{LoadingSpinner, ModeToggle};
use crate::forms::{LoginErrors, LoginField, LoginForm, SUBMIT_DELAY_MS};
use crate::routes::Page;

const STORAGE_KEY_EMAIL: &str = "softsell_remembered_email";

/// Informational popup for features that do not exist yet
fn notice(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            tracing::warn!("Could not show notice: {:?}", e);
        }
    }
}

fn remember_email(form: &LoginForm) {
    if form.remember_me {
        if let Err(e) = LocalStorage::set(STORAGE_KEY_EMAIL, &form.email) {
            tracing::warn!("Could not remember email: {}", e);
        }
    } else {
        LocalStorage::delete(STORAGE_KEY_EMAIL);
    }
}

fn redirect_home() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(Page::Home.path()) {
        tracing::error!("Redirect failed: {:?}", e);
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();

    let remembered = LocalStorage::get::<String>(STORAGE_KEY_EMAIL).ok();
    let form = RwSignal::new(LoginForm {
        remember_me: remembered.is_some(),
        email: remembered.unwrap_or_default(),
        ..LoginForm::default()
    });
    let errors = RwSignal::new(LoginErrors::default());
    let show_password = RwSignal::new(false);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let found = form.with_untracked(LoginForm::validate);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }

        form.with_untracked(remember_email);
        is_loading.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            is_loading.set(false);
            redirect_home();
        });
    };

    let go_home = move |_: web_sys::MouseEvent| navigate(Page::Home.path(), Default::default());
    let year = js_sys::Date::new_0().get_full_year();

    let input_class = move |field: LoginField| {
        let has_error = errors.with(|e| match field {
            LoginField::Email => e.email.is_some(),
            LoginField::Password => e.password.is_some(),
        });
        format!(
            "w-full px-3 py-2 text-sm rounded-md border bg-white dark:bg-slate-900 focus:outline-none focus:ring-2 focus:ring-teal-500 {}",
            if has_error { "border-red-500" } else { "border-gray-300 dark:border-slate-700" }
        )
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-slate-800">
                <div class="max-w-7xl mx-auto px-4 h-16 flex items-center justify-between">
                    <a href=Page::Home.path() class="flex items-center gap-2">
                        <div class="w-8 h-8 rounded-md bg-teal-600 text-white font-bold flex items-center justify-center">"S"</div>
                        <span class="text-xl font-bold">"SoftSell"</span>
                    </a>
                    <ModeToggle />
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center px-4 py-12">
                <div class="w-full max-w-md space-y-6">
                    <button
                        type="button"
                        on:click=go_home
                        class="text-sm text-gray-500 dark:text-slate-400 hover:text-gray-900 dark:hover:text-white"
                    >
                        "← Back to home"
                    </button>

                    <div class="space-y-2 text-center">
                        <h1 class="text-3xl font-bold">"Welcome back"</h1>
                        <p class="text-gray-500 dark:text-slate-400">"Sign in to your account to continue"</p>
                    </div>

                    <form on:submit=on_submit novalidate=true class="space-y-4">
                        <div class="space-y-1">
                            <label for="email" class="text-sm font-medium">"Email"</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="name@company.com"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.email = event_target_value(&ev));
                                    errors.update(|e| e.clear(LoginField::Email));
                                }
                                class=move || input_class(LoginField::Email)
                            />
                            {move || errors.with(|e| e.email).map(|message| view! {
                                <p class="text-sm text-red-500">{message}</p>
                            })}
                        </div>

                        <div class="space-y-1">
                            <div class="flex items-center justify-between">
                                <label for="password" class="text-sm font-medium">"Password"</label>
                                <button
                                    type="button"
                                    on:click=move |_| notice("Reset password feature coming soon!")
                                    class="text-sm text-teal-600 hover:underline"
                                >
                                    "Forgot password?"
                                </button>
                            </div>
                            <div class="relative">
                                <input
                                    id="password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    placeholder="••••••••"
                                    prop:value=move || form.with(|f| f.password.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.password = event_target_value(&ev));
                                        errors.update(|e| e.clear(LoginField::Password));
                                    }
                                    class=move || format!("{} pr-10", input_class(LoginField::Password))
                                />
                                <button
                                    type="button"
                                    on:click=move |_| show_password.update(|show| *show = !*show)
                                    aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                                    class="absolute right-2 top-1/2 -translate-y-1/2 text-gray-500"
                                >
                                    {move || if show_password.get() { "🙈" } else { "👁" }}
                                </button>
                            </div>
                            {move || errors.with(|e| e.password).map(|message| view! {
                                <p class="text-sm text-red-500">{message}</p>
                            })}
                        </div>

                        <div class="flex items-center gap-2">
                            <input
                                id="remember"
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.remember_me)
                                on:change=move |ev| form.update(|f| f.remember_me = event_target_checked(&ev))
                                class="w-4 h-4 accent-teal-600"
                            />
                            <label for="remember" class="text-sm">"Remember me"</label>
                        </div>

                        <button
                            type="submit"
                            disabled=move || is_loading.get()
                            class="w-full flex items-center justify-center gap-2 px-4 py-2 text-sm font-medium rounded-md
                                   bg-teal-600 text-white hover:bg-teal-700 disabled:opacity-60 transition-colors"
                        >
                            {move || if is_loading.get() {
                                view! { <LoadingSpinner /> "Signing in..." }.into_any()
                            } else {
                                view! { "Sign in" }.into_any()
                            }}
                        </button>
                    </form>

                    <p class="text-center text-sm text-gray-500 dark:text-slate-400">
                        "Don't have an account? "
                        <span
                            on:click=move |_| notice("Sign up coming soon!")
                            class="text-teal-600 hover:underline cursor-pointer"
                        >
                            "Sign up"
                        </span>
                    </p>
                </div>
            </main>

            <footer class="border-t border-gray-200 dark:border-slate-800">
                <div class="max-w-7xl mx-auto px-4 py-6 flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-gray-500 dark:text-slate-400">
                    <p>{format!("© {} SoftSell Inc. All rights reserved.", year)}</p>
                    <div class="flex gap-4">
                        <span on:click=move |_| notice("Terms coming soon!") class="cursor-pointer hover:underline">"Terms"</span>
                        <span on:click=move |_| notice("Privacy coming soon!") class="cursor-pointer hover:underline">"Privacy"</span>
                        <span on:click=move |_| notice("Contact coming soon!") class="cursor-pointer hover:underline">"Contact"</span>
                    </div>
                </div>
            </footer>
        </div>
    }
}
