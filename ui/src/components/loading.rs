//! Loading indicators

use leptos::prelude::*;

/// Animated loading dots
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <span class="w-2 h-2 bg-teal-500 rounded-full dot-bounce-1"></span>
            <span class="w-2 h-2 bg-teal-500 rounded-full dot-bounce-2"></span>
            <span class="w-2 h-2 bg-teal-500 rounded-full dot-bounce-3"></span>
        </div>
    }
}

/// Spinner shown inside buttons while a form is submitting
#[component]
pub fn LoadingSpinner(
    #[prop(default = "w-4 h-4")] size: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=format!("{} animate-spin", size)
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4"
            ></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}

/// "Is typing" bubble while the assistant reply is pending
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="mb-3 text-left message-appear">
            <span class="inline-flex items-center gap-2 p-2 rounded-lg bg-gray-100 text-gray-500 dark:bg-slate-800 dark:text-slate-400">
                <LoadingDots />
                <span class="text-xs">"Typing..."</span>
            </span>
        </div>
    }
}
