//! Chat message bubble

use leptos::prelude::*;

use crate::types::{ChatMessage, MessageRole};

/// Render a single transcript entry
#[component]
pub fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == MessageRole::User;

    view! {
        <div class=format!(
            "mb-3 message-appear {}",
            if is_user { "text-right" } else { "text-left" }
        )>
            <span class=format!(
                "inline-block max-w-[85%] p-2 rounded-lg whitespace-pre-wrap break-words text-left {}",
                if is_user {
                    "bg-teal-100 text-teal-800 dark:bg-teal-900/60 dark:text-teal-100"
                } else {
                    "bg-gray-100 text-gray-800 dark:bg-slate-800 dark:text-slate-100"
                }
            )>
                {message.content}
            </span>
        </div>
    }
}
