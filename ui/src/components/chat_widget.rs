//! Floating customer-support chat
//!
//! One user message is answered by exactly one assistant message. Sends are
//! serialised through [`Transcript::begin_send`]: while a reply is pending the
//! send button, Enter key and example questions do nothing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::api::ask_assistant;
use crate::components::{ChatBubble, TypingIndicator};
use crate::state::AppState;
use crate::types::{Transcript, EXAMPLE_QUESTIONS};

/// Record `text` as the next user message and clear the input.
///
/// Returns the message to send, or `None` when the text is blank or a reply
/// is still pending; in that case neither signal changes.
pub(crate) fn begin_send(
    transcript: RwSignal<Transcript>,
    input: RwSignal<String>,
    text: &str,
) -> Option<String> {
    let mut outgoing = None;
    transcript.update(|t| outgoing = t.begin_send(text));
    if outgoing.is_some() {
        input.set(String::new());
    }
    outgoing
}

/// Example questions fill the input and then go through [`begin_send`]
pub(crate) fn ask_example(
    transcript: RwSignal<Transcript>,
    input: RwSignal<String>,
    question: &str,
) -> Option<String> {
    if transcript.with_untracked(Transcript::is_pending) {
        return None;
    }
    input.set(question.to_string());
    begin_send(transcript, input, question)
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let state = expect_context::<AppState>();
    let api_base = StoredValue::new(state.api_base.clone());

    let is_open = RwSignal::new(false);
    let transcript = RwSignal::new(Transcript::with_greeting());
    let input = RwSignal::new(String::new());
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    let is_pending = Memo::new(move |_| transcript.with(Transcript::is_pending));

    // Keep the newest message in view
    Effect::new(move |_| {
        transcript.track();
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let dispatch = move |outgoing: Option<String>| {
        let Some(message) = outgoing else {
            return;
        };
        spawn_local(async move {
            let reply = ask_assistant(&api_base.get_value(), &message).await;
            transcript.update(|t| t.finish_send(reply));
        });
    };
    let send = move |text: String| dispatch(begin_send(transcript, input, &text));

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send(input.get_untracked());
        }
    };

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end gap-3">
            <Show when=move || is_open.get()>
                <div class="chat-panel w-80 sm:w-96 flex flex-col bg-white dark:bg-slate-900 border border-gray-200 dark:border-slate-700 rounded-xl shadow-2xl overflow-hidden">
                    <div class="px-4 py-3 bg-teal-600 text-white">
                        <h2 class="font-semibold">"Customer Support"</h2>
                    </div>

                    <div class="flex-1 overflow-y-auto p-4 min-h-[12rem]">
                        <For
                            each=move || {
                                transcript.with(|t| {
                                    t.messages().iter().cloned().enumerate().collect::<Vec<_>>()
                                })
                            }
                            key=|(index, _)| *index
                            children=move |(_, message)| view! { <ChatBubble message=message /> }
                        />
                        <Show when=move || is_pending.get()>
                            <TypingIndicator />
                        </Show>
                        <div node_ref=messages_end_ref></div>
                    </div>

                    <div class="px-4 py-2 border-t border-gray-200 dark:border-slate-700">
                        <div class="flex flex-wrap gap-2">
                            {EXAMPLE_QUESTIONS
                                .iter()
                                .map(|&question| view! {
                                    <button
                                        on:click=move |_| dispatch(ask_example(transcript, input, question))
                                        disabled=move || is_pending.get()
                                        class="text-xs px-2 py-1 rounded-full bg-teal-50 text-teal-700 hover:bg-teal-100
                                               dark:bg-slate-800 dark:text-teal-300 dark:hover:bg-slate-700
                                               disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                                    >
                                        {question}
                                    </button>
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="p-3 border-t border-gray-200 dark:border-slate-700">
                        <div class="flex gap-2">
                            <input
                                type="text"
                                prop:value=move || input.get()
                                on:input=move |ev| input.set(event_target_value(&ev))
                                on:keydown=on_keydown
                                placeholder="Type your question..."
                                class="flex-1 px-3 py-2 text-sm rounded-lg border border-gray-300 bg-white
                                       dark:bg-slate-800 dark:border-slate-600 dark:text-slate-100
                                       focus:outline-none focus:ring-2 focus:ring-teal-500"
                            />
                            <button
                                on:click=move |_| send(input.get_untracked())
                                disabled=move || is_pending.get()
                                class="px-4 py-2 text-sm font-medium rounded-lg bg-teal-600 text-white hover:bg-teal-700
                                       disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                            >
                                "Send"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <button
                on:click=move |_| is_open.update(|open| *open = !*open)
                aria-label=move || if is_open.get() { "Close chat" } else { "Open chat" }
                class="w-14 h-14 rounded-full bg-teal-600 hover:bg-teal-700 text-white shadow-lg
                       flex items-center justify-center text-2xl transition-colors"
            >
                {move || if is_open.get() { "✕" } else { "💬" }}
            </button>
        </div>
    }
}
