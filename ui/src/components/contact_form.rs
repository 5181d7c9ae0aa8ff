//! Contact form with inline validation and a simulated submission

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::LoadingSpinner;
use crate::forms::{ContactErrors, ContactField, ContactForm as ContactFormState, SUBMIT_DELAY_MS};
use crate::types::LicenseType;

const INPUT_CLASS: &str = "w-full px-3 py-2 text-sm rounded-md border bg-white dark:bg-slate-900 \
                           focus:outline-none focus:ring-2 focus:ring-teal-500";

fn field_class(errors: RwSignal<ContactErrors>, field: ContactField) -> String {
    let border = if errors.with(|e| e.get(field).is_some()) {
        "border-red-500"
    } else {
        "border-gray-300 dark:border-slate-700"
    };
    format!("{} {}", INPUT_CLASS, border)
}

/// Validate the form and publish the errors. True when it may be submitted.
pub(crate) fn validate_submission(
    form: RwSignal<ContactFormState>,
    errors: RwSignal<ContactErrors>,
) -> bool {
    let found = form.with_untracked(ContactFormState::validate);
    let valid = found.is_empty();
    errors.set(found);
    valid
}

/// Finish a simulated submission: show the thank-you state and clear the fields
pub(crate) fn complete_submission(
    form: RwSignal<ContactFormState>,
    is_submitting: RwSignal<bool>,
    is_submitted: RwSignal<bool>,
) {
    is_submitting.set(false);
    is_submitted.set(true);
    form.set(ContactFormState::default());
}

#[component]
fn FieldError(errors: RwSignal<ContactErrors>, field: ContactField) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field)).map(|message| {
            view! { <p class="text-sm text-red-500 mt-1">{message}</p> }
        })
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    let errors = RwSignal::new(ContactErrors::default());
    let is_submitting = RwSignal::new(false);
    let is_submitted = RwSignal::new(false);

    let edit = move |field: ContactField, value: String| {
        form.update(|f| f.set(field, value));
        errors.update(|e| e.clear(field));
    };
    let value_of = move |field: ContactField| form.with(|f| f.get(field).to_string());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        if !validate_submission(form, errors) {
            return;
        }

        is_submitting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            complete_submission(form, is_submitting, is_submitted);
        });
    };

    let text_field = move |field: ContactField,
                           id: &'static str,
                           label: &'static str,
                           input_type: &'static str,
                           placeholder: &'static str| {
        view! {
            <div class="space-y-1">
                <label for=id class="text-sm font-medium">{label}</label>
                <input
                    id=id
                    name=id
                    type=input_type
                    prop:value=move || value_of(field)
                    on:input=move |ev| edit(field, event_target_value(&ev))
                    placeholder=placeholder
                    class=move || field_class(errors, field)
                />
                <FieldError errors=errors field=field />
            </div>
        }
    };

    view! {
        <Show
            when=move || !is_submitted.get()
            fallback=move || view! {
                <div class="flex flex-col items-center text-center py-10 space-y-4">
                    <div class="w-16 h-16 rounded-full bg-teal-100 dark:bg-teal-900/50 text-teal-600 text-3xl flex items-center justify-center">
                        "✓"
                    </div>
                    <h3 class="text-2xl font-bold">"Thank You!"</h3>
                    <p class="text-gray-500 dark:text-slate-400">
                        "Your message has been received. One of our license specialists will contact you within 24 hours."
                    </p>
                    <button
                        on:click=move |_| is_submitted.set(false)
                        class="px-4 py-2 text-sm font-medium rounded-md bg-teal-600 text-white hover:bg-teal-700 transition-colors"
                    >
                        "Send Another Message"
                    </button>
                </div>
            }
        >
            <form on:submit=on_submit novalidate=true class="space-y-4">
                {text_field(ContactField::Name, "name", "Full Name", "text", "John Smith")}
                {text_field(ContactField::Email, "email", "Email", "email", "john@company.com")}
                {text_field(ContactField::Company, "company", "Company", "text", "Your Company")}

                <div class="space-y-1">
                    <label for="licenseType" class="text-sm font-medium">"License Type"</label>
                    <select
                        id="licenseType"
                        name="licenseType"
                        on:change=move |ev| edit(ContactField::LicenseType, event_target_value(&ev))
                        class=move || field_class(errors, ContactField::LicenseType)
                    >
                        <option
                            value=""
                            disabled=true
                            prop:selected=move || form.with(|f| f.license_type.is_empty())
                        >
                            "Select license type"
                        </option>
                        {LicenseType::ALL
                            .into_iter()
                            .map(|license| view! {
                                <option
                                    value=license.value()
                                    prop:selected=move || form.with(|f| f.license_type == license.value())
                                >
                                    {license.label()}
                                </option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <FieldError errors=errors field=ContactField::LicenseType />
                </div>

                <div class="space-y-1">
                    <label for="message" class="text-sm font-medium">"Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        prop:value=move || value_of(ContactField::Message)
                        on:input=move |ev| edit(ContactField::Message, event_target_value(&ev))
                        placeholder="Tell us about your licenses and requirements"
                        class=move || format!("min-h-[120px] {}", field_class(errors, ContactField::Message))
                    ></textarea>
                    <FieldError errors=errors field=ContactField::Message />
                </div>

                <button
                    type="submit"
                    disabled=move || is_submitting.get()
                    class="w-full flex items-center justify-center gap-2 px-4 py-2 text-sm font-medium rounded-md
                           bg-teal-600 text-white hover:bg-teal-700 disabled:opacity-60 transition-colors"
                >
                    {move || if is_submitting.get() {
                        view! { <LoadingSpinner /> "Submitting..." }.into_any()
                    } else {
                        view! { "Submit" }.into_any()
                    }}
                </button>
            </form>
        </Show>
    }
}
