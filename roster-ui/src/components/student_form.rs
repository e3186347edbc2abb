//! Student Form Component
//!
//! The three text inputs plus submit/cancel, shared by the add and edit pages.

use leptos::*;
use leptos_router::*;

use crate::app::LIST_PATH;
use crate::state::{Draft, Field};

/// Draft form bound to a page-owned signal
#[component]
pub fn StudentForm(
    #[prop(into)]
    title: String,
    draft: RwSignal<Draft>,
    submitting: RwSignal<bool>,
    on_submit: impl Fn() + 'static,
) -> impl IntoView {
    let on_form_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit();
    };

    view! {
        <div class="max-w-xl mx-auto bg-gray-800 rounded-xl p-6 mt-4">
            <h2 class="text-2xl font-bold text-center mb-4">{title}</h2>
            <form on:submit=on_form_submit class="space-y-4">
                {Field::ALL.into_iter().map(|field| view! {
                    <FieldInput field=field draft=draft submitting=submitting />
                }).collect_view()}

                <div class="flex space-x-2">
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="px-4 py-2 border border-primary-500 rounded-lg hover:bg-primary-600
                               disabled:cursor-not-allowed transition-colors"
                    >
                        "Submit"
                    </button>
                    <A
                        href=LIST_PATH
                        class="px-4 py-2 border border-red-500 rounded-lg hover:bg-red-600 transition-colors"
                    >
                        "Cancel"
                    </A>
                </div>
            </form>
        </div>
    }
}

#[component]
fn FieldInput(
    field: Field,
    draft: RwSignal<Draft>,
    submitting: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.key() class="block text-sm text-gray-400 mb-2">{field.label()}</label>
            <input
                type="text"
                id=field.key()
                name=field.key()
                placeholder=field.placeholder()
                prop:value=move || draft.with(|d| d.get(field).to_string())
                on:input=move |ev| {
                    // The draft is frozen once submitted
                    if !submitting.get_untracked() {
                        draft.update(|d| d.set(field, event_target_value(&ev)));
                    }
                }
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
