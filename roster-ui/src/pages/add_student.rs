//! Add Student Page
//!
//! Empty draft posted as a new record; always returns to the list.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::app::LIST_PATH;
use crate::components::StudentForm;
use crate::state::Draft;

#[component]
pub fn AddStudent() -> impl IntoView {
    let draft = create_rw_signal(Draft::default());
    let submitting = create_rw_signal(false);
    let navigate = use_navigate();

    let on_submit = move || {
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        let body = draft.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = api::create_student(&body).await {
                api::log_error("Failed to create student", &e);
            }
            navigate(LIST_PATH, Default::default());
        });
    };

    view! {
        <StudentForm
            title="Add Student to System"
            draft=draft
            submitting=submitting
            on_submit=on_submit
        />
    }
}
