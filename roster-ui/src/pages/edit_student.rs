//! Edit Student Page
//!
//! Loads the record named by `:id` into a draft and puts it back to the same
//! identifier.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::app::{route_id, LIST_PATH};
use crate::components::StudentForm;
use crate::state::Draft;

#[component]
pub fn EditStudent() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| params.with(route_id));

    let draft = create_rw_signal(Draft::default());
    let submitting = create_rw_signal(false);
    let navigate = use_navigate();

    // Fetch on mount
    create_effect(move |_| {
        let id = id.get();
        spawn_local(async move {
            match api::fetch_student(&id).await {
                Ok(record) => draft.set(Draft::from(&record)),
                Err(e) => api::log_error(&format!("Failed to fetch student {}", id), &e),
            }
        });
    });

    let on_submit = move || {
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        let id = id.get_untracked();
        let body = draft.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = api::update_student(&id, &body).await {
                api::log_error(&format!("Failed to update student {}", id), &e);
            }
            navigate(LIST_PATH, Default::default());
        });
    };

    view! {
        <StudentForm
            title="Edit Student Info"
            draft=draft
            submitting=submitting
            on_submit=on_submit
        />
    }
}
