//! View Student Page
//!
//! Read-only card for the record named by `:id`.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::app::{route_id, LIST_PATH};
use crate::state::StudentRecord;

#[component]
pub fn ViewStudent() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| params.with(route_id));

    let student = create_rw_signal(StudentRecord::default());

    // Fetch on mount
    create_effect(move |_| {
        let id = id.get();
        spawn_local(async move {
            match api::fetch_student(&id).await {
                Ok(record) => student.set(record),
                Err(e) => api::log_error(&format!("Failed to fetch student {}", id), &e),
            }
        });
    });

    view! {
        <div class="max-w-xl mx-auto bg-gray-800 rounded-xl p-6 mt-4">
            <h2 class="text-2xl font-bold text-center mb-4">"Student Infos"</h2>
            <div class="border border-gray-700 rounded-lg p-4">
                <h3 class="text-lg font-semibold mb-3">
                    {move || format!("Student {} details:", id.get())}
                </h3>
                <ul class="divide-y divide-gray-700">
                    <li class="py-2"><b>"Name: "</b>{move || student.with(|s| s.name.clone())}</li>
                    <li class="py-2"><b>"Branch: "</b>{move || student.with(|s| s.branch.clone())}</li>
                    <li class="py-2"><b>"Mail: "</b>{move || student.with(|s| s.mail.clone())}</li>
                </ul>
            </div>
            <A
                href=LIST_PATH
                class="inline-block mt-4 px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg"
            >
                "Back"
            </A>
        </div>
    }
}
