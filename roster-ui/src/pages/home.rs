//! Home Page
//!
//! Student table. Fetches the collection on mount; each row links to the
//! view and edit pages and can be deleted.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::app::{edit_path, view_path, ADD_PATH};
use crate::components::Loading;
use crate::state::{RecordId, StudentRecord};

/// Collection fetch into the page's signal. Failures leave it untouched.
async fn load_students(students: RwSignal<Vec<StudentRecord>>, loaded: RwSignal<bool>) {
    match api::fetch_students().await {
        Ok(list) => {
            students.set(list);
            loaded.set(true);
        }
        Err(e) => api::log_error("Failed to fetch students", &e),
    }
}

/// Student list page component
#[component]
pub fn Home() -> impl IntoView {
    let students = create_rw_signal(Vec::<StudentRecord>::new());
    let loaded = create_rw_signal(false);

    // Fetch on mount
    create_effect(move |_| {
        spawn_local(load_students(students, loaded));
    });

    let on_delete = move |id: RecordId| {
        spawn_local(async move {
            if let Err(e) = api::delete_student(&id).await {
                api::log_error(&format!("Failed to delete student {}", id), &e);
            }
            load_students(students, loaded).await;
        });
    };

    view! {
        <div class="space-y-4 py-4">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Students"</h1>
                <A
                    href=ADD_PATH
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Add Student"
                </A>
            </div>

            <table class="w-full bg-gray-800 rounded-xl shadow">
                <thead>
                    <tr class="text-left text-gray-400 border-b border-gray-700">
                        <th scope="col" class="p-3">"#"</th>
                        <th scope="col" class="p-3">"Name"</th>
                        <th scope="col" class="p-3">"Branch"</th>
                        <th scope="col" class="p-3">"School mail"</th>
                        <th scope="col" class="p-3">"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        students.get().into_iter().enumerate().map(|(index, student)| {
                            view! {
                                <StudentRow index=index + 1 student=student on_delete=on_delete />
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>

            {move || (!loaded.get()).then(|| view! { <Loading /> })}
        </div>
    }
}

#[component]
fn StudentRow(
    index: usize,
    student: StudentRecord,
    on_delete: impl Fn(RecordId) + Copy + 'static,
) -> impl IntoView {
    let actions = student.id.clone().map(|id| {
        let delete_id = id.clone();
        view! {
            <A href=view_path(&id) class="px-3 py-1 bg-primary-600 hover:bg-primary-700 rounded mx-1">
                "View"
            </A>
            <A href=edit_path(&id) class="px-3 py-1 border border-primary-500 hover:bg-gray-700 rounded mx-1">
                "Edit"
            </A>
            <button
                on:click=move |_| on_delete(delete_id.clone())
                class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded mx-1"
            >
                "Delete"
            </button>
        }
    });

    view! {
        <tr class="border-b border-gray-700 last:border-0">
            <th scope="row" class="p-3">{index}</th>
            <td class="p-3">{student.name}</td>
            <td class="p-3">{student.branch}</td>
            <td class="p-3">{student.mail}</td>
            <td class="p-3">{actions}</td>
        </tr>
    }
}
