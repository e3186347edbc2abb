//! App Root Component
//!
//! Routing table: four paths, one page each. Pages own their own state.

use leptos::*;
use leptos_router::*;

use crate::pages::{AddStudent, EditStudent, Home, ViewStudent};
use crate::state::RecordId;

pub const LIST_PATH: &str = "/";
pub const ADD_PATH: &str = "/addstudent";

/// Path of the edit page for a record
pub fn edit_path(id: &RecordId) -> String {
    format!("/editstudent/{}", urlencoding::encode(&id.to_string()))
}

/// Path of the detail page for a record
pub fn view_path(id: &RecordId) -> String {
    format!("/viewstudent/{}", urlencoding::encode(&id.to_string()))
}

/// Identifier from the `:id` route parameter
pub fn route_id(params: &ParamsMap) -> RecordId {
    parse_id(params.get("id").map(String::as_str).unwrap_or_default())
}

// Only canonical integers become numbers; "007" stays text.
fn parse_id(raw: &str) -> RecordId {
    let raw = urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    match raw.parse::<i64>() {
        Ok(n) if n.to_string() == raw => RecordId::Number(n),
        _ => RecordId::Text(raw),
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white">
                <main class="container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/addstudent" view=AddStudent />
                        <Route path="/editstudent/:id" view=EditStudent />
                        <Route path="/viewstudent/:id" view=ViewStudent />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=LIST_PATH
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Students"
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_paths() {
        assert_eq!(edit_path(&RecordId::Number(3)), "/editstudent/3");
        assert_eq!(view_path(&RecordId::Text("a1".to_string())), "/viewstudent/a1");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), RecordId::Number(12));
        assert_eq!(parse_id("x-9"), RecordId::Text("x-9".to_string()));
        assert_eq!(parse_id("007"), RecordId::Text("007".to_string()));
    }

    #[test]
    fn test_text_ids_survive_paths() {
        for raw in ["a/b", "a?b", "a#b", "007", "ana lee"] {
            let id = RecordId::Text(raw.to_string());
            let path = view_path(&id);
            let segment = path.trim_start_matches("/viewstudent/");
            assert!(!segment.contains(['/', '?', '#']));
            assert_eq!(parse_id(segment), id);
        }
    }
}
