//! Routing Table
//!
//! Client-side routes and their paths. Owns no state.
//!
//! | Path | Page |
//! |---|---|
//! | `/` | list |
//! | `/addstudent` | create form |
//! | `/editstudent/:id` | edit form |
//! | `/viewstudent/:id` | detail view |

use std::fmt;

use crate::record::RecordId;

pub const LIST_PATH: &str = "/";
pub const ADD_PATH: &str = "/addstudent";
pub const EDIT_PREFIX: &str = "/editstudent";
pub const VIEW_PREFIX: &str = "/viewstudent";

/// A resolved client-side route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Add,
    Edit(RecordId),
    View(RecordId),
}

impl Route {
    /// Resolve a path to a route
    ///
    /// Query strings and fragments are ignored, as is a trailing slash.
    /// Edit and view paths without an identifier do not resolve.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => LIST_PATH,
            trimmed => trimmed,
        };

        if path == LIST_PATH {
            return Some(Route::List);
        }
        if path == ADD_PATH {
            return Some(Route::Add);
        }
        if let Some(id) = param(path, EDIT_PREFIX) {
            return Some(Route::Edit(id));
        }
        if let Some(id) = param(path, VIEW_PREFIX) {
            return Some(Route::View(id));
        }
        None
    }

    /// Path this route is reachable at
    pub fn path(&self) -> String {
        match self {
            Route::List => LIST_PATH.to_string(),
            Route::Add => ADD_PATH.to_string(),
            Route::Edit(id) => format!("{}/{}", EDIT_PREFIX, segment(id)),
            Route::View(id) => format!("{}/{}", VIEW_PREFIX, segment(id)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn segment(id: &RecordId) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}

/// Extract the single `:id` segment following `prefix`, percent-decoded
fn param(path: &str, prefix: &str) -> Option<RecordId> {
    let rest = path.strip_prefix(prefix)?.strip_prefix('/')?;
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    urlencoding::decode(rest).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Some(Route::List));
        assert_eq!(Route::parse(""), Some(Route::List));
        assert_eq!(Route::parse("/addstudent"), Some(Route::Add));
        assert_eq!(
            Route::parse("/editstudent/3"),
            Some(Route::Edit(RecordId::Number(3)))
        );
        assert_eq!(
            Route::parse("/viewstudent/abc/"),
            Some(Route::View(RecordId::Text("abc".to_string())))
        );
        assert_eq!(
            Route::parse("/viewstudent/5?tab=1"),
            Some(Route::View(RecordId::Number(5)))
        );
    }

    #[test]
    fn test_legacy_paths_do_not_resolve() {
        assert_eq!(Route::parse("/viezstudent"), None);
        assert_eq!(Route::parse("/editstudent"), None);
        assert_eq!(Route::parse("/viewstudent/"), None);
        assert_eq!(Route::parse("/viewstudent/1/2"), None);
        assert_eq!(Route::parse("/students"), None);
    }

    #[test]
    fn test_path_round_trips_through_parse() {
        for route in [
            Route::List,
            Route::Add,
            Route::Edit(RecordId::Number(12)),
            Route::View(RecordId::Number(4)),
            Route::View(RecordId::Number(-4)),
            Route::Edit(RecordId::Text("a/b".to_string())),
            Route::View(RecordId::Text("a?b".to_string())),
            Route::View(RecordId::Text("a#b".to_string())),
            Route::Edit(RecordId::Text("007".to_string())),
            Route::View(RecordId::Text("ana lee%".to_string())),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_text_ids_are_encoded_in_paths() {
        assert_eq!(
            Route::View(RecordId::Text("a/b".to_string())).path(),
            "/viewstudent/a%2Fb"
        );
        assert_eq!(
            Route::Edit(RecordId::Text("a?b".to_string())).path(),
            "/editstudent/a%3Fb"
        );
    }
}
