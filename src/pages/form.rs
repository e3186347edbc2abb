//! Form state shared by the create and edit pages.

use crate::record::{Draft, Field};
use crate::routes::Route;

/// Where a form is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting field edits
    Idle,
    /// Request issued, waiting for it to settle
    Submitting,
    /// Submit finished; the page has handed off to another route
    Navigated(Route),
}

/// Local draft plus lifecycle phase
#[derive(Debug, Clone)]
pub struct FormState {
    draft: Draft,
    phase: FormPhase,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(Draft::default())
    }
}

impl FormState {
    pub fn new(draft: Draft) -> Self {
        Self {
            draft,
            phase: FormPhase::Idle,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == FormPhase::Idle
    }

    /// Apply one keystroke's worth of input. Ignored unless idle.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if self.is_idle() {
            self.draft.set(field, value);
        }
    }

    /// Replace the whole draft, e.g. once a loaded record arrives
    pub(crate) fn populate(&mut self, draft: Draft) {
        if self.is_idle() {
            self.draft = draft;
        }
    }

    /// Move to `Submitting` and hand back the body to send
    ///
    /// Returns `None` when the form already left `Idle`; callers must not
    /// issue a request in that case.
    pub(crate) fn begin_submit(&mut self) -> Option<Draft> {
        if !self.is_idle() {
            return None;
        }
        self.phase = FormPhase::Submitting;
        Some(self.draft.clone())
    }

    pub(crate) fn finish(&mut self, route: Route) -> Route {
        self.phase = FormPhase::Navigated(route.clone());
        route
    }

    /// Leave without submitting
    pub fn cancel(&mut self) -> Route {
        self.finish(Route::List)
    }

    /// Route the form navigated to, if it has
    pub fn navigated_to(&self) -> Option<&Route> {
        match &self.phase {
            FormPhase::Navigated(route) => Some(route),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits_only_while_idle() {
        let mut form = FormState::default();
        form.edit(Field::Name, "Ana");
        assert_eq!(form.draft().name, "Ana");

        let body = form.begin_submit().unwrap();
        assert_eq!(body.name, "Ana");
        assert_eq!(form.phase(), &FormPhase::Submitting);

        form.edit(Field::Name, "Late");
        assert_eq!(form.draft().name, "Ana");
    }

    #[test]
    fn test_second_submit_is_refused() {
        let mut form = FormState::default();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());

        assert_eq!(form.finish(Route::List), Route::List);
        assert!(form.begin_submit().is_none());
        assert_eq!(form.navigated_to(), Some(&Route::List));
    }

    #[test]
    fn test_cancel_navigates_to_list() {
        let mut form = FormState::new(Draft::new("a", "b", "c"));
        assert_eq!(form.cancel(), Route::List);
        assert!(!form.is_idle());
    }
}
