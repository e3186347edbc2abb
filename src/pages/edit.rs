//! Edit Form
//!
//! Loads the record named by the route, then behaves like the create form
//! but submits an update to that same identifier.

use super::form::FormState;
use crate::record::{Draft, Field, RecordId};
use crate::routes::Route;
use crate::transport::RecordTransport;

/// State owned by a mounted "edit student" page
#[derive(Debug)]
pub struct EditForm {
    id: RecordId,
    form: FormState,
    loaded: bool,
}

impl EditForm {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            form: FormState::default(),
            loaded: false,
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn draft(&self) -> &Draft {
        self.form.draft()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Fetch the record and populate the draft. On failure the draft stays
    /// blank.
    pub async fn load(&mut self, transport: &dyn RecordTransport) {
        match transport.get(&self.id).await {
            Ok(record) => {
                self.form.populate(Draft::from(&record));
                self.loaded = true;
            }
            Err(e) => {
                tracing::error!(student_id = %self.id, error = %e, "Failed to load student record");
            }
        }
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.edit(field, value);
    }

    /// Put the draft to the route's identifier and navigate to the list
    pub async fn submit(&mut self, transport: &dyn RecordTransport) -> Route {
        if let Some(draft) = self.form.begin_submit() {
            match transport.update(&self.id, &draft).await {
                Ok(_) => tracing::info!(student_id = %self.id, "Updated student record"),
                Err(e) => {
                    tracing::error!(student_id = %self.id, error = %e, "Failed to update student record")
                }
            }
        }
        self.form.finish(Route::List)
    }

    pub fn cancel(&mut self) -> Route {
        self.form.cancel()
    }

    /// Load the record, apply `changes` on top of it, and submit
    ///
    /// Returns `None` without sending an update when the record could not be
    /// loaded, since the blank draft would overwrite the stored fields.
    pub async fn patch(
        &mut self,
        transport: &dyn RecordTransport,
        changes: impl IntoIterator<Item = (Field, String)>,
    ) -> Option<Route> {
        self.load(transport).await;
        if !self.loaded {
            return None;
        }
        for (field, value) in changes {
            self.edit(field, value);
        }
        Some(self.submit(transport).await)
    }
}
