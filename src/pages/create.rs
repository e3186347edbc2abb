//! Create Form
//!
//! Starts from an empty draft and posts it as a new record.

use super::form::FormState;
use crate::record::{Draft, Field};
use crate::routes::Route;
use crate::transport::RecordTransport;

/// State owned by a mounted "add student" page
#[derive(Debug, Default)]
pub struct CreateForm {
    form: FormState,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn draft(&self) -> &Draft {
        self.form.draft()
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.edit(field, value);
    }

    /// Post the draft and navigate to the list, whatever the outcome
    pub async fn submit(&mut self, transport: &dyn RecordTransport) -> Route {
        if let Some(draft) = self.form.begin_submit() {
            match transport.create(&draft).await {
                Ok(record) => {
                    tracing::info!(student_id = ?record.id, "Created student record")
                }
                Err(e) => tracing::error!(error = %e, "Failed to create student record"),
            }
        }
        self.form.finish(Route::List)
    }

    pub fn cancel(&mut self) -> Route {
        self.form.cancel()
    }
}
