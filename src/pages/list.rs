//! List View
//!
//! Fetches the whole collection on activation and renders it as a table.
//! Each row links to its detail and edit routes and can be deleted.

use crate::record::{RecordId, StudentRecord};
use crate::routes::Route;
use crate::transport::RecordTransport;

/// State owned by a mounted list page
#[derive(Debug, Default)]
pub struct ListView {
    records: Vec<StudentRecord>,
    loaded: bool,
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow<'a> {
    /// 1-based position in the collection
    pub index: usize,
    pub record: &'a StudentRecord,
}

impl ListRow<'_> {
    /// "View" target; `None` for a record the backend sent without an id
    pub fn view_route(&self) -> Option<Route> {
        self.record.id.clone().map(Route::View)
    }

    /// "Edit" target
    pub fn edit_route(&self) -> Option<Route> {
        self.record.id.clone().map(Route::Edit)
    }
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection fetch. On failure the previous rows stay in place.
    pub async fn load(&mut self, transport: &dyn RecordTransport) {
        match transport.list().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Loaded student records");
                self.records = records;
                self.loaded = true;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load student records");
            }
        }
    }

    /// Delete one record, then re-fetch the collection
    pub async fn delete(&mut self, transport: &dyn RecordTransport, id: &RecordId) {
        match transport.delete(id).await {
            Ok(()) => tracing::info!(student_id = %id, "Deleted student record"),
            Err(e) => tracing::error!(student_id = %id, error = %e, "Failed to delete student record"),
        }
        self.load(transport).await;
    }

    /// Whether a collection fetch has succeeded at least once
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Rows in the order the backend returned them
    pub fn rows(&self) -> impl Iterator<Item = ListRow<'_>> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| ListRow { index: i + 1, record })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Target of the "Add Student" control
    pub fn add_route(&self) -> Route {
        Route::Add
    }
}
