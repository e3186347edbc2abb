//! Detail View
//!
//! Read-only view of one record.

use crate::record::{RecordId, StudentRecord};
use crate::routes::Route;
use crate::transport::RecordTransport;

/// State owned by a mounted "view student" page
#[derive(Debug)]
pub struct DetailView {
    id: RecordId,
    record: Option<StudentRecord>,
}

impl DetailView {
    pub fn new(id: RecordId) -> Self {
        Self { id, record: None }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Loaded record, if the fetch has succeeded
    pub fn record(&self) -> Option<&StudentRecord> {
        self.record.as_ref()
    }

    pub async fn load(&mut self, transport: &dyn RecordTransport) {
        match transport.get(&self.id).await {
            Ok(record) => self.record = Some(record),
            Err(e) => {
                tracing::error!(student_id = %self.id, error = %e, "Failed to load student record");
            }
        }
    }

    /// Target of the "Back" control
    pub fn back(&self) -> Route {
        Route::List
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::memory::{Call, MemoryTransport};

    #[tokio::test]
    async fn test_renders_exactly_the_fetched_record() {
        let expected = StudentRecord::new(4, "Dee", "Civil", "dee@x.com");
        let transport = MemoryTransport::with_records(vec![
            StudentRecord::new(1, "Ana", "CS", "ana@x.com"),
            StudentRecord::new(2, "Ben", "EE", "ben@x.com"),
            StudentRecord::new(3, "Cy", "ME", "cy@x.com"),
            expected.clone(),
        ]);

        let mut view = DetailView::new(RecordId::Number(4));
        view.load(&transport).await;

        assert_eq!(view.record(), Some(&expected));
        assert_eq!(transport.calls(), vec![Call::Get(RecordId::Number(4))]);
        assert_eq!(view.back(), Route::List);
    }

    #[tokio::test]
    async fn test_unknown_id_renders_nothing() {
        let transport = MemoryTransport::default();
        let mut view = DetailView::new(RecordId::Number(1));
        view.load(&transport).await;

        assert!(view.record().is_none());
    }
}
