//! In-memory transport for page tests
//!
//! Behaves like the backend (assigns numeric ids, keeps insertion order) and
//! records every call so tests can assert on exactly what was sent.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{RecordTransport, TransportError, TransportResult};
use crate::record::{Draft, RecordId, StudentRecord};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    List,
    Get(RecordId),
    Create(Draft),
    Update(RecordId, Draft),
    Delete(RecordId),
}

#[derive(Default)]
struct Inner {
    records: Vec<StudentRecord>,
    next_id: i64,
    calls: Vec<Call>,
    offline: bool,
}

#[derive(Default)]
pub(crate) struct MemoryTransport {
    inner: Mutex<Inner>,
}

impl MemoryTransport {
    pub(crate) fn with_records(records: Vec<StudentRecord>) -> Self {
        let next_id = records.len() as i64 + 1;
        Self {
            inner: Mutex::new(Inner {
                records,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// Make every following call fail as if the backend were down
    pub(crate) fn set_offline(&self, offline: bool) {
        self.inner.lock().unwrap().offline = offline;
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub(crate) fn records(&self) -> Vec<StudentRecord> {
        self.inner.lock().unwrap().records.clone()
    }

    fn record(&self, call: Call) -> TransportResult<std::sync::MutexGuard<'_, Inner>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);
        if inner.offline {
            return Err(TransportError::Unavailable("memory".to_string()));
        }
        Ok(inner)
    }
}

fn not_found(id: &RecordId) -> TransportError {
    TransportError::NotFound(format!("Student with id {} wasn't found", id))
}

#[async_trait]
impl RecordTransport for MemoryTransport {
    async fn list(&self) -> TransportResult<Vec<StudentRecord>> {
        let inner = self.record(Call::List)?;
        Ok(inner.records.clone())
    }

    async fn get(&self, id: &RecordId) -> TransportResult<StudentRecord> {
        let inner = self.record(Call::Get(id.clone()))?;
        inner
            .records
            .iter()
            .find(|r| r.id.as_ref() == Some(id))
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, draft: &Draft) -> TransportResult<StudentRecord> {
        let mut inner = self.record(Call::Create(draft.clone()))?;
        let id = inner.next_id.max(1);
        inner.next_id = id + 1;
        let record = StudentRecord::new(id, &draft.name, &draft.branch, &draft.mail);
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &RecordId, draft: &Draft) -> TransportResult<StudentRecord> {
        let mut inner = self.record(Call::Update(id.clone(), draft.clone()))?;
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id.as_ref() == Some(id))
            .ok_or_else(|| not_found(id))?;
        record.name = draft.name.clone();
        record.branch = draft.branch.clone();
        record.mail = draft.mail.clone();
        Ok(record.clone())
    }

    async fn delete(&self, id: &RecordId) -> TransportResult<()> {
        let mut inner = self.record(Call::Delete(id.clone()))?;
        let before = inner.records.len();
        inner.records.retain(|r| r.id.as_ref() != Some(id));
        if inner.records.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
