//! Record Transport
//!
//! The seam between page view-models and the records backend.
//!
//! ## Backend contract
//!
//! | Method | Path | Body | Response |
//! |---|---|---|---|
//! | GET | `/students` | - | `[StudentRecord]` |
//! | GET | `/student/:id` | - | `StudentRecord` |
//! | POST | `/student` | `Draft` | `StudentRecord` |
//! | PUT | `/student/:id` | `Draft` | `StudentRecord` |
//! | DELETE | `/student/:id` | - | ignored |

mod error;
mod http;

#[cfg(test)]
pub(crate) mod memory;

pub use error::{TransportError, TransportResult};
pub use http::{HttpTransport, TransportConfig, DEFAULT_BASE_URL};

use async_trait::async_trait;

use crate::record::{Draft, RecordId, StudentRecord};

/// CRUD operations against the records backend
///
/// Implementations issue exactly one request per call; there is no retry
/// and no caching.
#[async_trait]
pub trait RecordTransport: Send + Sync {
    /// `GET /students`
    async fn list(&self) -> TransportResult<Vec<StudentRecord>>;

    /// `GET /student/:id`
    async fn get(&self, id: &RecordId) -> TransportResult<StudentRecord>;

    /// `POST /student`
    async fn create(&self, draft: &Draft) -> TransportResult<StudentRecord>;

    /// `PUT /student/:id`
    async fn update(&self, id: &RecordId, draft: &Draft) -> TransportResult<StudentRecord>;

    /// `DELETE /student/:id`
    async fn delete(&self, id: &RecordId) -> TransportResult<()>;
}
