//! State
//!
//! Record types shared by the pages. Each page keeps its own signals; there
//! is no global store.

pub mod student;

pub use student::{Draft, Field, RecordId, StudentRecord};
