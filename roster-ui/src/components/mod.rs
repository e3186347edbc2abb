//! UI Components
//!
//! Reusable Leptos components for the student pages.

pub mod loading;
pub mod student_form;

pub use loading::Loading;
pub use student_form::StudentForm;
