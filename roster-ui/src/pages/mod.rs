//! Pages
//!
//! Top-level page components for each route.

pub mod add_student;
pub mod edit_student;
pub mod home;
pub mod view_student;

pub use add_student::AddStudent;
pub use edit_student::EditStudent;
pub use home::Home;
pub use view_student::ViewStudent;
