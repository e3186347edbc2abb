//! # Roster
//!
//! Student records client - list, add, edit and view student records held by
//! a remote HTTP API.
//!
//! ## Modules
//!
//! - [`record`]: Student records and the editable draft
//! - [`transport`]: Backend seam and its HTTP implementation
//! - [`routes`]: Client-side routing table
//! - [`pages`]: List, create, edit and detail page view-models
//! - [`render`]: Terminal rendering of mounted pages
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roster::{HttpTransport, Page, Route, TransportConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = HttpTransport::new(TransportConfig::new("http://localhost:8080"))?;
//!
//!     // Resolve a client route and run its load effect
//!     let route = Route::parse("/viewstudent/1").ok_or("unknown route")?;
//!     let page = Page::open(&route, &transport).await;
//!
//!     println!("{}", roster::render::render_page(&page, Default::default()));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod pages;
pub mod record;
pub mod render;
pub mod routes;
pub mod telemetry;
pub mod transport;

// Re-export top-level types for convenience
pub use record::{Draft, Field, RecordId, StudentRecord};

pub use transport::{
    HttpTransport, RecordTransport, TransportConfig, TransportError, TransportResult,
};

pub use routes::Route;

pub use pages::{CreateForm, DetailView, EditForm, FormPhase, FormState, ListRow, ListView, Page};

pub use render::OutputFormat;

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
