//! Workbench Core - Pagination, fixtures and configuration
//!
//! This crate holds everything the mock server needs that is not HTTP:
//! the shared pager used by every paginated view, the fixture data-access
//! collaborator, tab and slug resolution, configuration and tracing setup.

pub mod config;
pub mod fixtures;
pub mod pager;
pub mod records;
pub mod tabs;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::WorkbenchConfig;
pub use fixtures::{DirectoryFixtures, FixtureSet, FixtureSource, StaticFixtures};
pub use pager::{LinkQuery, Page, PageInfo, Pagination, paginate, parse_page};
pub use records::{FormField, FormSpec, NavItem};
pub use tabs::{AdminTab, EventsTab, Tab};

/// Errors that can bubble up from any Workbench subsystem.
///
/// Pagination never produces errors; out-of-range page requests are clamped.
#[derive(Debug, thiserror::Error)]
pub enum WorkbenchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fixture '{key}' is invalid: {reason}")]
    Fixture { key: String, reason: String },

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },
}

impl WorkbenchError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            WorkbenchError::Io(_) => "Fixture files could not be read".to_string(),
            WorkbenchError::Fixture { key, .. } => format!("Fixture '{key}' could not be used"),
            WorkbenchError::Configuration { reason } => format!("Invalid configuration: {reason}"),
        }
    }

    /// Checks if this error is due to user-supplied configuration.
    pub fn is_user_error(&self) -> bool {
        matches!(self, WorkbenchError::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, WorkbenchError>;
