//! Workbench Web - HTML widget pages over JSON fixtures

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Server-rendered pages for eyeballing UI widgets: tables, nav panels,
//! forms, modals and card grids. Pagination and tab switching are driven
//! entirely by query parameters.

pub mod components;
pub mod error;
pub mod pages;
pub mod query;
pub mod server;

pub use error::WebError;
pub use server::{AppState, build_router, run_server};
