//! Integration tests for Workbench
//!
//! These tests drive the full router in-process, with fixtures supplied
//! either in memory or from the sample `mock_data` directory.

#[path = "integration/support.rs"]
mod support;

#[path = "integration/fixture_directory.rs"]
mod fixture_directory;
#[path = "integration/paginated_views.rs"]
mod paginated_views;
#[path = "integration/static_assets.rs"]
mod static_assets;
#[path = "integration/tabbed_views.rs"]
mod tabbed_views;
