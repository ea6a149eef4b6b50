//! Reusable HTML components for the widget pages
//!
//! Components are server-rendered HTML fragments composed into full pages.
//! All styling uses Tailwind CSS. Fixture text is escaped inside the
//! components that receive records; plain `&str` arguments are trusted markup.

pub mod cards;
pub mod forms;
pub mod html;
pub mod layout;
pub mod table;

// Re-export main component functions
pub use cards::{card_grid, event_card, tag_filter};
pub use forms::{fixture_form, modal};
pub use layout::{card, nav_bar, page_header, tab_strip};
pub use table::{Column, RowAction, data_table, pagination_controls};
