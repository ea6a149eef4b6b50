//! Tab and slug resolution for tabbed views.
//!
//! Query-string selectors are never trusted: an unknown tab or slug falls
//! back to the view's default instead of rendering an empty page.

use serde::Serialize;

use crate::records::NavItem;

/// A rendered tab link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub label: String,
    pub href: String,
    pub active: bool,
}

impl Tab {
    pub fn new(label: &str, href: String, active: bool) -> Self {
        Self {
            label: label.to_string(),
            href,
            active,
        }
    }
}

/// Picks the navigation item selected by `requested`.
///
/// Falls back to the first item when the slug is missing or unknown, and
/// returns `None` only when there is no navigation at all.
pub fn resolve_slug<'a>(items: &'a [NavItem], requested: Option<&str>) -> Option<&'a NavItem> {
    requested
        .and_then(|slug| items.iter().find(|item| item.slug == slug))
        .or_else(|| items.first())
}

/// Builds `?slug=` tabs for the navigation panel.
pub fn nav_tabs(items: &[NavItem], active_slug: Option<&str>) -> Vec<Tab> {
    items
        .iter()
        .map(|item| {
            Tab::new(
                &item.label,
                format!("?slug={}", urlencoding::encode(&item.slug)),
                Some(item.slug.as_str()) == active_slug,
            )
        })
        .collect()
}

/// Tabs of the admin view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Users,
    Announcements,
}

impl AdminTab {
    pub const ALL: [AdminTab; 2] = [AdminTab::Users, AdminTab::Announcements];

    /// Parses a `tab` query value, defaulting to [`AdminTab::Users`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("announcements") => AdminTab::Announcements,
            _ => AdminTab::Users,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            AdminTab::Users => "users",
            AdminTab::Announcements => "announcements",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Users => "Users",
            AdminTab::Announcements => "Announcements",
        }
    }

    /// Tab strip with this tab marked active.
    pub fn tabs(self) -> Vec<Tab> {
        Self::ALL
            .iter()
            .map(|tab| Tab::new(tab.label(), format!("?tab={}", tab.slug()), *tab == self))
            .collect()
    }
}

/// Tabs of the events view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventsTab {
    #[default]
    Browse,
    New,
}

impl EventsTab {
    pub const ALL: [EventsTab; 2] = [EventsTab::Browse, EventsTab::New];

    /// Parses a `tab` query value, defaulting to [`EventsTab::Browse`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("new") => EventsTab::New,
            _ => EventsTab::Browse,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            EventsTab::Browse => "browse",
            EventsTab::New => "new",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventsTab::Browse => "Browse Events",
            EventsTab::New => "Add Event",
        }
    }

    /// Tab strip with this tab marked active.
    pub fn tabs(self) -> Vec<Tab> {
        Self::ALL
            .iter()
            .map(|tab| Tab::new(tab.label(), format!("?tab={}", tab.slug()), *tab == self))
            .collect()
    }
}
