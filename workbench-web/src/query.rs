//! Query-string parameters shared by the widget pages

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use workbench_core::parse_page;

/// Raw view selectors from the query string.
///
/// Every field is kept as an optional string so malformed values never turn
/// into a 400 response; each page interprets and normalizes what it needs.
/// A repeated key keeps its first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    /// Requested page number
    pub page: Option<String>,
    /// Selected tab
    pub tab: Option<String>,
    /// Selected event tag
    pub tag: Option<String>,
    /// Selected navigation slug
    pub slug: Option<String>,
}

impl ViewQuery {
    /// Builds selectors from decoded key/value pairs. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "tab" => &mut query.tab,
                "tag" => &mut query.tag,
                "slug" => &mut query.slug,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Requested page number, defaulting to 1 when missing or malformed.
    pub fn page_number(&self) -> i64 {
        parse_page(self.page.as_deref())
    }

    /// Selected tab, if any.
    pub fn tab(&self) -> Option<&str> {
        non_empty(self.tab.as_deref())
    }

    /// Selected tag, if any. An empty `tag=` means no filter.
    pub fn tag(&self) -> Option<&str> {
        non_empty(self.tag.as_deref())
    }

    /// Selected slug, if any.
    pub fn slug(&self) -> Option<&str> {
        non_empty(self.slug.as_deref())
    }
}

impl<S> FromRequestParts<S> for ViewQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => Ok(Self::from_pairs(pairs)),
            Err(e) => {
                tracing::debug!("Ignoring unreadable query string on {}: {e}", parts.uri);
                Ok(Self::default())
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_values_are_absent() {
        let query = ViewQuery {
            page: Some("x".to_string()),
            tag: Some(String::new()),
            slug: Some("members".to_string()),
            ..Default::default()
        };

        assert_eq!(query.page_number(), 1);
        assert_eq!(query.tag(), None);
        assert_eq!(query.tab(), None);
        assert_eq!(query.slug(), Some("members"));
    }

    #[test]
    fn test_first_value_wins() {
        let query = ViewQuery::from_pairs(pairs(&[
            ("page", "2"),
            ("tag", "music"),
            ("page", "3"),
            ("utm", "mail"),
            ("tag", "food"),
        ]));

        assert_eq!(query.page_number(), 2);
        assert_eq!(query.tag(), Some("music"));
        assert_eq!(query.tab(), None);
    }

    #[tokio::test]
    async fn test_extracts_from_request_uri() {
        let request = Request::builder()
            .uri("/events?tab=browse&tag=live%20music&page=2&page=9")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let query = ViewQuery::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(query.tab(), Some("browse"));
        assert_eq!(query.tag(), Some("live music"));
        assert_eq!(query.page_number(), 2);
    }
}
