//! Pagination slicing and page-bounds normalization.
//!
//! Every paginated view (user table, admin tabs, event card grid) goes through
//! [`paginate`]. Requested page numbers come straight from query strings, so
//! any `i64` is accepted and clamped into range rather than rejected.

use std::num::NonZeroUsize;

use serde::Serialize;

/// Page number used when the query parameter is missing or not an integer.
pub const DEFAULT_PAGE: i64 = 1;

/// Navigation metadata for one normalized page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Normalized page number, always in `1..=max(pages, 1)`
    pub page: usize,
    /// Total page count, zero for an empty collection
    pub pages: usize,
    /// Whether a previous page exists
    pub has_prev: bool,
    /// Whether a next page exists
    pub has_next: bool,
}

/// One page of a borrowed collection plus its navigation metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page, at most `page_size` long
    pub items: &'a [T],
    /// Normalized navigation metadata
    pub info: PageInfo,
}

/// Slices `items` down to the requested page.
///
/// Page requests below 1 clamp to 1 and requests past the last page clamp to
/// the last page. An empty collection has zero pages, page 1 and an empty
/// slice.
pub fn paginate<T>(items: &[T], page: i64, page_size: NonZeroUsize) -> Page<'_, T> {
    let page_size = page_size.get();
    let pages = items.len().div_ceil(page_size);

    let requested = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
    let page = if pages > 0 { requested.min(pages) } else { 1 };

    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    let slice = if start >= items.len() {
        &items[..0]
    } else {
        &items[start..end]
    };

    Page {
        items: slice,
        info: PageInfo {
            page,
            pages,
            has_prev: page > 1,
            has_next: page < pages,
        },
    }
}

/// Parses a `page` query value leniently.
///
/// Missing values and anything that is not an integer fall back to
/// [`DEFAULT_PAGE`]; range checks happen later in [`paginate`].
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE)
}

/// Extra query parameters carried by pagination links.
///
/// Pairs are emitted in insertion order ahead of the `page` parameter, so
/// `LinkQuery::new().with("tab", "users").href_for(2)` yields
/// `?tab=users&page=2`. Values are URL-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkQuery {
    pairs: Vec<(String, String)>,
}

impl LinkQuery {
    /// Creates an empty query that produces plain `?page=N` links.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a query pair.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends a query pair only when a value is present.
    pub fn with_optional(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.with(key, value),
            _ => self,
        }
    }

    /// Builds a relative href pointing at `page`.
    pub fn href_for(&self, page: usize) -> String {
        let mut href = String::from("?");
        for (key, value) in &self.pairs {
            href.push_str(&urlencoding::encode(key));
            href.push('=');
            href.push_str(&urlencoding::encode(value));
            href.push('&');
        }
        href.push_str(&format!("page={page}"));
        href
    }
}

/// Pagination descriptor handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// Link to the previous page, present only when `has_prev`
    pub prev_href: Option<String>,
    /// Link to the next page, present only when `has_next`
    pub next_href: Option<String>,
}

impl PageInfo {
    /// Attaches prev/next links built from `query`.
    pub fn with_links(&self, query: &LinkQuery) -> Pagination {
        Pagination {
            page: self.page,
            pages: self.pages,
            has_prev: self.has_prev,
            has_next: self.has_next,
            prev_href: self.has_prev.then(|| query.href_for(self.page - 1)),
            next_href: self.has_next.then(|| query.href_for(self.page + 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_first_page_of_three() {
        let items: Vec<u32> = (0..60).collect();
        let page = paginate(&items, 1, size(25));

        assert_eq!(page.items, &items[0..25]);
        assert_eq!(page.info.page, 1);
        assert_eq!(page.info.pages, 3);
        assert!(!page.info.has_prev);
        assert!(page.info.has_next);
    }

    #[test]
    fn test_page_past_end_clamps_to_last() {
        let items: Vec<u32> = (0..60).collect();
        let page = paginate(&items, 5, size(25));

        assert_eq!(page.info.page, 3);
        assert_eq!(page.items, &items[50..60]);
        assert_eq!(page.items.len(), 10);
        assert!(page.info.has_prev);
        assert!(!page.info.has_next);
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, size(25));

        assert_eq!(page.info.pages, 0);
        assert_eq!(page.info.page, 1);
        assert!(page.items.is_empty());
        assert!(!page.info.has_prev);
        assert!(!page.info.has_next);
    }

    #[test]
    fn test_empty_collection_ignores_large_request() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 42, size(4));

        assert_eq!(page.info.page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_non_positive_pages_clamp_to_first() {
        let items: Vec<u32> = (0..10).collect();

        for requested in [0, -1, i64::MIN] {
            let page = paginate(&items, requested, size(4));
            assert_eq!(page.info.page, 1);
            assert_eq!(page.items, &items[0..4]);
        }
    }

    #[test]
    fn test_huge_page_request_does_not_overflow() {
        let items: Vec<u32> = (0..10).collect();
        let page = paginate(&items, i64::MAX, size(4));

        assert_eq!(page.info.page, 3);
        assert_eq!(page.items, &items[8..10]);
    }

    #[test]
    fn test_exact_multiple_has_no_partial_page() {
        let items: Vec<u32> = (0..8).collect();
        let page = paginate(&items, 2, size(4));

        assert_eq!(page.info.pages, 2);
        assert_eq!(page.items, &items[4..8]);
        assert!(!page.info.has_next);
    }

    #[test]
    fn test_parse_page_is_lenient() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some(" 7 ")), 7);
        assert_eq!(parse_page(Some("-2")), -2);
        assert_eq!(parse_page(Some("two")), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("99999999999999999999999")), 1);
    }

    #[test]
    fn test_plain_links() {
        let items: Vec<u32> = (0..60).collect();
        let pagination = paginate(&items, 2, size(25))
            .info
            .with_links(&LinkQuery::new());

        assert_eq!(pagination.prev_href.as_deref(), Some("?page=1"));
        assert_eq!(pagination.next_href.as_deref(), Some("?page=3"));
    }

    #[test]
    fn test_links_carry_extra_parameters() {
        let items: Vec<u32> = (0..12).collect();
        let query = LinkQuery::new()
            .with("tab", "browse")
            .with_optional("tag", Some("live music"));
        let pagination = paginate(&items, 2, size(4)).info.with_links(&query);

        assert_eq!(
            pagination.prev_href.as_deref(),
            Some("?tab=browse&tag=live%20music&page=1")
        );
        assert_eq!(
            pagination.next_href.as_deref(),
            Some("?tab=browse&tag=live%20music&page=3")
        );
    }

    #[test]
    fn test_links_absent_at_edges() {
        let items: Vec<u32> = (0..3).collect();
        let pagination = paginate(&items, 1, size(25))
            .info
            .with_links(&LinkQuery::new().with_optional("tag", None));

        assert_eq!(pagination.prev_href, None);
        assert_eq!(pagination.next_href, None);
    }

    proptest! {
        #[test]
        fn prop_page_count_is_ceiling(len in 0usize..500, page_size in 1usize..60) {
            let items = vec![0u8; len];
            let page = paginate(&items, 1, size(page_size));
            prop_assert_eq!(page.info.pages, len.div_ceil(page_size));
        }

        #[test]
        fn prop_normalized_page_in_bounds(
            len in 0usize..500,
            page_size in 1usize..60,
            requested in any::<i64>(),
        ) {
            let items = vec![0u8; len];
            let page = paginate(&items, requested, size(page_size));
            prop_assert!(page.info.page >= 1);
            prop_assert!(page.info.page <= page.info.pages.max(1));
            prop_assert!(page.items.len() <= page_size);
            prop_assert_eq!(page.info.has_prev, page.info.page > 1);
            prop_assert_eq!(page.info.has_next, page.info.page < page.info.pages);
        }

        #[test]
        fn prop_pages_partition_collection(len in 0usize..300, page_size in 1usize..40) {
            let items: Vec<usize> = (0..len).collect();
            let pages = paginate(&items, 1, size(page_size)).info.pages;

            let mut seen = Vec::with_capacity(len);
            for number in 1..=pages {
                let page = paginate(&items, number as i64, size(page_size));
                prop_assert_eq!(page.info.page, number);
                seen.extend_from_slice(page.items);
            }
            prop_assert_eq!(seen, items);
        }
    }
}
