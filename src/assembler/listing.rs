//! Builds the home-page listing: summaries plus a cursor for loading
//! further pages.

use crate::app::Result;
use crate::client::{ContentApi, Direction, PageCursor, Query};
use crate::domain::{PostSummary, RawDocument};
use crate::format::format_date;

const LISTING_FIELDS: &[&str] = &[
    "post.title",
    "post.subtitle",
    "post.author",
    "post.first_publication_date",
];

/// The API caps page sizes at 100; used when walking every page.
const MAX_PAGE_SIZE: u32 = 100;

/// A page-accumulating listing of post summaries.
#[derive(Debug, Clone)]
pub struct Listing {
    pub summaries: Vec<PostSummary>,
    pub cursor: Option<PageCursor>,
}

impl Listing {
    /// Fetch the next page and append its summaries, keeping existing
    /// entries first and never re-sorting. With no cursor left this is a
    /// no-op and the listing comes back unchanged.
    pub async fn load_more(self, api: &(dyn ContentApi + Send + Sync)) -> Result<Listing> {
        let Some(cursor) = self.cursor else {
            return Ok(self);
        };

        let page = api.query_cursor(&cursor).await?;
        let mut summaries = self.summaries;
        summaries.extend(summarize(page.results));

        Ok(Listing {
            summaries,
            cursor: page.next_page,
        })
    }

    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }
}

/// Fetch the first listing page: posts only, newest first, field-limited
/// to what a summary needs.
pub async fn load_first_page(
    api: &(dyn ContentApi + Send + Sync),
    doc_type: &str,
    page_size: u32,
) -> Result<Listing> {
    let query = Query::new()
        .at("document.type", doc_type)
        .fetch(LISTING_FIELDS)
        .order_by("document.first_publication_date", Direction::Desc)
        .page_size(page_size);

    let page = api.query(&query).await?;
    Ok(Listing {
        summaries: summarize(page.results),
        cursor: page.next_page,
    })
}

/// Walk every listing page and collect the slugs, newest first.
pub async fn load_all_slugs(
    api: &(dyn ContentApi + Send + Sync),
    doc_type: &str,
) -> Result<Vec<String>> {
    let query = Query::new()
        .at("document.type", doc_type)
        .fetch(&["post.title"])
        .order_by("document.first_publication_date", Direction::Desc)
        .page_size(MAX_PAGE_SIZE);

    let mut page = api.query(&query).await?;
    let mut slugs = Vec::new();
    loop {
        slugs.extend(page.results.into_iter().filter_map(|document| document.uid));
        match page.next_page {
            Some(token) => page = api.query_cursor(&token).await?,
            None => break,
        }
    }

    Ok(slugs)
}

fn summarize(results: Vec<RawDocument>) -> Vec<PostSummary> {
    results
        .into_iter()
        .filter_map(|document| {
            let Some(slug) = document.uid else {
                tracing::warn!(id = %document.id, "document has no uid, skipping");
                return None;
            };
            let published_display = document
                .first_publication_date
                .as_deref()
                .map(format_date)
                .unwrap_or_default();

            Some(PostSummary {
                slug,
                title: document.data.title,
                subtitle: document.data.subtitle,
                author: document.data.author,
                published_display,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::testing::{cursor, doc, FakeApi};
    use crate::client::SearchPage;

    fn page(results: Vec<RawDocument>, next_page: Option<PageCursor>) -> SearchPage {
        SearchPage { results, next_page }
    }

    #[tokio::test]
    async fn test_first_page_maps_summaries() {
        let api = FakeApi::with_pages(vec![page(
            vec![
                doc("id1", "newest-post", "2021-03-15T19:25:28+0000", "Newest"),
                doc("id2", "older-post", "2021-01-05T00:00:00Z", "Older"),
            ],
            Some(cursor(1)),
        )]);

        let listing = load_first_page(&api, "posts", 2).await.unwrap();
        assert_eq!(listing.summaries.len(), 2);
        assert_eq!(listing.summaries[0].slug, "newest-post");
        assert_eq!(listing.summaries[0].title, "Newest");
        assert_eq!(listing.summaries[0].published_display, "15 Mar 2021");
        assert_eq!(listing.summaries[1].published_display, "05 Jan 2021");
        assert!(listing.has_more());
    }

    #[tokio::test]
    async fn test_load_more_appends_in_order() {
        let api = FakeApi::with_pages(vec![
            page(
                vec![doc("id1", "first", "2021-03-15T19:25:28+0000", "First")],
                Some(cursor(1)),
            ),
            page(
                vec![doc("id2", "second", "2021-01-05T00:00:00Z", "Second")],
                None,
            ),
        ]);

        let listing = load_first_page(&api, "posts", 1).await.unwrap();
        let listing = listing.load_more(&api).await.unwrap();

        let slugs: Vec<&str> = listing.summaries.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["first", "second"]);
        assert!(!listing.has_more());
    }

    #[tokio::test]
    async fn test_load_more_without_cursor_is_noop() {
        let api = FakeApi::with_pages(vec![page(
            vec![doc("id1", "only", "2021-01-05T00:00:00Z", "Only")],
            None,
        )]);

        let listing = load_first_page(&api, "posts", 1).await.unwrap();
        let before = listing.summaries.clone();

        let after = listing.load_more(&api).await.unwrap();
        assert_eq!(after.summaries, before);
        assert!(after.cursor.is_none());
    }

    #[tokio::test]
    async fn test_documents_without_uid_are_skipped() {
        let mut orphan = doc("id9", "ignored", "2021-02-01T00:00:00Z", "Orphan");
        orphan.uid = None;
        let api = FakeApi::with_pages(vec![page(
            vec![orphan, doc("id1", "kept", "2021-01-05T00:00:00Z", "Kept")],
            None,
        )]);

        let listing = load_first_page(&api, "posts", 2).await.unwrap();
        assert_eq!(listing.summaries.len(), 1);
        assert_eq!(listing.summaries[0].slug, "kept");
    }

    #[tokio::test]
    async fn test_missing_publication_date_displays_empty() {
        let mut undated = doc("id1", "undated", "2021-01-05T00:00:00Z", "Undated");
        undated.first_publication_date = None;
        let api = FakeApi::with_pages(vec![page(vec![undated], None)]);

        let listing = load_first_page(&api, "posts", 1).await.unwrap();
        assert_eq!(listing.summaries[0].published_display, "");
    }

    #[tokio::test]
    async fn test_load_all_slugs_walks_every_page() {
        let api = FakeApi::with_pages(vec![
            page(
                vec![doc("id1", "a", "2021-03-01T00:00:00Z", "A")],
                Some(cursor(1)),
            ),
            page(
                vec![doc("id2", "b", "2021-02-01T00:00:00Z", "B")],
                Some(cursor(2)),
            ),
            page(vec![doc("id3", "c", "2021-01-01T00:00:00Z", "C")], None),
        ]);

        let slugs = load_all_slugs(&api, "posts").await.unwrap();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }
}
