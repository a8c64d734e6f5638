pub mod listing;
pub mod post;

pub use listing::Listing;
pub use post::{load_adjacent, load_page, load_post};

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory stand-in for the remote content repository.

    use async_trait::async_trait;

    use crate::app::{GazetteError, Result};
    use crate::client::query::Direction;
    use crate::client::{ContentApi, PageCursor, Query, SearchPage};
    use crate::domain::{DocumentData, RawDocument};

    /// `pages` backs listing queries: the first entry answers `query`,
    /// the entry at index n answers the cursor from `cursor(n)`.
    /// `documents` backs uid lookups and `after`-anchored queries.
    pub(crate) struct FakeApi {
        pub(crate) pages: Vec<SearchPage>,
        pub(crate) documents: Vec<RawDocument>,
    }

    impl FakeApi {
        pub(crate) fn with_pages(pages: Vec<SearchPage>) -> Self {
            Self {
                pages,
                documents: Vec::new(),
            }
        }

        pub(crate) fn with_documents(documents: Vec<RawDocument>) -> Self {
            Self {
                pages: Vec::new(),
                documents,
            }
        }

        fn neighbors(&self, after: &str, query: &Query) -> SearchPage {
            let mut ordered = self.documents.clone();
            ordered.sort_by(|a, b| a.first_publication_date.cmp(&b.first_publication_date));
            if query.ordering.as_ref().map(|(_, d)| *d) == Some(Direction::Desc) {
                ordered.reverse();
            }

            let take = query.page_size.unwrap_or(1) as usize;
            let results = match ordered.iter().position(|d| d.id == after) {
                Some(index) => ordered.into_iter().skip(index + 1).take(take).collect(),
                None => Vec::new(),
            };
            SearchPage {
                results,
                next_page: None,
            }
        }
    }

    #[async_trait]
    impl ContentApi for FakeApi {
        async fn query(&self, query: &Query) -> Result<SearchPage> {
            if let Some(after) = query.after.as_deref() {
                return Ok(self.neighbors(after, query));
            }
            Ok(self.pages.first().cloned().unwrap_or_else(empty_page))
        }

        async fn query_cursor(&self, token: &PageCursor) -> Result<SearchPage> {
            let found = (1..self.pages.len()).find(|index| cursor(*index) == *token);
            Ok(found
                .map(|index| self.pages[index].clone())
                .unwrap_or_else(empty_page))
        }

        async fn get_by_uid(
            &self,
            _doc_type: &str,
            uid: &str,
            _preview_ref: Option<&str>,
        ) -> Result<RawDocument> {
            self.documents
                .iter()
                .find(|d| d.uid.as_deref() == Some(uid))
                .cloned()
                .ok_or_else(|| GazetteError::PostNotFound(uid.to_string()))
        }
    }

    pub(crate) fn cursor(index: usize) -> PageCursor {
        PageCursor::parse(&format!("https://content.example.com/search?page={index}"))
            .expect("static cursor URL")
    }

    pub(crate) fn doc(id: &str, uid: &str, published: &str, title: &str) -> RawDocument {
        RawDocument {
            id: id.into(),
            uid: Some(uid.into()),
            first_publication_date: Some(published.into()),
            last_publication_date: Some(published.into()),
            data: DocumentData {
                title: title.into(),
                subtitle: String::new(),
                author: "Jo Writer".into(),
                banner: None,
                content: Vec::new(),
            },
        }
    }

    fn empty_page() -> SearchPage {
        SearchPage {
            results: Vec::new(),
            next_page: None,
        }
    }
}
