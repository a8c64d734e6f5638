pub mod http;
pub mod query;

use std::fmt;

use async_trait::async_trait;
use url::Url;

use crate::app::Result;
use crate::domain::RawDocument;

pub use http::HttpContentApi;
pub use query::{Direction, Predicate, Query};

/// Opaque continuation token for paginated queries.
///
/// The API hands back a fully parametrized URL for the next page; a page
/// without one is the last page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor(Url);

impl PageCursor {
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(Self(Url::parse(raw)?))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One page of query results.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub results: Vec<RawDocument>,
    pub next_page: Option<PageCursor>,
}

#[async_trait]
pub trait ContentApi {
    /// Run a search query against the repository.
    async fn query(&self, query: &Query) -> Result<SearchPage>;

    /// Follow a pagination cursor from an earlier page.
    async fn query_cursor(&self, cursor: &PageCursor) -> Result<SearchPage>;

    /// Fetch a single document by unique identifier within a type,
    /// optionally pinned to a preview revision. A slug with no matching
    /// document is [`GazetteError::PostNotFound`], which callers must
    /// treat as distinct from a transient fetch failure.
    ///
    /// [`GazetteError::PostNotFound`]: crate::app::GazetteError::PostNotFound
    async fn get_by_uid(
        &self,
        doc_type: &str,
        uid: &str,
        preview_ref: Option<&str>,
    ) -> Result<RawDocument>;
}
