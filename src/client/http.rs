use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::app::{GazetteError, Result};
use crate::client::query::Query;
use crate::client::{ContentApi, PageCursor, SearchPage};
use crate::config::ApiConfig;
use crate::domain::RawDocument;

const USER_AGENT: &str = concat!("gazette/", env!("CARGO_PKG_VERSION"));

/// Client for the repository's REST search API.
pub struct HttpContentApi {
    client: Client,
    endpoint: Url,
    search_endpoint: Url,
    master_ref: Mutex<Option<String>>,
}

impl HttpContentApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)?;
        let search_endpoint = search_url(&endpoint)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Ok(Self {
            client,
            endpoint,
            search_endpoint,
            master_ref: Mutex::new(None),
        })
    }

    /// Resolve the repository's master ref, caching it for the client's
    /// lifetime. A preview ref on the query bypasses this.
    async fn master_ref(&self) -> Result<String> {
        if let Some(reference) = self.master_ref.lock().expect("ref cache poisoned").clone() {
            return Ok(reference);
        }

        tracing::debug!("resolving master ref from {}", self.endpoint);
        let response = self.client.get(self.endpoint.clone()).send().await?;
        response.error_for_status_ref()?;
        let info: ApiInfo = response.json().await?;

        let master = info
            .refs
            .into_iter()
            .find(|r| r.is_master_ref)
            .map(|r| r.reference)
            .ok_or_else(|| GazetteError::Api("repository exposes no master ref".into()))?;

        *self.master_ref.lock().expect("ref cache poisoned") = Some(master.clone());
        Ok(master)
    }
}

#[async_trait]
impl ContentApi for HttpContentApi {
    async fn query(&self, query: &Query) -> Result<SearchPage> {
        let reference = match query.ref_override() {
            Some(pinned) => pinned.to_string(),
            None => self.master_ref().await?,
        };
        let params = query.params(&reference);

        let response = self
            .client
            .get(self.search_endpoint.clone())
            .query(&params)
            .send()
            .await?;
        response.error_for_status_ref()?;

        let body: SearchResponse = response.json().await?;
        body.try_into()
    }

    async fn query_cursor(&self, cursor: &PageCursor) -> Result<SearchPage> {
        // Cursor URLs come back fully parametrized, ref included.
        let response = self.client.get(cursor.as_url().clone()).send().await?;
        response.error_for_status_ref()?;

        let body: SearchResponse = response.json().await?;
        body.try_into()
    }

    async fn get_by_uid(
        &self,
        doc_type: &str,
        uid: &str,
        preview_ref: Option<&str>,
    ) -> Result<RawDocument> {
        let mut query = Query::new()
            .at("document.type", doc_type)
            .at(&format!("my.{}.uid", doc_type), uid)
            .page_size(1);
        if let Some(reference) = preview_ref {
            query = query.with_ref(reference);
        }

        let page = self.query(&query).await?;
        page.results
            .into_iter()
            .next()
            .ok_or_else(|| GazetteError::PostNotFound(uid.to_string()))
    }
}

fn search_url(endpoint: &Url) -> Result<Url> {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|_| GazetteError::Config(format!("API endpoint cannot be a base URL: {endpoint}")))?
        .pop_if_empty()
        .extend(["documents", "search"]);
    Ok(url)
}

#[derive(Debug, Deserialize)]
struct ApiInfo {
    refs: Vec<ApiRef>,
}

#[derive(Debug, Deserialize)]
struct ApiRef {
    #[serde(rename = "ref")]
    reference: String,
    #[serde(rename = "isMasterRef", default)]
    is_master_ref: bool,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RawDocument>,
    #[serde(default)]
    next_page: Option<String>,
}

impl TryFrom<SearchResponse> for SearchPage {
    type Error = GazetteError;

    fn try_from(body: SearchResponse) -> Result<SearchPage> {
        let next_page = body
            .next_page
            .as_deref()
            .map(PageCursor::parse)
            .transpose()?;
        Ok(SearchPage {
            results: body.results,
            next_page,
        })
    }
}
