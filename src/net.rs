//! HTTP access to the search backend.
//!
//! Three endpoints, one fixed base address: `GET /search` and `GET /suggest`
//! return the shared [`SearchResponse`] shape, `POST /click` records a result
//! open. Every read carries a `_ts` cache buster and a no-cache header so the
//! query observes live index state.

use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue};

use crate::state::SearchResponse;
use crate::util::percent_encode;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Thin typed client over the backend's HTTP contract.
///
/// Cheap to clone; workers hold their own copy and share the underlying
/// connection pool.
#[derive(Clone, Debug)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Build a client for `base_url` with pooled connections, conservative
    /// timeouts, and a product-identifying user agent.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .user_agent(format!("loupe/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run one authoritative paged search.
    pub async fn search(&self, query: &str, limit: usize, offset: usize) -> Result<SearchResponse> {
        let url = format!(
            "{}/search?q={}&limit={limit}&offset={offset}&_ts={}",
            self.base_url,
            percent_encode(query),
            cache_buster(),
        );
        let resp = self.http.get(&url).send().await?.error_for_status()?;
        Ok(resp.json::<SearchResponse>().await?)
    }

    /// Fetch type-ahead suggestions for a partial query.
    pub async fn suggest(&self, query: &str, limit: usize) -> Result<SearchResponse> {
        let url = format!(
            "{}/suggest?q={}&limit={limit}&_ts={}",
            self.base_url,
            percent_encode(query),
            cache_buster(),
        );
        let resp = self.http.get(&url).send().await?.error_for_status()?;
        Ok(resp.json::<SearchResponse>().await?)
    }

    /// Record that a result was opened. Best effort; callers are expected to
    /// swallow the error.
    pub async fn record_click(&self, id: &str) -> Result<()> {
        let url = format!("{}/click", self.base_url);
        self.http
            .post(&url)
            .json(&serde_json::json!({ "id": id }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Millisecond timestamp appended to read URLs to defeat intermediary caches.
fn cache_buster() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
