//! Core value types: wire shapes from the search backend and the channel
//! messages used to correlate asynchronous work with the session.

/// Highlighted variants of a hit's display fields.
///
/// The backend wraps query matches in lightweight markup (e.g. `<em>` tags).
/// When present these take precedence over the plain fields for display.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Formatted {
    /// Highlighted title, if the backend produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Highlighted description, if the backend produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One document from the search index.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Hit {
    /// Unique, opaque document identifier.
    pub id: String,
    /// Target URL of the document.
    #[serde(default)]
    pub url: String,
    /// Plain title, if indexed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Plain one-line description, if indexed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Highlighted display variants; preferred over the plain fields.
    #[serde(
        default,
        rename = "_formatted",
        skip_serializing_if = "Option::is_none"
    )]
    pub formatted: Option<Formatted>,
}

impl Hit {
    /// Title to display: the highlighted variant when present, else the
    /// plain title, else empty.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.formatted
            .as_ref()
            .and_then(|f| f.title.as_deref())
            .or(self.title.as_deref())
            .unwrap_or_default()
    }

    /// Description to display, with the same precedence as
    /// [`Hit::display_title`].
    #[must_use]
    pub fn display_description(&self) -> &str {
        self.formatted
            .as_ref()
            .and_then(|f| f.description.as_deref())
            .or(self.description.as_deref())
            .unwrap_or_default()
    }

    /// Plain title with any highlight markup stripped, suitable for placing
    /// back into the query input.
    #[must_use]
    pub fn plain_title(&self) -> String {
        crate::logic::markup::strip_markup(self.title.as_deref().unwrap_or_default())
    }
}

/// Response shape shared by `/search` and `/suggest`.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
    /// Matching documents, best first.
    #[serde(default)]
    pub hits: Vec<Hit>,
    /// Backend-estimated total match count. Absent when the backend does not
    /// report a total for this query shape.
    #[serde(
        default,
        rename = "estimatedTotalHits",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_total_hits: Option<u64>,
    /// Server-side processing time in milliseconds.
    #[serde(
        default,
        rename = "processingTimeMs",
        skip_serializing_if = "Option::is_none"
    )]
    pub processing_time_ms: Option<u64>,
}

/// A suggestion fetch issued by the session.
#[derive(Clone, Debug)]
pub struct SuggestRequest {
    /// Monotonic identifier used to discard superseded batches.
    pub id: u64,
    /// Query text at the time the fetch was issued.
    pub text: String,
}

/// Commands accepted by the suggestion worker.
#[derive(Clone, Debug)]
pub enum SuggestCommand {
    /// Fetch suggestions after the quiet period elapses.
    Fetch(SuggestRequest),
    /// Abort any pending or in-flight suggestion fetch.
    Cancel,
}

/// Suggestions corresponding to a prior [`SuggestRequest`].
#[derive(Clone, Debug)]
pub struct SuggestBatch {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Suggested documents, best first. Empty on fetch failure.
    pub hits: Vec<Hit>,
}

/// An authoritative search issued by the session.
#[derive(Clone, Debug)]
pub struct SearchRequest {
    /// Monotonic staleness token captured at issue time.
    pub id: u64,
    /// Trimmed query text.
    pub query: String,
    /// Zero-based page to fetch.
    pub page: usize,
}

/// Outcome of a prior [`SearchRequest`].
#[derive(Clone, Debug)]
pub struct SearchReply {
    /// Echoed staleness token from the originating request.
    pub id: u64,
    /// Echoed page from the originating request.
    pub page: usize,
    /// Decoded response, or a network/parse error message.
    pub result: Result<SearchResponse, String>,
}

/// Which pane currently owns keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// The query input has focus; suggestions may be shown.
    #[default]
    Input,
    /// The results list has focus.
    Results,
}
