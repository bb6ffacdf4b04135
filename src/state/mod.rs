//! Session state and shared value types.

mod session;
mod types;

pub use session::{PAGE_SIZE, SUGGEST_LIMIT, SessionState};
pub use types::{
    Focus, Formatted, Hit, SearchReply, SearchRequest, SearchResponse, SuggestBatch,
    SuggestCommand, SuggestRequest,
};
