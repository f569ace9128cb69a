//! Tweet search results.

use serde_json::Value;

use crate::json;
use crate::models::status::Status;

/// Metadata accompanying a tweet search response.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMetadata {
    /// How long the search took, in seconds
    pub completed_in: f32,

    /// Highest tweet ID covered by this page
    pub max_id: i64,

    /// The query as the API received it
    pub query: String,

    /// Query string for refreshing the search from this page
    pub refresh_url: String,

    /// Requested page size
    pub count: i32,

    /// Lowest tweet ID covered by this page
    pub since_id: i64,
}

impl SearchMetadata {
    /// Parse a `search_metadata` node.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            completed_in: json::float32(obj, "completed_in"),
            max_id: json::int64(obj, "max_id"),
            query: json::string(obj, "query"),
            refresh_url: json::string(obj, "refresh_url"),
            count: json::int32(obj, "count"),
            since_id: json::int64(obj, "since_id"),
        })
    }
}

/// A page of tweet search results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    /// The matching tweets
    pub statuses: Vec<Status>,

    /// Search metadata, when the API included it
    pub metadata: Option<SearchMetadata>,
}

impl SearchResults {
    /// Parse a search response body.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            statuses: json::array(obj, "statuses", Status::parse),
            metadata: json::object(obj, "search_metadata", SearchMetadata::parse),
        })
    }
}
