//! The **Search** endpoint.

use crate::endpoints::TweetMode;
use crate::error::TwitterResult;
use crate::http::{HttpClient, RawResponse};
use crate::models::SearchResults;
use crate::response::Response;

/// Which flavor of results a tweet search should prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchResultType {
    /// A mix of recent and popular tweets (the API default)
    #[default]
    Mixed,

    /// Only the most recent tweets
    Recent,

    /// Only the most popular tweets
    Popular,
}

impl SearchResultType {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::Recent => "recent",
            Self::Popular => "popular",
        }
    }
}

/// Options for `search/tweets`.
#[derive(Debug, Clone, Default)]
pub struct SearchTweetsOptions {
    /// The search query, up to 500 characters
    pub query: String,

    /// Number of tweets per page, up to 100
    pub count: i32,

    /// Only return tweets with an ID greater than this one
    pub since_id: i64,

    /// Only return tweets with an ID less than or equal to this one
    pub max_id: i64,

    /// Restrict results to a given language (ISO 639-1)
    pub language: String,

    /// Which flavor of results to prefer
    pub result_type: SearchResultType,

    /// Payload length selector
    pub tweet_mode: TweetMode,
}

impl SearchTweetsOptions {
    /// Options searching for `query`.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    fn query_string(&self) -> Vec<(String, String)> {
        let mut query = vec![("q".to_string(), self.query.clone())];
        if self.count > 0 {
            query.push(("count".into(), self.count.to_string()));
        }
        if self.since_id > 0 {
            query.push(("since_id".into(), self.since_id.to_string()));
        }
        if self.max_id > 0 {
            query.push(("max_id".into(), self.max_id.to_string()));
        }
        if !self.language.is_empty() {
            query.push(("lang".into(), self.language.clone()));
        }
        if self.result_type != SearchResultType::Mixed {
            query.push(("result_type".into(), self.result_type.as_str().into()));
        }
        self.tweet_mode.append_to(&mut query);
        query
    }
}

/// Raw layer of the search endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RawSearch<'a> {
    http: &'a HttpClient,
}

impl<'a> RawSearch<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET search/tweets`: search recent public tweets.
    pub async fn tweets(&self, options: &SearchTweetsOptions) -> TwitterResult<RawResponse> {
        self.http
            .get("/1.1/search/tweets.json", &options.query_string())
            .await
    }
}

/// Typed layer of the search endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    raw: RawSearch<'a>,
}

impl<'a> Search<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self {
            raw: RawSearch::new(http),
        }
    }

    /// The raw layer of this endpoint.
    #[must_use]
    pub const fn raw(&self) -> RawSearch<'a> {
        self.raw
    }

    /// Search recent public tweets matching `query`.
    pub async fn tweets(&self, query: &str) -> TwitterResult<Response<SearchResults>> {
        self.tweets_with(&SearchTweetsOptions::new(query)).await
    }

    /// Search with explicit options.
    pub async fn tweets_with(
        &self,
        options: &SearchTweetsOptions,
    ) -> TwitterResult<Response<SearchResults>> {
        Response::parse(&self.raw.tweets(options).await?, SearchResults::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_result_type_is_not_serialized() {
        let query = SearchTweetsOptions::new("#rustlang").query_string();
        assert_eq!(query, vec![("q".to_string(), "#rustlang".to_string())]);
    }

    #[test]
    fn full_options_serialize() {
        let options = SearchTweetsOptions {
            count: 100,
            since_id: 10,
            max_id: 999,
            language: "en".into(),
            result_type: SearchResultType::Popular,
            tweet_mode: TweetMode::Extended,
            ..SearchTweetsOptions::new("rust")
        };
        let query = options.query_string();

        assert!(query.contains(&("result_type".into(), "popular".into())));
        assert!(query.contains(&("lang".into(), "en".into())));
        assert!(query.contains(&("tweet_mode".into(), "extended".into())));
    }
}
