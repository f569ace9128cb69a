//! The **Statuses** endpoint: single tweets and timelines.

use crate::endpoints::users::UserRef;
use crate::endpoints::{status_array, TweetMode};
use crate::error::TwitterResult;
use crate::http::{HttpClient, RawResponse};
use crate::models::Status;
use crate::response::Response;

/// Options for `statuses/show`.
#[derive(Debug, Clone, Default)]
pub struct ShowStatusOptions {
    /// ID of the tweet
    pub id: i64,

    /// Reduce the embedded user object to its numerical ID
    pub trim_user: bool,

    /// Include a `current_user_retweet` node on tweets the authenticating
    /// user has retweeted
    pub include_my_retweet: bool,

    /// Payload length selector
    pub tweet_mode: TweetMode,
}

impl ShowStatusOptions {
    /// Options for the tweet with `id`.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut query = vec![("id".to_string(), self.id.to_string())];
        if self.trim_user {
            query.push(("trim_user".into(), "true".into()));
        }
        if self.include_my_retweet {
            query.push(("include_my_retweet".into(), "true".into()));
        }
        self.tweet_mode.append_to(&mut query);
        query
    }
}

/// Options for `statuses/update`.
#[derive(Debug, Clone, Default)]
pub struct UpdateStatusOptions {
    /// Text of the tweet
    pub status: String,

    /// ID of an existing tweet this one replies to
    pub in_reply_to_status_id: Option<i64>,

    /// Reduce the embedded user object to its numerical ID
    pub trim_user: bool,

    /// Payload length selector
    pub tweet_mode: TweetMode,
}

impl UpdateStatusOptions {
    /// Options posting `status`.
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    fn form(&self) -> Vec<(String, String)> {
        let mut form = vec![("status".to_string(), self.status.clone())];
        if let Some(reply_to) = self.in_reply_to_status_id {
            form.push(("in_reply_to_status_id".into(), reply_to.to_string()));
        }
        if self.trim_user {
            form.push(("trim_user".into(), "true".into()));
        }
        self.tweet_mode.append_to(&mut form);
        form
    }
}

/// Shared options of the timeline endpoints.
#[derive(Debug, Clone)]
pub struct TimelineOptions {
    /// Only return tweets with an ID greater than this one
    pub since_id: i64,

    /// Only return tweets with an ID less than or equal to this one
    pub max_id: i64,

    /// Number of tweets to try and retrieve, up to 200 per request
    pub count: i32,

    /// Reduce embedded user objects to their numerical IDs
    pub trim_user: bool,

    /// Strip replies from the returned timeline
    pub exclude_replies: bool,

    /// Include the `screen_name` of contributors, not just their ID
    pub contributor_details: bool,

    /// Keep native retweets in the timeline (on by default)
    pub include_retweets: bool,

    /// Payload length selector
    pub tweet_mode: TweetMode,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            since_id: 0,
            max_id: 0,
            count: 0,
            trim_user: false,
            exclude_replies: false,
            contributor_details: false,
            include_retweets: true,
            tweet_mode: TweetMode::default(),
        }
    }
}

impl TimelineOptions {
    /// Options limiting the page to `count` tweets.
    #[must_use]
    pub fn with_count(count: i32) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if self.since_id > 0 {
            query.push(("since_id".into(), self.since_id.to_string()));
        }
        if self.count > 0 {
            query.push(("count".into(), self.count.to_string()));
        }
        if self.max_id > 0 {
            query.push(("max_id".into(), self.max_id.to_string()));
        }
        if self.trim_user {
            query.push(("trim_user".into(), "true".into()));
        }
        if self.exclude_replies {
            query.push(("exclude_replies".into(), "true".into()));
        }
        if self.contributor_details {
            query.push(("contributor_details".into(), "true".into()));
        }
        if !self.include_retweets {
            query.push(("include_rts".into(), "false".into()));
        }
        self.tweet_mode.append_to(&mut query);
        query
    }
}

/// Options for `statuses/user_timeline`.
#[derive(Debug, Clone)]
pub struct UserTimelineOptions {
    /// The user whose timeline to fetch
    pub user: UserRef,

    /// Shared timeline paging options
    pub timeline: TimelineOptions,
}

impl UserTimelineOptions {
    /// Options for the timeline of `user`.
    #[must_use]
    pub fn new(user: UserRef) -> Self {
        Self {
            user,
            timeline: TimelineOptions::default(),
        }
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut query = self.timeline.query();
        self.user.append_to(&mut query);
        query
    }
}

/// Raw layer of the statuses endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RawStatuses<'a> {
    http: &'a HttpClient,
}

impl<'a> RawStatuses<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET statuses/show`: the raw response for a single tweet.
    pub async fn show(&self, options: &ShowStatusOptions) -> TwitterResult<RawResponse> {
        self.http.get("/1.1/statuses/show.json", &options.query()).await
    }

    /// `POST statuses/update`: post a new tweet.
    pub async fn update(&self, options: &UpdateStatusOptions) -> TwitterResult<RawResponse> {
        self.http
            .post_form("/1.1/statuses/update.json", &options.form())
            .await
    }

    /// `POST statuses/destroy/:id`: delete a tweet of the authenticating
    /// user.
    pub async fn destroy(&self, status_id: i64) -> TwitterResult<RawResponse> {
        self.http
            .post_form(&format!("/1.1/statuses/destroy/{status_id}.json"), &[])
            .await
    }

    /// `POST statuses/retweet/:id`: retweet a tweet.
    pub async fn retweet(&self, status_id: i64) -> TwitterResult<RawResponse> {
        self.http
            .post_form(&format!("/1.1/statuses/retweet/{status_id}.json"), &[])
            .await
    }

    /// `GET statuses/user_timeline`: a user's recent tweets.
    pub async fn user_timeline(&self, options: &UserTimelineOptions) -> TwitterResult<RawResponse> {
        self.http
            .get("/1.1/statuses/user_timeline.json", &options.query())
            .await
    }

    /// `GET statuses/home_timeline`: tweets by the authenticating user and
    /// the accounts they follow.
    pub async fn home_timeline(&self, options: &TimelineOptions) -> TwitterResult<RawResponse> {
        self.http
            .get("/1.1/statuses/home_timeline.json", &options.query())
            .await
    }

    /// `GET statuses/mentions_timeline`: tweets mentioning the
    /// authenticating user.
    pub async fn mentions_timeline(&self, options: &TimelineOptions) -> TwitterResult<RawResponse> {
        self.http
            .get("/1.1/statuses/mentions_timeline.json", &options.query())
            .await
    }

    /// `GET statuses/retweets_of_me`: the authenticating user's tweets
    /// that have been retweeted.
    pub async fn retweets_of_me(&self, options: &TimelineOptions) -> TwitterResult<RawResponse> {
        self.http
            .get("/1.1/statuses/retweets_of_me.json", &options.query())
            .await
    }
}

/// Typed layer of the statuses endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Statuses<'a> {
    raw: RawStatuses<'a>,
}

impl<'a> Statuses<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self {
            raw: RawStatuses::new(http),
        }
    }

    /// The raw layer of this endpoint.
    #[must_use]
    pub const fn raw(&self) -> RawStatuses<'a> {
        self.raw
    }

    /// Get the tweet with `status_id`.
    pub async fn show(&self, status_id: i64) -> TwitterResult<Response<Status>> {
        self.show_with(&ShowStatusOptions::new(status_id)).await
    }

    /// Get a tweet with explicit options.
    pub async fn show_with(&self, options: &ShowStatusOptions) -> TwitterResult<Response<Status>> {
        Response::parse(&self.raw.show(options).await?, Status::parse)
    }

    /// Post a tweet with the given text.
    pub async fn update(&self, status: &str) -> TwitterResult<Response<Status>> {
        self.update_with(&UpdateStatusOptions::new(status)).await
    }

    /// Post a tweet with explicit options.
    pub async fn update_with(&self, options: &UpdateStatusOptions) -> TwitterResult<Response<Status>> {
        Response::parse(&self.raw.update(options).await?, Status::parse)
    }

    /// Delete a tweet of the authenticating user; the deleted tweet is
    /// returned.
    pub async fn destroy(&self, status_id: i64) -> TwitterResult<Response<Status>> {
        Response::parse(&self.raw.destroy(status_id).await?, Status::parse)
    }

    /// Retweet a tweet; the new retweet is returned.
    pub async fn retweet(&self, status_id: i64) -> TwitterResult<Response<Status>> {
        Response::parse(&self.raw.retweet(status_id).await?, Status::parse)
    }

    /// Get a user's recent tweets.
    pub async fn user_timeline(
        &self,
        options: &UserTimelineOptions,
    ) -> TwitterResult<Response<Vec<Status>>> {
        Response::parse(&self.raw.user_timeline(options).await?, status_array)
    }

    /// Get the authenticating user's home timeline.
    pub async fn home_timeline(
        &self,
        options: &TimelineOptions,
    ) -> TwitterResult<Response<Vec<Status>>> {
        Response::parse(&self.raw.home_timeline(options).await?, status_array)
    }

    /// Get tweets mentioning the authenticating user.
    pub async fn mentions_timeline(
        &self,
        options: &TimelineOptions,
    ) -> TwitterResult<Response<Vec<Status>>> {
        Response::parse(&self.raw.mentions_timeline(options).await?, status_array)
    }

    /// Get the authenticating user's tweets that have been retweeted.
    pub async fn retweets_of_me(
        &self,
        options: &TimelineOptions,
    ) -> TwitterResult<Response<Vec<Status>>> {
        Response::parse(&self.raw.retweets_of_me(options).await?, status_array)
    }
}
