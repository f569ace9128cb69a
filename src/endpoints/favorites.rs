//! The **Favorites** endpoint.

use crate::endpoints::users::UserRef;
use crate::endpoints::{status_array, TweetMode};
use crate::error::TwitterResult;
use crate::http::{HttpClient, RawResponse};
use crate::models::Status;
use crate::response::Response;

/// Options for `favorites/list`.
#[derive(Debug, Clone, Default)]
pub struct FavoritesOptions {
    /// The user whose favorites to fetch; the authenticating user when
    /// absent
    pub user: Option<UserRef>,

    /// Number of tweets per page, up to 200
    pub count: i32,

    /// Only return tweets with an ID greater than this one
    pub since_id: i64,

    /// Only return tweets with an ID less than or equal to this one
    pub max_id: i64,

    /// Payload length selector
    pub tweet_mode: TweetMode,
}

impl FavoritesOptions {
    fn query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(user) = &self.user {
            user.append_to(&mut query);
        }
        if self.count > 0 {
            query.push(("count".into(), self.count.to_string()));
        }
        if self.since_id > 0 {
            query.push(("since_id".into(), self.since_id.to_string()));
        }
        if self.max_id > 0 {
            query.push(("max_id".into(), self.max_id.to_string()));
        }
        self.tweet_mode.append_to(&mut query);
        query
    }
}

/// Raw layer of the favorites endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RawFavorites<'a> {
    http: &'a HttpClient,
}

impl<'a> RawFavorites<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET favorites/list`: tweets liked by a user.
    pub async fn list(&self, options: &FavoritesOptions) -> TwitterResult<RawResponse> {
        self.http.get("/1.1/favorites/list.json", &options.query()).await
    }

    /// `POST favorites/create`: like a tweet.
    pub async fn create(&self, status_id: i64) -> TwitterResult<RawResponse> {
        let form = vec![("id".to_string(), status_id.to_string())];
        self.http.post_form("/1.1/favorites/create.json", &form).await
    }

    /// `POST favorites/destroy`: remove a like.
    pub async fn destroy(&self, status_id: i64) -> TwitterResult<RawResponse> {
        let form = vec![("id".to_string(), status_id.to_string())];
        self.http.post_form("/1.1/favorites/destroy.json", &form).await
    }
}

/// Typed layer of the favorites endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Favorites<'a> {
    raw: RawFavorites<'a>,
}

impl<'a> Favorites<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self {
            raw: RawFavorites::new(http),
        }
    }

    /// The raw layer of this endpoint.
    #[must_use]
    pub const fn raw(&self) -> RawFavorites<'a> {
        self.raw
    }

    /// Get tweets liked by a user.
    pub async fn list(&self, options: &FavoritesOptions) -> TwitterResult<Response<Vec<Status>>> {
        Response::parse(&self.raw.list(options).await?, status_array)
    }

    /// Like a tweet; the liked tweet is returned.
    pub async fn create(&self, status_id: i64) -> TwitterResult<Response<Status>> {
        Response::parse(&self.raw.create(status_id).await?, Status::parse)
    }

    /// Remove a like; the un-liked tweet is returned.
    pub async fn destroy(&self, status_id: i64) -> TwitterResult<Response<Status>> {
        Response::parse(&self.raw.destroy(status_id).await?, Status::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults_to_the_authenticating_user() {
        assert!(FavoritesOptions::default().query().is_empty());

        let options = FavoritesOptions {
            user: Some(UserRef::ScreenName("twitterapi".into())),
            count: 50,
            ..FavoritesOptions::default()
        };
        let query = options.query();

        assert!(query.contains(&("screen_name".into(), "twitterapi".into())));
        assert!(query.contains(&("count".into(), "50".into())));
    }
}
