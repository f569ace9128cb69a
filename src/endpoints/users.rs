//! The **Users** endpoint.

use crate::endpoints::user_array;
use crate::error::TwitterResult;
use crate::http::{HttpClient, RawResponse};
use crate::models::User;
use crate::response::Response;

/// A reference to a user, by numeric ID or by screen name.
///
/// Nearly every user-addressed endpoint accepts either form; this enum picks
/// the right query parameter (`user_id` or `screen_name`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    /// Address the user by numeric ID
    Id(i64),

    /// Address the user by screen name
    ScreenName(String),
}

impl UserRef {
    pub(crate) fn append_to(&self, query: &mut Vec<(String, String)>) {
        match self {
            Self::Id(id) => query.push(("user_id".into(), id.to_string())),
            Self::ScreenName(name) => query.push(("screen_name".into(), name.clone())),
        }
    }
}

impl From<i64> for UserRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for UserRef {
    fn from(screen_name: &str) -> Self {
        Self::ScreenName(screen_name.to_string())
    }
}

/// Options for `users/search`.
#[derive(Debug, Clone, Default)]
pub struct SearchUsersOptions {
    /// The search query
    pub query: String,

    /// 1-indexed page of results to retrieve
    pub page: i32,

    /// Number of users per page, up to 20
    pub count: i32,
}

impl SearchUsersOptions {
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
        if self.page > 0 {
            query.push(("page".into(), self.page.to_string()));
        }
        if self.count > 0 {
            query.push(("count".into(), self.count.to_string()));
        }
        query
    }
}

/// Raw layer of the users endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RawUsers<'a> {
    http: &'a HttpClient,
}

impl<'a> RawUsers<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET users/show`: a single user's profile.
    pub async fn show(&self, user: &UserRef) -> TwitterResult<RawResponse> {
        let mut query = Vec::new();
        user.append_to(&mut query);
        self.http.get("/1.1/users/show.json", &query).await
    }

    /// `GET users/lookup`: up to 100 users per request by ID.
    pub async fn lookup(&self, user_ids: &[i64]) -> TwitterResult<RawResponse> {
        let ids = user_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let query = vec![("user_id".to_string(), ids)];
        self.http.get("/1.1/users/lookup.json", &query).await
    }

    /// `GET users/search`: a simple relevance-based user search.
    pub async fn search(&self, options: &SearchUsersOptions) -> TwitterResult<RawResponse> {
        self.http
            .get("/1.1/users/search.json", &options.query_string())
            .await
    }
}

/// Typed layer of the users endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    raw: RawUsers<'a>,
}

impl<'a> Users<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self {
            raw: RawUsers::new(http),
        }
    }

    /// The raw layer of this endpoint.
    #[must_use]
    pub const fn raw(&self) -> RawUsers<'a> {
        self.raw
    }

    /// Get a single user's profile.
    pub async fn show(&self, user: impl Into<UserRef>) -> TwitterResult<Response<User>> {
        Response::parse(&self.raw.show(&user.into()).await?, User::parse)
    }

    /// Get up to 100 users by ID in one request.
    pub async fn lookup(&self, user_ids: &[i64]) -> TwitterResult<Response<Vec<User>>> {
        Response::parse(&self.raw.lookup(user_ids).await?, user_array)
    }

    /// Search users by relevance.
    pub async fn search(&self, options: &SearchUsersOptions) -> TwitterResult<Response<Vec<User>>> {
        Response::parse(&self.raw.search(options).await?, user_array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_ref_picks_the_right_parameter() {
        let mut query = Vec::new();
        UserRef::from(783_214).append_to(&mut query);
        UserRef::from("twitterapi").append_to(&mut query);

        assert_eq!(
            query,
            vec![
                ("user_id".to_string(), "783214".to_string()),
                ("screen_name".to_string(), "twitterapi".to_string()),
            ]
        );
    }

    #[test]
    fn search_options_serialize_paging() {
        let options = SearchUsersOptions {
            page: 3,
            count: 20,
            ..SearchUsersOptions::new("rustlang")
        };

        assert_eq!(
            options.query_string(),
            vec![
                ("q".to_string(), "rustlang".to_string()),
                ("page".to_string(), "3".to_string()),
                ("count".to_string(), "20".to_string()),
            ]
        );
    }
}
