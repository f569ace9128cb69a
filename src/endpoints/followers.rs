//! The **Followers** endpoint.

use crate::endpoints::users::UserRef;
use crate::endpoints::CursorOptions;
use crate::error::TwitterResult;
use crate::http::{HttpClient, RawResponse};
use crate::models::{IdsPage, UsersPage};
use crate::response::Response;

/// Raw layer of the followers endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RawFollowers<'a> {
    http: &'a HttpClient,
}

impl<'a> RawFollowers<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET followers/ids`: a cursored page of follower IDs.
    pub async fn ids(&self, options: &CursorOptions) -> TwitterResult<RawResponse> {
        self.http.get("/1.1/followers/ids.json", &options.query()).await
    }

    /// `GET followers/list`: a cursored page of follower profiles.
    pub async fn list(&self, options: &CursorOptions) -> TwitterResult<RawResponse> {
        self.http.get("/1.1/followers/list.json", &options.query()).await
    }
}

/// Typed layer of the followers endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Followers<'a> {
    raw: RawFollowers<'a>,
}

impl<'a> Followers<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self {
            raw: RawFollowers::new(http),
        }
    }

    /// The raw layer of this endpoint.
    #[must_use]
    pub const fn raw(&self) -> RawFollowers<'a> {
        self.raw
    }

    /// Get a page of IDs of the users following `user`.
    pub async fn ids(&self, user: impl Into<UserRef>) -> TwitterResult<Response<IdsPage>> {
        self.ids_with(&CursorOptions::new(user.into())).await
    }

    /// Get a page of follower IDs with explicit paging.
    pub async fn ids_with(&self, options: &CursorOptions) -> TwitterResult<Response<IdsPage>> {
        Response::parse(&self.raw.ids(options).await?, IdsPage::parse)
    }

    /// Get a page of profiles of the users following `user`.
    pub async fn list(&self, user: impl Into<UserRef>) -> TwitterResult<Response<UsersPage>> {
        self.list_with(&CursorOptions::new(user.into())).await
    }

    /// Get a page of follower profiles with explicit paging.
    pub async fn list_with(&self, options: &CursorOptions) -> TwitterResult<Response<UsersPage>> {
        Response::parse(&self.raw.list(options).await?, UsersPage::parse)
    }
}
