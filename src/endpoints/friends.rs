//! The **Friends** endpoint (accounts a user follows).

use crate::endpoints::users::UserRef;
use crate::endpoints::CursorOptions;
use crate::error::TwitterResult;
use crate::http::{HttpClient, RawResponse};
use crate::models::{IdsPage, UsersPage};
use crate::response::Response;

/// Raw layer of the friends endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RawFriends<'a> {
    http: &'a HttpClient,
}

impl<'a> RawFriends<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET friends/ids`: a cursored page of followed-account IDs.
    pub async fn ids(&self, options: &CursorOptions) -> TwitterResult<RawResponse> {
        self.http.get("/1.1/friends/ids.json", &options.query()).await
    }

    /// `GET friends/list`: a cursored page of followed-account profiles.
    pub async fn list(&self, options: &CursorOptions) -> TwitterResult<RawResponse> {
        self.http.get("/1.1/friends/list.json", &options.query()).await
    }
}

/// Typed layer of the friends endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Friends<'a> {
    raw: RawFriends<'a>,
}

impl<'a> Friends<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self {
            raw: RawFriends::new(http),
        }
    }

    /// The raw layer of this endpoint.
    #[must_use]
    pub const fn raw(&self) -> RawFriends<'a> {
        self.raw
    }

    /// Get a page of IDs of the accounts `user` follows.
    pub async fn ids(&self, user: impl Into<UserRef>) -> TwitterResult<Response<IdsPage>> {
        self.ids_with(&CursorOptions::new(user.into())).await
    }

    /// Get a page of followed-account IDs with explicit paging.
    pub async fn ids_with(&self, options: &CursorOptions) -> TwitterResult<Response<IdsPage>> {
        Response::parse(&self.raw.ids(options).await?, IdsPage::parse)
    }

    /// Get a page of profiles of the accounts `user` follows.
    pub async fn list(&self, user: impl Into<UserRef>) -> TwitterResult<Response<UsersPage>> {
        self.list_with(&CursorOptions::new(user.into())).await
    }

    /// Get a page of followed-account profiles with explicit paging.
    pub async fn list_with(&self, options: &CursorOptions) -> TwitterResult<Response<UsersPage>> {
        Response::parse(&self.raw.list(options).await?, UsersPage::parse)
    }
}
