//! The **Account** endpoint.

use crate::error::TwitterResult;
use crate::http::{HttpClient, RawResponse};
use crate::models;
use crate::response::Response;

/// Raw layer of the account endpoint.
#[derive(Debug, Clone, Copy)]
pub struct RawAccount<'a> {
    http: &'a HttpClient,
}

impl<'a> RawAccount<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `GET account/verify_credentials`: the authenticated user's profile,
    /// or a 401 if the credentials are not valid.
    pub async fn verify_credentials(&self, include_email: bool) -> TwitterResult<RawResponse> {
        let mut query = Vec::new();
        if include_email {
            query.push(("include_email".to_string(), "true".to_string()));
        }
        self.http
            .get("/1.1/account/verify_credentials.json", &query)
            .await
    }
}

/// Typed layer of the account endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Account<'a> {
    raw: RawAccount<'a>,
}

impl<'a> Account<'a> {
    pub(crate) const fn new(http: &'a HttpClient) -> Self {
        Self {
            raw: RawAccount::new(http),
        }
    }

    /// The raw layer of this endpoint.
    #[must_use]
    pub const fn raw(&self) -> RawAccount<'a> {
        self.raw
    }

    /// Verify the configured credentials and return the authenticated
    /// user's account. Pass `include_email` to request the account email
    /// (requires an allowlisted application).
    pub async fn verify_credentials(
        &self,
        include_email: bool,
    ) -> TwitterResult<Response<models::Account>> {
        Response::parse(
            &self.raw.verify_credentials(include_email).await?,
            models::Account::parse,
        )
    }
}
