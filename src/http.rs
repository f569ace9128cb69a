//! HTTP transport: signed requests in, raw responses out.
//!
//! This is the raw layer of the client. It knows how to issue OAuth-signed
//! GET and form-POST requests and hand back the undecoded response; it never
//! looks inside a response body. Validation and parsing live in
//! [`crate::response`].

use reqwest::header::HeaderMap;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::TwitterConfig;
use crate::error::TwitterResult;
use crate::oauth::OAuthSigner;

/// A raw HTTP response as delivered by the transport.
///
/// Header lookup through [`HeaderMap`] is case-insensitive.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers
    pub headers: HeaderMap,

    /// Undecoded response body
    pub body: String,
}

impl RawResponse {
    /// Build a response value from parts. Mostly useful in tests.
    #[must_use]
    pub const fn new(status: u16, headers: HeaderMap, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }
}

/// Transport issuing OAuth 1.0a signed requests against the Twitter API.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    signer: OAuthSigner,
}

impl HttpClient {
    /// Create a transport from the configuration.
    pub fn new(config: &TwitterConfig) -> TwitterResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("twitter-v1/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            signer: OAuthSigner::new(config),
        })
    }

    /// Issue a signed GET request.
    #[instrument(skip(self, query))]
    pub async fn get(&self, path: &str, query: &[(String, String)]) -> TwitterResult<RawResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!(path, "GET Twitter API");

        let auth_header = self.signer.sign("GET", &url, query)?;

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Authorization", auth_header)
            .send()
            .await?;

        Self::into_raw(response).await
    }

    /// Issue a signed POST request with form-encoded parameters.
    #[instrument(skip(self, form))]
    pub async fn post_form(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> TwitterResult<RawResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!(path, "POST Twitter API");

        let auth_header = self.signer.sign("POST", &url, form)?;

        let response = self
            .client
            .post(&url)
            .form(form)
            .header("Authorization", auth_header)
            .send()
            .await?;

        Self::into_raw(response).await
    }

    async fn into_raw(response: reqwest::Response) -> TwitterResult<RawResponse> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
