//! Typed client for the Twitter REST API v1.1.
//!
//! Two layers run through the crate: a *raw* layer that issues OAuth 1.0a
//! signed HTTP calls and hands back [`http::RawResponse`] values, and a
//! *typed* layer that validates those responses and parses their JSON bodies
//! into the model graph under [`models`].
//!
//! Response parsing is deliberately permissive: Twitter's payload shape
//! varies by endpoint, API version and authentication scope, so a missing or
//! malformed optional field degrades to a zero value instead of failing the
//! whole parse. The only user-visible failure for a delivered response is
//! [`TwitterError::Api`], raised when the API answers with a non-200 status.
//!
//! ```no_run
//! use twitter_v1::{TwitterClient, TwitterConfig};
//!
//! # async fn run() -> twitter_v1::TwitterResult<()> {
//! let client = TwitterClient::new(&TwitterConfig {
//!     consumer_key: "ck".into(),
//!     consumer_secret: "cs".into(),
//!     access_token: "at".into(),
//!     access_token_secret: "as".into(),
//!     ..Default::default()
//! })?;
//!
//! let response = client.statuses().show(210462857140252672).await?;
//! println!("{}", response.body.text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod client;
mod config;
mod error;
mod oauth;

pub mod endpoints;
pub mod http;
pub mod json;
pub mod models;
pub mod response;

pub use client::TwitterClient;
pub use config::TwitterConfig;
pub use error::{TwitterError, TwitterResult};
pub use response::{RateLimitInfo, Response};
