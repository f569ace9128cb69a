//! Response envelope: validation, rate-limit headers, typed bodies.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::error::{TwitterError, TwitterResult};
use crate::http::RawResponse;
use crate::json;

/// Rate-limit state reported by the API on every response, errors included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Total number of calls allowed within the current window, `-1` if the
    /// header is missing or unreadable.
    pub limit: i32,

    /// Remaining calls within the current window, `-1` if the header is
    /// missing or unreadable.
    pub remaining: i32,

    /// When the current window resets. Unix epoch if the header is missing
    /// or unreadable.
    pub reset: DateTime<Utc>,
}

impl RateLimitInfo {
    /// Read the three `x-rate-limit-*` headers.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_i64(headers, "x-rate-limit-limit")
                .and_then(|n| i32::try_from(n).ok())
                .unwrap_or(-1),
            remaining: header_i64(headers, "x-rate-limit-remaining")
                .and_then(|n| i32::try_from(n).ok())
                .unwrap_or(-1),
            reset: json::datetime_from_epoch(header_i64(headers, "x-rate-limit-reset").unwrap_or(0)),
        }
    }
}

fn header_i64(headers: &HeaderMap, name: &str) -> Option<i64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// A validated response from the Twitter API with a typed body.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// HTTP status code (always 200 for a value of this type)
    pub status: u16,

    /// Rate-limit state reported alongside the body
    pub rate_limit: RateLimitInfo,

    /// The parsed body
    pub body: T,
}

impl<T> Response<T> {
    /// Validate `raw` and parse its JSON body through `parse`.
    ///
    /// Validation failures surface as [`TwitterError::Api`]; a 200 response
    /// whose body is not JSON surfaces as [`TwitterError::Json`], and one
    /// whose JSON the parser rejects as [`TwitterError::Decode`].
    pub fn parse<F>(raw: &RawResponse, parse: F) -> TwitterResult<Self>
    where
        F: FnOnce(&Value) -> Option<T>,
    {
        // Rate-limit headers ride along on error responses too.
        let rate_limit = RateLimitInfo::from_headers(&raw.headers);

        validate(raw)?;

        let node: Value = serde_json::from_str(&raw.body)?;
        let body = parse(&node)
            .ok_or_else(|| TwitterError::Decode(format!("HTTP 200 body: {}", raw.body)))?;

        Ok(Self {
            status: raw.status,
            rate_limit,
            body,
        })
    }
}

/// Check a raw response for an API-level error.
///
/// A 200 status passes unconditionally. Anything else is mapped onto
/// [`TwitterError::Api`] using whichever error shape Twitter chose: the
/// legacy top-level `error` string (code 0), the usual `errors` array
/// (first element's `message` and `code`), or, for bodies that are not
/// JSON at all, the body itself with code 0.
pub fn validate(raw: &RawResponse) -> TwitterResult<()> {
    if raw.status == 200 {
        return Ok(());
    }

    let Ok(obj) = serde_json::from_str::<Value>(&raw.body) else {
        return Err(TwitterError::Api {
            status: raw.status,
            code: 0,
            message: raw.body.clone(),
        });
    };

    // For some types of errors Twitter only responds with an error message
    if json::has(&obj, "error") {
        return Err(TwitterError::Api {
            status: raw.status,
            code: 0,
            message: json::string(&obj, "error"),
        });
    }

    // In most cases it responds with an array of errors; only the first one
    // is ever populated in practice
    if let Some(first) = obj.get("errors").and_then(Value::as_array).and_then(|a| a.first()) {
        return Err(TwitterError::Api {
            status: raw.status,
            code: json::int32(first, "code"),
            message: json::string(first, "message"),
        });
    }

    Err(TwitterError::Api {
        status: raw.status,
        code: 0,
        message: raw.body.clone(),
    })
}
