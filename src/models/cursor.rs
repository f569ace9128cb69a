//! Cursor-paginated pages.
//!
//! Followers, friends and list membership endpoints all page with opaque
//! `next_cursor`/`previous_cursor` integers around either a bare ID array or
//! a user array; the two page shapes here are shared across all of them.

use serde_json::Value;

use crate::json;
use crate::models::user::User;

/// A cursored page of bare user IDs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdsPage {
    /// The IDs of this page
    pub ids: Vec<i64>,

    /// Cursor of the next page, `0` when exhausted
    pub next_cursor: i64,

    /// Cursor of the previous page, `0` at the first page
    pub previous_cursor: i64,
}

impl IdsPage {
    /// Parse a cursored IDs response body.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            ids: json::int64_array(obj, "ids"),
            next_cursor: json::int64(obj, "next_cursor"),
            previous_cursor: json::int64(obj, "previous_cursor"),
        })
    }
}

/// A cursored page of full user objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersPage {
    /// The users of this page
    pub users: Vec<User>,

    /// Cursor of the next page, `0` when exhausted
    pub next_cursor: i64,

    /// Cursor of the previous page, `0` at the first page
    pub previous_cursor: i64,
}

impl UsersPage {
    /// Parse a cursored users response body.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            users: json::array(obj, "users", User::parse),
            next_cursor: json::int64(obj, "next_cursor"),
            previous_cursor: json::int64(obj, "previous_cursor"),
        })
    }
}
