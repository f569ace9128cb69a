//! Endpoint groups of the Twitter REST API v1.1.
//!
//! Each group comes in two layers, mirroring the API client as a whole: a
//! raw layer (`Raw*`) that issues the signed HTTP call and returns the
//! undecoded [`crate::http::RawResponse`], and a typed layer that feeds the
//! raw response through [`crate::response::Response::parse`]. The typed
//! methods are thin; all parsing complexity lives in [`crate::models`].

use serde_json::Value;

use crate::models::{Status, TwitterList, User};

mod account;
mod favorites;
mod followers;
mod friends;
mod geocode;
mod lists;
mod search;
mod statuses;
mod users;

pub use account::{Account as AccountEndpoint, RawAccount};
pub use favorites::{Favorites, FavoritesOptions, RawFavorites};
pub use followers::{Followers, RawFollowers};
pub use friends::{Friends, RawFriends};
pub use geocode::{Geocode, Granularity, RawGeocode, ReverseGeocodeOptions};
pub use lists::{CreateListOptions, Lists, RawLists};
pub use search::{RawSearch, Search, SearchResultType, SearchTweetsOptions};
pub use statuses::{
    RawStatuses, ShowStatusOptions, Statuses, TimelineOptions, UpdateStatusOptions,
    UserTimelineOptions,
};
pub use users::{RawUsers, SearchUsersOptions, UserRef, Users};

/// Payload length selector for endpoints returning tweets.
///
/// In the default compatibility mode the API truncates tweets to the classic
/// 140-character `text`; extended mode populates `full_text` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweetMode {
    /// Truncated `text` payloads (the API default)
    #[default]
    Compatibility,

    /// Full-length `full_text` payloads
    Extended,
}

impl TweetMode {
    /// Append `tweet_mode` to a query when a non-default mode is selected.
    pub(crate) fn append_to(self, query: &mut Vec<(String, String)>) {
        if self == Self::Extended {
            query.push(("tweet_mode".into(), "extended".into()));
        }
    }
}

/// Paging options shared by every cursor-paginated endpoint (followers,
/// friends, list members).
#[derive(Debug, Clone)]
pub struct CursorOptions {
    /// The user the page is about
    pub user: UserRef,

    /// Cursor of the page to fetch; `0` (or `-1`) starts at the first page
    pub cursor: i64,

    /// Number of entries per page
    pub count: i32,
}

impl CursorOptions {
    /// First-page options for `user`.
    #[must_use]
    pub const fn new(user: UserRef) -> Self {
        Self {
            user,
            cursor: 0,
            count: 0,
        }
    }

    pub(crate) fn query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        self.user.append_to(&mut query);
        if self.cursor != 0 {
            query.push(("cursor".into(), self.cursor.to_string()));
        }
        if self.count > 0 {
            query.push(("count".into(), self.count.to_string()));
        }
        query
    }
}

/// Parse a top-level array of statuses (timelines, favorites).
pub(crate) fn status_array(node: &Value) -> Option<Vec<Status>> {
    node.as_array()
        .map(|items| items.iter().filter_map(Status::parse).collect())
}

/// Parse a top-level array of users (lookup, user search).
pub(crate) fn user_array(node: &Value) -> Option<Vec<User>> {
    node.as_array()
        .map(|items| items.iter().filter_map(User::parse).collect())
}

/// Parse a top-level array of lists.
pub(crate) fn list_array(node: &Value) -> Option<Vec<TwitterList>> {
    node.as_array()
        .map(|items| items.iter().filter_map(TwitterList::parse).collect())
}
