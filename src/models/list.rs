//! The Twitter list model.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::json;
use crate::models::user::User;

/// Visibility of a list.
///
/// Unknown mode strings decode to [`ListMode::Unknown`] rather than being
/// silently aliased onto a real mode, so a genuinely new API value cannot be
/// mistaken for a public list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    /// Anyone can subscribe to the list
    #[default]
    Public,

    /// Only the owner can see the list
    Private,

    /// A mode string this client does not recognize
    Unknown,
}

impl ListMode {
    /// Decode a mode name, case-insensitively.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case("public") {
            Self::Public
        } else if name.eq_ignore_ascii_case("private") {
            Self::Private
        } else {
            Self::Unknown
        }
    }

    /// The wire representation of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Unknown => "unknown",
        }
    }
}

/// A Twitter list.
#[derive(Debug, Clone, PartialEq)]
pub struct TwitterList {
    /// ID of the list
    pub id: i64,

    /// URL slug of the list
    pub slug: String,

    /// Name of the list
    pub name: String,

    /// When the list was created
    pub created_at: DateTime<Utc>,

    /// URI of the list
    pub uri: String,

    /// Number of subscribers
    pub subscriber_count: i32,

    /// Number of members
    pub member_count: i32,

    /// Visibility of the list
    pub mode: ListMode,

    /// Full name of the list, e.g. `@twitterapi/team`
    pub full_name: String,

    /// Description of the list
    pub description: String,

    /// The user owning the list
    pub user: Option<User>,

    /// Whether the authenticating user follows the list
    pub is_following: bool,
}

impl TwitterList {
    /// Parse a list node.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            id: json::int64(obj, "id"),
            slug: json::string(obj, "slug"),
            name: json::string(obj, "name"),
            created_at: json::datetime(obj, "created_at"),
            uri: json::string(obj, "uri"),
            subscriber_count: json::int32(obj, "subscriber_count"),
            member_count: json::int32(obj, "member_count"),
            mode: ListMode::parse(&json::string(obj, "mode")),
            full_name: json::string(obj, "full_name"),
            description: json::string(obj, "description"),
            user: json::object(obj, "user", User::parse),
            is_following: json::boolean(obj, "following"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_list_with_owner() {
        let list = TwitterList::parse(&json!({
            "id": 84839422,
            "slug": "official-twitter-accts",
            "name": "Official Twitter Accts",
            "created_at": "Wed Feb 27 21:39:24 +0000 2013",
            "uri": "/twitter/lists/official-twitter-accts",
            "subscriber_count": 20,
            "member_count": 0,
            "mode": "public",
            "full_name": "@twitter/official-twitter-accts",
            "description": "Accounts managed by Twitter, Inc.",
            "following": false,
            "user": { "id": 783214, "screen_name": "twitter" }
        }))
        .unwrap();

        assert_eq!(list.id, 84_839_422);
        assert_eq!(list.mode, ListMode::Public);
        assert_eq!(list.user.unwrap().screen_name, "twitter");
        assert!(!list.is_following);
    }

    #[test]
    fn mode_parsing_is_case_insensitive() {
        assert_eq!(ListMode::parse("Private"), ListMode::Private);
        assert_eq!(ListMode::parse("PUBLIC"), ListMode::Public);
    }

    #[test]
    fn unknown_mode_does_not_alias_onto_a_real_one() {
        let list = TwitterList::parse(&json!({ "id": 1, "mode": "members-only" })).unwrap();
        assert_eq!(list.mode, ListMode::Unknown);

        let missing = TwitterList::parse(&json!({ "id": 2 })).unwrap();
        assert_eq!(missing.mode, ListMode::Unknown);
    }
}
