//! The user and account models.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::json;
use crate::models::entities::UserEntities;
use crate::models::status::Status;

/// A Twitter user as returned by the Twitter API.
///
/// The embedded `status` is the user's most recent tweet. Twitter elides the
/// user object inside that embedded tweet, so the user→status→user chain
/// terminates in practice; the parser nevertheless handles either side being
/// fully populated.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// ID of the user. Greater than 53 bits for newer accounts; prefer
    /// `id_str` where the consumer may lose integer precision.
    pub id: i64,

    /// ID of the user, as a string
    pub id_str: String,

    /// The screen name (handle) the user identifies themselves with.
    /// Unique but subject to change.
    pub screen_name: String,

    /// The display name, as the user defined it
    pub name: String,

    /// The user-defined location of the profile. Not necessarily a location
    /// nor parseable.
    pub location: String,

    /// The URL provided by the user in association with their profile
    pub url: String,

    /// The user-defined description of the account
    pub description: String,

    /// Entities parsed out of the `url` and `description` fields
    pub entities: Option<UserEntities>,

    /// Whether the user has chosen to protect their tweets
    pub is_protected: bool,

    /// Whether the account is verified
    pub is_verified: bool,

    /// Number of followers. Temporarily `0` under server stress.
    pub followers_count: i32,

    /// Number of accounts the user follows
    pub friends_count: i32,

    /// Number of public lists the user is a member of
    pub listed_count: i32,

    /// Number of tweets the user has liked. British spelling in the wire
    /// field for historical reasons.
    pub favourites_count: i32,

    /// Number of tweets (including retweets) issued by the user
    pub statuses_count: i32,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// Offset from UTC in seconds
    pub utc_offset: i32,

    /// Name of the time zone the user declares themselves within
    pub time_zone: String,

    /// Whether the user has enabled geotagging of their tweets
    pub is_geo_enabled: bool,

    /// BCP 47 code of the user's self-declared interface language
    pub language: String,

    /// The user's most recent tweet, when the API chose to embed it
    pub status: Option<Box<Status>>,

    /// Whether the account has "contributor mode" enabled. Rarely `true`.
    pub contributors_enabled: bool,

    /// Whether the user participates in Twitter's translator community
    pub is_translator: bool,

    /// Whether the authenticating user has a pending follow request to this
    /// protected account
    pub is_follow_request_sent: bool,

    /// Hex color chosen for the profile background
    pub profile_background_color: String,

    /// HTTP URL of the profile background image
    pub profile_background_image_url: String,

    /// HTTPS URL of the profile background image
    pub profile_background_image_url_https: String,

    /// Whether the background image should be tiled when displayed
    pub profile_background_tile: bool,

    /// HTTPS URL of the profile banner
    pub profile_banner_url: String,

    /// HTTP URL of the avatar image
    pub profile_image_url: String,

    /// HTTPS URL of the avatar image
    pub profile_image_url_https: String,

    /// Hex color used for links in the profile UI
    pub profile_link_color: String,

    /// Hex color used for sidebar borders in the profile UI
    pub profile_sidebar_border_color: String,

    /// Hex color used for sidebar backgrounds in the profile UI
    pub profile_sidebar_fill_color: String,

    /// Hex color used for text in the profile UI
    pub profile_text_color: String,

    /// Whether the uploaded background image should be used
    pub profile_use_background_image: bool,

    /// Whether the user kept the default profile theme
    pub has_default_profile: bool,

    /// Whether the user kept the default egg avatar
    pub has_default_profile_image: bool,
}

impl User {
    /// Parse a user node. Returns `None` when the node is absent or not an
    /// object.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            id: json::int64(obj, "id"),
            id_str: json::string(obj, "id_str"),
            screen_name: json::string(obj, "screen_name"),
            name: json::string(obj, "name"),
            location: json::string(obj, "location"),
            url: json::string(obj, "url"),
            description: json::string(obj, "description"),
            entities: json::object(obj, "entities", UserEntities::parse),
            is_protected: json::boolean(obj, "protected"),
            is_verified: json::boolean(obj, "verified"),
            followers_count: json::int32(obj, "followers_count"),
            friends_count: json::int32(obj, "friends_count"),
            listed_count: json::int32(obj, "listed_count"),
            favourites_count: json::int32(obj, "favourites_count"),
            statuses_count: json::int32(obj, "statuses_count"),
            created_at: json::datetime(obj, "created_at"),
            utc_offset: json::int32(obj, "utc_offset"),
            time_zone: json::string(obj, "time_zone"),
            is_geo_enabled: json::boolean(obj, "geo_enabled"),
            language: json::string(obj, "lang"),
            status: json::object(obj, "status", Status::parse).map(Box::new),
            contributors_enabled: json::boolean(obj, "contributors_enabled"),
            is_translator: json::boolean(obj, "is_translator"),
            is_follow_request_sent: json::boolean(obj, "follow_request_sent"),
            profile_background_color: json::string(obj, "profile_background_color"),
            profile_background_image_url: json::string(obj, "profile_background_image_url"),
            profile_background_image_url_https: json::string(obj, "profile_background_image_url_https"),
            profile_background_tile: json::boolean(obj, "profile_background_tile"),
            profile_banner_url: json::string(obj, "profile_banner_url"),
            profile_image_url: json::string(obj, "profile_image_url"),
            profile_image_url_https: json::string(obj, "profile_image_url_https"),
            profile_link_color: json::string(obj, "profile_link_color"),
            profile_sidebar_border_color: json::string(obj, "profile_sidebar_border_color"),
            profile_sidebar_fill_color: json::string(obj, "profile_sidebar_fill_color"),
            profile_text_color: json::string(obj, "profile_text_color"),
            profile_use_background_image: json::boolean(obj, "profile_use_background_image"),
            has_default_profile: json::boolean(obj, "default_profile"),
            has_default_profile_image: json::boolean(obj, "default_profile_image"),
        })
    }

    /// Whether the profile location field is non-blank.
    #[must_use]
    pub fn has_location(&self) -> bool {
        !self.location.trim().is_empty()
    }

    /// Whether the profile URL field is non-blank.
    #[must_use]
    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Whether the profile description field is non-blank.
    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// The authenticated user, as returned by `account/verify_credentials`.
///
/// Same payload as [`User`] plus the account email, so the user fields are
/// embedded by value rather than duplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The profile fields shared with every user payload
    pub user: User,

    /// Email address of the authenticated user. Only populated when the
    /// application is allowed to request it.
    pub email: String,
}

impl Account {
    /// Parse an account node.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        Some(Self {
            user: User::parse(obj)?,
            email: json::string(obj, "email"),
        })
    }

    /// Whether an email address was present in the response.
    #[must_use]
    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_user() -> Value {
        json!({
            "id": 6253282,
            "id_str": "6253282",
            "screen_name": "twitterapi",
            "name": "Twitter API",
            "location": "San Francisco, CA",
            "url": "https://dev.twitter.com",
            "description": "The Real Twitter API.",
            "protected": false,
            "verified": true,
            "followers_count": 6133636,
            "friends_count": 12,
            "listed_count": 12936,
            "favourites_count": 31,
            "statuses_count": 3656,
            "created_at": "Wed May 23 06:01:13 +0000 2007",
            "utc_offset": -25200,
            "time_zone": "Pacific Time (US & Canada)",
            "geo_enabled": true,
            "lang": "en",
            "contributors_enabled": false,
            "is_translator": false,
            "follow_request_sent": false,
            "profile_background_color": "C0DEED",
            "profile_link_color": "0084B4",
            "profile_image_url": "http://pbs.twimg.com/profile_images/normal.png",
            "profile_image_url_https": "https://pbs.twimg.com/profile_images/normal.png",
            "default_profile": false,
            "default_profile_image": false,
            "entities": {
                "url": { "urls": [{ "url": "https://t.co/8IkCzCDr19", "indices": [0, 23] }] }
            },
            "status": {
                "id": 850007368138018817i64,
                "text": "RT @TwitterDev: 1/ Today we're sharing our vision",
                "created_at": "Thu Apr 06 15:28:43 +0000 2017"
            }
        })
    }

    #[test]
    fn parses_the_full_field_set() {
        let user = User::parse(&full_user()).unwrap();

        assert_eq!(user.id, 6_253_282);
        assert_eq!(user.screen_name, "twitterapi");
        assert!(user.is_verified);
        assert!(!user.is_protected);
        assert_eq!(user.followers_count, 6_133_636);
        assert_eq!(user.favourites_count, 31);
        assert_eq!(user.utc_offset, -25_200);
        assert_eq!(user.time_zone, "Pacific Time (US & Canada)");
        assert_eq!(user.profile_link_color, "0084B4");
        assert!(user.has_location());
        assert!(user.has_url());
        assert!(user.has_description());
    }

    #[test]
    fn embedded_status_parses_without_further_nesting() {
        let user = User::parse(&full_user()).unwrap();

        let status = user.status.unwrap();
        assert_eq!(status.id, 850_007_368_138_018_817);
        assert!(status.user.is_none());
    }

    #[test]
    fn status_inside_user_may_itself_carry_a_user() {
        // Twitter elides this in practice; the parser must not rely on it.
        let user = User::parse(&json!({
            "id": 1,
            "status": {
                "id": 2,
                "user": { "id": 1, "screen_name": "self" }
            }
        }))
        .unwrap();

        let embedded = user.status.unwrap().user.unwrap();
        assert_eq!(embedded.screen_name, "self");
    }

    #[test]
    fn blank_profile_fields_report_absent() {
        let user = User::parse(&json!({ "id": 1, "location": "   " })).unwrap();

        assert!(!user.has_location());
        assert!(!user.has_url());
        assert!(!user.has_description());
        assert!(user.status.is_none());
        assert!(user.entities.is_none());
    }

    #[test]
    fn account_adds_email_on_top_of_user() {
        let mut node = full_user();
        node["email"] = json!("api@twitter.com");

        let account = Account::parse(&node).unwrap();
        assert_eq!(account.user.screen_name, "twitterapi");
        assert!(account.has_email());
        assert_eq!(account.email, "api@twitter.com");

        let without = Account::parse(&full_user()).unwrap();
        assert!(!without.has_email());
    }
}
