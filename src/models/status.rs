//! The status message (tweet) model.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::json;
use crate::models::entities::{ExtendedEntities, StatusEntities};
use crate::models::geo::{Coordinates, Place};
use crate::models::user::User;

/// A status message (tweet) as received from the Twitter API.
///
/// Quoted and retweeted statuses embed further `Status` values; the parser
/// recurses structurally and assumes no fixed nesting bound, although real
/// Twitter data stays within two levels (retweet of a quote).
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    /// ID of the tweet
    pub id: i64,

    /// ID of the tweet, as a string
    pub id_str: String,

    /// When the tweet was created
    pub created_at: DateTime<Utc>,

    /// Text of the tweet (truncated to the compatibility length)
    pub text: String,

    /// Full text of the tweet, populated in extended tweet mode
    pub full_text: String,

    /// The client used for making the tweet, as an HTML-formatted string
    pub source: String,

    /// Whether `text` was truncated
    pub is_truncated: bool,

    /// Reply context, present only when the tweet is a reply
    pub in_reply_to: Option<ReplyRef>,

    /// The user who posted the tweet. Omitted in some payloads, e.g. a
    /// user's embedded latest status.
    pub user: Option<Box<User>>,

    /// Geographic location reported by the user or client application
    pub coordinates: Option<Coordinates>,

    /// The place the tweet is associated with
    pub place: Option<Place>,

    /// ID of the quoted tweet, if a quote
    pub quoted_status_id: i64,

    /// ID of the quoted tweet as a string, if a quote
    pub quoted_status_id_str: String,

    /// Whether the tweet quotes another tweet
    pub is_quote_status: bool,

    /// The quoted tweet itself
    pub quoted_status: Option<Box<Status>>,

    /// The retweeted tweet, present when this tweet is a native retweet
    pub retweeted_status: Option<Box<Status>>,

    /// Approximate number of times the tweet has been quoted
    pub quote_count: i32,

    /// Number of replies to the tweet
    pub reply_count: i32,

    /// Number of times the tweet has been retweeted
    pub retweet_count: i32,

    /// Approximate number of times the tweet has been liked
    pub favorite_count: i32,

    /// Entities parsed out of the tweet text
    pub entities: Option<StatusEntities>,

    /// Extended entities (native media attachments)
    pub extended_entities: Option<ExtendedEntities>,

    /// Whether the authenticating user has favorited the tweet
    pub has_favorited: bool,

    /// Whether the authenticating user has retweeted the tweet
    pub has_retweeted: bool,

    /// Whether links in the tweet may point at sensitive content
    pub is_possibly_sensitive: bool,

    /// BCP 47 language identifier of the machine-detected tweet language,
    /// `und` if none could be detected
    pub language: String,
}

/// Reply context of a tweet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRef {
    /// ID of the tweet being replied to
    pub status_id: i64,

    /// ID of the tweet being replied to, as a string
    pub status_id_str: String,

    /// ID of the user being replied to
    pub user_id: i64,

    /// ID of the user being replied to, as a string
    pub user_id_str: String,

    /// Screen name of the user being replied to
    pub screen_name: String,
}

impl Status {
    /// Parse a status message node. Returns `None` when the node is absent
    /// or not an object; a well-shaped node never fails, whatever optional
    /// fields it is missing.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }

        // The reply fields are gated on key presence rather than value:
        // Twitter omits the key entirely for tweets with no reply context,
        // and an (unusual) explicit 0 still counts as a reply reference.
        let in_reply_to = if json::has(obj, "in_reply_to_status_id") {
            Some(ReplyRef {
                status_id: json::int64(obj, "in_reply_to_status_id"),
                status_id_str: json::string(obj, "in_reply_to_status_id_str"),
                user_id: json::int64(obj, "in_reply_to_user_id"),
                user_id_str: json::string(obj, "in_reply_to_user_id_str"),
                screen_name: json::string(obj, "in_reply_to_screen_name"),
            })
        } else {
            None
        };

        Some(Self {
            id: json::int64(obj, "id"),
            id_str: json::string(obj, "id_str"),
            created_at: json::datetime(obj, "created_at"),
            text: json::string(obj, "text"),
            full_text: json::string(obj, "full_text"),
            source: json::string(obj, "source"),
            is_truncated: json::boolean(obj, "truncated"),
            in_reply_to,
            user: json::object(obj, "user", User::parse).map(Box::new),
            coordinates: json::object(obj, "coordinates", Coordinates::parse),
            place: json::object(obj, "place", Place::parse),
            quoted_status_id: json::int64(obj, "quoted_status_id"),
            quoted_status_id_str: json::string(obj, "quoted_status_id_str"),
            is_quote_status: json::boolean(obj, "is_quote_status"),
            quoted_status: json::object(obj, "quoted_status", Self::parse).map(Box::new),
            retweeted_status: json::object(obj, "retweeted_status", Self::parse).map(Box::new),
            quote_count: json::int32(obj, "quote_count"),
            reply_count: json::int32(obj, "reply_count"),
            retweet_count: json::int32(obj, "retweet_count"),
            favorite_count: json::int32(obj, "favorite_count"),
            entities: json::object(obj, "entities", StatusEntities::parse),
            extended_entities: json::object(obj, "extended_entities", ExtendedEntities::parse),
            has_favorited: json::boolean(obj, "favorited"),
            has_retweeted: json::boolean(obj, "retweeted"),
            is_possibly_sensitive: json::boolean(obj, "possibly_sensitive"),
            language: json::string(obj, "lang"),
        })
    }

    /// Whether the `text` field is non-blank.
    #[must_use]
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Whether the `full_text` field is non-blank.
    #[must_use]
    pub fn has_full_text(&self) -> bool {
        !self.full_text.trim().is_empty()
    }

    /// The timestamp by which mixed timeline entries are ordered.
    #[must_use]
    pub const fn sort_key(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "id": 210462857140252672i64,
            "text": "Along with our new #Twitterbird, we've also updated our Display Guidelines",
            "created_at": "Sun Jun 17 02:39:31 +0000 2012"
        })
    }

    #[test]
    fn minimal_tweet_parses_with_zero_valued_optionals() {
        let status = Status::parse(&minimal()).unwrap();

        assert_eq!(status.id, 210_462_857_140_252_672);
        assert!(status.has_text());
        assert!(status.user.is_none());
        assert!(status.place.is_none());
        assert!(status.coordinates.is_none());
        assert!(status.quoted_status.is_none());
        assert!(status.retweeted_status.is_none());
        assert!(status.entities.is_none());
        assert!(status.in_reply_to.is_none());
        assert_eq!(status.retweet_count, 0);
        assert_eq!(status.language, "");
        assert!(!status.is_truncated);
    }

    #[test]
    fn non_object_nodes_parse_to_none() {
        assert!(Status::parse(&Value::Null).is_none());
        assert!(Status::parse(&json!("210462857140252672")).is_none());
        assert!(Status::parse(&json!([])).is_none());
    }

    #[test]
    fn quoted_status_recurses_one_level() {
        let status = Status::parse(&json!({
            "id": 1,
            "quoted_status": {
                "id": 2,
                "text": "x",
                "created_at": "Sun Jun 17 02:39:31 +0000 2012"
            }
        }))
        .unwrap();

        let quoted = status.quoted_status.unwrap();
        assert_eq!(quoted.id, 2);
        assert!(quoted.quoted_status.is_none());
    }

    #[test]
    fn retweet_of_quote_recurses_structurally() {
        let status = Status::parse(&json!({
            "id": 1,
            "retweeted_status": {
                "id": 2,
                "is_quote_status": true,
                "quoted_status": { "id": 3, "text": "inner" }
            }
        }))
        .unwrap();

        let retweeted = status.retweeted_status.unwrap();
        assert!(retweeted.is_quote_status);
        assert_eq!(retweeted.quoted_status.unwrap().id, 3);
    }

    #[test]
    fn reply_gate_is_key_presence_not_truthiness() {
        let no_reply = Status::parse(&minimal()).unwrap();
        assert!(no_reply.in_reply_to.is_none());

        let zero_reply = Status::parse(&json!({
            "id": 4,
            "in_reply_to_status_id": 0
        }))
        .unwrap();
        let reply = zero_reply.in_reply_to.unwrap();
        assert_eq!(reply.status_id, 0);

        let null_reply = Status::parse(&json!({
            "id": 5,
            "in_reply_to_status_id": null
        }))
        .unwrap();
        assert!(null_reply.in_reply_to.is_none());
    }

    #[test]
    fn reply_reference_reads_all_five_fields() {
        let status = Status::parse(&json!({
            "id": 6,
            "in_reply_to_status_id": 114749583439036416i64,
            "in_reply_to_status_id_str": "114749583439036416",
            "in_reply_to_user_id": 819797,
            "in_reply_to_user_id_str": "819797",
            "in_reply_to_screen_name": "episod"
        }))
        .unwrap();

        let reply = status.in_reply_to.unwrap();
        assert_eq!(reply.status_id, 114_749_583_439_036_416);
        assert_eq!(reply.user_id, 819_797);
        assert_eq!(reply.screen_name, "episod");
    }

    #[test]
    fn embedded_user_and_coordinates_parse() {
        let status = Status::parse(&json!({
            "id": 7,
            "user": { "id": 6253282, "screen_name": "twitterapi" },
            "coordinates": { "type": "Point", "coordinates": [-73.99, 40.73] }
        }))
        .unwrap();

        assert_eq!(status.user.unwrap().screen_name, "twitterapi");
        let coordinates = status.coordinates.unwrap();
        assert!((coordinates.latitude - 40.73).abs() < f64::EPSILON);
    }

    #[test]
    fn parsing_twice_yields_equal_graphs() {
        let node = json!({
            "id": 8,
            "text": "same",
            "created_at": "Sun Jun 17 02:39:31 +0000 2012",
            "quoted_status": { "id": 9, "text": "inner" },
            "entities": { "hashtags": [{ "text": "t", "indices": [0, 2] }] }
        });

        let first = Status::parse(&node).unwrap();
        let second = Status::parse(&node).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn perspectival_flags_and_counts() {
        let status = Status::parse(&json!({
            "id": 10,
            "favorited": true,
            "retweeted": false,
            "possibly_sensitive": true,
            "quote_count": 1,
            "reply_count": 2,
            "retweet_count": 3,
            "favorite_count": 4,
            "lang": "en"
        }))
        .unwrap();

        assert!(status.has_favorited);
        assert!(!status.has_retweeted);
        assert!(status.is_possibly_sensitive);
        assert_eq!(
            (
                status.quote_count,
                status.reply_count,
                status.retweet_count,
                status.favorite_count
            ),
            (1, 2, 3, 4)
        );
        assert_eq!(status.language, "en");
    }
}
