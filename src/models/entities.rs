//! Entity references parsed out of tweet and profile text.
//!
//! Every entity carries a half-open `[start, end)` character range into the
//! text it annotates. Callers reconstructing styled text walk the entities
//! in ascending start order via [`StatusEntities::all`]; callers *splicing*
//! text walk them descending via [`StatusEntities::all_reversed`], so
//! earlier offsets stay valid while later spans are replaced.

use serde_json::Value;

use crate::json;
use crate::models::media::MediaEntity;

/// Half-open character offset pair into a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntityRange {
    /// Index of the first character of the span
    pub start: usize,

    /// Index one past the last character of the span
    pub end: usize,
}

impl EntityRange {
    /// Read the shared two-element `indices` array of an entity node.
    #[must_use]
    pub fn parse(obj: &Value) -> Self {
        let indices = obj.get("indices").cloned().unwrap_or(Value::Null);
        Self {
            start: json::element_usize(&indices, 0),
            end: json::element_usize(&indices, 1),
        }
    }
}

/// Common contract of every entity span.
pub trait TextEntity {
    /// The character range the entity annotates.
    fn range(&self) -> EntityRange;

    /// Start index of the span.
    fn start_index(&self) -> usize {
        self.range().start
    }

    /// End index (exclusive) of the span.
    fn end_index(&self) -> usize {
        self.range().end
    }
}

/// A `#hashtag` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashtagEntity {
    /// Span within the source text
    pub range: EntityRange,

    /// The hashtag text, minus the leading `#`
    pub text: String,
}

impl HashtagEntity {
    /// Parse a hashtag entity node.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            range: EntityRange::parse(obj),
            text: json::string(obj, "text"),
        })
    }
}

impl TextEntity for HashtagEntity {
    fn range(&self) -> EntityRange {
        self.range
    }
}

/// An `@mention` reference to another user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionEntity {
    /// Span within the source text
    pub range: EntityRange,

    /// ID of the referenced user
    pub user_id: i64,

    /// ID of the referenced user, as a string
    pub user_id_str: String,

    /// Screen name of the referenced user
    pub screen_name: String,

    /// Display name of the referenced user
    pub name: String,
}

impl MentionEntity {
    /// Parse a mention entity node.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            range: EntityRange::parse(obj),
            user_id: json::int64(obj, "id"),
            user_id_str: json::string(obj, "id_str"),
            screen_name: json::string(obj, "screen_name"),
            name: json::string(obj, "name"),
        })
    }
}

impl TextEntity for MentionEntity {
    fn range(&self) -> EntityRange {
        self.range
    }
}

/// A shortened URL reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntity {
    /// Span within the source text
    pub range: EntityRange,

    /// The `t.co` URL as it appears in the text
    pub url: String,

    /// The resolved URL
    pub expanded_url: String,

    /// Truncated URL for display purposes
    pub display_url: String,
}

impl UrlEntity {
    /// Parse a URL entity node.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            range: EntityRange::parse(obj),
            url: json::string(obj, "url"),
            expanded_url: json::string(obj, "expanded_url"),
            display_url: json::string(obj, "display_url"),
        })
    }
}

impl TextEntity for UrlEntity {
    fn range(&self) -> EntityRange {
        self.range
    }
}

/// A reference to any entity of a status message, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusEntityRef<'a> {
    /// Hashtag entity
    Hashtag(&'a HashtagEntity),
    /// URL entity
    Url(&'a UrlEntity),
    /// Mention entity
    Mention(&'a MentionEntity),
    /// Media entity
    Media(&'a MediaEntity),
}

impl TextEntity for StatusEntityRef<'_> {
    fn range(&self) -> EntityRange {
        match self {
            Self::Hashtag(e) => e.range,
            Self::Url(e) => e.range,
            Self::Mention(e) => e.range,
            Self::Media(e) => e.range,
        }
    }
}

/// The entities parsed out of the text of a status message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusEntities {
    /// Hashtag spans
    pub hashtags: Vec<HashtagEntity>,

    /// URL spans
    pub urls: Vec<UrlEntity>,

    /// Mention spans
    pub mentions: Vec<MentionEntity>,

    /// Media spans
    pub media: Vec<MediaEntity>,
}

impl StatusEntities {
    /// Parse the `entities` node of a status message.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            hashtags: json::array(obj, "hashtags", HashtagEntity::parse),
            urls: json::array(obj, "urls", UrlEntity::parse),
            mentions: json::array(obj, "user_mentions", MentionEntity::parse),
            media: json::array(obj, "media", MediaEntity::parse),
        })
    }

    /// All entities ordered by ascending start index.
    ///
    /// The sort is stable; entities sharing a start index keep the
    /// hashtags, urls, mentions, media concatenation order.
    #[must_use]
    pub fn all(&self) -> Vec<StatusEntityRef<'_>> {
        let mut entities = self.collect();
        entities.sort_by_key(|e| e.start_index());
        entities
    }

    /// All entities ordered by descending start index.
    #[must_use]
    pub fn all_reversed(&self) -> Vec<StatusEntityRef<'_>> {
        let mut entities = self.collect();
        entities.sort_by(|a, b| b.start_index().cmp(&a.start_index()));
        entities
    }

    fn collect(&self) -> Vec<StatusEntityRef<'_>> {
        let mut entities = Vec::with_capacity(
            self.hashtags.len() + self.urls.len() + self.mentions.len() + self.media.len(),
        );
        entities.extend(self.hashtags.iter().map(StatusEntityRef::Hashtag));
        entities.extend(self.urls.iter().map(StatusEntityRef::Url));
        entities.extend(self.mentions.iter().map(StatusEntityRef::Mention));
        entities.extend(self.media.iter().map(StatusEntityRef::Media));
        entities
    }
}

/// The extended entities of a status message (native media attachments).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtendedEntities {
    /// Media attachments
    pub media: Vec<MediaEntity>,
}

impl ExtendedEntities {
    /// Parse the `extended_entities` node of a status message.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            media: json::array(obj, "media", MediaEntity::parse),
        })
    }
}

/// URL entities of the `url` field of a user profile.
///
/// Users can only specify a single URL in their profiles, but the API still
/// returns an array.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserUrlEntities {
    /// URL spans
    pub urls: Vec<UrlEntity>,
}

impl UserUrlEntities {
    /// Parse the `entities.url` node of a user.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            urls: json::array(obj, "urls", UrlEntity::parse),
        })
    }

    /// All entities ordered by ascending start index.
    #[must_use]
    pub fn all(&self) -> Vec<&UrlEntity> {
        let mut urls: Vec<&UrlEntity> = self.urls.iter().collect();
        urls.sort_by_key(|e| e.range.start);
        urls
    }

    /// All entities ordered by descending start index.
    #[must_use]
    pub fn all_reversed(&self) -> Vec<&UrlEntity> {
        let mut urls: Vec<&UrlEntity> = self.urls.iter().collect();
        urls.sort_by(|a, b| b.range.start.cmp(&a.range.start));
        urls
    }
}

/// URL entities of the `description` field of a user profile.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserDescriptionEntities {
    /// URL spans
    pub urls: Vec<UrlEntity>,
}

impl UserDescriptionEntities {
    /// Parse the `entities.description` node of a user.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            urls: json::array(obj, "urls", UrlEntity::parse),
        })
    }

    /// All entities ordered by ascending start index.
    #[must_use]
    pub fn all(&self) -> Vec<&UrlEntity> {
        let mut urls: Vec<&UrlEntity> = self.urls.iter().collect();
        urls.sort_by_key(|e| e.range.start);
        urls
    }

    /// All entities ordered by descending start index.
    #[must_use]
    pub fn all_reversed(&self) -> Vec<&UrlEntity> {
        let mut urls: Vec<&UrlEntity> = self.urls.iter().collect();
        urls.sort_by(|a, b| b.range.start.cmp(&a.range.start));
        urls
    }
}

/// Entities parsed out of the `url` and `description` fields of a user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserEntities {
    /// Entities of the profile URL field
    pub url: Option<UserUrlEntities>,

    /// Entities of the profile description field
    pub description: Option<UserDescriptionEntities>,
}

impl UserEntities {
    /// Parse the `entities` node of a user.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            url: json::object(obj, "url", UserUrlEntities::parse),
            description: json::object(obj, "description", UserDescriptionEntities::parse),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn indices_become_a_range() {
        let hashtag = HashtagEntity::parse(&json!({
            "text": "rustlang",
            "indices": [5, 14]
        }))
        .unwrap();

        assert_eq!(hashtag.text, "rustlang");
        assert_eq!(hashtag.range, EntityRange { start: 5, end: 14 });
    }

    #[test]
    fn missing_indices_default_to_zero() {
        let url = UrlEntity::parse(&json!({ "url": "https://t.co/x" })).unwrap();
        assert_eq!(url.range, EntityRange::default());
    }

    #[test]
    fn non_object_nodes_parse_to_none() {
        assert!(HashtagEntity::parse(&Value::Null).is_none());
        assert!(StatusEntities::parse(&json!([1, 2])).is_none());
    }

    fn mixed_entities() -> StatusEntities {
        StatusEntities::parse(&json!({
            "hashtags": [{ "text": "one", "indices": [5, 9] }],
            "urls": [],
            "user_mentions": [{ "screen_name": "bob", "indices": [0, 4] }],
            "media": []
        }))
        .unwrap()
    }

    #[test]
    fn all_sorts_by_ascending_start_index() {
        let entities = mixed_entities();
        let all = entities.all();

        assert_eq!(all.len(), 2);
        assert!(matches!(all[0], StatusEntityRef::Mention(m) if m.screen_name == "bob"));
        assert!(matches!(all[1], StatusEntityRef::Hashtag(h) if h.text == "one"));
    }

    #[test]
    fn all_reversed_sorts_by_descending_start_index() {
        let entities = mixed_entities();
        let reversed = entities.all_reversed();

        assert!(matches!(reversed[0], StatusEntityRef::Hashtag(_)));
        assert!(matches!(reversed[1], StatusEntityRef::Mention(_)));
    }

    #[test]
    fn ties_keep_kind_order_in_both_directions() {
        // A hashtag and a mention starting at the same offset: the
        // concatenation order (hashtags before mentions) must survive the
        // sort in both directions.
        let entities = StatusEntities::parse(&json!({
            "hashtags": [{ "text": "tie", "indices": [3, 7] }],
            "user_mentions": [{ "screen_name": "tie", "indices": [3, 8] }]
        }))
        .unwrap();

        assert!(matches!(entities.all()[0], StatusEntityRef::Hashtag(_)));
        assert!(matches!(entities.all_reversed()[0], StatusEntityRef::Hashtag(_)));
    }

    #[test]
    fn user_entities_split_url_and_description() {
        let entities = UserEntities::parse(&json!({
            "url": {
                "urls": [{ "url": "https://t.co/a", "indices": [0, 14] }]
            }
        }))
        .unwrap();

        assert_eq!(entities.url.unwrap().urls.len(), 1);
        assert!(entities.description.is_none());
    }
}
