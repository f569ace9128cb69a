//! Media attachments: photos, videos and animated GIFs.

use std::time::Duration;

use serde_json::Value;

use crate::json;
use crate::models::entities::{EntityRange, TextEntity};

/// An entity reference to an image or video attached to a status message.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaEntity {
    /// Span within the source text
    pub range: EntityRange,

    /// ID of the media
    pub id: i64,

    /// ID of the media, as a string
    pub id_str: String,

    /// HTTP URL of the media file
    pub media_url: String,

    /// HTTPS URL of the media file
    pub media_url_https: String,

    /// The `t.co` URL as it appears in the text
    pub url: String,

    /// Truncated URL for display purposes
    pub display_url: String,

    /// The resolved URL
    pub expanded_url: String,

    /// Media type: `photo`, `video` or `animated_gif`
    pub kind: String,

    /// The resized formats available for the media
    pub sizes: MediaSizes,

    /// Video metadata, present for videos and animated GIFs
    pub video_info: Option<VideoInfo>,
}

impl MediaEntity {
    /// Parse a media entity node.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            range: EntityRange::parse(obj),
            id: json::int64(obj, "id"),
            id_str: json::string(obj, "id_str"),
            media_url: json::string(obj, "media_url"),
            media_url_https: json::string(obj, "media_url_https"),
            url: json::string(obj, "url"),
            display_url: json::string(obj, "display_url"),
            expanded_url: json::string(obj, "expanded_url"),
            kind: json::string(obj, "type"),
            sizes: json::object(obj, "sizes", MediaSizes::parse).unwrap_or_default(),
            video_info: json::object(obj, "video_info", VideoInfo::parse),
        })
    }

    /// Whether the media carries video metadata.
    #[must_use]
    pub const fn has_video_info(&self) -> bool {
        self.video_info.is_some()
    }
}

impl TextEntity for MediaEntity {
    fn range(&self) -> EntityRange {
        self.range
    }
}

/// The four named resize slots of a media entity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaSizes {
    /// The `small` format
    pub small: Option<MediaSize>,

    /// The `thumb` format
    pub thumb: Option<MediaSize>,

    /// The `medium` format
    pub medium: Option<MediaSize>,

    /// The `large` format
    pub large: Option<MediaSize>,
}

impl MediaSizes {
    /// Parse the `sizes` node of a media entity.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            small: json::object(obj, "small", MediaSize::parse),
            thumb: json::object(obj, "thumb", MediaSize::parse),
            medium: json::object(obj, "medium", MediaSize::parse),
            large: json::object(obj, "large", MediaSize::parse),
        })
    }

    /// Iterate over the slots that are present.
    pub fn iter(&self) -> impl Iterator<Item = &MediaSize> {
        [
            self.small.as_ref(),
            self.thumb.as_ref(),
            self.medium.as_ref(),
            self.large.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}

impl<'a> IntoIterator for &'a MediaSizes {
    type Item = &'a MediaSize;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<Option<&'a MediaSize>, 4>>;

    fn into_iter(self) -> Self::IntoIter {
        [
            self.small.as_ref(),
            self.thumb.as_ref(),
            self.medium.as_ref(),
            self.large.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// One resized format of a media entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSize {
    /// Width in pixels
    pub width: i32,

    /// Height in pixels
    pub height: i32,

    /// Resize mode: `fit` or `crop`
    pub resize: String,
}

impl MediaSize {
    /// Parse a single size node.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            width: json::int32(obj, "w"),
            height: json::int32(obj, "h"),
            resize: json::string(obj, "resize"),
        })
    }
}

/// Video metadata of a media entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInfo {
    /// Aspect ratio as a `[width, height]` pair
    pub aspect_ratio: [i32; 2],

    /// Duration of the video. Animated GIFs carry no duration.
    pub duration: Duration,

    /// The available variants/formats of the video
    pub variants: Vec<VideoVariant>,
}

impl VideoInfo {
    /// Parse the `video_info` node of a media entity.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        let ratio = json::int32_array(obj, "aspect_ratio");
        Some(Self {
            aspect_ratio: [
                ratio.first().copied().unwrap_or(0),
                ratio.get(1).copied().unwrap_or(0),
            ],
            duration: Duration::from_millis(
                u64::try_from(json::int64(obj, "duration_millis")).unwrap_or(0),
            ),
            variants: json::array(obj, "variants", VideoVariant::parse),
        })
    }

    /// Whether a duration was specified for the video.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        !self.duration.is_zero()
    }
}

/// One playable format of a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoVariant {
    /// Bitrate of the variant, `0` if not specified
    pub bitrate: i32,

    /// Content type of the variant, e.g. `video/mp4`
    pub content_type: String,

    /// URL of the variant
    pub url: String,
}

impl VideoVariant {
    /// Parse a single variant node.
    #[must_use]
    pub fn parse(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            return None;
        }
        Some(Self {
            bitrate: json::int32(obj, "bitrate"),
            content_type: json::string(obj, "content_type"),
            url: json::string(obj, "url"),
        })
    }

    /// Whether a bitrate was specified for the variant.
    #[must_use]
    pub const fn has_bitrate(&self) -> bool {
        self.bitrate > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn media_node() -> Value {
        json!({
            "id": 266031293949698048i64,
            "id_str": "266031293949698048",
            "indices": [17, 37],
            "media_url": "http://pbs.twimg.com/media/A7EiDWcCYAAZT1D.jpg",
            "media_url_https": "https://pbs.twimg.com/media/A7EiDWcCYAAZT1D.jpg",
            "url": "https://t.co/bAJE6Vom",
            "display_url": "pic.twitter.com/bAJE6Vom",
            "expanded_url": "https://twitter.com/BarackObama/status/266031293945503744/photo/1",
            "type": "photo",
            "sizes": {
                "medium": { "w": 600, "h": 399, "resize": "fit" },
                "thumb": { "w": 150, "h": 150, "resize": "crop" }
            }
        })
    }

    #[test]
    fn parses_a_photo_entity() {
        let media = MediaEntity::parse(&media_node()).unwrap();

        assert_eq!(media.id, 266_031_293_949_698_048);
        assert_eq!(media.kind, "photo");
        assert_eq!(media.range.start, 17);
        assert!(!media.has_video_info());
    }

    #[test]
    fn sizes_iterate_only_present_slots() {
        let media = MediaEntity::parse(&media_node()).unwrap();
        let sizes: Vec<_> = media.sizes.iter().collect();

        assert_eq!(sizes.len(), 2);
        assert!(media.sizes.small.is_none());
        assert_eq!(media.sizes.medium.as_ref().unwrap().width, 600);
        assert_eq!(media.sizes.thumb.as_ref().unwrap().resize, "crop");
    }

    #[test]
    fn video_info_reads_duration_and_variants() {
        let info = VideoInfo::parse(&json!({
            "aspect_ratio": [16, 9],
            "duration_millis": 30033,
            "variants": [
                { "bitrate": 832000, "content_type": "video/mp4", "url": "https://video.twimg.com/a.mp4" },
                { "content_type": "application/x-mpegURL", "url": "https://video.twimg.com/pl.m3u8" }
            ]
        }))
        .unwrap();

        assert_eq!(info.aspect_ratio, [16, 9]);
        assert!(info.has_duration());
        assert_eq!(info.duration, Duration::from_millis(30_033));
        assert_eq!(info.variants.len(), 2);
        assert!(info.variants[0].has_bitrate());
        assert!(!info.variants[1].has_bitrate());
    }

    #[test]
    fn gif_without_duration() {
        let info = VideoInfo::parse(&json!({
            "aspect_ratio": [1, 1],
            "variants": [{ "bitrate": 0, "content_type": "video/mp4", "url": "https://video.twimg.com/g.mp4" }]
        }))
        .unwrap();

        assert!(!info.has_duration());
    }
}
