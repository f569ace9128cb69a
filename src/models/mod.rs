//! The Twitter v1.1 model graph.
//!
//! Every model is an immutable value constructed once by a pure
//! `parse(&Value) -> Option<Self>` function (null in, null out) and never
//! mutated afterwards. Missing or malformed optional fields degrade to zero
//! values; see [`crate::json`] for the decoding contract.

mod cursor;
mod entities;
mod geo;
mod geocode;
mod list;
mod media;
mod search;
mod status;
mod user;

pub use cursor::{IdsPage, UsersPage};
pub use entities::{
    EntityRange, ExtendedEntities, HashtagEntity, MentionEntity, StatusEntities, StatusEntityRef,
    TextEntity, UrlEntity, UserDescriptionEntities, UserEntities, UserUrlEntities,
};
pub use geo::{BoundingBox, Coordinates, Place};
pub use geocode::ReverseGeocodeResults;
pub use list::{ListMode, TwitterList};
pub use media::{MediaEntity, MediaSize, MediaSizes, VideoInfo, VideoVariant};
pub use search::{SearchMetadata, SearchResults};
pub use status::{ReplyRef, Status};
pub use user::{Account, User};
