//! Entity model for Everything.
//!
//! Turns raw platform payloads into typed, fully-defaulted entities wrapped
//! in a kind-tagged [`Envelope`]:
//! - [`merge`]: shallow, last-write-wins overlay of partial data onto a defaulted entity
//! - [`Envelope`]: `{kind, data}` wrapper that derefs to the entity and chains mutators
//! - [`MarkdownSync`]: markdown ⇄ HTML sibling-field sync for any entity that declares fields
//! - [`List`]: paginated listing of envelopes with the autocomplete view
//! - [`LinkPreviewSource`]: the collaborator used by [`Post::enrich_from_link`]
//!
//! Schemas carry the platform's defaults; unknown wire fields are kept in
//! each entity's `extra` map so `{kind, data}` re-serializes losslessly.

mod entities;
mod entity;
mod envelope;
mod error;
mod listing;
pub mod markdown;
pub mod merge;
mod preview;
mod thing;

pub use entities::{
    Comment, CommentContributionSettings, Edited, Group, GroupBase, ImageSource,
    LinkFlairRichtext, MoreComments, Post, PostBase, Preview, PreviewImage, Replies, Subreddit,
    User,
};
pub use entity::{Entity, Schema};
pub use envelope::Envelope;
pub use error::{ModelError, ModelResult, PreviewError};
pub use everything_types::{Fullname, Kind};
pub use listing::{AllowedPostTypes, AsGroup, AutocompleteGroup, AutocompleteView, List};
pub use markdown::{CommonMark, CommonMarkOptions, MarkdownConverter, MarkdownPair, MarkdownSync};
pub use merge::{Partial, merge};
pub use preview::{LinkImage, LinkPreview, LinkPreviewSource};
pub use thing::Thing;
