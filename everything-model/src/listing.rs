use crate::entities::{Group, null_as_default};
use crate::entity::{Entity, Schema};
use crate::envelope::Envelope;
use crate::merge::Partial;
use crate::thing::Thing;
use everything_types::Kind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A page of envelopes (`Listing`).
///
/// `after` / `before` are the pagination cursors; the platform sends `null`
/// for a missing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(serialize = "T: Serialize", deserialize = "T: Entity")
)]
pub struct List<T> {
    pub after: Option<String>,
    pub dist: Option<i64>,
    pub modhash: Option<String>,
    pub geo_filter: Option<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub children: Vec<Envelope<T>>,
    pub before: Option<String>,
    /// Wire fields not described by the schema.
    #[serde(flatten)]
    pub extra: Partial,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            after: None,
            dist: None,
            modhash: Some(String::new()),
            geo_filter: None,
            children: Vec::new(),
            before: None,
            extra: Partial::new(),
        }
    }
}

impl<T: Entity> Schema for List<T> {
    const KIND: Kind = Kind::List;
}

impl<T> List<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Envelope<T>> {
        self.children.iter()
    }

    /// Whether the platform reported a next page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.after.as_deref().is_some_and(|after| !after.is_empty())
    }

    pub fn push(&mut self, child: Envelope<T>) -> &mut Self {
        self.children.push(child);
        self
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a Envelope<T>;
    type IntoIter = std::slice::Iter<'a, Envelope<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

// ── Autocomplete ────────────────────────────────────────────────

/// Entities that may hold a community.
pub trait AsGroup {
    fn as_group(&self) -> Option<&Group>;
}

impl AsGroup for Group {
    fn as_group(&self) -> Option<&Group> {
        Some(self)
    }
}

impl AsGroup for Thing {
    fn as_group(&self) -> Option<&Group> {
        Thing::as_group(self)
    }
}

impl<T: Entity + AsGroup> List<T> {
    /// Builds the community-search autocomplete response from this listing.
    ///
    /// Selection is by envelope tag: only `t5` children are kept, in order.
    /// `text` and `links` are always allowed since the listing carries no
    /// data for them.
    #[must_use]
    pub fn to_autocomplete_view(&self) -> AutocompleteView {
        let subreddits = self
            .children
            .iter()
            .filter(|child| child.kind() == Kind::Group)
            .filter_map(|child| child.data().as_group())
            .map(AutocompleteGroup::from)
            .collect();
        AutocompleteView { subreddits }
    }
}

/// Autocomplete response (v1 shape).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteView {
    pub subreddits: Vec<AutocompleteGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutocompleteGroup {
    pub num_subscribers: i64,
    pub name: String,
    pub allowed_post_types: AllowedPostTypes,
    pub id: String,
    pub primary_color: String,
    pub community_icon: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowedPostTypes {
    pub images: bool,
    pub text: bool,
    pub videos: bool,
    pub links: bool,
    pub spoilers: bool,
}

impl From<&Group> for AutocompleteGroup {
    fn from(group: &Group) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            num_subscribers: group.base.subscribers.unwrap_or_default(),
            name: text(&group.base.display_name),
            allowed_post_types: AllowedPostTypes {
                images: group.allow_images.unwrap_or_default(),
                text: true,
                videos: group.allow_videos.unwrap_or_default(),
                links: true,
                spoilers: group.spoilers_enabled.unwrap_or_default(),
            },
            id: text(&group.base.name),
            primary_color: text(&group.base.primary_color),
            community_icon: text(&group.base.community_icon),
            icon: text(&group.base.icon_img),
        }
    }
}
