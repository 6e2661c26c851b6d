//! The kind-tagged wrapper around a normalized entity.

use crate::entities::{Comment, Group, MoreComments, Post, User};
use crate::entity::{Entity, Schema};
use crate::error::ModelResult;
use crate::listing::List;
use crate::markdown::{MarkdownConverter, MarkdownSync};
use crate::thing::Thing;
use everything_types::Kind;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// An entity tagged with its [`Kind`].
///
/// The envelope derefs to the entity, so entity fields and methods resolve
/// through it. Its own [`kind`](Self::kind) and [`data`](Self::data) always
/// win. Mutators defined here return `&mut Self` so calls chain on the
/// envelope rather than on the bare entity.
///
/// Serializes as `{"kind": <tag>, "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    kind: Kind,
    data: T,
}

impl<T: Entity> Envelope<T> {
    /// Wraps an entity, taking the tag from the entity itself.
    pub fn wrap(data: T) -> Self {
        Self {
            kind: data.kind(),
            data,
        }
    }

    /// Builds an envelope from a `{kind, data}` payload that has already been
    /// split apart. Fails if `kind` is not a kind `T` can hold.
    pub fn decode(kind: Kind, data: Value) -> ModelResult<Self> {
        debug!(kind = %kind, "normalizing payload");
        T::decode(kind, data).map(Self::wrap)
    }
}

impl<T> Envelope<T> {
    /// The tag taken from the entity when the envelope was built.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// Runs `f` against the entity and returns the envelope.
    ///
    /// ```ignore
    /// envelope.chain(|post| post.hidden = Some(true)).render_all_to_html();
    /// ```
    pub fn chain<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.data);
        self
    }

    /// Like [`chain`](Self::chain) for a fallible mutator; the mutator's
    /// error is passed through unchanged.
    pub fn try_chain<F, E>(&mut self, f: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut T) -> Result<(), E>,
    {
        f(&mut self.data)?;
        Ok(self)
    }
}

impl<T: Serialize> Envelope<T> {
    /// Reads a property by wire name.
    ///
    /// `kind` and `data` resolve to the envelope's own members; any other
    /// name is looked up on the entity. Unknown names return `None`.
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "kind" => serde_json::to_value(self.kind).ok(),
            "data" => serde_json::to_value(&self.data).ok(),
            _ => match serde_json::to_value(&self.data).ok()? {
                Value::Object(mut fields) => fields.remove(name),
                _ => None,
            },
        }
    }
}

impl<T> Deref for Envelope<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T> DerefMut for Envelope<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

impl<'de, T: Entity> Deserialize<'de> for Envelope<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            kind: Kind,
            #[serde(default)]
            data: Value,
        }

        let wire = Wire::deserialize(deserializer)?;
        Self::decode(wire.kind, wire.data).map_err(de::Error::custom)
    }
}

// ── Factories ───────────────────────────────────────────────────

impl<T: Schema> Envelope<T> {
    /// Defaults a fresh `T`, merges `raw` over it and wraps the result.
    pub fn from_partial(raw: Value) -> ModelResult<Self> {
        Self::decode(T::KIND, raw)
    }
}

impl Envelope<User> {
    /// A user. An embedded `subreddit` object is defaulted and merged too.
    pub fn user(raw: Value) -> ModelResult<Self> {
        Self::from_partial(raw)
    }
}

impl Envelope<Group> {
    pub fn group(raw: Value) -> ModelResult<Self> {
        Self::from_partial(raw)
    }
}

impl Envelope<Post> {
    pub fn post(raw: Value) -> ModelResult<Self> {
        Self::from_partial(raw)
    }
}

impl Envelope<Comment> {
    pub fn comment(raw: Value) -> ModelResult<Self> {
        Self::from_partial(raw)
    }
}

impl Envelope<MoreComments> {
    pub fn more_comments(raw: Value) -> ModelResult<Self> {
        Self::from_partial(raw)
    }
}

impl Envelope<List<Thing>> {
    /// A heterogeneous listing. Each child must itself be `{kind, data}`.
    pub fn list(raw: Value) -> ModelResult<Self> {
        Self::from_partial(raw)
    }
}

impl Envelope<Thing> {
    /// Any entity, chosen by `kind`.
    pub fn thing(kind: Kind, raw: Value) -> ModelResult<Self> {
        Self::decode(kind, raw)
    }

    /// Narrows to a concrete entity type, handing the envelope back if the
    /// wrapped entity is something else.
    pub fn downcast<T>(self) -> Result<Envelope<T>, Self>
    where
        T: TryFrom<Thing, Error = Thing>,
    {
        let kind = self.kind;
        match T::try_from(self.data) {
            Ok(data) => Ok(Envelope { kind, data }),
            Err(data) => Err(Envelope { kind, data }),
        }
    }
}

impl<T: Into<Thing>> Envelope<T> {
    /// Widens to an envelope over [`Thing`], keeping the tag.
    pub fn into_thing(self) -> Envelope<Thing> {
        Envelope {
            kind: self.kind,
            data: self.data.into(),
        }
    }
}

// ── Markdown ────────────────────────────────────────────────────

impl<T: MarkdownSync> Envelope<T> {
    pub fn render_all_to_html(&mut self) -> &mut Self {
        self.data.render_all_to_html();
        self
    }

    pub fn render_all_from_html(&mut self) -> &mut Self {
        self.data.render_all_from_html();
        self
    }

    pub fn render_all_to_html_with<C>(&mut self, converter: &C) -> &mut Self
    where
        C: MarkdownConverter + ?Sized,
    {
        self.data.render_all_to_html_with(converter);
        self
    }

    pub fn render_all_from_html_with<C>(&mut self, converter: &C) -> &mut Self
    where
        C: MarkdownConverter + ?Sized,
    {
        self.data.render_all_from_html_with(converter);
        self
    }
}
