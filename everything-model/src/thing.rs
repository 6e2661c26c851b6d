use crate::entities::{Comment, Group, MoreComments, Post, User};
use crate::entity::Entity;
use crate::error::ModelResult;
use crate::listing::List;
use crate::markdown::{MarkdownPair, MarkdownSync};
use everything_types::Kind;
use serde::Serialize;
use serde_json::Value;

/// Any entity. Used for listings whose children differ in kind.
///
/// Serializes as the inner entity alone; the tag lives on the enclosing
/// [`Envelope`](crate::Envelope).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Thing {
    User(User),
    Group(Group),
    Post(Post),
    Comment(Comment),
    List(List<Thing>),
    MoreComments(MoreComments),
}

impl Thing {
    #[must_use]
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Thing::Group(group) => Some(group),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_post(&self) -> Option<&Post> {
        match self {
            Thing::Post(post) => Some(post),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Thing::Comment(comment) => Some(comment),
            _ => None,
        }
    }
}

impl Entity for Thing {
    fn kind(&self) -> Kind {
        match self {
            Thing::User(_) => Kind::User,
            Thing::Group(_) => Kind::Group,
            Thing::Post(_) => Kind::Post,
            Thing::Comment(_) => Kind::Comment,
            Thing::List(_) => Kind::List,
            Thing::MoreComments(_) => Kind::MoreComments,
        }
    }

    fn decode(kind: Kind, data: Value) -> ModelResult<Self> {
        Ok(match kind {
            Kind::User => Thing::User(User::decode(kind, data)?),
            Kind::Group => Thing::Group(Group::decode(kind, data)?),
            Kind::Post => Thing::Post(Post::decode(kind, data)?),
            Kind::Comment => Thing::Comment(Comment::decode(kind, data)?),
            Kind::List => Thing::List(List::<Thing>::decode(kind, data)?),
            Kind::MoreComments => Thing::MoreComments(MoreComments::decode(kind, data)?),
        })
    }
}

macro_rules! thing_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Thing {
                fn from(value: $ty) -> Self {
                    Thing::$variant(value)
                }
            }

            impl TryFrom<Thing> for $ty {
                type Error = Thing;

                fn try_from(thing: Thing) -> Result<Self, Thing> {
                    match thing {
                        Thing::$variant(value) => Ok(value),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

thing_variant! {
    User(User),
    Group(Group),
    Post(Post),
    Comment(Comment),
    List(List<Thing>),
    MoreComments(MoreComments),
}

/// Dispatches to the wrapped entity. Kinds without markdown fields resolve
/// no pairs and are skipped.
impl MarkdownSync for Thing {
    const MARKDOWN_FIELDS: &'static [&'static str] = &[
        "submit_text",
        "description",
        "public_description",
        "selftext",
        "body",
    ];

    fn markdown_pair_mut(&mut self, field: &str) -> Option<MarkdownPair<'_>> {
        match self {
            Thing::Group(group) => group.markdown_pair_mut(field),
            Thing::Post(post) => post.markdown_pair_mut(field),
            Thing::Comment(comment) => comment.markdown_pair_mut(field),
            Thing::User(_) | Thing::List(_) | Thing::MoreComments(_) => None,
        }
    }
}
