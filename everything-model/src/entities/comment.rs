use super::post::PostBase;
use crate::entity::Schema;
use crate::envelope::Envelope;
use crate::listing::List;
use crate::markdown::{MarkdownPair, MarkdownSync};
use crate::thing::Thing;
use everything_types::Kind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

schema! {
    /// A reply (`t1`) to a post or to another comment.
    pub struct Comment {
        @flatten base: PostBase,
        pub comment_type: Option<String> = None,
        pub replies: Option<Replies> = Some(Replies::default()),
        pub collapsed_reason_code: Option<String> = None,
        pub parent_id: Option<String> = Some(String::new()),
        pub collapsed: Option<bool> = Some(false),
        pub body: Option<String> = Some(String::new()),
        pub is_submitter: Option<bool> = Some(false),
        pub body_html: Option<String> = Some(String::new()),
        pub collapsed_reason: Option<String> = None,
        pub associated_award: Option<Value> = None,
        pub unrepliable_reason: Option<String> = None,
        pub score_hidden: Option<bool> = Some(false),
        pub link_id: Option<String> = Some(String::new()),
        pub controversiality: Option<i64> = Some(0),
        pub depth: Option<i64> = Some(0),
        pub collapsed_because_crowd_control: Option<bool> = None,
    }
}

/// The replies under a comment.
///
/// The platform sends a nested listing when replies exist and an empty
/// string when they don't.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Replies {
    Listing(Box<Envelope<List<Thing>>>),
    Text(String),
}

impl Default for Replies {
    fn default() -> Self {
        Replies::Text(String::new())
    }
}

impl Replies {
    /// The nested listing, if any.
    #[must_use]
    pub fn listing(&self) -> Option<&List<Thing>> {
        match self {
            Replies::Listing(envelope) => Some(envelope.data()),
            Replies::Text(_) => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listing().is_none_or(List::is_empty)
    }
}

impl Schema for Comment {
    const KIND: Kind = Kind::Comment;
}

impl MarkdownSync for Comment {
    const MARKDOWN_FIELDS: &'static [&'static str] = &["body"];

    fn markdown_pair_mut(&mut self, field: &str) -> Option<MarkdownPair<'_>> {
        match field {
            "body" => Some(MarkdownPair::new(&mut self.body, &mut self.body_html)),
            _ => None,
        }
    }
}
