//! The envelope discriminant.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies the entity type wrapped by an envelope.
///
/// Serializes as the platform's wire tag, so `Kind::Post` is `"t3"` on the
/// wire and `Kind::List` is `"Listing"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    #[serde(rename = "Listing")]
    List,
    #[serde(rename = "more")]
    MoreComments,
    #[serde(rename = "t2")]
    User,
    #[serde(rename = "t5")]
    Group,
    #[serde(rename = "t1")]
    Comment,
    #[serde(rename = "t3")]
    Post,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 6] = [
        Kind::List,
        Kind::MoreComments,
        Kind::User,
        Kind::Group,
        Kind::Comment,
        Kind::Post,
    ];

    /// Returns the wire tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::List => "Listing",
            Kind::MoreComments => "more",
            Kind::User => "t2",
            Kind::Group => "t5",
            Kind::Comment => "t1",
            Kind::Post => "t3",
        }
    }

    /// Returns the prefix used in fullnames of this kind, if it has any.
    ///
    /// Listings and "more" placeholders are not addressable and have none.
    #[must_use]
    pub const fn fullname_prefix(self) -> Option<&'static str> {
        match self {
            Kind::List | Kind::MoreComments => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}
