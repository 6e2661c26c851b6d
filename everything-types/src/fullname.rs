//! Fullname identifiers.
//!
//! The platform addresses users, groups, posts and comments as
//! `<kind-prefix>_<id>` (e.g. `t3_15bfi0`). `name` fields and the
//! `parent_id` / `link_id` references on comments carry this form.

use crate::{Error, Kind, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A kind-qualified identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fullname {
    kind: Kind,
    id: String,
}

impl Fullname {
    /// Builds a fullname from a kind and a bare id.
    pub fn new(kind: Kind, id: impl Into<String>) -> Result<Self> {
        if kind.fullname_prefix().is_none() {
            return Err(Error::NoFullnamePrefix(kind));
        }
        let id = id.into();
        if id.is_empty() {
            return Err(Error::InvalidFullname(format!("{kind}_")));
        }
        Ok(Self { kind, id })
    }

    /// Parses `"<prefix>_<id>"`.
    pub fn parse(s: &str) -> Result<Self> {
        let (prefix, id) = s
            .split_once('_')
            .ok_or_else(|| Error::InvalidFullname(s.to_string()))?;
        let kind = Kind::from_str(prefix).map_err(|_| Error::InvalidFullname(s.to_string()))?;
        Self::new(kind, id).map_err(|_| Error::InvalidFullname(s.to_string()))
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// The bare id, without the kind prefix.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Fullname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind, self.id)
    }
}

impl FromStr for Fullname {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Fullname {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fullname {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
