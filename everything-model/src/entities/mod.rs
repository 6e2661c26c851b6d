//! Platform entity schemas.
//!
//! Every field is an `Option` holding the platform's default, so a wire `null`
//! is kept as `None` and written back as `null`. Keys the schema does not
//! know are kept in `extra`.

use serde::{Deserialize, Deserializer};

/// Declares a schema struct with per-field defaults.
///
/// Generates the struct (with `#[serde(default)]` and a flattened `extra`
/// map) and its `Default` impl. An
/// optional `@flatten` field embeds a shared base record by value.
///
/// `pub base struct` declares such a shared record. Bases have no `extra`
/// map: a flattened map inside a flattened struct would see (and keep) every
/// key of the enclosing record.
macro_rules! schema {
    (
        $(#[$meta:meta])*
        pub base struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( @flatten $base:ident : $base_ty:ty, )?
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                #[serde(flatten)]
                pub $base: $base_ty,
            )?
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
            /// Wire fields not described by the schema.
            #[serde(flatten)]
            pub extra: crate::merge::Partial,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $base: Default::default(), )?
                    $( $field: $default, )*
                    extra: crate::merge::Partial::new(),
                }
            }
        }
    };
}

mod comment;
mod group;
mod more;
mod post;
mod user;

pub use comment::{Comment, Replies};
pub use group::{CommentContributionSettings, Group, GroupBase, Subreddit};
pub use more::MoreComments;
pub use post::{Edited, ImageSource, LinkFlairRichtext, Post, PostBase, Preview, PreviewImage};
pub use user::User;

/// Deserializes `null` as the type's default value.
///
/// Only for listing members the platform never nulls.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
