//! Query option records.
//!
//! Field names serialize in the camelCase the web clients send.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of a user's histories to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserDetail {
    #[default]
    Overview,
    Submitted,
    Comments,
    Upvoted,
    Downvoted,
    Hidden,
    Saved,
    Gilded,
}

impl UserDetail {
    pub const ALL: [UserDetail; 8] = [
        UserDetail::Overview,
        UserDetail::Submitted,
        UserDetail::Comments,
        UserDetail::Upvoted,
        UserDetail::Downvoted,
        UserDetail::Hidden,
        UserDetail::Saved,
        UserDetail::Gilded,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            UserDetail::Overview => "overview",
            UserDetail::Submitted => "submitted",
            UserDetail::Comments => "comments",
            UserDetail::Upvoted => "upvoted",
            UserDetail::Downvoted => "downvoted",
            UserDetail::Hidden => "hidden",
            UserDetail::Saved => "saved",
            UserDetail::Gilded => "gilded",
        }
    }
}

impl fmt::Display for UserDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserDetail {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserDetail::ALL
            .into_iter()
            .find(|detail| detail.as_str() == s)
            .ok_or_else(|| format!("unknown user detail: {s}"))
    }
}

/// Paging and sorting shared by the list queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOptions {
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_sort: Option<String>,
    /// Cursor of the page to fetch (a listing's `after`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetGroupOptions {
    pub subreddit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPostOptions {
    pub subreddit: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserOptions {
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPostsOptions {
    pub subreddit: String,
    #[serde(flatten)]
    pub page: PageOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserDetailsOptions {
    pub username: String,
    #[serde(flatten)]
    pub page: PageOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_detail: Option<UserDetail>,
}

/// Addresses a comment thread: the whole post, or one comment's subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentIds {
    pub post_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetNestedCommentsOptions {
    pub subreddit: String,
    pub ids: CommentIds,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetGroupsQuery {
    pub query: String,
    pub limit: u32,
}
