//! Service interface for Everything backends.
//!
//! A backend implements [`ContentService`] for the queries it supports;
//! every other query answers [`ServiceError::Unimplemented`].

mod error;
mod options;
mod service;

pub use error::{ServiceError, ServiceResult};
pub use options::{
    CommentIds, GetGroupOptions, GetGroupsQuery, GetNestedCommentsOptions, GetPostOptions,
    GetPostsOptions, GetUserDetailsOptions, GetUserOptions, PageOptions, UserDetail,
};
pub use service::{
    ContentService, GetGroupResult, GetGroupsQueryResult, GetNestedCommentsResult, GetPostResult,
    GetPostsResult, GetUserDetailsResult, GetUserResult,
};
