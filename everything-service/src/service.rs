use crate::error::{ServiceError, ServiceResult};
use crate::options::{
    GetGroupOptions, GetGroupsQuery, GetNestedCommentsOptions, GetPostOptions, GetPostsOptions,
    GetUserDetailsOptions, GetUserOptions,
};
use async_trait::async_trait;
use everything_model::{Envelope, Group, List, Post, Thing, User};

pub type GetGroupResult = ServiceResult<Envelope<Group>>;
pub type GetPostResult = ServiceResult<Envelope<Post>>;
pub type GetUserResult = ServiceResult<Envelope<User>>;
pub type GetPostsResult = ServiceResult<Envelope<List<Post>>>;
/// Posts and comments, mixed.
pub type GetUserDetailsResult = ServiceResult<Envelope<List<Thing>>>;
/// The post listing followed by its comment listing.
pub type GetNestedCommentsResult = ServiceResult<Vec<Envelope<List<Thing>>>>;
pub type GetGroupsQueryResult = ServiceResult<Envelope<List<Thing>>>;

/// A source of normalized platform content.
///
/// Every method defaults to [`ServiceError::unimplemented`], so a backend
/// overrides only the queries it can answer.
#[async_trait]
pub trait ContentService: Send + Sync {
    async fn get_group(&self, options: &GetGroupOptions) -> GetGroupResult {
        let _ = options;
        Err(ServiceError::unimplemented())
    }

    async fn get_post(&self, options: &GetPostOptions) -> GetPostResult {
        let _ = options;
        Err(ServiceError::unimplemented())
    }

    async fn get_user(&self, options: &GetUserOptions) -> GetUserResult {
        let _ = options;
        Err(ServiceError::unimplemented())
    }

    async fn get_posts(&self, options: &GetPostsOptions) -> GetPostsResult {
        let _ = options;
        Err(ServiceError::unimplemented())
    }

    async fn get_user_details(&self, options: &GetUserDetailsOptions) -> GetUserDetailsResult {
        let _ = options;
        Err(ServiceError::unimplemented())
    }

    async fn get_nested_comments(
        &self,
        options: &GetNestedCommentsOptions,
    ) -> GetNestedCommentsResult {
        let _ = options;
        Err(ServiceError::unimplemented())
    }

    async fn get_groups_query(&self, options: &GetGroupsQuery) -> GetGroupsQueryResult {
        let _ = options;
        Err(ServiceError::unimplemented())
    }
}
