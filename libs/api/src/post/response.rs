use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::util::response::AuthorResp;

#[derive(Serialize, ToSchema)]
pub struct PostResp {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: AuthorResp,
    pub created_at: String,
    pub like_count: u32,
    pub comment_count: u32,
    pub view_count: u32,
    pub pinned: bool,
    pub tags: Vec<String>,
}

impl From<PostEntity> for PostResp {
    fn from(post: PostEntity) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            category: post.category,
            author: AuthorResp::from(post.author),
            created_at: post.created_at,
            like_count: post.like_count,
            comment_count: post.comment_count,
            view_count: post.view_count,
            pinned: post.pinned,
            tags: post.tags,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetPostsResp {
    pub posts: Vec<PostResp>,
    pub total: usize,
    pub trending: Vec<PostResp>,
    /// Categories a new post may use. Notices are left out.
    pub categories: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CreatePostResp {
    pub message: String,
    pub post: PostResp,
}
