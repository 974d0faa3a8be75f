use axum::{
    extract::{Query, State},
    Extension, Json,
};
use entity::{category, prelude::*};
use repository::{
    form::PostForm,
    query::{self, Selection},
};

use crate::{
    response::{ApiResponse, IntoApiResponse},
    util::response::options,
    ApiState,
};

use self::{
    request::{CreatePostReq, GetPostsParam},
    response::{CreatePostResp, GetPostsResp, PostResp},
};

pub mod request;
pub mod response;

const TRENDING_LIMIT: usize = 5;

/// Browse the community board
///
/// Pinned posts come first, then newest first.
#[utoipa::path(
    get,
    path = "/community",
    params(GetPostsParam),
    responses(
        (status = 200, description = "Matching posts and trending sidebar", body = GetPostsResp)
    )
)]
pub async fn get_posts(
    State(state): State<ApiState>,
    Query(param): Query<GetPostsParam>,
) -> Json<GetPostsResp> {
    let selection = Selection::new()
        .search(param.search.unwrap_or_default())
        .category(param.category.unwrap_or_default());

    let posts = state.repo.post.find(&selection).await;
    let total = posts.len();
    let posts =
        query::paginate(posts, param.pagination.offset, param.pagination.limit);
    let trending = state.repo.post.trending(TRENDING_LIMIT).await;

    Json(GetPostsResp {
        posts: posts.into_iter().map(PostResp::from).collect(),
        total,
        trending: trending.into_iter().map(PostResp::from).collect(),
        categories: options(category::POST)
            .into_iter()
            .filter(|c| c != category::POST_RESERVED)
            .collect(),
    })
}

/// Write a post
#[utoipa::path(
    post,
    path = "/community",
    request_body = CreatePostReq,
    responses(
        (status = 200, description = "Post created", body = CreatePostResp),
        (status = 400, description = "Missing field or unknown category")
    )
)]
pub async fn create_post(
    Extension(session): Extension<Session>,
    State(state): State<ApiState>,
    Json(req): Json<CreatePostReq>,
) -> ApiResponse<Json<CreatePostResp>> {
    let form = PostForm {
        title: req.title,
        content: req.content,
        category: req.category,
        tags: req.tags,
    };
    let post = state
        .repo
        .post
        .create(form, Author::from(&session))
        .await
        .into_response("400-004")?;

    Ok(Json(CreatePostResp {
        message: "게시글이 등록되었습니다.".to_string(),
        post: PostResp::from(post),
    }))
}
