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
    request::{CreateQuestionReq, GetQuestionsParam},
    response::{CreateQuestionResp, GetQuestionsResp, QuestionResp},
};

pub mod request;
pub mod response;

const POPULAR_LIMIT: usize = 5;

/// Browse questions
#[utoipa::path(
    get,
    path = "/qna",
    params(GetQuestionsParam),
    responses(
        (status = 200, description = "Matching questions and the popular sidebar", body = GetQuestionsResp)
    )
)]
pub async fn get_questions(
    State(state): State<ApiState>,
    Query(param): Query<GetQuestionsParam>,
) -> Json<GetQuestionsResp> {
    let selection = Selection::new()
        .search(param.search.unwrap_or_default())
        .category(param.category.unwrap_or_default())
        .status(param.status.unwrap_or_default());

    let questions = state.repo.question.find(&selection).await;
    let total = questions.len();
    let questions = query::paginate(
        questions,
        param.pagination.offset,
        param.pagination.limit,
    );
    let popular = state.repo.question.popular(POPULAR_LIMIT).await;

    Json(GetQuestionsResp {
        questions: questions.into_iter().map(QuestionResp::from).collect(),
        total,
        popular: popular.into_iter().map(QuestionResp::from).collect(),
        categories: options(category::QUESTION),
    })
}

/// Ask a question
#[utoipa::path(
    post,
    path = "/qna",
    request_body = CreateQuestionReq,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResp),
        (status = 400, description = "Missing field or unknown category")
    )
)]
pub async fn create_question(
    Extension(session): Extension<Session>,
    State(state): State<ApiState>,
    Json(req): Json<CreateQuestionReq>,
) -> ApiResponse<Json<CreateQuestionResp>> {
    let form = PostForm {
        title: req.title,
        content: req.content,
        category: req.category,
        tags: req.tags,
    };
    let question = state
        .repo
        .question
        .create(form, Author::from(&session))
        .await
        .into_response("400-003")?;

    Ok(Json(CreateQuestionResp {
        message: "질문이 등록되었습니다.".to_string(),
        question: QuestionResp::from(question),
    }))
}
