use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::util::response::AuthorResp;

#[derive(Serialize, ToSchema)]
pub struct QuestionResp {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: AuthorResp,
    pub created_at: String,
    pub status: String,
    pub status_label: String,
    pub like_count: u32,
    pub answer_count: u32,
    pub view_count: u32,
    pub tags: Vec<String>,
}

impl From<QuestionEntity> for QuestionResp {
    fn from(question: QuestionEntity) -> Self {
        Self {
            status: question.status.to_string(),
            status_label: question.status.label().to_string(),
            id: question.id,
            title: question.title,
            content: question.content,
            category: question.category,
            author: AuthorResp::from(question.author),
            created_at: question.created_at,
            like_count: question.like_count,
            answer_count: question.answer_count,
            view_count: question.view_count,
            tags: question.tags,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetQuestionsResp {
    pub questions: Vec<QuestionResp>,
    pub total: usize,
    /// Top five by likes, answers and views.
    pub popular: Vec<QuestionResp>,
    pub categories: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CreateQuestionResp {
    pub message: String,
    pub question: QuestionResp,
}
