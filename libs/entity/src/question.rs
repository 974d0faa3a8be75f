use serde::{Deserialize, Serialize};

use crate::user::Author;

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: Author,
    pub created_at: String,
    pub status: QuestionStatus,
    pub like_count: u32,
    pub answer_count: u32,
    pub view_count: u32,
    pub tags: Vec<String>,
}

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum QuestionStatus {
    #[default]
    Open,
    Answered,
    Closed,
}

impl QuestionStatus {
    pub fn label(self) -> &'static str {
        match self {
            QuestionStatus::Open => "답변 대기",
            QuestionStatus::Answered => "답변 완료",
            QuestionStatus::Closed => "해결됨",
        }
    }
}
