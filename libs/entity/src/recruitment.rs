use serde::{Deserialize, Serialize};

/// A recruitment as the owning organization manages it.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Recruitment {
    pub id: String,
    pub title: String,
    pub location: String,
    pub period: String,
    pub deadline: String,
    pub category: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub status: RecruitmentStatus,
    pub applicants: u32,
    pub max_applicants: u32,
    pub created_date: String,
    pub view_count: u32,
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
pub enum RecruitmentStatus {
    #[default]
    Active,
    Closed,
    Draft,
}

impl RecruitmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            RecruitmentStatus::Active => "모집중",
            RecruitmentStatus::Closed => "마감",
            RecruitmentStatus::Draft => "임시저장",
        }
    }
}
