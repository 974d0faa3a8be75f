use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Applicant {
    pub id: String,
    pub name: String,
    pub category: String,
    pub applied_date: String,
    pub status: ApplicantStatus,
    pub rating: f64,
    pub description: String,
    pub experience: String,
    pub recruitment_title: String,
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
pub enum ApplicantStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Interview,
}

impl ApplicantStatus {
    pub fn label(self) -> &'static str {
        match self {
            ApplicantStatus::Pending => "검토중",
            ApplicantStatus::Approved => "승인됨",
            ApplicantStatus::Rejected => "거절됨",
            ApplicantStatus::Interview => "면접 대기",
        }
    }
}
