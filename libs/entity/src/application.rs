use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub opportunity_title: String,
    pub organization: String,
    pub location: String,
    pub applied_date: String,
    pub status: ApplicationStatus,
    pub last_update: String,
    pub category: String,
    pub period: String,
    pub notes: Option<String>,
    pub rating: Option<f64>,
    pub feedback: Option<String>,
}

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
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
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Interview,
    Completed,
}

impl ApplicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "검토중",
            ApplicationStatus::Approved => "승인됨",
            ApplicationStatus::Rejected => "거절됨",
            ApplicationStatus::Interview => "면접 대기",
            ApplicationStatus::Completed => "완료됨",
        }
    }
}
