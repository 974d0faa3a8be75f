use serde::{Deserialize, Serialize};

/// A recruitment as a seller browses it from the dashboard.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub period: String,
    pub deadline: String,
    pub category: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub status: ListingStatus,
    pub applicants: u32,
    pub max_applicants: u32,
    pub rating: f64,
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
pub enum ListingStatus {
    #[default]
    Open,
    Closed,
    Upcoming,
}

impl ListingStatus {
    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::Open => "모집중",
            ListingStatus::Closed => "마감",
            ListingStatus::Upcoming => "예정",
        }
    }
}
