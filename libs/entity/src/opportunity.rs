use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub organization_id: String,
    pub organization_name: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub max_sellers: u32,
    pub current_sellers: u32,
    pub category: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub fee: u64,
    pub application_deadline: String,
    pub status: OpportunityStatus,
    pub created_at: String,
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
pub enum OpportunityStatus {
    #[default]
    Active,
    Closed,
    Upcoming,
}

impl OpportunityStatus {
    pub fn label(self) -> &'static str {
        match self {
            OpportunityStatus::Active => "모집중",
            OpportunityStatus::Closed => "마감",
            OpportunityStatus::Upcoming => "예정",
        }
    }
}

impl Opportunity {
    pub fn remaining_slots(&self) -> u32 {
        self.max_sellers.saturating_sub(self.current_sellers)
    }
}
