use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::response::ApplicationResp;

#[derive(Serialize, ToSchema)]
pub struct OpportunityResp {
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
    pub remaining_slots: u32,
    pub category: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub fee: u64,
    pub application_deadline: String,
    pub status: String,
    pub status_label: String,
    pub created_at: String,
}

impl From<OpportunityEntity> for OpportunityResp {
    fn from(opportunity: OpportunityEntity) -> Self {
        Self {
            remaining_slots: opportunity.remaining_slots(),
            status: opportunity.status.to_string(),
            status_label: opportunity.status.label().to_string(),
            id: opportunity.id,
            organization_id: opportunity.organization_id,
            organization_name: opportunity.organization_name,
            title: opportunity.title,
            description: opportunity.description,
            location: opportunity.location,
            start_date: opportunity.start_date,
            end_date: opportunity.end_date,
            max_sellers: opportunity.max_sellers,
            current_sellers: opportunity.current_sellers,
            category: opportunity.category,
            requirements: opportunity.requirements,
            benefits: opportunity.benefits,
            fee: opportunity.fee,
            application_deadline: opportunity.application_deadline,
            created_at: opportunity.created_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetOpportunitiesResp {
    pub opportunities: Vec<OpportunityResp>,
    /// Matches before pagination.
    pub total: usize,
    pub categories: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ApplyResp {
    pub message: String,
    pub application: ApplicationResp,
}
