use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::util::response::StatsResp;

#[derive(Serialize, ToSchema)]
pub struct ApplicationResp {
    pub id: String,
    pub opportunity_title: String,
    pub organization: String,
    pub location: String,
    pub applied_date: String,
    pub status: String,
    pub status_label: String,
    pub last_update: String,
    pub category: String,
    pub period: String,
    pub notes: Option<String>,
    pub rating: Option<f64>,
    pub feedback: Option<String>,
}

impl From<ApplicationEntity> for ApplicationResp {
    fn from(application: ApplicationEntity) -> Self {
        Self {
            status: application.status.to_string(),
            status_label: application.status.label().to_string(),
            id: application.id,
            opportunity_title: application.opportunity_title,
            organization: application.organization,
            location: application.location,
            applied_date: application.applied_date,
            last_update: application.last_update,
            category: application.category,
            period: application.period,
            notes: application.notes,
            rating: application.rating,
            feedback: application.feedback,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetApplicationsResp {
    pub applications: Vec<ApplicationResp>,
    pub total: usize,
    /// Over the whole catalog, not the filtered list.
    pub stats: StatsResp,
}
