use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    application::response::ApplicationResp, user::response::UserResp,
    util::response::StatsResp,
};

#[derive(Serialize, ToSchema)]
pub struct ListingResp {
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
    pub status: String,
    pub status_label: String,
    pub applicants: u32,
    pub max_applicants: u32,
    pub rating: f64,
    pub tags: Vec<String>,
}

impl From<ListingEntity> for ListingResp {
    fn from(listing: ListingEntity) -> Self {
        Self {
            status: listing.status.to_string(),
            status_label: listing.status.label().to_string(),
            id: listing.id,
            title: listing.title,
            organization: listing.organization,
            location: listing.location,
            period: listing.period,
            deadline: listing.deadline,
            category: listing.category,
            description: listing.description,
            requirements: listing.requirements,
            benefits: listing.benefits,
            applicants: listing.applicants,
            max_applicants: listing.max_applicants,
            rating: listing.rating,
            tags: listing.tags,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct SellerDashboardResp {
    pub user: UserResp,
    pub listings: Vec<ListingResp>,
    pub total: usize,
    pub recent_applications: Vec<ApplicationResp>,
    pub stats: StatsResp,
    pub locations: Vec<String>,
    pub categories: Vec<String>,
}
