use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{user::response::UserResp, util::response::StatsResp};

#[derive(Serialize, ToSchema)]
pub struct RecruitmentResp {
    pub id: String,
    pub title: String,
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
    pub created_date: String,
    pub view_count: u32,
}

impl From<RecruitmentEntity> for RecruitmentResp {
    fn from(recruitment: RecruitmentEntity) -> Self {
        Self {
            status: recruitment.status.to_string(),
            status_label: recruitment.status.label().to_string(),
            id: recruitment.id,
            title: recruitment.title,
            location: recruitment.location,
            period: recruitment.period,
            deadline: recruitment.deadline,
            category: recruitment.category,
            description: recruitment.description,
            requirements: recruitment.requirements,
            benefits: recruitment.benefits,
            applicants: recruitment.applicants,
            max_applicants: recruitment.max_applicants,
            created_date: recruitment.created_date,
            view_count: recruitment.view_count,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ApplicantResp {
    pub id: String,
    pub name: String,
    pub category: String,
    pub applied_date: String,
    pub status: String,
    pub status_label: String,
    pub rating: f64,
    pub description: String,
    pub experience: String,
    pub recruitment_title: String,
}

impl From<ApplicantEntity> for ApplicantResp {
    fn from(applicant: ApplicantEntity) -> Self {
        Self {
            status: applicant.status.to_string(),
            status_label: applicant.status.label().to_string(),
            id: applicant.id,
            name: applicant.name,
            category: applicant.category,
            applied_date: applicant.applied_date,
            rating: applicant.rating,
            description: applicant.description,
            experience: applicant.experience,
            recruitment_title: applicant.recruitment_title,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct OrganizationDashboardResp {
    pub user: UserResp,
    pub recruitments: Vec<RecruitmentResp>,
    pub applicants: Vec<ApplicantResp>,
    pub recruitment_stats: StatsResp,
    pub applicant_stats: StatsResp,
    pub categories: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CreateRecruitmentResp {
    pub message: String,
    pub recruitment: RecruitmentResp,
}
