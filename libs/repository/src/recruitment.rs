use chrono::{DateTime, Utc};
use entity::{category, prelude::*};
use tracing::info;

use crate::{
    catalog::Catalog,
    form::{self, FormKind, RecruitmentForm},
    query::{self, Facet, Record, Selection, StatusCount},
    RepositoryError, Response,
};

#[derive(Clone, Debug)]
pub struct RecruitmentRepository {
    catalog: Catalog<RecruitmentEntity>,
}

impl RecruitmentRepository {
    pub fn new(records: Vec<RecruitmentEntity>) -> Self {
        Self {
            catalog: Catalog::new(records),
        }
    }
}

impl Record for RecruitmentEntity {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Category => Some(self.category.as_str()),
            Facet::Status => Some(self.status.as_ref()),
            Facet::Location => Some(self.location.as_str()),
        }
    }
}

impl RecruitmentRepository {
    pub async fn find(&self, selection: &Selection) -> Vec<RecruitmentEntity> {
        query::filter(&self.catalog.snapshot().await, selection)
    }

    pub async fn stats(&self) -> StatusCount<RecruitmentStatus> {
        query::count_by_status(&self.catalog.snapshot().await, |r| r.status)
    }

    pub async fn len(&self) -> usize {
        self.catalog.len().await
    }

    pub async fn create(
        &self,
        form: RecruitmentForm,
    ) -> Response<RecruitmentEntity> {
        let recruitment = build(form, Utc::now())?;
        let len = self.catalog.prepend(recruitment.clone()).await;

        info!(task = "create recruitment", id = %recruitment.id, len);

        Ok(recruitment)
    }
}

fn build(
    form: RecruitmentForm,
    now: DateTime<Utc>,
) -> Response<RecruitmentEntity> {
    form::require(
        FormKind::Recruitment,
        &[
            ("title", form.title.as_str()),
            ("description", form.description.as_str()),
            ("category", form.category.as_str()),
        ],
    )?;
    form::require_category(category::BUSINESS, &form.category)?;

    let max_applicants = match form.max_applicants.trim() {
        "" => 0,
        raw => raw.parse::<u32>().map_err(|_| {
            RepositoryError::InvalidNumber {
                field: "max_applicants",
            }
        })?,
    };

    Ok(RecruitmentEntity {
        id: form::timestamp_id(now),
        title: form.title.trim().to_string(),
        location: form.location.trim().to_string(),
        period: form.period.trim().to_string(),
        deadline: form.deadline.trim().to_string(),
        category: form.category.trim().to_string(),
        description: form.description.trim().to_string(),
        requirements: form::parse_lines(&form.requirements),
        benefits: form::parse_lines(&form.benefits),
        status: RecruitmentStatus::Active,
        applicants: 0,
        max_applicants,
        created_date: form::date_label(now),
        view_count: 0,
    })
}
