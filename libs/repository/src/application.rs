use chrono::{DateTime, Utc};
use entity::prelude::*;
use tracing::info;

use crate::{
    catalog::Catalog,
    form::{self, ApplicationForm, FormKind},
    query::{self, Facet, Record, Selection, StatusCount},
    RepositoryError, Response,
};

#[derive(Clone, Debug)]
pub struct ApplicationRepository {
    catalog: Catalog<ApplicationEntity>,
}

impl ApplicationRepository {
    pub fn new(records: Vec<ApplicationEntity>) -> Self {
        Self {
            catalog: Catalog::new(records),
        }
    }
}

impl Record for ApplicationEntity {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.opportunity_title.as_str(), self.organization.as_str()]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Category => Some(self.category.as_str()),
            Facet::Status => Some(self.status.as_ref()),
            Facet::Location => Some(self.location.as_str()),
        }
    }
}

impl ApplicationRepository {
    pub async fn find(&self, selection: &Selection) -> Vec<ApplicationEntity> {
        query::filter(&self.catalog.snapshot().await, selection)
    }

    /// Counts over the whole catalog, independent of the current selection.
    pub async fn stats(&self) -> StatusCount<ApplicationStatus> {
        query::count_by_status(&self.catalog.snapshot().await, |a| a.status)
    }

    pub async fn recent(&self, limit: usize) -> Vec<ApplicationEntity> {
        query::paginate(self.catalog.snapshot().await, None, Some(limit))
    }

    pub async fn len(&self) -> usize {
        self.catalog.len().await
    }

    /// Files a pending application for `opportunity` at the head of the catalog.
    ///
    /// Only active opportunities with a free slot take applications.
    pub async fn apply(
        &self,
        opportunity: &OpportunityEntity,
        form: ApplicationForm,
    ) -> Response<ApplicationEntity> {
        let application = build(opportunity, &form, Utc::now())?;

        info!(
            task = "apply",
            opportunity_id = %opportunity.id,
            has_portfolio = !form.portfolio.trim().is_empty(),
            has_experience = !form.experience.trim().is_empty(),
        );

        self.catalog.prepend(application.clone()).await;
        Ok(application)
    }
}

fn build(
    opportunity: &OpportunityEntity,
    form: &ApplicationForm,
    now: DateTime<Utc>,
) -> Response<ApplicationEntity> {
    if opportunity.status != OpportunityStatus::Active {
        return Err(RepositoryError::NotRecruiting(opportunity.status));
    }
    if opportunity.remaining_slots() == 0 {
        return Err(RepositoryError::OpportunityFull);
    }
    form::require(FormKind::Application, &[("proposal", form.proposal.as_str())])?;

    let today = form::date_label(now);
    Ok(ApplicationEntity {
        id: form::timestamp_id(now),
        opportunity_title: opportunity.title.clone(),
        organization: opportunity.organization_name.clone(),
        location: opportunity.location.clone(),
        applied_date: today.clone(),
        status: ApplicationStatus::Pending,
        last_update: today,
        category: opportunity.category.clone(),
        period: format!("{} - {}", opportunity.start_date, opportunity.end_date),
        notes: None,
        rating: None,
        feedback: None,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures;

    fn repository() -> ApplicationRepository {
        ApplicationRepository::new(fixtures::applications())
    }

    #[tokio::test]
    async fn test_find_by_status_and_category() {
        // Arrange
        let repo = repository();
        let selection = Selection::new().status("approved").category("패션/의류");

        // Act
        let found = repo.find(&selection).await;

        // Assert
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].organization, "홍대문화재단");
    }

    #[tokio::test]
    async fn test_stats_cover_every_status() {
        let stats = repository().stats().await;

        assert_eq!(stats.total, 5);
        assert_eq!(stats.by_status.len(), 5);
        assert_eq!(stats.get(ApplicationStatus::Pending), 1);
        assert_eq!(stats.get(ApplicationStatus::Completed), 1);
        assert_eq!(
            stats.by_status.iter().map(|(_, n)| n).sum::<usize>(),
            stats.total
        );
    }

    #[tokio::test]
    async fn test_apply_prepends_pending_application() {
        let repo = repository();
        let opportunity = fixtures::opportunities().remove(0);
        let form = ApplicationForm {
            proposal: "브랜드 소개".to_string(),
            ..Default::default()
        };

        let application = repo.apply(&opportunity, form).await.unwrap();

        assert_eq!(repo.len().await, 6);
        assert_eq!(application.status, ApplicationStatus::Pending);
        assert_eq!(application.period, "2024-03-15 - 2024-03-25");
        assert_eq!(repo.recent(1).await, vec![application]);
    }

    #[tokio::test]
    async fn test_apply_requires_an_open_slot_on_an_active_opportunity() {
        // Arrange
        let repo = repository();
        let form = ApplicationForm {
            proposal: "브랜드 소개".to_string(),
            ..Default::default()
        };
        let mut upcoming = fixtures::opportunities().remove(0);
        upcoming.status = OpportunityStatus::Upcoming;
        let mut full = fixtures::opportunities().remove(1);
        full.current_sellers = full.max_sellers;

        // Act
        let not_recruiting = repo.apply(&upcoming, form.clone()).await;
        let no_slot = repo.apply(&full, form).await;

        // Assert
        assert_eq!(
            not_recruiting,
            Err(RepositoryError::NotRecruiting(OpportunityStatus::Upcoming))
        );
        assert_eq!(no_slot, Err(RepositoryError::OpportunityFull));
        assert_eq!(repo.len().await, 5);
    }

    #[tokio::test]
    async fn test_apply_without_proposal_is_rejected() {
        let repo = repository();
        let opportunity = fixtures::opportunities().remove(0);

        let result = repo.apply(&opportunity, ApplicationForm::default()).await;

        assert_eq!(
            result,
            Err(RepositoryError::MissingField {
                kind: FormKind::Application,
                field: "proposal"
            })
        );
        assert_eq!(repo.len().await, 5);
    }
}
