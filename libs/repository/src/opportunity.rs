use entity::prelude::*;

use crate::{
    catalog::Catalog,
    query::{self, Facet, Record, Selection},
};

#[derive(Clone, Debug)]
pub struct OpportunityRepository {
    catalog: Catalog<OpportunityEntity>,
}

impl OpportunityRepository {
    pub fn new(records: Vec<OpportunityEntity>) -> Self {
        Self {
            catalog: Catalog::new(records),
        }
    }
}

impl Record for OpportunityEntity {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.organization_name.as_str()]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Category => Some(self.category.as_str()),
            Facet::Status => Some(self.status.as_ref()),
            Facet::Location => Some(self.location.as_str()),
        }
    }
}

impl OpportunityRepository {
    pub async fn find(&self, selection: &Selection) -> Vec<OpportunityEntity> {
        query::filter(&self.catalog.snapshot().await, selection)
    }

    pub async fn find_by_id(&self, id: &str) -> Option<OpportunityEntity> {
        self.catalog.find(|opportunity| opportunity.id == id).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures;

    fn repository() -> OpportunityRepository {
        OpportunityRepository::new(fixtures::opportunities())
    }

    fn ids(records: &[OpportunityEntity]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_find_matches_organization_name() {
        // Act
        let found = repository().find(&Selection::new().search("강남")).await;

        // Assert
        assert_eq!(ids(&found), vec!["1"]);
    }

    #[tokio::test]
    async fn test_find_by_category_and_status() {
        let repo = repository();

        let beauty = repo
            .find(&Selection::new().category("뷰티").status("active"))
            .await;
        let closed = repo.find(&Selection::new().status("closed")).await;

        assert_eq!(ids(&beauty), vec!["3"]);
        assert!(closed.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = repository();

        assert_eq!(
            repo.find_by_id("2").await.map(|o| o.organization_name),
            Some("현대백화점 판교점".to_string())
        );
        assert_eq!(repo.find_by_id("99").await, None);
    }
}
