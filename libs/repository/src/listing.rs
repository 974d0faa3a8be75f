use entity::prelude::*;

use crate::{
    catalog::Catalog,
    query::{self, Facet, Record, Selection},
};

#[derive(Clone, Debug)]
pub struct ListingRepository {
    catalog: Catalog<ListingEntity>,
}

impl ListingRepository {
    pub fn new(records: Vec<ListingEntity>) -> Self {
        Self {
            catalog: Catalog::new(records),
        }
    }
}

impl Record for ListingEntity {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.organization.as_str()]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Category => Some(self.category.as_str()),
            Facet::Status => Some(self.status.as_ref()),
            Facet::Location => Some(self.location.as_str()),
        }
    }
}

impl ListingRepository {
    pub async fn find(&self, selection: &Selection) -> Vec<ListingEntity> {
        query::filter(&self.catalog.snapshot().await, selection)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures;

    #[tokio::test]
    async fn test_find_combines_every_selector() {
        // Arrange
        let repo = ListingRepository::new(fixtures::listings());
        let selection = Selection::new()
            .location("강남")
            .category("뷰티/화장품")
            .status("open");

        // Act
        let found = repo.find(&selection).await;

        // Assert
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].organization, "강남구청");
    }

    #[tokio::test]
    async fn test_find_upcoming() {
        let repo = ListingRepository::new(fixtures::listings());

        let found = repo.find(&Selection::new().status("upcoming")).await;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");
    }
}
