use entity::prelude::*;

use crate::{
    catalog::Catalog,
    query::{self, Facet, Record, Selection, StatusCount},
};

#[derive(Clone, Debug)]
pub struct ApplicantRepository {
    catalog: Catalog<ApplicantEntity>,
}

impl ApplicantRepository {
    pub fn new(records: Vec<ApplicantEntity>) -> Self {
        Self {
            catalog: Catalog::new(records),
        }
    }
}

impl Record for ApplicantEntity {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.recruitment_title.as_str()]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Category => Some(self.category.as_str()),
            Facet::Status => Some(self.status.as_ref()),
            Facet::Location => None,
        }
    }
}

impl ApplicantRepository {
    pub async fn find(&self, selection: &Selection) -> Vec<ApplicantEntity> {
        query::filter(&self.catalog.snapshot().await, selection)
    }

    pub async fn stats(&self) -> StatusCount<ApplicantStatus> {
        query::count_by_status(&self.catalog.snapshot().await, |a| a.status)
    }
}
