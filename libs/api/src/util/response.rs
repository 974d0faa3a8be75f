use entity::prelude::*;
use repository::query::StatusCount;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct AuthorResp {
    pub name: String,
    pub user_type: String,
}

impl From<Author> for AuthorResp {
    fn from(author: Author) -> Self {
        Self {
            name: author.name,
            user_type: author.user_type.to_string(),
        }
    }
}

pub fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[derive(Serialize, ToSchema)]
pub struct StatusCountResp {
    pub status: String,
    pub label: String,
    pub count: usize,
}

/// Dashboard tallies: a total plus one entry per status, zeros included.
#[derive(Serialize, ToSchema)]
pub struct StatsResp {
    pub total: usize,
    pub by_status: Vec<StatusCountResp>,
}

impl StatsResp {
    pub fn new<S>(stats: StatusCount<S>, label: fn(S) -> &'static str) -> Self
    where
        S: AsRef<str> + Copy,
    {
        Self {
            total: stats.total,
            by_status: stats
                .by_status
                .into_iter()
                .map(|(status, count)| StatusCountResp {
                    status: status.as_ref().to_string(),
                    label: label(status).to_string(),
                    count,
                })
                .collect(),
        }
    }
}
