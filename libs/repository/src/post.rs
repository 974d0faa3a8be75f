use chrono::{DateTime, Utc};
use entity::{category, prelude::*};
use tracing::info;

use crate::{
    catalog::Catalog,
    form::{self, FormKind, PostForm},
    query::{self, Dated, Facet, Ranked, Record, Selection},
    RepositoryError, Response,
};

#[derive(Clone, Debug)]
pub struct PostRepository {
    catalog: Catalog<PostEntity>,
}

impl PostRepository {
    pub fn new(records: Vec<PostEntity>) -> Self {
        Self {
            catalog: Catalog::new(records),
        }
    }
}

impl Record for PostEntity {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str()]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Category => Some(self.category.as_str()),
            Facet::Status | Facet::Location => None,
        }
    }
}

impl Ranked for PostEntity {
    fn popularity(&self) -> f64 {
        query::popularity_score(self.like_count, self.comment_count, self.view_count)
    }
}

impl Dated for PostEntity {
    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn pinned(&self) -> bool {
        self.pinned
    }
}

impl PostRepository {
    /// Filtered posts, pinned first and newest first.
    pub async fn find(&self, selection: &Selection) -> Vec<PostEntity> {
        let posts = query::filter(&self.catalog.snapshot().await, selection);
        query::pinned_first(&posts)
    }

    /// Most popular posts that are not pinned.
    pub async fn trending(&self, limit: usize) -> Vec<PostEntity> {
        let posts: Vec<_> = self
            .catalog
            .snapshot()
            .await
            .into_iter()
            .filter(|post| !post.pinned)
            .collect();
        query::top_by_popularity(&posts, limit)
    }

    pub async fn len(&self) -> usize {
        self.catalog.len().await
    }

    pub async fn create(
        &self,
        form: PostForm,
        author: Author,
    ) -> Response<PostEntity> {
        let post = build(form, author, Utc::now())?;
        let len = self.catalog.prepend(post.clone()).await;

        info!(task = "create post", id = %post.id, len);

        Ok(post)
    }
}

fn build(
    form: PostForm,
    author: Author,
    now: DateTime<Utc>,
) -> Response<PostEntity> {
    form::require(
        FormKind::Post,
        &[
            ("title", form.title.as_str()),
            ("content", form.content.as_str()),
            ("category", form.category.as_str()),
        ],
    )?;
    form::require_category(category::POST, &form.category)?;
    if form.category.trim() == category::POST_RESERVED {
        return Err(RepositoryError::UnknownCategory(
            category::POST_RESERVED.to_string(),
        ));
    }

    Ok(PostEntity {
        id: form::timestamp_id(now),
        title: form.title.trim().to_string(),
        content: form.content.trim().to_string(),
        category: form.category.trim().to_string(),
        author,
        created_at: form::date_label(now),
        like_count: 0,
        comment_count: 0,
        view_count: 0,
        pinned: false,
        tags: form::parse_tags(&form.tags),
    })
}
