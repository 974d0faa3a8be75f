use chrono::{DateTime, Utc};
use entity::{category, prelude::*};
use tracing::info;

use crate::{
    catalog::Catalog,
    form::{self, FormKind, PostForm},
    query::{self, Facet, Ranked, Record, Selection},
    Response,
};

#[derive(Clone, Debug)]
pub struct QuestionRepository {
    catalog: Catalog<QuestionEntity>,
}

impl QuestionRepository {
    pub fn new(records: Vec<QuestionEntity>) -> Self {
        Self {
            catalog: Catalog::new(records),
        }
    }
}

impl Record for QuestionEntity {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str()]
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Category => Some(self.category.as_str()),
            Facet::Status => Some(self.status.as_ref()),
            Facet::Location => None,
        }
    }
}

impl Ranked for QuestionEntity {
    fn popularity(&self) -> f64 {
        query::popularity_score(self.like_count, self.answer_count, self.view_count)
    }
}

impl QuestionRepository {
    pub async fn find(&self, selection: &Selection) -> Vec<QuestionEntity> {
        query::filter(&self.catalog.snapshot().await, selection)
    }

    pub async fn popular(&self, limit: usize) -> Vec<QuestionEntity> {
        query::top_by_popularity(&self.catalog.snapshot().await, limit)
    }

    pub async fn len(&self) -> usize {
        self.catalog.len().await
    }

    pub async fn create(
        &self,
        form: PostForm,
        author: Author,
    ) -> Response<QuestionEntity> {
        let question = build(form, author, Utc::now())?;
        let len = self.catalog.prepend(question.clone()).await;

        info!(task = "create question", id = %question.id, len);

        Ok(question)
    }
}

fn build(
    form: PostForm,
    author: Author,
    now: DateTime<Utc>,
) -> Response<QuestionEntity> {
    form::require(
        FormKind::Question,
        &[
            ("title", form.title.as_str()),
            ("content", form.content.as_str()),
            ("category", form.category.as_str()),
        ],
    )?;
    form::require_category(category::QUESTION, &form.category)?;

    Ok(QuestionEntity {
        id: form::timestamp_id(now),
        title: form.title.trim().to_string(),
        content: form.content.trim().to_string(),
        category: form.category.trim().to_string(),
        author,
        created_at: form::date_label(now),
        status: QuestionStatus::Open,
        like_count: 0,
        answer_count: 0,
        view_count: 0,
        tags: form::parse_tags(&form.tags),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{fixtures, RepositoryError};

    fn repository() -> QuestionRepository {
        QuestionRepository::new(fixtures::questions())
    }

    fn form() -> PostForm {
        PostForm {
            title: "부스 전기 사용 문의".to_string(),
            content: "전력 용량은 어느 정도인가요?".to_string(),
            category: "기술적 문제".to_string(),
            tags: "전기, 부스".to_string(),
        }
    }

    #[tokio::test]
    async fn test_popular_ranks_by_score() {
        // Act
        let popular = repository().popular(5).await;

        // Assert
        let ids: Vec<_> = popular.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "3", "2", "1", "4"]);
    }

    #[tokio::test]
    async fn test_find_by_status() {
        let found = repository().find(&Selection::new().status("open")).await;

        let ids: Vec<_> = found.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[tokio::test]
    async fn test_create_prepends_open_question() {
        let repo = repository();

        let question = repo.create(form(), Author::anonymous()).await.unwrap();

        assert_eq!(repo.len().await, 6);
        assert_eq!(question.status, QuestionStatus::Open);
        assert_eq!(question.tags, vec!["전기", "부스"]);
        assert_eq!(question.like_count + question.answer_count, 0);
        assert_eq!(repo.find(&Selection::new()).await[0], question);
    }

    #[tokio::test]
    async fn test_create_with_empty_content_is_rejected() {
        let repo = repository();
        let mut form = form();
        form.content = String::new();

        let result = repo.create(form, Author::anonymous()).await;

        assert_eq!(
            result,
            Err(RepositoryError::MissingField {
                kind: FormKind::Question,
                field: "content"
            })
        );
        assert_eq!(repo.len().await, 5);
    }
}
