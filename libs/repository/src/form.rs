//! Validation and field parsing shared by the create actions.

use chrono::{DateTime, Utc};

use crate::{RepositoryError, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Post,
    Question,
    Recruitment,
    Application,
}

impl FormKind {
    pub fn missing_message(self) -> &'static str {
        match self {
            FormKind::Post | FormKind::Question => {
                "제목, 내용, 카테고리를 모두 입력해주세요."
            }
            FormKind::Recruitment => "필수 항목을 모두 입력해주세요.",
            FormKind::Application => "제안서를 입력해주세요.",
        }
    }
}

/// Title, content and category are required; tags are a comma-separated list.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecruitmentForm {
    pub title: String,
    pub location: String,
    pub period: String,
    pub deadline: String,
    pub category: String,
    pub description: String,
    pub requirements: String,
    pub benefits: String,
    pub max_applicants: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ApplicationForm {
    pub proposal: String,
    pub portfolio: String,
    pub experience: String,
}

/// Fails on the first field that is empty or whitespace only.
pub fn require(kind: FormKind, fields: &[(&'static str, &str)]) -> Response<()> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(RepositoryError::MissingField { kind, field }),
        None => Ok(()),
    }
}

pub fn require_category(categories: &[&str], category: &str) -> Response<()> {
    if entity::category::contains(categories, category.trim()) {
        Ok(())
    } else {
        Err(RepositoryError::UnknownCategory(category.trim().to_string()))
    }
}

/// `"마케팅, 홍대,  성공후기 "` becomes `["마케팅", "홍대", "성공후기"]`.
pub fn parse_tags(raw: &str) -> Vec<String> {
    split_trimmed(raw, ',')
}

/// One entry per non-blank line.
pub fn parse_lines(raw: &str) -> Vec<String> {
    split_trimmed(raw, '\n')
}

fn split_trimmed(raw: &str, separator: char) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in raw.split(separator).map(str::trim) {
        if !item.is_empty() && !items.iter().any(|i| i == item) {
            items.push(item.to_string());
        }
    }
    items
}

/// Milliseconds since the epoch. Unique only within one process.
pub fn timestamp_id(now: DateTime<Utc>) -> String {
    now.timestamp_millis().to_string()
}

pub fn date_label(now: DateTime<Utc>) -> String {
    now.format("%Y.%m.%d").to_string()
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags("마케팅, 홍대,  성공후기 "),
            vec!["마케팅", "홍대", "성공후기"]
        );
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
        assert_eq!(parse_tags("SNS,SNS, 홍보"), vec!["SNS", "홍보"]);
    }

    #[test]
    fn test_parse_lines() {
        assert_eq!(
            parse_lines("사업자등록증\n\n  포트폴리오 \n"),
            vec!["사업자등록증", "포트폴리오"]
        );
    }

    #[test]
    fn test_require_reports_first_blank_field() {
        let result = require(
            FormKind::Question,
            &[("title", "질문"), ("content", "  "), ("category", "")],
        );

        assert_eq!(
            result,
            Err(RepositoryError::MissingField {
                kind: FormKind::Question,
                field: "content"
            })
        );
    }

    #[test]
    fn test_require_category() {
        assert!(require_category(entity::category::POST, "마케팅").is_ok());
        assert_eq!(
            require_category(entity::category::POST, "잡담"),
            Err(RepositoryError::UnknownCategory("잡담".to_string()))
        );
    }

    #[test]
    fn test_timestamp_id_and_date_label() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();

        assert_eq!(timestamp_id(now), "1709640000000");
        assert_eq!(date_label(now), "2024.03.05");
    }
}
