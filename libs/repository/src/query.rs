//! Derived views over a catalog.
//!
//! Every function here is pure: it reads a slice of records and returns a new
//! `Vec`, leaving the input untouched. Filtering is stable, and both sorts use
//! `sort_by`, which is stable, so records with equal keys keep their catalog
//! order.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate};
use strum::IntoEnumIterator;

/// Selector value meaning "no constraint".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Category,
    Status,
    Location,
}

impl Facet {
    fn accepts(self, value: &str, wanted: &str) -> bool {
        match self {
            Facet::Category | Facet::Status => value == wanted,
            // "강남" picks both "강남역 지하상가" and "서울 강남구 영동대로"
            Facet::Location => value.contains(wanted),
        }
    }
}

pub trait Record: Clone {
    /// Fields the search box looks into. A record matches when any of them does.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a selectable facet, or `None` when this kind has no such field.
    fn facet(&self, facet: Facet) -> Option<&str>;
}

pub trait Ranked: Record {
    fn popularity(&self) -> f64;
}

pub trait Dated: Record {
    fn created_at(&self) -> &str;

    fn pinned(&self) -> bool {
        false
    }
}

/// Current UI selections for one view.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Selection {
    pub search: String,
    pub category: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    fn selector(&self, facet: Facet) -> Option<&str> {
        let value = match facet {
            Facet::Category => self.category.as_deref(),
            Facet::Status => self.status.as_deref(),
            Facet::Location => self.location.as_deref(),
        };
        value.filter(|v| !v.is_empty() && *v != ALL)
    }

    pub fn matches<T: Record>(&self, record: &T) -> bool {
        self.matches_search(record)
            && [Facet::Category, Facet::Status, Facet::Location]
                .into_iter()
                .all(|facet| self.matches_facet(record, facet))
    }

    fn matches_search<T: Record>(&self, record: &T) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record
            .search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_facet<T: Record>(&self, record: &T, facet: Facet) -> bool {
        let Some(wanted) = self.selector(facet) else {
            return true;
        };
        record
            .facet(facet)
            .is_some_and(|value| facet.accepts(value, wanted))
    }
}

pub fn filter<T: Record>(records: &[T], selection: &Selection) -> Vec<T> {
    records
        .iter()
        .filter(|record| selection.matches(*record))
        .cloned()
        .collect()
}

/// Pinned records first, then newest first. Unreadable dates go last.
pub fn pinned_first<T: Dated>(records: &[T]) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        b.pinned().cmp(&a.pinned()).then_with(|| {
            parse_date(b.created_at()).cmp(&parse_date(a.created_at()))
        })
    });
    sorted
}

pub fn rank_by_popularity<T: Ranked>(records: &[T]) -> Vec<T> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| compare_popularity(b, a));
    ranked
}

pub fn top_by_popularity<T: Ranked>(records: &[T], limit: usize) -> Vec<T> {
    let mut ranked = rank_by_popularity(records);
    ranked.truncate(limit);
    ranked
}

fn compare_popularity<T: Ranked>(a: &T, b: &T) -> Ordering {
    a.popularity().total_cmp(&b.popularity())
}

/// `likes + engagement + views / 10`, where engagement is comments or answers.
pub fn popularity_score(likes: u32, engagement: u32, views: u32) -> f64 {
    f64::from(likes) + f64::from(engagement) + f64::from(views) / 10.0
}

/// Accepts `YYYY.MM.DD`, `YYYY-MM-DD` and RFC 3339 timestamps.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y.%m.%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusCount<S> {
    pub total: usize,
    pub by_status: Vec<(S, usize)>,
}

impl<S: PartialEq + Copy> StatusCount<S> {
    pub fn get(&self, status: S) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, count)| *count)
            .unwrap_or_default()
    }
}

/// Counts records per status. Every variant is listed, zero or not.
pub fn count_by_status<T, S, F>(records: &[T], status_of: F) -> StatusCount<S>
where
    S: IntoEnumIterator + PartialEq + Copy,
    F: Fn(&T) -> S,
{
    let by_status = S::iter()
        .map(|status| {
            let count = records.iter().filter(|r| status_of(*r) == status).count();
            (status, count)
        })
        .collect();

    StatusCount {
        total: records.len(),
        by_status,
    }
}

pub fn paginate<T>(
    records: Vec<T>,
    offset: Option<usize>,
    limit: Option<usize>,
) -> Vec<T> {
    let offset = offset.unwrap_or_default();
    match limit {
        Some(limit) => records.into_iter().skip(offset).take(limit).collect(),
        None => records.into_iter().skip(offset).collect(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        owner: &'static str,
        category: &'static str,
        date: &'static str,
        pinned: bool,
        likes: u32,
        views: u32,
    }

    impl Record for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.owner]
        }

        fn facet(&self, facet: Facet) -> Option<&str> {
            match facet {
                Facet::Category => Some(self.category),
                Facet::Location => Some(self.owner),
                Facet::Status => None,
            }
        }
    }

    impl Ranked for Item {
        fn popularity(&self) -> f64 {
            popularity_score(self.likes, 0, self.views)
        }
    }

    impl Dated for Item {
        fn created_at(&self) -> &str {
            self.date
        }

        fn pinned(&self) -> bool {
            self.pinned
        }
    }

    fn item(name: &'static str, category: &'static str) -> Item {
        Item {
            name,
            owner: "",
            category,
            date: "2024.01.01",
            pinned: false,
            likes: 0,
            views: 0,
        }
    }

    fn names(items: &[Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.name).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        // Arrange
        let mut owned = item("Pop Store", "a");
        owned.owner = "Gangnam Mall";
        let items = vec![item("Beauty Zone", "a"), owned, item("gangnam night", "b")];

        // Act
        let found = filter(&items, &Selection::new().search("GANGNAM"));

        // Assert
        assert_eq!(names(&found), vec!["Pop Store", "gangnam night"]);
    }

    #[test]
    fn test_all_and_empty_selectors_are_neutral() {
        let items = vec![item("a", "x"), item("b", "y")];

        assert_eq!(filter(&items, &Selection::new().category(ALL)), items);
        assert_eq!(filter(&items, &Selection::new().category("")), items);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let items = vec![item("a", "x")];

        assert!(filter(&items, &Selection::new().category("없는 카테고리")).is_empty());
    }

    #[test]
    fn test_missing_facet_never_matches_a_set_selector() {
        let items = vec![item("a", "x")];

        assert!(filter(&items, &Selection::new().status("open")).is_empty());
        assert_eq!(filter(&items, &Selection::new().status(ALL)).len(), 1);
    }

    #[test]
    fn test_location_is_substring() {
        let mut a = item("a", "x");
        a.owner = "서울 강남구 테헤란로";
        let mut b = item("b", "x");
        b.owner = "홍대 걷고싶은거리";

        let found = filter(&[a, b], &Selection::new().location("강남"));

        assert_eq!(names(&found), vec!["a"]);
    }

    #[test]
    fn test_pinned_first_then_newest() {
        let mut old_pin = item("old_pin", "x");
        old_pin.pinned = true;
        old_pin.date = "2023.12.01";
        let mut new_plain = item("new_plain", "x");
        new_plain.date = "2024.02.01";
        let mut mid_plain = item("mid_plain", "x");
        mid_plain.date = "2024-01-15";
        let mut broken = item("broken", "x");
        broken.date = "someday";

        let sorted = pinned_first(&[broken, mid_plain, old_pin, new_plain]);

        assert_eq!(
            names(&sorted),
            vec!["old_pin", "new_plain", "mid_plain", "broken"]
        );
    }

    #[test]
    fn test_popularity_ties_keep_catalog_order() {
        let mut first = item("first", "x");
        first.likes = 10;
        let mut second = item("second", "x");
        second.views = 100;
        let mut top = item("top", "x");
        top.likes = 11;

        let ranked = rank_by_popularity(&[first, second, top]);

        assert_eq!(names(&ranked), vec!["top", "first", "second"]);
    }

    #[test]
    fn test_popularity_score_formula() {
        assert_eq!(popularity_score(20, 10, 150), 45.0);
        assert_eq!(popularity_score(0, 0, 0), 0.0);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 18);
        assert_eq!(parse_date("2024.01.18"), expected);
        assert_eq!(parse_date("2024-01-18"), expected);
        assert_eq!(parse_date("2024-01-18T09:30:00Z"), expected);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_paginate() {
        let values = vec![1, 2, 3, 4, 5];

        assert_eq!(paginate(values.clone(), Some(1), Some(2)), vec![2, 3]);
        assert_eq!(paginate(values.clone(), None, None), values);
        assert!(paginate(values, Some(10), None).is_empty());
    }
}
