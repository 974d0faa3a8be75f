use entity::prelude::*;
use proptest::prelude::*;
use proptest::test_runner::Config;
use repository::form::parse_tags;
use repository::query::{
    filter, parse_date, pinned_first, rank_by_popularity, Dated, Ranked, Selection, ALL,
};

const CATEGORIES: [&str; 3] = ["마케팅", "경험 공유", "노하우 공유"];

fn post_strategy() -> impl Strategy<Value = PostEntity> {
    (
        "[a-cA-C강남 ]{0,8}",
        "[a-c홍대 ]{0,8}",
        0_usize..CATEGORIES.len(),
        any::<bool>(),
        1_u32..=28,
        0_u32..50,
        0_u32..50,
        0_u32..500,
    )
        .prop_map(
            |(title, content, category, pinned, day, likes, comments, views)| PostEntity {
                id: format!("{title}-{day}-{likes}"),
                title,
                content,
                category: CATEGORIES[category].to_string(),
                author: Author::anonymous(),
                created_at: format!("2024.02.{day:02}"),
                like_count: likes,
                comment_count: comments,
                view_count: views,
                pinned,
                tags: vec![],
            },
        )
}

fn posts() -> impl Strategy<Value = Vec<PostEntity>> {
    proptest::collection::vec(post_strategy(), 0..24)
}

fn selection_strategy() -> impl Strategy<Value = Selection> {
    (
        "[a-cA-C강남]{0,2}",
        prop_oneof![
            Just(None::<String>),
            Just(Some(String::new())),
            Just(Some(ALL.to_string())),
            (0_usize..CATEGORIES.len()).prop_map(|i| Some(CATEGORIES[i].to_string())),
        ],
    )
        .prop_map(|(search, category)| Selection {
            search,
            category,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn empty_search_is_identity(records in posts()) {
        prop_assert_eq!(filter(&records, &Selection::new()), records);
    }

    #[test]
    fn all_or_unset_selector_is_neutral(records in posts(), search in "[a-c]{0,2}") {
        let base = filter(&records, &Selection::new().search(search.clone()));
        let with_all = filter(&records, &Selection::new().search(search.clone()).category(ALL));
        let with_empty = filter(&records, &Selection::new().search(search).category(""));
        prop_assert_eq!(&with_all, &base);
        prop_assert_eq!(&with_empty, &base);
    }

    #[test]
    fn filtering_is_idempotent(records in posts(), selection in selection_strategy()) {
        let once = filter(&records, &selection);
        let twice = filter(&once, &selection);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn filtering_keeps_relative_order(records in posts(), selection in selection_strategy()) {
        let filtered = filter(&records, &selection);
        let mut cursor = records.iter();
        for record in &filtered {
            prop_assert!(cursor.any(|r| r == record));
        }
    }

    #[test]
    fn search_matches_title_or_content(records in posts(), search in "[a-c강남]{1,2}") {
        let needle = search.to_lowercase();
        let filtered = filter(&records, &Selection::new().search(search));
        let expected: Vec<_> = records
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle) || p.content.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn pinned_partition_precedes_and_dates_descend(records in posts()) {
        let sorted = pinned_first(&records);
        prop_assert_eq!(sorted.len(), records.len());

        let first_plain = sorted.iter().position(|p| !p.pinned()).unwrap_or(sorted.len());
        prop_assert!(sorted[first_plain..].iter().all(|p| !p.pinned()));

        for pair in sorted.windows(2) {
            if pair[0].pinned() == pair[1].pinned() {
                prop_assert!(parse_date(pair[0].created_at()) >= parse_date(pair[1].created_at()));
            }
        }
    }

    #[test]
    fn popularity_ranking_is_monotonic(records in posts()) {
        let ranked = rank_by_popularity(&records);
        for (i, a) in ranked.iter().enumerate() {
            for b in &ranked[i + 1..] {
                prop_assert!(a.popularity() >= b.popularity());
            }
        }
    }

    #[test]
    fn tags_are_trimmed_and_never_empty(raw in "[a-c ,]{0,16}") {
        let tags = parse_tags(&raw);
        prop_assert!(tags.iter().all(|t| !t.is_empty() && t.trim() == t));
        prop_assert!(tags.iter().all(|t| !t.contains(',')));
    }
}

#[test]
fn tag_parsing_examples() {
    assert_eq!(
        parse_tags("마케팅, 홍대,  성공후기 "),
        vec!["마케팅", "홍대", "성공후기"]
    );
    assert!(parse_tags("").is_empty());
}
