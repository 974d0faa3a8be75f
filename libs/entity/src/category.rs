//! Fixed category sets offered by each view's category selector.

/// Categories on the public opportunity catalog.
pub const OPPORTUNITY: &[&str] = &["패션", "뷰티", "라이프스타일", "푸드", "기타"];

/// Business categories shared by sellers, applications and recruitments.
pub const BUSINESS: &[&str] = &[
    "패션/의류",
    "뷰티/화장품",
    "액세서리",
    "홈리빙",
    "식품/음료",
    "문구/팬시",
    "아트/공예",
];

pub const QUESTION: &[&str] = &[
    "운영 관련",
    "비용 관련",
    "마케팅",
    "기관 관련",
    "계약/법률",
    "기술적 문제",
    "일반 질문",
];

pub const POST: &[&str] = &[
    "공지사항",
    "성공 사례",
    "경험 공유",
    "노하우 공유",
    "마케팅",
    "질문/문의",
    "자유 게시판",
];

/// Notices are posted by operators only, so they are not offered when writing.
pub const POST_RESERVED: &str = "공지사항";

pub const LOCATIONS: &[&str] =
    &["홍대", "강남", "이태원", "명동", "건대", "잠실", "신촌", "압구정"];

pub fn contains(categories: &[&str], category: &str) -> bool {
    categories.iter().any(|c| *c == category)
}
