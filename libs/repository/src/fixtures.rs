//! Sample marketplace data every catalog starts from.

use entity::prelude::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn author(name: &str, user_type: UserType) -> Author {
    Author {
        name: name.to_string(),
        user_type,
    }
}

pub fn opportunities() -> Vec<OpportunityEntity> {
    vec![
        OpportunityEntity {
            id: "1".to_string(),
            organization_id: "org1".to_string(),
            organization_name: "롯데백화점 강남점".to_string(),
            title: "신진 디자이너 브랜드 팝업스토어".to_string(),
            description: "새로운 패션 브랜드들을 위한 특별한 기회입니다. 프리미엄 위치에서 고객들에게 브랜드를 알릴 수 있습니다.".to_string(),
            location: "서울 강남구 테헤란로".to_string(),
            start_date: "2024-03-15".to_string(),
            end_date: "2024-03-25".to_string(),
            max_sellers: 5,
            current_sellers: 2,
            category: "패션".to_string(),
            requirements: strings(&["사업자등록증", "상품 사진 포트폴리오", "브랜드 소개서"]),
            benefits: strings(&["무료 매장 인테리어", "마케팅 지원", "매출 리포트 제공"]),
            fee: 500_000,
            application_deadline: "2024-03-01".to_string(),
            status: OpportunityStatus::Active,
            created_at: "2024-02-01".to_string(),
        },
        OpportunityEntity {
            id: "2".to_string(),
            organization_id: "org2".to_string(),
            organization_name: "현대백화점 판교점".to_string(),
            title: "라이프스타일 브랜드 모집".to_string(),
            description: "홈데코, 생활용품 브랜드를 위한 팝업스토어 기회입니다. 젊은 고객층이 많은 판교점에서 진행됩니다.".to_string(),
            location: "경기도 성남시 분당구".to_string(),
            start_date: "2024-03-20".to_string(),
            end_date: "2024-04-05".to_string(),
            max_sellers: 3,
            current_sellers: 1,
            category: "라이프스타일".to_string(),
            requirements: strings(&["제품 카탈로그", "품질인증서", "판매 경험"]),
            benefits: strings(&["프리미엄 위치", "고객 맞춤 디스플레이", "SNS 마케팅 지원"]),
            fee: 800_000,
            application_deadline: "2024-03-05".to_string(),
            status: OpportunityStatus::Active,
            created_at: "2024-02-05".to_string(),
        },
        OpportunityEntity {
            id: "3".to_string(),
            organization_id: "org3".to_string(),
            organization_name: "코엑스몰".to_string(),
            title: "K-뷰티 브랜드 특별 전시".to_string(),
            description: "해외 관광객들을 타겟으로 한 K-뷰티 브랜드 팝업스토어입니다. 국제적인 노출 기회를 제공합니다.".to_string(),
            location: "서울 강남구 영동대로".to_string(),
            start_date: "2024-04-01".to_string(),
            end_date: "2024-04-15".to_string(),
            max_sellers: 8,
            current_sellers: 6,
            category: "뷰티".to_string(),
            requirements: strings(&["FDA 승인서류", "영문 제품설명서", "수출 경험"]),
            benefits: strings(&["글로벌 고객 접점", "통역 서비스", "해외 바이어 연결"]),
            fee: 1_200_000,
            application_deadline: "2024-03-10".to_string(),
            status: OpportunityStatus::Active,
            created_at: "2024-02-10".to_string(),
        },
    ]
}

pub fn listings() -> Vec<ListingEntity> {
    vec![
        ListingEntity {
            id: "1".to_string(),
            title: "홍대 젊은 크리에이터 팝업 페스티벌".to_string(),
            organization: "홍대문화재단".to_string(),
            location: "홍대 걷고싶은거리".to_string(),
            period: "2024.03.15 - 2024.03.31".to_string(),
            deadline: "2024.02.28".to_string(),
            category: "패션/의류".to_string(),
            description: "20-30대 타겟의 젊은 크리에이터들을 위한 팝업스토어 페스티벌입니다. 신진 디자이너와 브랜드들에게 홍보 기회를 제공합니다.".to_string(),
            requirements: strings(&["신진 브랜드 (설립 3년 이내)", "온라인 포트폴리오 필수", "인스타그램 팔로워 1000명 이상"]),
            benefits: strings(&["부스 임대료 50% 할인", "마케팅 지원", "언론 보도"]),
            status: ListingStatus::Open,
            applicants: 15,
            max_applicants: 30,
            rating: 4.8,
            tags: strings(&["신진브랜드", "마케팅지원", "홍대", "페스티벌"]),
        },
        ListingEntity {
            id: "2".to_string(),
            title: "강남역 지하상가 K-뷰티 팝업존".to_string(),
            organization: "강남구청".to_string(),
            location: "강남역 지하상가".to_string(),
            period: "2024.04.01 - 2024.04.30".to_string(),
            deadline: "2024.03.15".to_string(),
            category: "뷰티/화장품".to_string(),
            description: "한국 뷰티 브랜드들을 위한 전용 팝업존 운영. 높은 유동인구와 뷰티에 관심이 많은 타겟층이 특징입니다.".to_string(),
            requirements: strings(&["K-뷰티 브랜드", "제품 안전성 인증 필수", "영업 경험 1년 이상"]),
            benefits: strings(&["프리미엄 위치", "공동 마케팅", "방송 촬영 기회"]),
            status: ListingStatus::Open,
            applicants: 8,
            max_applicants: 12,
            rating: 4.6,
            tags: strings(&["K-뷰티", "강남", "프리미엄위치"]),
        },
        ListingEntity {
            id: "3".to_string(),
            title: "이태원 글로벌 아트 마켓".to_string(),
            organization: "용산구 문화재단".to_string(),
            location: "이태원 문화공간".to_string(),
            period: "2024.05.10 - 2024.05.20".to_string(),
            deadline: "2024.04.25".to_string(),
            category: "아트/공예".to_string(),
            description: "해외 관광객들을 타겟으로 한 한국 전통 공예와 현대 아트의 만남. 글로벌 시장 진출 기회를 제공합니다.".to_string(),
            requirements: strings(&["아트/공예 관련", "영어 소통 가능", "해외 판매 경험 우대"]),
            benefits: strings(&["통역 서비스", "국제 배송 지원", "해외 바이어 연결"]),
            status: ListingStatus::Upcoming,
            applicants: 3,
            max_applicants: 20,
            rating: 4.9,
            tags: strings(&["글로벌", "아트", "관광객", "이태원"]),
        },
    ]
}

pub fn applications() -> Vec<ApplicationEntity> {
    vec![
        ApplicationEntity {
            id: "1".to_string(),
            opportunity_title: "홍대 젊은 크리에이터 팝업 페스티벌".to_string(),
            organization: "홍대문화재단".to_string(),
            location: "홍대 걷고싶은거리".to_string(),
            applied_date: "2024.01.15".to_string(),
            status: ApplicationStatus::Approved,
            last_update: "2024.01.20".to_string(),
            category: "패션/의류".to_string(),
            period: "2024.03.15 - 2024.03.31".to_string(),
            notes: Some("서류 검토 통과, 부스 배정 완료".to_string()),
            rating: Some(4.8),
            feedback: Some("브랜드 컨셉이 참신하고 포트폴리오가 우수합니다.".to_string()),
        },
        ApplicationEntity {
            id: "2".to_string(),
            opportunity_title: "강남역 지하상가 K-뷰티 팝업존".to_string(),
            organization: "강남구청".to_string(),
            location: "강남역 지하상가".to_string(),
            applied_date: "2024.01.18".to_string(),
            status: ApplicationStatus::Interview,
            last_update: "2024.01.22".to_string(),
            category: "뷰티/화장품".to_string(),
            period: "2024.04.01 - 2024.04.30".to_string(),
            notes: Some("1차 서류 통과, 면접 일정: 2024.01.25 오후 2시".to_string()),
            rating: None,
            feedback: Some("제품 라인업이 흥미롭습니다. 면접에서 마케팅 전략을 더 자세히 듣고 싶습니다.".to_string()),
        },
        ApplicationEntity {
            id: "3".to_string(),
            opportunity_title: "명동 K-패션 위크".to_string(),
            organization: "서울패션위크".to_string(),
            location: "명동 패션거리".to_string(),
            applied_date: "2024.01.10".to_string(),
            status: ApplicationStatus::Pending,
            last_update: "2024.01.12".to_string(),
            category: "패션/의류".to_string(),
            period: "2024.02.20 - 2024.03.05".to_string(),
            notes: Some("서류 검토 중".to_string()),
            rating: None,
            feedback: None,
        },
        ApplicationEntity {
            id: "4".to_string(),
            opportunity_title: "건대 대학생 타겟 라이프스타일 마켓".to_string(),
            organization: "광진구청".to_string(),
            location: "건대입구역 일대".to_string(),
            applied_date: "2024.01.08".to_string(),
            status: ApplicationStatus::Rejected,
            last_update: "2024.01.16".to_string(),
            category: "홈리빙".to_string(),
            period: "2024.02.15 - 2024.02.29".to_string(),
            notes: None,
            rating: None,
            feedback: Some("아쉽게도 이번 기회는 다른 셀러로 결정되었습니다. 다음 기회에 다시 지원해주세요.".to_string()),
        },
        ApplicationEntity {
            id: "5".to_string(),
            opportunity_title: "잠실 롯데몰 신상품 런칭존".to_string(),
            organization: "롯데몰".to_string(),
            location: "잠실 롯데몰".to_string(),
            applied_date: "2024.01.05".to_string(),
            status: ApplicationStatus::Completed,
            last_update: "2024.01.30".to_string(),
            category: "뷰티/화장품".to_string(),
            period: "2024.01.15 - 2024.01.30".to_string(),
            notes: None,
            rating: Some(4.5),
            feedback: Some("성공적인 팝업스토어 운영이었습니다. 고객 응대와 매장 관리가 우수했습니다.".to_string()),
        },
    ]
}

pub fn questions() -> Vec<QuestionEntity> {
    vec![
        QuestionEntity {
            id: "1".to_string(),
            title: "팝업스토어 첫 운영, 어떤 준비를 해야 할까요?".to_string(),
            content: "안녕하세요! 처음으로 팝업스토어를 운영하게 되었는데, 어떤 것들을 미리 준비해야 할지 궁금합니다. 특히 재고 관리나 고객 응대 부분에서 팁이 있다면 공유해주세요.".to_string(),
            category: "운영 관련".to_string(),
            author: author("새내기셀러", UserType::Seller),
            created_at: "2024.01.20".to_string(),
            status: QuestionStatus::Answered,
            like_count: 15,
            answer_count: 8,
            view_count: 124,
            tags: strings(&["첫운영", "준비사항", "재고관리"]),
        },
        QuestionEntity {
            id: "2".to_string(),
            title: "강남역 지하상가 팝업존 임대료는 보통 얼마인가요?".to_string(),
            content: "강남역 지하상가에서 팝업스토어를 진행하려고 하는데, 대략적인 임대료 수준이 궁금합니다. 경험 있으신 분들의 조언 부탁드려요.".to_string(),
            category: "비용 관련".to_string(),
            author: author("김뷰티", UserType::Seller),
            created_at: "2024.01.19".to_string(),
            status: QuestionStatus::Open,
            like_count: 23,
            answer_count: 12,
            view_count: 89,
            tags: strings(&["강남", "임대료", "비용"]),
        },
        QuestionEntity {
            id: "3".to_string(),
            title: "팝업스토어 마케팅, SNS 외에 다른 방법이 있을까요?".to_string(),
            content: "인스타그램과 TikTok 말고도 효과적인 마케팅 방법이 있다면 알려주세요. 오프라인 마케팅도 고려하고 있습니다.".to_string(),
            category: "마케팅".to_string(),
            author: author("마케팅고민", UserType::Seller),
            created_at: "2024.01.18".to_string(),
            status: QuestionStatus::Answered,
            like_count: 18,
            answer_count: 15,
            view_count: 156,
            tags: strings(&["마케팅", "홍보", "SNS"]),
        },
        QuestionEntity {
            id: "4".to_string(),
            title: "셀러 선발 기준이 궁금합니다".to_string(),
            content: "저희 기관에서 팝업스토어 셀러를 모집할 때 어떤 기준으로 선발하는 것이 좋을까요? 다른 기관들은 어떤 기준을 사용하시는지 궁금합니다.".to_string(),
            category: "기관 관련".to_string(),
            author: author("문화재단담당자", UserType::Organization),
            created_at: "2024.01.17".to_string(),
            status: QuestionStatus::Open,
            like_count: 9,
            answer_count: 5,
            view_count: 67,
            tags: strings(&["기관", "선발기준", "모집"]),
        },
        QuestionEntity {
            id: "5".to_string(),
            title: "계약서 작성 시 주의사항이 있나요?".to_string(),
            content: "팝업스토어 계약서를 작성할 때 꼭 포함해야 할 조항이나 주의해야 할 부분이 있다면 알려주세요.".to_string(),
            category: "계약/법률".to_string(),
            author: author("디자인스튜디오", UserType::Seller),
            created_at: "2024.01.16".to_string(),
            status: QuestionStatus::Answered,
            like_count: 31,
            answer_count: 7,
            view_count: 198,
            tags: strings(&["계약서", "법률", "주의사항"]),
        },
    ]
}

pub fn posts() -> Vec<PostEntity> {
    vec![
        PostEntity {
            id: "1".to_string(),
            title: "🔥 강남역 팝업스토어 성공 후기 및 팁 공유".to_string(),
            content: "안녕하세요! 지난달 강남역에서 뷰티 팝업스토어를 운영했는데 정말 성공적이었습니다. 매출도 목표의 150%를 달성했고, 브랜드 인지도도 많이 올랐어요. 성공 요인과 팁을 공유해드립니다...".to_string(),
            category: "성공 사례".to_string(),
            author: author("김뷰티", UserType::Seller),
            created_at: "2024.01.18".to_string(),
            like_count: 24,
            comment_count: 12,
            view_count: 156,
            pinned: true,
            tags: strings(&["강남", "뷰티", "성공후기"]),
        },
        PostEntity {
            id: "2".to_string(),
            title: "팝업스토어 디스플레이 노하우 공유".to_string(),
            content: "작은 공간에서도 효과적으로 제품을 진열하는 방법에 대해 이야기해보려고 합니다. 특히 제한된 공간에서 고객의 시선을 끄는 디스플레이 팁들을...".to_string(),
            category: "노하우 공유".to_string(),
            author: author("디자인스튜디오", UserType::Seller),
            created_at: "2024.01.17".to_string(),
            like_count: 18,
            comment_count: 8,
            view_count: 89,
            pinned: false,
            tags: strings(&["디스플레이", "인테리어"]),
        },
        PostEntity {
            id: "3".to_string(),
            title: "[공지] 홍대 문화재단 3월 팝업 이벤트 모집 안내".to_string(),
            content: "홍대 문화재단에서 3월에 진행될 \"젊은 크리에이터 팝업 페스티벌\"에 참여할 셀러를 모집합니다. 이번 행사는 20-30대 타겟으로...".to_string(),
            category: "공지사항".to_string(),
            author: author("홍대문화재단", UserType::Organization),
            created_at: "2024.01.16".to_string(),
            like_count: 15,
            comment_count: 25,
            view_count: 234,
            pinned: true,
            tags: strings(&["홍대", "모집", "크리에이터"]),
        },
        PostEntity {
            id: "4".to_string(),
            title: "팝업스토어 운영 중 겪은 어려움과 해결방법".to_string(),
            content: "처음 팝업스토어를 운영하면서 예상치 못한 문제들이 많았는데, 어떻게 해결했는지 공유해드릴게요. 특히 재고 관리와 고객 응대 부분에서...".to_string(),
            category: "경험 공유".to_string(),
            author: author("새내기셀러", UserType::Seller),
            created_at: "2024.01.15".to_string(),
            like_count: 12,
            comment_count: 15,
            view_count: 78,
            pinned: false,
            tags: strings(&["초보", "어려움", "해결방법"]),
        },
        PostEntity {
            id: "5".to_string(),
            title: "팝업스토어 마케팅 전략 - SNS 활용법".to_string(),
            content: "인스타그램과 TikTok을 활용한 팝업스토어 마케팅 전략에 대해 공유합니다. 실제로 팔로워를 10배 늘리고 방문자를 3배 증가시킨 방법들을...".to_string(),
            category: "마케팅".to_string(),
            author: author("마케팅구루", UserType::Seller),
            created_at: "2024.01.14".to_string(),
            like_count: 31,
            comment_count: 19,
            view_count: 198,
            pinned: false,
            tags: strings(&["마케팅", "SNS", "인스타그램"]),
        },
    ]
}

pub fn recruitments() -> Vec<RecruitmentEntity> {
    vec![
        RecruitmentEntity {
            id: "1".to_string(),
            title: "홍대 젊은 크리에이터 팝업 페스티벌".to_string(),
            location: "홍대 걷고싶은거리".to_string(),
            period: "2024.03.15 - 2024.03.31".to_string(),
            deadline: "2024.02.28".to_string(),
            category: "패션/의류".to_string(),
            description: "20-30대 타겟의 젊은 크리에이터들을 위한 팝업스토어 페스티벌입니다.".to_string(),
            requirements: strings(&["신진 브랜드 (설립 3년 이내)", "온라인 포트폴리오 필수"]),
            benefits: strings(&["부스 임대료 50% 할인", "마케팅 지원"]),
            status: RecruitmentStatus::Active,
            applicants: 15,
            max_applicants: 30,
            created_date: "2024.01.15".to_string(),
            view_count: 234,
        },
        RecruitmentEntity {
            id: "2".to_string(),
            title: "강남역 지하상가 K-뷰티 팝업존".to_string(),
            location: "강남역 지하상가".to_string(),
            period: "2024.04.01 - 2024.04.30".to_string(),
            deadline: "2024.03.15".to_string(),
            category: "뷰티/화장품".to_string(),
            description: "한국 뷰티 브랜드들을 위한 전용 팝업존 운영입니다.".to_string(),
            requirements: strings(&["K-뷰티 브랜드", "제품 안전성 인증 필수"]),
            benefits: strings(&["프리미엄 위치", "공동 마케팅"]),
            status: RecruitmentStatus::Active,
            applicants: 8,
            max_applicants: 12,
            created_date: "2024.01.12".to_string(),
            view_count: 156,
        },
        RecruitmentEntity {
            id: "3".to_string(),
            title: "이태원 글로벌 아트 마켓".to_string(),
            location: "이태원 문화공간".to_string(),
            period: "2024.05.10 - 2024.05.20".to_string(),
            deadline: "2024.04.25".to_string(),
            category: "아트/공예".to_string(),
            description: "해외 관광객들을 타겟으로 한 한국 전통 공예와 현대 아트의 만남입니다.".to_string(),
            requirements: strings(&["아트/공예 관련", "영어 소통 가능"]),
            benefits: strings(&["통역 서비스", "국제 배송 지원"]),
            status: RecruitmentStatus::Draft,
            applicants: 0,
            max_applicants: 20,
            created_date: "2024.01.20".to_string(),
            view_count: 45,
        },
    ]
}

pub fn applicants() -> Vec<ApplicantEntity> {
    vec![
        ApplicantEntity {
            id: "1".to_string(),
            name: "김뷰티".to_string(),
            category: "뷰티/화장품".to_string(),
            applied_date: "2024.01.18".to_string(),
            status: ApplicantStatus::Pending,
            rating: 4.8,
            description: "자연주의 뷰티 브랜드를 운영하고 있습니다. 친환경 제품으로 고객들에게 좋은 반응을 얻고 있어요.".to_string(),
            experience: "팝업스토어 운영 경험 2년".to_string(),
            recruitment_title: "강남역 지하상가 K-뷰티 팝업존".to_string(),
        },
        ApplicantEntity {
            id: "2".to_string(),
            name: "디자인스튜디오".to_string(),
            category: "패션/의류".to_string(),
            applied_date: "2024.01.17".to_string(),
            status: ApplicantStatus::Approved,
            rating: 4.6,
            description: "미니멀한 디자인의 패션 브랜드입니다. 젊은 층에게 인기가 많아요.".to_string(),
            experience: "브랜드 운영 3년, 팝업 경험 5회".to_string(),
            recruitment_title: "홍대 젊은 크리에이터 팝업 페스티벌".to_string(),
        },
        ApplicantEntity {
            id: "3".to_string(),
            name: "새내기셀러".to_string(),
            category: "액세서리".to_string(),
            applied_date: "2024.01.16".to_string(),
            status: ApplicantStatus::Interview,
            rating: 4.2,
            description: "핸드메이드 액세서리 브랜드를 시작했습니다. 첫 팝업스토어 도전입니다!".to_string(),
            experience: "온라인 판매 1년".to_string(),
            recruitment_title: "홍대 젊은 크리에이터 팝업 페스티벌".to_string(),
        },
        ApplicantEntity {
            id: "4".to_string(),
            name: "마케팅구루".to_string(),
            category: "패션/의류".to_string(),
            applied_date: "2024.01.15".to_string(),
            status: ApplicantStatus::Rejected,
            rating: 4.9,
            description: "스트릿 패션 브랜드로 SNS 마케팅에 강점이 있습니다.".to_string(),
            experience: "브랜드 운영 5년, 팝업 경험 10회 이상".to_string(),
            recruitment_title: "홍대 젊은 크리에이터 팝업 페스티벌".to_string(),
        },
    ]
}
