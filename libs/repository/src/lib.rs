use applicant::ApplicantRepository;
use entity::prelude::OpportunityStatus;
use application::ApplicationRepository;
use listing::ListingRepository;
use opportunity::OpportunityRepository;
use post::PostRepository;
use question::QuestionRepository;
use recruitment::RecruitmentRepository;
use tracing::info;

use crate::form::FormKind;

pub mod applicant;
pub mod application;
pub mod catalog;
pub mod fixtures;
pub mod form;
pub mod listing;
pub mod opportunity;
pub mod post;
pub mod query;
pub mod question;
pub mod recruitment;

#[derive(Clone, Debug)]
pub struct Repository {
    pub opportunity: OpportunityRepository,
    pub listing: ListingRepository,
    pub application: ApplicationRepository,
    pub question: QuestionRepository,
    pub post: PostRepository,
    pub recruitment: RecruitmentRepository,
    pub applicant: ApplicantRepository,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("{}", .kind.missing_message())]
    MissingField {
        kind: FormKind,
        field: &'static str,
    },

    #[error("알 수 없는 카테고리입니다: {0}")]
    UnknownCategory(String),

    #[error("잘못된 숫자 형식입니다: {field}")]
    InvalidNumber { field: &'static str },

    #[error("{kind}을(를) 찾을 수 없습니다: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("모집중인 팝업 기회가 아닙니다: {}", .0.label())]
    NotRecruiting(OpportunityStatus),

    #[error("모집 인원이 마감되었습니다.")]
    OpportunityFull,
}

pub type Response<T> = Result<T, RepositoryError>;

/// Builds every catalog from the bundled sample data.
pub fn init_repository() -> Repository {
    let repository = Repository {
        opportunity: OpportunityRepository::new(fixtures::opportunities()),
        listing: ListingRepository::new(fixtures::listings()),
        application: ApplicationRepository::new(fixtures::applications()),
        question: QuestionRepository::new(fixtures::questions()),
        post: PostRepository::new(fixtures::posts()),
        recruitment: RecruitmentRepository::new(fixtures::recruitments()),
        applicant: ApplicantRepository::new(fixtures::applicants()),
    };

    info!(task = "seed catalogs from fixtures");

    repository
}
