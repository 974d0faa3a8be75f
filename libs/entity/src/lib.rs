pub mod applicant;
pub mod application;
pub mod category;
pub mod listing;
pub mod opportunity;
pub mod post;
pub mod question;
pub mod recruitment;
pub mod user;

pub mod prelude {
    pub use crate::applicant::{
        Applicant as ApplicantEntity, ApplicantStatus,
    };
    pub use crate::application::{
        Application as ApplicationEntity, ApplicationStatus,
    };
    pub use crate::listing::{Listing as ListingEntity, ListingStatus};
    pub use crate::opportunity::{
        Opportunity as OpportunityEntity, OpportunityStatus,
    };
    pub use crate::post::Post as PostEntity;
    pub use crate::question::{
        Question as QuestionEntity, QuestionStatus,
    };
    pub use crate::recruitment::{
        Recruitment as RecruitmentEntity, RecruitmentStatus,
    };
    pub use crate::user::{Author, Session, User, UserType};
}
