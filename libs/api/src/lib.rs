use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Json, Router,
};
use repository::Repository;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;

use crate::session::SessionStore;

pub mod application;
mod auth;
pub mod healthz;
pub mod home;
pub mod not_found;
pub mod opportunity;
pub mod organization;
pub mod post;
pub mod question;
mod response;
pub mod seller;
pub mod session;
pub mod user;
mod util;

pub use auth::bearer_token;

#[derive(Debug)]
pub enum ApiError {
    AuthError(String),
    ClientError(String),
    Forbidden(String),
    NotFound(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    repo: Repository,
    sessions: SessionStore,
}

impl ApiState {
    pub fn new(repo: Repository) -> Self {
        Self {
            repo,
            sessions: SessionStore::default(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        home::get_home,
        user::login,
        user::logout,
        user::register,
        user::get_me,
        opportunity::get_opportunities,
        opportunity::apply,
        application::get_applications,
        question::get_questions,
        question::create_question,
        post::get_posts,
        post::create_post,
        seller::get_dashboard,
        organization::get_dashboard,
        organization::create_recruitment,
    ),
    components(schemas(
        user::request::LoginReq,
        user::request::RegisterReq,
        user::response::LoginResp,
        user::response::RegisterResp,
        user::response::SessionResp,
        user::response::UserResp,
        opportunity::request::ApplyReq,
        opportunity::response::GetOpportunitiesResp,
        opportunity::response::OpportunityResp,
        opportunity::response::ApplyResp,
        application::response::GetApplicationsResp,
        application::response::ApplicationResp,
        question::request::CreateQuestionReq,
        question::response::GetQuestionsResp,
        question::response::QuestionResp,
        question::response::CreateQuestionResp,
        post::request::CreatePostReq,
        post::response::GetPostsResp,
        post::response::PostResp,
        post::response::CreatePostResp,
        seller::response::SellerDashboardResp,
        seller::response::ListingResp,
        organization::request::CreateRecruitmentReq,
        organization::response::OrganizationDashboardResp,
        organization::response::RecruitmentResp,
        organization::response::ApplicantResp,
        organization::response::CreateRecruitmentResp,
        home::response::HomeResp,
        home::response::ViewResp,
        util::response::AuthorResp,
        util::response::StatsResp,
        util::response::StatusCountResp,
    )),
    tags((name = "popup-connector", description = "Popup store marketplace views"))
)]
pub struct ApiDoc;

pub fn serve(
    repository: Repository,
    config: &::util::Config,
) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    let state = ApiState::new(repository);

    let origins = config
        .cors
        .origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    // views that send anonymous visitors to /login
    let protected_router = Router::new()
        .route("/seller", get(seller::get_dashboard))
        .route("/organization", get(organization::get_dashboard))
        .route(
            "/organization/recruitments",
            post(organization::create_recruitment),
        )
        .route("/applications", get(application::get_applications))
        .route_layer(middleware::from_fn(auth::require_login))
        .with_state(state.clone());

    // opportunities
    let opportunity_router = Router::new()
        .route("/", get(opportunity::get_opportunities))
        .route(
            "/:id/apply",
            post(opportunity::apply)
                .route_layer(middleware::from_fn(auth::require_login)),
        )
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // q&a
    let question_router = Router::new()
        .route(
            "/",
            get(question::get_questions).post(question::create_question),
        )
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // community
    let post_router = Router::new()
        .route("/", get(post::get_posts).post(post::create_post))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // session
    let user_router = Router::new()
        .route("/", get(home::get_home))
        .route("/login", post(user::login))
        .route("/logout", post(user::logout))
        .route("/register", post(user::register))
        .route("/me", get(user::get_me))
        .with_state(state.clone());

    let router = Router::new()
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .route("/healthz", get(healthz::get_health))
        .merge(user_router)
        .merge(protected_router)
        .nest("/opportunities", opportunity_router)
        .nest("/qna", question_router)
        .nest("/community", post_router)
        .fallback(not_found::get_404)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::resolve_session,
        ))
        .layer(cors);

    Ok(router)
}
