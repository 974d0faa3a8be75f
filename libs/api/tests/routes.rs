use api::serve;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use repository::{init_repository, opportunity::OpportunityRepository, Repository};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    serve(init_repository(), &util::Config::default()).unwrap()
}

fn app_with(repository: Repository) -> Router {
    serve(repository, &util::Config::default()).unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut req = Request::get(uri);
    if let Some(token) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    req.body(Body::empty()).unwrap()
}

fn post(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut req = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    req.body(Body::from(body.to_string())).unwrap()
}

async fn login(app: &Router, user_type: &str) -> String {
    let (status, body) = send(
        app,
        post(
            "/login",
            None,
            json!({ "email": "me@example.com", "password": "pw", "user_type": user_type }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_search_opportunities_by_organization() {
    // Arrange
    let app = app();

    // Act
    let (status, body) = send(&app, get("/opportunities?search=%EA%B0%95%EB%82%A8", None)).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["opportunities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1"]);
}

#[tokio::test]
async fn test_opportunities_paginate_after_filtering() {
    let app = app();

    let (status, body) = send(&app, get("/opportunities?limit=1&offset=1", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["opportunities"][0]["id"], "2");
    assert_eq!(body["opportunities"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_question_without_content_is_rejected() {
    // Arrange
    let app = app();
    let (_, before) = send(&app, get("/qna", None)).await;

    // Act
    let (status, body) = send(
        &app,
        post(
            "/qna",
            None,
            json!({ "title": "재고 관리", "content": "", "category": "운영 관련" }),
        ),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "제목, 내용, 카테고리를 모두 입력해주세요.");
    let (_, after) = send(&app, get("/qna", None)).await;
    assert_eq!(after["total"], before["total"]);
}

#[tokio::test]
async fn test_created_post_leads_the_board() {
    // Arrange
    let app = app();
    let token = login(&app, "seller").await;

    // Act
    let (status, _) = send(
        &app,
        post(
            "/community",
            Some(&token),
            json!({
                "title": "첫 팝업 후기",
                "content": "생각보다 반응이 좋았어요",
                "category": "경험 공유",
                "tags": "후기, 홍대 ,"
            }),
        ),
    )
    .await;
    let (_, body) = send(&app, get("/community?category=%EA%B2%BD%ED%97%98%20%EA%B3%B5%EC%9C%A0", None)).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let first = &body["posts"][0];
    assert_eq!(first["title"], "첫 팝업 후기");
    assert_eq!(first["author"]["name"], "김셀러");
    assert_eq!(first["tags"], json!(["후기", "홍대"]));
}

#[tokio::test]
async fn test_reserved_post_category_is_rejected() {
    let app = app();

    let (status, _) = send(
        &app,
        post(
            "/community",
            None,
            json!({ "title": "공지", "content": "내용", "category": "공지사항" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_protected_views_follow_the_session() {
    // Arrange
    let app = app();

    // Act & Assert
    for path in ["/seller", "/organization", "/applications"] {
        let res = app.clone().oneshot(get(path, None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(res.headers()[header::LOCATION], "/login");
    }

    let token = login(&app, "organization").await;
    let (status, body) = send(&app, get("/organization", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "서울문화재단");

    let (status, _) = send(&app, post("/logout", Some(&token), json!({}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let res = app.clone().oneshot(get("/organization", Some(&token))).await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_apply_files_a_pending_application() {
    // Arrange
    let app = app();
    let token = login(&app, "seller").await;

    // Act
    let (status, body) = send(
        &app,
        post(
            "/opportunities/2/apply",
            Some(&token),
            json!({ "proposal": "친환경 리빙 브랜드입니다." }),
        ),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "신청이 완료되었습니다!");
    let (_, applications) = send(&app, get("/applications", Some(&token))).await;
    assert_eq!(applications["applications"][0]["opportunity_title"], "라이프스타일 브랜드 모집");
    assert_eq!(applications["applications"][0]["status"], "pending");
    assert_eq!(applications["stats"]["total"], 6);
}

#[tokio::test]
async fn test_apply_to_unknown_opportunity() {
    let app = app();
    let token = login(&app, "seller").await;

    let (status, _) = send(
        &app,
        post("/opportunities/99/apply", Some(&token), json!({ "proposal": "제안" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_apply_is_for_signed_in_sellers_only() {
    // Arrange
    let app = app();
    let token = login(&app, "organization").await;

    // Act
    let anonymous = app
        .clone()
        .oneshot(post("/opportunities/1/apply", None, json!({ "proposal": "제안" })))
        .await
        .unwrap();
    let (status, body) = send(
        &app,
        post("/opportunities/1/apply", Some(&token), json!({ "proposal": "제안" })),
    )
    .await;

    // Assert
    assert_eq!(anonymous.status(), StatusCode::SEE_OTHER);
    assert_eq!(anonymous.headers()[header::LOCATION], "/login");
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "셀러 계정만 이용할 수 있습니다.");
    let seller = login(&app, "seller").await;
    let (_, applications) = send(&app, get("/applications", Some(&seller))).await;
    assert_eq!(applications["stats"]["total"], 5);
}

#[tokio::test]
async fn test_apply_to_a_full_opportunity_is_rejected() {
    // Arrange
    let mut opportunities = repository::fixtures::opportunities();
    opportunities[0].current_sellers = opportunities[0].max_sellers;
    let app = app_with(Repository {
        opportunity: OpportunityRepository::new(opportunities),
        ..init_repository()
    });
    let token = login(&app, "seller").await;

    // Act
    let (status, body) = send(
        &app,
        post("/opportunities/1/apply", Some(&token), json!({ "proposal": "제안" })),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "모집 인원이 마감되었습니다.");
    let (_, applications) = send(&app, get("/applications", Some(&token))).await;
    assert_eq!(applications["stats"]["total"], 5);
}

#[tokio::test]
async fn test_register_validates_passwords() {
    let app = app();

    let (status, body) = send(
        &app,
        post(
            "/register",
            None,
            json!({
                "email": "new@example.com",
                "password": "pw",
                "confirm_password": "other",
                "name": "신규",
                "agree_terms": true,
                "agree_privacy": true
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "비밀번호가 일치하지 않습니다.");
}

#[tokio::test]
async fn test_me_reports_anonymous_without_token() {
    let app = app();

    let (status, body) = send(&app, get("/me", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "anonymous");
    assert_eq!(body["user"], Value::Null);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = app();

    let (status, _) = send(&app, get("/nowhere", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
