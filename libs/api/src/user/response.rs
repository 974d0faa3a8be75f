use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct UserResp {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub profile_image: Option<String>,
}

impl From<User> for UserResp {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            user_type: user.user_type.to_string(),
            profile_image: user.profile_image,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct LoginResp {
    pub token: String,
    pub user: UserResp,
    /// Dashboard for the account type.
    pub redirect: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResp {
    pub message: String,
    pub redirect: String,
}

#[derive(Serialize, ToSchema)]
pub struct SessionResp {
    /// `anonymous` or `authenticated`
    pub kind: String,
    pub user: Option<UserResp>,
}

impl From<Session> for SessionResp {
    fn from(session: Session) -> Self {
        match session {
            Session::Anonymous => Self {
                kind: "anonymous".to_string(),
                user: None,
            },
            Session::Authenticated(user) => Self {
                kind: "authenticated".to_string(),
                user: Some(UserResp::from(user)),
            },
        }
    }
}
