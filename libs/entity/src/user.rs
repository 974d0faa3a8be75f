use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserType {
    #[default]
    Seller,
    Organization,
}

impl UserType {
    /// Dashboard a user lands on after signing in.
    pub fn landing_path(self) -> &'static str {
        match self {
            UserType::Seller => "/seller",
            UserType::Organization => "/organization",
        }
    }

    /// Parses a form value; blank means seller.
    pub fn parse(raw: Option<&str>) -> Result<Self, SessionError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(UserType::Seller),
            Some(raw) => raw
                .parse()
                .map_err(|_| SessionError::UnknownUserType(raw.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserType::Seller => "셀러",
            UserType::Organization => "기관",
        }
    }

    fn mock_name(self) -> &'static str {
        match self {
            UserType::Seller => "김셀러",
            UserType::Organization => "서울문화재단",
        }
    }
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub profile_image: Option<String>,
}

impl User {
    pub fn require_type(&self, user_type: UserType) -> Result<(), SessionError> {
        if self.user_type == user_type {
            Ok(())
        } else {
            Err(SessionError::WrongUserType(user_type))
        }
    }
}

/// Who is looking at a view. Signing out returns to `Anonymous`.
#[derive(Debug, Default, PartialEq, Clone, Serialize)]
#[serde(tag = "kind", content = "user", rename_all = "lowercase")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub user_type: UserType,
}

impl Author {
    pub fn anonymous() -> Self {
        Self {
            name: "익명".to_string(),
            user_type: UserType::Seller,
        }
    }
}

impl From<&Session> for Author {
    fn from(session: &Session) -> Self {
        match session {
            Session::Anonymous => Author::anonymous(),
            Session::Authenticated(user) => Author {
                name: user.name.clone(),
                user_type: user.user_type,
            },
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("이메일과 비밀번호를 모두 입력해주세요.")]
    MissingCredentials,

    #[error("필수 항목을 모두 입력해주세요.")]
    MissingRequiredFields,

    #[error("비밀번호가 일치하지 않습니다.")]
    PasswordMismatch,

    #[error("필수 약관에 동의해주세요.")]
    TermsNotAccepted,

    #[error("알 수 없는 계정 유형입니다: {0}")]
    UnknownUserType(String),

    #[error("{} 계정만 이용할 수 있습니다.", .0.label())]
    WrongUserType(UserType),

    #[error("로그인이 필요합니다.")]
    LoginRequired,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub user_type: UserType,
}

impl Credentials {
    /// Any non-empty pair signs in; the user is fabricated from the account type.
    pub fn login(&self) -> Result<User, SessionError> {
        if is_blank(&self.email) || is_blank(&self.password) {
            return Err(SessionError::MissingCredentials);
        }

        Ok(User {
            id: "1".to_string(),
            name: self.user_type.mock_name().to_string(),
            email: self.email.trim().to_string(),
            user_type: self.user_type,
            profile_image: None,
        })
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Registration {
    pub user_type: UserType,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub business_type: String,
    pub description: String,
    pub agree_terms: bool,
    pub agree_privacy: bool,
    pub agree_marketing: bool,
}

impl Registration {
    pub fn validate(&self) -> Result<(), SessionError> {
        if is_blank(&self.email) || is_blank(&self.password) || is_blank(&self.name)
        {
            return Err(SessionError::MissingRequiredFields);
        }
        if self.password != self.confirm_password {
            return Err(SessionError::PasswordMismatch);
        }
        if !self.agree_terms || !self.agree_privacy {
            return Err(SessionError::TermsNotAccepted);
        }
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
