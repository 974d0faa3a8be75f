use std::{collections::HashMap, sync::Arc};

use entity::prelude::*;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// Signed-in users by opaque token. Lives as long as the process.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, User>>>,
}

impl SessionStore {
    pub async fn open(&self, user: User) -> String {
        let token = Uuid::new_v4().to_string();
        info!(task = "open session", user_type = %user.user_type);
        self.sessions.write().await.insert(token.clone(), user);
        token
    }

    pub async fn resolve(&self, token: &str) -> Session {
        match self.sessions.read().await.get(token) {
            Some(user) => Session::Authenticated(user.clone()),
            None => Session::Anonymous,
        }
    }

    /// Forgets `token`. Whatever it named, the caller is anonymous afterwards.
    pub async fn close(&self, token: &str) -> Session {
        if self.sessions.write().await.remove(token).is_some() {
            info!(task = "close session");
        }
        Session::Anonymous
    }
}
