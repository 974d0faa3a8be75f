use serde::{Deserialize, Serialize};

use crate::user::Author;

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: Author,
    pub created_at: String,
    pub like_count: u32,
    pub comment_count: u32,
    pub view_count: u32,
    pub pinned: bool,
    pub tags: Vec<String>,
}
