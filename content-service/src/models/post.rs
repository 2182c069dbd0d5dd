use super::Stored;
use serde::{Deserialize, Serialize};

fn default_published() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub title: String,
    /// Short summary for listings.
    pub excerpt: Option<String>,
    /// Full post, markdown allowed.
    pub content: String,
    /// Hero image.
    pub cover_url: Option<String>,
    /// Author display name.
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_published")]
    pub published: bool,
}

impl Stored for Post {
    const COLLECTION: &'static str = "post";
}

impl Post {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            excerpt: None,
            content: content.into(),
            cover_url: None,
            author: None,
            tags: Vec::new(),
            published: default_published(),
        }
    }
}
