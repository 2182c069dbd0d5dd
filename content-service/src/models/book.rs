use super::Stored;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub title: String,
    pub subtitle: Option<String>,
    /// Short blurb shown in listings.
    pub description: String,
    pub cover_url: Option<String>,
    /// External purchase link.
    pub buy_link: Option<String>,
    /// Genres or tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Shown as featured on the homepage.
    #[serde(default)]
    pub featured: bool,
}

impl Stored for Book {
    const COLLECTION: &'static str = "book";
}

impl Book {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            description: description.into(),
            cover_url: None,
            buy_link: None,
            tags: Vec::new(),
            featured: false,
        }
    }
}
