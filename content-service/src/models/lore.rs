use super::Stored;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lore {
    pub title: String,
    /// Kingdom, region or faction.
    pub region: Option<String>,
    pub excerpt: Option<String>,
    /// Full entry, markdown allowed.
    pub content: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Stored for Lore {
    const COLLECTION: &'static str = "lore";
}

impl Lore {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            region: None,
            excerpt: None,
            content: content.into(),
            image_url: None,
            tags: Vec::new(),
        }
    }
}
