//! Query parameters for the list endpoints.
//!
//! `limit` is range-checked by `validator`; booleans accept the usual
//! spellings (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`, `t`/`f`,
//! `y`/`n`) in any case.
use bson::{doc, Document};
use serde::{de, Deserialize, Deserializer};
use validator::Validate;

pub const MAX_LIMIT: i64 = 50;

fn default_book_limit() -> i64 {
    12
}

fn default_lore_limit() -> i64 {
    6
}

fn default_post_limit() -> i64 {
    3
}

fn default_published() -> bool {
    true
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid boolean value `{}`", raw)))
}

fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    flag(deserializer).map(Some)
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookListParams {
    #[serde(default, deserialize_with = "optional_flag")]
    pub featured: Option<bool>,
    #[serde(default = "default_book_limit")]
    #[validate(range(min = 1, max = 50))]
    pub limit: i64,
}

impl BookListParams {
    /// `featured` narrows the listing only when the caller supplied it.
    pub fn filter(&self) -> Document {
        let mut filter = Document::new();
        if let Some(featured) = self.featured {
            filter.insert("featured", featured);
        }
        filter
    }
}

impl Default for BookListParams {
    fn default() -> Self {
        Self {
            featured: None,
            limit: default_book_limit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoreListParams {
    #[serde(default = "default_lore_limit")]
    #[validate(range(min = 1, max = 50))]
    pub limit: i64,
}

impl Default for LoreListParams {
    fn default() -> Self {
        Self {
            limit: default_lore_limit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostListParams {
    #[serde(default = "default_published", deserialize_with = "flag")]
    pub published: bool,
    #[serde(default = "default_post_limit")]
    #[validate(range(min = 1, max = 50))]
    pub limit: i64,
}

impl PostListParams {
    /// Unlike books, the `published` condition is always part of the filter.
    pub fn filter(&self) -> Document {
        doc! { "published": self.published }
    }
}

impl Default for PostListParams {
    fn default() -> Self {
        Self {
            published: default_published(),
            limit: default_post_limit(),
        }
    }
}
