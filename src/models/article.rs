//! Editorial article data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog or guide article shown alongside listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    /// URL-safe identifier
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}
