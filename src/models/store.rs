//! Store data structure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opening and closing time for one day, as display strings (e.g. "09:00").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpeningHours {
    pub open: String,
    pub close: String,
}

/// A permanent thrift or consignment store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,

    pub name: String,

    pub description: String,

    /// Street address
    pub address: String,

    pub city: String,

    pub state: String,

    pub zip_code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Opening hours keyed by day name (e.g. "monday")
    #[serde(default)]
    pub hours: BTreeMap<String, OpeningHours>,

    #[serde(default)]
    pub categories: Vec<String>,

    /// Image URLs in display order
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Store {
    /// Whether the store is flagged for promotional placement.
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// Hours for a day name, matched case-insensitively.
    pub fn hours_for(&self, day: &str) -> Option<&OpeningHours> {
        self.hours
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(day))
            .map(|(_, hours)| hours)
    }
}
