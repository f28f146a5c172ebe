//! Event data structure.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of second-hand sale an event represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    GarageSale,
    FleaMarket,
    PopUp,
    Consignment,
}

impl EventCategory {
    /// Every category, in display order.
    pub const ALL: [EventCategory; 4] = [
        EventCategory::GarageSale,
        EventCategory::FleaMarket,
        EventCategory::PopUp,
        EventCategory::Consignment,
    ];

    /// Wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::GarageSale => "garage-sale",
            EventCategory::FleaMarket => "flea-market",
            EventCategory::PopUp => "pop-up",
            EventCategory::Consignment => "consignment",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sale event as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Backend identifier
    pub id: String,

    pub title: String,

    pub description: String,

    /// Free-form location text (address or venue)
    pub location: String,

    /// When the event takes place
    pub date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Display price (e.g. "Free", "$5 entry")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    pub category: EventCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Event {
    /// Whether the event is flagged for promotional placement.
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}
