// src/subscription.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One Feedbin subscription, as returned by `GET /subscriptions.json`.
/// Every field is optional on the wire; a record is never mutated once decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
}

/// Server response order, kept as-is for deterministic log output.
pub type Subscriptions = Vec<Subscription>;
