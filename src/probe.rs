// src/probe.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};

/// What came back from hitting a feed URL. Every variant is meaningful to the
/// classifier, so the probe does not return `Result`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// DNS failure, connection refused, timeout, and friends.
    Failed(String),
    Status(StatusCode),
    /// A response that is somehow absent despite no reported error. Not
    /// producible by the real client, but kept so an inconsistent transport
    /// result can never crash the run.
    Missing,
}

/// Unauthenticated reachability check against a subscription's source URL.
#[async_trait]
pub trait FeedProbe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

pub struct HttpProbe {
    http: HttpClient,
}

impl HttpProbe {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: HttpClient::builder().build()?,
        })
    }
}

#[async_trait]
impl FeedProbe for HttpProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.http.get(url).send().await {
            Ok(response) => ProbeOutcome::Status(response.status()),
            Err(err) => ProbeOutcome::Failed(err.to_string()),
        }
    }
}

/// Test double: maps URL to a canned outcome and records every probe.
#[derive(Default)]
pub struct MockProbe {
    outcomes: Mutex<HashMap<String, ProbeOutcome>>,
    calls: Mutex<Vec<String>>,
}

impl MockProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_outcome(&self, url: &str, outcome: ProbeOutcome) {
        self.outcomes.lock().unwrap().insert(url.to_string(), outcome);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedProbe for MockProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        self.calls.lock().unwrap().push(url.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or(ProbeOutcome::Missing)
    }
}
