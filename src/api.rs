// src/api.rs
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use url::Url;

use crate::config::Credentials;
use crate::subscription::Subscriptions;

/// Authenticated access to the subscription endpoints of the feed service.
#[async_trait]
pub trait SubscriptionApi: Send + Sync {
    /// `GET {base}/subscriptions.json`
    async fn fetch_subscriptions(&self) -> Result<Subscriptions, ApiError>;
    /// `DELETE {base}/subscriptions/{id}.json` — success is exactly 204.
    async fn delete_subscription(&self, id: i64) -> Result<(), ApiError>;
}

/// Real client against the Feedbin v2 API. One outbound call per invocation,
/// no retries, transport defaults untouched.
pub struct FeedbinClient {
    http: HttpClient,
    base: Url,
    username: String,
    password: String,
}

impl FeedbinClient {
    pub fn new(cred: &Credentials) -> Result<Self, ApiError> {
        // Url::join treats a base without a trailing slash as having a last
        // path segment to replace, so normalize before parsing.
        let mut base_url = cred.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base = Url::parse(&base_url).map_err(ApiError::BaseUrl)?;
        let http = HttpClient::builder().build().map_err(ApiError::Http)?;
        Ok(Self {
            http,
            base,
            username: cred.username.clone(),
            password: cred.password.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(ApiError::BaseUrl)
    }
}

#[async_trait]
impl SubscriptionApi for FeedbinClient {
    async fn fetch_subscriptions(&self) -> Result<Subscriptions, ApiError> {
        let endpoint = self.endpoint("subscriptions.json")?;
        let response = self
            .http
            .get(endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(ApiError::Http)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::Http)?;

        if status != StatusCode::OK {
            return Err(ApiError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice(&body).map_err(ApiError::Decode)
    }

    async fn delete_subscription(&self, id: i64) -> Result<(), ApiError> {
        let endpoint = self.endpoint(&format!("subscriptions/{id}.json"))?;
        let response = self
            .http
            .delete(endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(ApiError::Http)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::Http)?;

        if status != StatusCode::NO_CONTENT {
            return Err(ApiError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ApiError {
    BaseUrl(url::ParseError),
    Http(reqwest::Error),
    Status { status: StatusCode, body: String },
    Decode(serde_json::Error),
    MissingId,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BaseUrl(err) => write!(f, "invalid base url: {err}"),
            ApiError::Http(err) => write!(f, "http error: {err}"),
            ApiError::Status { status, body } => {
                write!(f, "api error {status}: {body}")
            }
            ApiError::Decode(err) => write!(f, "decode error: {err}"),
            ApiError::MissingId => write!(f, "subscription has no id"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::BaseUrl(err) => Some(err),
            ApiError::Http(err) => Some(err),
            ApiError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

/// Recording double for orchestrator tests.
#[derive(Default)]
pub struct MockApi {
    list_response: Mutex<Option<Result<Subscriptions, ApiError>>>,
    delete_responses: Mutex<VecDeque<Result<(), ApiError>>>,
    deletes: Mutex<Vec<i64>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_list_response(&self, resp: Result<Subscriptions, ApiError>) {
        *self.list_response.lock().unwrap() = Some(resp);
    }

    pub fn push_delete_response(&self, resp: Result<(), ApiError>) {
        self.delete_responses.lock().unwrap().push_back(resp);
    }

    /// Ids passed to `delete_subscription`, in call order.
    pub fn deletes(&self) -> Vec<i64> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubscriptionApi for MockApi {
    async fn fetch_subscriptions(&self) -> Result<Subscriptions, ApiError> {
        self.list_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn delete_subscription(&self, id: i64) -> Result<(), ApiError> {
        self.deletes.lock().unwrap().push(id);
        self.delete_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}
