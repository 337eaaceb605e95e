//! In-memory runners for tests of code that verifies tokens.

use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;
use tokio::time::Instant;

use super::HttpRunner;
use crate::context::CallContext;

/// What a fake runner saw of a request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    /// Deadline of the context the request was run under.
    pub deadline: Option<Instant>,
}

impl RecordedRequest {
    fn capture(ctx: &CallContext, request: &reqwest::Request) -> Self {
        Self {
            method: request.method().clone(),
            url: request.url().to_string(),
            path: request.url().path().to_string(),
            headers: request.headers().clone(),
            body: request
                .body()
                .and_then(|b| b.as_bytes())
                .map(|b| b.to_vec()),
            deadline: ctx.deadline(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Answers every request with a fixed status and records what it was sent.
#[derive(Debug, Clone)]
pub struct StaticRunner {
    status: u16,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StaticRunner {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HttpRunner for StaticRunner {
    async fn run(
        &self,
        ctx: &CallContext,
        request: reqwest::Request,
    ) -> anyhow::Result<reqwest::Response> {
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(RecordedRequest::capture(ctx, &request));
        }

        let response = ::http::Response::builder()
            .status(self.status)
            .body(self.body.clone())?;
        Ok(reqwest::Response::from(response))
    }
}

/// Fails every request immediately, like a refused connection.
#[derive(Debug, Clone)]
pub struct FailingRunner {
    message: String,
}

impl FailingRunner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl HttpRunner for FailingRunner {
    async fn run(
        &self,
        _ctx: &CallContext,
        _request: reqwest::Request,
    ) -> anyhow::Result<reqwest::Response> {
        Err(anyhow::anyhow!("{}", self.message))
    }
}

/// Never answers and ignores its context; counts calls started and calls
/// abandoned by the caller.
#[derive(Debug, Clone, Default)]
pub struct PendingRunner {
    started: Arc<AtomicUsize>,
    abandoned: Arc<AtomicUsize>,
}

struct AbandonOnDrop(Arc<AtomicUsize>);

impl Drop for AbandonOnDrop {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

impl PendingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn abandoned(&self) -> usize {
        self.abandoned.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpRunner for PendingRunner {
    async fn run(
        &self,
        _ctx: &CallContext,
        _request: reqwest::Request,
    ) -> anyhow::Result<reqwest::Response> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let _abandon = AbandonOnDrop(self.abandoned.clone());

        let never: Infallible = std::future::pending().await;
        match never {}
    }
}
