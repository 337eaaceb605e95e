//! Per-request logger.
//!
//! A [`RequestLog`] is created once per inbound request and carried through
//! the handler; everything logged inside it is tagged with the request's
//! fields. Layers that learn more about the request (a request id, say) add it
//! with [`RequestLog::set_request_id`].

use std::fmt::Display;
use std::future::Future;

use tracing::instrument::Instrumented;
use tracing::{info_span, Instrument, Span};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RequestLog {
    span: Span,
}

impl RequestLog {
    pub fn new() -> Self {
        Self {
            span: info_span!("request", request_id = tracing::field::Empty),
        }
    }

    /// New log tagged with a random request id.
    pub fn with_generated_id() -> Self {
        let log = Self::new();
        log.set_request_id(Uuid::new_v4());
        log
    }

    pub fn set_request_id(&self, id: impl Display) {
        self.span.record("request_id", tracing::field::display(id));
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Run `fut` inside this request's span.
    pub fn instrument<F: Future>(&self, fut: F) -> Instrumented<F> {
        fut.instrument(self.span.clone())
    }
}

impl Default for RequestLog {
    fn default() -> Self {
        Self::new()
    }
}
