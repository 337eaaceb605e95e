//! Tenant token verifier.
//!
//! Builds the verify request and bounds each call with the configured timeout.
//! Deciding what tenantadm's answer means is left to `http.rs`.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::{VerifierConfig, DEFAULT_TIMEOUT};
use crate::context::CallContext;
use crate::error::ConfigError;
use crate::outcome::VerificationOutcome;
use crate::runner::HttpRunner;

mod helpers;
mod http;

pub use helpers::{join_url, TENANT_VERIFY_URI};

/// Seam for services that gate requests on tenant tokens, so they can hold
/// `Arc<dyn TenantTokenVerifier>` and swap in a fake.
#[async_trait]
pub trait TenantTokenVerifier: Send + Sync {
    async fn verify_token(
        &self,
        ctx: &CallContext,
        token: &str,
        runner: &dyn HttpRunner,
    ) -> VerificationOutcome;
}

/// Verifies tenant tokens against tenantadm.
///
/// Stateless between calls; share one instance across tasks.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    config: VerifierConfig,
}

impl TokenVerifier {
    /// Create a verifier. A zero timeout is replaced by [`DEFAULT_TIMEOUT`].
    pub fn new(mut config: VerifierConfig) -> Self {
        if config.timeout.is_zero() {
            config.timeout = DEFAULT_TIMEOUT;
        }
        Self { config }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(VerifierConfig::from_env()?))
    }

    /// Upper bound on how long one call waits for tenantadm.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    pub fn tenantadm_addr(&self) -> &str {
        &self.config.tenantadm_addr
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Ask tenantadm whether `token` is valid.
    ///
    /// Makes exactly one request, bounded by the earlier of the configured
    /// timeout and `ctx`'s own deadline. Cancelling `ctx` aborts the call.
    /// The token is forwarded as given; it is never logged.
    pub async fn verify_token(
        &self,
        ctx: &CallContext,
        token: &str,
        runner: &dyn HttpRunner,
    ) -> VerificationOutcome {
        let request = match helpers::build_verify_request(&self.config.tenantadm_addr, token) {
            Ok(request) => request,
            Err(e) => return e.into(),
        };

        let (ctx, _release) = ctx.with_timeout(self.config.timeout);

        debug!(
            url = %request.url(),
            timeout_ms = self.config.timeout.as_millis() as u64,
            "verifying tenant token"
        );

        http::verify_once(&ctx, runner, request).await
    }
}

#[async_trait]
impl TenantTokenVerifier for TokenVerifier {
    async fn verify_token(
        &self,
        ctx: &CallContext,
        token: &str,
        runner: &dyn HttpRunner,
    ) -> VerificationOutcome {
        TokenVerifier::verify_token(self, ctx, token, runner).await
    }
}
