//! Transport capability: executes one prepared request under a call context.
//!
//! The verifier never owns a transport. Callers pass one per call, which is
//! how tests substitute [`fake`] runners for the network.

use async_trait::async_trait;

use crate::context::CallContext;

pub mod fake;

/// Executes a single prepared request.
///
/// Implementations should stop waiting once `ctx` is done. The verifier
/// enforces the deadline on its side too, so a runner that ignores `ctx`
/// is abandoned rather than waited on.
#[async_trait]
pub trait HttpRunner: Send + Sync {
    async fn run(
        &self,
        ctx: &CallContext,
        request: reqwest::Request,
    ) -> anyhow::Result<reqwest::Response>;
}

#[async_trait]
impl HttpRunner for reqwest::Client {
    async fn run(
        &self,
        ctx: &CallContext,
        mut request: reqwest::Request,
    ) -> anyhow::Result<reqwest::Response> {
        if let Some(remaining) = ctx.remaining() {
            *request.timeout_mut() = Some(remaining);
        }

        let response = ctx.run(self.execute(request)).await??;
        Ok(response)
    }
}
