//! Sends one verify request under the call context and turns tenantadm's
//! answer into a [`VerificationOutcome`]. Status codes are read here and
//! nowhere else in the crate.

use reqwest::StatusCode;
use tracing::debug;

use crate::context::CallContext;
use crate::error::VerifyError;
use crate::outcome::VerificationOutcome;
use crate::runner::HttpRunner;

/// Run one verification request and classify the answer.
///
/// The runner future is raced against `ctx`; when the context wins, the
/// runner future is dropped, which aborts whatever it had in flight.
pub(crate) async fn verify_once(
    ctx: &CallContext,
    runner: &dyn HttpRunner,
    request: reqwest::Request,
) -> VerificationOutcome {
    let response = match ctx.run(runner.run(ctx, request)).await {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => return VerifyError::transport(e).into(),
        Err(ctx_err) => return VerifyError::transport(ctx_err).into(),
    };

    let status = response.status();
    debug!(status = status.as_u16(), "tenantadm answered");

    // response body is released when `response` drops at the end of scope
    classify(status)
}

pub(crate) fn classify(status: StatusCode) -> VerificationOutcome {
    match status {
        // 401, verification result negative
        StatusCode::UNAUTHORIZED => VerificationOutcome::Rejected,
        // 200, token verified
        StatusCode::OK => VerificationOutcome::Verified,
        other => VerifyError::UnexpectedStatus {
            status: other.as_u16(),
        }
        .into(),
    }
}
