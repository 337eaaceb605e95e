//! Exit codes for `tenantadm-verify`.
//! These codes are part of the public contract; scripts branch on them.

use tenantadm_client::{VerificationOutcome, VerifyError};

pub const SUCCESS: i32 = 0;
pub const VERIFIED: i32 = SUCCESS;
pub const REJECTED: i32 = 1; // tenantadm said no (401)
pub const CONFIG_ERROR: i32 = 2; // Bad flags, missing token, missing or malformed address
pub const VERIFY_ERROR: i32 = 3; // No answer: network, timeout, unexpected status

pub fn for_outcome(outcome: &VerificationOutcome) -> i32 {
    match outcome {
        VerificationOutcome::Verified => VERIFIED,
        VerificationOutcome::Rejected => REJECTED,
        VerificationOutcome::Error(VerifyError::Request { .. }) => CONFIG_ERROR,
        VerificationOutcome::Error(_) => VERIFY_ERROR,
    }
}
