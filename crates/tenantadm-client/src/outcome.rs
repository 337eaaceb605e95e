//! Three-way verification outcome.

use crate::error::VerifyError;

/// Result of one verification round trip.
#[derive(Debug)]
pub enum VerificationOutcome {
    /// tenantadm accepted the token (200).
    Verified,

    /// tenantadm explicitly rejected the token (401).
    Rejected,

    /// No determination could be made.
    Error(VerifyError),
}

impl VerificationOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    pub fn error(&self) -> Option<&VerifyError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Stable lowercase name, used in logs and machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Rejected => "rejected",
            Self::Error(_) => "error",
        }
    }

    /// `Ok(true)` when verified, `Ok(false)` when rejected.
    pub fn into_result(self) -> Result<bool, VerifyError> {
        match self {
            Self::Verified => Ok(true),
            Self::Rejected => Ok(false),
            Self::Error(e) => Err(e),
        }
    }
}

impl From<VerifyError> for VerificationOutcome {
    fn from(err: VerifyError) -> Self {
        Self::Error(err)
    }
}
