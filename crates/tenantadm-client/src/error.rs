//! Error types for the tenant administration client.

/// Boxed cause carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a [`CallContext`](crate::CallContext) stopped waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// The context (or one of its parents) was cancelled.
    #[error("context canceled")]
    Canceled,

    /// The context deadline passed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Verification errors.
///
/// A negative answer from tenantadm is not an error; it is reported as
/// [`VerificationOutcome::Rejected`](crate::VerificationOutcome::Rejected).
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The request could not be built (bad base address, unusable token).
    #[error("failed to create request to tenant administrator: {message}")]
    Request { message: String },

    /// Network failure, deadline expiry or cancellation.
    #[error("request to verify token failed: {source}")]
    Transport {
        #[source]
        source: BoxError,
    },

    /// tenantadm answered with a status outside the verification contract.
    #[error("token verification request returned unexpected status {status}")]
    UnexpectedStatus { status: u16 },
}

impl VerifyError {
    pub(crate) fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport {
            source: source.into(),
        }
    }

    /// Whether a caller may reasonably retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request { .. } => false,
            Self::Transport { .. } => true,
            Self::UnexpectedStatus { status } => *status >= 500,
        }
    }

    /// The context error behind a transport failure, if the call was cut
    /// short by cancellation or deadline rather than by the network.
    pub fn context_error(&self) -> Option<ContextError> {
        let Self::Transport { source } = self else {
            return None;
        };

        let mut current: Option<&(dyn std::error::Error + 'static)> = Some(source.as_ref());
        while let Some(err) = current {
            if let Some(ctx_err) = err.downcast_ref::<ContextError>() {
                return Some(*ctx_err);
            }
            current = err.source();
        }
        None
    }
}

/// Configuration errors from [`VerifierConfig::from_env`](crate::VerifierConfig::from_env).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No tenantadm address configured.
    #[error("tenant administrator address not set ({var})")]
    MissingAddr { var: &'static str },

    /// Timeout value is neither a humantime duration nor whole seconds.
    #[error("invalid timeout '{value}': {reason}")]
    InvalidTimeout { value: String, reason: String },
}

/// Result type for verification plumbing.
pub type VerifyResult<T> = Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_message_carries_code() {
        let err = VerifyError::UnexpectedStatus { status: 503 };
        assert_eq!(
            err.to_string(),
            "token verification request returned unexpected status 503"
        );
        assert!(err.is_retryable());
        assert!(!VerifyError::UnexpectedStatus { status: 403 }.is_retryable());
    }

    #[test]
    fn test_context_error_found_in_chain() {
        let err = VerifyError::transport(ContextError::DeadlineExceeded);
        assert_eq!(err.context_error(), Some(ContextError::DeadlineExceeded));
        assert_eq!(
            err.to_string(),
            "request to verify token failed: context deadline exceeded"
        );
    }

    #[test]
    fn test_context_error_behind_anyhow() {
        let cause = anyhow::Error::new(ContextError::Canceled).context("runner gave up");
        let err = VerifyError::transport(cause);
        assert_eq!(err.context_error(), Some(ContextError::Canceled));
    }

    #[test]
    fn test_network_failure_has_no_context_error() {
        let err = VerifyError::transport(anyhow::anyhow!("connection refused"));
        assert!(err.context_error().is_none());
        assert!(err.is_retryable());
    }
}
