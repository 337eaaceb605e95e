//! Tenant token verification client.
//!
//! Asks the tenant administration service (tenantadm) whether an opaque tenant
//! token is valid and reports one of three outcomes:
//!
//! - [`VerificationOutcome::Verified`] — tenantadm answered 200
//! - [`VerificationOutcome::Rejected`] — tenantadm answered 401
//! - [`VerificationOutcome::Error`] — anything else (bad address, network
//!   failure, deadline, cancellation, unexpected status)
//!
//! The transport is injected per call through [`HttpRunner`], implemented for
//! `reqwest::Client` and by the test doubles in [`runner::fake`].
//!
//! # Quick Start
//!
//! ```no_run
//! use tenantadm_client::{CallContext, TokenVerifier, VerifierConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let verifier = TokenVerifier::new(VerifierConfig::new("http://mender-tenantadm:8080"));
//! let http = reqwest::Client::new();
//!
//! let outcome = verifier
//!     .verify_token(&CallContext::new(), "tenant-token", &http)
//!     .await;
//! if outcome.is_verified() {
//!     println!("tenant token accepted");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `DEVICEAUTH_TENANTADM_ADDR` | tenantadm base address (required) |
//! | `DEVICEAUTH_TENANTADM_TIMEOUT` | Per-call timeout (default: 10s) |

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod outcome;
pub mod requestlog;
pub mod runner;

pub use client::{join_url, TenantTokenVerifier, TokenVerifier, TENANT_VERIFY_URI};
pub use config::{VerifierConfig, DEFAULT_TIMEOUT};
pub use context::CallContext;
pub use error::{ConfigError, ContextError, VerifyError, VerifyResult};
pub use outcome::VerificationOutcome;
pub use requestlog::RequestLog;
pub use runner::HttpRunner;
