//! Pure helpers: URL joining and request construction (no I/O, no status logic).

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use url::Url;

use crate::error::{VerifyError, VerifyResult};

/// tenantadm token verification endpoint.
pub const TENANT_VERIFY_URI: &str = "/api/internal/v1/tenantadm/tenants/verify";

/// Join a base address and a path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, path)
}

/// Build the verification request: `POST <addr>/api/.../verify`, no body,
/// `Authorization: Bearer <token>`.
pub(crate) fn build_verify_request(
    tenantadm_addr: &str,
    token: &str,
) -> VerifyResult<reqwest::Request> {
    let target = join_url(tenantadm_addr, TENANT_VERIFY_URI);
    let url = Url::parse(&target).map_err(|e| VerifyError::Request {
        message: format!("invalid address '{}': {}", tenantadm_addr, e),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(VerifyError::Request {
            message: format!("unsupported scheme '{}' in '{}'", url.scheme(), tenantadm_addr),
        });
    }

    // tenant token is passed verbatim in the Authorization header
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
        VerifyError::Request {
            message: "token cannot be sent as a header value".to_string(),
        }
    })?;
    auth.set_sensitive(true);

    let mut request = reqwest::Request::new(Method::POST, url);
    request.headers_mut().insert(AUTHORIZATION, auth);
    Ok(request)
}
