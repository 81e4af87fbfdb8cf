//! Shared helpers for integration tests.

use hsts_preload::{Issue, Issues, STRICT_TRANSPORT_SECURITY};
use hyper::header::{HeaderMap, HeaderName, HeaderValue};

/// Build a header map carrying the given HSTS values, in order.
#[allow(dead_code)]
pub fn hsts_response(values: &[&str]) -> HeaderMap {
    let name = HeaderName::from_bytes(STRICT_TRANSPORT_SECURITY.as_bytes()).unwrap();
    let mut headers = HeaderMap::new();
    headers.append("content-type", HeaderValue::from_static("text/html"));
    for value in values {
        headers.append(name.clone(), HeaderValue::from_str(value).unwrap());
    }
    headers
}

/// Issues built from error and warning codes.
#[allow(dead_code)]
pub fn issues(errors: &[&str], warnings: &[&str]) -> Issues {
    Issues {
        errors: errors.iter().map(|c| Issue::new(*c)).collect(),
        warnings: warnings.iter().map(|c| Issue::new(*c)).collect(),
    }
}

#[allow(dead_code)]
pub fn error_codes(issues: &Issues) -> Vec<&str> {
    issues.errors.iter().map(|i| i.code.as_str()).collect()
}
