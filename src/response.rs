//! Top-level checks over an HTTP response or a raw header string.
//!
//! # Responsibilities
//! - Read every Strict-Transport-Security value from a response
//! - Run selection, parsing and one rule set
//! - Merge parse and rule issues into one result
//!
//! # Design Decisions
//! - The response is borrowed read-only; nothing is cached between calls
//! - Selection failure is terminal and returned as the only error
//! - Header names match case-insensitively, as HTTP requires

use hyper::header::HeaderMap;
use hyper::Response;
use tracing::debug;

use crate::header::{parse_header_string, select_header, STRICT_TRANSPORT_SECURITY};
use crate::issues::Issues;
use crate::rules::{evaluate_preloadable, evaluate_removable};

/// Anything that can list all values received for a header name.
///
/// Implementations must keep wire order and duplicates.
pub trait ResponseHeaders {
    fn header_values(&self, name: &str) -> Vec<String>;
}

impl ResponseHeaders for HeaderMap {
    fn header_values(&self, name: &str) -> Vec<String> {
        self.get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect()
    }
}

impl<B> ResponseHeaders for Response<B> {
    fn header_values(&self, name: &str) -> Vec<String> {
        self.headers().header_values(name)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> ResponseHeaders for [(K, V)] {
    fn header_values(&self, name: &str) -> Vec<String> {
        self.iter()
            .filter(|(k, _)| k.as_ref().trim().eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_ref().to_string())
            .collect()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> ResponseHeaders for Vec<(K, V)> {
    fn header_values(&self, name: &str) -> Vec<String> {
        self.as_slice().header_values(name)
    }
}

#[derive(Debug, Clone, Copy)]
enum RuleSet {
    Preloadable,
    Removable,
}

fn check_header(header: &str, rules: RuleSet) -> Issues {
    let (directives, parse_issues) = parse_header_string(header);
    let rule_issues = match rules {
        RuleSet::Preloadable => evaluate_preloadable(&directives),
        RuleSet::Removable => evaluate_removable(&directives),
    };
    let issues = parse_issues.merge(rule_issues);

    debug!(
        header,
        rule_set = ?rules,
        errors = issues.errors.len(),
        warnings = issues.warnings.len(),
        "HSTS header evaluated"
    );
    issues
}

fn check_response<R: ResponseHeaders + ?Sized>(
    resp: &R,
    rules: RuleSet,
) -> (Option<String>, Issues) {
    let values = resp.header_values(STRICT_TRANSPORT_SECURITY);
    match select_header(&values) {
        Ok(header) => {
            let issues = check_header(&header, rules);
            (Some(header), issues)
        }
        Err(issue) => {
            debug!(code = %issue.code, count = values.len(), "no single HSTS header to evaluate");
            (None, Issues::from_error(issue))
        }
    }
}

/// Check a raw header value against the preload-list requirements.
pub fn preloadable_header(header: &str) -> Issues {
    check_header(header, RuleSet::Preloadable)
}

/// Check a raw header value against the preload-list removal requirements.
pub fn removable_header(header: &str) -> Issues {
    check_header(header, RuleSet::Removable)
}

/// Check a response's HSTS header against the preload-list requirements.
///
/// Returns the header that was inspected, if exactly one was present.
pub fn preloadable_response<R: ResponseHeaders + ?Sized>(resp: &R) -> (Option<String>, Issues) {
    check_response(resp, RuleSet::Preloadable)
}

/// Check a response's HSTS header against the removal requirements.
pub fn removable_response<R: ResponseHeaders + ?Sized>(resp: &R) -> (Option<String>, Issues) {
    check_response(resp, RuleSet::Removable)
}
