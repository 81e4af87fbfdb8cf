//! Picks the single header value eligible for inspection.

use crate::issues::codes;
use crate::issues::Issue;

/// Select the one HSTS header out of every value received.
///
/// Zero values and more than one value are both terminal: the header content
/// is never looked at in those cases.
pub fn select_header(values: &[String]) -> Result<String, Issue> {
    match values {
        [] => Err(Issue::new(codes::RESPONSE_NO_HEADER)
            .with_summary("No HSTS header")
            .with_message("Response error: No HSTS header is present on the response.")),
        [single] => Ok(single.clone()),
        _ => Err(Issue::new(codes::RESPONSE_MULTIPLE_HEADERS)
            .with_summary("Multiple HSTS headers")
            .with_message(format!(
                "Response error: Multiple HSTS headers (number of HSTS headers: {}).",
                values.len()
            ))),
    }
}
