//! Requirements for removing a domain from the HSTS preload list.

use crate::header::DirectiveSet;
use crate::issues::codes;
use crate::issues::{Issue, Issues};

/// Check a parsed header against the removal requirements.
///
/// The header must still send a max-age (any value) and must not ask for
/// preloading. includeSubDomains is irrelevant here.
pub fn evaluate_removable(directives: &DirectiveSet) -> Issues {
    let mut issues = Issues::new();

    if directives.preload {
        issues.add_error(
            Issue::new(codes::REMOVABLE_CONTAINS_PRELOAD)
                .with_summary("Contains preload directive")
                .with_message("Header requirement error: For preload list removal, the header must not contain the `preload` directive."),
        );
    }

    if directives.max_age.is_none() {
        issues.add_error(
            Issue::new(codes::REMOVABLE_MISSING_MAX_AGE)
                .with_summary("No max-age directive")
                .with_message("Header requirement error: For preload list removal, the header must contain a valid `max-age` directive."),
        );
    }

    issues
}
