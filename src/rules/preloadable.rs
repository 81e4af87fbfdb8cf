//! Requirements for adding a domain to the HSTS preload list.

use crate::header::DirectiveSet;
use crate::issues::codes;
use crate::issues::{Issue, Issues};

/// Minimum accepted max-age: 18 weeks.
pub const MIN_PRELOAD_MAX_AGE_SECS: u64 = 18 * 7 * 24 * 60 * 60;

/// Check a parsed header against the preload requirements.
///
/// Errors come out as: preload, includeSubDomains, then max-age.
pub fn evaluate_preloadable(directives: &DirectiveSet) -> Issues {
    let mut issues = Issues::new();

    if !directives.preload {
        issues.add_error(
            Issue::new(codes::PRELOADABLE_PRELOAD_MISSING)
                .with_summary("No preload directive")
                .with_message("Header requirement error: The header must contain the `preload` directive."),
        );
    }

    if !directives.include_sub_domains {
        issues.add_error(
            Issue::new(codes::PRELOADABLE_INCLUDE_SUB_DOMAINS_MISSING)
                .with_summary("No includeSubDomains directive")
                .with_message("Header requirement error: The header must contain the `includeSubDomains` directive."),
        );
    }

    match &directives.max_age {
        None => issues.add_error(
            Issue::new(codes::PRELOADABLE_MAX_AGE_MISSING)
                .with_summary("No max-age directive")
                .with_message("Header requirement error: The header must contain a valid `max-age` directive."),
        ),
        Some(max_age) if max_age.seconds < MIN_PRELOAD_MAX_AGE_SECS => issues.add_error(
            Issue::new(codes::PRELOADABLE_MAX_AGE_TOO_LOW)
                .with_summary("Max-age too low")
                .with_message(format!(
                    "The max-age must be at least {} seconds (== 18 weeks), but the header currently only has max-age={}.",
                    MIN_PRELOAD_MAX_AGE_SECS, max_age.literal
                )),
        ),
        Some(_) => {}
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::MaxAge;

    fn max_age(seconds: u64) -> Option<MaxAge> {
        Some(MaxAge {
            seconds,
            literal: seconds.to_string(),
        })
    }

    fn codes_of(issues: &Issues) -> Vec<&str> {
        issues.errors.iter().map(|i| i.code.as_str()).collect()
    }

    #[test]
    fn test_eighteen_weeks() {
        assert_eq!(MIN_PRELOAD_MAX_AGE_SECS, 10_886_400);
    }

    #[test]
    fn test_preloadable() {
        let ds = DirectiveSet {
            max_age: max_age(MIN_PRELOAD_MAX_AGE_SECS),
            include_sub_domains: true,
            preload: true,
            malformed: vec![],
        };
        assert!(evaluate_preloadable(&ds).is_empty());
    }

    #[test]
    fn test_all_missing_in_order() {
        let issues = evaluate_preloadable(&DirectiveSet::default());
        assert_eq!(
            codes_of(&issues),
            vec![
                codes::PRELOADABLE_PRELOAD_MISSING,
                codes::PRELOADABLE_INCLUDE_SUB_DOMAINS_MISSING,
                codes::PRELOADABLE_MAX_AGE_MISSING,
            ]
        );
        assert!(issues.warnings.is_empty());
    }

    #[test]
    fn test_max_age_too_low() {
        let ds = DirectiveSet {
            max_age: max_age(MIN_PRELOAD_MAX_AGE_SECS - 1),
            include_sub_domains: true,
            preload: true,
            malformed: vec![],
        };
        let issues = evaluate_preloadable(&ds);
        assert_eq!(codes_of(&issues), vec![codes::PRELOADABLE_MAX_AGE_TOO_LOW]);
        let message = issues.errors[0].message.as_deref().unwrap();
        assert!(message.contains("10886400 seconds"));
        assert!(message.contains("max-age=10886399"));
    }

    #[test]
    fn test_malformed_tokens_do_not_fail_rules() {
        let ds = DirectiveSet {
            max_age: max_age(31_536_000),
            include_sub_domains: true,
            preload: true,
            malformed: vec!["foo".to_string()],
        };
        assert!(evaluate_preloadable(&ds).is_empty());
    }
}
