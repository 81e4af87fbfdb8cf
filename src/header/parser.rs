//! Directive parsing for a single HSTS header value.
//!
//! # Responsibilities
//! - Split the header on `;` and trim each directive
//! - Recognise `max-age=<digits>`, `includeSubDomains` and `preload`
//! - Record duplicates, bad values and unknown tokens as Issues
//!
//! # Design Decisions
//! - The first valid `max-age` wins; later valid ones are reported once and ignored
//! - Each invalid `max-age` gets its own value error, wherever it appears
//! - A repeated directive is reported once, however often it repeats
//! - Empty directives (`a;;b`, trailing `;`) are skipped silently
//! - The literal max-age text is kept so messages quote the header verbatim

use tracing::trace;

use crate::issues::codes;
use crate::issues::{Issue, Issues};

/// Ten years in seconds. Larger values are legal but suspicious.
pub const TEN_YEARS_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// A parsed `max-age` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxAge {
    /// Parsed value in seconds.
    pub seconds: u64,

    /// The value exactly as written in the header (e.g. `"0100"`).
    pub literal: String,
}

/// Directives recognised in one header value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveSet {
    pub max_age: Option<MaxAge>,
    pub include_sub_domains: bool,
    pub preload: bool,

    /// Tokens that matched no known directive, in input order.
    pub malformed: Vec<String>,
}

/// How often each directive has been accepted so far.
#[derive(Default)]
struct Occurrences {
    max_age: u32,
    include_sub_domains: u32,
    preload: u32,
}

/// Parse a raw header value into its directives.
pub fn parse_header_string(header: &str) -> (DirectiveSet, Issues) {
    let mut directives = DirectiveSet::default();
    let mut issues = Issues::new();

    if header.trim().is_empty() {
        issues.add_warning(
            Issue::new(codes::PARSE_EMPTY)
                .with_summary("Empty header")
                .with_message("Syntax warning: The HSTS header is empty."),
        );
        return (directives, issues);
    }

    let mut seen = Occurrences::default();
    for token in header.split(';').map(str::trim).filter(|t| !t.is_empty()) {
        let (name, value) = match token.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (token, None),
        };
        trace!(directive = name, value = ?value, "parsing HSTS directive");

        match name.to_ascii_lowercase().as_str() {
            "max-age" => {
                let Some(max_age) = parse_max_age(value, &mut issues) else {
                    continue;
                };
                seen.max_age += 1;
                if seen.max_age == 1 {
                    directives.max_age = Some(max_age);
                } else if seen.max_age == 2 {
                    issues.add_error(
                        Issue::new(codes::PARSE_REPEATED_MAX_AGE)
                            .with_summary("Repeated max-age directive")
                            .with_message("Syntax error: The header contains max-age more than once; only the first valid one is used."),
                    );
                }
            }
            "includesubdomains" => {
                if value.is_some() {
                    issues.add_error(
                        Issue::new(codes::PARSE_INVALID_INCLUDE_SUB_DOMAINS)
                            .with_summary("Invalid includeSubDomains directive")
                            .with_message(format!(
                                "Syntax error: includeSubDomains must not have a value, but the header contains `{}`.",
                                token
                            )),
                    );
                    continue;
                }
                seen.include_sub_domains += 1;
                directives.include_sub_domains = true;
                if seen.include_sub_domains == 2 {
                    issues.add_error(
                        Issue::new(codes::PARSE_REPEATED_INCLUDE_SUB_DOMAINS)
                            .with_summary("Repeated includeSubDomains directive")
                            .with_message("Syntax error: The header contains includeSubDomains more than once."),
                    );
                }
            }
            "preload" => {
                if value.is_some() {
                    issues.add_error(
                        Issue::new(codes::PARSE_INVALID_PRELOAD)
                            .with_summary("Invalid preload directive")
                            .with_message(format!(
                                "Syntax error: preload must not have a value, but the header contains `{}`.",
                                token
                            )),
                    );
                    continue;
                }
                seen.preload += 1;
                directives.preload = true;
                if seen.preload == 2 {
                    issues.add_error(
                        Issue::new(codes::PARSE_REPEATED_PRELOAD)
                            .with_summary("Repeated preload directive")
                            .with_message("Syntax error: The header contains preload more than once."),
                    );
                }
            }
            _ => {
                issues.add_warning(
                    Issue::new(codes::PARSE_UNKNOWN_DIRECTIVE)
                        .with_summary("Unknown directive")
                        .with_message(format!(
                            "Syntax warning: The header contains an unknown directive: `{}`.",
                            token
                        )),
                );
                directives.malformed.push(token.to_string());
            }
        }
    }

    (directives, issues)
}

/// Validate one `max-age` value. Every occurrence is checked, not only the first.
fn parse_max_age(value: Option<&str>, issues: &mut Issues) -> Option<MaxAge> {
    let literal = match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            issues.add_error(
                Issue::new(codes::PARSE_MAX_AGE_NO_VALUE)
                    .with_summary("Max-age has no value")
                    .with_message("Syntax error: A max-age directive name is present without an associated value."),
            );
            return None;
        }
    };

    if !literal.bytes().all(|b| b.is_ascii_digit()) {
        issues.add_error(
            Issue::new(codes::PARSE_MAX_AGE_NON_DIGIT)
                .with_summary("Invalid max-age value")
                .with_message(format!(
                    "Syntax error: The max-age value contains characters that are not digits: `max-age={}`.",
                    literal
                )),
        );
        return None;
    }

    let seconds = match literal.parse::<u64>() {
        Ok(seconds) => seconds,
        Err(e) => {
            issues.add_error(
                Issue::new(codes::PARSE_MAX_AGE_PARSE_INT_ERROR)
                    .with_summary("Invalid max-age value")
                    .with_message(format!(
                        "Syntax error: Could not parse max-age value `{}`: {}.",
                        literal, e
                    )),
            );
            return None;
        }
    };

    if seconds > TEN_YEARS_SECS {
        issues.add_warning(
            Issue::new(codes::PARSE_MAX_AGE_OVER_10_YEARS)
                .with_summary("Max-age too high")
                .with_message(format!(
                    "FYI: The max-age ({} seconds) is longer than 10 years, which is an unusually long value.",
                    seconds
                )),
        );
    }

    Some(MaxAge {
        seconds,
        literal: literal.to_string(),
    })
}
