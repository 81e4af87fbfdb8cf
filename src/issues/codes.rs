//! Stable, dot-namespaced issue codes.
//!
//! Callers branch on these strings, so they never change once published.

// Response-level (header selection).
pub const RESPONSE_NO_HEADER: &str = "response.no_header";
pub const RESPONSE_MULTIPLE_HEADERS: &str = "response.multiple_headers";

// Parsing.
pub const PARSE_EMPTY: &str = "header.parse.empty";
pub const PARSE_UNKNOWN_DIRECTIVE: &str = "header.parse.unknown_directive";
pub const PARSE_REPEATED_MAX_AGE: &str = "header.parse.repeated.max_age";
pub const PARSE_REPEATED_INCLUDE_SUB_DOMAINS: &str = "header.parse.repeated.include_sub_domains";
pub const PARSE_REPEATED_PRELOAD: &str = "header.parse.repeated.preload";
pub const PARSE_MAX_AGE_NO_VALUE: &str = "header.parse.invalid.max_age.no_value";
pub const PARSE_MAX_AGE_NON_DIGIT: &str = "header.parse.max_age.non_digit_characters";
pub const PARSE_MAX_AGE_PARSE_INT_ERROR: &str = "header.parse.max_age.parse_int_error";
pub const PARSE_MAX_AGE_OVER_10_YEARS: &str = "header.parse.max_age.over_10_years";
pub const PARSE_INVALID_INCLUDE_SUB_DOMAINS: &str = "header.parse.invalid.include_sub_domains";
pub const PARSE_INVALID_PRELOAD: &str = "header.parse.invalid.preload";

// Preloadable rule set.
pub const PRELOADABLE_PRELOAD_MISSING: &str = "header.preloadable.preload.missing";
pub const PRELOADABLE_INCLUDE_SUB_DOMAINS_MISSING: &str =
    "header.preloadable.include_sub_domains.missing";
pub const PRELOADABLE_MAX_AGE_MISSING: &str = "header.preloadable.max_age.missing";
pub const PRELOADABLE_MAX_AGE_TOO_LOW: &str = "header.preloadable.max_age.too_low";

// Removable rule set.
pub const REMOVABLE_CONTAINS_PRELOAD: &str = "header.removable.contains.preload";
pub const REMOVABLE_MISSING_MAX_AGE: &str = "header.removable.missing.max_age";
