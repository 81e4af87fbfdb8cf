//! Strict-Transport-Security header handling.
//!
//! # Data Flow
//! ```text
//! all values received for Strict-Transport-Security
//!     → selector.rs (exactly one header, or a terminal Issue)
//!     → parser.rs (directives + parse Issues)
//!     → DirectiveSet handed to the rule sets
//! ```
//!
//! # Design Decisions
//! - Directive names are case-insensitive; max-age values are digits only
//! - Malformed input never aborts parsing, it becomes an Issue
//! - Only the HSTS directive grammar is modelled, not generic header syntax

pub mod parser;
pub mod selector;

pub use parser::{parse_header_string, DirectiveSet, MaxAge};
pub use selector::select_header;

/// Canonical name of the HSTS response header.
pub const STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
