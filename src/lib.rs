//! HSTS preload-list header checks.
//!
//! Decides whether a response's `Strict-Transport-Security` header allows a
//! domain to be added to, or removed from, the browser HSTS preload list.
//!
//! ```text
//! response headers
//!     → header::selector (exactly one HSTS header)
//!     → header::parser   (directives + parse issues)
//!     → rules            (preloadable | removable)
//!     → Issues { errors, warnings }
//! ```

pub mod config;
pub mod fetch;
pub mod header;
pub mod issues;
pub mod observability;
pub mod response;
pub mod rules;

pub use header::{parse_header_string, select_header, DirectiveSet, MaxAge, STRICT_TRANSPORT_SECURITY};
pub use issues::{Issue, Issues};
pub use response::{
    preloadable_header, preloadable_response, removable_header, removable_response,
    ResponseHeaders,
};
