//! Issue reporting subsystem.
//!
//! # Data Flow
//! ```text
//! header/selector.rs   → terminal Issue (no header, multiple headers)
//! header/parser.rs     → parse Issues (warnings + errors)
//! rules/*.rs           → rule Issues (errors)
//!     → Issues::merge
//!     → returned to the caller, owned by it
//! ```
//!
//! # Design Decisions
//! - An issue is identified by its code; summary and message are for humans
//! - Errors and warnings are separate ordered lists, never interleaved
//! - An empty `Issues` is the only pass signal

pub mod codes;
pub mod types;

pub use types::{Issue, Issues};
