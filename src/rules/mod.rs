//! Rule sets evaluated against a parsed header.
//!
//! # Data Flow
//! ```text
//! DirectiveSet (from header/parser.rs)
//!     → preloadable.rs (may the domain be added to the preload list?)
//!     → removable.rs   (may the domain be removed from it?)
//!     → Issues (errors in a fixed order)
//! ```
//!
//! # Design Decisions
//! - Two closed, pure functions rather than a strategy trait
//! - Every violated rule is reported; nothing short-circuits

pub mod preloadable;
pub mod removable;

pub use preloadable::{evaluate_preloadable, MIN_PRELOAD_MAX_AGE_SECS};
pub use removable::evaluate_removable;
