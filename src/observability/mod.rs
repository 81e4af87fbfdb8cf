//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! library (header/, rules/, response.rs)
//!     → tracing events (debug!, trace!)
//! binary (main.rs)
//!     → logging.rs installs the subscriber
//!     → stderr, so stdout stays a clean report
//! ```
//!
//! # Design Decisions
//! - The library only emits events; it never installs a subscriber
//! - RUST_LOG wins over the configured level

pub mod logging;

pub use logging::init_logging;
