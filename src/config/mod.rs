//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → CheckerConfig (validated, immutable)
//!     → command-line flags override individual fields
//! ```
//!
//! # Design Decisions
//! - Every field has a default so the tool runs without a config file
//! - Validation separates syntactic (serde) from semantic checks
//! - Only the binary reads configuration; the library core takes none

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{CheckerConfig, HttpConfig, ObservabilityConfig, OutputConfig, OutputFormat};
pub use validation::{validate_config, ValidationError};
