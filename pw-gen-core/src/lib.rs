//! Quota-based random password generation library.
//!
//! This crate provides a configurable password generator including:
//! - Validated per-class character quotas (`PoolRange`)
//! - Fixed character pools with case-insensitive exclusions
//! - Ready-made configurations (`Preset`)
//! - A generator driven by a cryptographically strong random source,
//!   with a best-effort pass against repeated adjacent characters
//!
//! Internal generation steps are kept crate-private; only the
//! configuration types and the generator entry point are exposed.

/// Password model: ranges, pools, configuration, presets and the generator.
pub mod model;

/// Random source abstraction over `rand` crypto generators.
pub mod random;

mod error;

pub use error::Error;
pub use model::config::PasswordGeneratorConfig;
pub use model::generator::PasswordGenerator;
pub use model::pool::PoolType;
pub use model::preset::Preset;
pub use model::range::PoolRange;
pub use random::{CryptoSource, RandomSource};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
