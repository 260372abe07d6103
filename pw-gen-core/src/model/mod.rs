//! Top-level module for the password model.
//!
//! This module groups:
//! - Validated per-class bounds (`PoolRange`)
//! - The fixed character pools (`CharacterPool`, `PoolType`)
//! - The immutable generation settings (`PasswordGeneratorConfig`)
//! - Named ready-made settings (`Preset`)
//! - The generation algorithm itself (`PasswordGenerator`)

/// Inclusive `[min, max]` bounds for one character class.
pub mod range;

/// Fixed character pools and exclusion filtering.
pub mod pool;

/// Immutable aggregate of four ranges, start rule and exclusions.
pub mod config;

/// Named factory configurations.
pub mod preset;

/// Password generation: quota sampling, population, shuffle and repair.
pub mod generator;
