use thiserror::Error;

use crate::model::pool::PoolType;

/// Errors raised while building a configuration or generating a password.
///
/// Every failure is returned synchronously to the caller of
/// `PasswordGenerator::generate`; no partial password is ever produced.
#[derive(Debug, Error)]
pub enum Error {
	/// A `PoolRange` was built with `min < 0` or `max < min`.
	#[error("invalid pool range: min must be >= 0 and max must be >= min (got {min}..={max})")]
	InvalidRange {
		/// Requested lower bound.
		min: i64,
		/// Requested upper bound.
		max: i64,
	},

	/// Every character of a pool that may need to draw was excluded.
	#[error("the pool '{0}' is empty")]
	EmptyPool(PoolType),

	/// The secure random source could not supply entropy.
	#[error("random source failure: {0}")]
	RandomSource(String),

	/// The drawn password length cannot be represented or allocated.
	#[error("password too long to allocate")]
	PasswordTooLong,

	/// The configuration allows passwords longer than the caller accepts.
	#[error("configuration allows up to {max} characters, limit is {limit}")]
	LengthLimit {
		/// Longest password the configuration can produce.
		max: usize,
		/// Largest accepted length.
		limit: usize,
	},

	/// No preset is registered under the given name.
	#[error("unknown preset '{0}'")]
	UnknownPreset(String),
}
