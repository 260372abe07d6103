//! Random source used by the generator.
//!
//! The generator only needs two capabilities: a uniform integer in an
//! inclusive range, and a uniform permutation of a slice. Both must be
//! backed by a cryptographically strong generator, and both are fallible
//! so that an entropy failure reaches the caller instead of silently
//! degrading to weak randomness.

use rand::{TryCryptoRng, TryRngCore};
use rand::rngs::OsRng;

use crate::{Error, Result};

/// Cryptographically strong source of uniform integers and permutations.
pub trait RandomSource {
	/// Returns an integer drawn uniformly from `[min, max]` (inclusive).
	///
	/// Callers guarantee `min <= max`.
	fn int_in_range(&mut self, min: usize, max: usize) -> Result<usize>;

	/// Permutes `items` uniformly at random (Fisher-Yates).
	fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()> {
		for i in (1..items.len()).rev() {
			let j = self.int_in_range(0, i)?;
			items.swap(i, j);
		}
		Ok(())
	}
}

/// `RandomSource` backed by any `rand` crypto generator.
///
/// Integer draws use rejection sampling over 64-bit words, so every value
/// in the range is exactly equally likely.
#[derive(Debug, Default)]
pub struct CryptoSource<R> {
	rng: R,
}

impl CryptoSource<OsRng> {
	/// Source reading from the operating system generator.
	pub fn os() -> Self {
		Self { rng: OsRng }
	}
}

impl<R: TryCryptoRng> CryptoSource<R> {
	/// Wraps an existing crypto generator.
	pub fn new(rng: R) -> Self {
		Self { rng }
	}

	fn next_u64(&mut self) -> Result<u64> {
		self.rng.try_next_u64().map_err(|e| Error::RandomSource(e.to_string()))
	}
}

impl<R: TryCryptoRng> RandomSource for CryptoSource<R> {
	fn int_in_range(&mut self, min: usize, max: usize) -> Result<usize> {
		debug_assert!(min <= max);
		let span = (max - min) as u64;
		if span == u64::MAX {
			return Ok(self.next_u64()? as usize);
		}

		let span = span + 1;
		// Largest multiple of `span` that fits; values at or above it are redrawn.
		let zone = u64::MAX - u64::MAX % span;
		loop {
			let value = self.next_u64()?;
			if value < zone {
				return Ok(min + (value % span) as usize);
			}
		}
	}
}
