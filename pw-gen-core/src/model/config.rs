use serde::{Deserialize, Serialize};

use crate::model::range::PoolRange;
use crate::{Error, Result};

/// Immutable settings consumed by `PasswordGenerator::generate`.
///
/// `PasswordGeneratorConfig` holds one `PoolRange` per character class,
/// the "start with a letter" rule and the list of excluded characters.
///
/// # Invariants
/// - Every range satisfies `0 <= min <= max` (guaranteed by `PoolRange`)
/// - Exclusions are matched case-insensitively at generation time
///
/// The `with_*` methods return modified copies; a configuration is never
/// changed in place once handed to the generator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PasswordGeneratorConfig {
	lowercase: PoolRange,
	uppercase: PoolRange,
	numbers: PoolRange,
	symbols: PoolRange,
	always_start_with_character: bool,
	do_not_use: Vec<char>,
}

impl PasswordGeneratorConfig {
	/// Creates a configuration from explicit ranges, start rule and exclusions.
	pub fn new(
		lowercase: PoolRange,
		uppercase: PoolRange,
		numbers: PoolRange,
		symbols: PoolRange,
		always_start_with_character: bool,
		do_not_use: Vec<char>,
	) -> Self {
		Self { lowercase, uppercase, numbers, symbols, always_start_with_character, do_not_use }
	}

	pub fn lowercase(&self) -> PoolRange {
		self.lowercase
	}

	pub fn uppercase(&self) -> PoolRange {
		self.uppercase
	}

	pub fn numbers(&self) -> PoolRange {
		self.numbers
	}

	pub fn symbols(&self) -> PoolRange {
		self.symbols
	}

	/// Whether the password must begin with a letter (when letters are drawn).
	pub fn always_start_with_character(&self) -> bool {
		self.always_start_with_character
	}

	/// Characters that must never appear, compared case-insensitively.
	pub fn do_not_use(&self) -> &[char] {
		&self.do_not_use
	}

	/// Sum of every class minimum: the shortest possible password.
	///
	/// Saturates at `usize::MAX`.
	pub fn total_min(&self) -> usize {
		self.ranges().iter().map(PoolRange::min).fold(0, usize::saturating_add)
	}

	/// Sum of every class maximum: the longest possible password.
	///
	/// Saturates at `usize::MAX`.
	pub fn total_max(&self) -> usize {
		self.ranges().iter().map(PoolRange::max).fold(0, usize::saturating_add)
	}

	/// Checks that no password drawn from this configuration exceeds `limit`.
	///
	/// # Errors
	/// Returns `Error::LengthLimit` if `total_max()` is above `limit`.
	pub fn check_length(&self, limit: usize) -> Result<()> {
		let max = self.total_max();
		if max > limit {
			return Err(Error::LengthLimit { max, limit });
		}
		Ok(())
	}

	/// Ranges in generation order: lowercase, uppercase, numbers, symbols.
	pub fn ranges(&self) -> [PoolRange; 4] {
		[self.lowercase, self.uppercase, self.numbers, self.symbols]
	}

	pub fn with_lowercase(mut self, range: PoolRange) -> Self {
		self.lowercase = range;
		self
	}

	pub fn with_uppercase(mut self, range: PoolRange) -> Self {
		self.uppercase = range;
		self
	}

	pub fn with_numbers(mut self, range: PoolRange) -> Self {
		self.numbers = range;
		self
	}

	pub fn with_symbols(mut self, range: PoolRange) -> Self {
		self.symbols = range;
		self
	}

	pub fn with_always_start_with_character(mut self, enabled: bool) -> Self {
		self.always_start_with_character = enabled;
		self
	}

	pub fn with_do_not_use(mut self, do_not_use: Vec<char>) -> Self {
		self.do_not_use = do_not_use;
		self
	}
}

impl Default for PasswordGeneratorConfig {
	/// Four lowercase, two uppercase, one digit and one symbol; no start rule,
	/// no exclusions.
	fn default() -> Self {
		Self::new(
			PoolRange::exactly(4),
			PoolRange::exactly(2),
			PoolRange::exactly(1),
			PoolRange::exactly(1),
			false,
			Vec::new(),
		)
	}
}
