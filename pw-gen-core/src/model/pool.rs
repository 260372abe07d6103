use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::model::config::PasswordGeneratorConfig;
use crate::{Error, Result};

/// Lowercase Latin letters. Uppercase characters are folded from this pool.
pub const CHARACTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Decimal digits.
pub const NUMBERS: &str = "0123456789";

/// Punctuation symbols.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Identifies one of the fixed character pools.
///
/// There is no uppercase pool: uppercase characters are drawn from
/// `Characters` and folded after sampling.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PoolType {
	Characters,
	Numbers,
	Symbols,
}

impl PoolType {
	/// All pools, in generation order.
	pub const ALL: [PoolType; 3] = [PoolType::Characters, PoolType::Numbers, PoolType::Symbols];

	/// Returns the characters of the pool, in their fixed order.
	pub fn pool(&self) -> &'static str {
		match self {
			PoolType::Characters => CHARACTERS,
			PoolType::Numbers => NUMBERS,
			PoolType::Symbols => SYMBOLS,
		}
	}

	/// Returns the pool name.
	pub fn name(&self) -> &'static str {
		match self {
			PoolType::Characters => "characters",
			PoolType::Numbers => "numbers",
			PoolType::Symbols => "symbols",
		}
	}

	/// Whether the configuration may need to draw from this pool.
	fn in_use(&self, config: &PasswordGeneratorConfig) -> bool {
		match self {
			PoolType::Characters => config.lowercase().may_draw() || config.uppercase().may_draw(),
			PoolType::Numbers => config.numbers().may_draw(),
			PoolType::Symbols => config.symbols().may_draw(),
		}
	}
}

impl fmt::Display for PoolType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Returns the characters of `pool` whose ASCII-lowercase form is not excluded.
///
/// Relative order of the pool is preserved.
pub fn filter(pool: PoolType, do_not_use: &[char]) -> Vec<char> {
	let excluded: Vec<char> = do_not_use.iter().map(char::to_ascii_lowercase).collect();
	pool.pool()
		.chars()
		.filter(|c| !excluded.contains(&c.to_ascii_lowercase()))
		.collect()
}

/// Per-call filtered view of the three pools.
///
/// Built once per generation and discarded afterwards.
#[derive(Debug)]
pub(crate) struct FilteredPools {
	characters: Vec<char>,
	numbers: Vec<char>,
	symbols: Vec<char>,
}

impl FilteredPools {
	/// Filters every pool against the configuration's exclusions.
	///
	/// All pools are checked before any randomness is consumed, so a
	/// configuration that can never succeed fails the same way every time.
	///
	/// # Errors
	/// Returns `Error::EmptyPool` for the first pool (in `PoolType::ALL` order)
	/// that is empty while the configuration may draw from it.
	pub(crate) fn build(config: &PasswordGeneratorConfig) -> Result<Self> {
		let [characters, numbers, symbols] = PoolType::ALL.map(|pool| filter(pool, config.do_not_use()));

		let pools = Self { characters, numbers, symbols };
		for pool in PoolType::ALL {
			let size = pools.get(pool).len();
			trace!("pool '{}' has {} usable characters", pool, size);
			if size == 0 && pool.in_use(config) {
				return Err(Error::EmptyPool(pool));
			}
		}

		Ok(pools)
	}

	/// Returns the filtered characters of `pool`.
	pub(crate) fn get(&self, pool: PoolType) -> &[char] {
		match pool {
			PoolType::Characters => &self.characters,
			PoolType::Numbers => &self.numbers,
			PoolType::Symbols => &self.symbols,
		}
	}
}
