use log::debug;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::model::config::PasswordGeneratorConfig;
use crate::model::pool::{FilteredPools, PoolType};
use crate::random::{CryptoSource, RandomSource};
use crate::{Error, Result};

/// Maximum number of repair rounds against adjacent repeated characters.
const MAX_REPAIR_ROUNDS: usize = 5;

/// Character classes in generation order, with their source pool and
/// whether draws are folded to uppercase.
const CLASSES: [(PoolType, bool); 4] = [
	(PoolType::Characters, false),
	(PoolType::Characters, true),
	(PoolType::Numbers, false),
	(PoolType::Symbols, false),
];

/// Password generator driven by a cryptographically strong random source.
///
/// # Responsibilities
/// - Filter the character pools against the configuration's exclusions
/// - Draw one quota per class within its configured range
/// - Populate, shuffle and repair the password buffer
/// - Move a letter to the front when the configuration asks for it
///
/// The generator keeps no state between calls apart from its random
/// source: two calls with the same configuration draw fresh randomness
/// and generally return different passwords.
#[derive(Debug)]
pub struct PasswordGenerator<S = CryptoSource<OsRng>> {
	source: S,
}

impl PasswordGenerator {
	/// Creates a generator reading from the operating system generator.
	pub fn new() -> Self {
		Self { source: CryptoSource::os() }
	}
}

impl Default for PasswordGenerator {
	fn default() -> Self {
		Self::new()
	}
}

impl<S: RandomSource> PasswordGenerator<S> {
	/// Creates a generator using a custom random source.
	pub fn with_source(source: S) -> Self {
		Self { source }
	}

	/// Generates one password.
	///
	/// # Steps
	/// 1. Build the filtered pools (fails before any randomness is drawn)
	/// 2. Draw the four class quotas
	/// 3. Populate the buffer in class order
	/// 4. Shuffle the buffer
	/// 5. Try to break adjacent repeated characters (at most 5 rounds)
	/// 6. Move the first letter to the front if required
	///
	/// The returned password has between `config.total_min()` and
	/// `config.total_max()` characters.
	///
	/// # Errors
	/// - `Error::EmptyPool` if a pool that may be drawn from is fully excluded
	/// - `Error::RandomSource` if the random source cannot supply entropy
	/// - `Error::PasswordTooLong` if the drawn length cannot be allocated
	pub fn generate(&mut self, config: &PasswordGeneratorConfig) -> Result<String> {
		let pools = FilteredPools::build(config)?;

		let mut buffer = Vec::new();
		if let Err(e) = self.fill(config, &pools, &mut buffer) {
			buffer.zeroize();
			return Err(e);
		}

		let password = buffer.iter().collect::<String>();
		buffer.zeroize();
		Ok(password)
	}

	/// Runs every randomized step on `buffer`.
	fn fill(
		&mut self,
		config: &PasswordGeneratorConfig,
		pools: &FilteredPools,
		buffer: &mut Vec<char>,
	) -> Result<()> {
		let quotas = self.draw_quotas(config)?;
		debug!(
			"drawn quotas: lowercase={} uppercase={} numbers={} symbols={}",
			quotas[0], quotas[1], quotas[2], quotas[3]
		);

		let length = quotas
			.iter()
			.try_fold(0usize, |total, count| total.checked_add(*count))
			.ok_or(Error::PasswordTooLong)?;
		buffer.try_reserve_exact(length).map_err(|_| Error::PasswordTooLong)?;

		for ((pool, uppercase), count) in CLASSES.into_iter().zip(quotas) {
			self.populate(pools, pool, uppercase, count, buffer)?;
		}

		self.source.shuffle(buffer)?;

		let repaired = avoid_consecutive_characters(buffer);
		debug!("consecutive repair on {} characters, clean: {}", buffer.len(), repaired);

		let letters = quotas[0] + quotas[1];
		enforce_start_character(buffer, config.always_start_with_character() && letters > 0);

		Ok(())
	}

	/// Draws one count per class, each uniformly within its range.
	fn draw_quotas(&mut self, config: &PasswordGeneratorConfig) -> Result<[usize; 4]> {
		let mut quotas = [0; 4];
		for (quota, range) in quotas.iter_mut().zip(config.ranges()) {
			*quota = self.source.int_in_range(range.min(), range.max())?;
		}
		Ok(quotas)
	}

	/// Appends `count` uniform draws (with replacement) from `pool`.
	fn populate(
		&mut self,
		pools: &FilteredPools,
		pool: PoolType,
		uppercase: bool,
		count: usize,
		buffer: &mut Vec<char>,
	) -> Result<()> {
		if count == 0 {
			return Ok(());
		}

		// `FilteredPools::build` rejects empty pools that may be drawn from
		let chars = pools.get(pool);
		debug_assert!(!chars.is_empty());

		for _ in 0..count {
			let c = chars[self.source.int_in_range(0, chars.len() - 1)?];
			buffer.push(if uppercase { c.to_ascii_uppercase() } else { c });
		}
		Ok(())
	}
}

/// Best-effort removal of adjacent repeated characters.
///
/// Each round scans left to right; for every `i` equal to `i - 1`, the
/// first index `j != i` (searched from 0) holding a character different
/// from both is swapped into `i`. Pairs without such a `j` stay as they are.
///
/// Stops after a round that finds no repeated pair (returns `true`) or
/// after `MAX_REPAIR_ROUNDS` rounds (returns `false`, repeats may remain).
pub(crate) fn avoid_consecutive_characters(password: &mut [char]) -> bool {
	for _ in 0..MAX_REPAIR_ROUNDS {
		let mut has_consecutive = false;

		for i in 1..password.len() {
			if password[i] != password[i - 1] {
				continue;
			}
			has_consecutive = true;

			let (current, previous) = (password[i], password[i - 1]);
			let replacement = (0..password.len())
				.find(|&j| j != i && password[j] != current && password[j] != previous);
			if let Some(j) = replacement {
				password.swap(i, j);
			}
		}

		if !has_consecutive {
			return true;
		}
	}

	false
}

/// Swaps the first alphabetic character to index 0 when `enabled`.
///
/// Leaves the buffer untouched if no letter exists. Runs after the repeat
/// repair, so it may put a repeated pair back at positions 0 and 1.
pub(crate) fn enforce_start_character(password: &mut [char], enabled: bool) {
	if !enabled {
		return;
	}

	if let Some(index) = password.iter().position(char::is_ascii_alphabetic) {
		password.swap(0, index);
	}
}
