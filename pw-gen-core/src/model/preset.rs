use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::config::PasswordGeneratorConfig;
use crate::model::range::PoolRange;
use crate::Error;

/// Ready-made configurations.
///
/// Presets are plain data; they carry no generation logic of their own.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
	/// Balanced mix, 10 characters, no look-alike characters.
	SafeDefault,
	/// Longer password, 16 to 20 characters.
	Strong,
	/// Easy to read and type: no symbols, no look-alike characters.
	HumanFriendly,
	/// Symbol-heavy password, e.g. for vaults.
	SymbolHeavy,
	/// Fixed-length alphanumeric secret for API keys.
	Developer,
}

impl Preset {
	/// All presets, in declaration order.
	pub const ALL: [Preset; 5] = [
		Preset::SafeDefault,
		Preset::Strong,
		Preset::HumanFriendly,
		Preset::SymbolHeavy,
		Preset::Developer,
	];

	/// Kebab-case preset name.
	pub fn name(&self) -> &'static str {
		match self {
			Preset::SafeDefault => "safe-default",
			Preset::Strong => "strong",
			Preset::HumanFriendly => "human-friendly",
			Preset::SymbolHeavy => "symbol-heavy",
			Preset::Developer => "developer",
		}
	}

	/// Builds the configuration for this preset.
	pub fn config(&self) -> PasswordGeneratorConfig {
		match self {
			Preset::SafeDefault => safe_default(),
			Preset::Strong => strong(),
			Preset::HumanFriendly => human_friendly(),
			Preset::SymbolHeavy => symbol_heavy(),
			Preset::Developer => developer(),
		}
	}
}

impl fmt::Display for Preset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Preset {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Preset::ALL
			.into_iter()
			.find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| Error::UnknownPreset(s.to_owned()))
	}
}

/// Builds a range from literal bounds; only used in `const` items, so a
/// reversed pair fails to compile.
const fn range(min: usize, max: usize) -> PoolRange {
	match PoolRange::bounded(min, max) {
		Some(range) => range,
		None => panic!("preset range with max < min"),
	}
}

const TWO_TO_THREE: PoolRange = range(2, 3);
const THREE_TO_FOUR: PoolRange = range(3, 4);
const FOUR_TO_FIVE: PoolRange = range(4, 5);
const FIVE_TO_SIX: PoolRange = range(5, 6);

/// Four lowercase, two uppercase, two digits, two symbols; starts with a
/// letter and avoids `l`, `1`, `O`, `0`.
pub fn safe_default() -> PasswordGeneratorConfig {
	PasswordGeneratorConfig::new(
		PoolRange::exactly(4),
		PoolRange::exactly(2),
		PoolRange::exactly(2),
		PoolRange::exactly(2),
		true,
		vec!['l', '1', 'O', '0'],
	)
}

/// 16 to 20 characters across all classes, starting with a letter.
pub fn strong() -> PasswordGeneratorConfig {
	PasswordGeneratorConfig::new(FIVE_TO_SIX, FOUR_TO_FIVE, THREE_TO_FOUR, FOUR_TO_FIVE, true, Vec::new())
}

/// Letters and digits only, without look-alike characters.
pub fn human_friendly() -> PasswordGeneratorConfig {
	PasswordGeneratorConfig::new(
		FIVE_TO_SIX,
		THREE_TO_FOUR,
		PoolRange::exactly(2),
		PoolRange::none(),
		true,
		vec!['l', '1', 'I', 'O', '0'],
	)
}

/// Five to six symbols plus two to three of every other class.
pub fn symbol_heavy() -> PasswordGeneratorConfig {
	PasswordGeneratorConfig::new(TWO_TO_THREE, TWO_TO_THREE, TWO_TO_THREE, FIVE_TO_SIX, true, Vec::new())
}

/// 16 alphanumeric characters, no start rule.
pub fn developer() -> PasswordGeneratorConfig {
	PasswordGeneratorConfig::new(
		PoolRange::exactly(6),
		PoolRange::exactly(5),
		PoolRange::exactly(5),
		PoolRange::none(),
		false,
		Vec::new(),
	)
}
