use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Inclusive bounds on how many characters of one class appear in a password.
///
/// # Invariants
/// - `0 <= min <= max`, enforced at construction
/// - Immutable once built; deserialized values go through the same check
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "RangeBounds", into = "RangeBounds")]
pub struct PoolRange {
	min: usize,
	max: usize,
}

/// Unvalidated wire form of a `PoolRange`.
#[derive(Serialize, Deserialize, Clone, Copy)]
struct RangeBounds {
	min: i64,
	max: i64,
}

impl PoolRange {
	/// Creates a new range.
	///
	/// # Errors
	/// Returns `Error::InvalidRange` if `min < 0` or `max < min`.
	pub fn new(min: i64, max: i64) -> Result<Self> {
		if min < 0 || max < min {
			return Err(Error::InvalidRange { min, max });
		}
		let invalid = || Error::InvalidRange { min, max };
		Ok(Self {
			min: usize::try_from(min).map_err(|_| invalid())?,
			max: usize::try_from(max).map_err(|_| invalid())?,
		})
	}

	/// Creates a range from unsigned bounds, or `None` if `max < min`.
	pub const fn bounded(min: usize, max: usize) -> Option<Self> {
		if max < min {
			return None;
		}
		Some(Self { min, max })
	}

	/// Creates a range drawing exactly `count` characters.
	pub const fn exactly(count: usize) -> Self {
		Self { min: count, max: count }
	}

	/// Range that never draws.
	pub const fn none() -> Self {
		Self::exactly(0)
	}

	/// Lower bound (inclusive).
	pub fn min(&self) -> usize {
		self.min
	}

	/// Upper bound (inclusive).
	pub fn max(&self) -> usize {
		self.max
	}

	/// Whether a draw from this range can be nonzero.
	pub fn may_draw(&self) -> bool {
		self.max > 0
	}

	/// Whether `count` lies within the bounds.
	pub fn contains(&self, count: usize) -> bool {
		(self.min..=self.max).contains(&count)
	}
}

impl TryFrom<RangeBounds> for PoolRange {
	type Error = Error;

	fn try_from(bounds: RangeBounds) -> Result<Self> {
		Self::new(bounds.min, bounds.max)
	}
}

impl From<PoolRange> for RangeBounds {
	fn from(range: PoolRange) -> Self {
		// usize -> i64 cannot overflow for any range built through `new`
		Self { min: range.min as i64, max: range.max as i64 }
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use anyhow::Result;

	#[test]
	fn range_valid() -> Result<()> {
		let range = PoolRange::new(2, 5)?;
		assert_eq!(2, range.min());
		assert_eq!(5, range.max());
		assert!(range.contains(2));
		assert!(range.contains(5));
		assert!(!range.contains(6));
		Ok(())
	}

	#[test]
	fn range_min_equals_max() -> Result<()> {
		let range = PoolRange::new(3, 3)?;
		assert_eq!(PoolRange::exactly(3), range);
		assert!(range.may_draw());
		Ok(())
	}

	#[test]
	fn range_zero() -> Result<()> {
		let range = PoolRange::new(0, 0)?;
		assert_eq!(PoolRange::none(), range);
		assert!(!range.may_draw());
		Ok(())
	}

	#[test]
	fn range_invalid() {
		for (min, max) in [(-1, 5), (5, 3), (-2, -1)] {
			let result = PoolRange::new(min, max);
			assert!(
				matches!(result, Err(Error::InvalidRange { min: m, max: x }) if m == min && x == max),
				"({min}, {max}) should be rejected"
			);
		}
	}

	#[test]
	fn range_deserialize_validates() -> Result<()> {
		let bytes = postcard::to_allocvec(&RangeBounds { min: 5, max: 3 })?;
		assert!(postcard::from_bytes::<PoolRange>(&bytes).is_err());

		let bytes = postcard::to_allocvec(&PoolRange::new(1, 4)?)?;
		let range: PoolRange = postcard::from_bytes(&bytes)?;
		assert_eq!(PoolRange::new(1, 4)?, range);
		Ok(())
	}
}
