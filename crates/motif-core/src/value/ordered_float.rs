// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// Error raised when a NaN is used where a totally ordered float is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedFloatError;

impl Display for OrderedFloatError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("NaN is not an ordered float")
	}
}

impl std::error::Error for OrderedFloatError {}

/// An f64 with total order and stable hashing, so float properties can act
/// as group keys and participate in MIN/MAX.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn value(&self) -> f64 {
		self.0
	}

	pub fn zero() -> OrderedF64 {
		OrderedF64(0.0f64)
	}
}

impl Deref for OrderedF64 {
	type Target = f64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl PartialEq for OrderedF64 {
	fn eq(&self, other: &Self) -> bool {
		self.0.to_bits() == other.0.to_bits()
	}
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF64 {
	fn cmp(&self, other: &Self) -> Ordering {
		let a = self.0.to_bits()
			^ ((self.0.to_bits() >> 63) & 0x7fff_ffff_ffff_ffff);
		let b = other.0.to_bits()
			^ ((other.0.to_bits() >> 63) & 0x7fff_ffff_ffff_ffff);
		a.cmp(&b)
	}
}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl From<OrderedF64> for f64 {
	fn from(v: OrderedF64) -> Self {
		v.0
	}
}

impl TryFrom<f64> for OrderedF64 {
	type Error = OrderedFloatError;

	fn try_from(f: f64) -> Result<Self, Self::Error> {
		// normalize -0.0 so it keys identically to 0.0
		let normalized = if f == 0.0 {
			0.0
		} else {
			f
		};
		if f.is_nan() {
			Err(OrderedFloatError)
		} else {
			Ok(OrderedF64(normalized))
		}
	}
}

#[cfg(test)]
mod tests {
	use std::{
		collections::hash_map::DefaultHasher,
		hash::{Hash, Hasher},
	};

	use super::*;

	fn hash_of(v: OrderedF64) -> u64 {
		let mut hasher = DefaultHasher::new();
		v.hash(&mut hasher);
		hasher.finish()
	}

	#[test]
	fn test_negative_zero_keys_as_zero() {
		let pos = OrderedF64::try_from(0.0).unwrap();
		let neg = OrderedF64::try_from(-0.0).unwrap();
		assert_eq!(pos, neg);
		assert_eq!(hash_of(pos), hash_of(neg));
	}

	#[test]
	fn test_nan_rejected() {
		assert_eq!(
			OrderedF64::try_from(f64::NAN),
			Err(OrderedFloatError)
		);
	}

	#[test]
	fn test_total_order_across_signs() {
		let mut values = vec![
			OrderedF64::try_from(1.5).unwrap(),
			OrderedF64::try_from(-3.0).unwrap(),
			OrderedF64::try_from(0.0).unwrap(),
			OrderedF64::try_from(f64::INFINITY).unwrap(),
			OrderedF64::try_from(f64::NEG_INFINITY).unwrap(),
		];
		values.sort();
		let raw: Vec<f64> =
			values.into_iter().map(|v| v.value()).collect();
		assert_eq!(
			raw,
			vec![
				f64::NEG_INFINITY,
				-3.0,
				0.0,
				1.5,
				f64::INFINITY
			]
		);
	}
}
