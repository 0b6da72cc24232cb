// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Per-group boundary vectors for the columns of a grouped context.
///
/// One slot per column after the base key column. Every slot holds
/// `groups + 1` monotonically non-decreasing boundaries; slot `s`, group
/// `g` spans `boundaries[g]..boundaries[g + 1]` of the column's flattened
/// storage. Scalar columns are one-to-one (boundary `g` is `g`); list
/// columns carry cumulative list lengths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OffsetVector {
	slots: Vec<Vec<usize>>,
}

impl OffsetVector {
	pub fn new() -> Self {
		Self {
			slots: Vec::new(),
		}
	}

	/// Appends a one-to-one slot: group g spans exactly entry g.
	pub fn push_one_to_one(&mut self, groups: usize) {
		self.slots.push((0..=groups).collect());
	}

	/// Appends a slot from per-group span lengths.
	pub fn push_lengths(
		&mut self,
		lengths: impl IntoIterator<Item = usize>,
	) {
		let mut boundaries = vec![0];
		let mut total = 0;
		for length in lengths {
			total += length;
			boundaries.push(total);
		}
		self.slots.push(boundaries);
	}

	/// Appends a slot from precomputed boundaries.
	pub fn push_boundaries(&mut self, boundaries: Vec<usize>) {
		debug_assert!(!boundaries.is_empty());
		debug_assert!(
			boundaries.windows(2).all(|w| w[0] <= w[1])
		);
		self.slots.push(boundaries);
	}

	pub fn slots(&self) -> usize {
		self.slots.len()
	}

	pub fn slot(&self, slot: usize) -> Option<&[usize]> {
		self.slots.get(slot).map(Vec::as_slice)
	}

	/// Number of groups all slots are sized for.
	pub fn groups(&self) -> Option<usize> {
		self.slots.first().map(|slot| slot.len() - 1)
	}

	/// The span of `group` within `slot`'s flattened storage.
	pub fn span(&self, slot: usize, group: usize) -> Option<Range<usize>> {
		let boundaries = self.slots.get(slot)?;
		let start = *boundaries.get(group)?;
		let end = *boundaries.get(group + 1)?;
		Some(start..end)
	}
}

impl Default for OffsetVector {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_one_to_one() {
		let mut offsets = OffsetVector::new();
		offsets.push_one_to_one(3);
		assert_eq!(offsets.slot(0), Some(&[0, 1, 2, 3][..]));
		assert_eq!(offsets.span(0, 1), Some(1..2));
		assert_eq!(offsets.groups(), Some(3));
	}

	#[test]
	fn test_lengths_accumulate() {
		let mut offsets = OffsetVector::new();
		offsets.push_lengths([2, 0, 3]);
		assert_eq!(offsets.slot(0), Some(&[0, 2, 2, 5][..]));
		assert_eq!(offsets.span(0, 0), Some(0..2));
		assert_eq!(offsets.span(0, 1), Some(2..2));
		assert_eq!(offsets.span(0, 2), Some(2..5));
	}

	#[test]
	fn test_zero_groups() {
		let mut offsets = OffsetVector::new();
		offsets.push_one_to_one(0);
		assert_eq!(offsets.slot(0), Some(&[0][..]));
		assert_eq!(offsets.groups(), Some(0));
	}

	#[test]
	fn test_out_of_range_lookups_are_none() {
		let mut offsets = OffsetVector::new();
		offsets.push_one_to_one(2);
		assert_eq!(offsets.slot(1), None);
		assert_eq!(offsets.span(1, 0), None);
		assert_eq!(offsets.span(0, 2), None);
	}
}
