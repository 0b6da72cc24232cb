// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use motif_core::{Type, Value};
use serde::{Deserialize, Serialize};

/// A previously grouped column: one list of values per entry, stored
/// flattened with a boundary offset per entry.
///
/// `offsets` has `len() + 1` entries and is monotonically non-decreasing;
/// entry `i` spans `data[offsets[i]..offsets[i + 1]]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListColumn {
	ty: Type,
	data: Vec<Value>,
	offsets: Vec<usize>,
}

impl ListColumn {
	pub fn new(ty: Type, data: Vec<Value>, offsets: Vec<usize>) -> Self {
		debug_assert!(!offsets.is_empty());
		debug_assert_eq!(*offsets.last().unwrap(), data.len());
		debug_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
		Self {
			ty,
			data,
			offsets,
		}
	}

	pub fn from_lists(ty: Type, lists: Vec<Vec<Value>>) -> Self {
		let mut data = Vec::new();
		let mut offsets = Vec::with_capacity(lists.len() + 1);
		offsets.push(0);
		for list in lists {
			data.extend(list);
			offsets.push(data.len());
		}
		Self::new(ty, data, offsets)
	}

	/// The element type of the nested lists.
	pub fn ty(&self) -> Type {
		self.ty
	}

	pub fn len(&self) -> usize {
		self.offsets.len() - 1
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn get(&self, idx: usize) -> Option<&[Value]> {
		if idx >= self.len() {
			return None;
		}
		Some(&self.data[self.offsets[idx]..self.offsets[idx + 1]])
	}

	/// The flattened storage together with its boundary offsets.
	pub fn flatten(&self) -> (&[Value], &[usize]) {
		(&self.data, &self.offsets)
	}

	pub fn offsets(&self) -> &[usize] {
		&self.offsets
	}

	pub fn iter(&self) -> impl Iterator<Item = &[Value]> {
		(0..self.len()).map(|idx| {
			&self.data[self.offsets[idx]..self.offsets[idx + 1]]
		})
	}
}
