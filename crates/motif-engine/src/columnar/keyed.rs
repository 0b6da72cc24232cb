// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use indexmap::IndexMap;

use crate::columnar::{Column, ColumnBuilder, ColumnShape, IndexElement};

/// Builds a deduplicated, densely indexed key column.
///
/// The i-th distinct key, in first-occurrence order, is assigned index i.
/// Dense assignment is a visible contract: downstream value columns are
/// addressed by exactly these indices.
pub struct KeyedBuilder {
	out: ColumnBuilder,
	seen: IndexMap<IndexElement, usize>,
}

impl KeyedBuilder {
	pub fn new(shape: ColumnShape) -> Self {
		Self {
			out: ColumnBuilder::for_shape(shape),
			seen: IndexMap::new(),
		}
	}

	/// Inserts a key and returns its group index: the index minted at
	/// its first occurrence, or the next unused index if unseen.
	pub fn insert(&mut self, key: IndexElement) -> crate::Result<usize> {
		if let Some(idx) = self.seen.get(&key) {
			return Ok(*idx);
		}
		let idx = self.seen.len();
		self.out.push(key.clone())?;
		self.seen.insert(key, idx);
		Ok(idx)
	}

	/// Number of distinct keys seen so far.
	pub fn len(&self) -> usize {
		self.seen.len()
	}

	pub fn is_empty(&self) -> bool {
		self.seen.is_empty()
	}

	pub fn build(self) -> Column {
		self.out.build()
	}
}

#[cfg(test)]
mod tests {
	use motif_core::{Type, Value};

	use super::*;

	fn value(v: i64) -> IndexElement {
		IndexElement::Value(Value::Int8(v))
	}

	#[test]
	fn test_first_occurrence_order() {
		let mut builder =
			KeyedBuilder::new(ColumnShape::Values(Type::Int8));
		assert_eq!(builder.insert(value(7)).unwrap(), 0);
		assert_eq!(builder.insert(value(7)).unwrap(), 0);
		assert_eq!(builder.insert(value(3)).unwrap(), 1);
		assert_eq!(builder.insert(value(7)).unwrap(), 0);
		assert_eq!(builder.insert(value(9)).unwrap(), 2);
		assert_eq!(builder.len(), 3);

		let column = builder.build();
		assert_eq!(column.index_element(0), Some(value(7)));
		assert_eq!(column.index_element(1), Some(value(3)));
		assert_eq!(column.index_element(2), Some(value(9)));
	}

	#[test]
	fn test_vertex_keys_deduplicate_by_identity() {
		let mut builder =
			KeyedBuilder::new(ColumnShape::Vertex(1));
		let a = IndexElement::Vertex {
			label: 1,
			vid: 10,
		};
		let b = IndexElement::Vertex {
			label: 1,
			vid: 20,
		};
		assert_eq!(builder.insert(a.clone()).unwrap(), 0);
		assert_eq!(builder.insert(b).unwrap(), 1);
		assert_eq!(builder.insert(a).unwrap(), 0);
		assert_eq!(builder.build().len(), 2);
	}

	#[test]
	fn test_empty_build() {
		let builder =
			KeyedBuilder::new(ColumnShape::Values(Type::Utf8));
		assert_eq!(builder.build().len(), 0);
	}
}
