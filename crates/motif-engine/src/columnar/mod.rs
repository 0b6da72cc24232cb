// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Tagged columns of the execution context.
//!
//! A column is one of a fixed set of shapes: a single-label vertex set, a
//! two-label vertex set, a generic value collection, or a previously
//! grouped list column. Shapes are known before any data is inspected;
//! the aggregation resolver works on [`ColumnShape`] alone.

mod keyed;
mod list;
mod offset;
mod values;
mod vertex;

use std::fmt::{Display, Formatter};

pub use keyed::KeyedBuilder;
pub use list::ListColumn;
use motif_core::{Type, Value, return_internal_error};
pub use offset::OffsetVector;
use serde::{Deserialize, Serialize};
pub use values::ValueColumn;
pub use vertex::{TwoLabelVertexColumn, VertexColumn};

pub type VertexId = u64;
pub type LabelId = u8;

/// One tagged column of a context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Column {
	Vertex(VertexColumn),
	TwoLabelVertex(TwoLabelVertexColumn),
	Values(ValueColumn),
	List(ListColumn),
}

/// The shape of a column, resolvable without touching data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnShape {
	Vertex(LabelId),
	TwoLabelVertex([LabelId; 2]),
	Values(Type),
	List(Type),
}

impl Display for ColumnShape {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ColumnShape::Vertex(label) => {
				write!(f, "VERTEX({})", label)
			}
			ColumnShape::TwoLabelVertex(labels) => write!(
				f,
				"TWO_LABEL_VERTEX({}, {})",
				labels[0], labels[1]
			),
			ColumnShape::Values(ty) => {
				write!(f, "COLLECTION({})", ty)
			}
			ColumnShape::List(ty) => write!(f, "LIST({})", ty),
		}
	}
}

/// The identity of one row element: a labeled vertex, or a value.
///
/// Hash and Eq make index elements usable directly as group keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexElement {
	Vertex {
		label: LabelId,
		vid: VertexId,
	},
	Value(Value),
}

impl Column {
	pub fn shape(&self) -> ColumnShape {
		match self {
			Column::Vertex(column) => {
				ColumnShape::Vertex(column.label())
			}
			Column::TwoLabelVertex(column) => {
				ColumnShape::TwoLabelVertex(column.labels())
			}
			Column::Values(column) => {
				ColumnShape::Values(column.ty())
			}
			Column::List(column) => {
				ColumnShape::List(column.ty())
			}
		}
	}

	pub fn len(&self) -> usize {
		match self {
			Column::Vertex(column) => column.len(),
			Column::TwoLabelVertex(column) => column.len(),
			Column::Values(column) => column.len(),
			Column::List(column) => column.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The identity of the element at `row`.
	pub fn index_element(&self, row: usize) -> Option<IndexElement> {
		match self {
			Column::Vertex(column) => {
				column.get(row).map(|vid| {
					IndexElement::Vertex {
						label: column.label(),
						vid,
					}
				})
			}
			Column::TwoLabelVertex(column) => {
				column.get(row).map(|(label, vid)| {
					IndexElement::Vertex {
						label,
						vid,
					}
				})
			}
			Column::Values(column) => column
				.get(row)
				.cloned()
				.map(IndexElement::Value),
			Column::List(column) => {
				column.get(row).map(|list| {
					IndexElement::Value(Value::List(
						list.to_vec(),
					))
				})
			}
		}
	}

	/// The payload attached to the element at `row`. Vertex columns
	/// carry no inline payload; their data lives behind the graph
	/// interface.
	pub fn data_element(&self, row: usize) -> Value {
		match self {
			Column::Vertex(_) | Column::TwoLabelVertex(_) => {
				Value::Undefined
			}
			Column::Values(column) => column
				.get(row)
				.cloned()
				.unwrap_or(Value::Undefined),
			Column::List(column) => column
				.get(row)
				.map(|list| Value::List(list.to_vec()))
				.unwrap_or(Value::Undefined),
		}
	}

	/// An empty builder producing a column of the same shape, without
	/// deduplication.
	pub fn create_builder(&self) -> ColumnBuilder {
		ColumnBuilder::for_shape(self.shape())
	}
}

/// Incrementally builds one column. Raw: inserts are appended in call
/// order, no deduplication.
#[derive(Debug)]
pub enum ColumnBuilder {
	Vertex {
		label: LabelId,
		vids: Vec<VertexId>,
	},
	TwoLabelVertex(TwoLabelVertexColumn),
	Values {
		ty: Type,
		data: Vec<Value>,
	},
	List {
		ty: Type,
		lists: Vec<Vec<Value>>,
	},
}

impl ColumnBuilder {
	pub fn for_shape(shape: ColumnShape) -> Self {
		match shape {
			ColumnShape::Vertex(label) => ColumnBuilder::Vertex {
				label,
				vids: Vec::new(),
			},
			ColumnShape::TwoLabelVertex(labels) => {
				ColumnBuilder::TwoLabelVertex(
					TwoLabelVertexColumn::empty(labels),
				)
			}
			ColumnShape::Values(ty) => ColumnBuilder::Values {
				ty,
				data: Vec::new(),
			},
			ColumnShape::List(ty) => ColumnBuilder::List {
				ty,
				lists: Vec::new(),
			},
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnBuilder::Vertex {
				vids, ..
			} => vids.len(),
			ColumnBuilder::TwoLabelVertex(column) => column.len(),
			ColumnBuilder::Values {
				data, ..
			} => data.len(),
			ColumnBuilder::List {
				lists, ..
			} => lists.len(),
		}
	}

	/// Appends one element. The element must match the builder's
	/// shape; a mismatch means the caller's resolution logic is wrong.
	pub fn push(&mut self, element: IndexElement) -> crate::Result<()> {
		match (&mut *self, element) {
			(
				ColumnBuilder::Vertex {
					label,
					vids,
				},
				IndexElement::Vertex {
					label: ele_label,
					vid,
				},
			) => {
				if ele_label != *label {
					return_internal_error!(
						"vertex label {} does not match column label {}",
						ele_label,
						label
					);
				}
				vids.push(vid);
				Ok(())
			}
			(
				ColumnBuilder::TwoLabelVertex(column),
				IndexElement::Vertex {
					label,
					vid,
				},
			) => {
				if !column.push(label, vid) {
					return_internal_error!(
						"vertex label {} is not one of the column labels {:?}",
						label,
						column.labels()
					);
				}
				Ok(())
			}
			(
				ColumnBuilder::Values {
					data, ..
				},
				IndexElement::Value(value),
			) => {
				data.push(value);
				Ok(())
			}
			(
				ColumnBuilder::List {
					lists, ..
				},
				IndexElement::Value(Value::List(list)),
			) => {
				lists.push(list);
				Ok(())
			}
			(builder, element) => return_internal_error!(
				"element {:?} does not fit column builder {:?}",
				element,
				builder
			),
		}
	}

	pub fn build(self) -> Column {
		match self {
			ColumnBuilder::Vertex {
				label,
				vids,
			} => Column::Vertex(VertexColumn::new(label, vids)),
			ColumnBuilder::TwoLabelVertex(column) => {
				Column::TwoLabelVertex(column)
			}
			ColumnBuilder::Values {
				ty,
				data,
			} => Column::Values(ValueColumn::new(ty, data)),
			ColumnBuilder::List {
				ty,
				lists,
			} => Column::List(ListColumn::from_lists(ty, lists)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_column_shape_display() {
		assert_eq!(ColumnShape::Vertex(3).to_string(), "VERTEX(3)");
		assert_eq!(
			ColumnShape::Values(Type::Int8).to_string(),
			"COLLECTION(INT8)"
		);
		assert_eq!(
			ColumnShape::List(Type::Utf8).to_string(),
			"LIST(UTF8)"
		);
	}

	#[test]
	fn test_index_element_of_each_shape() {
		let vertex = Column::Vertex(VertexColumn::new(1, vec![5]));
		assert_eq!(
			vertex.index_element(0),
			Some(IndexElement::Vertex {
				label: 1,
				vid: 5
			})
		);

		let values = Column::Values(ValueColumn::new(
			Type::Utf8,
			vec![Value::utf8("a")],
		));
		assert_eq!(
			values.index_element(0),
			Some(IndexElement::Value(Value::utf8("a")))
		);

		assert_eq!(vertex.index_element(1), None);
	}

	#[test]
	fn test_builder_rejects_foreign_label() {
		let column = Column::Vertex(VertexColumn::new(1, vec![5]));
		let mut builder = column.create_builder();
		let result = builder.push(IndexElement::Vertex {
			label: 2,
			vid: 9,
		});
		assert!(result.is_err());
		assert_eq!(
			result.unwrap_err().code(),
			"INTERNAL_ERROR"
		);
	}

	#[test]
	fn test_builder_roundtrip_preserves_order() {
		let column = Column::Values(ValueColumn::empty(Type::Int8));
		let mut builder = column.create_builder();
		builder.push(IndexElement::Value(Value::Int8(2))).unwrap();
		builder.push(IndexElement::Value(Value::Int8(1))).unwrap();
		let built = builder.build();
		assert_eq!(built.len(), 2);
		assert_eq!(
			built.index_element(0),
			Some(IndexElement::Value(Value::Int8(2)))
		);
	}
}
