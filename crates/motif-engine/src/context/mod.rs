// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! The execution context threaded through the operator pipeline.
//!
//! A context is an ordered list of tagged columns; a column's tag is its
//! position. The highest tag is the head. Contexts are row-aligned: every
//! column holds one element per row, and row iteration visits rows in
//! insertion order. Operators consume a context by value and produce a
//! new one; a context is never mutated in place by a downstream operator.

use motif_core::{Value, return_internal_error};

use crate::columnar::{Column, IndexElement, OffsetVector};

#[derive(Debug, Clone, PartialEq)]
pub struct Context {
	columns: Vec<Column>,
	sub_task_start_tag: Option<usize>,
	offsets: Option<OffsetVector>,
}

impl Context {
	/// A context over row-aligned columns. All columns must have equal
	/// length.
	pub fn new(columns: Vec<Column>) -> crate::Result<Self> {
		if columns.is_empty() {
			return_internal_error!(
				"a context requires at least one column"
			);
		}
		let rows = columns[0].len();
		for (tag, column) in columns.iter().enumerate() {
			if column.len() != rows {
				return_internal_error!(
					"column {} has {} rows, expected {}",
					tag,
					column.len(),
					rows
				);
			}
		}
		Ok(Self {
			columns,
			sub_task_start_tag: None,
			offsets: None,
		})
	}

	/// A grouped context: columns plus the offset vector linking its
	/// value columns to the base key column.
	pub(crate) fn grouped(
		columns: Vec<Column>,
		offsets: OffsetVector,
	) -> crate::Result<Self> {
		let mut ctx = Self::new(columns)?;
		ctx.offsets = Some(offsets);
		Ok(ctx)
	}

	/// Marks the first tag that belongs to the current aggregation
	/// sub-scope.
	pub fn with_sub_task_start_tag(mut self, tag: usize) -> Self {
		self.sub_task_start_tag = Some(tag);
		self
	}

	pub fn sub_task_start_tag(&self) -> Option<usize> {
		self.sub_task_start_tag
	}

	pub fn max_tag_id(&self) -> usize {
		self.columns.len() - 1
	}

	/// The head column: the one with the highest tag.
	pub fn head(&self) -> &Column {
		self.columns.last().expect("context has columns")
	}

	pub fn column(&self, tag: usize) -> crate::Result<&Column> {
		match self.columns.get(tag) {
			Some(column) => Ok(column),
			None => return_internal_error!(
				"tag {} out of range, context has {} columns",
				tag,
				self.columns.len()
			),
		}
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn row_count(&self) -> usize {
		self.columns[0].len()
	}

	pub fn offsets(&self) -> Option<&OffsetVector> {
		self.offsets.as_ref()
	}

	/// A view over one row.
	pub fn row(&self, row: usize) -> RowView<'_> {
		RowView {
			ctx: self,
			row,
		}
	}

	/// The row's offset within the sub-task scope starting at `tag`.
	/// In a row-aligned context each row is one sub-scope element, so
	/// the offset is the row index itself.
	pub fn tag_offset(
		&self,
		row: usize,
		tag: usize,
	) -> crate::Result<usize> {
		// validates the tag, the offset itself is positional
		self.column(tag)?;
		Ok(row)
	}

	/// Appends a column, moving the head. Used by fold aggregation,
	/// which augments the context instead of replacing it.
	pub(crate) fn push_column(
		&mut self,
		column: Column,
	) -> crate::Result<()> {
		if column.len() != self.row_count() {
			return_internal_error!(
				"appended column has {} rows, context has {}",
				column.len(),
				self.row_count()
			);
		}
		self.columns.push(column);
		Ok(())
	}
}

/// One row of a context: per column, an index element (identity) and a
/// data element (payload).
pub struct RowView<'a> {
	ctx: &'a Context,
	row: usize,
}

impl<'a> RowView<'a> {
	pub fn index(&self) -> usize {
		self.row
	}

	pub fn index_element(
		&self,
		tag: usize,
	) -> crate::Result<IndexElement> {
		let column = self.ctx.column(tag)?;
		match column.index_element(self.row) {
			Some(element) => Ok(element),
			None => return_internal_error!(
				"row {} out of range for tag {}",
				self.row,
				tag
			),
		}
	}

	pub fn data_element(&self, tag: usize) -> crate::Result<Value> {
		let column = self.ctx.column(tag)?;
		if self.row >= column.len() {
			return_internal_error!(
				"row {} out of range for tag {}",
				self.row,
				tag
			);
		}
		Ok(column.data_element(self.row))
	}
}

#[cfg(test)]
mod tests {
	use motif_core::{Type, Value};

	use super::*;
	use crate::columnar::{ValueColumn, VertexColumn};

	fn values(data: Vec<Value>) -> Column {
		Column::Values(ValueColumn::new(Type::Int8, data))
	}

	#[test]
	fn test_new_rejects_ragged_columns() {
		let result = Context::new(vec![
			values(vec![Value::Int8(1)]),
			values(vec![Value::Int8(1), Value::Int8(2)]),
		]);
		assert!(result.is_err());
	}

	#[test]
	fn test_new_rejects_empty_context() {
		assert!(Context::new(vec![]).is_err());
	}

	#[test]
	fn test_tags_and_head() {
		let ctx = Context::new(vec![
			Column::Vertex(VertexColumn::new(0, vec![1, 2])),
			values(vec![Value::Int8(10), Value::Int8(20)]),
		])
		.unwrap();
		assert_eq!(ctx.max_tag_id(), 1);
		assert_eq!(ctx.row_count(), 2);
		assert_eq!(ctx.head().shape(), ctx.column(1).unwrap().shape());
		assert!(ctx.column(2).is_err());
	}

	#[test]
	fn test_row_view_elements() {
		let ctx = Context::new(vec![values(vec![
			Value::Int8(10),
			Value::Int8(20),
		])])
		.unwrap();
		let row = ctx.row(1);
		assert_eq!(
			row.index_element(0).unwrap(),
			IndexElement::Value(Value::Int8(20))
		);
		assert_eq!(row.data_element(0).unwrap(), Value::Int8(20));
		assert!(row.index_element(1).is_err());
	}

	#[test]
	fn test_sub_task_start_tag() {
		let ctx = Context::new(vec![values(vec![Value::Int8(1)])])
			.unwrap()
			.with_sub_task_start_tag(0);
		assert_eq!(ctx.sub_task_start_tag(), Some(0));
		assert_eq!(ctx.tag_offset(0, 0).unwrap(), 0);
		assert!(ctx.tag_offset(0, 5).is_err());
	}
}
