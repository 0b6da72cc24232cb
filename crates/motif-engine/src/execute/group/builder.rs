// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::collections::HashSet;

use indexmap::IndexSet;
use motif_core::{Value, return_internal_error};

use crate::{
	columnar::{Column, ColumnBuilder, ColumnShape, IndexElement, ListColumn, ValueColumn},
	context::{Context, RowView},
	execute::group::{Aggregate, AggregateFunc, PropertySelector, resolve::resolve_aggregate},
	graph::{GraphInterface, PropertyGetter},
};

/// Accumulates one aggregate over the rows of every group.
///
/// Bound once per invocation: the output shape is resolved and the property
/// getter (if any) is constructed before the row scan. `insert` is then
/// called once per row with the row's group index; `build` finalizes into a
/// column with exactly one entry per group.
pub struct ValueBuilder<'g> {
	tag: usize,
	getter: Option<PropertyGetter<'g>>,
	shape: ColumnShape,
	state: AggState,
}

enum AggState {
	Count(Vec<u64>),
	CountDistinct(Vec<HashSet<IndexElement>>),
	Sum(Vec<Option<Value>>),
	Min(Vec<Option<Value>>),
	Max(Vec<Option<Value>>),
	First(Vec<Option<IndexElement>>),
	ToList(Vec<Vec<Value>>),
	ToSet(Vec<IndexSet<Value>>),
}

impl AggState {
	fn new(func: AggregateFunc) -> Self {
		match func {
			AggregateFunc::Count => AggState::Count(Vec::new()),
			AggregateFunc::CountDistinct => {
				AggState::CountDistinct(Vec::new())
			}
			AggregateFunc::Sum => AggState::Sum(Vec::new()),
			AggregateFunc::Min => AggState::Min(Vec::new()),
			AggregateFunc::Max => AggState::Max(Vec::new()),
			AggregateFunc::First => AggState::First(Vec::new()),
			AggregateFunc::ToList => AggState::ToList(Vec::new()),
			AggregateFunc::ToSet => AggState::ToSet(Vec::new()),
		}
	}

	fn len(&self) -> usize {
		match self {
			AggState::Count(groups) => groups.len(),
			AggState::CountDistinct(groups) => groups.len(),
			AggState::Sum(groups)
			| AggState::Min(groups)
			| AggState::Max(groups) => groups.len(),
			AggState::First(groups) => groups.len(),
			AggState::ToList(groups) => groups.len(),
			AggState::ToSet(groups) => groups.len(),
		}
	}

	fn grow(&mut self, groups: usize) {
		match self {
			AggState::Count(g) => g.resize(groups, 0),
			AggState::CountDistinct(g) => {
				g.resize_with(groups, HashSet::new)
			}
			AggState::Sum(g)
			| AggState::Min(g)
			| AggState::Max(g) => g.resize(groups, None),
			AggState::First(g) => g.resize(groups, None),
			AggState::ToList(g) => g.resize_with(groups, Vec::new),
			AggState::ToSet(g) => {
				g.resize_with(groups, IndexSet::new)
			}
		}
	}
}

impl<'g> ValueBuilder<'g> {
	/// Resolves the output shape and binds the property getter for one
	/// aggregate descriptor.
	pub fn bind(
		graph: &'g dyn GraphInterface,
		ctx: &Context,
		aggregate: &Aggregate,
	) -> crate::Result<Self> {
		let source = ctx.column(aggregate.tag)?.shape();
		let shape = resolve_aggregate(
			&source,
			aggregate.func,
			&aggregate.selector,
		)?;
		let getter = match &aggregate.selector {
			PropertySelector::Identity => None,
			PropertySelector::Property {
				name, ..
			} => Some(PropertyGetter::new(graph, name.clone())),
		};
		Ok(Self {
			tag: aggregate.tag,
			getter,
			shape,
			state: AggState::new(aggregate.func),
		})
	}

	/// The resolved shape of the finalized column.
	pub fn shape(&self) -> ColumnShape {
		self.shape
	}

	/// Accumulates one row into `group`.
	pub fn insert(
		&mut self,
		row: &RowView<'_>,
		group: usize,
	) -> crate::Result<()> {
		if group >= self.state.len() {
			self.state.grow(group + 1);
		}
		let element = row.index_element(self.tag)?;

		match &mut self.state {
			AggState::Count(groups) => {
				groups[group] += 1;
				Ok(())
			}
			AggState::CountDistinct(groups) => {
				groups[group].insert(element);
				Ok(())
			}
			AggState::Sum(groups) => {
				let value = self.getter.view(&element)?;
				if value == Value::Undefined {
					return Ok(());
				}
				let sum = match groups[group].take() {
					None => value,
					Some(acc) => match acc
						.checked_add(&value)
					{
						Some(sum) => sum,
						None => return_internal_error!(
							"sum of {} and {} overflowed or mixed types",
							acc,
							value
						),
					},
				};
				groups[group] = Some(sum);
				Ok(())
			}
			AggState::Min(groups) => {
				let value = self.getter.view(&element)?;
				accumulate_extreme(
					&mut groups[group],
					value,
					std::cmp::Ordering::Less,
				)
			}
			AggState::Max(groups) => {
				let value = self.getter.view(&element)?;
				accumulate_extreme(
					&mut groups[group],
					value,
					std::cmp::Ordering::Greater,
				)
			}
			AggState::First(groups) => {
				if groups[group].is_none() {
					let kept = match &self.getter {
						Some(getter) => {
							IndexElement::Value(
								getter.get_view(
									&element,
								),
							)
						}
						None => element,
					};
					groups[group] = Some(kept);
				}
				Ok(())
			}
			AggState::ToList(groups) => {
				let value = self.getter.view(&element)?;
				groups[group].push(value);
				Ok(())
			}
			AggState::ToSet(groups) => {
				let value = self.getter.view(&element)?;
				groups[group].insert(value);
				Ok(())
			}
		}
	}

	/// Finalizes into a column with one entry per group. Groups never
	/// inserted into yield their neutral entry (zero count, undefined
	/// extreme, empty list).
	pub fn build(mut self, groups: usize) -> crate::Result<Column> {
		if self.state.len() < groups {
			self.state.grow(groups);
		}
		let ty = match self.shape {
			ColumnShape::Values(ty) | ColumnShape::List(ty) => {
				Some(ty)
			}
			_ => None,
		};
		match self.state {
			AggState::Count(counts) => {
				Ok(Column::Values(ValueColumn::new(
					motif_core::Type::Uint8,
					counts.into_iter()
						.map(Value::Uint8)
						.collect(),
				)))
			}
			AggState::CountDistinct(sets) => {
				Ok(Column::Values(ValueColumn::new(
					motif_core::Type::Uint8,
					sets.into_iter()
						.map(|set| {
							Value::Uint8(
								set.len() as u64,
							)
						})
						.collect(),
				)))
			}
			AggState::Sum(entries)
			| AggState::Min(entries)
			| AggState::Max(entries) => {
				let Some(ty) = ty else {
					return_internal_error!(
						"scalar aggregate resolved to non-value shape {}",
						self.shape
					);
				};
				Ok(Column::Values(ValueColumn::new(
					ty,
					entries.into_iter()
						.map(|entry| {
							entry.unwrap_or(
								Value::Undefined,
							)
						})
						.collect(),
				)))
			}
			AggState::First(entries) => {
				let mut builder =
					ColumnBuilder::for_shape(self.shape);
				for entry in entries {
					match entry {
						Some(element) => {
							builder.push(element)?
						}
						None => match self.shape {
							ColumnShape::Values(
								_,
							) => builder.push(
								IndexElement::Value(
									Value::Undefined,
								),
							)?,
							_ => return_internal_error!(
								"FIRST over {} has a group with no rows",
								self.shape
							),
						},
					}
				}
				Ok(builder.build())
			}
			AggState::ToList(lists) => {
				let Some(ty) = ty else {
					return_internal_error!(
						"list aggregate resolved to non-list shape {}",
						self.shape
					);
				};
				Ok(Column::List(ListColumn::from_lists(
					ty, lists,
				)))
			}
			AggState::ToSet(sets) => {
				let Some(ty) = ty else {
					return_internal_error!(
						"list aggregate resolved to non-list shape {}",
						self.shape
					);
				};
				Ok(Column::List(ListColumn::from_lists(
					ty,
					sets.into_iter()
						.map(|set| {
							set.into_iter()
								.collect()
						})
						.collect(),
				)))
			}
		}
	}
}

/// MIN/MAX accumulation: undefined inputs are skipped, incomparable inputs
/// mean the column's element type does not match its declared type.
fn accumulate_extreme(
	slot: &mut Option<Value>,
	value: Value,
	keep_if: std::cmp::Ordering,
) -> crate::Result<()> {
	if value == Value::Undefined {
		return Ok(());
	}
	match slot.take() {
		None => {
			*slot = Some(value);
			Ok(())
		}
		Some(current) => match value.partial_cmp(&current) {
			Some(ordering) => {
				*slot = Some(if ordering == keep_if {
					value
				} else {
					current
				});
				Ok(())
			}
			None => return_internal_error!(
				"cannot compare {} with {}",
				value,
				current
			),
		},
	}
}

/// The value a row element contributes: through the bound getter when the
/// aggregate is property-based, the element's own value otherwise.
trait ViewSource {
	fn view(&self, element: &IndexElement) -> crate::Result<Value>;
}

impl ViewSource for Option<PropertyGetter<'_>> {
	fn view(&self, element: &IndexElement) -> crate::Result<Value> {
		match self {
			Some(getter) => Ok(getter.get_view(element)),
			None => match element {
				IndexElement::Value(value) => {
					Ok(value.clone())
				}
				IndexElement::Vertex {
					label,
					vid,
				} => return_internal_error!(
					"identity aggregate over values expected a value element, got vertex {}:{}",
					label,
					vid
				),
			},
		}
	}
}
