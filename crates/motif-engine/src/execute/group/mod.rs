// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! GROUP-BY over an execution context.
//!
//! Three entry shapes: one group key, two group keys, and the key-less
//! fold in [`fold`]. One pass over the rows; group indices are dense and
//! assigned in first-occurrence order, so the output is deterministic for
//! a given input order.

mod builder;
mod descriptor;
mod fold;
mod resolve;

pub use builder::ValueBuilder;
pub use descriptor::{Aggregate, AggregateFunc, GroupKey, PropertySelector};
pub use fold::fold;
use indexmap::IndexMap;
use motif_core::{
	Error,
	diagnostic::query::{
		property_pair_grouping_unimplemented,
		unsupported_group_key_count,
	},
	return_internal_error,
};
pub use resolve::{resolve_aggregate, resolve_group_key};
use tracing::debug;

use crate::{
	columnar::{Column, IndexElement, KeyedBuilder, OffsetVector},
	context::Context,
	graph::{GraphInterface, PropertyGetter},
};

/// Groups the context by one or two keys and applies the aggregates.
///
/// The output context carries the key column(s) at tags 0..keys, followed
/// by one value column per aggregate, each with one entry per group.
pub fn group_by(
	graph: &dyn GraphInterface,
	ctx: Context,
	mut keys: Vec<GroupKey>,
	aggregates: Vec<Aggregate>,
) -> crate::Result<Context> {
	debug!(
		keys = keys.len(),
		aggregates = aggregates.len(),
		rows = ctx.row_count(),
		"group_by"
	);
	match keys.len() {
		1 => single_key(graph, ctx, keys.remove(0), aggregates),
		2 => two_key(graph, ctx, keys, aggregates),
		n => Err(Error(unsupported_group_key_count(n))),
	}
}

fn single_key(
	graph: &dyn GraphInterface,
	ctx: Context,
	key: GroupKey,
	aggregates: Vec<Aggregate>,
) -> crate::Result<Context> {
	let source = ctx.column(key.tag)?.shape();
	let key_shape = resolve_group_key(&source, &key.selector)?;
	let mut keyed = KeyedBuilder::new(key_shape);
	let getter = match &key.selector {
		PropertySelector::Identity => None,
		PropertySelector::Property {
			name, ..
		} => Some(PropertyGetter::new(graph, name.clone())),
	};

	let mut builders = aggregates
		.iter()
		.map(|aggregate| ValueBuilder::bind(graph, &ctx, aggregate))
		.collect::<crate::Result<Vec<_>>>()?;

	for row in 0..ctx.row_count() {
		let view = ctx.row(row);
		let element = view.index_element(key.tag)?;
		let key_element = match &getter {
			Some(getter) => IndexElement::Value(
				getter.get_view(&element),
			),
			None => element,
		};
		let group = keyed.insert(key_element)?;
		for builder in &mut builders {
			builder.insert(&view, group)?;
		}
	}

	let groups = keyed.len();
	debug!(groups, "single-key grouping finalized");

	let mut columns = vec![keyed.build()];
	for builder in builders {
		columns.push(builder.build(groups)?);
	}

	let mut offsets = OffsetVector::new();
	for column in &columns[1..] {
		push_offsets(&mut offsets, column, groups);
	}
	Context::grouped(columns, offsets)
}

fn two_key(
	graph: &dyn GraphInterface,
	ctx: Context,
	keys: Vec<GroupKey>,
	aggregates: Vec<Aggregate>,
) -> crate::Result<Context> {
	if keys.iter().any(|key| {
		!matches!(key.selector, PropertySelector::Identity)
	}) {
		return Err(Error(property_pair_grouping_unimplemented()));
	}
	for key in &keys {
		resolve_group_key(
			&ctx.column(key.tag)?.shape(),
			&key.selector,
		)?;
	}

	let mut first = ctx.column(keys[0].tag)?.create_builder();
	let mut second = ctx.column(keys[1].tag)?.create_builder();
	let mut pairs: IndexMap<(IndexElement, IndexElement), usize> =
		IndexMap::new();

	let mut builders = aggregates
		.iter()
		.map(|aggregate| ValueBuilder::bind(graph, &ctx, aggregate))
		.collect::<crate::Result<Vec<_>>>()?;

	for row in 0..ctx.row_count() {
		let view = ctx.row(row);
		let pair = (
			view.index_element(keys[0].tag)?,
			view.index_element(keys[1].tag)?,
		);
		let group = match pairs.get(&pair) {
			Some(group) => *group,
			None => {
				let group = pairs.len();
				first.push(pair.0.clone())?;
				second.push(pair.1.clone())?;
				pairs.insert(pair, group);
				group
			}
		};
		for builder in &mut builders {
			builder.insert(&view, group)?;
		}
	}

	let groups = pairs.len();
	if first.len() != second.len() || first.len() != groups {
		return_internal_error!(
			"two-key grouping produced unequal key sets: {} and {} for {} pairs",
			first.len(),
			second.len(),
			groups
		);
	}
	debug!(groups, "two-key grouping finalized");

	let mut columns = vec![first.build(), second.build()];
	for builder in builders {
		columns.push(builder.build(groups)?);
	}

	let mut offsets = OffsetVector::new();
	for column in &columns[1..] {
		push_offsets(&mut offsets, column, groups);
	}
	Context::grouped(columns, offsets)
}

/// One offset slot per non-base column: scalar columns are one-to-one,
/// list columns carry their cumulative list lengths.
fn push_offsets(offsets: &mut OffsetVector, column: &Column, groups: usize) {
	match column {
		Column::List(list) => {
			offsets.push_boundaries(list.offsets().to_vec())
		}
		_ => offsets.push_one_to_one(groups),
	}
}

#[cfg(test)]
mod tests {
	use motif_core::{Type, Value};

	use super::*;
	use crate::{
		columnar::{ValueColumn, VertexColumn},
		test_utils::TestGraph,
	};

	fn utf8_column(data: &[&str]) -> Column {
		Column::Values(ValueColumn::new(
			Type::Utf8,
			data.iter().map(|s| Value::utf8(*s)).collect(),
		))
	}

	fn int8_column(data: &[i64]) -> Column {
		Column::Values(ValueColumn::new(
			Type::Int8,
			data.iter().copied().map(Value::Int8).collect(),
		))
	}

	#[test]
	fn test_rejects_zero_keys() {
		let graph = TestGraph::new();
		let ctx =
			Context::new(vec![int8_column(&[1])]).unwrap();
		let result = group_by(&graph, ctx, vec![], vec![]);
		assert_eq!(result.unwrap_err().code(), "GROUP_003");
	}

	#[test]
	fn test_rejects_three_keys() {
		let graph = TestGraph::new();
		let ctx =
			Context::new(vec![int8_column(&[1])]).unwrap();
		let keys = vec![
			GroupKey::identity(0),
			GroupKey::identity(0),
			GroupKey::identity(0),
		];
		let result = group_by(&graph, ctx, keys, vec![]);
		assert_eq!(result.unwrap_err().code(), "GROUP_003");
	}

	#[test]
	fn test_single_key_count() {
		let graph = TestGraph::new();
		let ctx = Context::new(vec![utf8_column(&[
			"a", "a", "b", "c", "b",
		])])
		.unwrap();
		let out = group_by(
			&graph,
			ctx,
			vec![GroupKey::identity(0)],
			vec![Aggregate::identity(AggregateFunc::Count, 0)],
		)
		.unwrap();

		assert_eq!(out.row_count(), 3);
		let keys = out.column(0).unwrap();
		assert_eq!(
			keys.index_element(0),
			Some(IndexElement::Value(Value::utf8("a")))
		);
		assert_eq!(
			keys.index_element(1),
			Some(IndexElement::Value(Value::utf8("b")))
		);
		assert_eq!(
			keys.index_element(2),
			Some(IndexElement::Value(Value::utf8("c")))
		);
		let counts = out.column(1).unwrap();
		assert_eq!(counts.data_element(0), Value::Uint8(2));
		assert_eq!(counts.data_element(1), Value::Uint8(2));
		assert_eq!(counts.data_element(2), Value::Uint8(1));
	}

	#[test]
	fn test_single_key_offsets_scalar() {
		let graph = TestGraph::new();
		let ctx = Context::new(vec![utf8_column(&["a", "b", "a"])])
			.unwrap();
		let out = group_by(
			&graph,
			ctx,
			vec![GroupKey::identity(0)],
			vec![Aggregate::identity(AggregateFunc::Count, 0)],
		)
		.unwrap();
		let offsets = out.offsets().unwrap();
		assert_eq!(offsets.slots(), 1);
		assert_eq!(offsets.slot(0), Some(&[0, 1, 2][..]));
	}

	#[test]
	fn test_single_key_to_list_offsets() {
		let graph = TestGraph::new();
		let ctx = Context::new(vec![
			utf8_column(&["a", "a", "b", "c", "b"]),
			int8_column(&[10, 20, 30, 40, 50]),
		])
		.unwrap();
		let out = group_by(
			&graph,
			ctx,
			vec![GroupKey::identity(0)],
			vec![Aggregate::identity(AggregateFunc::ToList, 1)],
		)
		.unwrap();

		let Column::List(lists) = out.column(1).unwrap() else {
			panic!("expected list column");
		};
		assert_eq!(
			lists.get(0),
			Some(&[Value::Int8(10), Value::Int8(20)][..])
		);
		assert_eq!(
			lists.get(1),
			Some(&[Value::Int8(30), Value::Int8(50)][..])
		);
		assert_eq!(lists.get(2), Some(&[Value::Int8(40)][..]));

		let offsets = out.offsets().unwrap();
		assert_eq!(offsets.slot(0), Some(&[0, 2, 4, 5][..]));
	}

	#[test]
	fn test_single_key_empty_input() {
		let graph = TestGraph::new();
		let ctx = Context::new(vec![utf8_column(&[])]).unwrap();
		let out = group_by(
			&graph,
			ctx,
			vec![GroupKey::identity(0)],
			vec![Aggregate::identity(AggregateFunc::Count, 0)],
		)
		.unwrap();
		assert_eq!(out.row_count(), 0);
		assert_eq!(out.offsets().unwrap().groups(), Some(0));
	}

	#[test]
	fn test_property_key_groups_through_graph() {
		let mut graph = TestGraph::new();
		graph.set_property(1, 10, "city", Value::utf8("rome"));
		graph.set_property(1, 20, "city", Value::utf8("oslo"));
		graph.set_property(1, 30, "city", Value::utf8("rome"));
		let ctx = Context::new(vec![Column::Vertex(
			VertexColumn::new(1, vec![10, 20, 30]),
		)])
		.unwrap();
		let out = group_by(
			&graph,
			ctx,
			vec![GroupKey::new(
				0,
				PropertySelector::property(
					"city",
					Type::Utf8,
				),
			)],
			vec![Aggregate::identity(AggregateFunc::Count, 0)],
		)
		.unwrap();
		assert_eq!(out.row_count(), 2);
		assert_eq!(
			out.column(0).unwrap().index_element(0),
			Some(IndexElement::Value(Value::utf8("rome")))
		);
		assert_eq!(
			out.column(1).unwrap().data_element(0),
			Value::Uint8(2)
		);
	}

	#[test]
	fn test_two_key_pairs() {
		let graph = TestGraph::new();
		let ctx = Context::new(vec![
			int8_column(&[1, 1, 2]),
			utf8_column(&["x", "x", "y"]),
		])
		.unwrap();
		let out = group_by(
			&graph,
			ctx,
			vec![GroupKey::identity(0), GroupKey::identity(1)],
			vec![Aggregate::identity(AggregateFunc::Count, 0)],
		)
		.unwrap();

		assert_eq!(out.row_count(), 2);
		assert_eq!(
			out.column(0).unwrap().len(),
			out.column(1).unwrap().len()
		);
		assert_eq!(
			out.column(2).unwrap().data_element(0),
			Value::Uint8(2)
		);
		assert_eq!(
			out.column(2).unwrap().data_element(1),
			Value::Uint8(1)
		);
		// one slot for the second key column, one per aggregate
		assert_eq!(out.offsets().unwrap().slots(), 2);
	}

	#[test]
	fn test_two_key_rejects_property_selector() {
		let graph = TestGraph::new();
		let ctx = Context::new(vec![
			Column::Vertex(VertexColumn::new(1, vec![10])),
			int8_column(&[1]),
		])
		.unwrap();
		let keys = vec![
			GroupKey::new(
				0,
				PropertySelector::property(
					"city",
					Type::Utf8,
				),
			),
			GroupKey::identity(1),
		];
		let result = group_by(&graph, ctx, keys, vec![]);
		assert_eq!(result.unwrap_err().code(), "GROUP_004");
	}

	#[test]
	fn test_grouping_is_idempotent_over_grouped_keys() {
		let graph = TestGraph::new();
		let ctx = Context::new(vec![utf8_column(&[
			"a", "b", "a", "b",
		])])
		.unwrap();
		let once = group_by(
			&graph,
			ctx,
			vec![GroupKey::identity(0)],
			vec![Aggregate::identity(AggregateFunc::Count, 0)],
		)
		.unwrap();
		let twice = group_by(
			&graph,
			Context::new(vec![once.column(0).unwrap().clone()])
				.unwrap(),
			vec![GroupKey::identity(0)],
			vec![Aggregate::identity(AggregateFunc::Count, 0)],
		)
		.unwrap();
		assert_eq!(twice.row_count(), once.row_count());
		assert_eq!(
			twice.column(0).unwrap(),
			once.column(0).unwrap()
		);
	}
}
