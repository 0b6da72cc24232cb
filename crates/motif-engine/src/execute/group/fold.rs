// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use motif_core::{
	Error,
	diagnostic::query::{
		fold_missing_sub_task_scope, fold_multiple_aggregates,
	},
};
use tracing::debug;

use crate::{
	context::Context,
	execute::group::{Aggregate, builder::ValueBuilder},
	graph::GraphInterface,
};

/// Key-less aggregation over the current sub-task scope.
///
/// Every row is its own group: the group index is the row's offset within
/// the scope opened at the context's sub-task start tag. The output
/// augments the input context with one new column above the previous
/// highest tag, so earlier columns keep their tags and the head moves to
/// the new column.
pub fn fold(
	graph: &dyn GraphInterface,
	mut ctx: Context,
	aggregates: Vec<Aggregate>,
) -> crate::Result<Context> {
	let start_tag = match ctx.sub_task_start_tag() {
		Some(tag) => tag,
		None => return Err(Error(fold_missing_sub_task_scope())),
	};
	if aggregates.len() != 1 {
		return Err(Error(fold_multiple_aggregates(
			aggregates.len(),
		)));
	}
	let aggregate = &aggregates[0];
	debug!(
		start_tag,
		rows = ctx.row_count(),
		"fold aggregation"
	);

	let mut builder = ValueBuilder::bind(graph, &ctx, aggregate)?;
	for row in 0..ctx.row_count() {
		let group = ctx.tag_offset(row, start_tag)?;
		builder.insert(&ctx.row(row), group)?;
	}
	let column = builder.build(ctx.row_count())?;
	ctx.push_column(column)?;
	Ok(ctx)
}
