// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Result shape resolution for grouping.
//!
//! Maps (source column shape, aggregate function, selector) to the shape
//! of the produced column before any row is scanned. The mapping is pure
//! and total over the supported combinations; everything outside it is a
//! setup failure, not a data error.

use motif_core::{
	Error, Type,
	diagnostic::query::{unsupported_aggregate, unsupported_group_key},
};

use crate::{
	columnar::ColumnShape,
	execute::group::{AggregateFunc, PropertySelector},
};

/// The shape of the key column produced by grouping on `source` through
/// `selector`.
pub fn resolve_group_key(
	source: &ColumnShape,
	selector: &PropertySelector,
) -> crate::Result<ColumnShape> {
	match (source, selector) {
		(ColumnShape::Vertex(_), PropertySelector::Identity)
		| (ColumnShape::TwoLabelVertex(_), PropertySelector::Identity)
		| (ColumnShape::Values(_), PropertySelector::Identity) => {
			Ok(*source)
		}
		(
			ColumnShape::Vertex(_) | ColumnShape::TwoLabelVertex(_),
			PropertySelector::Property {
				ty, ..
			},
		) => Ok(ColumnShape::Values(*ty)),
		_ => Err(Error(unsupported_group_key(
			&source.to_string(),
			&selector.to_string(),
		))),
	}
}

/// The shape of the value column produced by `func` over `source` through
/// `selector`.
pub fn resolve_aggregate(
	source: &ColumnShape,
	func: AggregateFunc,
	selector: &PropertySelector,
) -> crate::Result<ColumnShape> {
	use AggregateFunc::*;

	let unsupported = || {
		Err(Error(unsupported_aggregate(
			&source.to_string(),
			&func.to_string(),
			&selector.to_string(),
		)))
	};

	// The table is deliberately one-directional: MIN applies to
	// collections, MAX to single-label vertex properties, and two-label
	// columns admit FIRST by identity only.
	match selector {
		PropertySelector::Identity => match (func, source) {
			// counts apply to every shape
			(Count | CountDistinct, _) => {
				Ok(ColumnShape::Values(Type::Uint8))
			}
			(Sum, ColumnShape::Values(ty)) if ty.is_number() => {
				Ok(ColumnShape::Values(*ty))
			}
			(Min | First, ColumnShape::Values(ty)) => {
				Ok(ColumnShape::Values(*ty))
			}
			(ToList | ToSet, ColumnShape::Values(ty)) => {
				Ok(ColumnShape::List(*ty))
			}
			// FIRST keeps the vertex itself
			(First, ColumnShape::Vertex(_))
			| (First, ColumnShape::TwoLabelVertex(_)) => {
				Ok(*source)
			}
			_ => unsupported(),
		},
		PropertySelector::Property {
			ty, ..
		} => match (func, source) {
			(Max | First, ColumnShape::Vertex(_)) => {
				Ok(ColumnShape::Values(*ty))
			}
			(ToList | ToSet, ColumnShape::Vertex(_)) => {
				Ok(ColumnShape::List(*ty))
			}
			_ => unsupported(),
		},
	}
}
