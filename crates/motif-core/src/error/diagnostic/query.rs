// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Diagnostics for grouping and aggregation plans.
//!
//! All of these describe setup-time failures: the plan is malformed or asks
//! for a combination the engine does not support. None of them are
//! retryable.

use crate::error::diagnostic::Diagnostic;

/// The resolver has no output shape for this (source shape, function,
/// selector) combination.
pub fn unsupported_aggregate(
	source: impl Into<String>,
	func: impl Into<String>,
	selector: impl Into<String>,
) -> Diagnostic {
	let source = source.into();
	let func = func.into();
	let selector = selector.into();
	Diagnostic {
		code: "GROUP_001".to_string(),
		message: format!(
			"aggregate {} is not supported over {} with selector {}",
			func, source, selector
		),
		label: Some("unsupported aggregate combination".to_string()),
		help: Some(
			"the set of aggregate functions and their input shapes is fixed; \
			 check the source column shape and the property selector"
				.to_string(),
		),
		notes: vec![
			"COUNT and COUNT_DISTINCT apply to any column with the identity selector".to_string(),
			"SUM, MIN, FIRST, TO_LIST and TO_SET apply to value collections".to_string(),
			"MAX, FIRST, TO_LIST and TO_SET apply to single-label vertex columns via a property selector".to_string(),
			"two-label vertex columns support FIRST by identity only".to_string(),
		],
		cause: None,
	}
}

/// The group key column cannot be keyed with the given selector.
pub fn unsupported_group_key(
	source: impl Into<String>,
	selector: impl Into<String>,
) -> Diagnostic {
	let source = source.into();
	let selector = selector.into();
	Diagnostic {
		code: "GROUP_002".to_string(),
		message: format!(
			"cannot group {} with selector {}",
			source, selector
		),
		label: Some("unsupported group key".to_string()),
		help: Some(
			"group by a column's native identity, or by a vertex property"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}

/// Grouping was requested with a key count outside the supported range.
pub fn unsupported_group_key_count(count: usize) -> Diagnostic {
	Diagnostic {
		code: "GROUP_003".to_string(),
		message: format!(
			"grouping by {} keys is not supported, expected one or two",
			count
		),
		label: Some("one or two group keys".to_string()),
		help: Some(
			"restructure the query to group by one or two key columns"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}

/// Two-key grouping where a key is property-based is explicitly
/// unimplemented.
pub fn property_pair_grouping_unimplemented() -> Diagnostic {
	Diagnostic {
		code: "GROUP_004".to_string(),
		message: "two-key grouping over property-based keys is not implemented"
			.to_string(),
		label: Some("unimplemented grouping path".to_string()),
		help: Some(
			"group both keys by native identity, or project the property \
			 into a collection column first"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}

/// Key-less fold aggregation needs a sub-task scope to derive group
/// indices from.
pub fn fold_missing_sub_task_scope() -> Diagnostic {
	Diagnostic {
		code: "GROUP_005".to_string(),
		message: "fold aggregation requires a sub-task scope on the context"
			.to_string(),
		label: Some("no sub-task start tag".to_string()),
		help: Some(
			"fold aggregates by position within the current sub-scope; \
			 without a sub-task start tag there is no group index source"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}

/// Key-less fold with more than one aggregate descriptor is unspecified.
pub fn fold_multiple_aggregates(count: usize) -> Diagnostic {
	Diagnostic {
		code: "GROUP_006".to_string(),
		message: format!(
			"fold aggregation expects exactly one aggregate, got {}",
			count
		),
		label: Some("multi-aggregate fold rejected".to_string()),
		help: Some(
			"run one fold per aggregate, or group by a key column instead"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}
