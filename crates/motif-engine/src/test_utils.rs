// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! In-memory graph fixture for tests.

use std::collections::HashMap;

use motif_core::Value;

use crate::{
	columnar::{LabelId, VertexId},
	graph::GraphInterface,
};

/// A property map keyed by (label, vertex, property name). Missing
/// entries resolve to [`Value::Undefined`], like absent properties in a
/// real store.
#[derive(Debug, Default)]
pub struct TestGraph {
	properties: HashMap<(LabelId, VertexId, String), Value>,
}

impl TestGraph {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_property(
		&mut self,
		label: LabelId,
		vid: VertexId,
		property: impl Into<String>,
		value: Value,
	) {
		self.properties
			.insert((label, vid, property.into()), value);
	}
}

impl GraphInterface for TestGraph {
	fn vertex_property(
		&self,
		label: LabelId,
		vid: VertexId,
		property: &str,
	) -> Value {
		self.properties
			.get(&(label, vid, property.to_string()))
			.cloned()
			.unwrap_or(Value::Undefined)
	}
}
