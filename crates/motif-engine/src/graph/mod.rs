// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! The read-only boundary to graph storage.
//!
//! The grouping operator never mutates the graph; it borrows a shared
//! handle for the duration of one invocation and consults it only when a
//! key or aggregate selects a vertex property.

use motif_core::Value;

use crate::columnar::{IndexElement, LabelId, VertexId};

/// Read-only access to vertex properties, provided by the storage layer.
///
/// Implementations are expected to be in-memory and already resident:
/// lookups must not block.
pub trait GraphInterface {
	/// The value of `property` on the given vertex, or
	/// [`Value::Undefined`] when the vertex carries no such property.
	fn vertex_property(
		&self,
		label: LabelId,
		vid: VertexId,
		property: &str,
	) -> Value;
}

/// A property selector bound to a graph, constructed once before the row
/// scan and applied per element.
pub struct PropertyGetter<'g> {
	graph: &'g dyn GraphInterface,
	property: String,
}

impl<'g> PropertyGetter<'g> {
	pub fn new(
		graph: &'g dyn GraphInterface,
		property: impl Into<String>,
	) -> Self {
		Self {
			graph,
			property: property.into(),
		}
	}

	/// The property view of one row element. Collection elements are
	/// their own view; vertex elements resolve through the graph.
	pub fn get_view(&self, element: &IndexElement) -> Value {
		match element {
			IndexElement::Vertex {
				label,
				vid,
			} => self.graph.vertex_property(
				*label,
				*vid,
				&self.property,
			),
			IndexElement::Value(value) => value.clone(),
		}
	}
}
