// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use motif_core::{Type, Value};
use serde::{Deserialize, Serialize};

/// A generic collection column: a sequence of values of one element type.
///
/// Individual entries may still be [`Value::Undefined`], e.g. when a
/// property lookup came back empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueColumn {
	ty: Type,
	data: Vec<Value>,
}

impl ValueColumn {
	pub fn new(ty: Type, data: Vec<Value>) -> Self {
		debug_assert!(data.iter().all(|value| {
			value.ty() == ty || value.ty() == Type::Undefined
		}));
		Self {
			ty,
			data,
		}
	}

	pub fn empty(ty: Type) -> Self {
		Self::new(ty, Vec::new())
	}

	pub fn ty(&self) -> Type {
		self.ty
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get(&self, idx: usize) -> Option<&Value> {
		self.data.get(idx)
	}

	pub fn push(&mut self, value: Value) {
		debug_assert!(
			value.ty() == self.ty
				|| value.ty() == Type::Undefined
		);
		self.data.push(value);
	}

	pub fn iter(&self) -> impl Iterator<Item = &Value> {
		self.data.iter()
	}
}
