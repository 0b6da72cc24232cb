// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod ordered_float;

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

pub use ordered_float::{OrderedF64, OrderedFloatError};
use serde::{Deserialize, Serialize};

/// The shape tag of a [`Value`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Bool,
	/// An 8-byte signed integer
	Int8,
	/// An 8-byte unsigned integer
	Uint8,
	/// An 8-byte floating point
	Float8,
	/// A UTF-8 encoded text
	Utf8,
	/// An ordered sequence of values
	List,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(self, Type::Int8 | Type::Uint8 | Type::Float8)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Bool => f.write_str("BOOL"),
			Type::Int8 => f.write_str("INT8"),
			Type::Uint8 => f.write_str("UINT8"),
			Type::Float8 => f.write_str("FLOAT8"),
			Type::Utf8 => f.write_str("UTF8"),
			Type::List => f.write_str("LIST"),
			Type::Undefined => f.write_str("UNDEFINED"),
		}
	}
}

/// A graph property value, represented as a native Rust type.
///
/// Hash and Eq cover every variant, so values can serve as group keys
/// directly; floats hash by bit pattern through [`OrderedF64`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Bool(bool),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte unsigned integer
	Uint8(u64),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// An ordered sequence of values
	List(Vec<Value>),
}

impl Value {
	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into())
			.map(Value::Float8)
			.unwrap_or(Value::Undefined)
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn ty(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Bool(_) => Type::Bool,
			Value::Int8(_) => Type::Int8,
			Value::Uint8(_) => Type::Uint8,
			Value::Float8(_) => Type::Float8,
			Value::Utf8(_) => Type::Utf8,
			Value::List(_) => Type::List,
		}
	}

	/// Numeric addition within one type. `None` when the operands are
	/// not both numbers of the same type or the sum overflows.
	pub fn checked_add(&self, other: &Value) -> Option<Value> {
		match (self, other) {
			(Value::Int8(a), Value::Int8(b)) => {
				a.checked_add(*b).map(Value::Int8)
			}
			(Value::Uint8(a), Value::Uint8(b)) => {
				a.checked_add(*b).map(Value::Uint8)
			}
			(Value::Float8(a), Value::Float8(b)) => {
				OrderedF64::try_from(a.value() + b.value())
					.ok()
					.map(Value::Float8)
			}
			_ => None,
		}
	}
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Value::Undefined, Value::Undefined) => {
				Some(Ordering::Equal)
			}
			(Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
			(Value::Int8(a), Value::Int8(b)) => a.partial_cmp(b),
			(Value::Uint8(a), Value::Uint8(b)) => a.partial_cmp(b),
			(Value::Float8(a), Value::Float8(b)) => {
				a.partial_cmp(b)
			}
			(Value::Utf8(a), Value::Utf8(b)) => a.partial_cmp(b),
			(Value::List(a), Value::List(b)) => a.partial_cmp(b),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Bool(true) => f.write_str("true"),
			Value::Bool(false) => f.write_str("false"),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::List(values) => {
				f.write_str("[")?;
				for (idx, value) in values.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str("]")
			}
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl From<u64> for Value {
	fn from(v: u64) -> Self {
		Value::Uint8(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ty_matches_variant() {
		assert_eq!(Value::Int8(1).ty(), Type::Int8);
		assert_eq!(Value::utf8("a").ty(), Type::Utf8);
		assert_eq!(Value::List(vec![]).ty(), Type::List);
		assert_eq!(Value::Undefined.ty(), Type::Undefined);
	}

	#[test]
	fn test_checked_add_same_type() {
		assert_eq!(
			Value::Int8(2).checked_add(&Value::Int8(3)),
			Some(Value::Int8(5))
		);
		assert_eq!(
			Value::Uint8(2).checked_add(&Value::Uint8(3)),
			Some(Value::Uint8(5))
		);
		assert_eq!(
			Value::float8(1.5).checked_add(&Value::float8(2.5)),
			Some(Value::float8(4.0))
		);
	}

	#[test]
	fn test_checked_add_overflow() {
		assert_eq!(
			Value::Int8(i64::MAX).checked_add(&Value::Int8(1)),
			None
		);
	}

	#[test]
	fn test_checked_add_type_mismatch() {
		assert_eq!(
			Value::Int8(1).checked_add(&Value::Uint8(1)),
			None
		);
		assert_eq!(
			Value::utf8("a").checked_add(&Value::utf8("b")),
			None
		);
	}

	#[test]
	fn test_partial_cmp_cross_type_is_none() {
		assert_eq!(
			Value::Int8(1).partial_cmp(&Value::utf8("a")),
			None
		);
	}

	#[test]
	fn test_display_list() {
		let value = Value::List(vec![
			Value::Int8(1),
			Value::utf8("x"),
			Value::Undefined,
		]);
		assert_eq!(value.to_string(), "[1, x, undefined]");
	}

	#[test]
	fn test_float_value_is_hashable_key() {
		use std::collections::HashMap;
		let mut map = HashMap::new();
		map.insert(Value::float8(1.0), 0usize);
		assert_eq!(map.get(&Value::float8(1.0)), Some(&0));
	}
}
