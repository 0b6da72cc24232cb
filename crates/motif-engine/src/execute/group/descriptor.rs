// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

use motif_core::Type;
use serde::{Deserialize, Serialize};

/// The aggregation function applied to the rows of one group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunc {
	Count,
	CountDistinct,
	Sum,
	Min,
	Max,
	First,
	ToList,
	ToSet,
}

impl Display for AggregateFunc {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			AggregateFunc::Count => "COUNT",
			AggregateFunc::CountDistinct => "COUNT_DISTINCT",
			AggregateFunc::Sum => "SUM",
			AggregateFunc::Min => "MIN",
			AggregateFunc::Max => "MAX",
			AggregateFunc::First => "FIRST",
			AggregateFunc::ToList => "TO_LIST",
			AggregateFunc::ToSet => "TO_SET",
		};
		f.write_str(name)
	}
}

/// How a key or aggregate reads its input column: the element itself, or
/// one of its properties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertySelector {
	/// The element identity as stored in the column.
	Identity,
	/// A named property fetched through the graph, with its declared
	/// type.
	Property {
		name: String,
		ty: Type,
	},
}

impl PropertySelector {
	pub fn property(name: impl Into<String>, ty: Type) -> Self {
		PropertySelector::Property {
			name: name.into(),
			ty,
		}
	}
}

impl Display for PropertySelector {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PropertySelector::Identity => f.write_str("IDENTITY"),
			PropertySelector::Property {
				name,
				ty,
			} => write!(f, "PROPERTY({}: {})", name, ty),
		}
	}
}

/// One grouping key: the tagged column to read and how to read it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupKey {
	pub tag: usize,
	pub selector: PropertySelector,
}

impl GroupKey {
	pub fn new(tag: usize, selector: PropertySelector) -> Self {
		Self {
			tag,
			selector,
		}
	}

	pub fn identity(tag: usize) -> Self {
		Self::new(tag, PropertySelector::Identity)
	}
}

/// One aggregate: the function, the tagged column it consumes, and how it
/// reads that column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
	pub func: AggregateFunc,
	pub tag: usize,
	pub selector: PropertySelector,
}

impl Aggregate {
	pub fn new(
		func: AggregateFunc,
		tag: usize,
		selector: PropertySelector,
	) -> Self {
		Self {
			func,
			tag,
			selector,
		}
	}

	pub fn identity(func: AggregateFunc, tag: usize) -> Self {
		Self::new(func, tag, PropertySelector::Identity)
	}
}
