// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use motif_core::{Error, Result};

pub mod columnar;
pub mod context;
pub mod execute;
pub mod graph;
pub mod test_utils;

pub use columnar::{
	Column, ColumnShape, IndexElement, LabelId, OffsetVector, VertexId,
};
pub use context::Context;
pub use execute::group::{
	Aggregate, AggregateFunc, GroupKey, PropertySelector, fold, group_by,
};
pub use graph::{GraphInterface, PropertyGetter};
