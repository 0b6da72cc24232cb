// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use serde::{Deserialize, Serialize};

use crate::columnar::{LabelId, VertexId};

/// A column of vertices that all share one label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexColumn {
	label: LabelId,
	vids: Vec<VertexId>,
}

impl VertexColumn {
	pub fn new(label: LabelId, vids: Vec<VertexId>) -> Self {
		Self {
			label,
			vids,
		}
	}

	pub fn label(&self) -> LabelId {
		self.label
	}

	pub fn len(&self) -> usize {
		self.vids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vids.is_empty()
	}

	pub fn get(&self, idx: usize) -> Option<VertexId> {
		self.vids.get(idx).copied()
	}

	pub fn push(&mut self, vid: VertexId) {
		self.vids.push(vid);
	}

	pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
		self.vids.iter().copied()
	}
}

/// A column of vertices drawn from two labels, with a per-row slot
/// recording which of the two each vertex belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TwoLabelVertexColumn {
	labels: [LabelId; 2],
	vids: Vec<VertexId>,
	// slot i selects labels[slots[i]] for vids[i]
	slots: Vec<u8>,
}

impl TwoLabelVertexColumn {
	pub fn new(
		labels: [LabelId; 2],
		vids: Vec<VertexId>,
		slots: Vec<u8>,
	) -> Self {
		debug_assert_eq!(vids.len(), slots.len());
		debug_assert!(slots.iter().all(|slot| *slot < 2));
		Self {
			labels,
			vids,
			slots,
		}
	}

	pub fn empty(labels: [LabelId; 2]) -> Self {
		Self::new(labels, Vec::new(), Vec::new())
	}

	pub fn labels(&self) -> [LabelId; 2] {
		self.labels
	}

	pub fn len(&self) -> usize {
		self.vids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vids.is_empty()
	}

	pub fn get(&self, idx: usize) -> Option<(LabelId, VertexId)> {
		let vid = self.vids.get(idx).copied()?;
		let slot = self.slots[idx] as usize;
		Some((self.labels[slot], vid))
	}

	/// Pushes a vertex whose label must be one of the column's two
	/// labels.
	pub fn push(&mut self, label: LabelId, vid: VertexId) -> bool {
		let Some(slot) =
			self.labels.iter().position(|l| *l == label)
		else {
			return false;
		};
		self.vids.push(vid);
		self.slots.push(slot as u8);
		true
	}

	pub fn iter(
		&self,
	) -> impl Iterator<Item = (LabelId, VertexId)> + '_ {
		self.vids.iter().zip(self.slots.iter()).map(|(vid, slot)| {
			(self.labels[*slot as usize], *vid)
		})
	}
}
