// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Diagnostic error modules.
//!
//! Query-level diagnostics describe malformed or unsupported plans;
//! internal diagnostics describe invariant violations that indicate a bug.

pub mod internal;
pub mod query;

use std::fmt::{Display, Formatter};

pub use internal::{internal, internal_with_context};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}", self.code, self.message)?;
		if let Some(label) = &self.label {
			write!(f, "\n  --> {}", label)?;
		}
		if let Some(help) = &self.help {
			write!(f, "\n  help: {}", help)?;
		}
		for note in &self.notes {
			write!(f, "\n  note: {}", note)?;
		}
		if let Some(cause) = &self.cause {
			write!(f, "\n  caused by: {}", cause)?;
		}
		Ok(())
	}
}
