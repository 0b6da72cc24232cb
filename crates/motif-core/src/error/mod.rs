// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

pub mod diagnostic;

use std::fmt::{Display, Formatter};

use diagnostic::Diagnostic;

/// The single error carrier of the engine. Every failure, whether a
/// malformed plan or an internal invariant violation, surfaces as one
/// [`Diagnostic`].
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(diagnostic)
	}
}
