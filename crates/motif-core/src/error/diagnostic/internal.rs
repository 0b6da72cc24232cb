// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::error::diagnostic::Diagnostic;

/// Creates a detailed internal error diagnostic with source location and
/// context
pub fn internal_with_context(
	reason: impl Into<String>,
	file: &str,
	line: u32,
	column: u32,
	module_path: &str,
) -> Diagnostic {
	let reason = reason.into();

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("Internal error: {}", reason),
		label: Some(format!(
			"Internal invariant violated at {}:{}:{}",
			file, line, column
		)),
		help: Some(format!(
			"This is an internal error that should never occur in normal operation.\n\
			 Please file a bug report at: https://github.com/reifydb/motif/issues\n\
			 Location: {}:{}:{}\n\
			 Module: {}\n\
			 Version: {}",
			file,
			line,
			column,
			module_path,
			env!("CARGO_PKG_VERSION"),
		)),
		notes: vec![
			"This error indicates a critical internal inconsistency.".to_string(),
			"The operation was aborted before producing output.".to_string(),
		],
		cause: None,
	}
}

/// Simplified internal error without detailed context
pub fn internal(reason: impl Into<String>) -> Diagnostic {
	internal_with_context(reason, "unknown", 0, 0, "unknown")
}

/// Macro to create an internal error with automatic source location capture
#[macro_export]
macro_rules! internal_error {
    ($reason:expr) => {
        $crate::error::diagnostic::internal_with_context(
            $reason,
            file!(),
            line!(),
            column!(),
            module_path!(),
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::diagnostic::internal_with_context(
            format!($fmt, $($arg)*),
            file!(),
            line!(),
            column!(),
            module_path!(),
        )
    };
}

/// Macro to create an internal error result with automatic source location
/// capture
#[macro_export]
macro_rules! internal_err {
    ($reason:expr) => {
        Err($crate::error::Error($crate::internal_error!($reason)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::error::Error($crate::internal_error!($fmt, $($arg)*)))
    };
}

/// Macro to return an internal error with automatic source location capture
#[macro_export]
macro_rules! return_internal_error {
    ($reason:expr) => {
        return Err($crate::error::Error($crate::internal_error!($reason)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error($crate::internal_error!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_internal_error_literal_string() {
		let diagnostic = internal_error!("simple error message");

		assert_eq!(diagnostic.code, "INTERNAL_ERROR");
		assert!(diagnostic.message.contains("simple error message"));
		assert!(diagnostic.help.is_some());
		assert!(diagnostic
			.help
			.as_ref()
			.unwrap()
			.contains("bug report"));
		assert!(diagnostic.notes.len() > 0);
	}

	#[test]
	fn test_internal_error_with_format() {
		let value = 42;
		let diagnostic =
			internal_error!("Error with value: {}", value);

		assert_eq!(diagnostic.code, "INTERNAL_ERROR");
		assert!(diagnostic.message.contains("Error with value: 42"));
		assert!(diagnostic
			.label
			.as_ref()
			.unwrap()
			.contains("Internal invariant violated"));
	}

	#[test]
	fn test_internal_err_literal_string() {
		let result: Result<(), crate::Error> =
			internal_err!("test error");

		assert!(result.is_err());
		let error = result.unwrap_err();
		assert_eq!(error.0.code, "INTERNAL_ERROR");
		assert!(error.0.message.contains("test error"));
	}

	#[test]
	fn test_return_internal_error_in_function() {
		fn inner(sizes: (usize, usize)) -> Result<(), crate::Error> {
			return_internal_error!(
				"size mismatch: {} != {}",
				sizes.0,
				sizes.1
			);
		}

		let result = inner((3, 4));
		assert!(result.is_err());
		let error = result.unwrap_err();
		assert_eq!(error.0.code, "INTERNAL_ERROR");
		assert!(error.0.message.contains("size mismatch: 3 != 4"));
	}

	#[test]
	fn test_internal_function() {
		let diagnostic = internal("basic internal error");

		assert_eq!(diagnostic.code, "INTERNAL_ERROR");
		assert!(diagnostic.message.contains("basic internal error"));
		assert!(diagnostic
			.label
			.as_ref()
			.unwrap()
			.contains("unknown:0:0"));
	}
}
