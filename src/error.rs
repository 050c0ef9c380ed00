/*!
# Argpick: Errors.

The default queries never fail; this is only used by the strict lookups.
*/

use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Error!
pub enum ArgError {
	#[error("Invalid value for {flag}: {value:?} ({reason})")]
	/// # Invalid Value.
	///
	/// A value was found but could not be parsed into the requested type.
	InvalidValue {
		/// # The Matching Alias.
		flag: String,

		/// # The Raw Value.
		value: String,

		/// # Parse Error Text.
		reason: String,
	},
}

impl ArgError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return a short description without the particulars.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::InvalidValue { .. } => "Invalid value.",
		}
	}

	#[must_use]
	/// # Flag.
	///
	/// Return the alias the offending value was attached to.
	pub fn flag(&self) -> &str {
		match self {
			Self::InvalidValue { flag, .. } => flag,
		}
	}
}
