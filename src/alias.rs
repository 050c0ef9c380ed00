/*!
# Argpick: Aliases.
*/

use std::{
	iter::FusedIterator,
	str::Split,
};



/// # Alias Separator.
pub const SEPARATOR: char = '|';



#[derive(Debug, Clone)]
/// # Alias Iterator.
///
/// This splits an alias specification like `"-h|--help|help"` into its
/// individual spellings, borrowing from the original string.
///
/// Empty spellings — from `||` or a leading/trailing `|` — are skipped, so
/// a specification consisting only of separators yields nothing.
///
/// ## Examples
///
/// ```
/// use argpick::Aliases;
///
/// let all: Vec<&str> = Aliases::new("-h||--help|").collect();
/// assert_eq!(all, ["-h", "--help"]);
/// ```
pub struct Aliases<'a> {
	/// # Raw Splitter.
	inner: Split<'a, char>,
}

impl<'a> Aliases<'a> {
	#[must_use]
	#[inline]
	/// # New.
	pub fn new(spec: &'a str) -> Self {
		Self { inner: spec.split(SEPARATOR) }
	}
}

impl<'a> Iterator for Aliases<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.by_ref().find(|a| ! a.is_empty())
	}
}

impl FusedIterator for Aliases<'_> {}



/// # Match Shape.
///
/// How a single argument relates to a single alias.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Shape<'a> {
	/// # Exact Match.
	///
	/// The argument and the alias are identical.
	Exact,

	/// # Key/Value.
	///
	/// The argument starts with the alias and contains an `=` somewhere; this
	/// holds everything after that first `=`.
	Assign(&'a str),
}

impl<'a> Shape<'a> {
	/// # Classify.
	///
	/// Exact matches take priority; otherwise see [`Shape::assigned`].
	pub(crate) fn of(arg: &'a str, alias: &str) -> Option<Self> {
		if arg == alias { Some(Self::Exact) }
		else { Self::assigned(arg, alias).map(Self::Assign) }
	}

	/// # Assigned Value.
	///
	/// Return the part after the first `=` if `arg` starts with `alias`.
	///
	/// Note the `=` is searched for across the _whole_ argument, not just
	/// the part following the alias, so `--flagger=1` counts as a value
	/// for `--flag`.
	pub(crate) fn assigned(arg: &'a str, alias: &str) -> Option<&'a str> {
		if arg.starts_with(alias) { arg.split_once('=').map(|(_, v)| v) }
		else { None }
	}
}
