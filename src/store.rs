/*!
# Argpick: Argument Store.
*/

use crate::{
	alias::Shape,
	value,
	Aliases,
	ArgError,
};
use std::{
	fmt,
	io,
	str::FromStr,
};



#[derive(Debug)]
/// # Argument Store.
///
/// `ArgStore` holds a borrowed argument vector and answers typed lookups
/// against it. There is no parsing step; every query re-scans the raw
/// arguments from scratch, so queries can be issued in any order, any number
/// of times, without affecting one another.
///
/// The first entry (index `0`) is assumed to be the program path and is
/// never matched.
///
/// Queries accept an alias specification — one or more spellings of the same
/// flag joined by `|`, like `"-h|--help"` — and recognize the following
/// shapes for each spelling `F`:
/// * `F` on its own, or followed by a value in the next argument;
/// * `F=value`;
/// * `F="quoted value"` (string lookups only strip the quotes);
///
/// The default queries never fail. Missing or nonsensical values resolve
/// to `false`, `0`, `0.0`, or `None`. If you'd rather hear about bad
/// input, see [`ArgStore::value`].
///
/// ## Matching Rules
///
/// These are a little quirky, but consistent:
/// * The alias spellings are searched in order, each against every argument.
/// * A `F=value` match only requires the argument to _start with_ `F` and
///   contain an `=`, so `--flagger=1` is a hit for `--flag`.
/// * Numeric and string lookups keep the _last_ hit.
/// * Boolean lookups prefer the last `F=value` hit, falling back to the
///   _first_ bare `F` hit.
/// * A value following a bare `F` must start with a digit to count for
///   numeric lookups, so `--count -5` is ignored (use `--count=-5`).
/// * Boolean words following a bare `F` are case-insensitive, but those in
///   an `F=value` pair are not.
///
/// ## Examples
///
/// ```
/// use argpick::ArgStore;
///
/// let argv = ["prog", "-v", "--count", "42", "--name=\"John Smith\""];
/// let args = ArgStore::new(&argv);
///
/// assert!(args.bool("-v|--verbose"));
/// assert_eq!(args.int("-c|--count"), 42);
/// assert_eq!(args.float("--ratio"), 0.0);
/// assert_eq!(args.string("-n|--name"), Some("John Smith"));
/// ```
pub struct ArgStore<'a, T = String> {
	/// # Arguments.
	argv: &'a [T],
}

impl<T> Clone for ArgStore<'_, T> {
	#[inline]
	fn clone(&self) -> Self { *self }
}

impl<T> Copy for ArgStore<'_, T> {}

impl<T> Default for ArgStore<'_, T> {
	#[inline]
	fn default() -> Self { Self { argv: &[] } }
}

impl<'a, T> From<&'a [T]> for ArgStore<'a, T> {
	#[inline]
	fn from(argv: &'a [T]) -> Self { Self { argv } }
}

impl<'a, T> ArgStore<'a, T> {
	#[must_use]
	#[inline]
	/// # New.
	///
	/// Wrap an argument vector. The first entry should be the program path.
	///
	/// ## Examples
	///
	/// ```
	/// let argv = argpick::env_args();
	/// let args = argpick::ArgStore::new(&argv);
	/// ```
	pub const fn new(argv: &'a [T]) -> Self { Self { argv } }

	#[inline]
	/// # Set Arguments.
	///
	/// Replace the wrapped argument vector.
	pub fn set_args(&mut self, argv: &'a [T]) { self.argv = argv; }

	#[must_use]
	#[inline]
	/// # Raw Arguments.
	pub const fn argv(&self) -> &'a [T] { self.argv }

	#[must_use]
	#[inline]
	/// # Length.
	///
	/// Return the total number of arguments, including the program path.
	pub const fn len(&self) -> usize { self.argv.len() }

	#[must_use]
	#[inline]
	/// # Is Empty?
	pub const fn is_empty(&self) -> bool { self.argv.is_empty() }
}

/// ## Queries.
impl<'a, T: AsRef<str>> ArgStore<'a, T> {
	#[must_use]
	/// # Boolean.
	///
	/// A bare flag is `true` unless the next argument is one of
	/// [`FALSY`](crate::FALSY) (case-insensitive). An `F=value` pair is only
	/// considered if its value is one of [`TRUTHY`](crate::TRUTHY) or
	/// [`FALSY`](crate::FALSY) (case-sensitive), and takes priority over bare
	/// flags.
	///
	/// ## Examples
	///
	/// ```
	/// use argpick::ArgStore;
	///
	/// assert!(ArgStore::new(&["prog", "--flag"]).bool("--flag"));
	/// assert!(ArgStore::new(&["prog", "--flag", "ON"]).bool("--flag"));
	/// assert!(! ArgStore::new(&["prog", "--flag", "off"]).bool("--flag"));
	/// assert!(! ArgStore::new(&["prog", "--flag=no"]).bool("--flag"));
	/// assert!(! ArgStore::new(&["prog"]).bool("--flag"));
	/// ```
	pub fn bool(&self, spec: &str) -> bool {
		let mut bare = None;
		let mut assign = None;
		for hit in self.hits(spec) {
			match hit.shape {
				Shape::Exact => if bare.is_none() {
					bare = Some(hit.next.and_then(value::bool_word_nocase).unwrap_or(true));
				},
				Shape::Assign(v) => if let Some(v) = value::bool_word(v) {
					assign = Some(v);
				},
			}
		}

		let out = assign.or(bare).unwrap_or(false);
		tracing::trace!(spec, result = out, "bool lookup");
		out
	}

	#[must_use]
	/// # Integer.
	///
	/// Values are read with [`int_prefix`](crate::int_prefix), so trailing
	/// junk is ignored and unreadable values become zero.
	///
	/// ## Examples
	///
	/// ```
	/// use argpick::ArgStore;
	///
	/// assert_eq!(ArgStore::new(&["prog", "--count", "42"]).int("-c|--count"), 42);
	/// assert_eq!(ArgStore::new(&["prog", "-c=42"]).int("-c|--count"), 42);
	/// assert_eq!(ArgStore::new(&["prog", "--count", "-5"]).int("--count"), 0);
	/// ```
	pub fn int(&self, spec: &str) -> i64 {
		let out = self.number(spec, value::int_prefix).unwrap_or(0);
		tracing::trace!(spec, result = out, "int lookup");
		out
	}

	#[must_use]
	/// # Float.
	///
	/// Values are read with [`float_prefix`](crate::float_prefix), so
	/// trailing junk is ignored and unreadable values become zero.
	///
	/// ## Examples
	///
	/// ```
	/// use argpick::ArgStore;
	///
	/// assert_eq!(ArgStore::new(&["prog", "--pi", "3.5"]).float("--pi"), 3.5);
	/// assert_eq!(ArgStore::new(&["prog", "--pi=.5"]).float("--pi"), 0.5);
	/// assert_eq!(ArgStore::new(&["prog", "--pi", ".5"]).float("--pi"), 0.0);
	/// ```
	pub fn float(&self, spec: &str) -> f64 {
		let out = self.number(spec, value::float_prefix).unwrap_or(0.0);
		tracing::trace!(spec, result = out, "float lookup");
		out
	}

	#[must_use]
	/// # String.
	///
	/// A bare flag takes the next argument verbatim, whatever it is. An
	/// `F=value` pair takes everything after the `=`, unless it starts with a
	/// double quote, in which case it stops at the next one.
	///
	/// The returned value borrows from the argument vector, which is never
	/// modified.
	///
	/// ## Examples
	///
	/// ```
	/// use argpick::ArgStore;
	///
	/// let argv = ["prog", "--name", "John", "Smith"];
	/// assert_eq!(ArgStore::new(&argv).string("--name"), Some("John"));
	///
	/// let argv = ["prog", r#"--name="John Smith""#];
	/// assert_eq!(ArgStore::new(&argv).string("--name"), Some("John Smith"));
	///
	/// let argv = ["prog", "--name="];
	/// assert_eq!(ArgStore::new(&argv).string("--name"), Some(""));
	/// assert_eq!(ArgStore::new(&argv).string("--nope"), None);
	/// ```
	pub fn string(&self, spec: &str) -> Option<&'a str> {
		let out = self.hits(spec).filter_map(|h| h.text()).last();
		tracing::trace!(spec, result = ?out, "string lookup");
		out
	}

	/// # Parsed Value (Strict).
	///
	/// Find the value exactly like [`ArgStore::string`] does, then parse it
	/// with [`FromStr`]. Unlike the other queries, failure is reported rather
	/// than swallowed.
	///
	/// ## Examples
	///
	/// ```
	/// use argpick::ArgStore;
	///
	/// let argv = ["prog", "--port", "8080", "--depth=deep"];
	/// let args = ArgStore::new(&argv);
	///
	/// assert_eq!(args.value::<u16>("-p|--port"), Ok(Some(8080)));
	/// assert_eq!(args.value::<u16>("--missing"), Ok(None));
	/// assert!(args.value::<u8>("--depth").is_err());
	/// ```
	///
	/// ## Errors
	///
	/// Returns [`ArgError::InvalidValue`] if a value is present but does not
	/// parse.
	pub fn value<V>(&self, spec: &str) -> Result<Option<V>, ArgError>
	where V: FromStr, V::Err: fmt::Display {
		let Some((flag, raw)) = self.hits(spec)
			.filter_map(|h| h.text().map(|v| (h.alias, v)))
			.last()
		else { return Ok(None); };

		raw.parse::<V>().map(Some).map_err(|e| {
			tracing::debug!(spec, flag, value = raw, error = %e, "rejected value");
			ArgError::InvalidValue {
				flag: flag.to_owned(),
				value: raw.to_owned(),
				reason: e.to_string(),
			}
		})
	}

	#[must_use]
	/// # Contains?
	///
	/// Returns `true` if any of the aliases appear in any shape, regardless
	/// of value.
	///
	/// ## Examples
	///
	/// ```
	/// use argpick::ArgStore;
	///
	/// let args = ArgStore::new(&["prog", "--debug=off"]);
	/// assert!(args.contains("-d|--debug"));
	/// assert!(! args.bool("-d|--debug"));
	/// ```
	pub fn contains(&self, spec: &str) -> bool { self.hits(spec).next().is_some() }
}

/// ## Diagnostics.
impl<'a, T: AsRef<str>> ArgStore<'a, T> {
	#[must_use]
	#[inline]
	/// # Listing.
	///
	/// Return a displayable listing of every argument — program path
	/// included — with its index, one per line.
	///
	/// ## Examples
	///
	/// ```
	/// let args = argpick::ArgStore::new(&["prog", "-v"]);
	/// assert_eq!(
	///     args.listing().to_string(),
	///     "Argument 0: prog\nArgument 1: -v\n",
	/// );
	/// ```
	pub const fn listing(&self) -> Listing<'a, T> { Listing(self.argv) }

	/// # Dump to Writer.
	///
	/// Write the [`ArgStore::listing`] to `out`.
	///
	/// ## Errors
	///
	/// Any I/O errors are passed through.
	pub fn dump_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
		write!(out, "{}", self.listing())?;
		out.flush()
	}

	/// # Dump.
	///
	/// Print the [`ArgStore::listing`] to STDOUT.
	pub fn dump(&self) {
		if let Err(e) = self.dump_to(io::stdout().lock()) {
			tracing::warn!(error = %e, "unable to dump arguments");
		}
	}
}

impl<'a, T: AsRef<str>> ArgStore<'a, T> {
	/// # Hits.
	///
	/// Iterate over every argument matching any of the aliases, alias by
	/// alias. This is the scan underlying all the queries.
	fn hits<'s>(&self, spec: &'s str) -> impl Iterator<Item=Hit<'s, 'a>> {
		let argv = self.argv;
		Aliases::new(spec).flat_map(move |alias|
			argv.iter()
				.enumerate()
				.skip(1)
				.filter_map(move |(idx, arg)| {
					let arg = arg.as_ref();
					Shape::of(arg, alias).map(|shape| Hit {
						alias,
						arg,
						next: argv.get(idx + 1).map(|n| n.as_ref()),
						shape,
					})
				})
		)
	}

	/// # Numeric Lookup.
	///
	/// Return the last readable value, if any. Values following a bare flag
	/// must begin with a digit.
	fn number<N, F>(&self, spec: &str, parse: F) -> Option<N>
	where F: Fn(&str) -> N {
		self.hits(spec)
			.filter_map(|h| match h.shape {
				Shape::Exact => h.next.filter(|n| value::leading_digit(n)),
				Shape::Assign(v) => Some(v),
			})
			.last()
			.map(parse)
	}
}



/// # Argument Listing.
///
/// This is returned by [`ArgStore::listing`].
pub struct Listing<'a, T>(&'a [T]);

impl<T: AsRef<str>> fmt::Display for Listing<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, arg) in self.0.iter().enumerate() {
			writeln!(f, "Argument {idx}: {}", arg.as_ref())?;
		}
		Ok(())
	}
}



#[derive(Debug, Clone, Copy)]
/// # Match.
///
/// A single argument matching a single alias.
struct Hit<'s, 'a> {
	/// # The Alias.
	alias: &'s str,

	/// # The Argument.
	arg: &'a str,

	/// # The Following Argument.
	next: Option<&'a str>,

	/// # Match Shape.
	shape: Shape<'a>,
}

impl<'a> Hit<'_, 'a> {
	/// # Text Value.
	///
	/// A bare flag takes whatever follows. If nothing follows — or this is an
	/// `F=value` pair — the `=` value is used, with quotes stripped.
	fn text(&self) -> Option<&'a str> {
		match (self.shape, self.next) {
			(Shape::Exact, Some(next)) => Some(next),
			(Shape::Exact, None) => Shape::assigned(self.arg, self.alias).map(unquote),
			(Shape::Assign(v), _) => Some(unquote(v)),
		}
	}
}



/// # Unquote.
///
/// If the value starts with `"`, return everything up to the next `"` (or
/// the end).
fn unquote(raw: &str) -> &str {
	match raw.strip_prefix('"') {
		Some(rest) => rest.find('"').map_or(rest, |end| &rest[..end]),
		None => raw,
	}
}
