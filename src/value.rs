/*!
# Argpick: Value Coercion.

Lenient conversions used by the default queries. Nothing here fails; text
that doesn't make sense comes back as `None` (booleans) or zero (numbers).
*/



/// # Truthy Words.
pub const TRUTHY: [&str; 5] = ["true", "on", "yes", "y", "1"];

/// # Falsy Words.
pub const FALSY: [&str; 5] = ["false", "off", "no", "n", "0"];



#[must_use]
/// # Boolean Word (Case-Insensitive).
///
/// Match `raw` against [`TRUTHY`] and [`FALSY`], ignoring ASCII case. This
/// is how the value _following_ a bare flag is read.
pub(crate) fn bool_word_nocase(raw: &str) -> Option<bool> {
	if TRUTHY.iter().any(|w| raw.eq_ignore_ascii_case(w)) { Some(true) }
	else if FALSY.iter().any(|w| raw.eq_ignore_ascii_case(w)) { Some(false) }
	else { None }
}

#[must_use]
/// # Boolean Word (Case-Sensitive).
///
/// Match `raw` against [`TRUTHY`] and [`FALSY`] exactly. This is how the
/// value of a `--flag=value` pair is read, so `--flag=YES` is ignored while
/// `--flag YES` is not.
pub(crate) fn bool_word(raw: &str) -> Option<bool> {
	if TRUTHY.iter().any(|w| *w == raw) { Some(true) }
	else if FALSY.iter().any(|w| *w == raw) { Some(false) }
	else { None }
}

#[must_use]
/// # Leads With a Digit?
pub(crate) fn leading_digit(raw: &str) -> bool {
	raw.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

#[must_use]
/// # Integer Prefix.
///
/// Skip leading whitespace, accept an optional sign, then read as many
/// decimal digits as there are. Anything after that is ignored. No digits
/// means zero; overflow saturates.
///
/// ## Examples
///
/// ```
/// use argpick::int_prefix;
///
/// assert_eq!(int_prefix("42"), 42);
/// assert_eq!(int_prefix("  -7px"), -7);
/// assert_eq!(int_prefix("abc"), 0);
/// ```
pub fn int_prefix(raw: &str) -> i64 {
	let mut bytes = raw.trim_start_matches(|c: char| c.is_ascii_whitespace()).as_bytes();
	let neg = match bytes {
		[b'-', rest @ ..] => { bytes = rest; true },
		[b'+', rest @ ..] => { bytes = rest; false },
		_ => false,
	};

	let mut out: i64 = 0;
	while let [d @ b'0'..=b'9', rest @ ..] = bytes {
		let d = i64::from(d - b'0');
		out =
			if neg { out.saturating_mul(10).saturating_sub(d) }
			else { out.saturating_mul(10).saturating_add(d) };
		bytes = rest;
	}

	out
}

#[must_use]
/// # Float Prefix.
///
/// Skip leading whitespace, then read the longest prefix that looks like a
/// decimal number — sign, digits, an optional fraction and an optional
/// exponent — or one of `inf`, `infinity`, or `nan`. Anything after that is
/// ignored. If nothing usable is found, zero is returned.
///
/// ## Examples
///
/// ```
/// use argpick::float_prefix;
///
/// assert_eq!(float_prefix("2.75"), 2.75);
/// assert_eq!(float_prefix("2.5e2kg"), 250.0);
/// assert_eq!(float_prefix("pi"), 0.0);
/// ```
pub fn float_prefix(raw: &str) -> f64 {
	let raw = raw.trim_start_matches(|c: char| c.is_ascii_whitespace());
	let len = float_len(raw.as_bytes());
	if len == 0 { 0.0 }
	else { raw[..len].parse::<f64>().unwrap_or(0.0) }
}

/// # Float Prefix Length.
///
/// Return the byte length of the leading float-shaped text, or zero.
fn float_len(src: &[u8]) -> usize {
	let mut pos = usize::from(matches!(src.first(), Some(b'+' | b'-')));

	// Words first.
	let rest = &src[pos..];
	for word in [&b"infinity"[..], b"inf", b"nan"] {
		if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word) {
			return pos + word.len();
		}
	}

	// Mantissa.
	let int_digits = count_digits(&src[pos..]);
	pos += int_digits;
	let mut frac_digits = 0;
	if src.get(pos) == Some(&b'.') {
		frac_digits = count_digits(&src[pos + 1..]);
		if int_digits != 0 || frac_digits != 0 { pos += 1 + frac_digits; }
	}
	if int_digits == 0 && frac_digits == 0 { return 0; }

	// Exponent, but only if it has digits.
	if matches!(src.get(pos), Some(b'e' | b'E')) {
		let mut exp = pos + 1;
		if matches!(src.get(exp), Some(b'+' | b'-')) { exp += 1; }
		let exp_digits = count_digits(&src[exp..]);
		if exp_digits != 0 { pos = exp + exp_digits; }
	}

	pos
}

/// # Count Leading Digits.
fn count_digits(src: &[u8]) -> usize {
	src.iter().take_while(|b| b.is_ascii_digit()).count()
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_bool_word() {
		for w in TRUTHY {
			assert_eq!(bool_word(w), Some(true), "Bug: {w} should be truthy.");
			assert_eq!(bool_word_nocase(w), Some(true), "Bug: {w} should be truthy.");
			let upper = w.to_ascii_uppercase();
			assert_eq!(bool_word_nocase(&upper), Some(true), "Bug: {upper} should be truthy.");
		}
		for w in FALSY {
			assert_eq!(bool_word(w), Some(false), "Bug: {w} should be falsy.");
			assert_eq!(bool_word_nocase(w), Some(false), "Bug: {w} should be falsy.");
			let upper = w.to_ascii_uppercase();
			assert_eq!(bool_word_nocase(&upper), Some(false), "Bug: {upper} should be falsy.");
		}

		// Case only matters for the strict version.
		assert_eq!(bool_word("Yes"), None);
		assert_eq!(bool_word("OFF"), None);
		assert_eq!(bool_word_nocase("Yes"), Some(true));
		assert_eq!(bool_word_nocase("OFF"), Some(false));

		// Nonsense.
		for w in ["", " ", "yes ", "2", "maybe", "tru"] {
			assert_eq!(bool_word(w), None, "Bug: {w:?} isn't a boolean.");
			assert_eq!(bool_word_nocase(w), None, "Bug: {w:?} isn't a boolean.");
		}
	}

	#[test]
	fn t_leading_digit() {
		assert!(leading_digit("0"));
		assert!(leading_digit("9abc"));
		assert!(! leading_digit(""));
		assert!(! leading_digit("-5"));
		assert!(! leading_digit("+5"));
		assert!(! leading_digit(".5"));
		assert!(! leading_digit(" 5"));
	}

	#[test]
	fn t_int_prefix() {
		for (raw, expected) in [
			("", 0),
			("0", 0),
			("42", 42),
			("+42", 42),
			("-42", -42),
			("  \t12", 12),
			("12abc", 12),
			("1.9", 1),
			("abc", 0),
			("-", 0),
			("- 5", 0),
			("--5", 0),
			("007", 7),
			("9223372036854775807", i64::MAX),
			("99999999999999999999", i64::MAX),
			("-9223372036854775808", i64::MIN),
			("-99999999999999999999", i64::MIN),
		] {
			assert_eq!(int_prefix(raw), expected, "Integer mismatch for {raw:?}.");
		}
	}

	#[test]
	#[allow(clippy::float_cmp, reason = "Exact values are expected.")]
	fn t_float_prefix() {
		for (raw, expected) in [
			("", 0.0),
			("0", 0.0),
			("2.75", 2.75),
			("  2.75", 2.75),
			("-2.5", -2.5),
			("+2.5", 2.5),
			(".5", 0.5),
			("5.", 5.0),
			("1e3", 1000.0),
			("1E-2", 0.01),
			("2.5e2kg", 250.0),
			("7e", 7.0),
			("7e+", 7.0),
			("12abc", 12.0),
			(".", 0.0),
			("-.", 0.0),
			("e5", 0.0),
			("abc", 0.0),
		] {
			assert_eq!(float_prefix(raw), expected, "Float mismatch for {raw:?}.");
		}

		assert_eq!(float_prefix("inf"), f64::INFINITY);
		assert_eq!(float_prefix("-Infinity"), f64::NEG_INFINITY);
		assert_eq!(float_prefix("INFx"), f64::INFINITY);
		assert!(float_prefix("nan").is_nan());
		assert!(float_prefix("-NaN").is_nan());
	}
}
