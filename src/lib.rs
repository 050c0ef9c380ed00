/*!
# Argpick

This crate provides [`ArgStore`], a tiny, forgiving lookup helper for CLI
arguments. There is no schema and no parsing step: hand it the argument
vector, then ask for whatever you need, whenever you need it.

Every query takes an alias specification — one or more spellings joined by
`|`, like `"-h|--help|help"` — and scans the raw arguments for `F`, `F value`,
`F=value`, or `F="value with spaces"`.

The default queries never fail. Missing or garbled values quietly become
`false`, `0`, `0.0`, or `None`, which is often exactly what a small program
wants. For anything stricter, [`ArgStore::value`] parses via [`FromStr`](std::str::FromStr)
and reports errors.

If you need validation, subcommands, positional arguments, or help screens,
use [clap](https://crates.io/crates/clap) instead.



## Logging

Lookups emit [`tracing`](https://crates.io/crates/tracing) events — `TRACE`
for each result, `DEBUG` for values rejected by [`ArgStore::value`] — but no
subscriber is installed. Set one up in your binary if you want to see them.



## Example

```
use argpick::ArgStore;

// Normally you'd use argpick::env_args() instead.
let argv = ["prog", "--threads", "4", "-v", "--out=\"My Documents\""];
let args = ArgStore::new(&argv);

if args.bool("-h|--help") {
    println!("Help Screen Goes Here.");
    return;
}

let threads = args.int("-t|--threads");
let verbose = args.bool("-v|--verbose");
let out = args.string("-o|--out").unwrap_or(".");

assert_eq!(threads, 4);
assert!(verbose);
assert_eq!(out, "My Documents");
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod alias;
mod error;
mod store;
mod value;

pub use alias::{
	Aliases,
	SEPARATOR,
};
pub use error::ArgError;
pub use store::{
	ArgStore,
	Listing,
};
pub use value::{
	float_prefix,
	int_prefix,
	FALSY,
	TRUTHY,
};



#[must_use]
/// # Environment Arguments.
///
/// Collect [`std::env::args_os`] into owned strings, program path included,
/// ready to be wrapped by an [`ArgStore`]. Unlike [`std::env::args`], this
/// won't panic on invalid UTF-8; such arguments are converted lossily.
///
/// ## Examples
///
/// ```
/// let argv = argpick::env_args();
/// let args = argpick::ArgStore::new(&argv);
/// assert!(! args.is_empty());
/// ```
pub fn env_args() -> Vec<String> {
	std::env::args_os()
		.map(|a| a.into_string().unwrap_or_else(|a| a.to_string_lossy().into_owned()))
		.collect()
}
