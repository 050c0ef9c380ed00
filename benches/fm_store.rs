/*!
# Benchmark: `argpick::ArgStore`
*/

use brunch::{
	Bench,
	benches,
};
use argpick::ArgStore;

/// # Arguments.
const ARGV: [&str; 9] = [
	"prog",
	"-k",
	"--key=val",
	"-x",
	"out",
	"--quiet",
	"--name=\"Björk Guðmundsdóttir\"",
	"/foo/bar",
	"/bar/baz",
];

benches!(
	Bench::new("argpick::ArgStore::bool(-q|--quiet)")
		.run(|| ArgStore::new(&ARGV).bool("-q|--quiet")),

	Bench::new("argpick::ArgStore::int(-x)")
		.run(|| ArgStore::new(&ARGV).int("-x")),

	Bench::new("argpick::ArgStore::string(-n|--name)")
		.run(|| ArgStore::new(&ARGV).string("-n|--name").is_some()),

	Bench::spacer(),

	Bench::new("argpick::int_prefix(-12345abc)")
		.run(|| argpick::int_prefix("-12345abc")),

	Bench::new("argpick::float_prefix(2.5e2kg)")
		.run(|| argpick::float_prefix("2.5e2kg")),
);
