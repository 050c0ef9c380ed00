/*!
# Argpick: Basic

This example reads a handful of typed flags and prints whatever it finds.

Try something like:
cargo run --example basic -- --int 69420 --float 3.5 --string "Hello, World!"

Set `RUST_LOG=argpick=trace` to watch the lookups happen.
*/

use argpick::ArgStore;
use tracing_subscriber::EnvFilter;



fn main() {
	init_tracing();

	let argv = argpick::env_args();
	let args = ArgStore::new(&argv);

	if args.bool("-h|--help|help") {
		helper();
		return;
	}

	if args.bool("--dump") { args.dump(); }

	let int = args.int("-i|--int|int");
	let float = args.float("-f|--float|float");
	let string = args.string("-s|--string|string");

	if int != 0 { println!("Int: {int}"); }
	if float != 0.0 { println!("Float: {float:.6}"); }
	if let Some(s) = string { println!("String: {s}"); }

	// The strict lookup, for comparison.
	match args.value::<u16>("-p|--port") {
		Ok(Some(port)) => println!("Port: {port}"),
		Ok(None) => {},
		Err(e) => {
			eprintln!("\x1b[1;91mError:\x1b[0m {e}");
			std::process::exit(1);
		},
	}
}

/// # Logging.
fn init_tracing() {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("warn"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

/// # Help.
fn helper() {
	println!(r"Usage: basic [options]

Options:
  -h, --help, help                 Show this help message.
  -i, --int, int <number>          Print an integer.
  -f, --float, float <number>      Print a floating point number.
  -s, --string, string <string>    Print a string.
  -p, --port <number>              Print a port (strictly parsed).
      --dump                       List the raw arguments.");
}
