//! A small driver exercising [`OrderedSet`] on a file of integers.
//!
//! Usage: `nearset [PATH]`, where `PATH` defaults to `set_file`. The log
//! filter is taken from `RUST_LOG` and defaults to `info`. Built with the
//! `cli` feature.

use std::env;
use std::process::ExitCode;

use itertools::Itertools;
use nearset::OrderedSet;
use tracing_subscriber::EnvFilter;

const DEFAULT_PATH: &str = "set_file";

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.with_writer(std::io::stderr)
		.init();

	let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_PATH.to_string());

	let mut set = match OrderedSet::<i32>::from_file(&path) {
		Ok(set) => set,
		Err(error) => {
			tracing::error!(%path, %error, "could not populate container");
			return ExitCode::FAILURE;
		}
	};
	tracing::info!(%path, len = set.len(), "loaded container");

	println!("{set}");

	set.insert(12);

	println!("Container");
	println!("{set}");

	for (value, k) in [(5, 4), (8, 3), (12, 3)] {
		println!("findClosest({value},{k})");
		print_elements(&set.find_closest(&value, k));
	}

	for (start, end) in [(4, 9), (4, 8), (7, 2), (11, 13)] {
		println!("getRange({start},{end})");
		print_elements(&set.get_range(&start, &end));
	}

	ExitCode::SUCCESS
}

fn print_elements(elements: &[i32]) {
	println!("{}", format_elements(elements));
}

/// Lays out elements the same way the set's `Display` impl does.
fn format_elements(elements: &[i32]) -> String {
	if elements.is_empty() {
		return String::new();
	}

	format!("{} ", elements.iter().join(" "))
}
