//! A module containing the bulk loaders for [`OrderedSet`] and the
//! [`LoadError`] they return.
//!
//! Input is a stream of whitespace-separated tokens spread over any number
//! of lines, each token being parsed with the element's [`FromStr`] impl.

use core::fmt::Display;
use core::iter;
use core::str::FromStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use itertools::{process_results, Either};

use crate::{ElementType, OrderedSet};

/// The error returned when bulk loading an [`OrderedSet`] fails.
///
/// Whenever this is returned the set that was being loaded is left empty.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	/// The source could not be opened or read.
	#[error("failed to read element source: {0}")]
	Io(#[from] io::Error),
	/// A token could not be parsed into an element.
	#[error("could not parse element {token:?} on line {line}: {message}")]
	Parse {
		/// The 1-based line the token was found on.
		line: usize,
		/// The offending token.
		token: String,
		/// The message of the element type's parse error.
		message: String,
	},
}

impl<T> OrderedSet<T>
where
	T: ElementType + FromStr,
	T::Err: Display,
{
	/// Replaces the contents of the set with the elements read from
	/// `reader`.
	///
	/// The existing elements are dropped before anything is read. Duplicate
	/// tokens collapse into a single element.
	///
	/// If reading fails or a token does not parse then a [`LoadError`] is
	/// returned and the set is left empty.
	///
	/// # Examples
	/// ```
	/// use nearset::{LoadError, OrderedSet};
	///
	/// let mut set = OrderedSet::from_iter([100, 200]);
	///
	/// set.load_from_reader("4 1\n9 6\n".as_bytes()).unwrap();
	/// assert_eq!(set.to_vec(), [1, 4, 6, 9]);
	///
	/// let result = set.load_from_reader("3 x 5".as_bytes());
	/// assert!(matches!(result, Err(LoadError::Parse { line: 1, .. })));
	/// assert!(set.is_empty());
	/// ```
	pub fn load_from_reader<R>(&mut self, reader: R) -> Result<(), LoadError>
	where
		R: BufRead,
	{
		self.clear();

		let loaded = process_results(elements(reader), |elements| {
			elements.collect::<OrderedSet<T>>()
		})?;

		*self = loaded;

		Ok(())
	}

	/// Replaces the contents of the set with the elements read from the
	/// file at `path`.
	///
	/// See [`OrderedSet::load_from_reader()`] for the details, the set is
	/// also emptied if the file cannot be opened.
	pub fn load_from_file<P>(&mut self, path: P) -> Result<(), LoadError>
	where
		P: AsRef<Path>,
	{
		self.clear();

		let file = File::open(path)?;

		self.load_from_reader(BufReader::new(file))
	}

	/// Makes a new [`OrderedSet`] from the elements read from `reader`.
	///
	/// See [`OrderedSet::load_from_reader()`] for more details.
	pub fn from_reader<R>(reader: R) -> Result<Self, LoadError>
	where
		R: BufRead,
	{
		let mut set = OrderedSet::new();
		set.load_from_reader(reader)?;
		return Ok(set);
	}

	/// Makes a new [`OrderedSet`] from the elements read from the file at
	/// `path`.
	///
	/// See [`OrderedSet::load_from_file()`] for more details.
	pub fn from_file<P>(path: P) -> Result<Self, LoadError>
	where
		P: AsRef<Path>,
	{
		let mut set = OrderedSet::new();
		set.load_from_file(path)?;
		return Ok(set);
	}
}

/// Yields every token of `reader` parsed into a `T`, or the first error
/// met, in input order.
fn elements<T, R>(reader: R) -> impl Iterator<Item = Result<T, LoadError>>
where
	T: FromStr,
	T::Err: Display,
	R: BufRead,
{
	reader
		.lines()
		.enumerate()
		.flat_map(|(index, line)| match line {
			Ok(line) => Either::Right(
				line.split_whitespace()
					.map(|token| parse_token(index + 1, token))
					.collect::<Vec<_>>()
					.into_iter(),
			),
			Err(error) => Either::Left(iter::once(Err(LoadError::Io(error)))),
		})
}

fn parse_token<T>(line: usize, token: &str) -> Result<T, LoadError>
where
	T: FromStr,
	T::Err: Display,
{
	token.parse().map_err(|error: T::Err| LoadError::Parse {
		line,
		token: token.to_string(),
		message: error.to_string(),
	})
}
