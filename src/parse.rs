use std::{num::ParseIntError, str::FromStr};

use thiserror::Error;

/// Why a single record failed to parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
	#[error("empty record")]
	Empty,
	#[error("unknown direction {0:?}, expected 'L' or 'R'")]
	Direction(char),
	#[error("expected {expected} fields but found {found}")]
	FieldCount { expected: usize, found: usize },
	#[error(transparent)]
	Number(#[from] ParseIntError),
}

/// A record parse failure, tagged with its 1-based line number.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid record on line {line}")]
pub struct LineError {
	pub line: usize,
	#[source]
	pub source: ParseError,
}

/// Parses one record per line, skipping blank lines.
pub fn parse_lines<T>(input: &str) -> Result<Vec<T>, LineError>
where
	T: FromStr<Err = ParseError>,
{
	input
		.lines()
		.enumerate()
		.filter(|(_, line)| !line.trim().is_empty())
		.map(|(i, line)| {
			line.trim()
				.parse()
				.map_err(|source| LineError { line: i + 1, source })
		})
		.collect()
}
