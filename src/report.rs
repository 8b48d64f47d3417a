use std::{fmt, str::FromStr};

use crate::parse::ParseError;

/// The two answers a puzzle produces. The second part may be undefined for
/// degenerate inputs, and prints as `None`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Answers {
	pub part1: i128,
	pub part2: Option<i128>,
}

impl fmt::Display for Answers {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{}", self.part1)?;
		match self.part2 {
			Some(part2) => writeln!(f, "{part2}"),
			None => writeln!(f, "None"),
		}
	}
}

/// Known-good answers to compare a run against.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Golden {
	pub part1: i128,
	pub part2: i128,
}

impl FromStr for Golden {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let fields: Vec<&str> = s.split_whitespace().collect();
		match fields.as_slice() {
			[part1, part2] => Ok(Golden {
				part1: part1.parse()?,
				part2: part2.parse()?,
			}),
			_ => Err(ParseError::FieldCount {
				expected: 2,
				found: fields.len(),
			}),
		}
	}
}

impl Golden {
	/// Compares each part of `answers` with the expected value.
	pub fn check(&self, answers: &Answers) -> [Verdict; 2] {
		[
			Verdict {
				part: 1,
				expected: self.part1,
				actual: Some(answers.part1),
			},
			Verdict {
				part: 2,
				expected: self.part2,
				actual: answers.part2,
			},
		]
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Verdict {
	pub part: u8,
	pub expected: i128,
	pub actual: Option<i128>,
}

impl Verdict {
	pub fn passed(&self) -> bool {
		self.actual == Some(self.expected)
	}
}

impl fmt::Display for Verdict {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let verdict = if self.passed() { "PASSED" } else { "FAILED" };
		write!(f, "{verdict} part {}: expected {}", self.part, self.expected)?;
		match self.actual {
			Some(actual) => write!(f, ", got {actual}"),
			None => write!(f, ", got no answer"),
		}
	}
}
