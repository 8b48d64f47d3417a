use std::str::FromStr;

use tracing::debug;

use crate::{
	parse::{parse_lines, LineError, ParseError},
	report::Answers,
};

/// Number of positions on the dial.
pub const DIAL_SIZE: u32 = 100;

/// Where the dial points before the first rotation.
pub const START: u32 = 50;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
	Left,
	Right,
}

/// Turns the dial `clicks` positions in `direction`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rotation {
	pub direction: Direction,
	pub clicks: u64,
}

impl FromStr for Rotation {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut chars = s.chars();
		let direction = match chars.next() {
			Some('L') => Direction::Left,
			Some('R') => Direction::Right,
			Some(c) => return Err(ParseError::Direction(c)),
			None => return Err(ParseError::Empty),
		};
		let clicks = chars.as_str().parse()?;
		Ok(Rotation { direction, clicks })
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dial {
	position: u32,
}

impl Dial {
	pub fn new(position: u32) -> Dial {
		Dial {
			position: position % DIAL_SIZE,
		}
	}

	pub fn position(self) -> u32 {
		self.position
	}

	/// The dial after applying `rotation`.
	pub fn turned(self, rotation: Rotation) -> Dial {
		// Below DIAL_SIZE, so it fits.
		let clicks = (rotation.clicks % u64::from(DIAL_SIZE)) as u32;
		let position = match rotation.direction {
			Direction::Left => self.position + DIAL_SIZE - clicks,
			Direction::Right => self.position + clicks,
		};
		Dial::new(position)
	}

	/// The dial after applying `rotation`, along with the number of times it
	/// pointed at zero along the way: once per full revolution, plus once more
	/// if the remaining partial turn ends on or wraps past zero.
	pub fn turned_counting_zeros(self, rotation: Rotation) -> (Dial, i128) {
		let revolutions = i128::from(rotation.clicks / u64::from(DIAL_SIZE));
		let next = self.turned(rotation);
		// Moving left off of zero never wraps through it.
		let wrapped = match rotation.direction {
			Direction::Left => {
				self.position != 0 && next.position > self.position
			}
			Direction::Right => next.position < self.position,
		};
		let hits = revolutions + i128::from(next.position == 0 || wrapped);
		(next, hits)
	}
}

/// Number of rotations that leave the dial pointing at zero.
pub fn count_landings(rotations: &[Rotation], start: u32) -> i128 {
	let (_, landings) = rotations.iter().fold(
		(Dial::new(start), 0),
		|(dial, landings), &rotation| {
			let dial = dial.turned(rotation);
			(dial, landings + i128::from(dial.position == 0))
		},
	);
	landings
}

/// Number of times the dial points at zero at any point during the
/// rotations, including full revolutions.
pub fn count_passes(rotations: &[Rotation], start: u32) -> i128 {
	let (_, passes) = rotations.iter().fold(
		(Dial::new(start), 0),
		|(dial, passes), &rotation| {
			let (dial, hits) = dial.turned_counting_zeros(rotation);
			(dial, passes + hits)
		},
	);
	passes
}

pub fn final_position(rotations: &[Rotation], start: u32) -> u32 {
	rotations
		.iter()
		.fold(Dial::new(start), |dial, &rotation| dial.turned(rotation))
		.position()
}

pub fn parse_rotations(input: &str) -> Result<Vec<Rotation>, LineError> {
	parse_lines(input)
}

/// Solves both parts for a list of rotations, one per line.
pub fn solve(input: &str) -> Result<Answers, LineError> {
	let rotations = parse_rotations(input)?;
	debug!(
		"Parsed {} rotations, final position {}",
		rotations.len(),
		final_position(&rotations, START)
	);
	Ok(Answers {
		part1: count_landings(&rotations, START),
		part2: Some(count_passes(&rotations, START)),
	})
}

#[cfg(test)]
mod tests {
	use rand::Rng;
	use rand_pcg::Pcg32;
	use rand_seeder::Seeder;

	use super::*;

	const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

	fn rotations(input: &str) -> Vec<Rotation> {
		parse_rotations(input).unwrap()
	}

	fn random_rotations(rng: &mut Pcg32, len: usize) -> Vec<Rotation> {
		(0..len)
			.map(|_| Rotation {
				direction: if rng.gen() {
					Direction::Left
				} else {
					Direction::Right
				},
				clicks: rng.gen_range(0..1000),
			})
			.collect()
	}

	#[test]
	fn parses_rotations() {
		assert_eq!(
			"L68".parse::<Rotation>(),
			Ok(Rotation {
				direction: Direction::Left,
				clicks: 68
			})
		);
		assert_eq!(
			"R0".parse::<Rotation>(),
			Ok(Rotation {
				direction: Direction::Right,
				clicks: 0
			})
		);
		assert_eq!("".parse::<Rotation>(), Err(ParseError::Empty));
		assert_eq!("U3".parse::<Rotation>(), Err(ParseError::Direction('U')));
		assert!(matches!("L".parse::<Rotation>(), Err(ParseError::Number(_))));
		assert!(matches!(
			"R-4".parse::<Rotation>(),
			Err(ParseError::Number(_))
		));
	}

	#[test]
	fn bad_line_is_reported() {
		let error = parse_rotations("L1\nR2\nX3\n").unwrap_err();
		assert_eq!(error.line, 3);
		assert_eq!(error.source, ParseError::Direction('X'));
	}

	#[test]
	fn example() {
		let answers = solve(EXAMPLE).unwrap();
		assert_eq!(answers.part1, 3);
		assert_eq!(answers.part2, Some(6));
		assert_eq!(final_position(&rotations(EXAMPLE), START), 32);
	}

	#[test]
	fn wraps_in_both_directions_count_as_passes() {
		// 50 -> 10 wraps right, 10 -> 40 wraps left, 40 -> 85.
		let rotations = rotations("R60\nL70\nR45");
		assert_eq!(count_landings(&rotations, START), 0);
		assert_eq!(count_passes(&rotations, START), 2);
		assert_eq!(final_position(&rotations, START), 85);
	}

	#[test]
	fn full_revolutions_count_as_passes() {
		let rotations = rotations("R1000\nL50\nR100\nL250");
		assert_eq!(count_landings(&rotations, START), 2);
		assert_eq!(count_passes(&rotations, START), 15);
		assert_eq!(final_position(&rotations, START), 50);
	}

	#[test]
	fn huge_rotations_count_every_revolution() {
		let rotations = rotations("R5000000000\nL5000000050");
		assert_eq!(
			rotations[0],
			Rotation {
				direction: Direction::Right,
				clicks: 5_000_000_000
			}
		);
		// 50 -> 50 after fifty million revolutions, then 50 -> 0.
		assert_eq!(final_position(&rotations, START), 0);
		assert_eq!(count_landings(&rotations, START), 1);
		assert_eq!(count_passes(&rotations, START), 100_000_001);
	}

	#[test]
	fn leaving_zero_leftward_is_not_a_pass() {
		let dial = Dial::new(0);
		let (next, hits) = dial.turned_counting_zeros(Rotation {
			direction: Direction::Left,
			clicks: 1,
		});
		assert_eq!(next.position(), 99);
		assert_eq!(hits, 0);
	}

	#[test]
	fn final_position_matches_modular_replay() {
		let mut rng: Pcg32 = Seeder::from("dial replay").make_rng();
		for _ in 0..100 {
			let len = rng.gen_range(0..50);
			let rotations = random_rotations(&mut rng, len);
			let expected = rotations.iter().fold(i128::from(START), |p, r| {
				let clicks = i128::from(r.clicks);
				match r.direction {
					Direction::Left => (p - clicks).rem_euclid(100),
					Direction::Right => (p + clicks).rem_euclid(100),
				}
			});
			assert_eq!(
				i128::from(final_position(&rotations, START)),
				expected
			);
		}
	}

	#[test]
	fn passes_never_undercount_landings() {
		let mut rng: Pcg32 = Seeder::from("dial passes").make_rng();
		for _ in 0..100 {
			let len = rng.gen_range(0..50);
			let start = rng.gen_range(0..DIAL_SIZE);
			let rotations = random_rotations(&mut rng, len);
			assert!(
				count_passes(&rotations, start)
					>= count_landings(&rotations, start)
			);
		}
	}

	#[test]
	fn passes_match_click_by_click_count() {
		let mut rng: Pcg32 = Seeder::from("dial clicks").make_rng();
		for _ in 0..100 {
			let len = rng.gen_range(0..20);
			let start = rng.gen_range(1..DIAL_SIZE);
			// Keep clicks nonzero and off of zero between rotations, where
			// the partial-turn rule and a click-by-click walk agree.
			let rotations: Vec<Rotation> = random_rotations(&mut rng, len)
				.into_iter()
				.filter(|r| r.clicks % u64::from(DIAL_SIZE) != 0)
				.collect();
			let mut position = i128::from(start);
			let mut expected = 0;
			let mut comparable = true;
			for r in &rotations {
				let step = match r.direction {
					Direction::Left => -1,
					Direction::Right => 1,
				};
				for _ in 0..r.clicks {
					position = (position + step).rem_euclid(100);
					if position == 0 {
						expected += 1;
					}
				}
				comparable &= position != 0;
			}
			if comparable {
				assert_eq!(count_passes(&rotations, start), expected);
			}
		}
	}
}
