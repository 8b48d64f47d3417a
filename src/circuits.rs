use thiserror::Error;
use tracing::{debug, info};

use crate::{
	disjoint_sets::DisjointSets,
	geometry::JunctionPoint,
	parse::{parse_lines, LineError},
	report::Answers,
};

/// Default number of links attempted before measuring the largest circuits.
pub const DEFAULT_ATTEMPTS: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CircuitError {
	#[error(transparent)]
	Line(#[from] LineError),
	#[error("junction boxes {i} and {j} are too far apart to measure")]
	Distance { i: usize, j: usize },
}

/// A candidate connection between junction boxes `i` and `j`, where `i < j`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Link {
	pub i: usize,
	pub j: usize,
	/// Squared Euclidean distance between the two boxes.
	pub distance: i128,
}

pub fn parse_points(input: &str) -> Result<Vec<JunctionPoint>, LineError> {
	parse_lines(input)
}

/// Every pair of points, shortest first. Links of equal length stay in the
/// order they were discovered: by `i`, then by `j`.
pub fn links_by_distance(
	points: &[JunctionPoint],
) -> Result<Vec<Link>, CircuitError> {
	let n = points.len();
	let mut links = Vec::with_capacity(n * n.saturating_sub(1) / 2);
	for (i, &p1) in points.iter().enumerate() {
		for (j, &p2) in points.iter().enumerate().skip(i + 1) {
			let distance = (p1.widen::<i128>() - p2.widen::<i128>())
				.length_squared()
				.ok_or(CircuitError::Distance { i, j })?;
			links.push(Link { i, j, distance });
		}
	}
	// Must be a stable sort.
	links.sort_by_key(|link| link.distance);
	Ok(links)
}

/// Connects the first `attempts` links in order, counting links whose boxes
/// were already connected, and returns the product of the three largest
/// circuit sizes. Only circuits still standing count, not ones already merged
/// into another. With fewer than three circuits, the product is over however
/// many there are.
pub fn largest_circuits_product(
	point_count: usize,
	links: &[Link],
	attempts: usize,
) -> i128 {
	let mut circuits = DisjointSets::new(point_count);
	for link in links.iter().take(attempts) {
		circuits.merge(link.i, link.j);
	}
	let mut sizes: Vec<usize> = circuits.set_sizes().collect();
	sizes.sort_unstable_by(|a, b| b.cmp(a));
	debug!(
		"{} circuits after {} links, largest {:?}",
		circuits.set_count(),
		attempts.min(links.len()),
		&sizes[..sizes.len().min(3)]
	);
	sizes.iter().take(3).map(|&size| size as i128).product()
}

/// Connects links in order until every box is in one circuit, returning the
/// product of the x coordinates of the link that closed it, or `None` if no
/// link does (fewer than two points).
pub fn closing_link_product(
	points: &[JunctionPoint],
	links: &[Link],
) -> Option<i128> {
	let mut circuits = DisjointSets::new(points.len());
	let closing = links.iter().find(|link| {
		circuits.merge(link.i, link.j);
		circuits.set_count() == 1
	})?;
	debug!(
		"Closing link {} -> {}, distance {}",
		closing.i, closing.j, closing.distance
	);
	Some(
		i128::from(points[closing.i].x()) * i128::from(points[closing.j].x()),
	)
}

/// Solves both parts for a list of junction boxes, one per line.
pub fn solve(input: &str, attempts: usize) -> Result<Answers, CircuitError> {
	let points = parse_points(input)?;
	let links = links_by_distance(&points)?;
	info!("{} junction boxes, {} links", points.len(), links.len());
	Ok(Answers {
		part1: largest_circuits_product(points.len(), &links, attempts),
		part2: closing_link_product(&points, &links),
	})
}
