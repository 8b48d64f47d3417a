use std::{num::ParseIntError, ops::Sub, str::FromStr};

use num_traits::{CheckedAdd, CheckedMul, Zero};

use crate::parse::ParseError;

/// Number of coordinates in a junction box position.
pub const JUNCTION_DIMENSIONS: usize = 4;

pub type JunctionPoint = Point<i64, JUNCTION_DIMENSIONS>;
pub type JunctionVector = Vector<i64, JUNCTION_DIMENSIONS>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Vector<T, const D: usize> {
	pub components: [T; D],
}

impl<T, const D: usize> Vector<T, D> {
	pub const fn new(components: [T; D]) -> Self {
		Vector { components }
	}

	/// The squared Euclidean length of the vector, or `None` if it does not
	/// fit in `T`.
	pub fn length_squared(self) -> Option<T>
	where
		T: Copy + Zero + CheckedAdd + CheckedMul,
	{
		self.components
			.into_iter()
			.try_fold(T::zero(), |sum, c| {
				sum.checked_add(&c.checked_mul(&c)?)
			})
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Point<T, const D: usize> {
	pub coords: [T; D],
}

impl<T, const D: usize> Point<T, D> {
	pub const fn new(coords: [T; D]) -> Self {
		Point { coords }
	}
}

impl<T: Copy, const D: usize> Point<T, D> {
	/// The point's first coordinate.
	pub fn x(&self) -> T {
		self.coords[0]
	}

	/// The same point with each coordinate converted to a wider type.
	pub fn widen<U: From<T>>(self) -> Point<U, D> {
		Point::new(self.coords.map(U::from))
	}
}

impl<T: Copy + Sub<Output = T>, const D: usize> Sub for Point<T, D> {
	type Output = Vector<T, D>;

	fn sub(self, rhs: Self) -> Self::Output {
		Vector::new(std::array::from_fn(|i| self.coords[i] - rhs.coords[i]))
	}
}

/// Parses exactly `D` comma-separated coordinates.
impl<T, const D: usize> FromStr for Point<T, D>
where
	T: Copy + Zero + FromStr<Err = ParseIntError>,
{
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let fields: Vec<&str> = s.split(',').map(str::trim).collect();
		if fields.len() != D {
			return Err(ParseError::FieldCount {
				expected: D,
				found: fields.len(),
			});
		}
		let mut coords = [T::zero(); D];
		for (coord, field) in coords.iter_mut().zip(fields) {
			*coord = field.parse()?;
		}
		Ok(Point { coords })
	}
}
