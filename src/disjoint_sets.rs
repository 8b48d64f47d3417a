/// A forest of disjoint sets over the elements `0..len`.
#[derive(Clone, Debug)]
pub struct DisjointSets {
	nodes: Vec<Node>,
	set_count: usize,
}

impl DisjointSets {
	/// Initializes a forest of disjoint sets with `len` singleton sets.
	pub fn new(len: usize) -> DisjointSets {
		DisjointSets {
			nodes: (0..len).map(|i| Node { parent: i, size: 1 }).collect(),
			set_count: len,
		}
	}

	/// The number of elements across all sets.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// The number of disjoint sets remaining.
	pub fn set_count(&self) -> usize {
		self.set_count
	}

	/// Finds the representative element for the set containing element `i`.
	pub fn find(&mut self, mut i: usize) -> usize {
		// Path halving: point each visited node at its grandparent.
		while self.nodes[i].parent != i {
			let grandparent = self.nodes[self.nodes[i].parent].parent;
			self.nodes[i].parent = grandparent;
			i = grandparent;
		}
		i
	}

	/// The size of the set containing element `i`.
	pub fn size_of(&mut self, i: usize) -> usize {
		let root = self.find(i);
		self.nodes[root].size
	}

	/// Merges the sets containing elements `i` and `j`, returning the size of
	/// the merged set. Merging two elements of the same set changes nothing.
	pub fn merge(&mut self, i: usize, j: usize) -> usize {
		let mut i = self.find(i);
		let mut j = self.find(j);

		if i != j {
			// Ensure i has no fewer descendants than j. Ties keep i.
			if self.nodes[i].size < self.nodes[j].size {
				(i, j) = (j, i);
			}
			// Set i as j's new parent.
			self.nodes[j].parent = i;
			// Set i's size to the sum of the two sets' sizes.
			self.nodes[i].size += self.nodes[j].size;
			self.set_count -= 1;
		}

		self.nodes[i].size
	}

	/// The sizes of every set, in order of their representatives.
	pub fn set_sizes(&self) -> impl Iterator<Item = usize> + '_ {
		self.nodes
			.iter()
			.enumerate()
			.filter(|(i, node)| node.parent == *i)
			.map(|(_, node)| node.size)
	}
}

#[derive(Clone, Debug)]
struct Node {
	parent: usize,
	size: usize,
}
