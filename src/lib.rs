//! Solvers for two puzzles: a dial that counts its visits to zero, and
//! junction boxes joined into circuits shortest link first.

pub mod circuits;
pub mod dial;
pub mod disjoint_sets;
pub mod geometry;
pub mod parse;
pub mod report;
