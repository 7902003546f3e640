//! Exact pairwise edit distance between character sequences.
//!
//! - [`nw::NW`] computes the edit distance for any [`CostModel`], and traces
//!   an optimal [`Alignment`].
//! - [`levenshtein::Levenshtein`] does the same for [`UniformCost`] only.
//! - [`normalize::Normalizer`] finds the normalized edit distance: the `λ` for
//!   which shifting match and substitution costs by `λ` makes the distance
//!   equal to `λ` times the total length of both sequences.
//!
//! Symbols are compared case-insensitively.
//!
//! ```
//! use pa_ned::*;
//! assert_eq!(distance("kitten", "sitting"), 3.);
//! let (cost, alignment) = align("cat", "bat", &UniformCost::unit());
//! assert_eq!(cost, 1.);
//! assert_eq!(alignment.to_cigar(), "1X2M");
//! ```
pub mod alignment;
pub mod cost_model;
pub mod error;
pub mod levenshtein;
pub mod normalize;
pub mod nw;
pub mod sequence;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
mod tests;

pub use alignment::{Alignment, EditKind, EditOp};
pub use cost_model::{Cost, CostModel, GenericCost, UniformCost};
pub use error::{Error, Result};
pub use sequence::{to_sequence, to_string, Seq, Sequence, Symbol};

pub mod prelude {
    pub use super::alignment::*;
    pub use super::cost_model::*;
    pub use super::error::*;
    pub use super::levenshtein::Levenshtein;
    pub use super::normalize::Normalizer;
    pub use super::nw::{CostMatrix, NW};
    pub use super::sequence::*;
    pub use super::Aligner;
}

/// An aligner is a type that supports aligning sequences using some algorithm.
///
/// Note that insertions are when `b` has more characters than `a`, and
/// deletions are when `b` has less characters than `a`.
///
/// Aligners keep no state between calls; each call allocates its own table.
pub trait Aligner {
    type CostModel: CostModel;

    /// Returns the cost model used by the aligner.
    fn cost_model(&self) -> &Self::CostModel;

    /// Finds the cost of aligning `a` and `b`.
    fn cost(&self, a: Seq, b: Seq) -> Cost;

    /// Finds the cost and an optimal alignment of `a` and `b`.
    fn align(&self, a: Seq, b: Seq) -> (Cost, Alignment);
}

/// Edit distance with unit costs: substitutions and indels cost 1, matches 0.
pub fn distance(a: &str, b: &str) -> Cost {
    levenshtein::Levenshtein::default().cost(&to_sequence(a), &to_sequence(b))
}

/// Edit distance under the given cost model.
pub fn distance_with(a: &str, b: &str, cm: &impl CostModel) -> Cost {
    nw::NW::new(cm).cost(&to_sequence(a), &to_sequence(b))
}

/// Edit distance under the given cost model, and an alignment with that cost.
pub fn align(a: &str, b: &str, cm: &impl CostModel) -> (Cost, Alignment) {
    nw::NW::new(cm).align(&to_sequence(a), &to_sequence(b))
}

/// Normalized edit distance under the given uniform costs, using the default
/// [`normalize::Normalizer`] settings.
pub fn normalized_distance(a: &str, b: &str, cm: &UniformCost) -> Result<Cost> {
    normalize::Normalizer::default().distance(&to_sequence(a), &to_sequence(b), cm)
}
