//! Normalized edit distance.
//!
//! For a [`UniformCost`] model, find `λ` such that shifting both the match
//! and substitution cost by `λ` makes the edit distance equal to
//! `λ * (|a| + |b|)`.
//!
//! An alignment with `r` matches and `s` substitutions costs
//! `|a| del + |b| ins + (match - ins - del) r + (sub - ins - del) s + λ (r + s)`,
//! so the root is one of the finitely many values `λ(r, s)` with
//! `r + s <= min(|a|, |b|)`. `f(λ) = dist_λ(a, b) - λ (|a| + |b|)` is
//! decreasing in `λ`, and we search the candidates by repeatedly probing the
//! median and discarding the half that cannot contain the root.
use crate::cost_model::{Cost, UniformCost};
use crate::error::{Error, Result};
use crate::nw::NW;
use crate::sequence::Seq;
use crate::Aligner;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Normalizer {
    /// Relative tolerance on `dist_λ(a, b) - λ (|a| + |b|)`.
    pub tolerance: Cost,
    /// Give up after this many probes.
    pub max_iterations: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer {
            tolerance: 1e-9,
            max_iterations: 256,
        }
    }
}

/// All values `λ(r, s)` for `r, s >= 0` and `r + s <= min(n, m)`, where `n` and
/// `m` are the lengths of the two sequences.
///
/// The offsets of `cm` are ignored.
pub fn candidates(n: usize, m: usize, cm: &UniformCost) -> Vec<Cost> {
    let k = n.min(m);
    let base = n as Cost * cm.del + m as Cost * cm.ins;
    let per_match = cm.match_cost - cm.ins - cm.del;
    let per_sub = cm.sub - cm.ins - cm.del;
    let mut q = Vec::with_capacity((k + 1) * (k + 2) / 2);
    for r in 0..=k {
        for s in 0..=k - r {
            let ops = n + m - r - s;
            // Only reachable when both sequences are empty.
            if ops == 0 {
                continue;
            }
            q.push((base + per_match * r as Cost + per_sub * s as Cost) / ops as Cost);
        }
    }
    q
}

/// The lower median of `q`, found by partitioning `q` in place.
fn median(q: &mut [Cost]) -> Cost {
    assert!(!q.is_empty());
    let mid = (q.len() - 1) / 2;
    *q.select_nth_unstable_by(mid, Cost::total_cmp).1
}

impl Normalizer {
    /// The normalized edit distance between `a` and `b`.
    ///
    /// `cm` is not modified; the search shifts the offsets of a copy.
    pub fn distance(&self, a: Seq, b: Seq, cm: &UniformCost) -> Result<Cost> {
        cm.validate()?;
        if a.is_empty() && b.is_empty() {
            return Ok(0.);
        }
        let total = (a.len() + b.len()) as Cost;
        let mut q = candidates(a.len(), b.len(), cm);
        let mut probe = *cm;
        let mut lambda = Cost::NAN;

        for iteration in 0..self.max_iterations {
            if q.is_empty() {
                return Err(Error::NoConvergence {
                    iterations: iteration,
                    lambda,
                });
            }
            lambda = median(&mut q);
            probe.set_offset(lambda);
            let solution = NW::new(probe).cost(a, b) - lambda * total;
            trace!(
                "iteration {iteration}: lambda {lambda} solution {solution} candidates {}",
                q.len()
            );

            if solution.abs() <= self.tolerance * (lambda * total).abs().max(1.) {
                debug!("normalized distance {lambda} after {} probes", iteration + 1);
                return Ok(lambda);
            }
            if solution < 0. {
                q.retain(|&x| x < lambda);
            } else {
                q.retain(|&x| x > lambda);
            }
        }
        Err(Error::NoConvergence {
            iterations: self.max_iterations,
            lambda,
        })
    }
}
