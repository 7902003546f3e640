//! Edit distance specialized to [`UniformCost`].
//!
//! Indel costs are constants and the diagonal term only depends on whether
//! `a[i-1] == b[j-1]`, so no cost model calls are made in the inner loop.
use crate::alignment::Alignment;
use crate::cost_model::{Cost, UniformCost};
use crate::nw::CostMatrix;
use crate::sequence::{Seq, Symbol};
use crate::Aligner;

#[derive(Clone, Copy, Debug, Default)]
pub struct Levenshtein {
    pub cm: UniformCost,
}

impl Levenshtein {
    pub fn new(cm: UniformCost) -> Self {
        Levenshtein { cm }
    }

    /// Diagonal cost for the symbols just consumed on both sides.
    #[inline]
    fn diagonal(&self, ca: Symbol, cb: Symbol) -> Cost {
        if ca == cb {
            self.cm.match_total()
        } else {
            self.cm.sub_total()
        }
    }

    pub fn matrix(&self, a: Seq, b: Seq) -> CostMatrix {
        let UniformCost { ins, del, .. } = self.cm;
        let mut m = CostMatrix::new(a.len(), b.len());
        for i in 1..=a.len() {
            m[(i, 0)] = m[(i - 1, 0)] + del;
        }
        for j in 1..=b.len() {
            m[(0, j)] = m[(0, j - 1)] + ins;
        }
        for i in 1..=a.len() {
            for j in 1..=b.len() {
                m[(i, j)] = (m[(i - 1, j - 1)] + self.diagonal(a[i - 1], b[j - 1]))
                    .min(m[(i - 1, j)] + del)
                    .min(m[(i, j - 1)] + ins);
            }
        }
        m
    }
}

impl Aligner for Levenshtein {
    type CostModel = UniformCost;

    fn cost_model(&self) -> &UniformCost {
        &self.cm
    }

    fn cost(&self, a: Seq, b: Seq) -> Cost {
        let UniformCost { ins, del, .. } = self.cm;
        let mut prev = vec![0.; b.len() + 1];
        for j in 1..=b.len() {
            prev[j] = prev[j - 1] + ins;
        }
        let mut next = vec![0.; b.len() + 1];
        for &ca in a {
            next[0] = prev[0] + del;
            for (j0, &cb) in b.iter().enumerate() {
                let j = j0 + 1;
                next[j] = (prev[j - 1] + self.diagonal(ca, cb))
                    .min(prev[j] + del)
                    .min(next[j - 1] + ins);
            }
            std::mem::swap(&mut prev, &mut next);
        }
        prev[b.len()]
    }

    fn align(&self, a: Seq, b: Seq) -> (Cost, Alignment) {
        let m = self.matrix(a, b);
        (m.cost(), m.trace(a, b, &self.cm))
    }
}
