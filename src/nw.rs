//! Needleman-Wunsch style dynamic programming for arbitrary cost models.
//!
//! `NW::cost` keeps only two rows of the table. `NW::align` fills the full
//! `(|a|+1) x (|b|+1)` [`CostMatrix`] for the duration of the call and traces
//! the optimal alignment back through it.
use crate::alignment::{Alignment, EditOp};
use crate::cost_model::{Cost, CostModel, UniformCost};
use crate::sequence::Seq;
use crate::Aligner;
use std::ops::{Index, IndexMut};

/// Dense table where `(i, j)` is the cost of turning `a[..i]` into `b[..j]`.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    m: Vec<Cost>,
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = Cost;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Cost {
        &self.m[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for CostMatrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Cost {
        &mut self.m[i * self.cols + j]
    }
}

impl CostMatrix {
    /// A zeroed matrix for sequences of length `n` and `m`.
    pub fn new(n: usize, m: usize) -> Self {
        CostMatrix {
            rows: n + 1,
            cols: m + 1,
            m: vec![0.; (n + 1) * (m + 1)],
        }
    }

    /// Fill the matrix for `a` and `b` under the given cost model.
    pub fn fill(a: Seq, b: Seq, cm: &impl CostModel) -> Self {
        let mut m = Self::new(a.len(), b.len());
        for (i0, &ca) in a.iter().enumerate() {
            m[(i0 + 1, 0)] = m[(i0, 0)] + cm.del(ca);
        }
        for (j0, &cb) in b.iter().enumerate() {
            m[(0, j0 + 1)] = m[(0, j0)] + cm.ins(cb);
        }
        for (i0, &ca) in a.iter().enumerate() {
            // Change from 0-based to 1-based indexing.
            let i = i0 + 1;
            let del = cm.del(ca);
            for (j0, &cb) in b.iter().enumerate() {
                let j = j0 + 1;
                let f = (m[(i - 1, j - 1)] + cm.sub(ca, cb))
                    .min(m[(i - 1, j)] + del)
                    .min(m[(i, j - 1)] + cm.ins(cb));
                debug_assert!(f >= m[(i - 1, j - 1)].min(m[(i - 1, j)]).min(m[(i, j - 1)]));
                m[(i, j)] = f;
            }
        }
        m
    }

    /// Number of rows, `|a| + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `|b| + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cost of the full alignment, in the bottom right cell.
    pub fn cost(&self) -> Cost {
        self[(self.rows - 1, self.cols - 1)]
    }

    /// Trace an optimal alignment from the end back to the start.
    ///
    /// `cm` must be the cost model the matrix was filled with. When several
    /// predecessors are optimal, a match/substitution is preferred over a
    /// deletion, and a deletion over an insertion.
    pub fn trace(&self, a: Seq, b: Seq, cm: &impl CostModel) -> Alignment {
        assert_eq!(self.rows, a.len() + 1);
        assert_eq!(self.cols, b.len() + 1);

        let mut alignment = Alignment::default();
        let mut i = a.len();
        let mut j = b.len();
        while i > 0 && j > 0 {
            let (ca, cb) = (a[i - 1], b[j - 1]);
            let f = self[(i, j)];
            let sub = cm.sub(ca, cb);
            if f == self[(i - 1, j - 1)] + sub {
                alignment.push(EditOp::sub(ca, cb, sub));
                i -= 1;
                j -= 1;
                continue;
            }
            let del = cm.del(ca);
            if f == self[(i - 1, j)] + del {
                alignment.push(EditOp::del(ca, del));
                i -= 1;
                continue;
            }
            let ins = cm.ins(cb);
            debug_assert_eq!(f, self[(i, j - 1)] + ins, "No predecessor for ({i}, {j}).");
            alignment.push(EditOp::ins(cb, ins));
            j -= 1;
        }
        while i > 0 {
            let ca = a[i - 1];
            alignment.push(EditOp::del(ca, cm.del(ca)));
            i -= 1;
        }
        while j > 0 {
            let cb = b[j - 1];
            alignment.push(EditOp::ins(cb, cm.ins(cb)));
            j -= 1;
        }
        alignment.reverse();
        alignment
    }
}

/// NW aligner for any cost model.
#[derive(Clone, Debug, Default)]
pub struct NW<CM> {
    pub cm: CM,
}

impl<CM: CostModel> NW<CM> {
    pub fn new(cm: CM) -> Self {
        NW { cm }
    }

    /// The full cost matrix of `a` and `b`.
    pub fn matrix(&self, a: Seq, b: Seq) -> CostMatrix {
        CostMatrix::fill(a, b, &self.cm)
    }
}

impl NW<UniformCost> {
    pub fn unit() -> Self {
        Self::new(UniformCost::unit())
    }
}

impl<CM: CostModel> Aligner for NW<CM> {
    type CostModel = CM;

    fn cost_model(&self) -> &CM {
        &self.cm
    }

    /// The cost-only version uses linear memory.
    fn cost(&self, a: Seq, b: Seq) -> Cost {
        let ref mut prev = vec![0.; b.len() + 1];
        let ref mut next = vec![0.; b.len() + 1];
        for (j0, &cb) in b.iter().enumerate() {
            next[j0 + 1] = next[j0] + self.cm.ins(cb);
        }
        for &ca in a {
            std::mem::swap(prev, next);
            let del = self.cm.del(ca);
            next[0] = prev[0] + del;
            for (j0, &cb) in b.iter().enumerate() {
                let j = j0 + 1;
                next[j] = (prev[j - 1] + self.cm.sub(ca, cb))
                    .min(prev[j] + del)
                    .min(next[j - 1] + self.cm.ins(cb));
            }
        }
        next[b.len()]
    }

    fn align(&self, a: Seq, b: Seq) -> (Cost, Alignment) {
        let m = self.matrix(a, b);
        (m.cost(), m.trace(a, b, &self.cm))
    }
}
