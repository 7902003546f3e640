//! This module contains the `CostModel` trait and the `UniformCost` and
//! `GenericCost` cost models.
//!
//! A missing symbol (`None`) stands for the gap side of an insertion or
//! deletion: `cost(Some(a), None)` deletes `a`, `cost(None, Some(b))` inserts `b`.
use crate::error::{Error, Result};
use crate::sequence::Symbol;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Type for storing costs.
pub type Cost = f64;

/// A trait describing a cost model.
///
/// Implementations must return non-negative costs. This is not checked.
pub trait CostModel {
    /// The cost of turning `a` into `b`. At most one side is `None`.
    fn cost(&self, a: Option<Symbol>, b: Option<Symbol>) -> Cost;

    /// Cost of a match or substitution.
    fn sub(&self, a: Symbol, b: Symbol) -> Cost {
        self.cost(Some(a), Some(b))
    }

    /// Cost of inserting `b`.
    fn ins(&self, b: Symbol) -> Cost {
        self.cost(None, Some(b))
    }

    /// Cost of deleting `a`.
    fn del(&self, a: Symbol) -> Cost {
        self.cost(Some(a), None)
    }
}

impl<CM: CostModel + ?Sized> CostModel for &CM {
    fn cost(&self, a: Option<Symbol>, b: Option<Symbol>) -> Cost {
        (**self).cost(a, b)
    }
}

/// Costs that only depend on whether two symbols are equal.
///
/// The offsets are added to the match and substitution costs and are used by
/// the normalized distance search. They never change indel costs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformCost {
    pub match_cost: Cost,
    pub sub: Cost,
    pub ins: Cost,
    pub del: Cost,
    #[serde(default)]
    pub match_offset: Cost,
    #[serde(default)]
    pub sub_offset: Cost,
}

impl UniformCost {
    pub fn new(match_cost: Cost, sub: Cost, ins: Cost, del: Cost) -> Self {
        UniformCost {
            match_cost,
            sub,
            ins,
            del,
            match_offset: 0.,
            sub_offset: 0.,
        }
    }

    /// Levenshtein costs: match 0, substitution and indels 1.
    pub fn unit() -> Self {
        Self::new(0., 1., 1., 1.)
    }

    pub fn linear(sub: Cost, indel: Cost) -> Self {
        Self::new(0., sub, indel, indel)
    }

    pub fn linear_asymmetric(sub: Cost, ins: Cost, del: Cost) -> Self {
        Self::new(0., sub, ins, del)
    }

    /// Set both the match and substitution offset to `lambda`.
    pub fn set_offset(&mut self, lambda: Cost) {
        self.match_offset = lambda;
        self.sub_offset = lambda;
    }

    pub fn with_offset(mut self, lambda: Cost) -> Self {
        self.set_offset(lambda);
        self
    }

    /// Effective match cost, including the offset.
    pub fn match_total(&self) -> Cost {
        self.match_cost + self.match_offset
    }

    /// Effective substitution cost, including the offset.
    pub fn sub_total(&self) -> Cost {
        self.sub + self.sub_offset
    }

    /// Check that the base costs are finite and non-negative, and the offsets finite.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("match", self.match_cost),
            ("substitution", self.sub),
            ("insertion", self.ins),
            ("deletion", self.del),
        ] {
            if !value.is_finite() || value < 0. {
                return Err(Error::InvalidCost { name, value });
            }
        }
        for (name, value) in [
            ("match offset", self.match_offset),
            ("substitution offset", self.sub_offset),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidCost { name, value });
            }
        }
        Ok(())
    }
}

impl Default for UniformCost {
    fn default() -> Self {
        Self::unit()
    }
}

impl CostModel for UniformCost {
    #[inline]
    fn cost(&self, a: Option<Symbol>, b: Option<Symbol>) -> Cost {
        match (a, b) {
            (Some(a), Some(b)) if a == b => self.match_total(),
            (Some(_), Some(_)) => self.sub_total(),
            (Some(_), None) => self.del,
            (None, Some(_)) => self.ins,
            (None, None) => {
                debug_assert!(false, "Cost of aligning two gaps is undefined.");
                0.
            }
        }
    }
}

/// A cost model with per-symbol costs.
///
/// Pairs and symbols that are not in the tables fall back to `default`.
#[derive(Clone, Debug, Default)]
pub struct GenericCost {
    pub default: UniformCost,
    sub: FxHashMap<(Symbol, Symbol), Cost>,
    ins: FxHashMap<Symbol, Cost>,
    del: FxHashMap<Symbol, Cost>,
}

/// QWERTY layout rows with their horizontal stagger, in key widths.
const QWERTY: [(&str, f64); 4] = [
    ("1234567890-=", 0.),
    ("qwertyuiop[]", 0.5),
    ("asdfghjkl;'", 0.75),
    ("zxcvbnm,./", 1.25),
];

impl GenericCost {
    pub fn new(default: UniformCost) -> Self {
        GenericCost {
            default,
            ..Default::default()
        }
    }

    /// Substitution costs proportional to the distance between keys on a
    /// QWERTY keyboard: neighbouring keys cost 0.5, keys two or more apart
    /// cost a full substitution. Indels and non-keyboard symbols use unit costs.
    pub fn keyboard() -> Self {
        let keys: Vec<(Symbol, (f64, f64))> = QWERTY
            .iter()
            .enumerate()
            .flat_map(|(row, &(keys, stagger))| {
                keys.chars()
                    .enumerate()
                    .map(move |(col, c)| (Symbol::new(c), (col as f64 + stagger, row as f64)))
            })
            .collect();
        let mut cm = Self::new(UniformCost::unit());
        for &(a, (xa, ya)) in &keys {
            for &(b, (xb, yb)) in &keys {
                if a != b {
                    let d = (xa - xb).hypot(ya - yb);
                    cm.set_sub(a, b, (d / 2.).min(cm.default.sub));
                }
            }
        }
        cm
    }

    /// Set the cost of substituting `a` by `b`.
    pub fn set_sub(&mut self, a: impl Into<Symbol>, b: impl Into<Symbol>, cost: Cost) {
        self.sub.insert((a.into(), b.into()), cost);
    }

    /// Set the cost of substituting `a` by `b` and `b` by `a`.
    pub fn set_sub_symmetric(&mut self, a: impl Into<Symbol>, b: impl Into<Symbol>, cost: Cost) {
        let (a, b) = (a.into(), b.into());
        self.set_sub(a, b, cost);
        self.set_sub(b, a, cost);
    }

    pub fn set_ins(&mut self, b: impl Into<Symbol>, cost: Cost) {
        self.ins.insert(b.into(), cost);
    }

    pub fn set_del(&mut self, a: impl Into<Symbol>, cost: Cost) {
        self.del.insert(a.into(), cost);
    }
}

impl CostModel for GenericCost {
    fn cost(&self, a: Option<Symbol>, b: Option<Symbol>) -> Cost {
        match (a, b) {
            (Some(a), Some(b)) => match self.sub.get(&(a, b)) {
                Some(&c) => c,
                None => self.default.sub(a, b),
            },
            (Some(a), None) => self.del.get(&a).copied().unwrap_or(self.default.del),
            (None, Some(b)) => self.ins.get(&b).copied().unwrap_or(self.default.ins),
            (None, None) => {
                debug_assert!(false, "Cost of aligning two gaps is undefined.");
                0.
            }
        }
    }
}
