//! Edit operations and alignments (edit scripts).
use crate::cost_model::Cost;
use crate::error::{Error, Result};
use crate::sequence::{to_string, Seq, Sequence, Symbol};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum EditKind {
    Match,
    Sub,
    Ins,
    Del,
}

impl EditKind {
    /// The CIGAR character for this kind.
    pub fn char(&self) -> char {
        match self {
            EditKind::Match => 'M',
            EditKind::Sub => 'X',
            EditKind::Ins => 'I',
            EditKind::Del => 'D',
        }
    }
}

/// Turn `from` into `to`, where `None` is the gap side of an indel.
///
/// Two operations are equal when their symbol pairs are equal; the cost they
/// were charged is ignored.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct EditOp {
    from: Option<Symbol>,
    to: Option<Symbol>,
    cost: Cost,
}

impl EditOp {
    pub fn new(from: Option<Symbol>, to: Option<Symbol>, cost: Cost) -> Self {
        assert!(
            from.is_some() || to.is_some(),
            "An edit operation needs at least one symbol."
        );
        EditOp { from, to, cost }
    }

    /// A match or substitution.
    pub fn sub(from: Symbol, to: Symbol, cost: Cost) -> Self {
        Self::new(Some(from), Some(to), cost)
    }

    pub fn ins(to: Symbol, cost: Cost) -> Self {
        Self::new(None, Some(to), cost)
    }

    pub fn del(from: Symbol, cost: Cost) -> Self {
        Self::new(Some(from), None, cost)
    }

    pub fn from(&self) -> Option<Symbol> {
        self.from
    }

    pub fn to(&self) -> Option<Symbol> {
        self.to
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn kind(&self) -> EditKind {
        match (self.from, self.to) {
            (Some(a), Some(b)) if a == b => EditKind::Match,
            (Some(_), Some(_)) => EditKind::Sub,
            (None, _) => EditKind::Ins,
            (_, None) => EditKind::Del,
        }
    }
}

impl PartialEq for EditOp {
    fn eq(&self, other: &Self) -> bool {
        (self.from, self.to) == (other.from, other.to)
    }
}

impl Eq for EditOp {}

impl Hash for EditOp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.from, self.to).hash(state);
    }
}

/// An ordered edit script that turns the first sequence into the second.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Alignment {
    ops: Vec<EditOp>,
}

impl Alignment {
    pub fn push(&mut self, op: EditOp) {
        self.ops.push(op);
    }

    /// Reverse the alignment, for when it was built back to front.
    pub fn reverse(&mut self) {
        self.ops.reverse()
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> {
        self.ops.iter()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Total cost charged by the operations.
    pub fn cost(&self) -> Cost {
        self.ops.iter().map(EditOp::cost).sum()
    }

    pub fn count(&self, kind: EditKind) -> usize {
        self.ops.iter().filter(|op| op.kind() == kind).count()
    }

    /// Run-length encoded operation kinds, e.g. `1X2M1I`.
    pub fn to_cigar(&self) -> String {
        self.ops
            .iter()
            .map(EditOp::kind)
            .dedup_with_count()
            .map(|(cnt, kind)| format!("{cnt}{}", kind.char()))
            .join("")
    }

    /// Apply the operations to `a` and return the resulting sequence.
    ///
    /// Fails when an operation consumes a symbol that does not match `a`.
    pub fn apply(&self, a: Seq) -> Result<Sequence> {
        let mut out = Sequence::with_capacity(a.len());
        let mut i = 0;
        for (idx, op) in self.ops.iter().enumerate() {
            if let Some(from) = op.from {
                match a.get(i) {
                    Some(&c) if c == from => i += 1,
                    found => {
                        return Err(Error::InvalidAlignment(format!(
                            "operation {idx} expects '{from}' at position {i} but found {found:?}"
                        )))
                    }
                }
            }
            out.extend(op.to);
        }
        if i != a.len() {
            return Err(Error::InvalidAlignment(format!(
                "only {i} of {} symbols were consumed",
                a.len()
            )));
        }
        Ok(out)
    }

    /// Check that the alignment turns `a` into `b`.
    pub fn verify(&self, a: Seq, b: Seq) -> Result<()> {
        let out = self.apply(a)?;
        if out != b {
            return Err(Error::InvalidAlignment(format!(
                "alignment produces '{}' instead of '{}'",
                to_string(&out),
                to_string(b)
            )));
        }
        Ok(())
    }
}

impl FromIterator<EditOp> for Alignment {
    fn from_iter<T: IntoIterator<Item = EditOp>>(iter: T) -> Self {
        Alignment {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Alignment {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Three rows: the first sequence, markers, and the second sequence.
///
/// ```text
/// ca-t
/// || |
/// cart
/// ```
impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |s: Option<Symbol>| s.map_or('-', Symbol::char);
        let top: String = self.ops.iter().map(|op| side(op.from)).collect();
        let mid: String = self
            .ops
            .iter()
            .map(|op| match op.kind() {
                EditKind::Match => '|',
                EditKind::Sub => '*',
                EditKind::Ins | EditKind::Del => ' ',
            })
            .collect();
        let bot: String = self.ops.iter().map(|op| side(op.to)).collect();
        write!(f, "{top}\n{mid}\n{bot}")
    }
}
