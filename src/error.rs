use crate::cost_model::Cost;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A uniform cost that is negative, infinite or NaN.
    #[error("invalid {name} cost {value}: costs must be finite and non-negative")]
    InvalidCost { name: &'static str, value: Cost },

    #[error("normalized distance did not converge after {iterations} iterations (last lambda {lambda})")]
    NoConvergence { iterations: usize, lambda: Cost },

    #[error("invalid alignment: {0}")]
    InvalidAlignment(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
