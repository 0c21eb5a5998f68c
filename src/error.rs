use std::fmt::Debug;

/// Errors reported by the fallible helpers of this crate. Building, evaluating,
/// differentiating, simplifying and rendering trees never fail.
#[derive(Clone, PartialEq)]
pub enum Error {
    /// Something went wrong when trying to do interval airthmetic, for example
    /// the bounds are NaN or a constant in the tree cannot be represented as
    /// an interval.
    InvalidInterval,
    /// The step size for a numerical derivative must be finite and strictly
    /// positive.
    InvalidStepSize(f64),
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            InvalidInterval => write!(f, "InvalidInterval"),
            InvalidStepSize(eps) => f.debug_tuple("InvalidStepSize").field(eps).finish(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            InvalidInterval => write!(f, "invalid interval"),
            InvalidStepSize(eps) => write!(f, "invalid step size for numerical derivative: {eps}"),
        }
    }
}

impl std::error::Error for Error {}
