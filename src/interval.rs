use crate::{
    error::Error,
    tree::{Tree, Tree::*},
};
use inari::{Interval, interval};

impl Tree {
    /// Compute an interval that encloses every value this tree takes when the
    /// variable ranges over `[lower, upper]`. The bounds are swapped if they
    /// are given in the wrong order.
    ///
    /// Unlike `res`, this reports an `Error::InvalidInterval` if either bound
    /// is NaN, or if the tree contains a constant that is not a finite
    /// number. Domain errors inside the range shrink the enclosure instead,
    /// for example the logarithm of `[-1, 1]` is `[-inf, 0]`.
    pub fn res_interval(&self, lower: f64, upper: f64) -> Result<Interval, Error> {
        let (lower, upper) = if upper < lower {
            (upper, lower)
        } else {
            (lower, upper)
        };
        let x = interval!(lower, upper).map_err(|_| Error::InvalidInterval)?;
        self.eval_interval(x)
    }

    fn eval_interval(&self, x: Interval) -> Result<Interval, Error> {
        Ok(match self {
            Constant(val) => interval!(*val, *val).map_err(|_| Error::InvalidInterval)?,
            Variable => x,
            Sum(lhs, rhs) => lhs.eval_interval(x)? + rhs.eval_interval(x)?,
            Product(lhs, rhs) => lhs.eval_interval(x)? * rhs.eval_interval(x)?,
            Power(base, exponent) => {
                let base = base.eval_interval(x)?;
                let exponent = exponent.eval_interval(x)?;
                match integer_exponent(exponent) {
                    // Integer powers are defined for negative bases, and give
                    // tighter intervals.
                    Some(2) => base.sqr(),
                    Some(n) => base.pown(n),
                    None => base.pow(exponent),
                }
            }
            NaturalLog(input) => input.eval_interval(x)?.ln(),
            Sine(input) => input.eval_interval(x)?.sin(),
        })
    }
}

fn integer_exponent(exponent: Interval) -> Option<i32> {
    if !exponent.is_singleton() {
        return None;
    }
    let val = exponent.inf();
    if val.fract() == 0. && val.abs() <= i32::MAX as f64 {
        Some(val as i32)
    } else {
        None
    }
}
