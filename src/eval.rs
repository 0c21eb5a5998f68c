use crate::tree::{Tree, Tree::*};

impl Tree {
    /// Evaluate this tree with the variable set to `x`.
    ///
    /// No domain checks are performed. Logarithms of non-positive numbers,
    /// invalid powers and divisions by zero produce NaN or infinities, which
    /// propagate through the rest of the evaluation as usual for IEEE-754
    /// floating point numbers.
    pub fn res<T: Into<f64>>(&self, x: T) -> f64 {
        self.eval(x.into())
    }

    fn eval(&self, x: f64) -> f64 {
        match self {
            Constant(val) => *val,
            Variable => x,
            Sum(lhs, rhs) => lhs.eval(x) + rhs.eval(x),
            Product(lhs, rhs) => lhs.eval(x) * rhs.eval(x),
            Power(base, exponent) => f64::powf(base.eval(x), exponent.eval(x)),
            NaturalLog(input) => f64::ln(input.eval(x)),
            Sine(input) => f64::sin(input.eval(x)),
        }
    }
}
