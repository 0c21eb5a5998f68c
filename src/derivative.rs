use crate::{
    derived::{cos, div, reciprocal, sub},
    error::Error,
    tree::{Tree, Tree::*, add, log, mul, pow},
};

impl Tree {
    /// Compute the symbolic derivative of this tree with respect to the
    /// variable, and simplify it. This differentiates once. Higher order
    /// derivatives are obtained by calling this repeatedly.
    pub fn derivative(&self) -> Tree {
        self.diff().simplify()
    }

    /// Compute the raw symbolic derivative of this tree, without any
    /// simplification. The result is often much larger than necessary, for
    /// example it is full of products with `0` and `1`.
    pub fn diff(&self) -> Tree {
        match self {
            Constant(_) => Tree::constant(0.),
            Variable => Tree::constant(1.),
            Sum(lhs, rhs) => add(lhs.diff(), rhs.diff()),
            Product(lhs, rhs) => add(
                mul(lhs.clone(), rhs.diff()),
                mul(rhs.clone(), lhs.diff()),
            ),
            Power(base, exponent) => {
                // d(f ^ g) = g * f ^ (g - 1) * f' + f ^ g * ln(f) * g', whether
                // or not f and g depend on the variable.
                let lhs = mul(
                    mul(
                        exponent.clone(),
                        pow(base.clone(), add(exponent.clone(), Tree::constant(-1.))),
                    ),
                    base.diff(),
                );
                let rhs = mul(
                    mul(pow(base.clone(), exponent.clone()), log(base.clone())),
                    exponent.diff(),
                );
                add(lhs, rhs)
            }
            NaturalLog(input) => mul(reciprocal(input.clone()), input.diff()),
            Sine(input) => mul(cos(input.clone()), input.diff()),
        }
    }

    /// Get a tree representing the numerical derivative of this tree, using
    /// the central difference with step size `eps`:
    /// `(f(x + eps) - f(x - eps)) / (2 * eps)`.
    pub fn numerical_deriv(&self, eps: f64) -> Result<Tree, Error> {
        if !eps.is_finite() || eps <= 0. {
            return Err(Error::InvalidStepSize(eps));
        }
        let right = self.compose(&add(Variable, Tree::constant(eps)));
        let left = self.compose(&sub(Variable, Tree::constant(eps)));
        return Ok(div(sub(right, left), Tree::constant(2. * eps)));
    }
}

#[cfg(test)]
mod test {
    use crate::{
        X, assert_float_eq, cos, cot, csc, deftree,
        error::Error,
        exp,
        test::{check_value_eval, compare_trees},
        tree::{Tree, Tree::*, add, mul, pow},
    };
    use std::f64::consts::{E, LN_2};

    #[test]
    fn t_constant() {
        for val in [0., 1., -2.5, 1e300, std::f64::consts::PI, E, f64::NAN] {
            assert_eq!(Tree::constant(val).derivative(), Constant(0.));
        }
    }

    #[test]
    fn t_variable() {
        assert_eq!(X.derivative(), Constant(1.));
        assert_eq!(X.diff(), Constant(1.));
    }

    #[test]
    fn t_raw_rules() {
        assert_eq!(deftree!(+ x 2).diff(), add(Constant(1.), Constant(0.)));
        assert_eq!(
            deftree!(* x 2).diff(),
            add(mul(X, Constant(0.)), mul(Constant(2.), Constant(1.)))
        );
        assert_eq!(
            deftree!(pow x 3).diff(),
            add(
                mul(
                    mul(Constant(3.), pow(X, add(Constant(3.), Constant(-1.)))),
                    Constant(1.)
                ),
                mul(mul(pow(X, Constant(3.)), deftree!(log x)), Constant(0.))
            )
        );
        assert_eq!(
            deftree!(log x).diff(),
            mul(pow(X, Constant(-1.)), Constant(1.))
        );
        // The chain rule for cosine falls out of the sine rule.
        assert_eq!(deftree!(sin x).diff(), mul(cos(X), Constant(1.)));
    }

    #[test]
    fn t_raw_derivative_is_unsimplified() {
        let tree = deftree!(pow x 3);
        assert!(tree.diff().len() > tree.derivative().len());
        assert_eq!(tree.diff().simplify(), tree.derivative());
    }

    #[test]
    fn t_polynomial() {
        let deriv = deftree!(pow x 3).derivative();
        assert_eq!(deriv, deftree!(* 3 (pow x 2)));
        assert_eq!(deriv.res(2), 12.);
        compare_trees(
            &deftree!(+ (* 1.5 (pow x 2)) (+ (* 2.3 x) 3.46)).derivative(),
            &deftree!(+ (* 3 x) 2.3),
            (-10., 10.),
            100,
            1e-13,
        );
        compare_trees(
            &deftree!(+ (* 1.2 (pow x 3)) (+ (* 2.3 (pow x 2)) (+ (* 3.4 x) 4.5))).derivative(),
            &deftree!(+ (* 3.6 (pow x 2)) (+ (* 4.6 x) 3.4)),
            (-10., 10.),
            100,
            1e-12,
        );
    }

    #[test]
    fn t_second_derivative() {
        let second = deftree!(pow x 3).derivative().derivative();
        compare_trees(&second, &deftree!(* 6 x), (-10., 10.), 100, 1e-12);
    }

    #[test]
    fn t_variable_base_and_exponent() {
        let deriv = deftree!(pow x x).derivative();
        assert_float_eq!(deriv.res(2), 4. * (1. + LN_2), 1e-4);
        check_value_eval(
            &deriv,
            |x| f64::powf(x, x) * (1. + f64::ln(x)),
            (0.1, 4.),
            100,
            1e-10,
        );
    }

    #[test]
    fn t_exp() {
        let deriv = exp(X).derivative();
        assert_eq!(deriv, exp(X));
        for k in [-3, -1, 0, 1, 2, 5] {
            assert_float_eq!(deriv.res(k), f64::exp(k as f64), 1e-9);
        }
        compare_trees(
            &deftree!(exp (pow x 2)).derivative(),
            &deftree!(* 2 (* x (exp (pow x 2)))),
            (-3., 3.),
            100,
            1e-9,
        );
    }

    #[test]
    fn t_log() {
        compare_trees(
            &deftree!(log (pow x 2)).derivative(),
            &deftree!(/ 2 x),
            (0.01, 10.),
            100,
            1e-12,
        );
    }

    #[test]
    fn t_trigonometry() {
        compare_trees(
            &deftree!(pow (sin x) 2).derivative(),
            &deftree!(* 2 (* (sin x) (cos x))),
            (-5., 5.),
            100,
            1e-14,
        );
        compare_trees(
            &deftree!(cos x).derivative(),
            &deftree!(- (sin x)),
            (-5., 5.),
            100,
            1e-14,
        );
        compare_trees(
            &deftree!(tan x).derivative(),
            &deftree!(pow (/ 1 (cos x)) 2),
            (-1.4, 1.4),
            100,
            1e-9,
        );
        compare_trees(
            &deftree!(sin (pow x 2)).derivative(),
            &deftree!(* (cos (pow x 2)) (* 2 x)),
            (-2., 2.),
            100,
            1e-14,
        );
        compare_trees(
            &cot(X).derivative(),
            &mul(Constant(-1.), pow(csc(X), Constant(2.))),
            (0.2, 2.9),
            100,
            1e-9,
        );
    }

    #[test]
    fn t_numerical() {
        compare_trees(
            &deftree!(pow x 2).numerical_deriv(1e-4).unwrap(),
            &deftree!(* 2 x),
            (-10., 10.),
            100,
            1e-9,
        );
        let tree = deftree!(* (sin x) (log x));
        compare_trees(
            &tree.numerical_deriv(1e-5).unwrap(),
            &tree.derivative(),
            (0.5, 10.),
            100,
            1e-6,
        );
    }

    #[test]
    fn t_numerical_invalid_step() {
        assert_eq!(X.numerical_deriv(0.), Err(Error::InvalidStepSize(0.)));
        assert_eq!(X.numerical_deriv(-1e-3), Err(Error::InvalidStepSize(-1e-3)));
        assert_eq!(
            X.numerical_deriv(f64::INFINITY),
            Err(Error::InvalidStepSize(f64::INFINITY))
        );
        assert!(X.numerical_deriv(f64::NAN).is_err());
    }
}
