use crate::tree::{Tree, Tree::*, add, log, mul, pow, sin};
use std::f64::consts::{E, PI};
use tracing::trace;

const ZERO: Tree = Constant(0.);
const ONE: Tree = Constant(1.);
const EULER: Tree = Constant(E);

impl Tree {
    /**
    Simplify this tree bottom up. The children of every node are simplified
    first, then the first matching rule for the node is applied:

    - `0 + b = b`, `a + 0 = a`, and sums of two constants are folded, unless
      one of them is π.
    - `0 * b = a * 0 = 0`, `1 * b = b`, `a * 1 = a`, and products of two
      constants are folded, unless one of them is π.
    - `0 ^ b = 0`, `a ^ 0 = 1`, `a ^ 1 = a`, and powers of two constants are
      folded. The base is checked first, so `0 ^ 0 = 0`.
    - `ln(1) = 0` and `ln(e) = 1`.
    - Sines are never folded.

    Constants are matched structurally. A single pass reaches a fixed point:
    simplifying the output again gives back the same tree.
    */
    pub fn simplify(&self) -> Tree {
        match self {
            Constant(_) | Variable => self.clone(),
            Sum(lhs, rhs) => match (lhs.simplify(), rhs.simplify()) {
                (lhs, rhs) if lhs == ZERO => rewritten("sum-zero-lhs", rhs),
                (lhs, rhs) if rhs == ZERO => rewritten("sum-zero-rhs", lhs),
                (Constant(a), Constant(b)) if a != PI && b != PI => {
                    rewritten("sum-fold", Constant(a + b))
                }
                (lhs, rhs) => add(lhs, rhs),
            },
            Product(lhs, rhs) => match (lhs.simplify(), rhs.simplify()) {
                (lhs, rhs) if lhs == ZERO || rhs == ZERO => rewritten("product-zero", ZERO),
                (lhs, rhs) if lhs == ONE => rewritten("product-one-lhs", rhs),
                (lhs, rhs) if rhs == ONE => rewritten("product-one-rhs", lhs),
                (Constant(a), Constant(b)) if a != PI && b != PI => {
                    rewritten("product-fold", Constant(a * b))
                }
                (lhs, rhs) => mul(lhs, rhs),
            },
            Power(base, exponent) => match (base.simplify(), exponent.simplify()) {
                (base, _) if base == ZERO => rewritten("power-zero-base", ZERO),
                (_, exponent) if exponent == ZERO => rewritten("power-zero-exponent", ONE),
                (base, exponent) if exponent == ONE => rewritten("power-one-exponent", base),
                (Constant(a), Constant(b)) => rewritten("power-fold", Constant(f64::powf(a, b))),
                (base, exponent) => pow(base, exponent),
            },
            NaturalLog(input) => match input.simplify() {
                input if input == ONE => rewritten("log-one", ZERO),
                input if input == EULER => rewritten("log-e", ONE),
                input => log(input),
            },
            Sine(input) => sin(input.simplify()),
        }
    }
}

fn rewritten(rule: &'static str, tree: Tree) -> Tree {
    trace!(rule, result = %tree, "simplified");
    tree
}
