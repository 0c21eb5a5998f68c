use crate::derived::{div, exp, negate, reciprocal, sub};
use std::{
    f64::consts::{E, PI},
    ops,
    sync::Arc,
};

/// Represents an expression in a single real variable.
///
/// Trees are immutable once built. Every transform returns a new tree, and
/// subtrees are held behind an `Arc` so they can be shared by any number of
/// parents, across threads if needed.
///
/// Equality is structural: two trees are equal when they have the same variant
/// and their fields are recursively equal. Constants are compared exactly with
/// `f64` equality, never with a tolerance.
///
/// All operations on a tree recurse once per level, so the stack depth they
/// need is proportional to `Tree::height`. Pathologically deep trees can
/// exhaust the stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Constant(f64),
    /// The independent variable, rendered as `x`.
    Variable,
    Sum(Arc<Tree>, Arc<Tree>),
    Product(Arc<Tree>, Arc<Tree>),
    /// Base and exponent.
    Power(Arc<Tree>, Arc<Tree>),
    NaturalLog(Arc<Tree>),
    Sine(Arc<Tree>),
}

use Tree::*;

/// The independent variable.
pub const X: Tree = Variable;

impl Tree {
    /// Create a tree representing a constant value.
    pub fn constant(val: f64) -> Tree {
        Constant(val)
    }

    /// The constant π.
    pub fn pi() -> Tree {
        Constant(PI)
    }

    /// Euler's number.
    pub fn e() -> Tree {
        Constant(E)
    }

    /// The number of nodes in this tree. Shared subtrees are counted once for
    /// every place they appear in.
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    /// The number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        1 + match self {
            Constant(_) | Variable => 0,
            Sum(lhs, rhs) | Product(lhs, rhs) | Power(lhs, rhs) => {
                usize::max(lhs.height(), rhs.height())
            }
            NaturalLog(input) | Sine(input) => input.height(),
        }
    }

    /// The value of this tree if it is a `Constant`.
    pub fn value(&self) -> Option<f64> {
        match self {
            Constant(val) => Some(*val),
            _ => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Constant(_))
    }

    /// Check if the variable appears anywhere in this tree.
    pub fn has_variable(&self) -> bool {
        self.walk().any(|node| matches!(node, Variable))
    }

    /// The direct children of this node, in order.
    pub fn children(&self) -> Vec<&Tree> {
        match self {
            Constant(_) | Variable => vec![],
            Sum(lhs, rhs) | Product(lhs, rhs) | Power(lhs, rhs) => {
                vec![lhs.as_ref(), rhs.as_ref()]
            }
            NaturalLog(input) | Sine(input) => vec![input.as_ref()],
        }
    }

    /// Rebuild this node with each of its children replaced by the output of
    /// `f`. Leaves are returned as they are.
    pub(crate) fn map_children<F>(&self, mut f: F) -> Tree
    where
        F: FnMut(&Arc<Tree>) -> Arc<Tree>,
    {
        match self {
            Constant(_) | Variable => self.clone(),
            Sum(lhs, rhs) => Sum(f(lhs), f(rhs)),
            Product(lhs, rhs) => Product(f(lhs), f(rhs)),
            Power(base, exponent) => Power(f(base), f(exponent)),
            NaturalLog(input) => NaturalLog(f(input)),
            Sine(input) => Sine(f(input)),
        }
    }

    /// Raise this tree to the power of `exponent`.
    pub fn pow<T: Into<Tree>>(self, exponent: T) -> Tree {
        pow(self, Into::<Tree>::into(exponent))
    }

    /// Raise Euler's number to the power of this tree.
    pub fn exp(self) -> Tree {
        exp(self)
    }

    pub fn reciprocal(self) -> Tree {
        reciprocal(self)
    }
}

macro_rules! unary_func {
    ($name:ident, $variant:ident) => {
        pub fn $name(tree: impl Into<Arc<Tree>>) -> Tree {
            $variant(tree.into())
        }
    };
}

unary_func!(log, NaturalLog);
unary_func!(sin, Sine);

macro_rules! binary_func {
    ($name:ident, $variant:ident) => {
        pub fn $name(lhs: impl Into<Arc<Tree>>, rhs: impl Into<Arc<Tree>>) -> Tree {
            $variant(lhs.into(), rhs.into())
        }
    };
}

binary_func!(add, Sum);
binary_func!(mul, Product);
binary_func!(pow, Power);

impl From<f64> for Tree {
    fn from(value: f64) -> Self {
        Constant(value)
    }
}

impl From<i32> for Tree {
    fn from(value: i32) -> Self {
        Constant(value as f64)
    }
}

impl<T: Into<Tree>> ops::Add<T> for Tree {
    type Output = Tree;

    fn add(self, rhs: T) -> Tree {
        add(self, Into::<Tree>::into(rhs))
    }
}

impl<T: Into<Tree>> ops::Sub<T> for Tree {
    type Output = Tree;

    fn sub(self, rhs: T) -> Tree {
        sub(self, Into::<Tree>::into(rhs))
    }
}

impl<T: Into<Tree>> ops::Mul<T> for Tree {
    type Output = Tree;

    fn mul(self, rhs: T) -> Tree {
        mul(self, Into::<Tree>::into(rhs))
    }
}

impl<T: Into<Tree>> ops::Div<T> for Tree {
    type Output = Tree;

    fn div(self, rhs: T) -> Tree {
        div(self, Into::<Tree>::into(rhs))
    }
}

impl ops::Neg for Tree {
    type Output = Tree;

    fn neg(self) -> Tree {
        negate(self)
    }
}
