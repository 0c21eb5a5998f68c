/*!
Functions that are not variants of `Tree`, built as compositions of the
primitive variants. Because they are plain compositions, differentiation and
simplification handle them through the primitive rules.
*/

use crate::tree::{Tree, add, mul, pow, sin};
use std::{f64::consts::FRAC_PI_2, sync::Arc};

/// `-1 * tree`.
pub fn negate(tree: impl Into<Arc<Tree>>) -> Tree {
    mul(Tree::constant(-1.), tree)
}

/// `lhs + (-1 * rhs)`.
pub fn sub(lhs: impl Into<Arc<Tree>>, rhs: impl Into<Arc<Tree>>) -> Tree {
    add(lhs, negate(rhs))
}

/// `tree ^ -1`.
pub fn reciprocal(tree: impl Into<Arc<Tree>>) -> Tree {
    pow(tree, Tree::constant(-1.))
}

/// `lhs * (rhs ^ -1)`.
pub fn div(lhs: impl Into<Arc<Tree>>, rhs: impl Into<Arc<Tree>>) -> Tree {
    mul(lhs, reciprocal(rhs))
}

/// `e ^ tree`.
pub fn exp(tree: impl Into<Arc<Tree>>) -> Tree {
    pow(Tree::e(), tree)
}

/// `sin(pi / 2 - tree)`.
pub fn cos(tree: impl Into<Arc<Tree>>) -> Tree {
    sin(add(Tree::constant(FRAC_PI_2), negate(tree)))
}

pub fn tan(tree: impl Into<Arc<Tree>>) -> Tree {
    let tree: Arc<Tree> = tree.into();
    div(sin(Arc::clone(&tree)), cos(tree))
}

pub fn csc(tree: impl Into<Arc<Tree>>) -> Tree {
    reciprocal(sin(tree))
}

pub fn sec(tree: impl Into<Arc<Tree>>) -> Tree {
    reciprocal(cos(tree))
}

pub fn cot(tree: impl Into<Arc<Tree>>) -> Tree {
    reciprocal(tan(tree))
}
