use crate::tree::{Tree, Tree::*};
use std::sync::Arc;

impl Tree {
    /// Substitute all subtrees (sub expressions) in this tree that are
    /// structurally equal to `old` with `new`. Matches are replaced from the
    /// top down, so a match is never searched for inside another match, nor
    /// inside the substituted copies of `new`.
    ///
    /// Every replaced occurrence shares the same copy of `new`.
    pub fn substitute(&self, old: &Tree, new: &Tree) -> Tree {
        if !self.walk().any(|node| node == old) {
            // No matches found for substitution.
            return self.clone();
        }
        let new = Arc::new(new.clone());
        self.replace(old, &new)
    }

    /// Compose this tree with `inner`, i.e. get `f(g(x))` where this tree is
    /// `f` and `inner` is `g`.
    pub fn compose(&self, inner: &Tree) -> Tree {
        self.substitute(&Variable, inner)
    }

    fn replace(&self, old: &Tree, new: &Arc<Tree>) -> Tree {
        if self == old {
            return new.as_ref().clone();
        }
        self.map_children(|child| {
            if child.as_ref() == old {
                Arc::clone(new)
            } else {
                Arc::new(child.replace(old, new))
            }
        })
    }
}
