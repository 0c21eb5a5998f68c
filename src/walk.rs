use crate::tree::{Tree, Tree::*};

/// Iterator that walks a tree depth first, visiting every node before its
/// children, and the children from left to right.
///
/// The traversal is not recursive, so it works on trees of any height. A
/// subtree shared by several parents is visited once for every parent.
pub struct DepthIterator<'a> {
    stack: Vec<&'a Tree>,
}

impl<'a> Iterator for DepthIterator<'a> {
    type Item = &'a Tree;

    fn next(&mut self) -> Option<&'a Tree> {
        let tree = self.stack.pop()?;
        match tree {
            Constant(_) | Variable => {}
            NaturalLog(input) | Sine(input) => self.stack.push(input.as_ref()),
            Sum(lhs, rhs) | Product(lhs, rhs) | Power(lhs, rhs) => {
                // Right first, so the left child is popped first.
                self.stack.push(rhs.as_ref());
                self.stack.push(lhs.as_ref());
            }
        }
        return Some(tree);
    }
}

impl Tree {
    /// Get an iterator that walks the nodes of this tree depth first, starting
    /// with the root.
    pub fn walk(&self) -> DepthIterator<'_> {
        DepthIterator { stack: vec![self] }
    }
}
