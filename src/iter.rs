//! Lazy in-order traversal of a [`Tree`].

use std::fmt;
use std::iter::FusedIterator;

use crate::{Error, Node, Tree};

/// Yields the elements of a [`Tree`] in ascending order.
///
/// Instead of recursing, the iterator keeps a stack of the nodes whose data
/// hasn't been yielded yet but whose left spine has already been pushed. The
/// top of the stack is always the next smallest element, and the stack never
/// holds more than `depth` nodes.
///
/// The stack is private to the iterator: every consumer should get its own
/// from [`Tree::iter`].
///
/// # Examples
///
/// ```
/// use clowder::Tree;
///
/// let tree = Tree::new().insert(2).insert(1).insert(3);
/// let mut iter = tree.iter();
///
/// assert!(iter.has_next());
/// assert_eq!(iter.try_next(), Ok(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
///
/// assert!(!iter.has_next());
/// assert_eq!(iter.next(), None);
/// ```
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> fmt::Debug for Iter<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending = self.stack.iter().map(|n| n.data()).collect::<Vec<_>>();
        f.debug_struct("Iter").field("pending", &pending).finish()
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Tree<T>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Tree<T>) {
        let mut ptr = subtree_root;

        while let Tree::Node(n) = ptr {
            self.stack.push(n);
            ptr = n.left();
        }
    }

    /// Returns `true` if another element is waiting.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Like [`Iterator::next`] but reports running out as [`Error::Exhausted`].
    pub fn try_next(&mut self) -> Result<&'a T, Error> {
        self.next().ok_or(Error::Exhausted)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        self.push_subtree(n.right());

        Some(n.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}
