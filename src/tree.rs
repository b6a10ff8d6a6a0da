//! A persistent BST. This is modeled after a BST one would see in
//! a functional language like Haskell. Inserting never modifies the
//! tree; it returns a new tree that references every node of the
//! original tree that is not on the path to the new element.
//!
//! # Examples
//!
//! ```
//! use clowder::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.find(&1), None);
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert(1);
//!
//! // The new tree has this new value but the old one doesn't.
//! assert_eq!(new_tree.find(&1), Some(&1));
//! assert_eq!(tree.find(&1), None);
//!
//! // All history is preserved.
//! let newer_tree = new_tree.insert(2);
//! assert_eq!(newer_tree.size(), 2);
//! assert_eq!(new_tree.size(), 1);
//! assert_eq!(tree.size(), 0);
//! ```

use std::cmp;
use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

use crate::{Error, Iter, TreeVisitor};

/// A Binary Search Tree. Note that this data structure is persistent -
/// operations that would modify the tree instead return a new tree.
///
/// The tree is never rebalanced. Elements that compare equal are the
/// same key: the first one inserted is kept and later ones are dropped.
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Empty,
    /// A `Node` that has some data and two children (which are
    /// both `Tree`s). This enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning a tree only copies reference counted handles.
impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(n) => Self::Node(n.clone()),
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Returns `true` for [`Empty`][Tree::Empty] and `false` for a [`Node`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns a new tree that includes `value`.
    ///
    /// Only the nodes on the path from the root down to the new element
    /// are rebuilt. If the tree already holds an element equal to `value`
    /// the returned tree shares every node with this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use clowder::Tree;
    ///
    /// let tree = Tree::new().insert(2);
    /// let new_tree = tree.insert(1);
    /// let same_tree = new_tree.insert(1);
    ///
    /// // All history is preserved.
    /// assert_eq!(same_tree.size(), 2);
    /// assert_eq!(new_tree.size(), 2);
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        self.insert_new(value).unwrap_or_else(|| self.clone())
    }

    /// Builds the tree containing `value`, or `None` if an equal element
    /// is already present.
    fn insert_new(&self, value: T) -> Option<Self>
    where
        T: cmp::Ord,
    {
        match self {
            Self::Empty => Some(Self::Node(Node::new(value))),
            Self::Node(n) => n.insert(value).map(Self::Node),
        }
    }

    /// Potentially finds the stored element that compares equal to
    /// `value`. If there is none, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use clowder::Tree;
    ///
    /// let tree = Tree::new().insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: cmp::Ord,
    {
        match self {
            Self::Empty => None,
            Self::Node(n) => n.find(value),
        }
    }

    /// How many elements are stored in this tree. This walks the whole
    /// tree so it is `O(N)`.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns the root [`Node`] or [`Error::EmptyTree`] if there is none.
    pub fn node(&self) -> Result<&Node<T>, Error> {
        match self {
            Self::Empty => Err(Error::EmptyTree),
            Self::Node(n) => Ok(n),
        }
    }

    /// The data stored at the root of this tree.
    ///
    /// # Panics
    ///
    /// Panics if the tree is empty.
    pub fn data(&self) -> &T {
        self.expect_node().data()
    }

    /// The left subtree of the root.
    ///
    /// # Panics
    ///
    /// Panics if the tree is empty.
    pub fn left(&self) -> &Self {
        self.expect_node().left()
    }

    /// The right subtree of the root.
    ///
    /// # Panics
    ///
    /// Panics if the tree is empty.
    pub fn right(&self) -> &Self {
        self.expect_node().right()
    }

    fn expect_node(&self) -> &Node<T> {
        match self.node() {
            Ok(n) => n,
            Err(e) => panic!("{}", e),
        }
    }

    /// Hands this tree to `visitor`, calling the method that matches the
    /// variant of this tree, and returns what the visitor rendered.
    ///
    /// # Examples
    ///
    /// ```
    /// use clowder::{PostOrderVisitor, Tree};
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(3);
    ///
    /// assert_eq!(tree.accept(&mut PostOrderVisitor), "132");
    /// ```
    pub fn accept<V>(&self, visitor: &mut V) -> String
    where
        V: TreeVisitor<T> + ?Sized,
    {
        match self {
            Self::Empty => visitor.visit_empty(),
            Self::Node(n) => visitor.visit_node(n),
        }
    }

    /// Returns an iterator over the elements in ascending order. Every call
    /// starts a fresh, independent traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, value| tree.insert(value))
    }
}

struct Child<T>(Rc<Tree<T>>);
impl<T> Clone for Child<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}
impl<T> Child<T> {
    fn new() -> Self {
        Self(Rc::new(Tree::new()))
    }

    /// A new child containing `value`, or `None` if this child already
    /// holds an equal element.
    fn insert(&self, value: T) -> Option<Self>
    where
        T: cmp::Ord,
    {
        self.0.insert_new(value).map(|tree| Self(Rc::new(tree)))
    }

    fn find(&self, value: &T) -> Option<&T>
    where
        T: cmp::Ord,
    {
        self.0.find(value)
    }
}

/// A `Node` has the data used for searching/sorting. It always has two
/// children although those children may be [`Empty`][Tree::Empty].
pub struct Node<T> {
    data: Rc<T>,
    left: Child<T>,
    right: Child<T>,
}

/// Manual implementation of `Clone` so we don't clone references when the generic parameter
/// isn't `Clone` itself.
impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            data: Rc::clone(&self.data),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<T> Node<T> {
    /// Construct a new `Node` with the given `data` and two empty children.
    fn new(data: T) -> Self {
        Self {
            data: Rc::new(data),
            left: Child::new(),
            right: Child::new(),
        }
    }

    /// The data stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The subtree holding everything smaller than this node's data.
    pub fn left(&self) -> &Tree<T> {
        &self.left.0
    }

    /// The subtree holding everything greater than this node's data.
    pub fn right(&self) -> &Tree<T> {
        &self.right.0
    }

    /// Create a new Node with the same data as this node
    /// but with the given children.
    fn clone_with_children(&self, left: Child<T>, right: Child<T>) -> Self {
        Self {
            data: Rc::clone(&self.data),
            left,
            right,
        }
    }

    fn insert(&self, value: T) -> Option<Self>
    where
        T: cmp::Ord,
    {
        match value.cmp(&self.data) {
            cmp::Ordering::Less => {
                let new_left = self.left.insert(value)?;
                Some(self.clone_with_children(new_left, self.right.clone()))
            }
            cmp::Ordering::Equal => None,
            cmp::Ordering::Greater => {
                let new_right = self.right.insert(value)?;
                Some(self.clone_with_children(self.left.clone(), new_right))
            }
        }
    }

    fn find(&self, value: &T) -> Option<&T>
    where
        T: cmp::Ord,
    {
        match value.cmp(&self.data) {
            cmp::Ordering::Less => self.left.find(value),
            cmp::Ordering::Equal => Some(&self.data),
            cmp::Ordering::Greater => self.right.find(value),
        }
    }
}
