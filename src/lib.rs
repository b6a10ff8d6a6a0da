//! This crate exposes a persistent, unbalanced Binary Search Tree (BST)
//! together with the usual ways of walking one.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The [`Tree`] here is persistent: `insert` never touches the tree it was
//! called on. It returns a new root that shares every subtree off the
//! insertion path with the old one. Nothing rebalances the tree, so inserting
//! sorted data gives a tree of depth `N`.
//!
//! There are two ways to get the elements back out:
//!
//! - [`Tree::accept`] hands the tree to a [`TreeVisitor`], which renders it
//!   eagerly into a `String` (see [`InOrderVisitor`] and [`PostOrderVisitor`]).
//! - [`Tree::iter`] returns an [`Iter`] which lazily yields the elements in
//!   ascending order using an explicit stack instead of recursion.
//!
//! # Examples
//!
//! ```
//! use clowder::{InOrderVisitor, Tree};
//!
//! let tree = Tree::new().insert(3).insert(2).insert(5).insert(5);
//!
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![2, 3, 5]);
//! assert_eq!(tree.accept(&mut InOrderVisitor), "235");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

#[cfg(feature = "cafe")]
pub mod cafe;
mod error;
pub mod iter;
pub mod tree;
pub mod visitor;

pub use error::Error;
pub use iter::Iter;
pub use tree::{Node, Tree};
pub use visitor::{InOrderVisitor, PostOrderVisitor, PreOrderVisitor, TreeVisitor};
