//! Rendering a [`Tree`](crate::Tree) through the visitor pattern.
//!
//! [`Tree::accept`](crate::Tree::accept) picks the visitor method matching
//! the variant it is called on. The visitor is then responsible for walking
//! further down by calling `accept` on the children of the node it was given.
//!
//! # Examples
//!
//! ```
//! use clowder::{InOrderVisitor, Node, PostOrderVisitor, Tree, TreeVisitor};
//!
//! /// Renders only the root.
//! struct RootVisitor;
//!
//! impl TreeVisitor<i32> for RootVisitor {
//!     fn visit_empty(&mut self) -> String {
//!         String::new()
//!     }
//!
//!     fn visit_node(&mut self, node: &Node<i32>) -> String {
//!         node.data().to_string()
//!     }
//! }
//!
//! let tree = Tree::new().insert(2).insert(1).insert(3);
//!
//! assert_eq!(tree.accept(&mut InOrderVisitor), "123");
//! assert_eq!(tree.accept(&mut PostOrderVisitor), "132");
//! assert_eq!(tree.accept(&mut RootVisitor), "2");
//! ```

use std::fmt;

use crate::Node;

/// One method per [`Tree`](crate::Tree) variant.
///
/// Visitors take `&mut self` so they may keep state across calls. A visitor
/// that accumulates something must not be reused for an unrelated traversal
/// while one is still in progress. The visitors in this module hold no state.
pub trait TreeVisitor<T> {
    /// Called for [`Tree::Empty`](crate::Tree::Empty).
    fn visit_empty(&mut self) -> String;

    /// Called for [`Tree::Node`](crate::Tree::Node).
    fn visit_node(&mut self, node: &Node<T>) -> String;
}

/// Renders left subtree, data, right subtree. For a BST this is the
/// elements in ascending order.
#[derive(Debug, Default, Clone, Copy)]
pub struct InOrderVisitor;

impl<T> TreeVisitor<T> for InOrderVisitor
where
    T: fmt::Display,
{
    fn visit_empty(&mut self) -> String {
        String::new()
    }

    fn visit_node(&mut self, node: &Node<T>) -> String {
        let mut output = node.left().accept(self);
        output.push_str(&node.data().to_string());
        output.push_str(&node.right().accept(self));
        output
    }
}

/// Renders left subtree, right subtree, data.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostOrderVisitor;

impl<T> TreeVisitor<T> for PostOrderVisitor
where
    T: fmt::Display,
{
    fn visit_empty(&mut self) -> String {
        String::new()
    }

    fn visit_node(&mut self, node: &Node<T>) -> String {
        let mut output = node.left().accept(self);
        output.push_str(&node.right().accept(self));
        output.push_str(&node.data().to_string());
        output
    }
}

/// Renders data, left subtree, right subtree.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreOrderVisitor;

impl<T> TreeVisitor<T> for PreOrderVisitor
where
    T: fmt::Display,
{
    fn visit_empty(&mut self) -> String {
        String::new()
    }

    fn visit_node(&mut self, node: &Node<T>) -> String {
        let mut output = node.data().to_string();
        output.push_str(&node.left().accept(self));
        output.push_str(&node.right().accept(self));
        output
    }
}
