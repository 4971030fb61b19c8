//! A Binary Search Tree (BST) over a set of unique ordered values, built
//! balanced from an input collection and rebalanced only on request.
//!
//! ## Binary Search Tree
//!
//! A BST is defined recursively using the notion of a `Node`. Each `Node`
//! stores one value and up to two child `Node`s, and the important
//! invariants are:
//!
//! 1. For every `Node`, the `Node`s in its left subtree hold values less
//!    than its own value.
//! 2. For every `Node`, the `Node`s in its right subtree hold values
//!    greater than (or, after [`insert`]'s splice shortcut, equal to) its
//!    own value.
//!
//! These invariants make `find` an `O(height)` operation, and visiting the
//! left subtree, then a node, then its right subtree yields the values in
//! sorted order.
//!
//! ## Balance
//!
//! [`Tree::new`] partitions a deduplicated, sorted copy of its input
//! around midpoints, so a freshly built tree has `O(lg N)` height for `N`
//! values. Mutations do *not* maintain that shape: [`insert`] attaches (or
//! splices) wherever its descent lands and [`delete`] promotes successors
//! without any rotation, so a long run of skewed insertions degrades the
//! height toward `O(N)`. Calling [`Tree::rebalance`] discards the
//! accumulated shape and rebuilds from scratch.
//!
//! [`insert`]: tree::Tree::insert
//! [`delete`]: tree::Tree::delete
//! [`Tree::new`]: tree::Tree::new
//! [`Tree::rebalance`]: tree::Tree::rebalance

#![deny(missing_docs)]

pub mod render;
pub mod sort;
pub mod tree;

#[cfg(test)]
mod test;
