//! An unbalanced, single-owner BST. Every node owns its children through a `Box` so the tree is
//! a strict hierarchy and dropping a node releases its whole subtree.
//!
//! # Examples
//!
//! ```
//! use dsa_bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! // Inserts chain.
//! tree.insert(2).insert(1).insert(3);
//! assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
//!
//! // Inserting an existing value changes nothing.
//! tree.insert(2);
//! assert_eq!(tree.traverse_in_order(), vec![1, 2, 3]);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&2), Some(2));
//! assert!(tree.find(&2).is_none());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::errors::InvariantError;

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding distinct, totally ordered values. No rebalancing is performed so
/// the shape of the tree depends on the order values were inserted in.
pub struct BinarySearchTree<T> {
    root: Link<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // A sorted insertion sequence builds a chain as deep as the tree is large, so the nodes are
    // released from an explicit stack instead of through nested `Box` drops.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: Node::clone_subtree(self.root()),
        }
    }
}

impl<T> PartialEq for BinarySearchTree<T>
where
    T: PartialEq,
{
    /// Two trees are equal when they hold equal values in the same shape.
    fn eq(&self, other: &Self) -> bool {
        Node::subtrees_eq(self.root(), other.root())
    }
}

impl<T> Eq for BinarySearchTree<T> where T: Eq {}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    // Nested `Node` output recurses once per level, so formatting a very deep chain can exhaust
    // the stack.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("root", &self.root())
            .finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generate a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if the tree has any nodes.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a tree with only a
    /// root has a height of 1.
    pub fn height(&self) -> usize {
        Node::height_of(self.root())
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| root.min().value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| root.max().value())
    }

    /// Returns `true` if, for every node, the heights of its left and right subtrees differ by at
    /// most one. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_bst::BinarySearchTree;
    ///
    /// let balanced: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    /// assert!(balanced.is_balanced());
    ///
    /// let chain: BinarySearchTree<_> = [1, 2, 3].into_iter().collect();
    /// assert!(!chain.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        Node::balanced_height(self.root()).is_some()
    }

    /// Finds the value just below the largest one. Trees with fewer than two values have no
    /// second highest value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [5, 3, 8, 7].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), Some(&7));
    ///
    /// let lonely: BinarySearchTree<_> = [5].into_iter().collect();
    /// assert_eq!(lonely.find_second_highest(), None);
    /// ```
    pub fn find_second_highest(&self) -> Option<&T> {
        let mut current = self.root()?;
        let mut parent = None;
        while let Some(right) = current.right() {
            parent = Some(current);
            current = right;
        }

        // The maximum has no right child. If it has a left subtree the answer is the largest
        // value there, otherwise it is the last node we went right from.
        match current.left() {
            Some(left) => Some(left.max().value()),
            None => parent.map(Node::value),
        }
    }

    /// Visits each node, then its left subtree, then its right subtree.
    pub fn traverse_pre_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut visited = Vec::new();
        Node::pre_order(self.root(), &mut visited);
        visited.into_iter().cloned().collect()
    }

    /// Visits each node's left subtree, then the node, then its right subtree. The values come
    /// out in ascending order.
    pub fn traverse_in_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut visited = Vec::new();
        Node::in_order(self.root(), &mut visited);
        visited.into_iter().cloned().collect()
    }

    /// Visits each node's left subtree, then its right subtree, then the node.
    pub fn traverse_post_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut visited = Vec::new();
        Node::post_order(self.root(), &mut visited);
        visited.into_iter().cloned().collect()
    }

    /// Visits the tree level by level, left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [8, 3, 10, 1, 6].into_iter().collect();
    /// assert_eq!(tree.traverse_breadth_first(), vec![8, 3, 10, 1, 6]);
    /// ```
    pub fn traverse_breadth_first(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut visited = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            visited.push(node.value.clone());
            queue.extend(node.left());
            queue.extend(node.right());
        }

        visited
    }
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Inserts the given value by walking down from the root. Inserting a value that is already
    /// in the tree does nothing. Returns the tree so inserts can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1).insert(2).insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self {
        Self::insert_iterative(&mut self.root, value);

        #[cfg(feature = "full_validation")]
        self.assert_valid();
        self
    }

    /// Same as [`insert`][Self::insert] but descends with recursion. For the same sequence of
    /// values both produce the same tree.
    pub fn insert_recursive(&mut self, value: T) -> &mut Self {
        Self::insert_at(&mut self.root, value);

        #[cfg(feature = "full_validation")]
        self.assert_valid();
        self
    }

    /// Finds the node holding the given value, walking down from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.find(&5).map(|n| *n.value()), Some(5));
    /// assert!(tree.find(&9).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Same as [`find`][Self::find] but descends with recursion.
    pub fn find_recursive(&self, value: &T) -> Option<&Node<T>> {
        Node::find_from(self.root(), value)
    }

    /// Whether the tree holds the given value.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes the given value from the tree and returns it. If the tree does not contain the
    /// value, nothing happens.
    ///
    /// A node with two children is not unlinked: its in-order successor is removed from the right
    /// subtree instead and the successor's value moves into the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa_bst::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = [8, 3, 10, 1, 6, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&3), Some(3));
    /// assert_eq!(tree.remove(&3), None);
    /// assert_eq!(tree.traverse_pre_order(), vec![8, 4, 1, 6, 10]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let removed = Self::remove_from(&mut self.root, value);

        #[cfg(feature = "full_validation")]
        self.assert_valid();
        removed
    }

    /// Checks that an in-order walk of the tree is strictly ascending, which holds exactly when
    /// every subtree respects the ordering invariant and no value is stored twice.
    pub fn validate(&self) -> Result<(), InvariantError> {
        // In-order walk with an explicit stack so deep chains can be checked too.
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut current = self.root();
        let mut previous: Option<&T> = None;
        let mut position = 0;

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };

            if let Some(previous) = previous {
                match previous.cmp(&node.value) {
                    Ordering::Less => {}
                    Ordering::Equal => return Err(InvariantError::Duplicate { position }),
                    Ordering::Greater => return Err(InvariantError::OutOfOrder { position }),
                }
            }
            previous = Some(&node.value);
            position += 1;
            current = node.right();
        }
        Ok(())
    }

    #[cfg(feature = "full_validation")]
    fn assert_valid(&self) {
        if let Err(e) = self.validate() {
            panic!("tree invariant violated: {e}");
        }
    }

    fn insert_iterative(root: &mut Link<T>, value: T) {
        let mut link = root;
        loop {
            match link {
                None => {
                    *link = Some(Node::new_boxed(value));
                    return;
                }
                Some(node) => {
                    link = match value.cmp(&node.value) {
                        Ordering::Less => &mut node.left,
                        Ordering::Equal => {
                            trace!("value already present, insert ignored");
                            return;
                        }
                        Ordering::Greater => &mut node.right,
                    };
                }
            }
        }
    }

    fn insert_at(link: &mut Link<T>, value: T) {
        match link {
            None => *link = Some(Node::new_boxed(value)),
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_at(&mut node.left, value),
                Ordering::Equal => trace!("value already present, insert ignored"),
                Ordering::Greater => Self::insert_at(&mut node.right, value),
            },
        }
    }

    /// Removes `value` from the subtree at `link`, rebinding `link` to whatever should take the
    /// removed node's place.
    fn remove_from(link: &mut Link<T>, value: &T) -> Option<T> {
        let node = link.as_mut()?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::remove_from(&mut node.left, value),
            Ordering::Greater => Self::remove_from(&mut node.right, value),
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    let successor = Self::remove_min(&mut node.right)?;
                    trace!("replaced node with two children by its in-order successor");
                    return Some(mem::replace(&mut node.value, successor));
                }

                let removed = link.take()?;
                let Node {
                    value: removed_value,
                    left,
                    right,
                } = *removed;
                *link = left.or(right);
                if link.is_some() {
                    trace!("spliced the only child of the removed node into its parent");
                } else {
                    trace!("detached leaf node");
                }
                Some(removed_value)
            }
        }
    }

    /// Removes the smallest node of the subtree at `link`. That node has no left child so its
    /// right child (if any) takes its place.
    fn remove_min(link: &mut Link<T>) -> Option<T> {
        let mut link = link;
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }

        let min = link.take()?;
        let Node { value, right, .. } = *min;
        *link = right;
        Some(value)
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// A `Node` holds a value and owns up to two children. Everything in the left subtree is smaller
/// than the value and everything in the right subtree is larger.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> PartialEq for Node<T>
where
    T: PartialEq,
{
    /// Compares the values and shapes of the subtrees rooted at both nodes.
    fn eq(&self, other: &Self) -> bool {
        Self::subtrees_eq(Some(self), Some(other))
    }
}

impl<T> Eq for Node<T> where T: Eq {}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Copies the subtree at `node` without recursing. A pre-order walk records the nodes, then
    /// walking that order backwards finishes every right subtree and then every left subtree
    /// before their parent, so both sit on top of `built` when the parent is copied.
    fn clone_subtree(node: Option<&Self>) -> Link<T>
    where
        T: Clone,
    {
        let mut pre_order = Vec::new();
        let mut stack: Vec<&Self> = node.into_iter().collect();
        while let Some(node) = stack.pop() {
            pre_order.push(node);
            stack.extend(node.right());
            stack.extend(node.left());
        }

        let mut built: Vec<Box<Self>> = Vec::new();
        for node in pre_order.into_iter().rev() {
            let mut copy = Self::new_boxed(node.value.clone());
            if node.left.is_some() {
                copy.left = built.pop();
            }
            if node.right.is_some() {
                copy.right = built.pop();
            }
            built.push(copy);
        }
        built.pop()
    }

    /// Walks both subtrees in lockstep with an explicit stack.
    fn subtrees_eq(a: Option<&Self>, b: Option<&Self>) -> bool
    where
        T: PartialEq,
    {
        let mut stack = vec![(a, b)];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    if a.value != b.value {
                        return false;
                    }
                    stack.push((a.right(), b.right()));
                    stack.push((a.left(), b.left()));
                }
                _ => return false,
            }
        }
        true
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of this node's left subtree.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn min(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    fn max(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    fn height_of(node: Option<&Self>) -> usize {
        node.map_or(0, |n| {
            Self::height_of(n.left()).max(Self::height_of(n.right())) + 1
        })
    }

    /// The height of the subtree at `node`, or `None` if any node in it is unbalanced.
    fn balanced_height(node: Option<&Self>) -> Option<usize> {
        let Some(node) = node else {
            return Some(0);
        };
        let left = Self::balanced_height(node.left())?;
        let right = Self::balanced_height(node.right())?;
        (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
    }

    fn find_from<'a>(node: Option<&'a Self>, value: &T) -> Option<&'a Self>
    where
        T: Ord,
    {
        let node = node?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::find_from(node.left(), value),
            Ordering::Equal => Some(node),
            Ordering::Greater => Self::find_from(node.right(), value),
        }
    }

    fn pre_order<'a>(node: Option<&'a Self>, visited: &mut Vec<&'a T>) {
        if let Some(node) = node {
            visited.push(&node.value);
            Self::pre_order(node.left(), visited);
            Self::pre_order(node.right(), visited);
        }
    }

    fn in_order<'a>(node: Option<&'a Self>, visited: &mut Vec<&'a T>) {
        if let Some(node) = node {
            Self::in_order(node.left(), visited);
            visited.push(&node.value);
            Self::in_order(node.right(), visited);
        }
    }

    fn post_order<'a>(node: Option<&'a Self>, visited: &mut Vec<&'a T>) {
        if let Some(node) = node {
            Self::post_order(node.left(), visited);
            Self::post_order(node.right(), visited);
            visited.push(&node.value);
        }
    }
}
