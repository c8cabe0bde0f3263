//! Augmented AVL interval tree.
//!
//! Nodes are ordered by interval start; each node caches the largest end
//! in its subtree (`max_end`) so overlap queries can prune whole subtrees.
//! Equal starts descend right, so an in-order walk lists intervals by start
//! and, for equal starts, by insertion order.
//!
//! # Complexity
//! Insert O(log n); overlap query O(log n + k) for k results.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 14.3 (Interval Trees)

use crate::models::Interval;

#[derive(Debug, Clone)]
struct Node {
    interval: Interval,
    max_end: f64,
    height: i32,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(interval: Interval) -> Self {
        Self {
            interval,
            max_end: interval.end(),
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
        self.max_end = [max_end(&self.left), max_end(&self.right)]
            .into_iter()
            .flatten()
            .fold(self.interval.end(), f64::max);
    }

    fn balance(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

fn height(node: &Option<Box<Node>>) -> i32 {
    node.as_ref().map_or(0, |n| n.height)
}

fn max_end(node: &Option<Box<Node>>) -> Option<f64> {
    node.as_ref().map(|n| n.max_end)
}

fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update();
    pivot.right = Some(node);
    pivot.update();
    pivot
}

fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update();
    pivot.left = Some(node);
    pivot.update();
    pivot
}

fn rebalance(mut node: Box<Node>) -> Box<Node> {
    node.update();
    let balance = node.balance();
    if balance > 1 {
        if node.left.as_ref().is_some_and(|l| l.balance() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if balance < -1 {
        if node.right.as_ref().is_some_and(|r| r.balance() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

fn insert_at(node: Option<Box<Node>>, interval: Interval) -> Box<Node> {
    match node {
        None => Box::new(Node::leaf(interval)),
        Some(mut n) => {
            if interval.start() < n.interval.start() {
                n.left = Some(insert_at(n.left.take(), interval));
            } else {
                n.right = Some(insert_at(n.right.take(), interval));
            }
            rebalance(n)
        }
    }
}

/// Whether `stored` overlaps `query` by range alone.
#[inline]
fn range_overlaps(stored: &Interval, query: &Interval) -> bool {
    stored.start() < query.end() && query.start() < stored.end()
}

fn collect_overlaps(node: &Option<Box<Node>>, query: &Interval, out: &mut Vec<Interval>) {
    let Some(n) = node else {
        return;
    };
    if n.max_end <= query.start() {
        return;
    }
    collect_overlaps(&n.left, query, out);
    if range_overlaps(&n.interval, query) {
        if let Some(o) = n.interval.overlap(query) {
            out.push(o);
        }
    }
    if n.interval.start() < query.end() {
        collect_overlaps(&n.right, query, out);
    }
}

fn find_any(node: &Option<Box<Node>>, query: &Interval) -> bool {
    let Some(n) = node else {
        return false;
    };
    if n.max_end <= query.start() {
        return false;
    }
    if range_overlaps(&n.interval, query) {
        return true;
    }
    find_any(&n.left, query) || (n.interval.start() < query.end() && find_any(&n.right, query))
}

/// Interval tree over intervals sharing one `(day, week)`.
///
/// Overlap tests compare numeric ranges only; the owning index guarantees
/// every stored interval and every query share the same slot.
#[derive(Debug, Clone, Default)]
pub struct IntervalTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl IntervalTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an interval. Duplicates and overlaps are kept.
    pub fn insert(&mut self, interval: Interval) {
        self.root = Some(insert_at(self.root.take(), interval));
        self.len += 1;
    }

    /// Stored intervals overlapping `query`, truncated to the intersection,
    /// ordered by stored start.
    pub fn query_overlap(&self, query: &Interval) -> Vec<Interval> {
        let mut out = Vec::new();
        collect_overlaps(&self.root, query, &mut out);
        out
    }

    /// Whether any stored interval overlaps `query`.
    pub fn any_overlap(&self, query: &Interval) -> bool {
        find_any(&self.root, query)
    }

    /// Number of stored intervals.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// In-order iterator over stored intervals.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    pub(crate) fn height(&self) -> i32 {
        height(&self.root)
    }
}

/// In-order iterator over an [`IntervalTree`].
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Interval;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: f64, end: f64) -> Interval {
        Interval::new(start, end, 1, 1).unwrap()
    }

    #[test]
    fn test_empty_tree() {
        let t = IntervalTree::new();
        assert!(t.is_empty());
        assert!(t.query_overlap(&iv(0.0, 24.0)).is_empty());
        assert!(!t.any_overlap(&iv(0.0, 24.0)));
    }

    #[test]
    fn test_query_truncates_to_intersection() {
        let mut t = IntervalTree::new();
        t.insert(iv(10.0, 20.0));
        let hits = t.query_overlap(&iv(9.0, 17.0));
        assert_eq!(hits, vec![iv(10.0, 17.0)]);
    }

    #[test]
    fn test_query_multiple_and_touching() {
        let mut t = IntervalTree::new();
        t.insert(iv(8.0, 10.0));
        t.insert(iv(10.0, 12.0));
        t.insert(iv(12.0, 14.0));
        t.insert(iv(15.0, 18.0));

        let hits = t.query_overlap(&iv(10.0, 12.0));
        assert_eq!(hits, vec![iv(10.0, 12.0)]);

        let hits = t.query_overlap(&iv(11.0, 16.0));
        assert_eq!(hits, vec![iv(11.0, 12.0), iv(12.0, 14.0), iv(15.0, 16.0)]);

        assert!(!t.any_overlap(&iv(14.0, 15.0)));
        assert!(t.any_overlap(&iv(13.5, 15.0)));
    }

    #[test]
    fn test_duplicates_kept() {
        let mut t = IntervalTree::new();
        t.insert(iv(10.0, 12.0));
        t.insert(iv(10.0, 12.0));
        assert_eq!(t.len(), 2);
        assert_eq!(t.query_overlap(&iv(11.0, 11.5)).len(), 2);
    }

    #[test]
    fn test_in_order_iteration() {
        let mut t = IntervalTree::new();
        for s in [5.0, 1.0, 9.0, 3.0, 7.0, 2.0] {
            t.insert(iv(s, s + 1.0));
        }
        let starts: Vec<f64> = t.iter().map(|i| i.start()).collect();
        assert_eq!(starts, vec![1.0, 2.0, 3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_stays_balanced_on_sorted_inserts() {
        let mut t = IntervalTree::new();
        for k in 0..1000 {
            let s = f64::from(k) * 0.02;
            t.insert(iv(s, s + 0.5));
        }
        assert_eq!(t.len(), 1000);
        // AVL bound: h < 1.44 log2(n + 2)
        assert!(t.height() <= 15, "height {} too large", t.height());
    }

    #[test]
    fn test_max_end_pruning_keeps_long_intervals() {
        // A long interval with an early start must be found even when the
        // query lies right of many short ones.
        let mut t = IntervalTree::new();
        t.insert(iv(0.0, 23.0));
        for k in 1..20 {
            let s = f64::from(k) * 0.5;
            t.insert(iv(s, s + 0.25));
        }
        let hits = t.query_overlap(&iv(22.0, 23.5));
        assert_eq!(hits, vec![iv(22.0, 23.0)]);
    }
}
