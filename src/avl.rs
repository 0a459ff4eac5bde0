use crate::node::{collect_in_order, Link, TreeNode};

///Height-balanced binary search tree. Every insert rebalances on the way
///back up, so `|balance| <= 1` holds at every node between calls.
#[derive(Debug, Default, PartialEq)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K: Ord + Clone> AvlTree<K> {
    ///Creates a new AVL tree instance
    pub fn new() -> AvlTree<K> {
        AvlTree { root: None, len: 0 }
    }
    ///Returns number of elements in tree
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    ///Root link of the tree, for read-only walks and snapshots
    pub fn root(&self) -> &Link<K> {
        &self.root
    }

    ///Inserts key into the tree, rebalancing as needed. Duplicate keys are
    ///accepted and always land in the right subtree of the first equal key.
    pub fn insert(&mut self, key: K) {
        //one clone per insert: the descent moves the key into the new leaf,
        //the copy feeds the rebalance comparisons on the way back up
        let inserted = key.clone();
        Self::insert_into(&mut self.root, key, &inserted);
        self.len += 1;
    }

    fn insert_into(subtree: &mut Link<K>, key: K, inserted: &K) {
        match subtree {
            None => *subtree = Some(Box::new(TreeNode::new(key))),
            Some(node) => {
                if key < node.key {
                    Self::insert_into(&mut node.left, key, inserted);
                } else {
                    Self::insert_into(&mut node.right, key, inserted);
                }
                node.recompute_height();
                Self::rebalance_after_insert(node, inserted);
                debug_assert!(node.balance().abs() <= 1);
            }
        }
    }

    ///Picks the rotation case from the balance factor and from which side of
    ///the child the freshly inserted key went down. The key comparison only
    ///discriminates straight from zig-zag correctly right after a single
    ///insert, which is the only place this runs.
    fn rebalance_after_insert(node: &mut TreeNode<K>, key: &K) {
        let balance = node.balance();
        if balance > 1 {
            //left heavy
            if node.left.as_ref().is_some_and(|left| *key < left.key) {
                node.rotate_right();
            } else {
                node.rotate_left_right();
            }
        } else if balance < -1 {
            //right heavy; ties descend right, so an equal key is a straight case
            if node.right.as_ref().is_some_and(|right| *key >= right.key) {
                node.rotate_left();
            } else {
                node.rotate_right_left();
            }
        }
    }

    ///Searches tree for key, returns a reference to the stored key if present
    pub fn search(&self, key: &K) -> Option<&K> {
        Self::search_node(&self.root, key).map(|node| &node.key)
    }
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }
    fn search_node<'a>(subtree: &'a Link<K>, key: &K) -> Option<&'a TreeNode<K>> {
        let node = subtree.as_deref()?;
        if *key == node.key {
            Some(node)
        } else if *key < node.key {
            Self::search_node(&node.left, key)
        } else {
            Self::search_node(&node.right, key)
        }
    }

    ///Keys in sorted order
    pub fn in_order(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len);
        collect_in_order(&self.root, &mut keys);
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::height_of;
    use rand::Rng;

    fn get_balanced_tree() -> AvlTree<i64> {
        AvlTree {
            len: 3,
            root: Some(Box::new(TreeNode {
                key: 20,
                height: 2,
                left: Some(Box::new(TreeNode {
                    key: 10,
                    height: 1,
                    left: None,
                    right: None,
                })),
                right: Some(Box::new(TreeNode {
                    key: 30,
                    height: 1,
                    left: None,
                    right: None,
                })),
            })),
        }
    }

    fn build(keys: &[i64]) -> AvlTree<i64> {
        let mut tree = AvlTree::new();
        for &key in keys {
            tree.insert(key);
        }
        tree
    }

    ///Walks the whole tree checking cached heights and the AVL bound,
    ///returning the subtree height
    fn assert_balanced(subtree: &Link<i64>) -> usize {
        let Some(node) = subtree else { return 0 };
        let left = assert_balanced(&node.left);
        let right = assert_balanced(&node.right);
        assert_eq!(node.height, 1 + left.max(right), "stale height at {}", node.key);
        let balance = left as i32 - right as i32;
        assert!(balance.abs() <= 1, "unbalanced at {}: {}", node.key, balance);
        node.height
    }

    fn assert_sorted(keys: &[i64]) {
        assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_insert_size() {
        let tree = build(&[10, 30, 20]);
        assert_eq!(tree.len(), 3);
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_rotation_left() {
        //right-right chain forces a single left rotation
        assert_eq!(build(&[10, 20, 30]), get_balanced_tree());
    }

    #[test]
    fn test_rotation_right() {
        //left-left chain forces a single right rotation
        assert_eq!(build(&[30, 20, 10]), get_balanced_tree());
    }

    #[test]
    fn test_rotation_left_right() {
        assert_eq!(build(&[30, 10, 20]), get_balanced_tree());
    }

    #[test]
    fn test_rotation_right_left() {
        assert_eq!(build(&[10, 30, 20]), get_balanced_tree());
    }

    #[test]
    fn test_duplicates_go_right() {
        let tree = build(&[10, 10]);
        assert_eq!(tree.len(), 2);
        let root = tree.root().as_ref().unwrap();
        assert_eq!(root.key, 10);
        assert_eq!(root.right.as_ref().unwrap().key, 10);
        assert!(root.left.is_none());
    }

    #[test]
    fn test_duplicate_heavy_sequence_stays_balanced() {
        let tree = build(&[5, 5, 5, 5, 5, 5, 5, 5]);
        assert_eq!(tree.len(), 8);
        assert_balanced(tree.root());
    }

    #[test]
    fn test_search() {
        let tree = build(&[10, 20, 30, 40, 50, 25]);
        assert!(tree.contains(&25));
        assert!(tree.contains(&10));
        assert!(!tree.contains(&35));
        assert_eq!(AvlTree::<i64>::new().search(&1), None);
    }

    #[test]
    fn test_step_by_step_conversion() {
        //the worked example: balanced at every intermediate step
        let mut tree = AvlTree::new();
        for key in [10, 20, 30, 40, 50, 25] {
            tree.insert(key);
            assert_balanced(tree.root());
        }
        assert_eq!(tree.in_order(), vec![10, 20, 25, 30, 40, 50]);
        assert_eq!(tree.root().as_ref().unwrap().key, 30);
    }

    #[test]
    fn test_sorted_insertion_height_bound() {
        let tree = build(&(1..=1000).collect::<Vec<i64>>());
        assert_eq!(tree.len(), 1000);
        assert_balanced(tree.root());
        let bound = (1.44 * (1002f64).log2()).ceil() as usize;
        assert!(height_of(tree.root()) <= bound);
        assert_sorted(&tree.in_order());
    }

    #[test]
    fn test_insert_clones_key_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static CLONES: AtomicUsize = AtomicUsize::new(0);

        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
        struct CountingKey(i64);

        impl Clone for CountingKey {
            fn clone(&self) -> Self {
                CLONES.fetch_add(1, Ordering::Relaxed);
                CountingKey(self.0)
            }
        }

        let mut tree = AvlTree::new();
        for key in [10, 20, 30, 40, 50, 25] {
            tree.insert(CountingKey(key));
        }
        //one clone per insert, regardless of descent depth
        assert_eq!(CLONES.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn test_random_insertions_keep_invariants() {
        let mut rng = rand::thread_rng();
        let mut tree = AvlTree::new();
        for n in 1..=500usize {
            tree.insert(rng.gen_range(-50..50));
            assert_eq!(tree.len(), n);
            assert_balanced(tree.root());
            let bound = (1.44 * ((n + 2) as f64).log2()).ceil() as usize;
            assert!(height_of(tree.root()) <= bound);
        }
        assert_sorted(&tree.in_order());
    }
}
