pub type Link<K> = Option<Box<TreeNode<K>>>;

#[derive(Debug, Default, PartialEq)]
pub struct TreeNode<K> {
    pub(crate) key: K,
    pub(crate) height: usize,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

///Cached height of the subtree behind a child link, 0 for an absent child
pub fn height_of<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

///In-order walk collecting keys into a vector, used by both tree modes
pub(crate) fn collect_in_order<K: Clone>(subtree: &Link<K>, keys: &mut Vec<K>) {
    if let Some(node) = subtree {
        collect_in_order(&node.left, keys);
        keys.push(node.key.clone());
        collect_in_order(&node.right, keys);
    }
}

impl<K: Ord> TreeNode<K> {
    ///Creates a new leaf node
    pub fn new(key: K) -> TreeNode<K> {
        TreeNode {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }
    pub fn key(&self) -> &K {
        &self.key
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn left(&self) -> &Link<K> {
        &self.left
    }
    pub fn right(&self) -> &Link<K> {
        &self.right
    }
    ///Balance factor: left subtree height minus right subtree height
    pub fn balance(&self) -> i32 {
        height_of(&self.left) as i32 - height_of(&self.right) as i32
    }
    ///Readjusts the cached height of this node from the heights of its children
    pub(crate) fn recompute_height(&mut self) {
        self.height = 1 + std::cmp::max(height_of(&self.left), height_of(&self.right));
    }

    ///Rotates this subtree right, promoting the left child to subtree root
    pub(crate) fn rotate_right(&mut self) {
        let mut pivot = self
            .left
            .take()
            .unwrap_or_else(|| panic!("Nothing to rotate right on"));
        self.left = pivot.right.take();
        self.recompute_height();

        std::mem::swap(self, pivot.as_mut());

        //pivot now holds the demoted node; its height is already up to date
        self.right = Some(pivot);
        self.recompute_height();
    }
    ///Rotates this subtree left, promoting the right child to subtree root
    pub(crate) fn rotate_left(&mut self) {
        let mut pivot = self
            .right
            .take()
            .unwrap_or_else(|| panic!("Nothing to rotate left on"));
        self.right = pivot.left.take();
        self.recompute_height();

        std::mem::swap(self, pivot.as_mut());

        self.left = Some(pivot);
        self.recompute_height();
    }
    pub(crate) fn rotate_left_right(&mut self) {
        self.left
            .as_mut()
            .unwrap_or_else(|| panic!("Nothing to rotate left-right on"))
            .rotate_left();
        self.rotate_right();
    }
    pub(crate) fn rotate_right_left(&mut self) {
        self.right
            .as_mut()
            .unwrap_or_else(|| panic!("Nothing to rotate right-left on"))
            .rotate_right();
        self.rotate_left();
    }
}
