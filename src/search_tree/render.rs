use core::fmt::{self, Debug, Display, Formatter};
use alloc::{
    format,
    string::String,
    vec::Vec,
};
use crate::storage::{Arena, DefaultArena};
use super::{SearchTree, Node, NodeRef};

/// A rendering of a search tree as line-oriented ASCII connector art.
///
/// Created by [`SearchTree::render`]. The adapter borrows the tree and produces its depiction lazily — either as a vector of lines through [`lines`], or streamed through the `Display` implementation, which writes the same lines separated by newlines, with no trailing newline.
///
/// Each node is printed on its own line: first the indentation inherited from its ancestors, then a connector glyph — `└─` if the node is the last of its siblings, `├─` otherwise — and then the node's key. The root carries no connector and no indentation. Children are visited in a fixed order, left before right, and each level extends the inherited indentation by a fixed two-character token: two spaces below a last sibling, or a vertical bar and a space below one with a later sibling, so that descendants line up under the correct ancestor branch.
///
/// For a fixed tree, the output is byte-identical on every call.
///
/// # Example
/// ```rust
/// # use boxwood::SearchTree;
/// let tree = SearchTree::<_>::from_keys(vec![10, 5, 15, 7, 2, 9, 31]).unwrap();
/// assert_eq!(
///     tree.render().to_string(),
///     "\
/// 10
/// ├─5
/// | ├─2
/// | └─7
/// |   └─9
/// └─15
///   └─31",
/// );
/// ```
///
/// [`SearchTree::render`]: struct.SearchTree.html#method.render " "
/// [`lines`]: #method.lines " "
#[derive(Debug)]
pub struct Render<'a, K, I, S = DefaultArena<Node<K, I>>>
where
    S: Arena<Element = Node<K, I>, Index = I>,
    I: Clone + Debug + Eq,
{
    tree: &'a SearchTree<K, I, S>,
}
impl<'a, K, I, S> Render<'a, K, I, S>
where
    S: Arena<Element = Node<K, I>, Index = I>,
    I: Clone + Debug + Eq,
{
    /// Creates a rendering of the specified tree.
    #[inline(always)]
    pub fn new(tree: &'a SearchTree<K, I, S>) -> Self {
        Self { tree }
    }
}
impl<'a, K, I, S> Render<'a, K, I, S>
where
    K: Display,
    S: Arena<Element = Node<K, I>, Index = I>,
    I: Clone + Debug + Eq,
{
    /// Renders the tree into a vector with one string per node, in the order the lines are meant to be read in.
    ///
    /// # Example
    /// ```rust
    /// # use boxwood::SearchTree;
    /// let tree = SearchTree::<_>::from_keys(vec![2, 1, 3]).unwrap();
    /// assert_eq!(tree.render().lines(), ["2", "├─1", "└─3"]);
    /// ```
    pub fn lines(&self) -> Vec<String> {
        let root = self.tree.root();
        let mut lines = Vec::with_capacity(self.tree.len());
        lines.push(format!("{}", root.key()));
        push_children(&root, "", &mut lines);
        lines
    }
}
impl<'a, K, I, S> Display for Render<'a, K, I, S>
where
    K: Display,
    S: Arena<Element = Node<K, I>, Index = I>,
    I: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

fn push_node<K, I, S>(node: &NodeRef<'_, K, I, S>, prefix: &str, last: bool, lines: &mut Vec<String>)
where
    K: Display,
    S: Arena<Element = Node<K, I>, Index = I>,
    I: Clone + Debug + Eq,
{
    let connector = if last { "└─" } else { "├─" };
    lines.push(format!("{}{}{}", prefix, connector, node.key()));
    // The extended prefix is a fresh copy for each level, never a shared buffer
    let prefix = format!("{}{}", prefix, if last { "  " } else { "| " });
    push_children(node, &prefix, lines);
}

fn push_children<K, I, S>(node: &NodeRef<'_, K, I, S>, prefix: &str, lines: &mut Vec<String>)
where
    K: Display,
    S: Arena<Element = Node<K, I>, Index = I>,
    I: Clone + Debug + Eq,
{
    match (node.left_child(), node.right_child()) {
        (Some(left), Some(right)) => {
            push_node(&left, prefix, false, lines);
            push_node(&right, prefix, true, lines);
        }
        (Some(only), None) | (None, Some(only)) => push_node(&only, prefix, true, lines),
        (None, None) => {}
    }
}
