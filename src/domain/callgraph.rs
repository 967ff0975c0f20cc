// Call tree structures for the function_graph viewer.
// A trace reconstructs into an ordered forest; each call owns the calls it made.

/// One traced function invocation.
///
/// `children` are the calls made from inside this one, in call order. A node
/// without children is a leaf call (`name();` in the dense grammar).
#[derive(Debug, Default)]
pub struct CallNode {
    pub name: String,
    pub children: Vec<CallNode>,
}

impl CallNode {
    pub fn new(name: impl Into<String>, children: Vec<CallNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// Traces of deeply recursive programs nest thousands of levels; both equality
// and drop walk the tree with a heap stack instead of native recursion.
impl PartialEq for CallNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if a.name != b.name || a.children.len() != b.children.len() {
                return false;
            }
            pairs.extend(a.children.iter().zip(b.children.iter()));
        }
        true
    }
}

impl Eq for CallNode {}

impl Drop for CallNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Sibling calls at the top level of a trace.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Forest {
    pub roots: Vec<CallNode>,
}

/// Summary numbers for a parsed forest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForestStats {
    pub nodes: usize,
    pub leaves: usize,
    /// Deepest nesting level; top-level calls are depth 0.
    pub max_depth: usize,
}

/// A step of a depth-first traversal.
#[derive(Debug, Clone, Copy)]
pub enum Visit<'a> {
    Enter { depth: usize, node: &'a CallNode },
    Leave { depth: usize, node: &'a CallNode },
}

impl Forest {
    pub fn new(roots: Vec<CallNode>) -> Self {
        Self { roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CallNode> {
        self.roots.iter()
    }

    /// Pre-order traversal yielding each node with its nesting depth.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.roots.iter().rev().map(|n| (0, n)).collect(),
        }
    }

    /// Pre-order traversal that also reports when a node's subtree is done.
    pub fn events(&self) -> Events<'_> {
        Events {
            stack: self.roots.iter().rev().map(|n| (0, n, false)).collect(),
        }
    }

    pub fn stats(&self) -> ForestStats {
        self.walk().fold(ForestStats::default(), |mut acc, (depth, node)| {
            acc.nodes += 1;
            if node.is_leaf() {
                acc.leaves += 1;
            }
            acc.max_depth = acc.max_depth.max(depth);
            acc
        })
    }

    /// Writes the forest back into the dense grammar.
    ///
    /// Leaves become `name();`, inner nodes `name(){...}`, siblings are
    /// concatenated.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for visit in self.events() {
            match visit {
                Visit::Enter { node, .. } => {
                    out.push_str(&node.name);
                    out.push_str(if node.is_leaf() { "();" } else { "(){" });
                }
                Visit::Leave { node, .. } if !node.is_leaf() => out.push('}'),
                Visit::Leave { .. } => {}
            }
        }
        out
    }
}

impl From<Vec<CallNode>> for Forest {
    fn from(roots: Vec<CallNode>) -> Self {
        Self { roots }
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a CallNode;
    type IntoIter = std::slice::Iter<'a, CallNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

pub struct Walk<'a> {
    stack: Vec<(usize, &'a CallNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a CallNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}

pub struct Events<'a> {
    // (depth, node, children already scheduled)
    stack: Vec<(usize, &'a CallNode, bool)>,
}

impl<'a> Iterator for Events<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node, expanded) = self.stack.pop()?;
        if expanded {
            return Some(Visit::Leave { depth, node });
        }
        self.stack.push((depth, node, true));
        self.stack
            .extend(node.children.iter().rev().map(|c| (depth + 1, c, false)));
        Some(Visit::Enter { depth, node })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Forest {
        Forest::new(vec![
            CallNode::leaf("a"),
            CallNode::new("b", vec![CallNode::leaf("c"), CallNode::leaf("d")]),
        ])
    }

    #[test]
    fn test_walk_is_preorder_with_depth() {
        let forest = sample();
        let seen: Vec<(usize, &str)> = forest
            .walk()
            .map(|(d, n)| (d, n.name.as_str()))
            .collect();
        assert_eq!(seen, vec![(0, "a"), (0, "b"), (1, "c"), (1, "d")]);
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(
            stats,
            ForestStats {
                nodes: 4,
                leaves: 3,
                max_depth: 1
            }
        );
        assert_eq!(Forest::default().stats(), ForestStats::default());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(sample().serialize(), "a();b(){c();d();}");
        assert_eq!(Forest::default().serialize(), "");
    }

    #[test]
    fn test_top_level_iteration() {
        let forest = sample();
        assert_eq!(forest.len(), 2);

        let mut names = Vec::new();
        for node in &forest {
            names.push(node.name.as_str());
        }
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(forest.iter().filter(|n| n.is_leaf()).count(), 1);

        let converted = Forest::from(vec![CallNode::leaf("a")]);
        assert_eq!(converted, Forest::new(vec![CallNode::leaf("a")]));
    }

    #[test]
    fn test_equality_compares_names_and_order() {
        let swapped = Forest::new(vec![
            CallNode::leaf("a"),
            CallNode::new("b", vec![CallNode::leaf("d"), CallNode::leaf("c")]),
        ]);
        assert_eq!(sample(), sample());
        assert_ne!(sample(), swapped);
    }

    #[test]
    fn test_deep_chain_drops_without_overflow() {
        let mut node = CallNode::leaf("bottom");
        for i in 0..200_000 {
            node = CallNode::new(format!("f{}", i), vec![node]);
        }
        let forest = Forest::new(vec![node]);
        assert_eq!(forest.stats().max_depth, 200_000);
        drop(forest);
    }
}
