//! Prefix tree storing corpus words with their frequencies.
//!
//! Nodes live in a single arena owned by [`TrieStore`] and refer to their
//! children by [`NodeId`]. Every node has exactly one parent, so the store is
//! a strict tree and traversal always runs root to leaf.

use ahash::AHashMap;

/// Handle to a node inside a [`TrieStore`].
///
/// Ids are only meaningful for the store that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, representing the empty prefix.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single prefix in the tree.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Characters from the root to this node.
    prefix: String,
    /// Number of times this exact prefix was inserted as a word.
    frequency: u32,
    children: AHashMap<char, NodeId>,
}

impl TrieNode {
    fn new(prefix: String) -> Self {
        TrieNode {
            prefix,
            frequency: 0,
            children: AHashMap::new(),
        }
    }

    /// The prefix spelled by the path from the root to this node.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// How many times this prefix was inserted as a complete word.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Whether this prefix is itself a corpus word.
    pub fn is_word(&self) -> bool {
        self.frequency > 0
    }

    /// Child edges of this node, in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&ch, &id)| (ch, id))
    }

    /// Number of distinct one-character extensions.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Arena-backed prefix tree holding the known words of a corpus.
///
/// The store is built once and then only read; there is no removal and
/// frequencies only grow.
#[derive(Debug, Clone)]
pub struct TrieStore {
    nodes: Vec<TrieNode>,
    word_count: usize,
    total_frequency: u64,
}

impl TrieStore {
    /// Create a store containing only the root node.
    pub fn new() -> Self {
        TrieStore {
            nodes: vec![TrieNode::new(String::new())],
            word_count: 0,
            total_frequency: 0,
        }
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Borrow a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this store.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Insert one occurrence of `word`, creating any missing nodes on its path.
    ///
    /// The empty string counts against the root.
    pub fn insert(&mut self, word: &str) {
        let mut current = NodeId::ROOT;

        for (offset, ch) in word.char_indices() {
            current = match self.advance(current, ch) {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    let prefix = word[..offset + ch.len_utf8()].to_string();
                    self.nodes.push(TrieNode::new(prefix));
                    self.nodes[current.0].children.insert(ch, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current.0];
        if node.frequency == 0 {
            self.word_count += 1;
        }
        node.frequency = node.frequency.saturating_add(1);
        self.total_frequency += 1;
    }

    /// Follow the path for `word` from the root.
    ///
    /// Returns the terminal node whether or not it is a word.
    pub fn lookup_exact(&self, word: &str) -> Option<NodeId> {
        self.descend(NodeId::ROOT, word.chars())
    }

    /// Follow a sequence of characters starting at `from`.
    pub fn descend<I>(&self, from: NodeId, chars: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = char>,
    {
        chars
            .into_iter()
            .try_fold(from, |node, ch| self.advance(node, ch))
    }

    /// Single-step child lookup.
    pub fn advance(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node.0].children.get(&ch).copied()
    }

    /// Whether the node terminates at least one inserted word.
    pub fn is_word(&self, node: NodeId) -> bool {
        self.nodes[node.0].is_word()
    }

    /// Frequency of `word`, or 0 when it was never inserted.
    pub fn frequency(&self, word: &str) -> u32 {
        self.lookup_exact(word)
            .map(|id| self.nodes[id.0].frequency)
            .unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Sum of all word frequencies.
    pub fn total_frequency(&self) -> u64 {
        self.total_frequency
    }

    /// All words with their frequencies, in lexical order.
    pub fn words(&self) -> Vec<(String, u32)> {
        let mut words: Vec<(String, u32)> = self
            .nodes
            .iter()
            .filter(|node| node.is_word())
            .map(|node| (node.prefix.clone(), node.frequency))
            .collect();
        words.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        words
    }

    /// Indented outline of the tree, children sorted by character.
    ///
    /// Word nodes carry their frequency in parentheses.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(NodeId::ROOT, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.0];
            let label = if id == NodeId::ROOT {
                "<root>"
            } else {
                node.prefix.as_str()
            };
            out.push_str(&"  ".repeat(depth));
            out.push_str(label);
            if node.is_word() {
                out.push_str(&format!(" ({})", node.frequency));
            }
            out.push('\n');

            let mut children: Vec<(char, NodeId)> = node.children().collect();
            // Reverse order so the smallest character is popped first.
            children.sort_unstable_by(|a, b| b.0.cmp(&a.0));
            stack.extend(children.into_iter().map(|(_, child)| (child, depth + 1)));
        }

        out
    }
}

impl Default for TrieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for TrieStore {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrieStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut store = TrieStore::new();
        store.extend(iter);
        store
    }
}
