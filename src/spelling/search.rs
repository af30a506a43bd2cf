//! Bounded edit-distance search over a [`TrieStore`].
//!
//! The search walks the remaining query and the trie together, spending one
//! unit of the edit budget per insertion, deletion, adjacent transposition or
//! substitution. Only children that exist in the store are ever visited, so
//! the fan-out at each step is bounded by the branching factor of the corpus
//! rather than by the alphabet. The work still grows quickly with the budget;
//! callers should keep `max_edits` small (2 or 3).

use ahash::AHashMap;
use log::{Level, log_enabled, trace};

use crate::spelling::trie::{NodeId, TrieStore};

/// Words reachable within the edit budget, keyed by word, valued by corpus
/// frequency.
pub type CandidateMap = AHashMap<String, u32>;

/// The step the search took to reach a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Entry into the search.
    Start,
    /// A trie character inserted into the query.
    Insertion,
    /// A query character dropped.
    Deletion,
    /// The next two query characters swapped.
    Transposition,
    /// A query character replaced by a trie character.
    Substitution,
    /// The query character matched the trie edge.
    Match,
    /// A word was recorded as a candidate.
    Found,
}

/// One state visited by the search, handed to a [`SearchTrace`].
#[derive(Debug, Clone, Copy)]
pub struct TraceStep<'a> {
    /// How the state was reached.
    pub kind: EditKind,
    /// Prefix of the trie node the search stands on.
    pub prefix: &'a str,
    /// Query characters still to be consumed.
    pub remaining: &'a [char],
    /// Edits still allowed.
    pub budget: usize,
    /// Edits already spent.
    pub depth: usize,
}

/// Observer for the individual steps of a search.
pub trait SearchTrace {
    /// Called once per visited state and once per recorded candidate.
    fn step(&mut self, step: &TraceStep<'_>);
}

/// Discards every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl SearchTrace for NoTrace {
    fn step(&mut self, _step: &TraceStep<'_>) {}
}

/// Emits every step through the `log` facade at trace level, indented by the
/// number of edits spent.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl SearchTrace for LogTrace {
    fn step(&mut self, step: &TraceStep<'_>) {
        if !log_enabled!(Level::Trace) {
            return;
        }
        let remaining: String = step.remaining.iter().collect();
        trace!(
            "{}{:?} node={:?} remaining={:?} budget={}",
            "\t".repeat(step.depth),
            step.kind,
            step.prefix,
            remaining,
            step.budget
        );
    }
}

impl<F> SearchTrace for F
where
    F: FnMut(&TraceStep<'_>),
{
    fn step(&mut self, step: &TraceStep<'_>) {
        self(step)
    }
}

/// Fuzzy matcher borrowing a read-only store.
#[derive(Debug, Clone, Copy)]
pub struct FuzzySearch<'a> {
    store: &'a TrieStore,
}

struct SearchState<'t> {
    max_edits: usize,
    trace: &'t mut dyn SearchTrace,
    candidates: CandidateMap,
}

impl<'a> FuzzySearch<'a> {
    /// Create a search over `store`.
    pub fn new(store: &'a TrieStore) -> Self {
        FuzzySearch { store }
    }

    /// Every stored word within `max_edits` edits of `query`, each exactly once.
    pub fn candidates(&self, query: &str, max_edits: usize) -> CandidateMap {
        self.candidates_traced(query, max_edits, &mut NoTrace)
    }

    /// Same as [`candidates`](Self::candidates), reporting each step to `trace`.
    pub fn candidates_traced(
        &self,
        query: &str,
        max_edits: usize,
        trace: &mut dyn SearchTrace,
    ) -> CandidateMap {
        let chars: Vec<char> = query.chars().collect();
        let mut state = SearchState {
            max_edits,
            trace,
            candidates: CandidateMap::new(),
        };

        self.visit(
            self.store.root(),
            &chars,
            max_edits,
            EditKind::Start,
            &mut state,
        );

        state.candidates
    }

    fn visit(
        &self,
        node: NodeId,
        remaining: &[char],
        budget: usize,
        kind: EditKind,
        state: &mut SearchState<'_>,
    ) {
        state.trace.step(&TraceStep {
            kind,
            prefix: self.store.node(node).prefix(),
            remaining,
            budget,
            depth: state.max_edits - budget,
        });

        if budget == 0 {
            if let Some(found) = self.store.descend(node, remaining.iter().copied()) {
                self.record(found, budget, state);
            }
            return;
        }

        let Some((&first, rest)) = remaining.split_first() else {
            self.record(node, budget, state);
            // Only appending characters is left.
            for (_, child) in self.store.node(node).children() {
                self.visit(child, remaining, budget - 1, EditKind::Insertion, state);
            }
            return;
        };

        for (_, child) in self.store.node(node).children() {
            self.visit(child, remaining, budget - 1, EditKind::Insertion, state);
        }

        self.visit(node, rest, budget - 1, EditKind::Deletion, state);

        if let Some((&second, tail)) = rest.split_first()
            && let Some(child) = self.store.advance(node, second)
        {
            let mut swapped = Vec::with_capacity(rest.len());
            swapped.push(first);
            swapped.extend_from_slice(tail);
            self.visit(child, &swapped, budget - 1, EditKind::Transposition, state);
        }

        for (_, child) in self.store.node(node).children() {
            self.visit(child, rest, budget - 1, EditKind::Substitution, state);
        }

        if let Some(child) = self.store.advance(node, first) {
            self.visit(child, rest, budget, EditKind::Match, state);
        }
    }

    fn record(&self, node: NodeId, budget: usize, state: &mut SearchState<'_>) {
        let node = self.store.node(node);
        if !node.is_word() {
            return;
        }

        state.trace.step(&TraceStep {
            kind: EditKind::Found,
            prefix: node.prefix(),
            remaining: &[],
            budget,
            depth: state.max_edits - budget,
        });

        // Frequency is a property of the word, not of the path that found it.
        state
            .candidates
            .entry(node.prefix().to_string())
            .or_insert(node.frequency());
    }
}
