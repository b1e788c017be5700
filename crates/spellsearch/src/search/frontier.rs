// Search states and the lowest-cost-first frontier

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use std::rc::Rc;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use spellsearch_core::Cost;

/// One partial (or completed) correction being explored.
///
/// The output is split into the finished compound segments, shared between
/// states, and the segment under construction. The trie node spells the
/// current segment, so `(input_pos, node, complete, prefix)` identifies the
/// whole output.
#[derive(Debug, Clone)]
pub(crate) struct SearchState<N> {
    /// Number of input characters consumed.
    pub input_pos: usize,
    /// Current trie node.
    pub node: N,
    /// Accumulated cost.
    pub cost: Cost,
    /// Number of non-matching operations applied.
    pub edits: u32,
    /// Finished segments, each followed by its separator.
    pub prefix: Rc<str>,
    /// Number of compound boundaries crossed.
    pub segments: u32,
    /// Characters in the segment before the last boundary.
    pub prev_segment_len: usize,
    /// Current compound segment.
    pub segment: String,
    pub segment_len: usize,
    /// Set once the state is a finished suggestion waiting to be emitted.
    pub complete: bool,
}

impl<N: Copy> SearchState<N> {
    pub fn start(root: N) -> Self {
        Self {
            input_pos: 0,
            node: root,
            cost: 0,
            edits: 0,
            prefix: Rc::from(""),
            segments: 0,
            prev_segment_len: 0,
            segment: String::new(),
            segment_len: 0,
            complete: false,
        }
    }

    /// Last character written to the current segment.
    pub fn last_char(&self) -> Option<char> {
        self.segment.chars().next_back()
    }

    /// Follow edges spelling `chars`, ending at `node` and `input_pos`.
    pub fn step(&self, node: N, chars: &[char], input_pos: usize, cost: Cost) -> Self {
        let mut segment = String::with_capacity(self.segment.len() + 4 * chars.len());
        segment.push_str(&self.segment);
        segment.extend(chars);
        Self {
            input_pos,
            node,
            cost: self.cost + cost,
            edits: self.edits + u32::from(cost > 0),
            prefix: Rc::clone(&self.prefix),
            segment,
            segment_len: self.segment_len + chars.len(),
            complete: false,
            ..*self
        }
    }

    /// Skip input characters without moving in the trie.
    pub fn skip(&self, input_pos: usize, cost: Cost) -> Self {
        Self {
            input_pos,
            cost: self.cost + cost,
            edits: self.edits + 1,
            prefix: Rc::clone(&self.prefix),
            segment: self.segment.clone(),
            ..*self
        }
    }

    /// Close the current segment with `separator` and restart at `root`.
    pub fn restart(&self, root: N, separator: char, cost: Cost) -> Self {
        let mut prefix = String::with_capacity(self.prefix.len() + self.segment.len() + 1);
        prefix.push_str(&self.prefix);
        prefix.push_str(&self.segment);
        prefix.push(separator);
        Self {
            node: root,
            cost: self.cost + cost,
            edits: self.edits + 1,
            prefix: Rc::from(prefix),
            segments: self.segments + 1,
            prev_segment_len: self.segment_len,
            segment: String::new(),
            segment_len: 0,
            ..*self
        }
    }

    /// The finished suggestion for this state, charged `penalty`.
    pub fn completed(&self, penalty: Cost) -> Self {
        Self {
            cost: self.cost + penalty,
            prefix: Rc::clone(&self.prefix),
            segment: self.segment.clone(),
            complete: true,
            ..*self
        }
    }

    /// The full output word.
    pub fn into_word(self) -> String {
        let mut word = String::with_capacity(self.prefix.len() + self.segment.len());
        word.push_str(&self.prefix);
        word.push_str(&self.segment);
        word
    }

    fn key(&self) -> StateKey<N> {
        (
            self.input_pos,
            self.node,
            self.complete,
            Rc::clone(&self.prefix),
        )
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the cheapest state first,
/// then the one with most input consumed, then fewest edits, then oldest.
struct Pending<N> {
    state: SearchState<N>,
    seq: u64,
}

impl<N> Pending<N> {
    fn rank(&self) -> (Cost, std::cmp::Reverse<usize>, u32, u64) {
        (
            self.state.cost,
            std::cmp::Reverse(self.state.input_pos),
            self.state.edits,
            self.seq,
        )
    }
}

impl<N> PartialEq for Pending<N> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<N> Eq for Pending<N> {}

impl<N> PartialOrd for Pending<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Pending<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: the smallest rank is the heap maximum
        other.rank().cmp(&self.rank())
    }
}

type StateKey<N> = (usize, N, bool, Rc<str>);

/// Priority queue of unexpanded states.
///
/// Keeps the cheapest known cost per state identity so that a state reached
/// again at an equal or higher cost is not queued twice.
pub(crate) struct Frontier<N> {
    heap: BinaryHeap<Pending<N>>,
    best: HashMap<StateKey<N>, Cost>,
    seq: u64,
}

impl<N: Copy + Eq + Hash> Frontier<N> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            best: HashMap::new(),
            seq: 0,
        }
    }

    /// Queue `state` unless it exceeds `ceiling` or is already queued at a
    /// cost no higher than its own. Returns `true` if it was queued.
    pub fn push(&mut self, state: SearchState<N>, ceiling: Cost) -> bool {
        if state.cost > ceiling {
            return false;
        }
        match self.best.entry(state.key()) {
            Entry::Occupied(mut e) => {
                if *e.get() <= state.cost {
                    return false;
                }
                e.insert(state.cost);
            }
            Entry::Vacant(e) => {
                e.insert(state.cost);
            }
        }
        self.seq += 1;
        self.heap.push(Pending {
            state,
            seq: self.seq,
        });
        true
    }

    /// Pop the cheapest state, skipping entries superseded by a cheaper push.
    pub fn pop(&mut self) -> Option<SearchState<N>> {
        while let Some(Pending { state, .. }) = self.heap.pop() {
            if self
                .best
                .get(&state.key())
                .is_some_and(|&best| best < state.cost)
            {
                continue;
            }
            return Some(state);
        }
        None
    }

    /// Drop all pending states.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.best.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
