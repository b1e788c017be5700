// Best-first suggestion search over a dictionary trie

use hashbrown::HashSet;
use spellsearch_core::{Cost, Suggestion};
use spellsearch_trie::TrieView;
use tracing::{debug, trace, warn};

use super::SearchOptions;
use super::frontier::{Frontier, SearchState};
use crate::cost::length_scaled_limit;

/// Lazily generated suggestions for one input word.
///
/// Each call to [`next`](Iterator::next) expands frontier states, cheapest
/// first, until a completed suggestion is reached. Suggestions therefore come
/// out in non-decreasing cost order and each word at most once.
///
/// The live [`Ceiling`](crate::Ceiling) in the options is re-read before
/// every expansion: once the cheapest pending state exceeds it, the search
/// ends. Dropping the iterator simply abandons the remaining work.
pub struct CompoundSuggestions<'t, T: TrieView> {
    trie: &'t T,
    input: Vec<char>,
    options: SearchOptions,
    /// Cap derived from the input length; the effective ceiling never
    /// exceeds it.
    length_limit: Cost,
    frontier: Frontier<T::Node>,
    emitted: HashSet<String>,
    expansions: usize,
    done: bool,
}

impl<'t, T: TrieView> CompoundSuggestions<'t, T> {
    pub(crate) fn new(trie: &'t T, word: &str, options: SearchOptions) -> Self {
        let input: Vec<char> = word.chars().collect();
        let length_limit = length_scaled_limit(input.len(), options.change_limit);
        let mut search = Self {
            trie,
            input,
            options,
            length_limit,
            frontier: Frontier::new(),
            emitted: HashSet::new(),
            expansions: 0,
            done: false,
        };
        let ceiling = search.ceiling();
        debug!(
            word,
            ceiling,
            method = ?search.options.compound_method,
            ignore_case = search.options.ignore_case,
            "starting suggestion search"
        );
        search
            .frontier
            .push(SearchState::start(trie.root()), ceiling);
        search
    }

    /// The bound currently applied to the search.
    pub fn ceiling(&self) -> Cost {
        self.options.ceiling.get().min(self.length_limit)
    }

    /// Number of states expanded so far.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    fn finish(&mut self, reason: &'static str) {
        debug!(
            expansions = self.expansions,
            emitted = self.emitted.len(),
            pending = self.frontier.len(),
            reason,
            "suggestion search finished"
        );
        self.frontier.clear();
        self.done = true;
    }

    /// Cost of closing the current compound segment: the single-letter
    /// penalty plus the word-break surcharge against the previous segment.
    fn segment_close_cost(&self, state: &SearchState<T::Node>) -> Cost {
        let costs = &self.options.costs;
        let mut cost = costs.segment_penalty(state.segment_len);
        if state.segments > 0 {
            cost += costs.word_break(
                self.options.compound_method,
                state.prev_segment_len,
                state.segment_len,
            );
        }
        cost
    }

    /// Queue every successor of `state` that stays within `ceiling`.
    fn expand(&mut self, state: SearchState<T::Node>, ceiling: Cost) {
        let trie = self.trie;
        let costs = self.options.costs;
        let ignore_case = self.options.ignore_case;
        let method = self.options.compound_method;
        let len = self.input.len();
        let pos = state.input_pos;
        let node = state.node;
        let previous = state.last_char();

        if pos == len && state.segment_len > 0 && trie.is_word(node) {
            let penalty = if state.segments > 0 {
                self.segment_close_cost(&state)
            } else {
                0
            };
            self.frontier.push(state.completed(penalty), ceiling);
        }

        if pos < len {
            let ch = self.input[pos];

            // Match or substitute.
            for (label, child) in trie.edges(node) {
                let cost = costs.substitution(ch, label, ignore_case);
                self.frontier
                    .push(state.step(child, &[label], pos + 1, cost), ceiling);
            }

            // Delete.
            self.frontier
                .push(state.skip(pos + 1, costs.deletion(ch, previous)), ceiling);

            // Transpose with the next character.
            if let Some(&next) = self.input.get(pos + 1) {
                if next != ch {
                    let swapped = trie.child(node, next).and_then(|a| trie.child(a, ch));
                    if let Some(target) = swapped {
                        self.frontier
                            .push(state.step(target, &[next, ch], pos + 2, costs.swap), ceiling);
                    }
                }
            }

            // Start a new compound segment.
            if state.segment_len > 0 && trie.is_compound_boundary(node) {
                if let (Some(separator), Some(joiner)) = (method.separator(), costs.joiner(method)) {
                    let cost = joiner + self.segment_close_cost(&state);
                    self.frontier
                        .push(state.restart(trie.root(), separator, cost), ceiling);
                }
            }
        }

        // Insert.
        for (label, child) in trie.edges(node) {
            let cost = costs.insertion(label, previous);
            self.frontier
                .push(state.step(child, &[label], pos, cost), ceiling);
        }
    }
}

impl<T: TrieView> Iterator for CompoundSuggestions<'_, T> {
    type Item = Suggestion;

    fn next(&mut self) -> Option<Suggestion> {
        if self.done {
            return None;
        }
        loop {
            let ceiling = self.ceiling();
            let Some(state) = self.frontier.pop() else {
                self.finish("frontier exhausted");
                return None;
            };
            if state.cost > ceiling {
                // Everything still queued is at least as expensive.
                self.finish("ceiling reached");
                return None;
            }
            if state.complete {
                let cost = state.cost;
                let word = state.into_word();
                if self.emitted.insert(word.clone()) {
                    trace!(word = %word, cost, "emit suggestion");
                    return Some(Suggestion::new(word, cost));
                }
                continue;
            }
            if self.expansions >= self.options.max_expansions {
                warn!(
                    max_expansions = self.options.max_expansions,
                    word = %self.input.iter().collect::<String>(),
                    "expansion limit reached, ending suggestion search early"
                );
                self.finish("expansion limit");
                return None;
            }
            self.expansions += 1;
            self.expand(state, ceiling);
        }
    }
}
