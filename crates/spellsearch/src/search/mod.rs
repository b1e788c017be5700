// Cost-bounded best-first suggestion search
//
// Explores states (input position, trie node, cost, output so far, compound
// segment count) cheapest first. Legal moves from a state:
//   - match the next input character (free) or substitute another edge
//   - insert an edge character without consuming input
//   - delete the next input character
//   - transpose the next two input characters
//   - restart at the root on a compound boundary (when compounding is on)
//
// A state with all input consumed on a word node becomes a suggestion.

mod engine;
mod frontier;

pub use engine::CompoundSuggestions;

use spellsearch_core::CompoundMethod;
use spellsearch_trie::TrieView;

use crate::ceiling::Ceiling;
use crate::cost::{OpCosts, change_limit_to_cost};

/// Default hard cap on the number of states expanded by one search.
pub const DEFAULT_MAX_EXPANSIONS: usize = 1_000_000;

/// Default change limit, in edits.
pub const DEFAULT_CHANGE_LIMIT: f64 = 5.0;

/// Parameters of one search.
///
/// Usually derived from a collector with
/// [`search_options_from_collector`](crate::search_options_from_collector),
/// which shares the collector's live ceiling with the search.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Whether and how suggestions may span several dictionary words.
    pub compound_method: CompoundMethod,
    /// Charge only [`OpCosts::case_change`] for case-only substitutions.
    pub ignore_case: bool,
    /// Change limit in edits, used to cap the ceiling by word length.
    pub change_limit: f64,
    /// Live upper bound on the cost of explored states.
    pub ceiling: Ceiling,
    /// Hard cap on expanded states; the search ends quietly when reached.
    pub max_expansions: usize,
    pub costs: OpCosts,
}

impl SearchOptions {
    /// Options with a private ceiling of `change_limit` edits.
    pub fn new(change_limit: f64) -> Self {
        Self {
            compound_method: CompoundMethod::None,
            ignore_case: true,
            change_limit,
            ceiling: Ceiling::new(change_limit_to_cost(change_limit)),
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            costs: OpCosts::default(),
        }
    }

    pub fn with_compound_method(mut self, method: CompoundMethod) -> Self {
        self.compound_method = method;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    pub fn with_costs(mut self, costs: OpCosts) -> Self {
        self.costs = costs;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CHANGE_LIMIT)
    }
}

/// Start a lazy suggestion search for `word` over `trie`.
///
/// The returned iterator yields suggestions in non-decreasing cost order and
/// ends on its own once nothing within the ceiling remains.
pub fn gen_compoundable_suggestions<'t, T: TrieView>(
    trie: &'t T,
    word: &str,
    options: SearchOptions,
) -> CompoundSuggestions<'t, T> {
    CompoundSuggestions::new(trie, word, options)
}
