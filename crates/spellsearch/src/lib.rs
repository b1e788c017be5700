//! Cost-bounded spelling suggestions over a dictionary trie.
//!
//! A best-first search explores edit operations (substitution, insertion,
//! deletion, transposition, case change) and optionally compound word
//! boundaries, yielding suggestions cheapest first. A bounded
//! [`SuggestionCollector`] pulls from it, keeps the best candidates and
//! lowers a shared [`Ceiling`] so the search stops as soon as nothing better
//! can be found.
//!
//! ```
//! use spellsearch::{CompoundMethod, CollectorOptions, Suggestion, suggest_with};
//! use spellsearch_trie::Trie;
//!
//! let trie = Trie::from_words(["joy", "full", "joyful"]);
//! let options = CollectorOptions::default().with_change_limit(2.0);
//! let out = suggest_with(&trie, "joyfull", options, CompoundMethod::SeparateWords).unwrap();
//! assert_eq!(out[0], Suggestion::new("joyful", 25));
//! ```

pub mod ceiling;
pub mod collector;
pub mod cost;
pub mod search;
mod suggest;

pub use ceiling::Ceiling;
pub use collector::{
    CollectorOptions, SuggestionCollector, SuggestionFilter, search_options_from_collector,
    suggestion_collector,
};
pub use cost::OpCosts;
pub use search::{CompoundSuggestions, SearchOptions, gen_compoundable_suggestions};
pub use spellsearch_core::{BASE_COST, CompoundMethod, Cost, SuggestError, Suggestion};
pub use suggest::{suggest, suggest_with};
