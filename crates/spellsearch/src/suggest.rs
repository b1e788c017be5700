// One-call suggestion entry points

use spellsearch_core::{CompoundMethod, SuggestError, Suggestion};
use spellsearch_trie::TrieView;

use crate::collector::{CollectorOptions, SuggestionCollector, search_options_from_collector};
use crate::search::gen_compoundable_suggestions;

/// Suggest corrections for `word` without compounding.
///
/// Uses [`CollectorOptions::default`] when `options` is `None`. An empty
/// result means nothing was found within the change limit.
pub fn suggest<T: TrieView>(
    trie: &T,
    word: &str,
    options: Option<CollectorOptions>,
) -> Result<Vec<Suggestion>, SuggestError> {
    suggest_with(trie, word, options.unwrap_or_default(), CompoundMethod::None)
}

/// Suggest corrections for `word`, letting suggestions span several
/// dictionary words as `compound_method` allows.
pub fn suggest_with<T: TrieView>(
    trie: &T,
    word: &str,
    options: CollectorOptions,
    compound_method: CompoundMethod,
) -> Result<Vec<Suggestion>, SuggestError> {
    let mut collector = SuggestionCollector::new(word, options)?;
    let search = gen_compoundable_suggestions(
        trie,
        word,
        search_options_from_collector(&collector, compound_method),
    );
    collector.collect(search)?;
    Ok(collector.into_suggestions())
}
