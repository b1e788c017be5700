// Bounded suggestion collector: deduplication, tie policy, live ceiling

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use spellsearch_core::{BoxError, CompoundMethod, Cost, SuggestError, Suggestion};
use tracing::{debug, trace};

use crate::ceiling::Ceiling;
use crate::cost::{OpCosts, change_limit_to_cost};
use crate::search::{DEFAULT_CHANGE_LIMIT, DEFAULT_MAX_EXPANSIONS, SearchOptions};

/// Caller predicate deciding whether a candidate may be accepted.
///
/// `Ok(false)` rejects the candidate; an `Err` aborts collection and is
/// returned to the caller as [`SuggestError::Filter`].
pub type SuggestionFilter = Arc<dyn Fn(&Suggestion) -> Result<bool, BoxError> + Send + Sync>;

/// Per-request collector configuration.
#[derive(Clone)]
pub struct CollectorOptions {
    /// Maximum number of suggestions returned (ties aside). Must be at least 1.
    pub num_suggestions: usize,
    /// Maximum total cost, in edits. Fractional values are allowed.
    pub change_limit: f64,
    /// Keep every candidate tied with the last accepted one, even past
    /// `num_suggestions`.
    pub include_ties: bool,
    /// Charge only the case-change cost for case-only substitutions.
    pub ignore_case: bool,
    pub filter: Option<SuggestionFilter>,
}

impl Default for CollectorOptions {
    fn default() -> Self {
        Self {
            num_suggestions: 10,
            change_limit: DEFAULT_CHANGE_LIMIT,
            include_ties: true,
            ignore_case: true,
            filter: None,
        }
    }
}

impl fmt::Debug for CollectorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectorOptions")
            .field("num_suggestions", &self.num_suggestions)
            .field("change_limit", &self.change_limit)
            .field("include_ties", &self.include_ties)
            .field("ignore_case", &self.ignore_case)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl CollectorOptions {
    pub fn with_num_suggestions(mut self, num_suggestions: usize) -> Self {
        self.num_suggestions = num_suggestions;
        self
    }

    pub fn with_change_limit(mut self, change_limit: f64) -> Self {
        self.change_limit = change_limit;
        self
    }

    pub fn with_include_ties(mut self, include_ties: bool) -> Self {
        self.include_ties = include_ties;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Accept only candidates for which `keep` returns `true`.
    pub fn with_filter<F>(self, keep: F) -> Self
    where
        F: Fn(&Suggestion) -> bool + Send + Sync + 'static,
    {
        self.with_fallible_filter(move |s| Ok(keep(s)))
    }

    /// Like [`with_filter`](Self::with_filter), for predicates that can fail.
    pub fn with_fallible_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Suggestion) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Check the options, returning the first configuration error found.
    pub fn validate(&self) -> Result<(), SuggestError> {
        if self.num_suggestions < 1 {
            return Err(SuggestError::InvalidSuggestionCount(self.num_suggestions));
        }
        if !self.change_limit.is_finite() || self.change_limit < 0.0 {
            return Err(SuggestError::InvalidChangeLimit(self.change_limit));
        }
        Ok(())
    }
}

/// Accumulates the best suggestions for one word.
///
/// Accepted suggestions are kept sorted by cost (arrival order among equal
/// costs) with at most one entry per word. Once the collector is
/// full its [`Ceiling`] drops to the worst accepted cost, which the search
/// sharing it uses to prune.
pub struct SuggestionCollector {
    word: String,
    options: CollectorOptions,
    limit: Cost,
    accepted: Vec<Suggestion>,
    /// Word -> accepted cost.
    seen: HashMap<String, Cost>,
    ceiling: Ceiling,
}

impl SuggestionCollector {
    /// Create a collector for `word`, failing on invalid options.
    pub fn new(word: impl Into<String>, options: CollectorOptions) -> Result<Self, SuggestError> {
        options.validate()?;
        let limit = change_limit_to_cost(options.change_limit);
        Ok(Self {
            word: word.into(),
            accepted: Vec::with_capacity(options.num_suggestions),
            options,
            limit,
            seen: HashMap::new(),
            ceiling: Ceiling::new(limit),
        })
    }

    /// Drain `stream`, offering every candidate to [`add`](Self::add).
    ///
    /// Stops at the first filter error and returns it.
    pub fn collect<I>(&mut self, stream: I) -> Result<(), SuggestError>
    where
        I: IntoIterator<Item = Suggestion>,
    {
        let mut offered = 0usize;
        for suggestion in stream {
            offered += 1;
            self.add(suggestion)?;
        }
        debug!(
            word = %self.word,
            offered,
            accepted = self.accepted.len(),
            ceiling = self.ceiling.get(),
            "collection finished"
        );
        Ok(())
    }

    /// Offer one candidate. Returns whether it was accepted.
    pub fn add(&mut self, suggestion: Suggestion) -> Result<bool, SuggestError> {
        if let Some(filter) = &self.options.filter {
            if !filter(&suggestion).map_err(SuggestError::Filter)? {
                return Ok(false);
            }
        }
        if suggestion.cost > self.ceiling.get() {
            return Ok(false);
        }
        let n = self.options.num_suggestions;
        // A full collector without ties gains nothing from an equal cost.
        if !self.options.include_ties && self.is_full() && suggestion.cost >= self.worst_cost() {
            return Ok(false);
        }

        // Case variants are distinct words; only exact repeats collapse.
        match self.seen.entry(suggestion.word.clone()) {
            Entry::Occupied(mut e) => {
                if *e.get() <= suggestion.cost {
                    return Ok(false);
                }
                e.insert(suggestion.cost);
                self.accepted.retain(|s| s.word != suggestion.word);
            }
            Entry::Vacant(e) => {
                e.insert(suggestion.cost);
            }
        }

        trace!(word = %suggestion.word, cost = suggestion.cost, "accept suggestion");
        let at = self.accepted.partition_point(|s| s.cost <= suggestion.cost);
        self.accepted.insert(at, suggestion);

        if self.accepted.len() > n {
            let keep = if self.options.include_ties {
                let boundary = self.accepted[n - 1].cost;
                n + self.accepted[n..]
                    .iter()
                    .take_while(|s| s.cost == boundary)
                    .count()
            } else {
                n
            };
            for dropped in self.accepted.drain(keep..) {
                self.seen.remove(&dropped.word);
            }
        }

        self.ceiling.set(if self.is_full() {
            self.worst_cost()
        } else {
            self.limit
        });
        Ok(true)
    }

    /// Accepted suggestions, cheapest first.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.accepted
    }

    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.accepted
    }

    /// The word suggestions are collected for.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The live ceiling shared with searches derived from this collector.
    pub fn ceiling(&self) -> &Ceiling {
        &self.ceiling
    }

    pub fn options(&self) -> &CollectorOptions {
        &self.options
    }

    /// Whether `num_suggestions` entries have been accepted.
    pub fn is_full(&self) -> bool {
        self.accepted.len() >= self.options.num_suggestions
    }

    fn worst_cost(&self) -> Cost {
        self.accepted.last().map_or(self.limit, |s| s.cost)
    }
}

impl fmt::Debug for SuggestionCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionCollector")
            .field("word", &self.word)
            .field("options", &self.options)
            .field("accepted", &self.accepted)
            .field("ceiling", &self.ceiling.get())
            .finish()
    }
}

/// Create a collector for `word`; see [`SuggestionCollector::new`].
pub fn suggestion_collector(
    word: impl Into<String>,
    options: CollectorOptions,
) -> Result<SuggestionCollector, SuggestError> {
    SuggestionCollector::new(word, options)
}

/// Search options bound to `collector`'s live ceiling.
pub fn search_options_from_collector(
    collector: &SuggestionCollector,
    compound_method: CompoundMethod,
) -> SearchOptions {
    SearchOptions {
        compound_method,
        ignore_case: collector.options.ignore_case,
        change_limit: collector.options.change_limit,
        ceiling: collector.ceiling.clone(),
        max_expansions: DEFAULT_MAX_EXPANSIONS,
        costs: OpCosts::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collector(options: CollectorOptions) -> SuggestionCollector {
        SuggestionCollector::new("word", options).unwrap()
    }

    fn words(c: &SuggestionCollector) -> Vec<(&str, Cost)> {
        c.suggestions()
            .iter()
            .map(|s| (s.word.as_str(), s.cost))
            .collect()
    }

    fn offer(c: &mut SuggestionCollector, items: &[(&str, Cost)]) {
        c.collect(items.iter().map(|&(w, cost)| Suggestion::new(w, cost)))
            .unwrap();
    }

    #[test]
    fn defaults() {
        let o = CollectorOptions::default();
        assert_eq!(o.num_suggestions, 10);
        assert_eq!(o.change_limit, 5.0);
        assert!(o.include_ties);
        assert!(o.ignore_case);
        assert!(o.filter.is_none());
    }

    #[test]
    fn invalid_options_fail_at_construction() {
        let err = SuggestionCollector::new("w", CollectorOptions::default().with_num_suggestions(0))
            .unwrap_err();
        assert!(matches!(err, SuggestError::InvalidSuggestionCount(0)));
        for limit in [-1.0, f64::NAN, f64::INFINITY] {
            let err =
                SuggestionCollector::new("w", CollectorOptions::default().with_change_limit(limit))
                    .unwrap_err();
            assert!(err.is_config_error());
        }
        assert!(CollectorOptions::default().with_change_limit(0.0).validate().is_ok());
    }

    #[test]
    fn keeps_sorted_and_stable() {
        let mut c = collector(CollectorOptions::default());
        offer(&mut c, &[("b", 100), ("a", 25), ("c", 100), ("d", 0)]);
        assert_eq!(words(&c), vec![("d", 0), ("a", 25), ("b", 100), ("c", 100)]);
    }

    #[test]
    fn dedup_keeps_cheapest() {
        let mut c = collector(CollectorOptions::default());
        offer(&mut c, &[("cat", 100), ("cat", 200), ("bat", 150), ("cat", 50)]);
        assert_eq!(words(&c), vec![("cat", 50), ("bat", 150)]);
    }

    #[test]
    fn case_variants_are_distinct_words() {
        for ignore_case in [true, false] {
            let mut c = collector(CollectorOptions::default().with_ignore_case(ignore_case));
            offer(&mut c, &[("joyful l", 154), ("joyful L", 155), ("joyful l", 160)]);
            assert_eq!(words(&c), vec![("joyful l", 154), ("joyful L", 155)]);
        }
    }

    #[test]
    fn trims_to_num_suggestions_without_ties() {
        let options = CollectorOptions::default()
            .with_num_suggestions(2)
            .with_include_ties(false);
        let mut c = collector(options);
        offer(&mut c, &[("a", 10), ("b", 20), ("c", 20), ("d", 5)]);
        assert_eq!(words(&c), vec![("d", 5), ("a", 10)]);
        assert_eq!(c.ceiling().get(), 10);
    }

    #[test]
    fn ties_extend_past_num_suggestions() {
        let mut c = collector(CollectorOptions::default().with_num_suggestions(2));
        offer(&mut c, &[("a", 10), ("b", 20), ("c", 20), ("d", 20)]);
        assert_eq!(words(&c), vec![("a", 10), ("b", 20), ("c", 20), ("d", 20)]);
        // a cheaper arrival pushes the tied group out
        offer(&mut c, &[("e", 15)]);
        assert_eq!(words(&c), vec![("a", 10), ("e", 15)]);
        assert_eq!(c.ceiling().get(), 15);
    }

    #[test]
    fn ceiling_tracks_fill_state() {
        let mut c = collector(CollectorOptions::default().with_num_suggestions(2).with_change_limit(2.0));
        assert_eq!(c.ceiling().get(), 200);
        offer(&mut c, &[("a", 50)]);
        assert_eq!(c.ceiling().get(), 200);
        offer(&mut c, &[("b", 150)]);
        assert_eq!(c.ceiling().get(), 150);
        // over the ceiling
        offer(&mut c, &[("c", 151)]);
        assert_eq!(words(&c), vec![("a", 50), ("b", 150)]);
    }

    #[test]
    fn over_limit_candidates_are_rejected() {
        let mut c = collector(CollectorOptions::default().with_change_limit(1.0));
        assert!(!c.add(Suggestion::new("far", 101)).unwrap());
        assert!(c.add(Suggestion::new("near", 100)).unwrap());
    }

    #[test]
    fn filter_rejection_leaves_state_untouched() {
        let options = CollectorOptions::default()
            .with_num_suggestions(1)
            .with_filter(|s| !s.word.contains(' '));
        let mut c = collector(options);
        assert!(!c.add(Suggestion::new("joy full", 109)).unwrap());
        assert!(c.suggestions().is_empty());
        assert_eq!(c.ceiling().get(), 500);
        assert!(c.add(Suggestion::new("joyful", 25)).unwrap());
    }

    #[test]
    fn filter_error_stops_collection() {
        #[derive(Debug, thiserror::Error)]
        #[error("lookup failed")]
        struct LookupFailed;

        let options = CollectorOptions::default().with_fallible_filter(|s| {
            if s.word == "bad" {
                Err(LookupFailed.into())
            } else {
                Ok(true)
            }
        });
        let mut c = collector(options);
        let stream = [("ok", 1), ("bad", 2), ("later", 3)]
            .into_iter()
            .map(|(w, cost)| Suggestion::new(w, cost));
        let err = c.collect(stream).unwrap_err();
        assert!(matches!(err, SuggestError::Filter(_)));
        assert_eq!(words(&c), vec![("ok", 1)]);
    }

    #[test]
    fn search_options_share_the_ceiling() {
        let c = collector(CollectorOptions::default().with_ignore_case(false));
        let options = search_options_from_collector(&c, CompoundMethod::JoinWords);
        assert_eq!(options.compound_method, CompoundMethod::JoinWords);
        assert!(!options.ignore_case);
        assert_eq!(options.max_expansions, DEFAULT_MAX_EXPANSIONS);
        c.ceiling().set(42);
        assert_eq!(options.ceiling.get(), 42);
    }

    #[test]
    fn accessors() {
        let c = SuggestionCollector::new("joyfull", CollectorOptions::default()).unwrap();
        assert_eq!(c.word(), "joyfull");
        assert_eq!(c.options().num_suggestions, 10);
        assert!(!c.is_full());
        assert!(c.into_suggestions().is_empty());
    }
}
