// Edit cost model for the suggestion search
//
// All costs are in hundredths of an edit (see `BASE_COST`). Every operation
// has a non-negative cost, so a lowest-cost-first traversal completes
// suggestions in non-decreasing cost order.

use spellsearch_core::case::differs_only_by_case;
use spellsearch_core::{BASE_COST, CompoundMethod, Cost};

/// Scale applied to the word length when capping the change limit: a word
/// of `n` characters never allows more than `n * 1.03 / 2` edits.
const MAX_COST_SCALE: f64 = 1.03 / 2.0;

/// Cost table for the primitive edit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpCosts {
    /// Substitution, insertion and deletion of an arbitrary character.
    pub base: Cost,
    /// Swapping two adjacent characters ("teh" -> "the").
    pub swap: Cost,
    /// Inserting or deleting a letter next to a copy of itself ("ll" -> "l").
    pub duplicate_letter: Cost,
    /// Substituting a character that differs only by letter case.
    pub case_change: Cost,
    /// Crossing a compound boundary, in either compounding mode.
    pub join: Cost,
    /// Extra cost of a space between two words
    /// ([`CompoundMethod::SeparateWords`]), per character the shorter of
    /// the two falls below `short_word_len`.
    pub word_break_step: Cost,
    pub short_word_len: usize,
    /// Extra cost for a compound segment made of a single letter.
    pub single_letter_segment: Cost,
}

impl Default for OpCosts {
    fn default() -> Self {
        Self {
            base: BASE_COST,
            swap: 75,
            duplicate_letter: 25,
            case_change: 1,
            join: 99,
            word_break_step: 5,
            short_word_len: 5,
            single_letter_segment: 35,
        }
    }
}

impl OpCosts {
    /// Cost of writing `found` where the input has `expected`.
    pub fn substitution(&self, expected: char, found: char, ignore_case: bool) -> Cost {
        if expected == found {
            0
        } else if ignore_case && differs_only_by_case(expected, found) {
            self.case_change
        } else {
            self.base
        }
    }

    /// Cost of inserting `ch` after the output character `previous`.
    pub fn insertion(&self, ch: char, previous: Option<char>) -> Cost {
        self.duplicate_or_base(ch, previous)
    }

    /// Cost of dropping the input character `ch` when the output so far
    /// ends with `previous`.
    ///
    /// Cheap only when the output already ends with a copy of `ch`.
    pub fn deletion(&self, ch: char, previous: Option<char>) -> Cost {
        self.duplicate_or_base(ch, previous)
    }

    /// Cost of crossing a compound boundary, or `None` if the method
    /// forbids compounds.
    pub fn joiner(&self, method: CompoundMethod) -> Option<Cost> {
        match method {
            CompoundMethod::None => None,
            CompoundMethod::JoinWords | CompoundMethod::SeparateWords => Some(self.join),
        }
    }

    /// Surcharge for the space between two adjacent words of `left` and
    /// `right` characters.
    pub fn word_break(&self, method: CompoundMethod, left: usize, right: usize) -> Cost {
        if method != CompoundMethod::SeparateWords {
            return 0;
        }
        let missing = self.short_word_len.saturating_sub(left.min(right));
        self.word_break_step.saturating_mul(missing as Cost)
    }

    /// Penalty charged when a compound segment of `len` characters is closed.
    pub fn segment_penalty(&self, len: usize) -> Cost {
        if len == 1 {
            self.single_letter_segment
        } else {
            0
        }
    }

    fn duplicate_or_base(&self, ch: char, previous: Option<char>) -> Cost {
        if previous == Some(ch) {
            self.duplicate_letter
        } else {
            self.base
        }
    }
}

/// Convert a change limit in edits to a cost ceiling.
///
/// Negative and NaN limits map to 0, infinite ones saturate.
pub fn change_limit_to_cost(change_limit: f64) -> Cost {
    // float -> int `as` casts saturate and send NaN to 0
    (change_limit * BASE_COST as f64).round() as Cost
}

/// Cost ceiling for a word of `word_len` characters: the change limit,
/// capped in proportion to the word length.
pub fn length_scaled_limit(word_len: usize, change_limit: f64) -> Cost {
    change_limit_to_cost(change_limit.min(word_len as f64 * MAX_COST_SCALE))
}
