// Suggestion results and compounding modes

use serde::{Deserialize, Serialize};

/// Edit cost in hundredths of a full edit.
pub type Cost = u32;

/// Cost of one full edit (substitution, insertion or deletion).
///
/// Change limits are expressed in edits and scaled by this unit.
pub const BASE_COST: Cost = 100;

/// A correction candidate with its accumulated edit cost.
///
/// Lower costs are better. Deduplication compares words only; the cost
/// decides ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word (segments joined by the compound separator).
    pub word: String,
    /// Accumulated edit cost.
    pub cost: Cost,
}

impl Suggestion {
    pub fn new(word: impl Into<String>, cost: Cost) -> Self {
        Self {
            word: word.into(),
            cost,
        }
    }
}

/// How the search may cross compound boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompoundMethod {
    /// Never restart at the trie root mid-word.
    #[default]
    None,
    /// Segments are joined with a visible `+` marker: "one+two".
    JoinWords,
    /// Segments are separated by a space: "one two".
    SeparateWords,
}

impl CompoundMethod {
    /// Character inserted between compound segments, if compounding is allowed.
    pub fn separator(self) -> Option<char> {
        match self {
            CompoundMethod::None => None,
            CompoundMethod::JoinWords => Some('+'),
            CompoundMethod::SeparateWords => Some(' '),
        }
    }

    pub fn allows_compounds(self) -> bool {
        self != CompoundMethod::None
    }
}
