// Error type for suggestion requests.

/// Boxed error produced by caller-supplied collaborators such as filters.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by a suggestion request.
///
/// Running out of budget is never an error: an empty result is a valid
/// outcome. Only invalid configuration and failing collaborators surface here.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// `num_suggestions` must be at least 1.
    #[error("invalid suggestion count: {0} (must be at least 1)")]
    InvalidSuggestionCount(usize),

    /// `change_limit` must be a finite, non-negative number of edits.
    #[error("invalid change limit: {0} (must be finite and non-negative)")]
    InvalidChangeLimit(f64),

    /// A caller-supplied filter failed. The original error is the source.
    #[error("suggestion filter failed: {0}")]
    Filter(#[source] BoxError),
}

impl SuggestError {
    /// Returns `true` for errors caused by invalid options.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SuggestError::InvalidSuggestionCount(_) | SuggestError::InvalidChangeLimit(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug, thiserror::Error)]
    #[error("dictionary offline")]
    struct Offline;

    #[test]
    fn config_errors_are_classified() {
        assert!(SuggestError::InvalidSuggestionCount(0).is_config_error());
        assert!(SuggestError::InvalidChangeLimit(-1.0).is_config_error());
        assert!(!SuggestError::Filter(Box::new(Offline)).is_config_error());
    }

    #[test]
    fn filter_error_keeps_source() {
        let err = SuggestError::Filter(Box::new(Offline));
        let source = err.source().expect("filter error has a source");
        assert!(source.downcast_ref::<Offline>().is_some());
        assert_eq!(err.to_string(), "suggestion filter failed: dictionary offline");
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            SuggestError::InvalidSuggestionCount(0).to_string(),
            "invalid suggestion count: 0 (must be at least 1)"
        );
        assert_eq!(
            SuggestError::InvalidChangeLimit(-2.5).to_string(),
            "invalid change limit: -2.5 (must be finite and non-negative)"
        );
    }
}
