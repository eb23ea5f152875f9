//! Review submission validation.
//!
//! A proposed review passes through [`RULES`] in order. The first rule it
//! breaks decides the outcome and the remaining rules are not evaluated.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Fewest words a review comment may contain.
pub const MIN_COMMENT_WORDS: usize = 5;

/// Lowest accepted star rating.
const MIN_RATING: i64 = 1;

/// Highest accepted star rating.
const MAX_RATING: i64 = 5;

/// A review as submitted, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCandidate {
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
}

impl ReviewCandidate {
    pub fn new(author_name: Option<&str>, rating: i64, comment: Option<&str>) -> Self {
        Self {
            author_name: author_name.map(str::to_string),
            rating,
            comment: comment.map(str::to_string),
        }
    }
}

/// One validation rule. The Display text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ReviewRule {
    #[error("User name is required")]
    AuthorNameRequired,

    #[error("Rating must be between 1 and 5 stars")]
    RatingInRange,

    #[error("Review comment is required")]
    CommentRequired,

    #[error("Review must be at least 5 words")]
    CommentMinWords,
}

/// The rule chain, in evaluation order.
pub const RULES: [ReviewRule; 4] = [
    ReviewRule::AuthorNameRequired,
    ReviewRule::RatingInRange,
    ReviewRule::CommentRequired,
    ReviewRule::CommentMinWords,
];

impl ReviewRule {
    /// Returns `true` if the candidate passes this rule.
    pub fn is_satisfied_by(&self, candidate: &ReviewCandidate) -> bool {
        match self {
            ReviewRule::AuthorNameRequired => is_present(candidate.author_name.as_deref()),
            ReviewRule::RatingInRange => (MIN_RATING..=MAX_RATING).contains(&candidate.rating),
            ReviewRule::CommentRequired => is_present(candidate.comment.as_deref()),
            ReviewRule::CommentMinWords => {
                count_words(candidate.comment.as_deref().unwrap_or_default())
                    >= MIN_COMMENT_WORDS
            }
        }
    }
}

/// Result of running the rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    /// Carries the first rule the candidate broke.
    Rejected(ReviewRule),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }

    /// The rejection message, if any.
    pub fn reason(&self) -> Option<String> {
        match self {
            ValidationOutcome::Accepted => None,
            ValidationOutcome::Rejected(rule) => Some(rule.to_string()),
        }
    }

    /// Convert to a `Result` so callers can propagate rejections with `?`.
    pub fn into_result(self) -> Result<(), ReviewRule> {
        match self {
            ValidationOutcome::Accepted => Ok(()),
            ValidationOutcome::Rejected(rule) => Err(rule),
        }
    }
}

/// Run the rule chain against a candidate review.
pub fn validate(candidate: &ReviewCandidate) -> ValidationOutcome {
    match RULES.iter().find(|rule| !rule.is_satisfied_by(candidate)) {
        Some(rule) => {
            debug!(rule = ?rule, "Review rejected");
            ValidationOutcome::Rejected(*rule)
        }
        None => ValidationOutcome::Accepted,
    }
}

/// Count words in `text` after trimming.
///
/// Words are maximal runs of characters other than the space character, so
/// runs of several spaces count as a single separator.
pub fn count_words(text: &str) -> usize {
    text.trim().split(' ').filter(|word| !word.is_empty()).count()
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(author: Option<&str>, rating: i64, comment: Option<&str>) -> ValidationOutcome {
        validate(&ReviewCandidate::new(author, rating, comment))
    }

    #[test]
    fn test_author_name_required() {
        for author in [None, Some(""), Some("   ")] {
            assert_eq!(
                outcome(author, 3, Some("a b c d e")),
                ValidationOutcome::Rejected(ReviewRule::AuthorNameRequired)
            );
        }
        assert_eq!(
            outcome(None, 3, Some("a b c d e")).reason().as_deref(),
            Some("User name is required")
        );
    }

    #[test]
    fn test_rating_bounds() {
        for rating in [0, 6, -1, i64::MAX, i64::MIN] {
            assert_eq!(
                outcome(Some("Al"), rating, Some("a b c d e")),
                ValidationOutcome::Rejected(ReviewRule::RatingInRange)
            );
        }
        for rating in 1..=5 {
            assert!(outcome(Some("Al"), rating, Some("a b c d e")).is_accepted());
        }
        assert_eq!(
            ReviewRule::RatingInRange.to_string(),
            "Rating must be between 1 and 5 stars"
        );
    }

    #[test]
    fn test_comment_required() {
        for comment in [None, Some(""), Some(" \t ")] {
            assert_eq!(
                outcome(Some("Al"), 3, comment),
                ValidationOutcome::Rejected(ReviewRule::CommentRequired)
            );
        }
        assert_eq!(
            ReviewRule::CommentRequired.to_string(),
            "Review comment is required"
        );
    }

    #[test]
    fn test_minimum_word_count() {
        assert_eq!(
            outcome(Some("Al"), 3, Some("one two three")),
            ValidationOutcome::Rejected(ReviewRule::CommentMinWords)
        );
        assert_eq!(
            outcome(Some("Al"), 3, Some("one two three four")).reason().as_deref(),
            Some("Review must be at least 5 words")
        );
        assert!(outcome(Some("Al"), 5, Some("one two three four five")).is_accepted());
    }

    #[test]
    fn test_irregular_spacing_does_not_change_word_count() {
        assert!(outcome(Some("Al"), 5, Some("one  two   three    four     five")).is_accepted());
        assert!(outcome(Some("Al"), 5, Some("   one two three four five   ")).is_accepted());
    }

    #[test]
    fn test_only_first_violation_is_reported() {
        // every rule broken
        assert_eq!(
            outcome(None, 0, None),
            ValidationOutcome::Rejected(ReviewRule::AuthorNameRequired)
        );
        // rating checked only after the name passes
        assert_eq!(
            outcome(Some("Al"), 6, Some("a b c d e")),
            ValidationOutcome::Rejected(ReviewRule::RatingInRange)
        );
        assert_eq!(
            outcome(Some("Al"), 9, Some("short")),
            ValidationOutcome::Rejected(ReviewRule::RatingInRange)
        );
        assert_eq!(
            outcome(Some("Al"), 4, None),
            ValidationOutcome::Rejected(ReviewRule::CommentRequired)
        );
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("     "), 0);
        assert_eq!(count_words("word"), 1);
        assert_eq!(count_words("a  b   c"), 3);
        assert_eq!(count_words("  leading and trailing  "), 3);
        // only the space character separates words
        assert_eq!(count_words("tab\tseparated words"), 2);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationOutcome::Accepted.into_result(), Ok(()));
        assert_eq!(
            ValidationOutcome::Rejected(ReviewRule::CommentMinWords).into_result(),
            Err(ReviewRule::CommentMinWords)
        );
        assert_eq!(ValidationOutcome::Accepted.reason(), None);
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(
            RULES,
            [
                ReviewRule::AuthorNameRequired,
                ReviewRule::RatingInRange,
                ReviewRule::CommentRequired,
                ReviewRule::CommentMinWords,
            ]
        );
    }

    #[test]
    fn test_candidate_deserializes_camel_case() {
        let candidate: ReviewCandidate =
            serde_json::from_str(r#"{"authorName": "Al", "rating": 4, "comment": "x"}"#).unwrap();
        assert_eq!(candidate, ReviewCandidate::new(Some("Al"), 4, Some("x")));

        let empty: ReviewCandidate = serde_json::from_str("{}").unwrap();
        assert_eq!(validate(&empty), ValidationOutcome::Rejected(ReviewRule::AuthorNameRequired));
    }
}
