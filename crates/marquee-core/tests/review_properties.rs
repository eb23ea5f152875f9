//! Property tests for the review rule chain.

use marquee_core::{count_words, validate, ReviewCandidate, ReviewRule, ValidationOutcome, RULES};
use proptest::prelude::*;

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9.,!']{1,8}", 0..12)
}

proptest! {
    #[test]
    fn word_count_ignores_separator_length(words in word_list(), gaps in prop::collection::vec(1usize..6, 12)) {
        let mut text = String::new();
        for (pos, word) in words.iter().enumerate() {
            if pos > 0 {
                text.push_str(&" ".repeat(gaps[pos]));
            }
            text.push_str(word);
        }
        prop_assert_eq!(count_words(&text), words.len());
        prop_assert_eq!(count_words(&format!("  {}   ", text)), words.len());
    }

    #[test]
    fn first_broken_rule_is_reported(
        author in prop::option::of("[ a-z]{0,6}"),
        rating in -3i64..9,
        comment in prop::option::of("[ a-z]{0,30}"),
    ) {
        let candidate = ReviewCandidate { author_name: author, rating, comment };
        let expected = RULES.iter().copied().find(|rule| !rule.is_satisfied_by(&candidate));

        match validate(&candidate) {
            ValidationOutcome::Accepted => prop_assert_eq!(expected, None),
            ValidationOutcome::Rejected(rule) => prop_assert_eq!(Some(rule), expected),
        }
    }

    #[test]
    fn well_formed_reviews_are_accepted(
        author in "[a-zA-Z]{1,10}",
        rating in 1i64..=5,
        words in prop::collection::vec("[a-z]{1,8}", 5..20),
    ) {
        let candidate = ReviewCandidate::new(Some(author.as_str()), rating, Some(words.join(" ").as_str()));
        prop_assert_eq!(validate(&candidate), ValidationOutcome::Accepted);
    }

    #[test]
    fn out_of_range_rating_is_rejected(rating in prop_oneof![i64::MIN..1, 6..i64::MAX]) {
        let candidate = ReviewCandidate::new(Some("Al"), rating, Some("one two three four five"));
        prop_assert_eq!(validate(&candidate), ValidationOutcome::Rejected(ReviewRule::RatingInRange));
    }
}

#[test]
fn documented_examples() {
    let cases = [
        (None, 3, Some("a b c d e"), Some("User name is required")),
        (Some("Al"), 6, Some("a b c d e"), Some("Rating must be between 1 and 5 stars")),
        (Some("Al"), 3, Some(""), Some("Review comment is required")),
        (Some("Al"), 3, Some("one two three"), Some("Review must be at least 5 words")),
        (Some("Al"), 5, Some("one two three four five"), None),
        (Some("Al"), 5, Some("one  two   three    four     five"), None),
    ];

    for (author, rating, comment, reason) in cases {
        let outcome = validate(&ReviewCandidate::new(author, rating, comment));
        assert_eq!(outcome.reason().as_deref(), reason);
    }
}
