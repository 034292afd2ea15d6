//! Property Tests for Classification and Delay Sampling
//!
//! Invariant checks over arbitrary inputs: classification is total and
//! deterministic, exit matching stays exact, delays stay inside their bounds.

use std::time::Duration;

use proptest::prelude::*;

use buddyterm::dispatch::{classify, Dispatch};
use buddyterm::responses::{derive_category, render_response, sample_delay};
use buddyterm::RequestCategory;

proptest! {
    #[test]
    fn prop_classification_never_panics(input in "\\PC*") {
        let _ = classify(&input);
        let _ = derive_category(&input);
    }

    #[test]
    fn prop_classification_is_deterministic(input in "\\PC{0,64}") {
        prop_assert_eq!(derive_category(&input), derive_category(&input));
        prop_assert_eq!(classify(&input), classify(&input));
    }

    #[test]
    fn prop_category_ignores_case(input in "[a-zA-Z ]{0,64}") {
        prop_assert_eq!(
            derive_category(&input),
            derive_category(&input.to_lowercase())
        );
    }

    #[test]
    fn prop_inputs_containing_fix_diagnose(prefix in "[a-z ]{0,16}", suffix in "[a-z ]{0,16}") {
        let input = format!("{}fix{}", prefix, suffix);
        prop_assert_eq!(derive_category(&input), RequestCategory::Diagnose);
    }

    #[test]
    fn prop_only_the_two_exit_words_exit(input in "\\PC{0,32}") {
        let exits = matches!(classify(&input), Dispatch::Exit);
        prop_assert_eq!(exits, input == "q" || input == "exit");
    }

    #[test]
    fn prop_rendered_lines_match_table_length(input in "\\PC{0,64}") {
        let category = derive_category(&input);
        let lines = render_response(category, &input);
        prop_assert!(!lines.is_empty());
        // The placeholder never leaks into rendered output
        let placeholder_free = lines.iter().all(|(_, text)| !text.contains("{input}"));
        prop_assert!(placeholder_free);
    }

    #[test]
    fn prop_delay_stays_in_bounds(min in 0u64..5_000, span in 0u64..5_000) {
        let max = min + span;
        let delay = sample_delay(min, max);
        prop_assert!(delay >= Duration::from_millis(min));
        prop_assert!(delay <= Duration::from_millis(max));
    }
}
