use linemark::normalize::normalize;
use proptest::prelude::*;

#[test]
fn already_normalized_text_is_untouched() {
    let text = "# a\n\nb\nc\n\nd";
    assert_eq!(normalize(text), text);
}

#[test]
fn long_blank_runs_collapse_to_one() {
    assert_eq!(normalize("a\n\n\n\n\nb"), "a\n\nb");
}

#[test]
fn separator_never_collapses_to_zero() {
    assert_eq!(normalize("a\n\nb"), "a\n\nb");
}

proptest! {
    #[test]
    fn idempotent(input in "[a-z#>*\\- \t\n]{0,120}") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn no_blank_run_longer_than_one(input in "[a-z \t\n]{0,120}") {
        let normalized = normalize(&input);
        prop_assert!(!normalized.contains("\n\n\n"));
        // blank lines that survive are truly empty
        for line in normalized.split('\n') {
            prop_assert!(line.is_empty() || !line.trim().is_empty());
        }
    }

    #[test]
    fn output_is_trimmed(input in "[a-z \t\n]{0,120}") {
        let normalized = normalize(&input);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }

    #[test]
    fn blank_runs_of_any_length_become_one_separator(extra in 0usize..6) {
        let input = format!("a{}b", "\n".repeat(extra + 2));
        prop_assert_eq!(normalize(&input), "a\n\nb");
    }
}
