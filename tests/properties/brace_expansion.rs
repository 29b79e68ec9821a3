//! Property tests for brace expansion.

use proptest::prelude::*;

use stacksort::domain::services::{expand_braces, validate_braces};

fn literal() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_*/.-]{0,8}").unwrap()
}

fn alternative() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_*.-]{1,6}").unwrap()
}

/// Literal runs interleaved with brace groups, plus the group sizes.
fn braced_pattern() -> impl Strategy<Value = (String, Vec<usize>)> {
    let group = proptest::collection::vec(alternative(), 1..=4);
    (literal(), proptest::collection::vec((group, literal()), 0..=3)).prop_map(|(head, groups)| {
        let mut pattern = head;
        let mut sizes = Vec::new();
        for (alternatives, tail) in groups {
            sizes.push(alternatives.len());
            pattern.push('{');
            pattern.push_str(&alternatives.join(","));
            pattern.push('}');
            pattern.push_str(&tail);
        }
        (pattern, sizes)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Expansion never panics on arbitrary input.
    #[test]
    fn property_expand_never_panics(
        s in "(?s).{0,128}"
    ) {
        let _ = expand_braces(&s);
    }

    /// PROPERTY: Expansion succeeds exactly when validation does.
    #[test]
    fn property_expand_agrees_with_validate(
        s in "[a-c{},/]{0,24}"
    ) {
        prop_assert_eq!(expand_braces(&s).is_ok(), validate_braces(&s).is_ok());
    }

    /// PROPERTY: A well-formed pattern yields the product of its group sizes,
    /// and no braces survive.
    #[test]
    fn property_expansion_count_is_product(
        (pattern, sizes) in braced_pattern()
    ) {
        let expanded = expand_braces(&pattern).unwrap();

        prop_assert_eq!(expanded.len(), sizes.iter().product::<usize>());
        for item in &expanded {
            prop_assert!(!item.contains('{') && !item.contains('}'), "braces left in {}", item);
        }
    }

    /// PROPERTY: Patterns without braces expand to themselves.
    #[test]
    fn property_plain_pattern_is_singleton(
        s in "[A-Za-z0-9_*/.,-]{0,32}"
    ) {
        prop_assert_eq!(expand_braces(&s).unwrap(), vec![s]);
    }
}
