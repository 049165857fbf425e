//! Property tests for sentence-level aggregation

use genfilt_core::matcher::aggregate;
use genfilt_core::{Gender, LabelTable};
use proptest::prelude::*;

fn label() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("fem"),
        Just("msc"),
        Just("Fem"),
        Just("Masc"),
        Just("other"),
        Just("neut"),
    ]
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Feminine), Just(Gender::Masculine)]
}

fn table() -> LabelTable {
    LabelTable::base().with_synonyms("Fem", "Masc").unwrap()
}

proptest! {
    #[test]
    fn any_opposing_label_vetoes(
        labels in prop::collection::vec(label(), 0..20),
        gender in gender(),
        position in any::<prop::sample::Index>(),
    ) {
        let table = table();
        let opposing = table.opposing(gender).next().unwrap().to_string();
        let mut labels: Vec<&str> = labels;
        let at = position.index(labels.len() + 1);
        labels.insert(at, &opposing);
        prop_assert!(!aggregate(&table, gender, labels.iter().copied()));
    }

    #[test]
    fn neutral_only_never_matches(
        count in 0usize..20,
        gender in gender(),
    ) {
        let labels = vec!["other"; count];
        prop_assert!(!aggregate(&table(), gender, labels.iter().copied()));
    }

    #[test]
    fn decision_matches_definition(
        labels in prop::collection::vec(label(), 0..20),
        gender in gender(),
    ) {
        let table = table();
        let has_match = labels.iter().any(|l| table.matching(gender).any(|m| m == *l));
        let has_oppose = labels.iter().any(|l| table.opposing(gender).any(|o| o == *l));
        prop_assert_eq!(
            aggregate(&table, gender, labels.iter().copied()),
            has_match && !has_oppose
        );
    }

    #[test]
    fn genders_never_both_match(
        labels in prop::collection::vec(label(), 0..20),
    ) {
        let table = table();
        let fem = aggregate(&table, Gender::Feminine, labels.iter().copied());
        let msc = aggregate(&table, Gender::Masculine, labels.iter().copied());
        prop_assert!(!(fem && msc));
    }
}
