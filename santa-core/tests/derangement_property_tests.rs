use proptest::prelude::*;
use santa_core::{
    parse_roster, DerangementGenerator, DerangementStrategy, Participant, Roster, ValidationError,
};
use std::collections::{BTreeSet, HashSet};

fn unique_names(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[A-Z][a-z]{0,9}", min..=max)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn any_strategy() -> impl Strategy<Value = DerangementStrategy> {
    prop_oneof![
        Just(DerangementStrategy::Rejection),
        Just(DerangementStrategy::Repair),
    ]
}

proptest! {
    #[test]
    fn generated_assignment_is_a_derangement(
        names in unique_names(2, 40),
        strategy in any_strategy(),
        seed in any::<u64>(),
    ) {
        let roster = Roster::from_names(&names).unwrap();
        let assignment = DerangementGenerator::seeded(seed, strategy).generate(&roster);

        prop_assert_eq!(assignment.len(), names.len());
        for (giver, recipient) in assignment.iter() {
            prop_assert_ne!(giver, recipient);
        }

        let givers: Vec<&str> = assignment.iter().map(|(g, _)| g.as_str()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(givers, expected);

        let recipients: BTreeSet<&str> = assignment.iter().map(|(_, r)| r.as_str()).collect();
        let all: BTreeSet<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(recipients, all);
        prop_assert!(assignment.is_derangement());
    }

    #[test]
    fn short_inputs_fail_validation(
        names in prop::collection::vec("[A-Z][a-z]{0,5}", 0..2),
        strategy in any_strategy(),
    ) {
        let participants: Vec<Participant> = names.iter().map(Participant::new).collect();
        let mut generator = DerangementGenerator::seeded(0, strategy);
        let result = generator.assign(&participants);
        prop_assert_eq!(
            result,
            Err(ValidationError::TooFewParticipants { count: names.len() })
        );
    }

    #[test]
    fn repeated_draws_stay_valid(names in unique_names(2, 12), strategy in any_strategy()) {
        let roster = Roster::from_names(&names).unwrap();
        let mut generator = DerangementGenerator::from_os_rng(strategy);
        for _ in 0..5 {
            prop_assert!(generator.generate(&roster).is_derangement());
        }
    }

    #[test]
    fn parse_roster_keeps_every_nonblank_line(names in unique_names(0, 20), blanks in 0usize..4) {
        let mut text = String::new();
        for name in &names {
            text.push_str(&" ".repeat(blanks));
            text.push_str(name);
            text.push('\n');
            text.push_str(&"\n".repeat(blanks));
        }
        let parsed = parse_roster(&text);
        let parsed: Vec<&str> = parsed.iter().map(Participant::as_str).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(parsed, expected);
    }
}

#[test]
fn rejection_reaches_every_derangement_of_four() {
    // D(4) = 9.
    let roster = Roster::from_names(["A", "B", "C", "D"]).unwrap();
    let mut seen = HashSet::new();
    for seed in 0..2_000 {
        let assignment =
            DerangementGenerator::seeded(seed, DerangementStrategy::Rejection).generate(&roster);
        let recipients: Vec<String> = assignment.iter().map(|(_, r)| r.to_string()).collect();
        seen.insert(recipients);
    }
    assert_eq!(seen.len(), 9);
}
