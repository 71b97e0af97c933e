use proptest::prelude::*;
use santa_cli::{run, CliError, SantaConfig};
use santa_core::DerangementStrategy;
use santa_storage::{AssignmentStore, DirectoryStore};
use santa_test_utils::{
    arb_strategy, arb_unique_names, Participant, RosterFixture, SantaError, StorageError,
    ValidationError,
};
use std::fs;

fn config_for(fixture: &RosterFixture) -> SantaConfig {
    SantaConfig {
        participants_path: fixture.roster_path().to_path_buf(),
        output_dir: fixture.dir().join("matching"),
        seed: Some(2024),
        ..Default::default()
    }
}

#[test]
fn run_writes_one_record_per_participant() {
    let names = ["Alice", "Bob", "Charlie", "Diana", "Eve", "Florentina"];
    let fixture = RosterFixture::with_lines(&names);
    let config = config_for(&fixture);

    let summary = run(&config).unwrap();

    assert_eq!(summary.records_written, names.len());
    assert_eq!(summary.strategy, DerangementStrategy::Rejection);

    let store = DirectoryStore::new(&config.output_dir);
    let mut recipients = Vec::new();
    for name in names {
        let giver = Participant::new(name);
        let recipient = store.read_recipient(&giver).unwrap().expect("record exists");
        assert_ne!(recipient, giver);
        recipients.push(recipient.to_string());
    }
    recipients.sort();
    let mut expected: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(recipients, expected);
}

#[test]
fn run_skips_blank_lines_in_input() {
    let fixture = RosterFixture::with_lines(&["Alice", "", "   ", "Bob"]);
    let config = config_for(&fixture);

    let summary = run(&config).unwrap();

    assert_eq!(summary.records_written, 2);
    let alice = fs::read_to_string(config.output_dir.join("Alice.txt")).unwrap();
    let bob = fs::read_to_string(config.output_dir.join("Bob.txt")).unwrap();
    assert_eq!(alice, "Bob");
    assert_eq!(bob, "Alice");
}

#[test]
fn run_pads_records_when_configured() {
    let fixture = RosterFixture::with_lines(&["Bob", "Charlie"]);
    let config = SantaConfig {
        pad_records: true,
        ..config_for(&fixture)
    };

    run(&config).unwrap();

    for giver in ["Bob", "Charlie"] {
        let raw = fs::read_to_string(config.output_dir.join(format!("{giver}.txt"))).unwrap();
        assert_eq!(raw.len(), 7);
    }
}

#[test]
fn run_with_single_participant_fails_validation() {
    let fixture = RosterFixture::with_lines(&["Solo"]);
    let config = config_for(&fixture);

    let err = run(&config).unwrap_err();

    assert!(matches!(
        err,
        CliError::Santa(SantaError::Validation(ValidationError::TooFewParticipants { count: 1 }))
    ));
    assert!(!config.output_dir.exists());
}

#[test]
fn run_with_empty_input_fails_validation() {
    let fixture = RosterFixture::with_lines(&[]);
    let err = run(&config_for(&fixture)).unwrap_err();
    assert!(matches!(
        err,
        CliError::Santa(SantaError::Validation(ValidationError::TooFewParticipants { count: 0 }))
    ));
}

#[test]
fn run_with_duplicates_fails_validation() {
    let fixture = RosterFixture::with_lines(&["Alice", "Bob", "Alice"]);
    let err = run(&config_for(&fixture)).unwrap_err();
    assert!(matches!(
        err,
        CliError::Santa(SantaError::Validation(ValidationError::DuplicateParticipant { .. }))
    ));
}

#[test]
fn run_with_missing_input_fails_with_storage_error() {
    let fixture = RosterFixture::with_lines(&[]);
    let config = SantaConfig {
        participants_path: fixture.dir().join("nobody.txt"),
        ..config_for(&fixture)
    };

    let err = run(&config).unwrap_err();

    assert!(matches!(
        err,
        CliError::Santa(SantaError::Storage(StorageError::InputUnavailable { .. }))
    ));
}

#[test]
fn run_is_reproducible_with_seed() {
    let names = ["Alice", "Bob", "Charlie", "Diana", "Eve"];
    let first = RosterFixture::with_lines(&names);
    let second = RosterFixture::with_lines(&names);
    let a = config_for(&first);
    let b = config_for(&second);

    run(&a).unwrap();
    run(&b).unwrap();

    for name in names {
        let file = format!("{name}.txt");
        assert_eq!(
            fs::read_to_string(a.output_dir.join(&file)).unwrap(),
            fs::read_to_string(b.output_dir.join(&file)).unwrap()
        );
    }
}

#[test]
fn config_file_drives_run() {
    let fixture = RosterFixture::with_lines(&["Alice", "Bob", "Charlie"]);
    let config_path = fixture.dir().join("santa.toml");
    let output = fixture.dir().join("out");
    fs::write(
        &config_path,
        format!(
            "participants_path = {:?}\noutput_dir = {:?}\nstrategy = \"repair\"\nseed = 1\n",
            fixture.roster_path().display().to_string(),
            output.display().to_string()
        ),
    )
    .unwrap();

    let config = SantaConfig::from_path(&config_path).unwrap();
    config.validate().unwrap();
    let summary = run(&config).unwrap();

    assert_eq!(summary.strategy, DerangementStrategy::Repair);
    assert_eq!(summary.output_dir, output);
    assert_eq!(summary.records_written, 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn run_round_trips_any_roster(
        names in arb_unique_names(2, 10),
        strategy in arb_strategy(),
        seed in any::<u64>(),
        padded in any::<bool>(),
    ) {
        let lines: Vec<&str> = names.iter().map(String::as_str).collect();
        let fixture = RosterFixture::with_lines(&lines);
        let config = SantaConfig {
            strategy,
            seed: Some(seed),
            pad_records: padded,
            ..config_for(&fixture)
        };

        let summary = run(&config).unwrap();
        prop_assert_eq!(summary.records_written, names.len());

        let store = DirectoryStore::new(&config.output_dir);
        for name in &names {
            let giver = Participant::new(name);
            let recipient = store.read_recipient(&giver).unwrap().unwrap();
            prop_assert_ne!(&recipient, &giver);
            prop_assert!(names.contains(&recipient.to_string()));
        }
    }
}
