//! Wiring: participant list → roster → derangement → records.

use crate::config::SantaConfig;
use crate::error::CliResult;
use santa_core::{
    read_roster, DerangementGenerator, DerangementStrategy, Participant, Roster, SantaResult,
};
use santa_storage::{AssignmentStore, DirectoryStore, WriteSummary};
use std::path::PathBuf;

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records_written: usize,
    pub output_dir: PathBuf,
    pub strategy: DerangementStrategy,
}

/// Run once with the given configuration, writing into `config.output_dir`.
pub fn run(config: &SantaConfig) -> CliResult<RunSummary> {
    let participants = read_roster(&config.participants_path)?;
    let mut generator = match config.seed {
        Some(seed) => DerangementGenerator::seeded(seed, config.strategy),
        None => DerangementGenerator::from_os_rng(config.strategy),
    };
    let store = DirectoryStore::new(&config.output_dir).with_format(config.record_format());

    let written = draw_into(participants, &mut generator, &store)?;

    Ok(RunSummary {
        records_written: written.records_written,
        output_dir: config.output_dir.clone(),
        strategy: config.strategy,
    })
}

/// Validate `participants`, draw an assignment and hand it to `store`.
///
/// Nothing reaches the store when validation fails.
pub fn draw_into<S>(
    participants: Vec<Participant>,
    generator: &mut DerangementGenerator,
    store: &S,
) -> SantaResult<WriteSummary>
where
    S: AssignmentStore + ?Sized,
{
    let roster = Roster::new(participants)?;
    tracing::info!(
        participants = roster.len(),
        strategy = ?generator.strategy(),
        "Drawing assignments"
    );
    let assignment = generator.generate(&roster);
    store.write_assignment(&assignment)
}
