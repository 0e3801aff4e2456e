//! Common CLI argument definitions shared by all populators.

use clap::Args;
use phone_generator::{DEFAULT_PHONE_COUNT, DEFAULT_SEED};

/// Common arguments shared by all populators.
///
/// Populate and verify both flatten this struct; passing the same
/// `--count` and `--seed` to each makes them agree on the batch.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Number of phone records to generate
    #[arg(long, default_value_t = DEFAULT_PHONE_COUNT)]
    pub count: u32,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Dry-run mode: validate configuration and generate the batch without touching the database
    #[arg(long)]
    pub dry_run: bool,
}
