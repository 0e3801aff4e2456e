//! CLI argument definitions for the verifier.

use clap::Args;
use phone_generator::{DEFAULT_PHONE_COUNT, DEFAULT_SEED};
use phone_populate_mongodb::MongoDBConnectionArgs;

/// Arguments for verifying stored phone records.
#[derive(Args, Clone, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub connection: MongoDBConnectionArgs,

    /// Random seed (must match the seed used during populate)
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of records to verify (must match the populate count)
    #[arg(long, default_value_t = DEFAULT_PHONE_COUNT)]
    pub count: u32,
}
