//! Populate command runner.

use anyhow::Context;
use phone_generator::PhoneGenerator;
use phone_populate_mongodb::{
    load_batch, run_batch, LoaderConfig, MemoryStore, MongoDBPopulateArgs, PhonePopulator,
    PopulateMetrics,
};

/// Generate a batch and upsert it into MongoDB.
///
/// With `--dry-run` the batch goes through an in-memory store instead, so
/// configuration and generation are exercised without a connection.
pub async fn run_populate(args: MongoDBPopulateArgs) -> anyhow::Result<PopulateMetrics> {
    let config =
        LoaderConfig::try_from(&args.connection).context("Invalid MongoDB configuration")?;
    let records = PhoneGenerator::new(args.common.seed).generate(args.common.count);

    if args.common.dry_run {
        tracing::info!(
            "[DRY-RUN] Would populate MongoDB with {} phone records (seed={})",
            args.common.count,
            args.common.seed
        );
        tracing::info!("[DRY-RUN] Connection: {}", config.masked_uri());
        tracing::info!(
            "[DRY-RUN] Target: {}.{}",
            config.database_name,
            config.collection_name
        );
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        tracing::info!("[DRY-RUN] Ids: {:?}", ids);

        let mut populator = PhonePopulator::with_store(MemoryStore::new());
        return run_batch(&mut populator, &records)
            .await
            .context("Dry run failed");
    }

    tracing::info!(
        "Populating MongoDB with {} phone records (seed={})",
        args.common.count,
        args.common.seed
    );

    let metrics = load_batch(&config, &records)
        .await
        .with_context(|| format!("Failed to populate {}", config.masked_uri()))?;

    tracing::info!(
        "Populate completed: {} records in {:?} ({:.1} records/sec)",
        metrics.records_upserted,
        metrics.total_duration,
        metrics.records_per_second()
    );
    Ok(metrics)
}
