//! Verify command runner.

use anyhow::Context;
use phone_generator::PhoneGenerator;
use phone_populate_mongodb::LoaderConfig;
use phone_verify_mongodb::{verify_collection, VerificationReport, VerifyArgs};

/// Regenerate the batch and check it against the stored records.
///
/// Returns the report when every expected record matches, and an error
/// otherwise so the process exits non-zero.
pub async fn run_verify(args: VerifyArgs) -> anyhow::Result<VerificationReport> {
    let config =
        LoaderConfig::try_from(&args.connection).context("Invalid MongoDB configuration")?;

    tracing::info!(
        "Verifying {} phone records in {}.{} (seed={})",
        args.count,
        config.database_name,
        config.collection_name,
        args.seed
    );

    let expected = PhoneGenerator::new(args.seed).generate(args.count);
    let report = verify_collection(&config, &expected)
        .await
        .with_context(|| format!("Failed to verify {}", config.masked_uri()))?;

    if report.is_success() {
        tracing::info!(
            "Verification completed successfully - {} records match expected data",
            report.matched
        );
        Ok(report)
    } else {
        for row in &report.missing_rows {
            tracing::error!("Missing record {} (index {})", row.expected_id, row.index);
        }
        for row in &report.mismatched_rows {
            let fields: Vec<&str> = row
                .field_mismatches
                .iter()
                .map(|m| m.field.as_str())
                .collect();
            tracing::error!(
                "Mismatched record {} (index {}): {:?}",
                row.record_id,
                row.index,
                fields
            );
        }
        Err(anyhow::anyhow!("{}", report.summary()))
    }
}
