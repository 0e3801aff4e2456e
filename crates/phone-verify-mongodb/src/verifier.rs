//! Batch verifier implementation.

use crate::compare::compare_records;
use crate::error::VerifyError;
use crate::report::{MismatchInfo, MissingInfo, VerificationReport};
use phone_core::PhoneRecord;
use phone_populate_mongodb::{LoaderConfig, MongoStore, PhoneStore};
use std::collections::{HashMap, HashSet};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Compare an expected batch with everything the store holds.
///
/// Records are matched on `id`. Stored records outside the batch are
/// counted as `extra` and do not fail verification.
pub async fn verify_batch<S: PhoneStore>(
    store: &S,
    expected: &[PhoneRecord],
) -> Result<VerificationReport, VerifyError> {
    let start_time = Instant::now();
    info!(
        "Verifying {} phone records against {}",
        expected.len(),
        store.describe()
    );

    let stored: HashMap<String, PhoneRecord> = store
        .find_all()
        .await?
        .into_iter()
        .map(|record| (record.id.clone(), record))
        .collect();

    let mut report = VerificationReport {
        expected: expected.len() as u64,
        ..Default::default()
    };

    for (position, record) in expected.iter().enumerate() {
        let index = position as u32 + 1;

        let Some(actual) = stored.get(&record.id) else {
            warn!("Record {} not found in {}", record.id, store.describe());
            report.missing += 1;
            report.missing_rows.push(MissingInfo {
                expected_id: record.id.clone(),
                index,
            });
            continue;
        };

        report.found += 1;
        let field_mismatches = compare_records(record, actual)?;
        if field_mismatches.is_empty() {
            debug!("Record {} matched", record.id);
            report.matched += 1;
        } else {
            for mismatch in &field_mismatches {
                warn!(
                    "Record {} field {}: expected {}, got {}",
                    record.id, mismatch.field, mismatch.expected, mismatch.actual
                );
            }
            report.mismatched += 1;
            report.mismatched_rows.push(MismatchInfo {
                record_id: record.id.clone(),
                index,
                field_mismatches,
            });
        }
    }

    let expected_ids: HashSet<&str> = expected.iter().map(|r| r.id.as_str()).collect();
    report.extra = stored
        .keys()
        .filter(|id| !expected_ids.contains(id.as_str()))
        .count() as u64;
    report.total_duration = start_time.elapsed();

    info!("{}", report.summary());
    Ok(report)
}

/// Connect to MongoDB, verify the batch, and close the connection.
pub async fn verify_collection(
    config: &LoaderConfig,
    expected: &[PhoneRecord],
) -> Result<VerificationReport, VerifyError> {
    let mut store = MongoStore::connect(config).await?;
    let result = verify_batch(&store, expected).await;
    store.close().await;
    result
}
