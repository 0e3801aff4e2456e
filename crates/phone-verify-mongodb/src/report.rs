//! Verification report types.

use std::time::Duration;

/// Information about a field mismatch.
#[derive(Debug, Clone)]
pub struct FieldMismatch {
    /// Dotted field path.
    pub field: String,
    /// Expected value.
    pub expected: String,
    /// Actual value.
    pub actual: String,
}

/// Information about a mismatched record.
#[derive(Debug, Clone)]
pub struct MismatchInfo {
    /// Record id.
    pub record_id: String,
    /// 1-based position in the generated batch.
    pub index: u32,
    /// Field mismatches.
    pub field_mismatches: Vec<FieldMismatch>,
}

/// Information about a missing record.
#[derive(Debug, Clone)]
pub struct MissingInfo {
    /// Expected record id.
    pub expected_id: String,
    /// 1-based position in the generated batch.
    pub index: u32,
}

/// Verification report.
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    /// Total number of records expected.
    pub expected: u64,
    /// Number of expected records found in the store.
    pub found: u64,
    /// Number of records missing.
    pub missing: u64,
    /// Number of records with mismatched data.
    pub mismatched: u64,
    /// Number of records that matched exactly.
    pub matched: u64,
    /// Stored records not part of the batch. Reported, not a failure.
    pub extra: u64,
    /// Details of missing records.
    pub missing_rows: Vec<MissingInfo>,
    /// Details of mismatched records.
    pub mismatched_rows: Vec<MismatchInfo>,
    /// Total verification time.
    pub total_duration: Duration,
}

impl VerificationReport {
    /// Check if verification passed.
    pub fn is_success(&self) -> bool {
        self.missing == 0 && self.mismatched == 0
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_success() {
            format!(
                "Verification PASSED: {}/{} records matched in {:?} ({} extra)",
                self.matched, self.expected, self.total_duration, self.extra
            )
        } else {
            format!(
                "Verification FAILED: {} missing, {} mismatched out of {} expected",
                self.missing, self.mismatched, self.expected
            )
        }
    }
}
