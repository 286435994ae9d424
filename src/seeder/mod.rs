//! Best-effort batch seeding of fixture records into a document store.
//!
//! The store is behind a trait so the loop can be exercised against an
//! in-memory double; the real implementation is `firestore::FirestoreClient`.

use crate::firestore::value::{TimestampOutOfRange, Value, encode_job};
use crate::models::{JobListing, TimestampPolicy, ValidationError};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;
use tracing::{info, warn};

/// Failures that occur before any write is attempted. The caller decides
/// whether to terminate; nothing has touched the database yet.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("service account key unusable at {path}: {reason}")]
    Credential { path: String, reason: String },

    #[error("token exchange failed: {0}")]
    Token(String),

    #[error("duplicate job_id in fixture list: {0}")]
    DuplicateId(String),

    #[error("invalid fixture record: {0}")]
    InvalidRecord(#[from] ValidationError),
}

/// A single record failing to persist. All causes are handled the same
/// way: log the identifier and move on to the next record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("write rejected: {status} - {body}")]
    Rejected { status: u16, body: String },

    #[error(transparent)]
    Encode(#[from] TimestampOutOfRange),
}

/// Upsert seam over the document database.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates or fully replaces the document at `collection_path/doc_id`.
    ///
    /// Fields named in `server_time_fields` are filled with the database's
    /// write-time timestamp instead of a caller-supplied value.
    async fn upsert(
        &self,
        collection_path: &str,
        doc_id: &str,
        fields: BTreeMap<String, Value>,
        server_time_fields: &[String],
    ) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct FailedRecord {
    pub job_id: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct SeedReport {
    pub written: usize,
    pub failed: usize,
    pub failures: Vec<FailedRecord>,
}

/// Writes every record to `collection_path`, one at a time, in list order.
///
/// A failing record is logged and skipped; the remaining records are still
/// written. Invariant violations (empty or duplicate ids, unrepresentable
/// timestamps) abort before the first write instead.
pub async fn seed_all(
    store: &dyn DocumentStore,
    collection_path: &str,
    records: &[JobListing],
    policy: TimestampPolicy,
) -> Result<SeedReport, SetupError> {
    let mut seen = HashSet::new();
    for record in records {
        record.validate()?;
        if !seen.insert(record.job_id.as_str()) {
            return Err(SetupError::DuplicateId(record.job_id.clone()));
        }
    }

    info!(
        "Seeding {} job listings into {} ({policy:?} timestamps)",
        records.len(),
        collection_path
    );

    let mut report = SeedReport::default();
    for record in records {
        match seed_one(store, collection_path, record, policy).await {
            Ok(()) => {
                info!("Uploaded job: {}", record.job_id);
                report.written += 1;
            }
            Err(err) => {
                warn!("Failed to upload job {}: {err}", record.job_id);
                report.failed += 1;
                report.failures.push(FailedRecord {
                    job_id: record.job_id.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    info!(
        "Seeding complete: {} written, {} failed",
        report.written, report.failed
    );
    Ok(report)
}

async fn seed_one(
    store: &dyn DocumentStore,
    collection_path: &str,
    record: &JobListing,
    policy: TimestampPolicy,
) -> Result<(), StoreError> {
    let encoded = encode_job(record, policy)?;
    store
        .upsert(
            collection_path,
            &record.job_id,
            encoded.fields,
            &encoded.server_time_fields,
        )
        .await
}
