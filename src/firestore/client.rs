use crate::config::Config;
use crate::firestore::auth::{ServiceAccountKey, fetch_access_token};
use crate::firestore::value::Value;
use crate::seeder::{DocumentStore, SetupError, StoreError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// One authenticated Firestore session, opened at startup and held for the
/// lifetime of the run.
#[derive(Debug)]
pub struct FirestoreClient {
    http: reqwest::Client,
    token: String,
    project_id: String,
    database_id: String,
    base_url: String,
}

#[derive(Serialize)]
struct CommitRequest {
    writes: Vec<Write>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Write {
    update: Document,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    update_transforms: Vec<FieldTransform>,
}

#[derive(Serialize)]
struct Document {
    name: String,
    fields: BTreeMap<String, Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldTransform {
    field_path: String,
    set_to_server_value: ServerValue,
}

#[derive(Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum ServerValue {
    RequestTime,
}

impl FirestoreClient {
    /// Loads the service-account key named by the config and exchanges it
    /// for a session token. Everything that can go wrong here is a
    /// `SetupError`; no document has been touched yet.
    pub async fn connect(config: &Config) -> Result<Self, SetupError> {
        let key = ServiceAccountKey::load(Path::new(&config.service_account_key))?;
        let http = reqwest::Client::new();
        let token = fetch_access_token(&http, &key).await?;

        info!(
            "Firestore initialized for project {} (database {})",
            key.project_id, config.firestore.database_id
        );

        Ok(Self {
            http,
            token,
            project_id: key.project_id,
            database_id: config.firestore.database_id.clone(),
            base_url: config.firestore.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn document_name(&self, collection_path: &str, doc_id: &str) -> String {
        format!(
            "projects/{}/databases/{}/documents/{}/{}",
            self.project_id, self.database_id, collection_path, doc_id
        )
    }

    fn commit_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents:commit",
            self.base_url, self.project_id, self.database_id
        )
    }
}

#[async_trait::async_trait]
impl DocumentStore for FirestoreClient {
    /// Issues one `documents:commit` with a single write. No update mask is
    /// set, so the write is a full create-or-replace at the document name.
    async fn upsert(
        &self,
        collection_path: &str,
        doc_id: &str,
        fields: BTreeMap<String, Value>,
        server_time_fields: &[String],
    ) -> Result<(), StoreError> {
        let name = self.document_name(collection_path, doc_id);
        debug!("Committing write to {name}");

        let request = CommitRequest {
            writes: vec![Write {
                update: Document { name, fields },
                update_transforms: server_time_fields
                    .iter()
                    .map(|field| FieldTransform {
                        field_path: field.clone(),
                        set_to_server_value: ServerValue::RequestTime,
                    })
                    .collect(),
            }],
        };

        let response = self
            .http
            .post(self.commit_url())
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
