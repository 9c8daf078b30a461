//! Adapter for the hosted per-user history collection (Firestore REST).
//!
//! The remote store is the sole source of truth; this layer only reads an
//! ordered projection and appends new records. Entries come back sorted by
//! creation time descending exactly as the store delivers them, never
//! reordered client-side.

use crate::error::{AppError, Result};
use crate::history::HistoryEntry;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

const PROJECT_ID: &str = "transcriba-app";
const COLLECTION: &str = "transcriptions";

pub struct HistoryStore {
    client: reqwest::Client,
    base_url: String,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_base_url(format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
            PROJECT_ID
        ))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Entries owned by `uid`, newest first.
    pub async fn list(&self, id_token: &str, uid: &str) -> Result<Vec<HistoryEntry>> {
        let url = format!("{}:runQuery", self.base_url);
        let query = json!({
            "structuredQuery": {
                "from": [{ "collectionId": COLLECTION }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": "userId" },
                        "op": "EQUAL",
                        "value": { "stringValue": uid },
                    }
                },
                "orderBy": [
                    { "field": { "fieldPath": "createdAt" }, "direction": "DESCENDING" }
                ],
            }
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(id_token)
            .json(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::InvalidState(format!(
                "History query failed ({}): {}",
                status, body
            )));
        }

        let rows: Vec<Value> = response.json().await?;
        let entries = rows
            .iter()
            .filter_map(|row| row.get("document"))
            .filter_map(entry_from_document)
            .collect();
        Ok(entries)
    }

    /// Best-effort write: failures are logged and swallowed here, the
    /// primary flow never sees them.
    pub async fn append(&self, id_token: &str, uid: &str, filename: &str, text: &str) {
        if let Err(e) = self.try_append(id_token, uid, filename, text).await {
            warn!("History write failed (ignored): {}", e);
        }
    }

    async fn try_append(&self, id_token: &str, uid: &str, filename: &str, text: &str) -> Result<()> {
        let url = format!("{}/{}", self.base_url, COLLECTION);
        let body = new_entry_fields(uid, filename, text);

        let response = self
            .client
            .post(&url)
            .bearer_auth(id_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::InvalidState(format!(
                "History write rejected ({})",
                status
            )));
        }

        debug!("History entry stored for uid={}", uid);
        Ok(())
    }

    /// Bulk-delete every entry owned by `uid`. Returns the number removed.
    pub async fn clear(&self, id_token: &str, uid: &str) -> Result<usize> {
        let entries = self.list(id_token, uid).await?;
        let mut deleted = 0;

        for entry in &entries {
            let url = format!("{}/{}/{}", self.base_url, COLLECTION, entry.id);
            let response = self
                .client
                .delete(&url)
                .bearer_auth(id_token)
                .send()
                .await?;
            if response.status().is_success() {
                deleted += 1;
            } else {
                warn!("Could not delete history entry {}", entry.id);
            }
        }

        Ok(deleted)
    }
}

/// Document body for a new history record. The `userId` stamped here is the
/// same value `list` filters on; if the two ever diverge, entries become
/// invisible to their owner.
fn new_entry_fields(uid: &str, filename: &str, text: &str) -> Value {
    json!({
        "fields": {
            "userId": { "stringValue": uid },
            "filename": { "stringValue": filename },
            "text": { "stringValue": text },
            "createdAt": { "timestampValue": chrono::Utc::now().to_rfc3339() },
        }
    })
}

/// Map a Firestore document resource onto a `HistoryEntry`. Rows without a
/// document (cursor-only responses) and malformed field wrappers are skipped.
fn entry_from_document(doc: &Value) -> Option<HistoryEntry> {
    let name = doc.get("name")?.as_str()?;
    let id = name.rsplit('/').next()?.to_string();
    let field = |key: &str, kind: &str| -> Option<String> {
        doc.pointer(&format!("/fields/{}/{}", key, kind))
            .and_then(|v| v.as_str())
            .map(String::from)
    };

    Some(HistoryEntry {
        id,
        user_id: field("userId", "stringValue").unwrap_or_default(),
        filename: field("filename", "stringValue").unwrap_or_default(),
        text: field("text", "stringValue").unwrap_or_default(),
        created_at: field("createdAt", "timestampValue").unwrap_or_default(),
    })
}
