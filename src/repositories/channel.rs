//! Channel record store implementations
//!
//! [`JsonLinesChannelRepository`] reads the datastore format written by the
//! scraping tooling: one JSON document per line, append-only. A later line
//! carrying an existing `_id` replaces that document, a line with
//! `"$$deleted": true` removes it, and `$$indexCreated` lines describe
//! indexes and carry no data.

use async_trait::async_trait;
use indexmap::IndexSet;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

use super::traits::ChannelRepository;
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::ScheduleRecord;

/// Record store backed by a JSON-lines datastore file
#[derive(Debug, Clone)]
pub struct JsonLinesChannelRepository {
    path: PathBuf,
}

impl JsonLinesChannelRepository {
    /// Create a repository reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load_documents(&self) -> RepositoryResult<Vec<Value>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            RepositoryError::connection_failed(format!(
                "cannot read {}: {e}",
                self.path.display()
            ))
        })?;
        parse_documents(&contents, &self.path.display().to_string())
    }
}

/// Replay datastore lines into the live document set, in first-insert order
fn parse_documents(contents: &str, origin: &str) -> RepositoryResult<Vec<Value>> {
    let mut documents: Vec<Option<Value>> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let document: Value = serde_json::from_str(line).map_err(|e| {
            RepositoryError::query_failed(origin, format!("line {}: {e}", line_no + 1))
        })?;
        if !document.is_object() {
            return Err(RepositoryError::query_failed(
                origin,
                format!("line {}: expected a JSON object", line_no + 1),
            ));
        }
        if document.get("$$indexCreated").is_some() {
            continue;
        }

        let id = document
            .get("_id")
            .and_then(Value::as_str)
            .map(str::to_string);
        let deleted = document
            .get("$$deleted")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        match id {
            Some(id) if deleted => {
                if let Some(pos) = positions.get(&id) {
                    documents[*pos] = None;
                }
            }
            Some(id) => match positions.get(&id) {
                Some(pos) => documents[*pos] = Some(document),
                None => {
                    positions.insert(id, documents.len());
                    documents.push(Some(document));
                }
            },
            None if deleted => {}
            None => documents.push(Some(document)),
        }
    }

    Ok(documents.into_iter().flatten().collect())
}

#[async_trait]
impl ChannelRepository for JsonLinesChannelRepository {
    async fn find_by_xmltv_ids(
        &self,
        xmltv_ids: &IndexSet<String>,
    ) -> RepositoryResult<Vec<ScheduleRecord>> {
        let documents = self.load_documents().await?;
        let total = documents.len();

        let mut records = Vec::new();
        for document in documents {
            let matches = document
                .get("xmltv_id")
                .and_then(Value::as_str)
                .is_some_and(|id| xmltv_ids.contains(id));
            if matches {
                records.push(serde_json::from_value::<ScheduleRecord>(document)?);
            }
        }

        debug!(
            "Record store {}: {} of {} documents matched {} identifiers",
            self.path.display(),
            records.len(),
            total,
            xmltv_ids.len()
        );
        Ok(records)
    }
}

/// Vector-backed record store
#[derive(Debug, Clone, Default)]
pub struct InMemoryChannelRepository {
    records: Vec<ScheduleRecord>,
}

impl InMemoryChannelRepository {
    pub fn new(records: Vec<ScheduleRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl ChannelRepository for InMemoryChannelRepository {
    async fn find_by_xmltv_ids(
        &self,
        xmltv_ids: &IndexSet<String>,
    ) -> RepositoryResult<Vec<ScheduleRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|record| xmltv_ids.contains(&record.xmltv_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn ids(values: &[&str]) -> IndexSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn write_store(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[tokio::test]
    async fn test_replays_updates_and_deletes() {
        let store = write_store(&[
            r#"{"_id":"1","xmltv_id":"One.us","name":"One","logo":null}"#,
            r#"{"_id":"2","xmltv_id":"Two.us","name":"Two"}"#,
            "",
            r#"{"$$indexCreated":{"fieldName":"xmltv_id"}}"#,
            r#"{"_id":"3","xmltv_id":"One.us","name":"One HD"}"#,
            r#"{"_id":"1","xmltv_id":"One.us","name":"One","logo":"https://l/1.png"}"#,
            r#"{"_id":"2","$$deleted":true}"#,
        ]);
        let repo = JsonLinesChannelRepository::new(store.path());

        let records = repo
            .find_by_xmltv_ids(&ids(&["One.us", "Two.us"]))
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "One");
        assert_eq!(records[0].logo.as_deref(), Some("https://l/1.png"));
        assert_eq!(records[1].name, "One HD");
    }

    #[tokio::test]
    async fn test_filters_by_identifier() {
        let store = write_store(&[
            r#"{"xmltv_id":"One.us","name":"One"}"#,
            r#"{"xmltv_id":"Three.fr","name":"Trois"}"#,
            r#"{"name":"No id"}"#,
        ]);
        let repo = JsonLinesChannelRepository::new(store.path());

        let records = repo.find_by_xmltv_ids(&ids(&["Three.fr"])).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Trois");

        assert!(repo.find_by_xmltv_ids(&ids(&[])).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_null_name_reads_as_empty() {
        let store = write_store(&[r#"{"_id":"1","xmltv_id":"One.us","name":null,"logo":null}"#]);
        let repo = JsonLinesChannelRepository::new(store.path());

        let records = repo.find_by_xmltv_ids(&ids(&["One.us"])).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "");
        assert_eq!(records[0].logo, None);
    }

    #[tokio::test]
    async fn test_malformed_line_is_fatal() {
        let store = write_store(&[r#"{"xmltv_id":"One.us","name":"One"}"#, "{not json"]);
        let repo = JsonLinesChannelRepository::new(store.path());

        let err = repo
            .find_by_xmltv_ids(&ids(&["One.us"]))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::QueryFailed { .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[tokio::test]
    async fn test_malformed_matching_record_is_fatal() {
        let store = write_store(&[r#"{"xmltv_id":"One.us","name":42}"#]);
        let repo = JsonLinesChannelRepository::new(store.path());

        let err = repo
            .find_by_xmltv_ids(&ids(&["One.us"]))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::SerializationFailed(_)));
    }

    #[tokio::test]
    async fn test_missing_store_is_unreachable() {
        let dir = tempfile::TempDir::new().unwrap();
        let repo = JsonLinesChannelRepository::new(dir.path().join("channels.db"));

        let err = repo
            .find_by_xmltv_ids(&ids(&["One.us"]))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::ConnectionFailed { .. }));
    }

    #[tokio::test]
    async fn test_in_memory_repository() {
        let repo = InMemoryChannelRepository::new(vec![
            ScheduleRecord {
                xmltv_id: "A.us".to_string(),
                name: "A".to_string(),
                logo: None,
            },
            ScheduleRecord {
                xmltv_id: "B.us".to_string(),
                name: "B".to_string(),
                logo: None,
            },
        ]);

        let records = repo.find_by_xmltv_ids(&ids(&["B.us"])).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].xmltv_id, "B.us");
    }
}
