//! In-memory job records and lifecycle events.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::{RwLock, broadcast};
use uuid::Uuid;

/// What a job produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    LayoutGeneration,
    Export,
}

/// Lifecycle state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Processing,
    Completed,
    Failed,
}

/// Record kept for every submitted job.
#[derive(Debug, Clone, Serialize)]
pub struct JobRecord {
    pub job_id: Uuid,
    pub kind: JobKind,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Result payload, present once the job completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Failure message, present once the job failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Event published on every job state transition.
#[derive(Debug, Clone)]
pub struct JobEvent {
    pub job_id: Uuid,
    pub status: JobStatus,
}

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Shared in-memory job store.
///
/// Jobs live for the process lifetime; there is no persistence. Cloning
/// is cheap and every clone sees the same records and event stream.
#[derive(Clone)]
pub struct JobStore {
    jobs: Arc<RwLock<HashMap<Uuid, JobRecord>>>,
    events: broadcast::Sender<JobEvent>,
}

impl JobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            jobs: Arc::new(RwLock::new(HashMap::new())),
            events,
        }
    }

    /// Insert a new `Processing` record and return its id.
    pub async fn create(&self, kind: JobKind) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let record = JobRecord {
            job_id: id,
            kind,
            status: JobStatus::Processing,
            created_at: now,
            updated_at: now,
            result: None,
            error: None,
        };
        self.jobs.write().await.insert(id, record);
        self.publish(id, JobStatus::Processing);
        id
    }

    /// Fetch a job record by id.
    pub async fn get(&self, id: Uuid) -> Option<JobRecord> {
        self.jobs.read().await.get(&id).cloned()
    }

    /// Mark a job completed with its result payload.
    pub async fn complete(&self, id: Uuid, result: Value) {
        self.transition(id, JobStatus::Completed, Some(result), None)
            .await;
    }

    /// Mark a job failed with an error message.
    pub async fn fail(&self, id: Uuid, error: String) {
        self.transition(id, JobStatus::Failed, None, Some(error))
            .await;
    }

    /// Subscribe to job state transitions (in-process only).
    pub fn subscribe(&self) -> broadcast::Receiver<JobEvent> {
        self.events.subscribe()
    }

    async fn transition(
        &self,
        id: Uuid,
        status: JobStatus,
        result: Option<Value>,
        error: Option<String>,
    ) {
        let mut jobs = self.jobs.write().await;
        if let Some(record) = jobs.get_mut(&id) {
            record.status = status;
            record.result = result;
            record.error = error;
            record.updated_at = Utc::now();
            drop(jobs);
            self.publish(id, status);
        }
    }

    fn publish(&self, job_id: Uuid, status: JobStatus) {
        // Nobody listening is fine; events are best-effort.
        let _ = self.events.send(JobEvent { job_id, status });
    }
}

impl Default for JobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_then_complete() {
        let store = JobStore::new();
        let id = store.create(JobKind::Export).await;

        let record = store.get(id).await.unwrap();
        assert_eq!(record.status, JobStatus::Processing);
        assert!(record.result.is_none());

        store.complete(id, json!({"ok": true})).await;

        let record = store.get(id).await.unwrap();
        assert_eq!(record.status, JobStatus::Completed);
        assert_eq!(record.result.unwrap()["ok"], true);
        assert!(record.updated_at >= record.created_at);
    }

    #[tokio::test]
    async fn test_fail_records_error() {
        let store = JobStore::new();
        let id = store.create(JobKind::LayoutGeneration).await;

        store.fail(id, "backend unavailable".to_string()).await;

        let record = store.get(id).await.unwrap();
        assert_eq!(record.status, JobStatus::Failed);
        assert_eq!(record.error.as_deref(), Some("backend unavailable"));
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let store = JobStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions() {
        let store = JobStore::new();
        let mut events = store.subscribe();

        let id = store.create(JobKind::Export).await;
        store.complete(id, json!({})).await;

        let first = events.recv().await.unwrap();
        assert_eq!(first.status, JobStatus::Processing);
        let second = events.recv().await.unwrap();
        assert_eq!(second.job_id, id);
        assert_eq!(second.status, JobStatus::Completed);
    }

    #[tokio::test]
    async fn test_record_serializes_without_empty_fields() {
        let store = JobStore::new();
        let id = store.create(JobKind::Export).await;
        let value = serde_json::to_value(store.get(id).await.unwrap()).unwrap();

        assert_eq!(value["kind"], "export");
        assert_eq!(value["status"], "processing");
        assert!(value.get("result").is_none());
        assert!(value.get("error").is_none());
    }
}
