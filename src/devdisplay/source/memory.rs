use super::SourceFetcher;
use crate::error::{DevDisplayError, Result};
use crate::model::ProfileRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Clone)]
enum Entry {
    Body(String),
    Fail(String),
    Pending,
}

/// In-memory fetcher for testing.
///
/// Sources are registered by name with a canned body, a failure, or as
/// never resolving. Any source may also be delayed so tests can control the
/// order in which fetches complete.
#[derive(Default)]
pub struct InMemoryFetcher {
    entries: HashMap<String, Entry>,
    delays: HashMap<String, Duration>,
    fetches: AtomicUsize,
}

impl InMemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(self, name: &str, records: &[ProfileRecord]) -> Self {
        let body = serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string());
        self.with_body(name, body)
    }

    pub fn with_body(mut self, name: &str, body: impl Into<String>) -> Self {
        self.entries.insert(name.to_string(), Entry::Body(body.into()));
        self
    }

    pub fn with_failure(mut self, name: &str, reason: impl Into<String>) -> Self {
        self.entries.insert(name.to_string(), Entry::Fail(reason.into()));
        self
    }

    /// A source whose fetch never completes.
    pub fn with_pending(mut self, name: &str) -> Self {
        self.entries.insert(name.to_string(), Entry::Pending);
        self
    }

    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    /// Total number of fetches issued so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceFetcher for InMemoryFetcher {
    async fn fetch(&self, name: &str) -> Result<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(name) {
            tokio::time::sleep(*delay).await;
        }

        match self.entries.get(name).cloned() {
            Some(Entry::Body(body)) => Ok(body),
            Some(Entry::Fail(reason)) => Err(DevDisplayError::source_failure(name, reason)),
            Some(Entry::Pending) => std::future::pending().await,
            None => Err(DevDisplayError::source_failure(name, "not found")),
        }
    }

    fn locate(&self, name: &str) -> String {
        format!("memory://{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_registered_records() {
        let fetcher =
            InMemoryFetcher::new().with_records("a.json", &[ProfileRecord::new("Ada", "London")]);
        let body = fetcher.fetch("a.json").await.unwrap();
        assert!(body.contains("Ada"));
        assert_eq!(fetcher.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_and_failing_sources_error() {
        let fetcher = InMemoryFetcher::new().with_failure("down.json", "503");
        assert!(fetcher.fetch("down.json").await.is_err());
        assert!(fetcher.fetch("missing.json").await.is_err());
        assert_eq!(fetcher.fetch_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_source_never_resolves() {
        let fetcher = InMemoryFetcher::new().with_pending("hang.json");
        let outcome =
            tokio::time::timeout(Duration::from_secs(60), fetcher.fetch("hang.json")).await;
        assert!(outcome.is_err());
    }
}
