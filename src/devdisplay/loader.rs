//! # Source Loader
//!
//! Fans out one fetch per manifest entry and fans the results back in.
//!
//! All fetches are polled concurrently on the calling task (nothing is
//! spawned) and the loader waits until every one has settled. Results are
//! collected positionally, so the directory is always in manifest order no
//! matter which source answered first.
//!
//! ## Failure Handling
//!
//! - A source that cannot be read or parsed is logged, recorded as
//!   [`SourceStatus::Failed`] and contributes no records. The other sources
//!   are unaffected.
//! - Cancellation, or a panic escaping a source future, fails the whole load
//!   with [`DevDisplayError::Cancelled`] / [`DevDisplayError::Aggregate`].
//!
//! The [`LoadingSignal`] is raised for the duration of the call and lowered
//! when it settles, on every exit path.

use crate::browser::PageView;
use crate::error::{DevDisplayError, Result};
use crate::model::ProfileRecord;
use crate::source::{parse_payload, SourceFetcher};
use futures::future::join_all;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Per-source limit; a source exceeding it counts as failed.
    pub fetch_timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    Loaded(usize),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub name: String,
    pub location: String,
    pub status: SourceStatus,
}

/// Per-source outcome of a load, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub sources: Vec<SourceReport>,
}

impl LoadReport {
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sources.iter().filter_map(|s| match &s.status {
            SourceStatus::Failed(reason) => Some((s.name.as_str(), reason.as_str())),
            SourceStatus::Loaded(_) => None,
        })
    }

    pub fn loaded_count(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| matches!(s.status, SourceStatus::Loaded(_)))
            .count()
    }

    pub fn record_count(&self) -> usize {
        self.sources
            .iter()
            .map(|s| match s.status {
                SourceStatus::Loaded(n) => n,
                SourceStatus::Failed(_) => 0,
            })
            .sum()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub directory: Vec<ProfileRecord>,
    pub report: LoadReport,
}

/// Observable "loading" flag plus the latest published page.
///
/// Consumers call [`LoadingSignal::subscribe`] and watch the receiver; the
/// loader raises the flag on entry and lowers it when the load settles.
/// The load command publishes the placeholder page while fetches are in
/// flight and the first real page once they settle, see
/// [`LoadingSignal::subscribe_view`].
#[derive(Debug)]
pub struct LoadingSignal {
    tx: watch::Sender<bool>,
    view: watch::Sender<PageView>,
}

impl Default for LoadingSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        let (view, _rx) = watch::channel(PageView::default());
        Self { tx, view }
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    pub fn subscribe_view(&self) -> watch::Receiver<PageView> {
        self.view.subscribe()
    }

    pub fn publish(&self, view: PageView) {
        self.view.send_replace(view);
    }

    pub fn is_loading(&self) -> bool {
        *self.tx.borrow()
    }

    fn raise(&self) -> LoadingGuard<'_> {
        self.tx.send_replace(true);
        LoadingGuard { signal: self }
    }
}

struct LoadingGuard<'a> {
    signal: &'a LoadingSignal,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.signal.tx.send_replace(false);
    }
}

/// Loads every source in `names` and concatenates the results.
pub async fn load<F: SourceFetcher + ?Sized>(
    fetcher: &F,
    names: &[String],
    options: &LoadOptions,
    signal: &LoadingSignal,
    cancel: &CancellationToken,
) -> Result<LoadOutcome> {
    let _loading = signal.raise();
    info!(sources = names.len(), "loading profile sources");

    let fetches = names
        .iter()
        .map(|name| fetch_one(fetcher, name, options.fetch_timeout));
    let settled = AssertUnwindSafe(join_all(fetches)).catch_unwind();

    let results = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            warn!("profile loading cancelled");
            return Err(DevDisplayError::Cancelled);
        }
        joined = settled => joined.map_err(|_| {
            DevDisplayError::Aggregate("a source fetch panicked".to_string())
        })?,
    };

    let mut outcome = LoadOutcome::default();
    for (name, result) in names.iter().zip(results) {
        let location = fetcher.locate(name);
        let status = match result {
            Ok(records) => {
                debug!(source = %name, count = records.len(), "source loaded");
                let count = records.len();
                outcome.directory.extend(records);
                SourceStatus::Loaded(count)
            }
            Err(err) => {
                warn!(source = %name, %location, error = %err, "skipping source");
                SourceStatus::Failed(failure_reason(err))
            }
        };
        outcome.report.sources.push(SourceReport {
            name: name.clone(),
            location,
            status,
        });
    }

    info!(
        profiles = outcome.directory.len(),
        failed = names.len() - outcome.report.loaded_count(),
        "profile sources settled"
    );
    Ok(outcome)
}

async fn fetch_one<F: SourceFetcher + ?Sized>(
    fetcher: &F,
    name: &str,
    timeout: Option<Duration>,
) -> Result<Vec<ProfileRecord>> {
    let body = match timeout {
        Some(limit) => tokio::time::timeout(limit, fetcher.fetch(name))
            .await
            .map_err(|_| {
                DevDisplayError::source_failure(
                    name,
                    format!("timed out after {}ms", limit.as_millis()),
                )
            })??,
        None => fetcher.fetch(name).await?,
    };
    parse_payload(name, &body)
}

fn failure_reason(err: DevDisplayError) -> String {
    match err {
        DevDisplayError::Source { reason, .. } => reason,
        other => other.to_string(),
    }
}
