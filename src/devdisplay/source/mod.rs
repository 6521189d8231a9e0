//! # Source Layer
//!
//! Profile data lives in many small JSON files, one or a handful of profiles
//! each, listed in a manifest. The [`SourceFetcher`] trait hides where those
//! files come from so the loader only deals with names and bodies.
//!
//! ## Implementations
//!
//! - [`fs::FileFetcher`]: reads `<data_dir>/<name>` from disk
//! - [`http::HttpFetcher`]: GETs `<base_url>/<name>`
//! - [`memory::InMemoryFetcher`]: canned bodies for tests, with failure,
//!   delay and never-resolving sources
//!
//! ## Payload Format
//!
//! A body is either a JSON array of profiles or a single profile object.
//! Anything else fails that one source (see [`parse_payload`]).

use crate::error::{DevDisplayError, Result};
use crate::model::ProfileRecord;
use async_trait::async_trait;
use serde::Deserialize;

pub mod fs;
pub mod http;
pub mod memory;

/// Fetches the raw body of one named source.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Fetch the body for `name`.
    async fn fetch(&self, name: &str) -> Result<String>;

    /// Human readable location of `name` (path or URL), for reports.
    fn locate(&self, name: &str) -> String;
}

#[async_trait]
impl<T: SourceFetcher + ?Sized> SourceFetcher for Box<T> {
    async fn fetch(&self, name: &str) -> Result<String> {
        (**self).fetch(name).await
    }

    fn locate(&self, name: &str) -> String {
        (**self).locate(name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Many(Vec<ProfileRecord>),
    One(Box<ProfileRecord>),
}

/// Parses one source body into its profiles.
pub fn parse_payload(name: &str, body: &str) -> Result<Vec<ProfileRecord>> {
    match serde_json::from_str::<Payload>(body) {
        Ok(Payload::Many(records)) => Ok(records),
        Ok(Payload::One(record)) => Ok(vec![*record]),
        Err(_) => Err(DevDisplayError::source_failure(
            name,
            "body is not a profile or a list of profiles",
        )),
    }
}
