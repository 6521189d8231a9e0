//! # API Facade
//!
//! [`DirectoryApi`] is the single entry point for a UI. It owns the fetcher,
//! the source list, the current [`BrowserState`] and the load plumbing
//! (loading signal, cancellation token, random source), and dispatches each
//! call to the matching command.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and `browser.rs`
//! - **I/O to the user**: no stdout or stderr; results are returned as
//!   [`CmdResult`] values
//!
//! ## Generic Over SourceFetcher
//!
//! - Production: `DirectoryApi<FileFetcher>` or `DirectoryApi<HttpFetcher>`
//! - Testing: `DirectoryApi<InMemoryFetcher>`
//!
//! [`BrowserState`]: crate::browser::BrowserState

use crate::browser::{BrowserState, PagePolicy};
use crate::commands::{self, load::LoadRequest};
use crate::error::{DevDisplayError, Result};
use crate::loader::{LoadOptions, LoadingSignal};
use crate::model::SearchQuery;
use crate::source::SourceFetcher;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

pub struct DirectoryApi<F: SourceFetcher> {
    fetcher: F,
    names: Vec<String>,
    options: LoadOptions,
    state: BrowserState,
    signal: LoadingSignal,
    cancel: CancellationToken,
    rng: StdRng,
    loaded: bool,
}

impl<F: SourceFetcher> DirectoryApi<F> {
    pub fn new(fetcher: F, names: Vec<String>, policy: PagePolicy) -> Self {
        Self {
            fetcher,
            names,
            options: LoadOptions::default(),
            state: BrowserState::new(policy),
            signal: LoadingSignal::new(),
            cancel: CancellationToken::new(),
            rng: StdRng::from_entropy(),
            loaded: false,
        }
    }

    /// Use a fixed seed for the display-order shuffle.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Loads every source once. A second call is rejected.
    pub async fn load(&mut self) -> Result<commands::CmdResult> {
        if self.loaded {
            return Err(DevDisplayError::Api(
                "profiles are loaded once per session".into(),
            ));
        }
        self.loaded = true;

        let request = LoadRequest {
            fetcher: &self.fetcher,
            names: &self.names,
            options: &self.options,
            signal: &self.signal,
            cancel: &self.cancel,
        };
        let (state, result) = commands::load::run(&self.state, request, &mut self.rng).await;
        self.state = state;
        Ok(result)
    }

    pub fn search(&mut self, query: SearchQuery) -> commands::CmdResult {
        let (state, result) = commands::search::run(&self.state, query);
        self.state = state;
        result
    }

    pub fn clear_search(&mut self) -> commands::CmdResult {
        let (state, result) = commands::search::clear(&self.state);
        self.state = state;
        result
    }

    pub fn next_page(&mut self) -> commands::CmdResult {
        let (state, result) = commands::page::next(&self.state);
        self.state = state;
        result
    }

    pub fn prev_page(&mut self) -> commands::CmdResult {
        let (state, result) = commands::page::prev(&self.state);
        self.state = state;
        result
    }

    pub fn go_to_page(&mut self, page: usize) -> commands::CmdResult {
        let (state, result) = commands::page::advance_to(&self.state, page);
        self.state = state;
        result
    }

    pub fn view(&self) -> commands::CmdResult {
        commands::CmdResult::default().with_view(self.state.view())
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.signal.subscribe()
    }

    /// Pages published by [`load`](Self::load): the placeholder page while
    /// sources are in flight, then the first page of the display order.
    pub fn subscribe_view(&self) -> watch::Receiver<PageView> {
        self.signal.subscribe_view()
    }

    /// Token that aborts an in-flight [`load`](Self::load) when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

pub use crate::browser::PageView;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::loader::{LoadReport, SourceReport, SourceStatus};
