use crate::browser::BrowserState;
use crate::commands::{CmdMessage, CmdResult};
use crate::loader::{self, LoadOptions, LoadingSignal};
use crate::source::SourceFetcher;
use rand::Rng;
use tokio_util::sync::CancellationToken;
use tracing::error;

/// Everything the load command needs besides the state and the random source.
pub struct LoadRequest<'a, F: SourceFetcher + ?Sized> {
    pub fetcher: &'a F,
    pub names: &'a [String],
    pub options: &'a LoadOptions,
    pub signal: &'a LoadingSignal,
    pub cancel: &'a CancellationToken,
}

/// Loads all sources and publishes the directory and its display order.
///
/// Never fails: per-source problems become warnings, and an aggregate
/// failure leaves an empty directory plus an error message.
pub async fn run<F, R>(
    state: &BrowserState,
    request: LoadRequest<'_, F>,
    rng: &mut R,
) -> (BrowserState, CmdResult)
where
    F: SourceFetcher + ?Sized,
    R: Rng + ?Sized,
{
    let loading = state.on_load_started();
    request.signal.publish(loading.view());

    match loader::load(
        request.fetcher,
        request.names,
        request.options,
        request.signal,
        request.cancel,
    )
    .await
    {
        Ok(outcome) => {
            let next = loading.on_loaded(outcome.directory, rng);
            let mut result = CmdResult::default();
            for (name, reason) in outcome.report.failures() {
                result.add_message(CmdMessage::warning(format!(
                    "Skipped source {}: {}",
                    name, reason
                )));
            }
            if next.directory().is_empty() {
                result.add_message(CmdMessage::info("No profiles found."));
            } else {
                result.add_message(CmdMessage::success(format!(
                    "Loaded {} profiles from {} of {} sources.",
                    next.directory().len(),
                    outcome.report.loaded_count(),
                    outcome.report.sources.len()
                )));
            }
            let view = next.view();
            request.signal.publish(view.clone());
            (next, result.with_report(outcome.report).with_view(view))
        }
        Err(err) => {
            error!(error = %err, "profile loading failed");
            let next = loading.on_load_failed();
            request.signal.publish(next.view());
            let mut result = CmdResult::default().with_view(next.view());
            result.add_message(CmdMessage::error(format!("Loading failed: {}", err)));
            (next, result)
        }
    }
}
