use crate::browser::BrowserState;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Criterion, SearchQuery};

pub fn run(state: &BrowserState, query: SearchQuery) -> (BrowserState, CmdResult) {
    let unrecognized = matches!(query.criterion, Criterion::Unrecognized(_));
    let criterion = query.criterion.clone();
    let next = state.on_search(query);

    let mut result = CmdResult::default().with_view(next.view());
    if unrecognized {
        result.add_message(CmdMessage::warning(format!(
            "Unknown search criterion '{}'; use name, location or skill.",
            criterion
        )));
    } else if next.has_results() {
        let count = next.filtered().len();
        result.add_message(CmdMessage::info(format!(
            "{} profile{} found.",
            count,
            if count == 1 { "" } else { "s" }
        )));
    }
    (next, result)
}

pub fn clear(state: &BrowserState) -> (BrowserState, CmdResult) {
    let next = state.on_clear_search();
    let result = CmdResult::default().with_view(next.view());
    (next, result)
}
