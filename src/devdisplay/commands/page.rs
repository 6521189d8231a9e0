use crate::browser::BrowserState;
use crate::commands::CmdResult;

pub fn next(state: &BrowserState) -> (BrowserState, CmdResult) {
    let next = state.on_next_page();
    let result = CmdResult::default().with_view(next.view());
    (next, result)
}

pub fn prev(state: &BrowserState) -> (BrowserState, CmdResult) {
    let next = state.on_prev_page();
    let result = CmdResult::default().with_view(next.view());
    (next, result)
}

/// Walks forward to `page` one step at a time, stopping at the last page.
pub fn advance_to(state: &BrowserState, page: usize) -> (BrowserState, CmdResult) {
    let mut current = state.clone();
    while current.current_page() < page {
        let moved = current.on_next_page();
        if moved.current_page() == current.current_page() {
            break;
        }
        current = moved;
    }
    let result = CmdResult::default().with_view(current.view());
    (current, result)
}
