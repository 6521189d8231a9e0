//! Argument parsing, handlers and terminal rendering for the binary.

pub mod args;
pub mod handlers;
pub mod render;
