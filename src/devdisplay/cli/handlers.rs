use super::args::{Cli, Commands};
use super::render::{render_messages, render_page, render_report};
use devdisplay::api::{CmdResult, DirectoryApi, PageView, SourceStatus};
use devdisplay::config::DevDisplayConfig;
use devdisplay::error::Result;
use devdisplay::model::SearchQuery;
use devdisplay::source::fs::FileFetcher;
use devdisplay::source::http::HttpFetcher;
use devdisplay::source::SourceFetcher;
use std::convert::Infallible;
use std::io::{self, BufRead, Write};
use tokio::sync::watch;
use tracing::debug;

pub struct AppContext {
    pub api: DirectoryApi<Box<dyn SourceFetcher>>,
    pub json: bool,
}

pub async fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    let views = ctx.api.subscribe_view();
    let json = ctx.json;
    let load = tokio::select! {
        result = ctx.api.load() => result?,
        never = show_loading(views, json) => match never {},
    };

    match cli.command {
        Some(Commands::List { page }) => handle_list(&mut ctx, load, page),
        Some(Commands::Search {
            value,
            criterion,
            page,
        }) => handle_search(&mut ctx, load, value, criterion, page),
        Some(Commands::Sources) => handle_sources(&ctx, load),
        Some(Commands::Browse) => handle_browse(&mut ctx, load),
        None => handle_list(&mut ctx, load, 1),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut config = DevDisplayConfig::load(&cli.root)?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = Some(base_url.clone());
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(policy) = cli.page_policy {
        config.page_policy = policy.into();
    }

    let names = config.source_names(&cli.root)?;
    let fetcher: Box<dyn SourceFetcher> = match &config.base_url {
        Some(base_url) => Box::new(HttpFetcher::new(base_url.clone())),
        None => Box::new(FileFetcher::new(config.data_path(&cli.root))),
    };
    debug!(sources = names.len(), ?config, "initialized context");

    let mut api = DirectoryApi::new(fetcher, names, config.page_policy)
        .with_options(config.load_options());
    if let Some(seed) = config.seed {
        api = api.with_seed(seed);
    }

    Ok(AppContext {
        api,
        json: cli.json,
    })
}

/// Draws the placeholder page on stderr while sources load. Never returns;
/// the caller drops it once the load settles.
async fn show_loading(mut views: watch::Receiver<PageView>, json: bool) -> Infallible {
    let mut shown = false;
    while views.changed().await.is_ok() {
        let view = views.borrow_and_update().clone();
        if view.loading && !shown && !json {
            eprint!("{}", render_page(&view));
            shown = true;
        }
    }
    std::future::pending().await
}

fn handle_list(ctx: &mut AppContext, load: CmdResult, page: usize) -> Result<()> {
    let result = ctx.api.go_to_page(page);
    print_result(ctx, &result)?;
    eprint!("{}", render_messages(&load.messages));
    Ok(())
}

fn handle_search(
    ctx: &mut AppContext,
    load: CmdResult,
    value: String,
    criterion: String,
    page: usize,
) -> Result<()> {
    let searched = ctx.api.search(SearchQuery::new(value, criterion));
    let result = ctx.api.go_to_page(page);
    print_result(ctx, &result)?;
    eprint!("{}", render_messages(&load.messages));
    eprint!("{}", render_messages(&searched.messages));
    Ok(())
}

fn handle_sources(ctx: &AppContext, load: CmdResult) -> Result<()> {
    let report = load.report.unwrap_or_default();
    if ctx.json {
        let sources: Vec<_> = report
            .sources
            .iter()
            .map(|s| {
                serde_json::json!({
                    "name": s.name,
                    "location": s.location,
                    "loaded": matches!(s.status, SourceStatus::Loaded(_)),
                    "detail": match &s.status {
                        SourceStatus::Loaded(n) => n.to_string(),
                        SourceStatus::Failed(reason) => reason.clone(),
                    },
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&sources)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

fn handle_browse(ctx: &mut AppContext, load: CmdResult) -> Result<()> {
    print_result(ctx, &load)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let result = match parse_browse_action(&line) {
            BrowseAction::Next => ctx.api.next_page(),
            BrowseAction::Prev => ctx.api.prev_page(),
            BrowseAction::Clear => ctx.api.clear_search(),
            BrowseAction::Search(query) => ctx.api.search(query),
            BrowseAction::Quit => return Ok(()),
            BrowseAction::Help => {
                println!("{}", BROWSE_HELP);
                continue;
            }
        };
        print_result(ctx, &result)?;
    }
}

const BROWSE_HELP: &str = "n: next page   p: previous page   c: clear search   q: quit
/name <text>   /location <text>   /skill <text>   (bare text searches names)";

#[derive(Debug, PartialEq, Eq)]
enum BrowseAction {
    Next,
    Prev,
    Clear,
    Quit,
    Help,
    Search(SearchQuery),
}

fn parse_browse_action(line: &str) -> BrowseAction {
    let line = line.trim();
    match line {
        "n" | "next" => BrowseAction::Next,
        "p" | "prev" => BrowseAction::Prev,
        "c" | "clear" => BrowseAction::Clear,
        "q" | "quit" | "exit" => BrowseAction::Quit,
        "" | "?" | "h" | "help" => BrowseAction::Help,
        _ => match line.strip_prefix('/') {
            Some(rest) => {
                let (criterion, value) = rest.split_once(' ').unwrap_or((rest, ""));
                BrowseAction::Search(SearchQuery::new(value.trim(), criterion))
            }
            None => BrowseAction::Search(SearchQuery::new(line, "name")),
        },
    }
}

fn print_result(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&result.view)?);
    } else {
        print!("{}", render_page(&result.view));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_navigation_words() {
        assert_eq!(parse_browse_action("n\n"), BrowseAction::Next);
        assert_eq!(parse_browse_action(" prev "), BrowseAction::Prev);
        assert_eq!(parse_browse_action("c"), BrowseAction::Clear);
        assert_eq!(parse_browse_action("q"), BrowseAction::Quit);
        assert_eq!(parse_browse_action(""), BrowseAction::Help);
    }

    #[test]
    fn test_parses_slash_search() {
        assert_eq!(
            parse_browse_action("/skill react native"),
            BrowseAction::Search(SearchQuery::new("react native", "skill"))
        );
        assert_eq!(
            parse_browse_action("/location"),
            BrowseAction::Search(SearchQuery::new("", "location"))
        );
    }

    #[test]
    fn test_bare_text_searches_names() {
        assert_eq!(
            parse_browse_action("Ada"),
            BrowseAction::Search(SearchQuery::new("Ada", "name"))
        );
    }
}
