//! Terminal rendering for pages, source reports and messages.
//!
//! Layout math (truncation, padding) is done with display widths so that
//! names and bios with wide characters line up.

use colored::Colorize;
use devdisplay::api::{CmdMessage, LoadReport, MessageLevel, PageView, SourceStatus};
use devdisplay::model::{Mode, ProfileRecord};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 28;
const LOCATION_MARKER: &str = "⌖";
const PLACEHOLDER: &str = "░░░░░░░░░░░░░░░░░░░░░░░░";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_page(view: &PageView) -> String {
    let mut out = String::new();

    if let (Mode::Searching, Some(query)) = (view.mode, &view.query) {
        out.push_str(&format!(
            "{} {} {}\n\n",
            "Search".bold(),
            query.criterion.to_string().cyan(),
            format!("\"{}\"", query.value).italic()
        ));
    }

    if view.loading {
        for _ in 0..view.placeholders {
            out.push_str(&format!("  {}\n", PLACEHOLDER.dimmed()));
        }
        return out;
    }

    if !view.has_results {
        out.push_str("No results found.\n");
        return out;
    }

    if view.records.is_empty() {
        out.push_str("Nothing on this page.\n");
    }

    for (i, record) in view.records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_card(record));
    }

    if view.show_pagination {
        out.push_str(&format!(
            "\n{}\n",
            format!("Page {} of {}", view.current_page, view.total_pages).dimmed()
        ));
    }
    out
}

fn render_card(record: &ProfileRecord) -> String {
    let name = truncate_to_width(&record.name, NAME_WIDTH);
    let padding = NAME_WIDTH.saturating_sub(name.width());
    let location = format!("{} {}", LOCATION_MARKER, record.location);
    let location_width = LINE_WIDTH.saturating_sub(NAME_WIDTH + 2);

    let mut out = format!(
        "  {}{}{}\n",
        name.bold(),
        " ".repeat(padding),
        truncate_to_width(&location, location_width).dimmed()
    );

    if !record.skills.is_empty() {
        let skills = record
            .skills
            .iter()
            .map(|s| format!("[{}]", s))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            "    {}\n",
            truncate_to_width(&skills, LINE_WIDTH - 4).cyan()
        ));
    }

    let bio = record.bio.trim();
    if !bio.is_empty() {
        let bio: String = bio.chars().map(|c| if c == '\n' { ' ' } else { c }).collect();
        out.push_str(&format!("    {}\n", truncate_to_width(&bio, LINE_WIDTH - 4)));
    }

    let mut links: Vec<String> = Vec::new();
    if let Some(url) = record.avatar_url() {
        links.push(format!("avatar: {}", url));
    }
    if let Some(url) = record.portfolio_url() {
        links.push(url.to_string());
    }
    links.extend(
        record
            .social
            .iter()
            .filter(|(_, url)| !url.trim().is_empty())
            .map(|(platform, url)| format!("{}: {}", platform, url)),
    );
    if !links.is_empty() {
        out.push_str(&format!("    {}\n", links.join("  ").blue()));
    }
    out
}

pub fn render_report(report: &LoadReport) -> String {
    if report.sources.is_empty() {
        return "No sources listed.\n".to_string();
    }

    let mut out = String::new();
    for source in &report.sources {
        let line = match &source.status {
            SourceStatus::Loaded(count) => format!(
                "  {} {}  {}",
                "ok".green(),
                source.name,
                format!("{} profile{}", count, if *count == 1 { "" } else { "s" }).dimmed()
            ),
            SourceStatus::Failed(reason) => format!(
                "  {} {}  {}",
                "skipped".red(),
                source.name,
                truncate_to_width(reason, LINE_WIDTH / 2).dimmed()
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!(
        "\n{} of {} sources loaded, {} profiles\n",
        report.loaded_count(),
        report.sources.len(),
        report.record_count()
    ));
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
