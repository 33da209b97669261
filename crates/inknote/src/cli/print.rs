use colored::Colorize;
use inknoteapp::api::{CmdMessage, DoctorReport, MessageLevel, NotebookInfo, PageSummary};
use inknoteapp::brush::BrushPreset;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 72;
const COUNT_WIDTH: usize = 24;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_pages(pages: &[PageSummary]) {
    if pages.is_empty() {
        println!("No pages.");
        return;
    }
    let idx_width = pages.len().to_string().len() + 2;
    for page in pages {
        let (idx, title, padding, counts) = page_columns(page, idx_width);
        println!(
            "{}{}{}{}",
            idx.yellow(),
            title,
            " ".repeat(padding),
            counts.dimmed()
        );
    }
}

/// Splits a listing row into index, fitted title, padding and counts.
fn page_columns(page: &PageSummary, idx_width: usize) -> (String, String, usize, String) {
    let idx = format!("{:>width$} ", format!("{}.", page.index), width = idx_width);
    let counts = format!("{:>width$}", stroke_counts(page), width = COUNT_WIDTH);

    let available = LINE_WIDTH.saturating_sub(idx.width() + COUNT_WIDTH + 1);
    let title = truncate_to_width(&page.title, available);
    let padding = available.saturating_sub(title.width()) + 1;
    (idx, title, padding, counts)
}

fn stroke_counts(page: &PageSummary) -> String {
    let strokes = plural(page.strokes, "stroke");
    if page.highlighters == 0 {
        strokes
    } else {
        format!("{} ({} hl)", strokes, page.highlighters)
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

pub(super) fn print_info(info: &NotebookInfo) {
    println!("{}", info.name.bold());
    println!("  {:<10} {}", "file".dimmed(), info.location.display());
    println!("  {:<10} {}", "strategy".dimmed(), info.strategy);
    println!("  {:<10} {}", "pages".dimmed(), info.pages);
    println!(
        "  {:<10} {} ({} highlighter)",
        "strokes".dimmed(),
        info.strokes,
        info.highlighters
    );
}

pub(super) fn print_report(report: &DoctorReport) {
    match report {
        DoctorReport::Missing => println!("status: {}", "missing".yellow()),
        DoctorReport::Healthy { pages, strokes } => println!(
            "status: {} ({}, {})",
            "ok".green(),
            plural(*pages, "page"),
            plural(*strokes, "stroke")
        ),
        DoctorReport::Unreadable { kind, .. } => {
            println!("status: {} ({})", "unreadable".red(), kind)
        }
    }
}

pub(super) fn print_brushes(brushes: &[BrushPreset]) {
    for brush in brushes {
        let kind = if brush.is_highlighter {
            "highlighter"
        } else {
            "ink"
        };
        println!(
            "{:<12} {:>5} x {:<5} {} {}",
            brush.name.bold(),
            brush.width,
            brush.height,
            brush.color,
            kind.dimmed()
        );
    }
}

/// Cuts `s` to at most `max_width` terminal columns, ending in `…` when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
