// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the pkgfind CLI.
//!
//! Result tables drawn in boxes, colored to match the terminal: OneDark for
//! dark backgrounds, One Light for light ones. Respects `NO_COLOR` and falls
//! back to plain text when stdout is not a TTY, so piping into `grep` or a
//! file gives clean output.
//!
//! # Theme detection order
//!
//! 1. `PKGFIND_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use pkgfind::{CatalogStats, MatchedField, NumericSummary, Record, ScoredResult, TextField};
use pkgfind::utils::format_thousands;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// Column widths for result rows
const CODE_WIDTH: usize = 12;
const FIELD_WIDTH: usize = 17;
const SOURCE_WIDTH: usize = 10;
const PRICE_WIDTH: usize = 9;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("PKGFIND_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background colors 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, or nothing when colors are off
fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Cut plain text to `max` chars, marking the cut with "…"
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (color, reset) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        color,
        reset,
        content,
        " ".repeat(pad),
        color,
        reset
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (color, reset) = border(GRAY);
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        color,
        reset,
        label_part,
        color,
        "─".repeat(remaining),
        reset
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let (color, reset) = border(GRAY);
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        color,
        reset,
        label_part,
        color,
        "─".repeat(remaining),
        reset
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (color, reset) = border(GRAY);
    println!("{}└{}┘{}", color, "─".repeat(BOX_WIDTH), reset);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded matched field label
pub fn matched_field_label(field: MatchedField) -> String {
    let label = field.as_str();
    if !use_colors() {
        return label.to_string();
    }
    let color = match field {
        MatchedField::Exact => BRIGHT_GREEN(),
        MatchedField::Code => GREEN(),
        MatchedField::Name => BLUE(),
        MatchedField::Description => MAGENTA(),
        MatchedField::FullDescription => MAGENTA(),
    };
    format!("{}{}{}", color, label, RESET)
}

/// Color-coded score value (green=strong, yellow=fair, red=weak)
pub fn score_value(score: f64) -> String {
    let text = format!("{:>6.1}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 100.0 {
        BRIGHT_GREEN()
    } else if score >= 80.0 {
        GREEN()
    } else if score >= 60.0 {
        YELLOW()
    } else {
        RED()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Price as "15,000đ", or "-" when unknown
pub fn price_text(price: Option<f64>) -> String {
    price.map_or_else(|| "-".to_string(), |p| format!("{}đ", format_thousands(p)))
}

/// Data volume as "1.5GB", or "-" when unknown
pub fn data_text(data_gb: Option<f64>) -> String {
    data_gb.map_or_else(|| "-".to_string(), |d| format!("{}GB", d))
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a result list as a box, one package per line
pub fn print_results(label: &str, results: &[ScoredResult]) {
    section_top(&format!("{} ({})", label, results.len()));
    row(&format!(
        " {} {} {} {} {}  {}",
        pad_left("SCORE", 6),
        pad_right("CODE", CODE_WIDTH),
        pad_right("FIELD", FIELD_WIDTH),
        pad_right("SOURCE", SOURCE_WIDTH),
        pad_left("PRICE", PRICE_WIDTH),
        "NAME"
    ));

    for result in results {
        row(&result_row(result));
    }
    section_bot();
}

/// One result line, cut so it never runs past the box
fn result_row(result: &ScoredResult) -> String {
    let record = &result.record;
    let line = format!(
        " {} {} {} {} {}  ",
        score_value(result.similarity_score),
        themed(
            BRIGHT_CYAN,
            &[BOLD],
            &pad_right(&truncate(&record.code, CODE_WIDTH), CODE_WIDTH)
        ),
        pad_right(&matched_field_label(result.matched_field), FIELD_WIDTH),
        pad_right(
            &truncate(record.source.as_deref().unwrap_or("-"), SOURCE_WIDTH),
            SOURCE_WIDTH
        ),
        pad_left(&price_text(record.price), PRICE_WIDTH),
    );
    let room = BOX_WIDTH.saturating_sub(visible_len(&line));
    let name = record.name.as_deref().unwrap_or("");
    format!("{}{}", line, truncate(name, room))
}

/// Print one package in full
pub fn print_record(result: &ScoredResult) {
    section_top(&result.record.code);
    for (key, value) in record_fields(&result.record) {
        row(&format!(
            " {} {}",
            themed(GRAY, &[], &pad_right(&key, 18)),
            truncate(&value, BOX_WIDTH - 20)
        ));
    }
    section_bot();
}

/// Label and value for every field worth showing, in display order
fn record_fields(record: &Record) -> Vec<(String, String)> {
    let mut fields = vec![
        ("name".to_string(), record.name.as_deref().unwrap_or("-").to_string()),
        ("source".to_string(), record.source.as_deref().unwrap_or("-").to_string()),
        ("price".to_string(), price_text(record.price)),
        ("data".to_string(), data_text(record.data_gb)),
    ];
    if let Some(days) = record.cycle_days {
        fields.push(("cycle".to_string(), format!("{} days", days)));
    }
    if let Some(description) = record.text(TextField::Description) {
        fields.push(("description".to_string(), description.to_string()));
    }
    if let Some(full) = record.text(TextField::FullDescription) {
        fields.push(("full description".to_string(), full.to_string()));
    }
    for (key, value) in &record.extra {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        fields.push((key.clone(), text));
    }
    fields
}

/// Print autocomplete suggestions
pub fn print_suggestions(partial: &str, suggestions: &[String]) {
    section_top(&format!("SUGGESTIONS FOR \"{}\"", truncate(partial, 40)));
    for (i, code) in suggestions.iter().enumerate() {
        row(&format!(" {:>2}. {}", i + 1, themed(BRIGHT_CYAN, &[BOLD], code)));
    }
    section_bot();
}

/// Print catalog statistics
pub fn print_stats(stats: &CatalogStats) {
    section_top("CATALOG");
    row(&format!(" Total packages: {}", themed(BRIGHT_GREEN, &[BOLD], &stats.total.to_string())));

    if !stats.sources.is_empty() {
        section_mid("SOURCES");
        for (source, count) in stats.sources_by_count() {
            row(&format!(" {} {:>6}", pad_right(&truncate(source, 30), 30), count));
        }
    }

    let ranges: [(&str, &Option<NumericSummary>, fn(Option<f64>) -> String); 3] = [
        ("PRICE", &stats.price, price_text),
        ("DATA", &stats.data_gb, data_text),
        ("CYCLE (DAYS)", &stats.cycle_days, |v| v.map_or_else(String::new, |d| d.to_string())),
    ];
    for (label, summary, fmt) in ranges {
        if let Some(summary) = summary {
            section_mid(label);
            row(&format!(
                " min {}  max {}  mean {}  median {}",
                fmt(Some(summary.min)),
                fmt(Some(summary.max)),
                fmt(Some(summary.mean.round())),
                fmt(Some(summary.median))
            ));
        }
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
