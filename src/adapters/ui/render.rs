//! Result, error and history panels.
//!
//! `format_*` functions build the plain text; `print_*` add color and write to stdout.

use crate::domain::{AnalysisResult, HistoryEntry, ProviderKind, Sentiment};
use crate::usecases::AnalysisHistory;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stdout};

const POSITIVE_GREEN: Color = Color::Rgb {
    r: 0x38,
    g: 0xa1,
    b: 0x69,
};
const NEGATIVE_RED: Color = Color::Rgb {
    r: 0xe5,
    g: 0x3e,
    b: 0x3e,
};
const MUTED: Color = Color::Rgb {
    r: 0x4a,
    g: 0x55,
    b: 0x68,
};

fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => POSITIVE_GREEN,
        Sentiment::Negative => NEGATIVE_RED,
    }
}

/// "Positive" / "Negative".
fn capitalized(sentiment: Sentiment) -> String {
    let s = sentiment.as_str();
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn provider_icon(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::Custom => "🤖",
        ProviderKind::Chat => "🦙",
    }
}

pub fn format_result(result: &AnalysisResult) -> String {
    format!(
        "Analysis Result:\n  Sentiment:  {}\n  Confidence: {}",
        capitalized(result.sentiment),
        result.confidence_percent()
    )
}

pub fn format_history_entry(entry: &HistoryEntry) -> String {
    format!(
        "  Text:   {}\n  {} Model:  {}\n  Result: {} ({})\n  Time:   {}",
        entry.text,
        provider_icon(entry.provider),
        entry.provider,
        entry.result.sentiment,
        entry.result.confidence_percent(),
        entry.timestamp.format("%Y-%m-%d %H:%M:%S")
    )
}

fn print_colored(color: Color, text: &str) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    for line in text.lines() {
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
    }
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

pub fn print_result(result: &AnalysisResult) {
    println!();
    print_colored(sentiment_color(result.sentiment), &format_result(result));
    println!();
}

pub fn print_error(message: &str) {
    println!();
    print_colored(NEGATIVE_RED, &format!("✗ {}", message));
    println!();
}

pub fn print_history(history: &AnalysisHistory) {
    if history.is_empty() {
        print_colored(MUTED, "No analyses yet.");
        return;
    }
    print_colored(MUTED, &format!("Analysis History ({})", history.len()));
    for entry in history.iter() {
        print_colored(sentiment_color(entry.result.sentiment), &format_history_entry(entry));
        println!();
    }
}
