#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::column::{expand_tabs, TAB_WIDTH},
};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A 1-based line/column pair. Columns are tab-expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// Returns the text of the 1-based `line` of `source`, without its line feed.
///
/// Line terminators are normalized the same way the lexer normalizes them, so
/// line numbers taken from tokens or errors always refer to the same text.
pub fn get_line(source: &str, line: usize) -> Option<String> {
    if line == 0 {
        return None;
    }

    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");
    normalized.split('\n').nth(line - 1).map(String::from)
}

/// Renders `error` as a caret diagnostic pointing into `source`.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    render_error_with_tab_width(error, source, file, TAB_WIDTH)
}

pub fn render_error_with_tab_width(
    error: &Error,
    source: &str,
    file: &str,
    tab_width: usize,
) -> String {
    /*
        Error: name (tip)
        -> input.py
          |
        3 | x = $
          | ----^
    */

    let position = error.get_position();
    let line_text = get_line(source, position.line)
        .map(|text| expand_tabs(&text, tab_width))
        .unwrap_or_default();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    // Writing into a String cannot fail.
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);

    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
