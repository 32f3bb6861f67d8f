//! Tab-aware column arithmetic.
//!
//! Columns are 1-based and restart after every line feed. A tab moves to the
//! next tab stop, even when it already sits on one; every other character is
//! one column wide.

pub const TAB_WIDTH: usize = 8;

/// Width reached by a tab starting at the 0-based width `col`, with the
/// default tab stops.
pub fn expand_tab_column(col: usize) -> usize {
    next_tab_stop(col, TAB_WIDTH)
}

pub fn next_tab_stop(col: usize, tab_width: usize) -> usize {
    (col / tab_width + 1) * tab_width
}

/// Width of `c` when it starts at the 0-based width `col`.
pub fn advance(col: usize, c: char, tab_width: usize) -> usize {
    if c == '\t' {
        next_tab_stop(col, tab_width)
    } else {
        col + 1
    }
}

/// 1-based column of the byte offset `pos` in `source`.
pub fn column_at(source: &str, pos: usize, tab_width: usize) -> usize {
    let line_start = source[..pos].rfind('\n').map_or(0, |i| i + 1);

    source[line_start..pos]
        .chars()
        .fold(0, |col, c| advance(col, c, tab_width))
        + 1
}

/// `line` with every tab replaced by the spaces up to its tab stop.
pub fn expand_tabs(line: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0;

    for c in line.chars() {
        let next = advance(col, c, tab_width);
        if c == '\t' {
            out.extend(std::iter::repeat(' ').take(next - col));
        } else {
            out.push(c);
        }
        col = next;
    }

    out
}
