//! Indentation tracking for block structure.

use super::column::advance;

/// Outcome of comparing a line's indentation against the open blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentChange {
    /// Same depth as the enclosing block.
    Unchanged,
    /// A new block was opened at this width.
    Indent(usize),
    /// This many blocks were closed.
    Dedent(usize),
}

/// The dedent width does not line up with any open block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InconsistentDedent {
    pub width: usize,
}

/// Stack of open indentation widths. The bottom entry is always 0 and the
/// entries are strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentStack {
    widths: Vec<usize>,
}

impl Default for IndentStack {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentStack {
    pub fn new() -> Self {
        IndentStack { widths: vec![0] }
    }

    pub fn top(&self) -> usize {
        self.widths.last().copied().unwrap_or(0)
    }

    /// Number of open blocks above the base level.
    pub fn depth(&self) -> usize {
        self.widths.len() - 1
    }

    pub fn resolve(&mut self, width: usize) -> Result<IndentChange, InconsistentDedent> {
        if width > self.top() {
            self.widths.push(width);
            return Ok(IndentChange::Indent(width));
        }

        let mut closed = 0;
        while width < self.top() {
            self.widths.pop();
            closed += 1;
        }

        if width != self.top() {
            return Err(InconsistentDedent { width });
        }

        if closed == 0 {
            Ok(IndentChange::Unchanged)
        } else {
            Ok(IndentChange::Dedent(closed))
        }
    }

    /// Closes every block above the base level, returning how many were open.
    pub fn drain(&mut self) -> usize {
        let closed = self.depth();
        self.widths.truncate(1);
        closed
    }
}

/// Measures the run of spaces and tabs at the start of `text`.
///
/// Returns the number of bytes consumed and the resulting width.
pub fn measure_indent(text: &str, tab_width: usize) -> (usize, usize) {
    let mut consumed = 0;
    let mut width = 0;

    for c in text.chars() {
        if c != ' ' && c != '\t' {
            break;
        }
        width = advance(width, c, tab_width);
        consumed += 1;
    }

    (consumed, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_and_dedent() {
        let mut stack = IndentStack::new();
        assert_eq!(stack.resolve(0), Ok(IndentChange::Unchanged));
        assert_eq!(stack.resolve(4), Ok(IndentChange::Indent(4)));
        assert_eq!(stack.resolve(8), Ok(IndentChange::Indent(8)));
        assert_eq!(stack.resolve(8), Ok(IndentChange::Unchanged));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.resolve(0), Ok(IndentChange::Dedent(2)));
        assert_eq!(stack.top(), 0);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_inconsistent_dedent() {
        let mut stack = IndentStack::new();
        stack.resolve(4).unwrap();
        stack.resolve(8).unwrap();

        assert_eq!(stack.resolve(6), Err(InconsistentDedent { width: 6 }));
        assert_eq!(stack.top(), 4);
    }

    #[test]
    fn test_drain_keeps_base() {
        let mut stack = IndentStack::new();
        stack.resolve(2).unwrap();
        stack.resolve(3).unwrap();
        assert_eq!(stack.drain(), 2);
        assert_eq!(stack.drain(), 0);
        assert_eq!(stack, IndentStack::new());
    }

    #[test]
    fn test_measure_indent() {
        assert_eq!(measure_indent("    x", 8), (4, 4));
        assert_eq!(measure_indent("\tx", 8), (1, 8));
        assert_eq!(measure_indent("  \t x", 8), (4, 9));
        assert_eq!(measure_indent("x", 8), (0, 0));
        assert_eq!(measure_indent("   ", 8), (3, 3));
    }
}
