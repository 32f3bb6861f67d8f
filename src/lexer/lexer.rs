use std::{collections::VecDeque, iter::FusedIterator};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_LITERAL_HANDLER, MK_TOKEN};

use super::{
    column::{column_at, TAB_WIDTH},
    indent::{measure_indent, IndentChange, IndentStack, InconsistentDedent},
    tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP, SYMBOL_LOOKUP},
};

pub type RegexHandler = fn(&mut Lexer, String);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Literal matchers in priority order. Every pattern is anchored at the
    /// cursor.
    static ref LITERAL_PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r#"^(?s:'''.*?'''|""".*?""")"#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r#"^(?:"(?:\\(?s:.)|[^\\\n"])*"|'(?:\\(?s:.)|[^\\\n'])*')"#).unwrap(), handler: string_handler },
        RegexPattern {
            regex: Regex::new(concat!(
                r"^(?:",
                r"0[bB][01](?:_?[01])*",
                r"|0[oO][0-7](?:_?[0-7])*",
                r"|0[xX][0-9a-fA-F](?:_?[0-9a-fA-F])*",
                r"|(?:[0-9](?:_?[0-9])*)?\.[0-9](?:_?[0-9])*(?:[eE][+-]?[0-9](?:_?[0-9])*)?",
                r"|[0-9](?:_?[0-9])*(?:\.[0-9](?:_?[0-9])*)?(?:[eE][+-]?[0-9](?:_?[0-9])*)?",
                r")",
            )).unwrap(),
            handler: MK_LITERAL_HANDLER!(TokenKind::Number),
        },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: identifier_handler },
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    LineStart,
    MidLine,
    Done,
}

/// Indentation-aware scanner over one source buffer.
///
/// Tokens are produced lazily through [`Iterator`]. The sequence always ends
/// with a single EOF token, or stops after the first error.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: usize,
    indents: IndentStack,
    state: ScanState,
    pending: VecDeque<Token>,
    tab_width: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer::with_tab_width(source, TAB_WIDTH)
    }

    pub fn with_tab_width(source: &str, tab_width: usize) -> Lexer {
        let mut lexer = Lexer {
            source: String::new(),
            pos: 0,
            line: 1,
            indents: IndentStack::new(),
            state: ScanState::LineStart,
            pending: VecDeque::new(),
            tab_width: tab_width.max(1),
        };
        lexer.reset(source);
        lexer
    }

    /// Discards any scan in progress and starts over on `source`.
    pub fn reset(&mut self, source: &str) {
        self.source = source.replace("\r\n", "\n").replace('\r', "\n");
        self.pos = 0;
        self.line = 1;
        self.indents = IndentStack::new();
        self.state = ScanState::LineStart;
        self.pending.clear();
    }

    /// Scans `source` to completion, reusing this lexer.
    pub fn tokenize(&mut self, source: &str) -> Result<Vec<Token>, Error> {
        self.reset(source);
        self.by_ref().collect()
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.pending.push_back(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn current_column(&self) -> usize {
        column_at(&self.source, self.pos, self.tab_width)
    }

    pub fn current_position(&self) -> Position {
        Position::new(self.line, self.current_column())
    }

    /// Emits `lexeme` as a token starting at the cursor and moves past it.
    pub(crate) fn push_lexeme(&mut self, kind: TokenKind, lexeme: String) {
        let column = self.current_column();
        let len = lexeme.len();

        self.push(MK_TOKEN!(kind, lexeme, self.line, column));
        self.advance_n(len);
    }

    fn step(&mut self) -> Result<(), Error> {
        if self.at_eof() {
            self.finish();
            return Ok(());
        }

        match self.state {
            ScanState::LineStart => self.line_start(),
            ScanState::MidLine => self.mid_line(),
            ScanState::Done => Ok(()),
        }
    }

    fn line_start(&mut self) -> Result<(), Error> {
        let (consumed, width) = measure_indent(self.remainder(), self.tab_width);
        self.advance_n(consumed);

        if self.at() == Some('#') {
            self.skip_comment();
        }

        match self.at() {
            // Blank or comment-only line: indentation is not significant.
            None => Ok(()),
            Some('\n') => {
                self.newline();
                Ok(())
            }
            Some(_) => {
                self.indent(width)?;
                self.state = ScanState::MidLine;
                Ok(())
            }
        }
    }

    fn indent(&mut self, width: usize) -> Result<(), Error> {
        match self.indents.resolve(width) {
            Ok(IndentChange::Unchanged) => {}
            Ok(IndentChange::Indent(width)) => {
                trace!(line = self.line, width, "indent");
                self.push(MK_TOKEN!(TokenKind::Indent, width, self.line, 1));
            }
            Ok(IndentChange::Dedent(closed)) => {
                trace!(line = self.line, width, closed, "dedent");
                for _ in 0..closed {
                    self.push(MK_TOKEN!(TokenKind::Dedent, width, self.line, 1));
                }
            }
            Err(InconsistentDedent { width }) => {
                return Err(Error::new(
                    ErrorImpl::InconsistentIndentation { width },
                    self.current_position(),
                ));
            }
        }

        Ok(())
    }

    fn mid_line(&mut self) -> Result<(), Error> {
        let Some(c) = self.at() else {
            return Ok(());
        };

        match c {
            '#' => {
                self.skip_comment();
                return Ok(());
            }
            '\n' => {
                self.newline();
                self.state = ScanState::LineStart;
                return Ok(());
            }
            _ => {}
        }

        if self.match_literal() || self.match_symbol() {
            return Ok(());
        }

        if c == ' ' || c == '\t' {
            self.advance_n(1);
            return Ok(());
        }

        Err(Error::new(
            ErrorImpl::UnexpectedCharacter { character: c },
            self.current_position(),
        ))
    }

    fn match_literal(&mut self) -> bool {
        let found = LITERAL_PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(self.remainder())
                .map(|m| (pattern.handler, m.as_str().to_string()))
        });

        match found {
            Some((handler, lexeme)) => {
                handler(self, lexeme);
                true
            }
            None => false,
        }
    }

    fn match_symbol(&mut self) -> bool {
        let found = SYMBOL_LOOKUP
            .iter()
            .find(|(symbol, _)| self.remainder().starts_with(*symbol))
            .copied();

        match found {
            Some((symbol, kind)) => {
                self.push_lexeme(kind, symbol.to_string());
                true
            }
            None => false,
        }
    }

    /// Moves the cursor up to, but not past, the next line feed.
    fn skip_comment(&mut self) {
        let len = self.remainder().find('\n').unwrap_or(self.remainder().len());
        self.advance_n(len);
    }

    fn newline(&mut self) {
        self.push(MK_TOKEN!(TokenKind::Newline, "\n", self.line, 1));
        self.advance_n(1);
        self.line += 1;
    }

    fn finish(&mut self) {
        if !self.source.ends_with('\n') {
            self.push(MK_TOKEN!(TokenKind::Newline, "\n", self.line, 1));
        }

        let open = self.indents.drain();
        if open > 0 {
            trace!(line = self.line, open, "closing blocks at end of input");
        }
        for _ in 0..open {
            self.push(MK_TOKEN!(TokenKind::Dedent, 0usize, self.line, 1));
        }

        self.push(MK_TOKEN!(TokenKind::EOF, "", self.line, 1));
        self.state = ScanState::Done;
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }

            if self.state == ScanState::Done {
                return None;
            }

            if let Err(error) = self.step() {
                debug!(%error, "scan aborted");
                self.state = ScanState::Done;
                self.pending.clear();
                return Some(Err(error));
            }
        }
    }
}

impl FusedIterator for Lexer {}

fn string_handler(lexer: &mut Lexer, lexeme: String) {
    let line_feeds = lexeme.matches('\n').count();

    lexer.push_lexeme(TokenKind::String, lexeme);
    lexer.line += line_feeds;
}

fn identifier_handler(lexer: &mut Lexer, lexeme: String) {
    let kind = if RESERVED_LOOKUP.contains(lexeme.as_str()) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    lexer.push_lexeme(kind, lexeme);
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::new(source).collect::<Result<Vec<Token>, Error>>()?;

    debug!(tokens = tokens.len(), "tokenized");
    Ok(tokens)
}
