use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("False");
        set.insert("None");
        set.insert("True");
        set.insert("and");
        set.insert("as");
        set.insert("assert");
        set.insert("async");
        set.insert("await");
        set.insert("break");
        set.insert("class");
        set.insert("continue");
        set.insert("def");
        set.insert("del");
        set.insert("elif");
        set.insert("else");
        set.insert("except");
        set.insert("finally");
        set.insert("for");
        set.insert("from");
        set.insert("global");
        set.insert("if");
        set.insert("import");
        set.insert("in");
        set.insert("is");
        set.insert("lambda");
        set.insert("nonlocal");
        set.insert("not");
        set.insert("or");
        set.insert("pass");
        set.insert("raise");
        set.insert("return");
        set.insert("try");
        set.insert("while");
        set.insert("with");
        set.insert("yield");
        set.insert("match");
        set.insert("case");
        set
    };

    /// Operators and delimiters, longest first. Scanning this in order and
    /// taking the first prefix match gives longest-match-wins.
    pub static ref SYMBOL_LOOKUP: Vec<(&'static str, TokenKind)> = {
        let mut table: Vec<(&'static str, TokenKind)> = OPERATORS
            .iter()
            .map(|op| (*op, TokenKind::Op))
            .chain(DELIMITERS.iter().map(|delim| (*delim, TokenKind::Delim)))
            .collect();
        table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        table
    };
}

pub const OPERATORS: &[&str] = &[
    ">>>", "<<=", ">>=", "**=", "//=",
    "**", "//", "==", "!=", "<=", ">=", "->", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>",
    "+", "-", "*", "/", "%", "<", ">", "=", "&", "|", "^", "~", "@", ":", ".",
];

pub const DELIMITERS: &[&str] = &["(", ")", "[", "]", "{", "}", ";", ","];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    Identifier,
    Keyword,
    Number,
    String,
    Op,
    Delim,
    Newline,
    Indent,
    Dedent,
    EOF,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Op => "OP",
            TokenKind::Delim => "DELIM",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::EOF => "EOF",
        }
    }

    /// NEWLINE, INDENT, DEDENT and EOF do not correspond to a lexeme in the
    /// source.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent | TokenKind::EOF
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// What a token carries: the raw lexeme, or the indentation width for
/// INDENT / DEDENT.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    Width(usize),
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text.as_str()),
            TokenValue::Width(_) => None,
        }
    }

    pub fn as_width(&self) -> Option<usize> {
        match self {
            TokenValue::Text(_) => None,
            TokenValue::Width(width) => Some(*width),
        }
    }
}

impl From<String> for TokenValue {
    fn from(text: String) -> Self {
        TokenValue::Text(text)
    }
}

impl From<&str> for TokenValue {
    fn from(text: &str) -> Self {
        TokenValue::Text(text.to_string())
    }
}

impl From<usize> for TokenValue {
    fn from(width: usize) -> Self {
        TokenValue::Width(width)
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{:?}", text),
            TokenValue::Width(width) => write!(f, "{}", width),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: usize,
    pub column: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:8}) {}\t@ line {}, col {}",
            self.kind, self.value, self.line, self.column
        )
    }
}

impl Token {
    /// The lexeme as it appeared in the source. Empty for synthesized
    /// INDENT / DEDENT / EOF tokens.
    pub fn lexeme(&self) -> &str {
        match self.kind {
            TokenKind::Indent | TokenKind::Dedent | TokenKind::EOF => "",
            _ => self.value.as_text().unwrap_or(""),
        }
    }

    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.value.as_text() == Some(text)
    }
}
