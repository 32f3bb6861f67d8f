//! pylex - tokenize Python-like source from the command line.
//!
//! Reads a file (or an inline expression), runs the lexer over it and prints
//! the token stream as a table or as JSON.

use std::{fs::read_to_string, io::Write, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{builder::TypedValueParser, ArgGroup, Parser};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pylex::{
    lexer::{column::TAB_WIDTH, lexer::Lexer, tokens::Token},
    render_error_with_tab_width,
};

/// Tokenize Python-like source code
#[derive(Parser, Debug)]
#[command(name = "pylex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Indentation-aware lexer for a Python-like language", long_about = None)]
#[command(group(ArgGroup::new("input").required(true).multiple(true).args(["file", "expr"])))]
struct Cli {
    /// Path of the file to tokenize
    file: Option<PathBuf>,

    /// Code to tokenize directly
    #[arg(short, long)]
    expr: Option<String>,

    /// Print tokens as JSON
    #[arg(long)]
    json: bool,

    /// Columns per tab stop
    #[arg(long, default_value_t = TAB_WIDTH, env = "PYLEX_TAB_WIDTH",
          value_parser = clap::value_parser!(u8).range(1..=32).map(usize::from))]
    tab_width: usize,

    /// Enable verbose output
    #[arg(short, long, env = "PYLEX_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "PYLEX_NO_COLOR")]
    no_color: bool,
}

/// Where the source text came from, for diagnostics.
struct Input {
    name: String,
    code: String,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let input = read_input(&cli)?;
    debug!(input = %input.name, bytes = input.code.len(), "read input");

    let mut lexer = Lexer::with_tab_width(&input.code, cli.tab_width);
    let tokens = match lexer.by_ref().collect::<Result<Vec<Token>, _>>() {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!(
                "{}",
                render_error_with_tab_width(&error, &input.code, &input.name, cli.tab_width)
            );
            return Ok(ExitCode::FAILURE);
        }
    };

    info!(tokens = tokens.len(), "tokenized {}", input.name);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &tokens).context("failed to write JSON")?;
        writeln!(out)?;
    } else {
        for token in &tokens {
            writeln!(out, "{}", token)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize the logging system. Logs go to stderr so stdout only carries
/// tokens.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

fn read_input(cli: &Cli) -> Result<Input> {
    if let Some(code) = &cli.expr {
        return Ok(Input {
            name: String::from("shell"),
            code: code.clone(),
        });
    }

    // clap guarantees one of the two is present.
    let path = cli.file.as_ref().context("no input given")?;
    let code = read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(Input {
        name: path.display().to_string(),
        code,
    })
}
