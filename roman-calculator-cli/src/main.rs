use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use roman_calculator::calculator::evaluate;
use std::io;
use std::io::{BufRead, IsTerminal};

const PROMPT: &str = "Enter an expression (e.g. 3 + 5 or IV * II or 10 % 3):";

/// Evaluates an expression of two Roman or two Arabic numerals from 1 to 10
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate, read from standard input if left out
    expression: Option<String>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let expression = match args.expression {
        Some(expression) => expression,
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("{}", PROMPT);
            }
            read_expression(stdin.lock())?
        }
    };
    debug!("evaluating {:?}", expression);

    let result = evaluate(&expression)
        .with_context(|| format!("could not evaluate '{}'", expression.trim()))?;
    info!("{} = {}", expression.trim(), result);
    println!("{}", result);
    Ok(())
}

/// Reads the first line of input, without its line ending.
///
/// Input that ends before a line arrives is read as an empty expression.
fn read_expression(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("could not read expression from standard input")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
