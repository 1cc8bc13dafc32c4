use std::{
    fs,
    io::{self, BufRead},
};

use clap::Parser;
use stackcalc::evaluate;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// stackcalc evaluates infix arithmetic expressions such as `2(3+4)` or
/// `-5+3` and prints `expression=result`, or an error label.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stackcalc to treat the input as a file and evaluate each line.
    #[arg(short, long)]
    file: bool,

    /// Raises the log level; repeat for more detail. Without it, `RUST_LOG`
    /// decides and defaults to `warn`.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression, or a path when `--file` is given. Expressions are read
    /// from standard input, one per line, when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match (args.file, args.contents) {
        (true, Some(path)) => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            script.lines().for_each(print_result);
        },
        (true, None) => {
            eprintln!("The --file flag needs a path to read expressions from.");
            std::process::exit(1);
        },
        (false, Some(expression)) => print_result(&expression),
        (false, None) => {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => print_result(&line),
                    Err(e) => {
                        eprintln!("Failed to read from standard input: {e}");
                        std::process::exit(1);
                    },
                }
            }
        },
    }
}

/// Evaluates one line of input, skipping blank lines.
fn print_result(line: &str) {
    let expression = line.trim_end_matches(['\r', '\n']);
    if expression.trim().is_empty() {
        return;
    }
    println!("{}", evaluate(expression));
}

fn init_logging(verbose: u8) {
    let env_filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry().with(env_filter)
                                  .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                                  .init();
}
