use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser};
use ddexpr::{run, tokenize};
use tracing_subscriber::EnvFilter;

/// ddexpr parses arithmetic expressions and prints their syntax tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as a path and read the expression from that file.
    #[arg(short, long)]
    file: bool,

    /// Print the token stream instead of the syntax tree.
    #[arg(short, long)]
    tokens: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

const fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "ddexpr=warn",
        1 => "ddexpr=debug",
        _ => "ddexpr=trace",
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(args.verbose)));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_ansi(false)
                             .with_writer(std::io::stderr)
                             .init();

    let (filename, source) = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => (args.contents.as_str(), source),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        ("<input>", args.contents.clone())
    };
    let source = source.trim_end_matches(['\n', '\r']);

    if args.tokens {
        return match tokenize(filename, source) {
            Ok(tokens) => {
                let listed: Vec<String> = tokens.iter().map(|(tok, _)| tok.to_string()).collect();
                println!("[{}]", listed.join(", "));
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    match run(filename, source) {
        Ok(ast) => {
            println!("{ast}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
