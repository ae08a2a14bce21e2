use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use thompson_nfa::{render, Compiler, Config};

/// The line that ends the session.
const QUIT: &str = ":q";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Final state and transition listing
    Text,
    /// Graphviz digraph
    Dot,
    /// Listing followed by the digraph
    Both,
}

/// Compile regular expressions into Thompson NFAs, one per input line.
#[derive(Debug, Parser)]
#[command(name = "thompson-nfa", version)]
struct Args {
    /// How to print each compiled automaton
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Reject patterns whose automaton would exceed this many states
    #[arg(long)]
    size_limit: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = Config::new().size_limit(args.size_limit);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        {
            let mut out = stdout.lock();
            writeln!(out, "Enter Regular Expression")?;
            out.flush()?;
        }
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim_end_matches('\r');
        if line == QUIT {
            break;
        }

        let result = Compiler::with_config(config.clone())
            .compile(line)
            .or_else(|err| match err.fallback() {
                Some(nfa) => {
                    log::warn!("{}; using the epsilon automaton instead", err);
                    eprintln!("Invalid Regular Expression Input");
                    Ok(nfa)
                }
                None => Err(err),
            });

        let mut out = stdout.lock();
        match result {
            Ok(nfa) => {
                writeln!(out, "NFA:")?;
                match args.format {
                    Format::Text => write!(out, "{}", nfa)?,
                    Format::Dot => write!(out, "{}", render::to_dot(&nfa))?,
                    Format::Both => {
                        write!(out, "{}", nfa)?;
                        write!(out, "{}", render::to_dot(&nfa))?;
                    }
                }
            }
            Err(err) => {
                log::error!("{:?}", err);
                eprintln!("error: {}", err);
            }
        }
    }
    Ok(())
}
