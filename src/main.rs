use std::{fs, io};

use capuchin::{repl, run_script};
use clap::Parser;

/// capuchin is an easy to use, dynamically typed, expression-oriented
/// programming language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells capuchin to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the last value
    /// of a capuchin script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// A script to run. When omitted, capuchin starts the interactive
    /// prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        let stdin = io::stdin();
        if let Err(e) = repl::start(stdin.lock(), io::stdout()) {
            eprintln!("{e}");
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = run_script(&script, args.pipe_mode) {
        eprintln!("{e}");
    }
}
