use clap::Parser;
use greeter_core::{greet, DEFAULT_NAME};
use std::io::{self, Write};

/// Greeter command-line interface
#[derive(Parser)]
#[command(name = "greeter", author, version, about = "Print a greeting", long_about = None)]
struct Cli {}

fn run(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", greet(DEFAULT_NAME))?;
    out.flush()
}

fn main() {
    let _cli = Cli::parse();
    let stdout = io::stdout();
    if let Err(err) = run(&mut stdout.lock()) {
        eprintln!("Failed to write greeting: {}", err);
        std::process::exit(1);
    }
}
