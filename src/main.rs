use std::io;
use std::path::PathBuf;

use clap::Parser;

use charlist::{
    io_utils::{format_io_error, simple_cli_error, write_charlist},
    read_table, render_table, TableStats,
};

/// Build a fixed-width character lookup table from a codepoint listing.
///
/// Reads one codepoint reference per line from standard input until end
/// of stream; blank or non-matching lines separate multi-codepoint
/// characters.
#[derive(Parser)]
struct Args {
    /// Output filename, created in the current working directory
    #[arg(default_value = "charlist")]
    output: PathBuf,
    /// Print a short summary to stderr
    #[arg(long)]
    stats: bool,
    /// Print table statistics to stdout as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let table = read_table(io::stdin().lock())
        .map_err(|e| simple_cli_error(&format!("reading standard input: {e}")))?;
    let rendered = render_table(&table);
    let stats = TableStats::collect(&table, &rendered);

    // A failed write is reported but leaves the exit status untouched.
    if let Err(e) = write_charlist(&args.output, &rendered) {
        eprintln!("{}", format_io_error("writing", &args.output, &e));
    }

    if args.stats {
        stats.report();
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}
