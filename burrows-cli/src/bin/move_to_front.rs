//! move-to-front - Move-to-Front encoding filter.

use burrows_cli::{FilterArgs, Stage, execute};
use clap::Parser;

#[derive(Parser)]
#[command(name = "move-to-front")]
#[command(author, version, about = "Move-to-Front encoding from stdin to stdout")]
#[command(long_about = "
Replaces every byte of standard input with its rank in a recency list of
all 256 byte values, or reverses that mapping.

Examples:
  move-to-front - < abra.txt > abra.mtf
  move-to-front + < abra.mtf > abra.txt
")]
struct Cli {
    #[command(flatten)]
    args: FilterArgs,
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(execute(Stage::MoveToFront, &cli.args));
}
