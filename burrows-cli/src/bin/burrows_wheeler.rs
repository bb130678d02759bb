//! burrows-wheeler - Burrows-Wheeler transform filter.

use burrows_cli::{FilterArgs, Stage, execute};
use clap::Parser;

#[derive(Parser)]
#[command(name = "burrows-wheeler")]
#[command(author, version, about = "Burrows-Wheeler transform from stdin to stdout")]
#[command(long_about = "
Applies the Burrows-Wheeler transform to standard input.

Forward output is a big-endian 32-bit first index followed by the
transformed bytes; the inverse reads that layout back.

Examples:
  burrows-wheeler - < abra.txt > abra.bwt
  burrows-wheeler + < abra.bwt > abra.txt
  burrows-wheeler - < abra.txt | move-to-front -
")]
struct Cli {
    #[command(flatten)]
    args: FilterArgs,
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(execute(Stage::BurrowsWheeler, &cli.args));
}
