//! bwmtf - Burrows-Wheeler followed by Move-to-Front in one pass.

use burrows_cli::{FilterArgs, Stage, execute};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bwmtf")]
#[command(author, version, about = "BWT + MTF preprocessing from stdin to stdout")]
#[command(long_about = "
Runs the Burrows-Wheeler transform and Move-to-Front encoding in one
process. The output is identical to

  burrows-wheeler - | move-to-front -

Examples:
  bwmtf - < book.txt > book.bwmtf
  bwmtf + < book.bwmtf > book.txt
")]
struct Cli {
    #[command(flatten)]
    args: FilterArgs,
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(execute(Stage::Pipeline, &cli.args));
}
