//! Shared command-line arguments.

use burrows_core::Direction;
use burrows_transform::{SortStrategy, TransformConfig};
use clap::{Args, ValueEnum};

/// Arguments common to every filter.
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// `-` to transform/encode, `+` to invert/decode
    #[arg(value_enum)]
    pub direction: DirectionArg,

    /// Suffix sorting algorithm for the forward BWT
    #[arg(long, value_enum, default_value = "auto")]
    pub sort: SortArg,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FilterArgs {
    /// Transform configuration selected on the command line.
    pub fn config(&self) -> TransformConfig {
        TransformConfig::new().with_sort(self.sort.into())
    }
}

/// Filter direction flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Forward transform / encode
    #[value(name = "-")]
    Forward,
    /// Inverse transform / decode
    #[value(name = "+")]
    Inverse,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Forward => Direction::Forward,
            DirectionArg::Inverse => Direction::Inverse,
        }
    }
}

/// Suffix sorter choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SortArg {
    /// Comparison sort for small blocks, prefix doubling otherwise
    #[default]
    Auto,
    /// Comparison sort
    Comparison,
    /// Prefix doubling
    Doubling,
}

impl From<SortArg> for SortStrategy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Auto => SortStrategy::Auto,
            SortArg::Comparison => SortStrategy::Comparison,
            SortArg::Doubling => SortStrategy::PrefixDoubling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: FilterArgs,
    }

    #[test]
    fn test_parse_forward() {
        let cli = TestCli::try_parse_from(["test", "-"]).unwrap();
        assert_eq!(cli.args.direction, DirectionArg::Forward);
        assert_eq!(cli.args.sort, SortArg::Auto);
        assert_eq!(cli.args.verbose, 0);
    }

    #[test]
    fn test_parse_inverse_with_options() {
        let cli = TestCli::try_parse_from(["test", "--sort", "doubling", "-vv", "+"]).unwrap();
        assert_eq!(cli.args.direction, DirectionArg::Inverse);
        assert_eq!(cli.args.verbose, 2);
        assert_eq!(cli.args.config().sort, SortStrategy::PrefixDoubling);
        assert_eq!(Direction::from(cli.args.direction), Direction::Inverse);
    }

    #[test]
    fn test_usage_errors() {
        assert!(TestCli::try_parse_from(["test"]).is_err());
        assert!(TestCli::try_parse_from(["test", "x"]).is_err());
        assert!(TestCli::try_parse_from(["test", "-", "+"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--sort", "radix", "-"]).is_err());
    }
}
