//! CLI entry point and command dispatch for sundry.

mod cmd;
mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use cmd::OutputOpts;

#[derive(Parser)]
#[command(name = "sundry")]
#[command(version)]
#[command(about = "Everyday formatting and conversion helpers", long_about = None)]
struct Cli {
    /// Emit results as a JSON envelope instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a display name and address as a mailbox string
    Email {
        /// Display name
        name: String,
        /// Email address
        address: String,
    },
    /// Convert days to seconds
    Seconds {
        /// Number of days; omit for a single day. Partial days do not count
        #[arg(allow_negative_numbers = true)]
        days: Option<f64>,
    },
    /// Build a platform-styled file path
    Path {
        /// Directory, possibly nested (either separator style)
        dir: String,
        /// Filename without extension
        filename: String,
        /// File extension; omit for none
        #[arg(default_value = "")]
        extension: String,
        /// Windows drive prefix such as 'C:'; selects backslash style
        #[arg(long)]
        drive: Option<String>,
    },
    /// Convert a temperature reading to Kelvin
    Kelvin {
        /// Temperature value
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Scale of the reading: c or f (defaults to Celsius)
        #[arg(long)]
        unit: Option<String>,
    },
    /// Find the smallest numeric value among the arguments
    Smallest {
        /// Values to compare; numeric strings are coerced
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// List the odd numbers among the arguments
    Odds {
        /// Values to filter; only genuine numbers participate
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Add 13% HST to an amount in cents
    Hst {
        /// Amount in integer cents
        #[arg(allow_negative_numbers = true)]
        cents: i64,
    },
    /// Build a product query string
    Query {
        /// Product name (percent-encoded in the result)
        product: String,
        /// Quantity; zero or less is floored to 1
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
        /// Mark the order as a gift
        #[arg(long)]
        gift: bool,
    },
    /// Show version information
    Version {
        /// Include commit and build date
        #[arg(long)]
        verbose: bool,
    },
    /// Generate a man page
    Man {
        /// Output directory (defaults to the current directory)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Generate a shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        ui::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let out = OutputOpts { json: cli.json };

    match cli.command {
        Commands::Email { name, address } => cmd::format::cmd_email(&name, &address, out),
        Commands::Seconds { days } => cmd::convert::cmd_seconds(days, out),
        Commands::Path {
            dir,
            filename,
            extension,
            drive,
        } => cmd::format::cmd_path(&dir, &filename, &extension, drive.as_deref(), out),
        Commands::Kelvin { value, unit } => cmd::convert::cmd_kelvin(value, unit.as_deref(), out),
        Commands::Smallest { values } => cmd::select::cmd_smallest(&values, out),
        Commands::Odds { values } => cmd::select::cmd_odds(&values, out),
        Commands::Hst { cents } => cmd::convert::cmd_hst(cents, out),
        Commands::Query {
            product,
            quantity,
            gift,
        } => cmd::format::cmd_query(&product, quantity, gift, out),
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
        Commands::Man { output } => cmd::util::cmd_man(output.as_ref()),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_with_gift_parses() {
        let cli = Cli::try_parse_from(["sundry", "query", "shirt", "6", "--gift"]).unwrap();
        match cli.command {
            Commands::Query {
                product,
                quantity,
                gift,
            } => {
                assert_eq!(product, "shirt");
                assert_eq!(quantity, 6);
                assert!(gift);
            }
            _ => panic!("expected query subcommand"),
        }
    }

    #[test]
    fn test_kelvin_unit_is_optional() {
        let cli = Cli::try_parse_from(["sundry", "kelvin", "80"]).unwrap();
        match cli.command {
            Commands::Kelvin { value, unit } => {
                assert_eq!(value, 80.0);
                assert_eq!(unit, None);
            }
            _ => panic!("expected kelvin subcommand"),
        }
    }

    #[test]
    fn test_kelvin_accepts_negative_values() {
        let cli = Cli::try_parse_from(["sundry", "kelvin", "-40", "--unit", "f"]).unwrap();
        match cli.command {
            Commands::Kelvin { value, unit } => {
                assert_eq!(value, -40.0);
                assert_eq!(unit.as_deref(), Some("f"));
            }
            _ => panic!("expected kelvin subcommand"),
        }
    }

    #[test]
    fn test_smallest_accepts_hyphen_values() {
        let cli = Cli::try_parse_from(["sundry", "smallest", "1", "-3", "2"]).unwrap();
        match cli.command {
            Commands::Smallest { values } => assert_eq!(values, vec!["1", "-3", "2"]),
            _ => panic!("expected smallest subcommand"),
        }
    }

    #[test]
    fn test_path_extension_defaults_to_empty() {
        let cli = Cli::try_parse_from(["sundry", "path", "files", "data"]).unwrap();
        match cli.command {
            Commands::Path {
                dir,
                filename,
                extension,
                drive,
            } => {
                assert_eq!(dir, "files");
                assert_eq!(filename, "data");
                assert_eq!(extension, "");
                assert_eq!(drive, None);
            }
            _ => panic!("expected path subcommand"),
        }
    }

    #[test]
    fn test_json_flag_is_global() {
        let cli = Cli::try_parse_from(["sundry", "hst", "100", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["sundry", "frobnicate"]).is_err());
    }
}
