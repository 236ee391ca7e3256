//! CLI argument parsing for workplan

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::Weekday;

#[derive(Parser, Debug)]
#[command(name = "wp")]
#[command(author, version, about = "Daily workout plans from routines, rosters and weather", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the plan for a day (default: today)
    Plan {
        /// Date to plan (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Weather location when the day's class has none
        #[arg(short = 'L', long)]
        location: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// One-line overview of seven consecutive days
    Week {
        /// First day (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        start: Option<NaiveDate>,

        /// Weather location when a day's class has none
        #[arg(short = 'L', long)]
        location: Option<String>,
    },

    /// List the present attendees of a weekday's class
    Roster {
        /// Weekday name, e.g. Monday
        #[arg(required = true, value_parser = parse_weekday)]
        weekday: Weekday,
    },

    /// Show which routine template each weekday uses
    Templates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn parse_weekday(s: &str) -> Result<Weekday, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["wp"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_plan_args() {
        let cli = Cli::try_parse_from(["wp", "plan", "--date", "2025-12-01", "-L", "Irvine", "-f", "json"]).unwrap();
        match cli.command {
            Some(Command::Plan { date, location, format }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 12, 1));
                assert_eq!(location.as_deref(), Some("Irvine"));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_roster_weekday() {
        let cli = Cli::try_parse_from(["wp", "roster", "friday"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Roster {
                weekday: Weekday::Friday
            })
        ));
        assert!(Cli::try_parse_from(["wp", "roster", "someday"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["wp", "templates", "-c", "wp.yml", "-l", "debug"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("wp.yml")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
