pub mod campus;
pub mod describe;
pub mod fleet;
pub mod grades;
pub mod library;
pub mod personnel;

use std::path::PathBuf;

use academia_common::config::{Config, DEFAULT_PASSING_SCORE, NotifierKind, StoreFormat};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "academia", version)]
#[command(about = "Console front-end for a library, a grade book, a university roster and small OOP demos.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less decoration; repeat to also silence warnings
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the start-up banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Directory that saves, loads and exports are resolved against
    #[arg(long, global = true, default_value = ".")]
    pub data_dir: PathBuf,

    /// Scores at or above this mark pass
    #[arg(long, global = true, default_value_t = DEFAULT_PASSING_SCORE, value_parser = parse_score)]
    pub passing_score: f64,

    /// Notification channel: email or sms
    #[arg(long, global = true, default_value = "email")]
    pub notifier: NotifierKind,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage a book catalog
    #[command(alias = "l")]
    Library {
        /// Store format used by save and load: csv or json
        #[arg(long, default_value = "csv")]
        format: StoreFormat,
    },
    /// Record grades and export student reports
    #[command(alias = "g")]
    Grades,
    /// Summarise a university dump
    #[command(alias = "c")]
    Campus { file: PathBuf },
    /// Show the built-in staff and student roster
    #[command(alias = "p")]
    Personnel,
    /// Start and stop one vehicle of each kind
    #[command(alias = "f")]
    Fleet {
        #[arg(long, default_value_t = 15000.0)]
        car: f64,
        #[arg(long, default_value_t = 8000.0)]
        motorcycle: f64,
        #[arg(long, default_value_t = 120000.0)]
        truck: f64,
    },
    /// Describe a report object through its strategy chain
    #[command(alias = "d")]
    Describe {
        #[arg(default_value_t = 1)]
        id: usize,
        /// Consult Serializable before Printable
        #[arg(long)]
        reverse: bool,
        /// Skip the report's own description
        #[arg(long)]
        bases_only: bool,
    },
}

fn parse_score(raw: &str) -> Result<f64, String> {
    let score: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !(0.0..=100.0).contains(&score) {
        return Err(format!("{score} is outside 0..=100"));
    }
    Ok(score)
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let format = match self.command {
            Commands::Library { format } => format,
            _ => StoreFormat::Csv,
        };
        Config {
            data_dir: self.data_dir.clone(),
            passing_score: self.passing_score,
            notifier: self.notifier,
            format,
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
