use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_PASSING_SCORE: f64 = 60.0;

pub struct Config {
    /// Directory that saves, loads and exports are resolved against.
    pub data_dir: PathBuf,
    /// Scores at or above this mark pass.
    pub passing_score: f64,
    /// Channel used for user-facing notifications.
    pub notifier: NotifierKind,
    /// File format of the library store.
    pub format: StoreFormat,
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            passing_score: DEFAULT_PASSING_SCORE,
            notifier: NotifierKind::Email,
            format: StoreFormat::Csv,
            quiet: 0,
            no_banner: false,
        }
    }
}

impl Config {
    /// Resolves a user-supplied file name against the data directory.
    ///
    /// Absolute paths are used as given.
    pub fn resolve(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifierKind {
    Email,
    Sms,
}

impl FromStr for NotifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            other => Err(format!("unknown notifier '{other}' (expected email or sms)")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreFormat {
    /// One record per line behind a header row.
    Csv,
    /// An array of field-keyed records.
    Json,
}

impl StoreFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for StoreFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}' (expected csv or json)")),
        }
    }
}

impl fmt::Display for StoreFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
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
