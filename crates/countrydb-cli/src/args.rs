use crate::logging::LogFormat;
use clap::{Args, Parser, Subcommand};
use countrydb_core::sql::Dialect;
use countrydb_core::{AnnotateConfig, ExportConfig};
use std::path::PathBuf;

/// CLI arguments for countrydb
#[derive(Debug, Parser)]
#[command(
    name = "countrydb",
    version,
    about = "Annotate the world-countries dataset and export it as SQL load scripts"
)]
pub struct CliArgs {
    /// More log output (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,

    /// Prefix log lines with the time
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Disable colored log output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add euMember / eftaMember / eeaMember flags to every country
    Annotate(AnnotateArgs),

    /// Generate the regions / subregions / countries SQL scripts
    Export(ExportArgs),

    /// Download the upstream countries.json
    #[cfg(feature = "fetch")]
    Fetch(FetchArgs),
}

#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Source dataset (default: data/countries.json)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Annotated output (default: data/countries_amended.json)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// One-time copy of the source (default: data/countries_original.json)
    #[arg(long = "backup", conflicts_with = "no_backup")]
    pub backup: Option<PathBuf>,

    /// Skip the backup copy
    #[arg(long = "no-backup")]
    pub no_backup: bool,
}

impl AnnotateArgs {
    pub fn to_config(&self) -> AnnotateConfig {
        let defaults = AnnotateConfig::default();
        AnnotateConfig {
            input: self.input.clone().unwrap_or(defaults.input),
            output: self.output.clone().unwrap_or(defaults.output),
            backup: if self.no_backup {
                None
            } else {
                self.backup.clone().or(defaults.backup)
            },
        }
    }
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Source dataset (default: countries.json)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Directory for the generated scripts (default: SQLs)
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Target engine: oracle, postgres, sqlite, mysql or sqlserver
    #[arg(short = 'd', long = "dialect", default_value_t = Dialect::Oracle)]
    pub dialect: Dialect,

    /// Also write countries_summary.json
    #[arg(long = "summary")]
    pub summary: bool,

    /// Stamp the current local time into every file header
    #[arg(long = "timestamp")]
    pub timestamp: bool,
}

impl ExportArgs {
    pub fn to_config(&self) -> ExportConfig {
        let defaults = ExportConfig::default();
        ExportConfig {
            input: self.input.clone().unwrap_or(defaults.input),
            output_dir: self.output_dir.clone().unwrap_or(defaults.output_dir),
            dialect: self.dialect,
            generated_on: self
                .timestamp
                .then(|| chrono::Local::now().naive_local()),
            write_summary: self.summary,
        }
    }
}

#[cfg(feature = "fetch")]
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Dataset URL
    #[arg(long = "url", default_value = countrydb_core::loader::DATA_SOURCE_URL)]
    pub url: String,

    /// Where to store the file
    #[arg(short = 'o', long = "output", default_value = "countries.json")]
    pub output: PathBuf,
}
