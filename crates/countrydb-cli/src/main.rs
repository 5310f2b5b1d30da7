//! countrydb: annotate the world-countries dataset and export SQL scripts.
//!
//! Usage examples
//! --------------
//!
//! - Add EU / EFTA / EEA flags (data/countries.json -> data/countries_amended.json)
//!   $ countrydb annotate
//!
//! - Generate Oracle scripts into SQLs/
//!   $ countrydb export
//!
//! - PostgreSQL scripts plus a JSON summary, with a generation timestamp
//!   $ countrydb export -d postgres -o SQLs/postgres --summary --timestamp
//!
//! - SQL Server scripts, logging at debug level with timestamps
//!   $ countrydb -v --log-timestamps export -d sqlserver -o SQLs/mssql
//!
//! Exit status is non-zero on any error; a missing dataset reports where to
//! download it.

use anyhow::Context;
use clap::Parser;
use countrydb_cli::args::{AnnotateArgs, CliArgs, Commands, ExportArgs};
use countrydb_cli::logging::{init_logging, LogConfig};
use countrydb_core::sql::{Dialect, ScriptKind};
use countrydb_core::{annotate, export, CountryDbError};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let log_config = LogConfig::from_verbosity(args.verbose, args.quiet)
        .with_format(args.log_format)
        .with_timestamps(args.log_timestamps)
        .with_ansi(!args.no_color);
    if let Err(err) = init_logging(&log_config) {
        eprintln!("warning: logging disabled: {err}");
    }

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if let Some(CountryDbError::InputNotFound { url, .. }) =
                err.downcast_ref::<CountryDbError>()
            {
                eprintln!();
                eprintln!("Download the dataset first, e.g.:");
                eprintln!("  curl -o countries.json {url}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Annotate(args) => run_annotate(&args),
        Commands::Export(args) => run_export(&args),
        #[cfg(feature = "fetch")]
        Commands::Fetch(args) => {
            let bytes = countrydb_core::fetch::fetch_dataset(&args.url, &args.output)
                .with_context(|| format!("fetching {}", args.url))?;
            println!("Downloaded {} bytes to {}", bytes, args.output.display());
            Ok(())
        }
    }
}

fn run_annotate(args: &AnnotateArgs) -> anyhow::Result<()> {
    let config = args.to_config();
    let counts = annotate(&config)
        .with_context(|| format!("annotating {}", config.input.display()))?;

    println!("Annotated dataset written to {}", config.output.display());
    println!("  EU members:   {}", counts.eu);
    println!("  EFTA members: {}", counts.efta);
    println!("  EEA members:  {}", counts.eea);
    Ok(())
}

fn run_export(args: &ExportArgs) -> anyhow::Result<()> {
    let config = args.to_config();
    let report = export(&config)
        .with_context(|| format!("exporting {}", config.input.display()))?;

    println!(
        "{} scripts generated in {}",
        config.dialect.name(),
        config.output_dir.display()
    );
    println!("  Regions:    {}", report.stats.regions);
    println!("  Subregions: {}", report.stats.subregions);
    println!("  Countries:  {}", report.stats.countries);

    println!();
    println!("Countries by region:");
    for (region, count) in &report.countries_by_region {
        println!("  {region:<12} {count:>4}");
    }

    println!();
    println!("Files:");
    for path in &report.files {
        println!("  {}", path.display());
    }

    println!();
    println!("Next step: {}", run_hint(config.dialect, &config.output_dir));
    Ok(())
}

fn run_hint(dialect: Dialect, output_dir: &Path) -> String {
    let master = output_dir.join(ScriptKind::Master.file_name());
    match dialect {
        Dialect::Oracle => format!("connect with SQL*Plus or SQLcl and run @{}", master.display()),
        Dialect::Postgres => format!("psql -d <database> -f {}", master.display()),
        // `.read`, `SOURCE` and `:r` resolve paths against the working directory
        Dialect::Sqlite => format!(
            "cd {} && sqlite3 countries.db < {}",
            output_dir.display(),
            ScriptKind::Master.file_name()
        ),
        Dialect::MySql => format!(
            "cd {} && mysql --default-character-set=utf8mb4 <database> < {}",
            output_dir.display(),
            ScriptKind::Master.file_name()
        ),
        Dialect::SqlServer => format!(
            "cd {} && sqlcmd -d <database> -f 65001 -i {}",
            output_dir.display(),
            ScriptKind::Master.file_name()
        ),
    }
}
