use clap::Parser;
use countrydb_cli::args::{CliArgs, Commands};
use countrydb_cli::logging::LogFormat;
use countrydb_core::sql::Dialect;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn countrydb() -> Command {
    Command::new(env!("CARGO_BIN_EXE_countrydb"))
}

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../countrydb-core/tests/fixtures/countries_sample.json")
}

#[test]
fn export_without_flags_uses_default_paths() {
    let args = CliArgs::try_parse_from(["countrydb", "export"]).unwrap();
    let Commands::Export(export) = args.command else {
        panic!("expected export");
    };
    let config = export.to_config();
    assert_eq!(config.input, PathBuf::from("countries.json"));
    assert_eq!(config.output_dir, PathBuf::from("SQLs"));
    assert_eq!(config.dialect, Dialect::Oracle);
    assert!(config.generated_on.is_none());
    assert_eq!(args.log_format, LogFormat::Compact);
    assert!(!args.log_timestamps);
    assert!(!args.no_color);
}

#[test]
fn export_flags_map_onto_config() {
    let args = CliArgs::try_parse_from([
        "countrydb",
        "-vv",
        "--log-format",
        "json",
        "--log-timestamps",
        "export",
        "--no-color",
        "--dialect",
        "pg",
        "-o",
        "out",
        "--summary",
        "--timestamp",
    ])
    .unwrap();
    assert_eq!(args.verbose, 2);
    assert_eq!(args.log_format, LogFormat::Json);
    assert!(args.log_timestamps);
    assert!(args.no_color);
    let Commands::Export(export) = args.command else {
        panic!("expected export");
    };
    let config = export.to_config();
    assert_eq!(config.dialect, Dialect::Postgres);
    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert!(config.write_summary);
    assert!(config.generated_on.is_some());
}

#[test]
fn every_dialect_is_selectable() {
    for (name, dialect) in [
        ("oracle", Dialect::Oracle),
        ("postgres", Dialect::Postgres),
        ("sqlite", Dialect::Sqlite),
        ("mysql", Dialect::MySql),
        ("sqlserver", Dialect::SqlServer),
    ] {
        let args = CliArgs::try_parse_from(["countrydb", "export", "-d", name]).unwrap();
        let Commands::Export(export) = args.command else {
            panic!("expected export");
        };
        assert_eq!(export.dialect, dialect);
    }
}

#[test]
fn unknown_dialect_is_rejected() {
    assert!(CliArgs::try_parse_from(["countrydb", "export", "--dialect", "db2"]).is_err());
}

#[test]
fn annotate_backup_can_be_disabled() {
    let args = CliArgs::try_parse_from(["countrydb", "annotate", "--no-backup"]).unwrap();
    let Commands::Annotate(annotate) = args.command else {
        panic!("expected annotate");
    };
    let config = annotate.to_config();
    assert_eq!(config.input, PathBuf::from("data/countries.json"));
    assert!(config.backup.is_none());
}

#[test]
fn missing_dataset_exits_non_zero_with_guidance() {
    let dir = TempDir::new().unwrap();
    let output = countrydb()
        .args(["-q", "export"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("countries.json"), "{stderr}");
    assert!(stderr.contains("raw.githubusercontent.com/mledoze/countries"), "{stderr}");
    assert!(!dir.path().join("SQLs").exists());
}

#[test]
fn export_writes_scripts_and_prints_summary() {
    let dir = TempDir::new().unwrap();
    fs::copy(fixture(), dir.path().join("countries.json")).unwrap();

    let output = countrydb()
        .args(["-q", "export", "--dialect", "sqlite"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SQLite scripts generated in SQLs"));
    assert!(stdout.contains("Countries:  6"));
    for name in [
        "00_master_script.sql",
        "01_create_tables.sql",
        "02_insert_regions.sql",
        "03_insert_subregions.sql",
        "04_insert_countries.sql",
        "05_example_queries.sql",
    ] {
        assert!(dir.path().join("SQLs").join(name).is_file(), "{name}");
    }
}

#[test]
fn sql_server_export_uses_sqlcmd_commands() {
    let dir = TempDir::new().unwrap();
    fs::copy(fixture(), dir.path().join("countries.json")).unwrap();

    let output = countrydb()
        .args(["-q", "--no-color", "export", "-d", "sqlserver", "-o", "mssql"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SQL Server scripts generated in mssql"));
    assert!(stdout.contains("sqlcmd -d <database>"));
    let master = fs::read_to_string(dir.path().join("mssql/00_master_script.sql")).unwrap();
    assert!(master.contains(":r 04_insert_countries.sql\n"));
    let countries = fs::read_to_string(dir.path().join("mssql/04_insert_countries.sql")).unwrap();
    assert!(countries.contains("N'O''Brien''s Land'"));
}

#[test]
fn annotate_reports_bloc_counts() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::copy(fixture(), dir.path().join("data/countries.json")).unwrap();

    let output = countrydb()
        .args(["-q", "annotate"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("EU members:   1"));
    assert!(stdout.contains("EFTA members: 2"));
    assert!(dir.path().join("data/countries_amended.json").is_file());
    assert!(dir.path().join("data/countries_original.json").is_file());
}
