// crates/countrydb-core/src/sql/scripts.rs
use super::dialect::Dialect;
use super::schema::create_tables_script;
use super::statement::SqlRow;
use crate::loader::DATA_PROJECT_URL;
use crate::model::CountryDb;
use chrono::NaiveDateTime;

/// The generated files, named by their position in the load sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScriptKind {
    Master,
    CreateTables,
    InsertRegions,
    InsertSubregions,
    InsertCountries,
    ExampleQueries,
}

impl ScriptKind {
    /// Order in which files are produced: the master script last, once
    /// everything it references exists.
    pub const GENERATION_ORDER: [ScriptKind; 6] = [
        ScriptKind::CreateTables,
        ScriptKind::InsertRegions,
        ScriptKind::InsertSubregions,
        ScriptKind::InsertCountries,
        ScriptKind::ExampleQueries,
        ScriptKind::Master,
    ];

    /// Files the master script runs, in order.
    pub const LOAD_SEQUENCE: [ScriptKind; 4] = [
        ScriptKind::CreateTables,
        ScriptKind::InsertRegions,
        ScriptKind::InsertSubregions,
        ScriptKind::InsertCountries,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ScriptKind::Master => "00_master_script.sql",
            ScriptKind::CreateTables => "01_create_tables.sql",
            ScriptKind::InsertRegions => "02_insert_regions.sql",
            ScriptKind::InsertSubregions => "03_insert_subregions.sql",
            ScriptKind::InsertCountries => "04_insert_countries.sql",
            ScriptKind::ExampleQueries => "05_example_queries.sql",
        }
    }

    fn title(self) -> &'static str {
        match self {
            ScriptKind::Master => "Master script to execute all SQL files",
            ScriptKind::CreateTables => "Table creation script",
            ScriptKind::InsertRegions => "Insert statements for REGIONS table",
            ScriptKind::InsertSubregions => "Insert statements for SUBREGIONS table",
            ScriptKind::InsertCountries => "Insert statements for COUNTRIES table",
            ScriptKind::ExampleQueries => "Example queries for the Countries database",
        }
    }

    /// Progress line the master script prints before running this file.
    fn progress(self) -> &'static str {
        match self {
            ScriptKind::CreateTables => "Creating tables...",
            ScriptKind::InsertRegions => "Inserting regions...",
            ScriptKind::InsertSubregions => "Inserting subregions...",
            ScriptKind::InsertCountries => "Inserting countries...",
            ScriptKind::Master | ScriptKind::ExampleQueries => "",
        }
    }
}

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlScript {
    pub kind: ScriptKind,
    pub contents: String,
}

impl SqlScript {
    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub dialect: Dialect,
    /// Adds a `-- Generated on:` header line; `None` keeps output reproducible.
    pub generated_on: Option<NaiveDateTime>,
}

/// Renders all six files in [`ScriptKind::GENERATION_ORDER`].
pub fn render_scripts(db: &CountryDb, opts: &RenderOptions) -> Vec<SqlScript> {
    ScriptKind::GENERATION_ORDER
        .into_iter()
        .map(|kind| SqlScript {
            kind,
            contents: render(kind, db, opts),
        })
        .collect()
}

fn render(kind: ScriptKind, db: &CountryDb, opts: &RenderOptions) -> String {
    let mut out = header(kind, opts);
    let body = match kind {
        ScriptKind::CreateTables => create_tables_script(opts.dialect),
        ScriptKind::InsertRegions => insert_script(&db.regions, opts.dialect),
        ScriptKind::InsertSubregions => insert_script(&db.subregions, opts.dialect),
        ScriptKind::InsertCountries => insert_script(&db.countries, opts.dialect),
        ScriptKind::ExampleQueries => example_queries(opts.dialect),
        ScriptKind::Master => master_script(opts.dialect),
    };
    out.push_str(&body);
    out
}

fn header(kind: ScriptKind, opts: &RenderOptions) -> String {
    let mut out = format!(
        "-- {} ({})\n-- Based on: {}\n",
        kind.title(),
        opts.dialect.name(),
        DATA_PROJECT_URL
    );
    if let Some(ts) = opts.generated_on {
        out.push_str(&format!("-- Generated on: {}\n", ts.format("%Y-%m-%d %H:%M:%S")));
    }
    out.push('\n');
    out
}

fn insert_script<R: SqlRow>(rows: &[R], dialect: Dialect) -> String {
    let mut out = String::new();
    if let Some(begin) = dialect.begin() {
        out.push_str(begin);
        out.push('\n');
    }
    for row in rows {
        let insert = row.to_insert();
        if dialect.national_text() {
            out.push_str(&format!("{insert:#}"));
        } else {
            out.push_str(&insert.to_string());
        }
        out.push('\n');
    }
    out.push('\n');
    out.push_str(dialect.commit());
    out.push('\n');
    out
}

fn summary_select(dialect: Dialect, with_landlocked: bool) -> String {
    let mut cols = vec![
        "(SELECT COUNT(*) FROM regions) AS total_regions",
        "(SELECT COUNT(*) FROM subregions) AS total_subregions",
        "(SELECT COUNT(*) FROM countries) AS total_countries",
        "(SELECT COUNT(*) FROM countries WHERE independent = 1) AS independent_countries",
        "(SELECT COUNT(*) FROM countries WHERE un_member = 1) AS un_member_countries",
    ];
    if with_landlocked {
        cols.push("(SELECT COUNT(*) FROM countries WHERE landlocked = 1) AS landlocked_countries");
    }
    let mut out = String::from("SELECT\n");
    out.push_str(
        &cols
            .iter()
            .map(|c| format!("    {c}"))
            .collect::<Vec<_>>()
            .join(",\n"),
    );
    match dialect.dual() {
        Some(dual) => {
            out.push('\n');
            out.push_str(dual);
            out.push_str(";\n");
        }
        None => out.push_str(";\n"),
    }
    out
}

fn example_queries(dialect: Dialect) -> String {
    let mut out = String::new();
    out.push_str(
        "\
-- 1. Regions with their number of countries
SELECT r.region_name, COUNT(c.country_id) AS country_count
FROM regions r
LEFT JOIN countries c ON r.region_id = c.region_id
GROUP BY r.region_name
ORDER BY country_count DESC;

-- 2. Subregions with their region and number of countries
SELECT r.region_name, s.subregion_name, COUNT(c.country_id) AS country_count
FROM regions r
JOIN subregions s ON r.region_id = s.region_id
LEFT JOIN countries c ON s.subregion_id = c.subregion_id
GROUP BY r.region_name, s.subregion_name
ORDER BY r.region_name, s.subregion_name;

-- 3. Independent countries in Europe
SELECT c.common_name, c.official_name, c.capital, c.area
FROM countries c
JOIN regions r ON c.region_id = r.region_id
WHERE r.region_name = 'Europe' AND c.independent = 1
ORDER BY c.common_name;

-- 4. Largest countries by area
SELECT ",
    );
    out.push_str(&dialect.top(10).unwrap_or_default());
    out.push_str(
        "c.common_name, c.area, r.region_name, s.subregion_name
FROM countries c
JOIN regions r ON c.region_id = r.region_id
LEFT JOIN subregions s ON c.subregion_id = s.subregion_id
WHERE c.area > 0
ORDER BY c.area DESC",
    );
    if let Some(limit) = dialect.limit(10) {
        out.push('\n');
        out.push_str(&limit);
    }
    out.push_str(
        ";

-- 5. UN member countries
SELECT c.common_name, c.official_name, r.region_name, c.un_regional_group
FROM countries c
JOIN regions r ON c.region_id = r.region_id
WHERE c.un_member = 1
ORDER BY r.region_name, c.common_name;

-- 6. Landlocked countries
SELECT c.common_name, r.region_name, s.subregion_name, c.borders
FROM countries c
JOIN regions r ON c.region_id = r.region_id
LEFT JOIN subregions s ON c.subregion_id = s.subregion_id
WHERE c.landlocked = 1
ORDER BY r.region_name, c.common_name;

-- 7. Countries using the Euro
SELECT c.common_name, c.currencies
FROM countries c
WHERE c.currencies LIKE '%EUR%'
ORDER BY c.common_name;

-- 8. Countries where English is spoken
SELECT c.common_name, c.languages
FROM countries c
WHERE c.languages LIKE '%English%'
ORDER BY c.common_name;

-- 9. Countries with more than one capital
SELECT c.common_name, c.capital
FROM countries c
WHERE c.capital LIKE '%,%'
ORDER BY c.common_name;

-- 10. Summary statistics
",
    );
    out.push_str(&summary_select(dialect, true));
    out
}

fn master_script(dialect: Dialect) -> String {
    let mut out = String::from("-- Execute this script to create and populate the entire database\n\n");
    for kind in ScriptKind::LOAD_SEQUENCE {
        out.push_str(&dialect.echo(kind.progress()));
        out.push('\n');
        out.push_str(&dialect.include(kind.file_name()));
        out.push_str("\n\n");
    }
    let guidance = [
        "Setup complete!".to_owned(),
        String::new(),
        "To run example queries, execute:".to_owned(),
        dialect.include(ScriptKind::ExampleQueries.file_name()),
        String::new(),
        "Database statistics:".to_owned(),
    ];
    for line in &guidance {
        out.push_str(&dialect.echo(line));
        out.push('\n');
    }
    out.push_str(&summary_select(dialect, false));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CountryRow, Region, Subregion};
    use chrono::NaiveDate;

    fn tiny_db() -> CountryDb {
        CountryDb {
            regions: vec![Region {
                id: 1,
                name: "Europe".into(),
            }],
            subregions: vec![Subregion {
                id: 1,
                name: "Western Europe".into(),
                region_id: 1,
            }],
            countries: vec![CountryRow {
                id: 1,
                common_name: "Belgium".into(),
                official_name: "Kingdom of Belgium".into(),
                cca2: "BE".into(),
                cca3: "BEL".into(),
                ccn3: "056".into(),
                cioc: "BEL".into(),
                independent: true,
                status: "officially-assigned".into(),
                un_member: true,
                un_regional_group: "Western European and Others Group".into(),
                region_id: Some(1),
                subregion_id: Some(1),
                capital: "Brussels".into(),
                latlng: "50.83333333, 4".into(),
                landlocked: false,
                borders: "FRA, DEU, LUX, NLD".into(),
                area: 30528.into(),
                tld: ".be".into(),
                currencies: Some(r#"{"EUR":{"name":"Euro","symbol":"€"}}"#.into()),
                languages: None,
                alt_spellings: "BE, België".into(),
                flag_emoji: "🇧🇪".into(),
            }],
        }
    }

    fn by_kind(scripts: &[SqlScript], kind: ScriptKind) -> &str {
        scripts
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| s.contents.as_str())
            .unwrap_or_default()
    }

    #[test]
    fn six_files_master_last() {
        let scripts = render_scripts(&tiny_db(), &RenderOptions::default());
        let names: Vec<&str> = scripts.iter().map(SqlScript::file_name).collect();
        assert_eq!(
            names,
            [
                "01_create_tables.sql",
                "02_insert_regions.sql",
                "03_insert_subregions.sql",
                "04_insert_countries.sql",
                "05_example_queries.sql",
                "00_master_script.sql",
            ]
        );
    }

    #[test]
    fn no_timestamp_by_default() {
        let scripts = render_scripts(&tiny_db(), &RenderOptions::default());
        assert!(scripts.iter().all(|s| !s.contents.contains("Generated on")));
        assert!(scripts
            .iter()
            .all(|s| s.contents.contains("-- Based on: https://github.com/mledoze/countries\n")));
    }

    #[test]
    fn timestamp_header_when_requested() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 0))
            .unwrap();
        let opts = RenderOptions {
            generated_on: Some(ts),
            ..RenderOptions::default()
        };
        let scripts = render_scripts(&tiny_db(), &opts);
        assert!(by_kind(&scripts, ScriptKind::InsertRegions)
            .contains("-- Generated on: 2024-03-09 07:05:00\n"));
    }

    #[test]
    fn insert_files_end_with_commit() {
        for dialect in Dialect::ALL {
            let opts = RenderOptions {
                dialect,
                generated_on: None,
            };
            let scripts = render_scripts(&tiny_db(), &opts);
            for kind in [
                ScriptKind::InsertRegions,
                ScriptKind::InsertSubregions,
                ScriptKind::InsertCountries,
            ] {
                let text = by_kind(&scripts, kind);
                assert!(text.ends_with("\nCOMMIT;\n"), "{dialect} {kind:?}");
                match dialect.begin() {
                    Some(begin) => assert!(text.contains(&format!("\n{begin}\n")), "{dialect}"),
                    None => assert!(!text.contains("BEGIN"), "{dialect}"),
                }
            }
        }
    }

    #[test]
    fn region_file_lists_rows_in_id_order() {
        let scripts = render_scripts(&tiny_db(), &RenderOptions::default());
        assert!(by_kind(&scripts, ScriptKind::InsertRegions)
            .contains("\nINSERT INTO regions (region_id, region_name) VALUES (1, 'Europe');\n\nCOMMIT;\n"));
    }

    #[test]
    fn oracle_master_script_uses_sqlplus_commands() {
        let scripts = render_scripts(&tiny_db(), &RenderOptions::default());
        let master = by_kind(&scripts, ScriptKind::Master);
        let order: Vec<usize> = ScriptKind::LOAD_SEQUENCE
            .iter()
            .map(|k| master.find(&format!("@@{}", k.file_name())).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(master.contains("PROMPT Creating tables...\n@@01_create_tables.sql\n"));
        assert!(master.contains("PROMPT @@05_example_queries.sql\n"));
        assert!(master.contains("\nPROMPT\n"));
        assert!(master.ends_with("FROM dual;\n"));
    }

    #[test]
    fn postgres_and_sqlite_variants() {
        let pg = render_scripts(
            &tiny_db(),
            &RenderOptions {
                dialect: Dialect::Postgres,
                generated_on: None,
            },
        );
        assert!(by_kind(&pg, ScriptKind::Master).contains("\\ir 02_insert_regions.sql\n"));
        assert!(!by_kind(&pg, ScriptKind::ExampleQueries).contains("dual"));

        let lite = render_scripts(
            &tiny_db(),
            &RenderOptions {
                dialect: Dialect::Sqlite,
                generated_on: None,
            },
        );
        let queries = by_kind(&lite, ScriptKind::ExampleQueries);
        assert!(queries.contains("ORDER BY c.area DESC\nLIMIT 10;\n"));
        assert!(by_kind(&lite, ScriptKind::Master).contains(".read 04_insert_countries.sql\n"));
    }

    #[test]
    fn mysql_and_sql_server_variants() {
        let my = render_scripts(
            &tiny_db(),
            &RenderOptions {
                dialect: Dialect::MySql,
                generated_on: None,
            },
        );
        assert!(by_kind(&my, ScriptKind::ExampleQueries).contains("ORDER BY c.area DESC\nLIMIT 10;\n"));
        assert!(by_kind(&my, ScriptKind::Master).contains("SOURCE 01_create_tables.sql;\n"));
        assert!(by_kind(&my, ScriptKind::InsertRegions).contains("\nSTART TRANSACTION;\n"));
        assert!(by_kind(&my, ScriptKind::InsertCountries).contains("\n    'Belgium',\n"));

        let ms = render_scripts(
            &tiny_db(),
            &RenderOptions {
                dialect: Dialect::SqlServer,
                generated_on: None,
            },
        );
        let queries = by_kind(&ms, ScriptKind::ExampleQueries);
        assert!(queries.contains("-- 4. Largest countries by area\nSELECT TOP 10 c.common_name, c.area,"));
        assert!(queries.contains("ORDER BY c.area DESC;\n"));
        assert!(!queries.contains("LIMIT") && !queries.contains("FETCH FIRST"));
        let master = by_kind(&ms, ScriptKind::Master);
        assert!(master.contains("PRINT 'Inserting regions...';\n:r 02_insert_regions.sql\n"));
        assert!(by_kind(&ms, ScriptKind::InsertRegions)
            .contains("VALUES (1, N'Europe');"));
        assert!(by_kind(&ms, ScriptKind::InsertCountries).contains("\n    N'🇧🇪'\n);"));
    }

    #[test]
    fn ten_example_queries() {
        let scripts = render_scripts(&tiny_db(), &RenderOptions::default());
        let queries = by_kind(&scripts, ScriptKind::ExampleQueries);
        for n in 1..=10 {
            assert!(queries.contains(&format!("\n-- {n}. ")), "query {n}");
        }
        assert!(queries.contains("FETCH FIRST 10 ROWS ONLY;"));
        assert_eq!(queries.matches("SELECT c.").count() + queries.matches("SELECT r.").count(), 9);
    }
}
