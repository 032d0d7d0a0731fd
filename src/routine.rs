//! The seed-and-report routine and its companions.
//!
//! Each routine takes an already-open connection so tests can drive it
//! against an in-memory database; [`open_database`] is the one place a
//! connection is created from configuration.

use anyhow::{Context, Result};
use registrar_db::connection::{self, DbTarget};
use registrar_db::models::{Registration, TableCounts};
use registrar_db::queries::{self, registrations};
use registrar_db::schema;
use registrar_db::seed::Dataset;
use rusqlite::Connection;
use std::io::Write;

use crate::config::Config;
use crate::report::{OutputFormat, Report};

/// Open the database named by the configuration.
pub fn open_database(config: &Config) -> Result<Connection> {
    let target = config.database.target();
    connection::open(&target).with_context(|| format!("Failed to open database at {target}"))
}

/// What a seed-and-report run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub seeded: TableCounts,
    pub rows_reported: usize,
}

/// Drop and recreate the schema, load `dataset`, and write the contents of
/// all three tables to `out`.
///
/// The first failing statement aborts the run; nothing after it executes.
pub fn seed_and_report<W: Write>(
    conn: &Connection,
    dataset: &Dataset,
    format: OutputFormat,
    out: &mut W,
) -> Result<RunSummary> {
    schema::drop_tables(conn).context("Failed to drop tables")?;
    schema::create_tables(conn).context("Failed to create tables")?;

    let seeded = registrar_db::seed::insert_dataset(conn, dataset)
        .context("Failed to insert sample data")?;
    tracing::debug!("Seeded {}", seeded);

    let rows_reported = report(conn, format, out)?;

    Ok(RunSummary {
        seeded,
        rows_reported,
    })
}

/// Write the current contents of all three tables without touching them.
pub fn report<W: Write>(conn: &Connection, format: OutputFormat, out: &mut W) -> Result<usize> {
    let report = Report::query(conn).context("Failed to query tables")?;
    report.write_to(format, out)?;
    Ok(report.row_count())
}

/// Outcome of checking a database against a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub expected: TableCounts,
    pub actual: TableCounts,
    pub orphans: Vec<Registration>,
}

impl Verification {
    pub fn is_ok(&self) -> bool {
        self.expected == self.actual && self.orphans.is_empty()
    }
}

/// Compare row counts with `dataset` and look for registrations whose
/// course or student is missing.
pub fn verify(conn: &Connection, dataset: &Dataset) -> Result<Verification> {
    let actual = queries::count_all(conn).context("Failed to count rows")?;
    let orphans = registrations::find_orphans(conn).context("Failed to check references")?;

    Ok(Verification {
        expected: dataset.counts(),
        actual,
        orphans,
    })
}

/// Where a configuration points, for log messages.
pub fn describe_target(config: &Config) -> String {
    match config.database.target() {
        DbTarget::File(path) => path.display().to_string(),
        DbTarget::Memory => "in-memory database".to_string(),
    }
}
