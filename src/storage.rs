//! Reading and writing the backing CSV file.
//!
//! The backing file holds the entire table: a header row naming the declared
//! columns followed by one row per play. Persisting always rewrites the
//! whole file — there is no incremental or streaming path, matching the
//! single-writer, session-local design of the catalog.
//!
//! Loading is tolerant of field-level damage (numeric coercion happens in
//! [`Play::from_row`]) but strict about file structure: an unreadable file
//! or malformed CSV surfaces as an error.

use crate::error::Result;
use crate::record::Play;
use crate::schema::{self, Row};
use log::debug;
use std::path::Path;

/// Read the full table from the backing file.
///
/// Each row is migrated against the declared schema (absent columns filled
/// with defaults, missing ids backfilled) before being mapped to a [`Play`].
/// Unknown extra columns are ignored.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not structurally
/// valid CSV. Field values never cause an error.
pub fn read_table(path: &Path) -> Result<Vec<Play>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut plays = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        schema::migrate(&mut row);
        plays.push(Play::from_row(&row));
    }

    debug!("loaded {} play(s) from {}", plays.len(), path.display());
    Ok(plays)
}

/// Write the full table to the backing file, overwriting it.
///
/// The header row is the declared column set in schema order; every persist
/// serializes every record.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_table(path: &Path, plays: &[Play]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(schema::COLUMNS.iter().map(|column| column.name))?;

    for play in plays {
        let row = play.to_row();
        writer.write_record(schema::COLUMNS.iter().map(|column| {
            row.get(column.name).map(String::as_str).unwrap_or("")
        }))?;
    }
    writer.flush()?;

    debug!("persisted {} play(s) to {}", plays.len(), path.display());
    Ok(())
}
