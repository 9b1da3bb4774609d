// Metadata table: a headerless CSV mapping template slugs to the
// optional header fields and labels attached to each update.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::io::Read;

/// Columns: slug, subject, from_email, from_name, label1..label4.
const EXPECTED_COLUMNS: usize = 8;

/// Per-slug metadata. Empty strings mean "not provided" — the payload
/// builder drops them entirely instead of sending empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub subject: String,
    pub from_email: String,
    pub from_name: String,
    /// 0 to 4 labels, in CSV column order, empty positions skipped.
    pub labels: Vec<String>,
}

pub type MetadataTable = HashMap<String, MetadataRecord>;

/// Load the metadata CSV from disk. An unreadable or malformed file is
/// fatal; there is no partial metadata.
pub fn load_metadata(path: &str) -> Result<MetadataTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open metadata file {path}"))?;
    parse_metadata(file).with_context(|| format!("Failed to parse metadata file {path}"))
}

/// Parse CSV rows from any reader. No header row — every row is data.
/// A duplicate slug is resolved last-write-wins. A row with fewer than
/// 8 columns is a hard error naming the row and the shortfall, rather
/// than an index panic deep in the push loop.
pub fn parse_metadata<R: Read>(reader: R) -> Result<MetadataTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut table = MetadataTable::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let row = row.with_context(|| format!("Malformed CSV syntax at row {}", idx + 1))?;
        if row.len() < EXPECTED_COLUMNS {
            bail!(
                "Metadata row {} has {} columns, expected at least {}",
                idx + 1,
                row.len(),
                EXPECTED_COLUMNS
            );
        }

        let labels = (4..EXPECTED_COLUMNS)
            .map(|i| row[i].to_string())
            .filter(|label| !label.is_empty())
            .collect();

        table.insert(
            row[0].to_string(),
            MetadataRecord {
                subject: row[1].to_string(),
                from_email: row[2].to_string(),
                from_name: row[3].to_string(),
                labels,
            },
        );
    }
    Ok(table)
}
