//! CSV loaders for the files written by [`crate::csv`].
//!
//! Each loader has a path form and a `_reader` form over any `Read` source
//! (pass a `std::io::Cursor` in tests).
//!
//! - Grid rows may be ragged on disk; the grid constructor reports which
//!   row is short.
//! - Location files are matched by header name; `Lat`/`Lon` are ignored.
//! - Cost-matrix cells accept `inf` or an empty cell as unreachable.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;

use rn_core::{CostMatrix, Location, PathCost};
use rn_terrain::TerrainGrid;

use crate::{OutputError, OutputResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Row")]
    row:  u32,
    #[serde(rename = "Col")]
    col:  u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a header-less terrain grid.
pub fn read_grid_csv(path: &Path, impassable_at: u32) -> OutputResult<TerrainGrid> {
    read_grid_reader(File::open(path)?, impassable_at)
}

/// Like [`read_grid_csv`] but accepts any `Read` source.
pub fn read_grid_reader<R: Read>(reader: R, impassable_at: u32) -> OutputResult<TerrainGrid> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|field| {
                field.trim().parse::<u32>().map_err(|e| OutputError::Parse {
                    line:    line_of(&record),
                    message: format!("invalid terrain cost {field:?}: {e}"),
                })
            })
            .collect::<OutputResult<Vec<u32>>>()?;
        rows.push(row);
    }
    Ok(TerrainGrid::from_rows(rows, impassable_at)?)
}

/// Load the ordered location list.  Uniqueness and bounds are checked when
/// the list is handed to the pipeline.
pub fn read_locations_csv(path: &Path) -> OutputResult<Vec<Location>> {
    read_locations_reader(File::open(path)?)
}

/// Like [`read_locations_csv`] but accepts any `Read` source.
pub fn read_locations_reader<R: Read>(reader: R) -> OutputResult<Vec<Location>> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    rdr.deserialize::<LocationRecord>()
        .map(|r| -> OutputResult<Location> {
            let r = r?;
            Ok(Location::new(r.city, r.row, r.col))
        })
        .collect()
}

/// Load a named cost matrix.
pub fn read_cost_matrix_csv(path: &Path) -> OutputResult<CostMatrix> {
    read_cost_matrix_reader(File::open(path)?)
}

/// Like [`read_cost_matrix_csv`] but accepts any `Read` source.
pub fn read_cost_matrix_reader<R: Read>(reader: R) -> OutputResult<CostMatrix> {
    let mut rdr = ReaderBuilder::new().has_headers(false).from_reader(reader);
    let mut records = rdr.records();

    let header = match records.next() {
        Some(h) => h?,
        None => {
            return Err(OutputError::Parse { line: None, message: "missing header row".into() });
        }
    };
    let names: Vec<String> = header.iter().skip(1).map(str::to_owned).collect();

    let mut rows = Vec::with_capacity(names.len());
    for record in records {
        let record = record?;
        let i = rows.len();
        let label = record.get(0).unwrap_or_default();
        if names.get(i).map(String::as_str) != Some(label) {
            return Err(OutputError::Parse {
                line:    line_of(&record),
                message: format!("row {} is labelled {label:?}, expected {:?}", i + 1, names.get(i)),
            });
        }
        let costs = record
            .iter()
            .skip(1)
            .map(|field| {
                field.parse::<PathCost>().map_err(|e| OutputError::Parse {
                    line:    line_of(&record),
                    message: format!("invalid cost {field:?}: {e}"),
                })
            })
            .collect::<OutputResult<Vec<_>>>()?;
        rows.push(costs);
    }
    Ok(CostMatrix::from_rows(names, rows)?)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn line_of(record: &StringRecord) -> Option<u64> {
    record.position().map(|p| p.line())
}
