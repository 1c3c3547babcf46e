//! CSV output backend.
//!
//! Creates up to four files in the configured output directory:
//!
//! | File               | Contents                                                 |
//! |--------------------|----------------------------------------------------------|
//! | `map.csv`          | terrain grid, one header-less row per grid row           |
//! | `cities.csv`       | `City,Lat,Lon,Row,Col` (lat/lon are written as `0`)      |
//! | `city_paths.csv`   | empty corner cell + names header; one row per location   |
//! | `mst_results.csv`  | `City 1,City 2,Cost` rows, blank row, total and count    |
//!
//! Unreachable matrix entries are written as `inf`.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use rn_core::{CostMatrix, LocationSet};
use rn_mst::SpanningForest;
use rn_terrain::TerrainGrid;

use crate::writer::OutputWriter;
use crate::OutputResult;

pub const GRID_FILE:        &str = "map.csv";
pub const LOCATIONS_FILE:   &str = "cities.csv";
pub const COST_MATRIX_FILE: &str = "city_paths.csv";
pub const MST_FILE:         &str = "mst_results.csv";

// ── Format writers ────────────────────────────────────────────────────────────

/// Header-less rows of terrain costs.
pub fn write_grid_csv<W: Write>(out: W, grid: &TerrainGrid) -> OutputResult<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_writer(out);
    for row in grid.iter_rows() {
        w.write_record(row.iter().map(u32::to_string))?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_locations_csv<W: Write>(out: W, locations: &LocationSet) -> OutputResult<()> {
    let mut w = WriterBuilder::new().from_writer(out);
    w.write_record(["City", "Lat", "Lon", "Row", "Col"])?;
    for (_, loc) in locations.iter() {
        w.write_record([
            loc.name.clone(),
            "0".to_owned(),
            "0".to_owned(),
            loc.coord.row.to_string(),
            loc.coord.col.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_cost_matrix_csv<W: Write>(out: W, matrix: &CostMatrix) -> OutputResult<()> {
    let mut w = WriterBuilder::new().from_writer(out);
    w.write_record(std::iter::once("").chain(matrix.names().iter().map(String::as_str)))?;
    for (i, name) in matrix.names().iter().enumerate() {
        let row = matrix.row(rn_core::LocationId(i as u32));
        w.write_record(std::iter::once(name.clone()).chain(row.iter().map(|c| c.to_string())))?;
    }
    w.flush()?;
    Ok(())
}

/// Accepted edges with costs to two decimals, a blank row, then the
/// `Total MST Cost` and `Number of Edges` summary rows.
pub fn write_mst_csv<W: Write>(out: W, matrix: &CostMatrix, forest: &SpanningForest) -> OutputResult<()> {
    // Summary rows have two fields, edge rows three.
    let mut w = WriterBuilder::new().flexible(true).from_writer(out);
    w.write_record(["City 1", "City 2", "Cost"])?;
    for e in forest.edges() {
        w.write_record([
            matrix.name(e.a).to_owned(),
            matrix.name(e.b).to_owned(),
            format!("{:.2}", e.cost),
        ])?;
    }
    // The blank separator line is not a record; write it to the sink.
    let mut inner = w.into_inner().map_err(|e| e.into_error())?;
    inner.write_all(b"\n")?;
    let mut w = WriterBuilder::new().flexible(true).from_writer(inner);
    w.write_record(["Total MST Cost".to_owned(), format!("{:.2}", forest.total_cost())])?;
    w.write_record(["Number of Edges".to_owned(), forest.edge_count().to_string()])?;
    w.flush()?;
    Ok(())
}

// ── CsvWriter ─────────────────────────────────────────────────────────────────

/// Writes planner artefacts as CSV files in one directory.
pub struct CsvWriter {
    dir: PathBuf,
}

impl CsvWriter {
    /// Use `dir` for all files, creating it if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf() })
    }

    /// Full path of `file` inside the output directory.
    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn create(&self, file: &str) -> OutputResult<File> {
        Ok(File::create(self.path(file))?)
    }
}

impl OutputWriter for CsvWriter {
    fn write_grid(&mut self, grid: &TerrainGrid) -> OutputResult<()> {
        write_grid_csv(self.create(GRID_FILE)?, grid)
    }

    fn write_locations(&mut self, locations: &LocationSet) -> OutputResult<()> {
        write_locations_csv(self.create(LOCATIONS_FILE)?, locations)
    }

    fn write_cost_matrix(&mut self, matrix: &CostMatrix) -> OutputResult<()> {
        write_cost_matrix_csv(self.create(COST_MATRIX_FILE)?, matrix)
    }

    fn write_forest(&mut self, matrix: &CostMatrix, forest: &SpanningForest) -> OutputResult<()> {
        write_mst_csv(self.create(MST_FILE)?, matrix, forest)
    }
}
