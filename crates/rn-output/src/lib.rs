//! `rn-output`: planner files and text reports.
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`csv`]      | `CsvWriter` and the per-file `write_*_csv` functions         |
//! | [`reader`]   | `read_grid_csv`, `read_locations_csv`, `read_cost_matrix_csv` |
//! | [`render`]   | MST table, connection summary, disconnected-component report |
//!
//! [`CsvWriter`] implements [`OutputWriter`], one method per artefact.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rn_output::{CsvWriter, OutputWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_cost_matrix(report.matrix())?;
//! writer.write_forest(report.matrix(), report.forest())?;
//! print!("{}", rn_output::render_mst_table(report.matrix(), report.forest()));
//! ```

pub mod csv;
pub mod error;
pub mod reader;
pub mod render;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::{
    write_cost_matrix_csv, write_grid_csv, write_locations_csv, write_mst_csv, CsvWriter,
    COST_MATRIX_FILE, GRID_FILE, LOCATIONS_FILE, MST_FILE,
};
pub use error::{OutputError, OutputResult};
pub use reader::{
    read_cost_matrix_csv, read_cost_matrix_reader, read_grid_csv, read_grid_reader,
    read_locations_csv, read_locations_reader,
};
pub use render::{render_connection_summary, render_disconnected, render_mst_table};
pub use writer::OutputWriter;
