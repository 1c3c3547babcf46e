//! Integration tests for rn-output.

#[cfg(test)]
mod helpers {
    use rn_core::{CostMatrix, Location, LocationSet, PathCost};
    use rn_mst::{kruskal, SpanningForest};

    use PathCost::{Finite, Unreachable};

    pub fn locations() -> LocationSet {
        LocationSet::new(vec![
            Location::new("Austin TX", 114, 141),
            Location::new("Boston MA", 41, 279),
            Location::new("Chicago IL", 44, 193),
        ])
        .unwrap()
    }

    /// Connected three-location matrix.
    pub fn matrix() -> CostMatrix {
        CostMatrix::from_rows(
            locations().names(),
            vec![
                vec![Finite(0.0), Finite(2914.5), Finite(2100.25)],
                vec![Finite(2914.5), Finite(0.0), Finite(1650.0)],
                vec![Finite(2100.25), Finite(1650.0), Finite(0.0)],
            ],
        )
        .unwrap()
    }

    /// Boston cut off from the other two.
    pub fn split_matrix() -> CostMatrix {
        CostMatrix::from_rows(
            locations().names(),
            vec![
                vec![Finite(0.0), Unreachable, Finite(2100.25)],
                vec![Unreachable, Finite(0.0), Unreachable],
                vec![Finite(2100.25), Unreachable, Finite(0.0)],
            ],
        )
        .unwrap()
    }

    pub fn forest(m: &CostMatrix) -> SpanningForest {
        kruskal(m).unwrap()
    }
}

// ── CSV writers ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use rn_core::{CostMatrix, PathCost};
    use rn_terrain::TerrainGrid;

    use super::helpers::{forest, locations, matrix, split_matrix};
    use crate::{
        write_cost_matrix_csv, write_mst_csv, CsvWriter, OutputWriter, COST_MATRIX_FILE, GRID_FILE,
        LOCATIONS_FILE, MST_FILE,
    };

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn to_string(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writer_creates_every_file() {
        let dir = tmp();
        let out = dir.path().join("nested");
        let mut w = CsvWriter::new(&out).unwrap();
        let m = matrix();
        w.write_grid(&TerrainGrid::uniform(2, 2, 20, 999).unwrap()).unwrap();
        w.write_locations(&locations()).unwrap();
        w.write_cost_matrix(&m).unwrap();
        w.write_forest(&m, &forest(&m)).unwrap();

        for file in [GRID_FILE, LOCATIONS_FILE, COST_MATRIX_FILE, MST_FILE] {
            assert!(out.join(file).exists(), "{file} missing");
        }
    }

    #[test]
    fn grid_rows_have_no_header() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let grid = TerrainGrid::from_rows(vec![vec![20, 30, 999], vec![0, 20, 20]], 999).unwrap();
        w.write_grid(&grid).unwrap();

        let text = std::fs::read_to_string(w.path(GRID_FILE)).unwrap();
        assert_eq!(text, "20,30,999\n0,20,20\n");
    }

    #[test]
    fn locations_header_and_dummy_coordinates() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_locations(&locations()).unwrap();

        let mut rdr = csv::Reader::from_path(w.path(LOCATIONS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["City", "Lat", "Lon", "Row", "Col"]);
        let first = rdr.records().next().unwrap().unwrap();
        assert_eq!(first.iter().collect::<Vec<_>>(), ["Austin TX", "0", "0", "114", "141"]);
    }

    #[test]
    fn matrix_layout_and_inf_marker() {
        let mut buf = Vec::new();
        write_cost_matrix_csv(&mut buf, &split_matrix()).unwrap();
        let text = to_string(buf);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], ",Austin TX,Boston MA,Chicago IL");
        assert_eq!(lines[1], "Austin TX,0,inf,2100.25");
        assert_eq!(lines[2], "Boston MA,inf,0,inf");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn mst_file_layout() {
        let m = matrix();
        let mut buf = Vec::new();
        write_mst_csv(&mut buf, &m, &forest(&m)).unwrap();
        let text = to_string(buf);
        assert_eq!(
            text,
            "City 1,City 2,Cost\n\
             Boston MA,Chicago IL,1650.00\n\
             Austin TX,Chicago IL,2100.25\n\
             \n\
             Total MST Cost,3750.25\n\
             Number of Edges,2\n"
        );
    }

    #[test]
    fn mst_file_blank_row_follows_header_when_no_edges() {
        let m = CostMatrix::from_rows(vec!["Solo".into()], vec![vec![PathCost::Finite(0.0)]]).unwrap();
        let mut buf = Vec::new();
        write_mst_csv(&mut buf, &m, &forest(&m)).unwrap();
        assert_eq!(
            to_string(buf),
            "City 1,City 2,Cost\n\nTotal MST Cost,0.00\nNumber of Edges,0\n"
        );
    }

    #[test]
    fn mst_file_for_disconnected_network() {
        let m = split_matrix();
        let mut buf = Vec::new();
        write_mst_csv(&mut buf, &m, &forest(&m)).unwrap();
        let text = to_string(buf);
        assert!(text.ends_with("Total MST Cost,2100.25\nNumber of Edges,1\n"));
    }
}

// ── CSV readers ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod reader_tests {
    use std::io::Cursor;

    use rn_core::{PathCost, RnError};

    use super::helpers::{locations, matrix, split_matrix};
    use crate::{
        read_cost_matrix_csv, read_cost_matrix_reader, read_grid_reader, read_locations_reader,
        CsvWriter, OutputError, OutputWriter, COST_MATRIX_FILE,
    };

    #[test]
    fn grid_loads_with_threshold() {
        let grid = read_grid_reader(Cursor::new("20,30\n999, 0\n"), 999).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert_eq!(grid.row(1), [999, 0]);
        assert_eq!(grid.passable_count(), 3);
    }

    #[test]
    fn ragged_grid_reported_by_row() {
        let result = read_grid_reader(Cursor::new("20,30\n20\n"), 999);
        assert!(matches!(
            result,
            Err(OutputError::Network(RnError::RaggedGrid { row: 1, .. }))
        ));
    }

    #[test]
    fn bad_grid_cell_names_line() {
        let result = read_grid_reader(Cursor::new("20,30\n20,hill\n"), 999);
        match result {
            Err(OutputError::Parse { line, message }) => {
                assert_eq!(line, Some(2));
                assert!(message.contains("hill"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn locations_load_in_file_order() {
        const CSV: &str = "City,Lat,Lon,Row,Col\n\
                           Seattle WA,0,0,8,12\n\
                           Denver CO,39.7,-104.9,56,103\n";
        let locs = read_locations_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(locs.len(), 2);
        assert_eq!(locs[0].name, "Seattle WA");
        assert_eq!((locs[1].coord.row, locs[1].coord.col), (56, 103));
    }

    #[test]
    fn locations_missing_column_fails() {
        let result = read_locations_reader(Cursor::new("City,Row\nA,1\n"));
        assert!(matches!(result, Err(OutputError::Csv(_))));
    }

    #[test]
    fn matrix_accepts_inf_and_empty_cells() {
        const CSV: &str = ",A,B,C\n\
                           A,0,12.5,inf\n\
                           B,12.5,0,\n\
                           C,inf,,0\n";
        let m = read_cost_matrix_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(m.names(), ["A", "B", "C"]);
        assert_eq!(m.cost_by_name("A", "B").unwrap(), PathCost::Finite(12.5));
        assert_eq!(m.cost_by_name("B", "C").unwrap(), PathCost::Unreachable);
        assert_eq!(m.cost_by_name("C", "A").unwrap(), PathCost::Unreachable);
        assert_eq!(m.unreachable_pairs().len(), 4);
    }

    #[test]
    fn matrix_row_label_checked() {
        const CSV: &str = ",A,B\nA,0,1\nZ,1,0\n";
        let result = read_cost_matrix_reader(Cursor::new(CSV));
        assert!(matches!(result, Err(OutputError::Parse { line: Some(3), .. })));
    }

    #[test]
    fn matrix_nonzero_diagonal_rejected() {
        const CSV: &str = ",A,B\nA,5,1\nB,1,0\n";
        let result = read_cost_matrix_reader(Cursor::new(CSV));
        assert!(matches!(result, Err(OutputError::Network(RnError::NonZeroDiagonal(_)))));
    }

    #[test]
    fn matrix_empty_input_rejected() {
        let result = read_cost_matrix_reader(Cursor::new(""));
        assert!(matches!(result, Err(OutputError::Parse { line: None, .. })));
    }

    #[test]
    fn written_matrix_reads_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        for m in [matrix(), split_matrix()] {
            w.write_cost_matrix(&m).unwrap();
            let back = read_cost_matrix_csv(&w.path(COST_MATRIX_FILE)).unwrap();
            assert_eq!(back, m);
        }
        assert_eq!(locations().len(), 3);
    }
}

// ── Text reports ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod render_tests {
    use super::helpers::{forest, matrix, split_matrix};
    use crate::{render_connection_summary, render_disconnected, render_mst_table};

    #[test]
    fn mst_table_rows_and_totals() {
        let m = matrix();
        let text = render_mst_table(&m, &forest(&m));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Minimum Spanning Tree (MST) Edges:");
        assert_eq!(lines[1], "=".repeat(70));
        assert_eq!(lines[4], format!("{:<25} {:<25} {:>15}", "Boston MA", "Chicago IL", "1650.00"));
        assert!(text.contains(&format!("{:<50} {:>15}", "Total MST Cost:", "3750.25")));
        assert!(text.contains(&format!("{:<50} {:>15}", "Number of edges:", 2)));
    }

    #[test]
    fn connection_summary_sorted_by_name() {
        let m = matrix();
        let text = render_connection_summary(&m, &forest(&m));
        let austin = text.find("\nAustin TX:\n").unwrap();
        let boston = text.find("\nBoston MA:\n").unwrap();
        let chicago = text.find("\nChicago IL:\n").unwrap();
        assert!(austin < boston && boston < chicago);
        assert!(text.contains("Chicago IL:\n  └─ Austin TX (cost: 2100.25)\n  └─ Boston MA (cost: 1650.00)\n"));
    }

    #[test]
    fn isolated_locations_omitted_from_summary() {
        let m = split_matrix();
        let text = render_connection_summary(&m, &forest(&m));
        assert!(!text.contains("Boston MA"));
    }

    #[test]
    fn disconnected_report_lists_components() {
        let m = split_matrix();
        let text = render_disconnected(&m, &forest(&m)).unwrap();
        assert!(text.contains("Only 1 edges found, need 2"));
        assert!(text.contains("Number of disconnected components: 2"));
        assert!(text.contains("Component 1: Austin TX, Chicago IL\n"));
        assert!(text.contains("Component 2: Boston MA\n"));

        let connected = matrix();
        assert!(render_disconnected(&connected, &forest(&connected)).is_none());
    }
}
