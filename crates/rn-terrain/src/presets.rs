//! Built-in continental terrain and city list.
//!
//! The continental grid is a coarse 150 × 300 stand-in for the contiguous
//! United States: row 0 is the northern border, column 0 the Pacific coast.
//! It is painted from a handful of rectangles, so every run produces the
//! same grid.
//!
//! | Terrain   | Cost  | Regions                                                  |
//! |-----------|-------|----------------------------------------------------------|
//! | Water     | 999   | Atlantic NE corner, Gulf of Mexico, both coasts, Great Lakes |
//! | Mountains | 30    | Rockies, Sierra Nevada / Cascades, Appalachians          |
//! | Plains    | 20    | everything else                                          |

use rn_core::{Location, RnResult};

use crate::{TerrainGrid, TerrainGridBuilder};

pub const CONTINENT_ROWS: u32 = 150;
pub const CONTINENT_COLS: u32 = 300;

pub const WATER:    u32 = 999;
pub const MOUNTAIN: u32 = 30;
pub const PLAINS:   u32 = 20;

/// Paint the 150 × 300 continental grid.
///
/// Water is painted first so it wins wherever it overlaps a mountain range.
pub fn continental() -> RnResult<TerrainGrid> {
    let rows = CONTINENT_ROWS;
    let cols = CONTINENT_COLS;
    let mut b = TerrainGridBuilder::new(rows, cols, PLAINS).impassable_at(WATER);

    // ── Water ─────────────────────────────────────────────────────────────
    b.paint(0..15, 281..cols, WATER)     // Atlantic, north-east corner
     .paint(131..rows, 61..180, WATER)   // Gulf of Mexico
     .paint(0..rows, 0..3, WATER)        // Pacific coast
     .paint(0..rows, 293..cols, WATER)   // Atlantic coast
     .paint(0..30, 181..240, WATER);     // Great Lakes

    // ── Mountains ─────────────────────────────────────────────────────────
    b.paint(21..120, 31..90, MOUNTAIN)   // Rockies
     .paint(26..100, 6..35, MOUNTAIN)    // Sierra Nevada / Cascades
     .paint(51..110, 211..250, MOUNTAIN); // Appalachians

    b.build()
}

/// The 25 cities placed on the continental grid, in matrix order.
pub fn us_cities() -> Vec<Location> {
    const CITIES: [(&str, u32, u32); 25] = [
        ("New York NY",       50, 264),
        ("Los Angeles CA",    91,  34),
        ("Chicago IL",        44, 193),
        ("Houston TX",       118, 153),
        ("Phoenix AZ",        95,  66),
        ("Philadelphia PA",   55, 260),
        ("San Antonio TX",   120, 137),
        ("San Diego CA",      99,  40),
        ("Dallas TX",         99, 146),
        ("San Jose CA",       71,  15),
        ("Austin TX",        114, 141),
        ("Jacksonville FL",  114, 227),
        ("Fort Worth TX",     99, 143),
        ("Columbus OH",       55, 217),
        ("Charlotte NC",      84, 229),
        ("San Francisco CA",  69,  11),
        ("Indianapolis IN",   56, 201),
        ("Seattle WA",         8,  12),
        ("Denver CO",         56, 103),
        ("Washington DC",     61, 248),
        ("Boston MA",         41, 279),
        ("El Paso TX",       105,  95),
        ("Nashville TN",      79, 197),
        ("Detroit MI",        41, 222),
        ("Oklahoma City OK",  83, 143),
    ];

    CITIES
        .iter()
        .map(|&(name, row, col)| Location::new(name, row, col))
        .collect()
}
