//! Unit tests for rn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CellId, LocationId};

    #[test]
    fn index_roundtrip() {
        let id = LocationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(LocationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(LocationId::INVALID.0, u32::MAX);
        assert_eq!(CellId::INVALID.0, u32::MAX);
        assert_eq!(LocationId::default(), LocationId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(LocationId(7).to_string(), "LocationId(7)");
    }
}

#[cfg(test)]
mod coord {
    use crate::{CellCoord, STEPS};

    #[test]
    fn steps_stay_in_bounds() {
        let corner = CellCoord::new(0, 0);
        let moves: Vec<_> = STEPS.iter().filter_map(|&s| corner.step(s, 3, 3)).collect();
        // Only S, E and SE are available from the top-left corner.
        assert_eq!(moves, [CellCoord::new(1, 0), CellCoord::new(0, 1), CellCoord::new(1, 1)]);
    }

    #[test]
    fn centre_has_eight_neighbours() {
        let centre = CellCoord::new(1, 1);
        assert_eq!(STEPS.iter().filter_map(|&s| centre.step(s, 3, 3)).count(), 8);
    }

    #[test]
    fn four_diagonal_steps() {
        assert_eq!(STEPS.iter().filter(|s| s.is_diagonal()).count(), 4);
    }

    #[test]
    fn chebyshev_distance() {
        assert_eq!(CellCoord::new(0, 0).chebyshev(CellCoord::new(2, 5)), 5);
        assert_eq!(CellCoord::new(4, 4).chebyshev(CellCoord::new(4, 4)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(CellCoord::new(3, 9).to_string(), "(3, 9)");
    }
}

#[cfg(test)]
mod cost {
    use crate::{DiagonalFactor, PathCost};

    #[test]
    fn parse_unreachable_markers() {
        assert_eq!("inf".parse::<PathCost>().unwrap(), PathCost::Unreachable);
        assert_eq!("INF".parse::<PathCost>().unwrap(), PathCost::Unreachable);
        assert_eq!("".parse::<PathCost>().unwrap(), PathCost::Unreachable);
        assert_eq!(" 12.5 ".parse::<PathCost>().unwrap(), PathCost::Finite(12.5));
        assert!("twelve".parse::<PathCost>().is_err());
    }

    #[test]
    fn display_matches_csv_form() {
        assert_eq!(PathCost::Unreachable.to_string(), "inf");
        assert_eq!(PathCost::Finite(28.28).to_string(), "28.28");
        assert_eq!(PathCost::Finite(20.0).to_string(), "20");
    }

    #[test]
    fn rounding_two_decimals() {
        let c = PathCost::Finite(10.0 * std::f64::consts::SQRT_2).rounded(2);
        assert_eq!(c, PathCost::Finite(14.14));
        assert_eq!(PathCost::Unreachable.rounded(2), PathCost::Unreachable);
    }

    #[test]
    fn diagonal_factors() {
        assert_eq!(DiagonalFactor::Legacy.value(), 1.414);
        assert_eq!(DiagonalFactor::Exact.value(), std::f64::consts::SQRT_2);
        assert_eq!(DiagonalFactor::default(), DiagonalFactor::Exact);
    }
}

#[cfg(test)]
mod location {
    use crate::{Location, LocationId, LocationSet, RnError};

    #[test]
    fn empty_list_rejected() {
        assert!(matches!(LocationSet::new(vec![]), Err(RnError::EmptyLocations)));
    }

    #[test]
    fn duplicate_name_rejected() {
        let result = LocationSet::new(vec![
            Location::new("Mobile AL", 0, 0),
            Location::new("Mobile AL", 1, 1),
        ]);
        assert!(matches!(result, Err(RnError::DuplicateLocation(n)) if n == "Mobile AL"));
    }

    #[test]
    fn ids_follow_list_order() {
        let set = LocationSet::new(vec![
            Location::new("A", 0, 0),
            Location::new("B", 1, 2),
        ])
        .unwrap();
        assert_eq!(set.id_of("B"), Some(LocationId(1)));
        assert_eq!(set.get(LocationId(0)).name, "A");
        assert_eq!(set.id_of("C"), None);
    }

    #[test]
    fn bounds_check_names_offender() {
        let set = LocationSet::new(vec![
            Location::new("In", 2, 2),
            Location::new("Out", 3, 0),
        ])
        .unwrap();
        assert!(set.check_bounds(4, 4).is_ok());
        match set.check_bounds(3, 3) {
            Err(RnError::LocationOutOfBounds { name, .. }) => assert_eq!(name, "Out"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

#[cfg(test)]
mod matrix {
    use crate::{CostMatrix, LocationId, PathCost, RnError};

    use PathCost::{Finite, Unreachable};

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("L{i}")).collect()
    }

    #[test]
    fn lookups_and_unreachable_pairs() {
        let m = CostMatrix::from_rows(
            names(3),
            vec![
                vec![Finite(0.0), Finite(5.0), Unreachable],
                vec![Finite(5.0), Finite(0.0), Unreachable],
                vec![Unreachable, Unreachable, Finite(0.0)],
            ],
        )
        .unwrap();

        assert_eq!(m.len(), 3);
        assert_eq!(m.get(LocationId(0), LocationId(1)), Finite(5.0));
        assert_eq!(m.cost_by_name("L1", "L2").unwrap(), Unreachable);
        assert!(matches!(m.cost_by_name("L1", "nowhere"), Err(RnError::UnknownLocation(_))));
        assert_eq!(m.unreachable_pairs().len(), 4);
        assert_eq!(m.unreachable_pairs()[0], (LocationId(0), LocationId(2)));
        assert!(m.is_symmetric());
    }

    #[test]
    fn upper_triangle_is_row_major() {
        let m = CostMatrix::from_rows(
            names(3),
            vec![
                vec![Finite(0.0), Finite(1.0), Finite(2.0)],
                vec![Finite(1.0), Finite(0.0), Finite(3.0)],
                vec![Finite(2.0), Finite(3.0), Finite(0.0)],
            ],
        )
        .unwrap();
        let upper: Vec<_> = m.upper_triangle().map(|(i, j, _)| (i.0, j.0)).collect();
        assert_eq!(upper, [(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn asymmetric_detected() {
        let m = CostMatrix::from_rows(
            names(2),
            vec![vec![Finite(0.0), Finite(1.0)], vec![Finite(2.0), Finite(0.0)]],
        )
        .unwrap();
        assert!(!m.is_symmetric());
    }

    #[test]
    fn nonzero_diagonal_rejected() {
        let result = CostMatrix::from_rows(
            names(2),
            vec![vec![Finite(0.0), Finite(1.0)], vec![Finite(1.0), Finite(4.0)]],
        );
        assert!(matches!(result, Err(RnError::NonZeroDiagonal(n)) if n == "L1"));
    }

    #[test]
    fn negative_cost_rejected() {
        let result = CostMatrix::from_rows(
            names(2),
            vec![vec![Finite(0.0), Finite(-1.0)], vec![Finite(1.0), Finite(0.0)]],
        );
        assert!(matches!(result, Err(RnError::InvalidCost { .. })));
    }

    #[test]
    fn ragged_rows_rejected() {
        let result = CostMatrix::from_rows(
            names(2),
            vec![vec![Finite(0.0)], vec![Finite(1.0), Finite(0.0)]],
        );
        assert!(matches!(result, Err(RnError::DimensionMismatch { .. })));
    }
}
