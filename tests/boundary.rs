//! Boundary derivation and sticky pairing over arbitrary polyominoes

use std::collections::HashSet;

use glam::ivec2;
use polycrate::{Direction, Edge, EdgeClass, MergeRequest, Offset, Shape};
use proptest::prelude::*;

/// Distinct cells in a small window, in generation order
fn arb_cells() -> impl Strategy<Value = Vec<Offset>> {
    prop::collection::vec((-3i32..4, -3i32..4), 1..16).prop_map(|raw| {
        let mut seen = HashSet::new();
        raw.into_iter()
            .map(|(x, y)| ivec2(x, y))
            .filter(|o| seen.insert(*o))
            .collect()
    })
}

/// Cells plus sticky overrides on some of their sides
fn arb_sticky_shape() -> impl Strategy<Value = (Vec<Offset>, Vec<Edge>)> {
    arb_cells().prop_flat_map(|cells| {
        let n = cells.len();
        let picks = prop::collection::vec((0..n, 0usize..4), 0..12);
        (Just(cells), picks)
    })
    .prop_map(|(cells, picks)| {
        let mut seen = HashSet::new();
        let overrides = picks
            .into_iter()
            .filter(|pick| seen.insert(*pick))
            .map(|(i, d)| Edge::sticky(cells[i], Direction::ALL[d]))
            .collect();
        (cells, overrides)
    })
}

proptest! {
    #[test]
    fn boundary_is_unique_and_visible((cells, overrides) in arb_sticky_shape()) {
        let shape = Shape::new(cells, overrides).unwrap();

        let ids: HashSet<_> = shape.boundary_ids().iter().collect();
        prop_assert_eq!(ids.len(), shape.boundary_ids().len());
        prop_assert!(shape.boundary_edges().all(|e| !e.is_suppressed()));

        // every visible edge is listed, and nothing else
        let visible = shape.all_edges().filter(|e| !e.is_suppressed()).count();
        prop_assert_eq!(visible, shape.boundary_ids().len());
    }

    #[test]
    fn plain_edges_are_suppressed_exactly_when_covered(cells in arb_cells()) {
        let shape = Shape::new(cells.clone(), []).unwrap();
        for &cell in &cells {
            for dir in Direction::ALL {
                let edge = shape.edge_at(cell, dir).unwrap();
                prop_assert_eq!(edge.is_suppressed(), shape.contains(cell + dir.offset()));
            }
        }
    }

    #[test]
    fn sticky_pairing_is_idempotent((cells, overrides) in arb_sticky_shape()) {
        let mut shape = Shape::new(cells, overrides).unwrap();
        let once = shape.boundary_ids().to_vec();
        prop_assert_eq!(shape.suppress_sticky_pairs(), 0);
        prop_assert_eq!(shape.boundary_ids(), once.as_slice());
    }

    #[test]
    fn no_sticky_edge_faces_another((cells, overrides) in arb_sticky_shape()) {
        let shape = Shape::new(cells, overrides).unwrap();
        for a in shape.all_edges().filter(|e| e.class == EdgeClass::Sticky) {
            if let Some(b) = shape.edge_at(a.facing(), a.direction.opposite()) {
                prop_assert_ne!(b.class, EdgeClass::Sticky);
            }
        }
    }
}

#[test]
fn single_cell_boundary() {
    let shape = Shape::new([ivec2(0, 0)], []).unwrap();
    let dirs: Vec<_> = shape.boundary_edges().map(|e| e.direction).collect();
    assert_eq!(dirs, Direction::ALL);
}

#[test]
fn domino_boundary() {
    let shape = Shape::new([ivec2(0, 0), ivec2(1, 0)], []).unwrap();
    let edges: Vec<_> = shape.boundary_edges().map(|e| (e.position, e.direction)).collect();
    assert_eq!(
        edges,
        [
            (ivec2(0, 0), Direction::Up),
            (ivec2(0, 0), Direction::Down),
            (ivec2(0, 0), Direction::Left),
            (ivec2(1, 0), Direction::Up),
            (ivec2(1, 0), Direction::Down),
            (ivec2(1, 0), Direction::Right),
        ]
    );
}

#[test]
fn merge_then_pair_again_changes_nothing() {
    let left = Shape::new(
        [ivec2(0, 0), ivec2(0, 1)],
        [Edge::sticky(ivec2(0, 1), Direction::Right)],
    )
    .unwrap();
    let right = Shape::new([ivec2(0, 0)], [Edge::sticky(ivec2(0, 0), Direction::Left)]).unwrap();

    let mut merged = MergeRequest::new(&left, ivec2(2, 2), &right, ivec2(3, 3)).merge().unwrap();
    assert_eq!(merged.len(), 3);
    assert!(merged.edge_at(ivec2(0, 1), Direction::Right).unwrap().is_suppressed());
    assert!(merged.edge_at(ivec2(1, 1), Direction::Left).unwrap().is_suppressed());

    let before = merged.boundary_ids().to_vec();
    assert_eq!(merged.suppress_sticky_pairs(), 0);
    assert_eq!(merged.boundary_ids(), before.as_slice());
    assert_eq!(before.len(), 8);
}
