//! Property-based tests for grid tiling and shortest-path search
//!
//! **Feature: chiton-risk-map**

use chiton_paths::{Cell, Cost, ShortestPathEngine, Weight, WeightedGrid, tile_weight};
use proptest::prelude::*;

/// Rows of weights in `1..=9` with at least one cell
fn rows_strategy(max_side: usize) -> impl Strategy<Value = Vec<Vec<Weight>>> {
    (1..=max_side, 1..=max_side).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(1u8..=9, width), height)
    })
}

/// Grid together with a start and end cell inside it
fn grid_with_cells() -> impl Strategy<Value = (WeightedGrid, Cell, Cell)> {
    rows_strategy(8).prop_flat_map(|rows| {
        let len = rows.len() * rows[0].len();
        (Just(rows), 0..len, 0..len).prop_map(|(rows, start, end)| {
            (WeightedGrid::build(rows).unwrap(), start, end)
        })
    })
}

/// Reference distances by repeated relaxation until nothing changes
fn relaxed_distances(grid: &WeightedGrid, start: Cell) -> Vec<Option<Cost>> {
    let mut distances = vec![None; grid.len()];
    distances[start] = Some(0);
    let mut changed = true;
    while changed {
        changed = false;
        for cell in 0..grid.len() {
            let Some(base) = distances[cell] else {
                continue;
            };
            for edge in grid.neighbors(cell) {
                let candidate = base + Cost::from(edge.weight);
                if distances[edge.to].is_none_or(|known| candidate < known) {
                    distances[edge.to] = Some(candidate);
                    changed = true;
                }
            }
        }
    }
    distances
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Property 1: Uniform grids cost one weight per Manhattan step**
    /// *For any* N x N grid of uniform weight k, the corner-to-corner cost is (2N - 2) * k.
    #[test]
    fn prop_uniform_grid_cost(side in 1usize..=12, weight in 1u8..=9) {
        let grid = WeightedGrid::build(vec![vec![weight; side]; side]).unwrap();
        let mut engine = ShortestPathEngine::new(&grid);

        let expected = (2 * side as Cost - 2) * Cost::from(weight);
        prop_assert_eq!(engine.compute_distance_default().unwrap(), expected);
    }

    /// **Property 2: Tiling by one is the identity**
    #[test]
    fn prop_expand_by_one_is_identity(rows in rows_strategy(10)) {
        let grid = WeightedGrid::build(rows).unwrap();
        prop_assert_eq!(grid.expand(1).unwrap(), grid);
    }

    /// **Property 3: Tiled weights wrap within 1..=9**
    /// *For any* base weight w and tile offset (tx, ty), the tiled weight is
    /// ((w - 1 + tx + ty) mod 9) + 1.
    #[test]
    fn prop_expanded_weights_wrap(rows in rows_strategy(5), multiplier in 1usize..=5) {
        let grid = WeightedGrid::build(rows).unwrap();
        let expanded = grid.expand(multiplier).unwrap();

        prop_assert_eq!(expanded.width(), grid.width() * multiplier);
        prop_assert_eq!(expanded.height(), grid.height() * multiplier);

        for (y, row) in expanded.rows().enumerate() {
            for (x, &weight) in row.iter().enumerate() {
                let (tx, bx) = (x / grid.width(), x % grid.width());
                let (ty, by) = (y / grid.height(), y % grid.height());
                let base = grid.weight(grid.cell_at(bx, by).unwrap()).unwrap();

                prop_assert!((1..=9).contains(&weight));
                prop_assert_eq!(weight, ((base as usize - 1 + tx + ty) % 9) as Weight + 1);
                prop_assert_eq!(weight, tile_weight(base, tx + ty));
            }
        }
    }

    /// **Property 4: Reported distance matches the reconstructed path**
    /// *For any* grid and cells a, b, `get_distance(b)` equals the summed entry weights of
    /// `path_to(b)`, the path starts at a, ends at b, and only takes orthogonal steps.
    #[test]
    fn prop_distance_matches_path((grid, start, end) in grid_with_cells()) {
        let mut engine = ShortestPathEngine::new(&grid);
        let total = engine.compute_distance(start, end).unwrap();
        let path = engine.path_to(end).unwrap();

        prop_assert_eq!(engine.get_distance(end).unwrap(), total);
        prop_assert_eq!(path.first(), Some(&start));
        prop_assert_eq!(path.last(), Some(&end));

        let summed: Cost = path[1..]
            .iter()
            .map(|&cell| Cost::from(grid.weight(cell).unwrap()))
            .sum();
        prop_assert_eq!(summed, total);

        for pair in path.windows(2) {
            prop_assert!(grid.neighbors(pair[0]).iter().any(|e| e.to == pair[1]));
        }
    }

    /// **Property 5: Dijkstra agrees with exhaustive relaxation**
    #[test]
    fn prop_distance_is_optimal((grid, start, end) in grid_with_cells()) {
        let mut engine = ShortestPathEngine::new(&grid);
        let expected = relaxed_distances(&grid, start)[end];

        prop_assert_eq!(Some(engine.compute_distance(start, end).unwrap()), expected);
    }

    /// **Property 6: Reversal shifts the cost by the endpoint weights**
    /// Weights attach to the entered cell, so a -> b and b -> a generally differ; over the same
    /// cells, cost(a, b) + w(a) == cost(b, a) + w(b).
    #[test]
    fn prop_reverse_cost_relation((grid, a, b) in grid_with_cells()) {
        let mut engine = ShortestPathEngine::new(&grid);
        let forward = engine.compute_distance(a, b).unwrap();
        let backward = engine.compute_distance(b, a).unwrap();

        let weight = |cell| Cost::from(grid.weight(cell).unwrap());
        prop_assert_eq!(forward + weight(a), backward + weight(b));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_single_cell_grid() {
        let grid = WeightedGrid::build([[5u8]]).unwrap();
        let mut engine = ShortestPathEngine::new(&grid);

        assert_eq!(engine.compute_distance_default().unwrap(), 0);
        assert_eq!(engine.path_to(0).unwrap(), vec![0]);
    }

    #[test]
    fn test_grid_reused_across_engines() {
        let grid: WeightedGrid = "116\n138\n213".parse().unwrap();
        let mut first = ShortestPathEngine::new(&grid);
        let mut second = ShortestPathEngine::new(&grid);

        assert_eq!(first.compute_distance(0, 8).unwrap(), 7);
        assert_eq!(second.compute_distance(2, 6).unwrap(), 5);
        assert_eq!(first.path_to(8).unwrap(), vec![0, 3, 6, 7, 8]);
    }
}
