use std::collections::HashSet;

use panel_life::BitGrid;
use panel_life::life::step;
use rand::SeedableRng;

fn grid_with(cols: usize, rows: usize, cells: &[(usize, usize)]) -> BitGrid {
    let mut grid = BitGrid::new(cols, rows).unwrap();
    grid.set_cells_alive(cells.iter().copied());
    grid
}

fn stepped(grid: &BitGrid) -> BitGrid {
    let mut next = BitGrid::new(grid.cols(), grid.rows()).unwrap();
    step(grid, &mut next);
    next
}

fn assert_alive(grid: &BitGrid, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        assert!(grid.get(x, y), "expected alive at ({x},{y})");
    }
}

fn live_set(grid: &BitGrid) -> HashSet<(usize, usize)> {
    grid.live_cells().collect()
}

/// Reference stepper on a bounded grid with dead surroundings.
fn step_naive(cells: &HashSet<(usize, usize)>, cols: usize, rows: usize) -> HashSet<(usize, usize)> {
    let mut next = HashSet::new();
    for y in 0..rows as i64 {
        for x in 0..cols as i64 {
            let mut neighbors = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let (nx, ny) = (x + dx, y + dy);
                    if nx >= 0 && ny >= 0 && cells.contains(&(nx as usize, ny as usize)) {
                        neighbors += 1;
                    }
                }
            }
            let alive = cells.contains(&(x as usize, y as usize));
            let next_alive = if alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            if next_alive {
                next.insert((x as usize, y as usize));
            }
        }
    }
    next
}

#[test]
fn isolated_cell_dies() {
    let grid = grid_with(16, 16, &[(7, 7)]);
    assert!(stepped(&grid).is_empty());
}

#[test]
fn block_is_stable() {
    let block = [(4, 4), (5, 4), (4, 5), (5, 5)];
    let grid = grid_with(16, 16, &block);
    let next = stepped(&grid);
    assert_eq!(live_set(&next), block.iter().copied().collect());
}

#[test]
fn blinker_oscillates() {
    let grid = grid_with(16, 16, &[(6, 8), (7, 8), (8, 8)]);

    let vertical = stepped(&grid);
    assert_alive(&vertical, &[(7, 7), (7, 8), (7, 9)]);
    assert_eq!(vertical.population(), 3);

    let horizontal = stepped(&vertical);
    assert_eq!(horizontal, grid);
}

#[test]
fn blinker_in_corner_is_clipped() {
    // Against the top edge there is no row -1, so the vertical phase loses a cell.
    let grid = grid_with(16, 16, &[(0, 0), (1, 0), (2, 0)]);
    let next = stepped(&grid);
    assert_eq!(live_set(&next), [(1, 0), (1, 1)].into_iter().collect());
}

#[test]
fn glider_moves_diagonally_every_four_steps() {
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut grid = grid_with(16, 16, &glider);
    for _ in 0..4 {
        grid = stepped(&grid);
    }
    let shifted: HashSet<_> = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    assert_eq!(live_set(&grid), shifted);
}

#[test]
fn step_overwrites_stale_bits() {
    let grid = grid_with(16, 16, &[(3, 3)]);
    let mut next = BitGrid::new(16, 16).unwrap();
    for row in 0..16 {
        for col in 0..16 {
            next.set(col, row, true);
        }
    }
    step(&grid, &mut next);
    assert!(next.is_empty());
}

#[test]
fn step_is_deterministic() {
    let mut grid = BitGrid::new(32, 16).unwrap();
    grid.randomize(&mut rand::rngs::StdRng::seed_from_u64(0xA1));
    let a = stepped(&grid);
    let b = stepped(&grid);
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn matches_naive_on_random_seeds() {
    for seed in [11u64, 22, 33, 44] {
        let (cols, rows) = (32, 16);
        let mut grid = BitGrid::new(cols, rows).unwrap();
        grid.randomize(&mut rand::rngs::StdRng::seed_from_u64(seed));
        let mut expected = live_set(&grid);
        for generation in 0..12 {
            grid = stepped(&grid);
            expected = step_naive(&expected, cols, rows);
            assert_eq!(
                live_set(&grid),
                expected,
                "live-set mismatch at generation {generation} seed {seed}"
            );
        }
    }
}
