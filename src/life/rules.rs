//! Rule table and generation stepping for B3/S23.

use super::grid::BitGrid;

const MAX_NEIGHBORS: usize = 8;

/// Next state for every `(alive, live neighbours)` pair.
pub struct RuleTable {
    table: [bool; 2 * (MAX_NEIGHBORS + 1)],
}

/// The standard Game of Life rule.
pub const B3S23: RuleTable = RuleTable::new();

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleTable {
    pub const fn new() -> Self {
        let mut table = [false; 2 * (MAX_NEIGHBORS + 1)];
        let mut neighbors = 0;
        while neighbors <= MAX_NEIGHBORS {
            table[neighbors] = output_for(false, neighbors as u8);
            table[MAX_NEIGHBORS + 1 + neighbors] = output_for(true, neighbors as u8);
            neighbors += 1;
        }
        Self { table }
    }

    #[inline(always)]
    pub fn lookup(&self, alive: bool, neighbors: u8) -> bool {
        self.table[alive as usize * (MAX_NEIGHBORS + 1) + neighbors as usize]
    }
}

const fn output_for(alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}

/// Compute the generation after `curr` into `next`. Every cell of `next` is
/// overwritten.
pub fn step(curr: &BitGrid, next: &mut BitGrid) {
    debug_assert_eq!(
        (curr.cols(), curr.rows()),
        (next.cols(), next.rows()),
        "step between differently shaped grids"
    );
    for row in 0..curr.rows() {
        for col in 0..curr.cols() {
            let neighbors = curr.count_live_neighbors(col, row);
            next.set(col, row, B3S23.lookup(curr.get(col, row), neighbors));
        }
    }
}
