//! Packed boolean cell storage.
//!
//! Eight horizontally adjacent cells share one byte. Bytes are stored column
//! group major: `bytes[group * rows + row]` holds columns `group*8 .. group*8+8`
//! of `row`, with the lowest column in the most significant bit.

use crate::config::{CELLS_PER_BYTE, check_grid_dims};
use crate::error::ConfigError;
use crate::io::ByteSource;

const HIGH_BIT: u8 = 0x80;

/// Offsets of the 8 surrounding cells.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitGrid {
    cols: usize,
    rows: usize,
    bytes: Box<[u8]>,
}

impl BitGrid {
    /// Create an all-dead grid. `cols` must be a non-zero multiple of 8.
    pub fn new(cols: usize, rows: usize) -> Result<Self, ConfigError> {
        check_grid_dims(cols, rows)?;
        Ok(Self::zeroed(cols, rows))
    }

    /// Caller has already validated the dimensions.
    pub(crate) fn zeroed(cols: usize, rows: usize) -> Self {
        let len = (cols / CELLS_PER_BYTE) * rows;
        Self {
            cols,
            rows,
            bytes: vec![0u8; len].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Storage bytes per row.
    #[inline]
    pub fn byte_cols(&self) -> usize {
        self.cols / CELLS_PER_BYTE
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The byte holding columns `group*8 .. group*8+8` of `row`.
    #[inline]
    pub fn byte(&self, group: usize, row: usize) -> u8 {
        self.bytes[group * self.rows + row]
    }

    #[inline(always)]
    fn locate(&self, col: usize, row: usize) -> (usize, u8) {
        let index = (col / CELLS_PER_BYTE) * self.rows + row;
        let mask = HIGH_BIT >> (col % CELLS_PER_BYTE);
        (index, mask)
    }

    /// Cell state; anything outside the grid is dead.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> bool {
        if col >= self.cols || row >= self.rows {
            return false;
        }
        let (index, mask) = self.locate(col, row);
        self.bytes[index] & mask != 0
    }

    /// Set or clear a cell. Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, alive: bool) {
        if col >= self.cols || row >= self.rows {
            return;
        }
        let (index, mask) = self.locate(col, row);
        if alive {
            self.bytes[index] |= mask;
        } else {
            self.bytes[index] &= !mask;
        }
    }

    /// Signed lookup used by the neighbour scan. Negative coordinates are
    /// rejected before they are converted back to an index.
    #[inline(always)]
    fn get_signed(&self, col: i32, row: i32) -> bool {
        if col < 0 || row < 0 {
            return false;
        }
        self.get(col as usize, row as usize)
    }

    /// Live cells among the 8 surrounding `(col, row)`; off-grid neighbours
    /// count as dead.
    pub fn count_live_neighbors(&self, col: usize, row: usize) -> u8 {
        // Past one beyond the edge no neighbour lies on the grid.
        if col > self.cols || row > self.rows {
            return 0;
        }
        // Dimensions are bounded below `i32::MAX` at construction.
        let (c, r) = (col as i32, row as i32);
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dc, dr)| self.get_signed(c + dc, r + dr))
            .count() as u8
    }

    /// Overwrite every storage byte with one byte from `source`, in
    /// `(group, row)` order.
    pub fn randomize<S: ByteSource + ?Sized>(&mut self, source: &mut S) {
        for byte in self.bytes.iter_mut() {
            *byte = source.next_byte();
        }
    }

    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Copy the contents of a grid of the same shape.
    pub fn copy_from(&mut self, other: &BitGrid) {
        debug_assert_eq!((self.cols, self.rows), (other.cols, other.rows));
        self.bytes.copy_from_slice(&other.bytes);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// Live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols)
                .filter(move |&col| self.get(col, row))
                .map(move |col| (col, row))
        })
    }

    /// Bring `cells` to life.
    pub fn set_cells_alive<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (col, row) in cells {
            self.set(col, row, true);
        }
    }
}
