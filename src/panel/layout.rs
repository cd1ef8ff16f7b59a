//! Logical grid coordinates to physical LED chain indices.
//!
//! Each panel is `panel_width` LEDs wide and as tall as the grid, wired as a
//! serpentine: consecutive rows run in opposite directions. Panels are
//! chained left to right. The chain enters every odd panel from the opposite
//! corner, so those panels see their rows in reverse order.
//!
//! Two 16x16 panels with the default parity:
//!
//! ```text
//!            panel 0 (0..256)        panel 1 (256..512)
//! row  0:    15  14 ..  1   0      496 497 .. 511
//! row  1:    16  17 .. 30  31      495 494 .. 480
//! row 15:   240 241 .. 254 255     271 270 .. 256
//! ```

use crate::config::ValidConfig;

/// Which rows of a panel run right to left, counted in the panel's own row
/// order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowParity {
    #[default]
    EvenRowsReversed,
    OddRowsReversed,
}

impl RowParity {
    #[inline]
    pub const fn is_reversed(self, local_row: usize) -> bool {
        let even = local_row % 2 == 0;
        match self {
            RowParity::EvenRowsReversed => even,
            RowParity::OddRowsReversed => !even,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelLayout {
    cols: usize,
    rows: usize,
    panel_width: usize,
    panel_count: usize,
    parity: RowParity,
}

impl PanelLayout {
    pub fn new(config: &ValidConfig) -> Self {
        Self {
            cols: config.cols,
            rows: config.rows,
            panel_width: config.panel_width,
            panel_count: config.panel_count(),
            parity: config.row_parity,
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

    #[inline]
    pub fn panel_width(&self) -> usize {
        self.panel_width
    }

    #[inline]
    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    #[inline]
    pub fn parity(&self) -> RowParity {
        self.parity
    }

    /// LEDs in one panel.
    #[inline]
    pub fn panel_len(&self) -> usize {
        self.panel_width * self.rows
    }

    /// Number of addressed LEDs; all indices fall in `0..len()`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Physical chain index of `(col, row)`. Only defined for coordinates
    /// inside the grid.
    #[inline]
    pub fn translate(&self, col: usize, row: usize) -> usize {
        debug_assert!(col < self.cols && row < self.rows);
        let panel = col / self.panel_width;
        let local_col = col % self.panel_width;
        let local_row = if panel % 2 == 1 {
            self.rows - 1 - row
        } else {
            row
        };
        let offset = if self.parity.is_reversed(local_row) {
            self.panel_width - 1 - local_col
        } else {
            local_col
        };
        panel * self.panel_len() + local_row * self.panel_width + offset
    }

    /// Logical coordinate driving chain index `index`.
    pub fn locate(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.len() {
            return None;
        }
        let panel = index / self.panel_len();
        let within = index % self.panel_len();
        let local_row = within / self.panel_width;
        let offset = within % self.panel_width;
        let local_col = if self.parity.is_reversed(local_row) {
            self.panel_width - 1 - offset
        } else {
            offset
        };
        let row = if panel % 2 == 1 {
            self.rows - 1 - local_row
        } else {
            local_row
        };
        Some((panel * self.panel_width + local_col, row))
    }

    /// Chain index of every cell, row-major.
    pub fn index_table(&self) -> Vec<usize> {
        let mut table = Vec::with_capacity(self.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                table.push(self.translate(col, row));
            }
        }
        table
    }
}
