//! Startup configuration errors.
//!
//! Every variant describes a wiring or packing assumption that cannot be met,
//! so none of them is recoverable once the main loop would start.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero (got {cols}x{rows})")]
    ZeroDimension { cols: usize, rows: usize },

    #[error("grid width {cols} is not a multiple of 8 and cannot be byte-packed")]
    ColsNotByteAligned { cols: usize },

    #[error("panel width must be non-zero")]
    ZeroPanelWidth,

    #[error("grid width {cols} does not split into whole panels of width {panel_width}")]
    PanelWidthMismatch { cols: usize, panel_width: usize },

    #[error("LED strip has {available} pixels but the grid needs {needed}")]
    StripTooShort { needed: usize, available: usize },

    #[error("grid of {cells} cells is too large to address")]
    GridTooLarge { cells: usize },

    #[error("fade rendering needs at least one step")]
    ZeroFadeSteps,

    #[error("{steps} fade steps exceed the {max} distinct brightness levels")]
    TooManyFadeSteps { steps: usize, max: usize },

    #[error("luminance palette has {got} levels, expected {expected} for {steps} fade steps")]
    PaletteLength {
        steps: usize,
        expected: usize,
        got: usize,
    },
}
