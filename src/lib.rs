//! Bit-packed Conway's Game of Life (B3/S23) for serpentine-wired LED panels.
//!
//! The engine lives in [`life`]: packed cell storage, the transition rule and a
//! double-buffered [`World`]. The display side lives in [`panel`]: logical to
//! physical LED address translation and the direct/fade renderer. [`runner`]
//! ties both to the collaborators in [`io`].

pub mod config;
pub mod error;
pub mod io;
pub mod life;
pub mod panel;
pub mod runner;

pub use config::{ChannelMode, LifeConfig, ValidConfig};
pub use error::ConfigError;
pub use life::{BitGrid, World};
pub use panel::{Luminance, PanelLayout, Renderer, RowParity};
pub use runner::Runner;

/// Pixel type pushed to the LED chain.
pub type Rgb = smart_leds::RGB8;
