//! Bit-packed Game of Life engine.

mod grid;
pub mod history;
pub mod rules;
mod world;

pub use grid::BitGrid;
pub use history::StagnationDetector;
pub use rules::{B3S23, RuleTable, step};
pub use world::{Channel, World};
