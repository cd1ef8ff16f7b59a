use std::collections::HashSet;

use panel_life::{LifeConfig, PanelLayout, RowParity};
use proptest::prelude::*;

fn layout(config: LifeConfig) -> PanelLayout {
    PanelLayout::new(&config.validate().unwrap())
}

fn assert_bijective(layout: &PanelLayout) {
    let table = layout.index_table();
    let unique: HashSet<_> = table.iter().copied().collect();
    assert_eq!(unique.len(), table.len(), "two cells share an LED");
    assert!(table.iter().all(|&i| i < layout.len()), "index out of range");
    for row in 0..layout.rows() {
        for col in 0..layout.cols() {
            let index = layout.translate(col, row);
            assert_eq!(layout.locate(index), Some((col, row)));
        }
    }
}

#[test]
fn single_panel_row_zero_is_reversed() {
    let layout = layout(LifeConfig::single_panel());
    let first = layout.translate(0, 0);
    let last = layout.translate(15, 0);
    // opposite ends of the same 16-LED run
    assert_eq!(first.min(last), 0);
    assert_eq!(first.max(last), 15);
    for col in 0..16 {
        assert_eq!(layout.translate(col, 0) + layout.translate(15 - col, 0), 15);
    }
}

#[test]
fn single_panel_rows_alternate_direction() {
    let layout = layout(LifeConfig::single_panel());
    for row in 0..16 {
        let left = layout.translate(0, row);
        let right = layout.translate(15, row);
        assert_eq!(left.min(right), row * 16);
        assert_eq!(left.max(right), row * 16 + 15);
        let forward = right > left;
        assert_eq!(forward, row % 2 == 1, "row {row}");
    }
}

#[test]
fn consecutive_chain_indices_are_adjacent_cells() {
    let layout = layout(LifeConfig::single_panel());
    for index in 1..layout.len() {
        let (c0, r0) = layout.locate(index - 1).unwrap();
        let (c1, r1) = layout.locate(index).unwrap();
        let distance = c0.abs_diff(c1) + r0.abs_diff(r1);
        assert_eq!(distance, 1, "chain jumps between {index} and its predecessor");
    }
}

#[test]
fn odd_parity_flips_every_row() {
    let even = layout(LifeConfig::single_panel());
    let odd = layout(LifeConfig::single_panel().row_parity(RowParity::OddRowsReversed));
    for row in 0..16 {
        for col in 0..16 {
            assert_eq!(odd.translate(col, row), even.translate(15 - col, row));
        }
    }
}

#[test]
fn dual_panel_second_panel_enters_from_opposite_corner() {
    let layout = layout(LifeConfig::dual_panel());
    assert_eq!(layout.panel_count(), 2);
    for row in 0..16 {
        for col in 16..32 {
            let index = layout.translate(col, row);
            assert!((256..512).contains(&index));
            // panel 1 uses the single-panel rule on the mirrored row
            let mirrored = 15 - row;
            let local = if mirrored % 2 == 0 {
                15 - (col & 0x0F)
            } else {
                col & 0x0F
            };
            assert_eq!(index, 256 + mirrored * 16 + local);
        }
        for col in 0..16 {
            assert!(layout.translate(col, row) < 256);
        }
    }
}

#[test]
fn dual_panel_chain_resumes_at_far_corner() {
    let layout = layout(LifeConfig::dual_panel());
    let (c0, r0) = layout.locate(255).unwrap();
    let (c1, r1) = layout.locate(256).unwrap();
    assert_eq!((r0, r1), (15, 15));
    assert_eq!((c0, c1), (15, 31));
}

#[test]
fn presets_are_bijective() {
    assert_bijective(&layout(LifeConfig::single_panel()));
    assert_bijective(&layout(LifeConfig::dual_panel()));
    assert_bijective(&layout(LifeConfig::terminal()));
}

#[test]
fn four_panels_are_bijective() {
    let layout = layout(LifeConfig::single_panel().cols(64).rows(8).led_count(512));
    assert_eq!(layout.panel_count(), 4);
    assert_bijective(&layout);
    // panel 2 is wired like panel 0, panel 3 like panel 1
    assert_eq!(layout.translate(32, 0), layout.translate(0, 0) + 256);
    assert_eq!(layout.translate(48, 0), layout.translate(16, 0) + 256);
}

#[test]
fn locate_rejects_unmapped_indices() {
    let layout = layout(LifeConfig::single_panel().led_count(300));
    assert_eq!(layout.len(), 256);
    assert_eq!(layout.locate(256), None);
}

proptest! {
    #[test]
    fn prop_layout_is_injective_and_in_range(
        panels in 1usize..5,
        width_bytes in 1usize..4,
        rows in 1usize..12,
        odd in any::<bool>(),
    ) {
        let panel_width = width_bytes * 8;
        let cols = panels * panel_width;
        let parity = if odd { RowParity::OddRowsReversed } else { RowParity::EvenRowsReversed };
        let config = LifeConfig::default()
            .cols(cols)
            .rows(rows)
            .panel_width(panel_width)
            .led_count(cols * rows)
            .row_parity(parity)
            .validate()
            .unwrap();
        let layout = PanelLayout::new(&config);
        let mut seen = HashSet::new();
        for row in 0..rows {
            for col in 0..cols {
                let index = layout.translate(col, row);
                prop_assert!(index < config.led_count);
                prop_assert!(seen.insert(index), "duplicate index {}", index);
                prop_assert_eq!(layout.locate(index), Some((col, row)));
            }
        }
    }
}
