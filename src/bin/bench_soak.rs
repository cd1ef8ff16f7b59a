//! Lifespan of random worlds before they die out or start repeating.
//!
//! Each seed is an independent world, so seeds run in parallel.

use panel_life::life::StagnationDetector;
use panel_life::{LifeConfig, World};
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

const SEEDS: u64 = 4_096;
const MAX_GENERATIONS: u64 = 10_000;
const PATIENCE: u32 = 20;

fn lifespan(config: &panel_life::ValidConfig, seed: u64) -> u64 {
    let mut world = World::new(config);
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    world.seed(&mut rng);
    let mut detector = StagnationDetector::new(PATIENCE);

    while world.generation() < MAX_GENERATIONS {
        world.step();
        if world.is_extinct() || detector.observe(world.fingerprint()) {
            break;
        }
    }
    world.generation()
}

fn main() {
    let presets = [
        ("16x16", LifeConfig::single_panel()),
        ("32x16", LifeConfig::dual_panel()),
    ];

    println!(
        "{:<8} {:>8} {:>10} {:>10} {:>10} {:>12}",
        "Grid", "Seeds", "Mean", "Median", "Max", "Total(ms)"
    );
    println!("{}", "-".repeat(64));

    for (name, config) in presets {
        let config = config.validate().expect("preset is valid");
        let start = Instant::now();
        let mut spans: Vec<u64> = (0..SEEDS)
            .into_par_iter()
            .map(|seed| lifespan(&config, seed))
            .collect();
        let total_ms = start.elapsed().as_secs_f64() * 1000.0;

        spans.sort_unstable();
        let mean = spans.iter().sum::<u64>() as f64 / spans.len() as f64;
        let median = spans[spans.len() / 2];
        let max = spans[spans.len() - 1];
        println!(
            "{:<8} {:>8} {:>10.1} {:>10} {:>10} {:>12.1}",
            name, SEEDS, mean, median, max, total_ms
        );
    }
}
