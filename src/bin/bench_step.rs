#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use panel_life::{LifeConfig, Renderer, World};
use rand::SeedableRng;
use std::time::Instant;

fn bench(cols: usize, rows: usize, fade: Option<usize>, iterations: u64) -> (f64, f64, usize) {
    let config = LifeConfig::default()
        .cols(cols)
        .rows(rows)
        .panel_width(16)
        .led_count(cols * rows)
        .fade_steps(fade)
        .validate()
        .expect("benchmark configuration is valid");
    let mut world = World::new(&config);
    let mut renderer = Renderer::new(&config);
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED_1234_ABCD_EF01);
    world.seed(&mut rng);

    let mut step_total = std::time::Duration::ZERO;
    let mut render_total = std::time::Duration::ZERO;
    for _ in 0..iterations {
        let start = Instant::now();
        world.step();
        step_total += start.elapsed();

        let start = Instant::now();
        for sub_step in 0..renderer.frames_per_generation() {
            std::hint::black_box(renderer.render_frame(&world, sub_step));
        }
        render_total += start.elapsed();
    }

    let step_us = step_total.as_secs_f64() * 1e6 / iterations as f64;
    let render_us = render_total.as_secs_f64() * 1e6 / iterations as f64;
    (step_us, render_us, world.population())
}

fn main() {
    let cases: &[(usize, usize, Option<usize>, u64)] = &[
        (16, 16, None, 20_000),    // single panel
        (32, 16, None, 20_000),    // two chained panels
        (32, 16, Some(16), 5_000), // two panels, fade
        (128, 64, None, 2_000),
        (256, 256, None, 200),
    ];

    println!(
        "{:<10} {:>6} {:>8} {:>12} {:>14} {:>8}",
        "Grid", "Fade", "Iters", "Step(us)", "Render(us)", "Pop"
    );
    println!("{}", "-".repeat(64));

    for &(cols, rows, fade, iters) in cases {
        let (step_us, render_us, pop) = bench(cols, rows, fade, iters);
        println!(
            "{:<10} {:>6} {:>8} {:>12.2} {:>14.2} {:>8}",
            format!("{}x{}", cols, rows),
            fade.map_or("-".to_string(), |s| s.to_string()),
            iters,
            step_us,
            render_us,
            pop
        );
    }
}
