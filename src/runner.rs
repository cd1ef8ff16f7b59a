//! The `step -> render -> push -> delay` loop.
//!
//! One call to [`Runner::tick`] completes a whole generation, every fade
//! sub-frame included, before it returns.

use std::time::Duration;

use crate::Rgb;
use crate::config::ValidConfig;
use crate::io::{ByteSource, Clock, DisplaySink};
use crate::life::{StagnationDetector, World};
use crate::panel::Renderer;

pub struct Runner<S, C, R> {
    config: ValidConfig,
    world: World,
    renderer: Renderer,
    sink: S,
    clock: C,
    source: R,
    detector: Option<StagnationDetector>,
    reseeds: u64,
}

impl<S, C, R> Runner<S, C, R>
where
    S: DisplaySink,
    C: Clock,
    R: ByteSource,
{
    /// Build the world and renderer and seed the first generation.
    pub fn new(config: ValidConfig, sink: S, clock: C, mut source: R) -> Self {
        let mut world = World::new(&config);
        world.seed(&mut source);
        let renderer = Renderer::new(&config);
        let detector = config
            .reseed_on_stagnation
            .then(|| StagnationDetector::new(config.stagnation_patience));
        log::info!(
            "runner: {} panel(s), {} LEDs, {} frame(s) per generation",
            config.panel_count(),
            config.led_count,
            renderer.frames_per_generation()
        );
        Self {
            config,
            world,
            renderer,
            sink,
            clock,
            source,
            detector,
            reseeds: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &ValidConfig {
        &self.config
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[inline]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Times the world was reseeded after stagnating.
    #[inline]
    pub fn reseeds(&self) -> u64 {
        self.reseeds
    }

    /// Delay after each display refresh.
    pub fn frame_delay(&self) -> Duration {
        // At most `MAX_FADE_STEPS + 1`, enforced by validation.
        let frames = self.renderer.frames_per_generation() as u32;
        self.config.generation_delay / frames
    }

    /// Push the current generation as a steady frame.
    pub fn show(&mut self) {
        let pixels = self.renderer.render_direct(&self.world);
        self.sink.push(pixels);
    }

    /// Step every channel, then reseed if the world died out or stagnated.
    /// Returns `true` when a reseed happened.
    pub fn advance(&mut self) -> bool {
        self.world.step();
        let Some(detector) = self.detector.as_mut() else {
            return false;
        };
        let extinct = self.world.is_extinct();
        let stagnant = detector.observe(self.world.fingerprint());
        if !(extinct || stagnant) {
            return false;
        }
        log::info!(
            "reseeding after generation {} ({})",
            self.world.generation(),
            if extinct { "extinct" } else { "stagnant" }
        );
        self.world.seed(&mut self.source);
        detector.reset();
        self.reseeds += 1;
        true
    }

    /// One generation: advance, then push every sub-frame of the transition
    /// with a delay after each.
    pub fn tick(&mut self) {
        self.advance();
        let delay = self.frame_delay();
        for sub_step in 0..self.renderer.frames_per_generation() {
            let pixels = self.renderer.render_frame(&self.world, sub_step);
            self.sink.push(pixels);
            self.clock.sleep(delay);
        }
    }

    /// Run `generations` ticks, or forever with `None`.
    pub fn run(&mut self, generations: Option<u64>) {
        self.show();
        match generations {
            Some(n) => {
                for _ in 0..n {
                    self.tick();
                }
            }
            None => loop {
                self.tick();
            },
        }
    }

    /// Light each cell alone in row-major order, one refresh per cell, then
    /// restore the current generation.
    pub fn diagnostic_sweep(&mut self, color: Rgb, dwell: Duration) {
        let table = self.renderer.layout().index_table();
        for index in table {
            let pixels = self.renderer.render_lit(index, color);
            self.sink.push(pixels);
            self.clock.sleep(dwell);
        }
        self.show();
    }

    pub fn into_parts(self) -> (World, S, C, R) {
        (self.world, self.sink, self.clock, self.source)
    }
}
