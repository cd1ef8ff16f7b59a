//! World to pixel buffer.
//!
//! Every channel contributes `blend(off, on, brightness)` to a pixel and the
//! contributions are summed with saturation. In direct mode brightness is
//! either zero or full; in fade mode it follows the [`Luminance`] ramp of the
//! cell's [`Transition`].

use super::layout::PanelLayout;
use super::palette::{FULL_BRIGHTNESS, Luminance, Transition, blend, saturating_add};
use crate::Rgb;
use crate::config::ValidConfig;
use crate::life::World;

const BLACK: Rgb = Rgb::new(0, 0, 0);

pub struct Renderer {
    layout: PanelLayout,
    /// `(off, on)` per channel.
    colors: Vec<(Rgb, Rgb)>,
    luminance: Option<Luminance>,
    pixels: Vec<Rgb>,
}

impl Renderer {
    pub fn new(config: &ValidConfig) -> Self {
        let count = config.channels.count();
        Self {
            layout: PanelLayout::new(config),
            colors: (0..count).map(|i| config.channels.channel_colors(i)).collect(),
            luminance: config.fade().cloned(),
            pixels: vec![BLACK; config.led_count],
        }
    }

    #[inline]
    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    #[inline]
    pub fn fade(&self) -> Option<&Luminance> {
        self.luminance.as_ref()
    }

    /// Display refreshes per generation.
    #[inline]
    pub fn frames_per_generation(&self) -> usize {
        self.luminance.as_ref().map_or(1, |l| l.steps() + 1)
    }

    /// The whole chain, including LEDs past the grid.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Each cell at full or zero brightness from the current generation.
    pub fn render_direct(&mut self, world: &World) -> &[Rgb] {
        fill(&mut self.pixels, &self.layout, &self.colors, world, direct_brightness);
        &self.pixels
    }

    /// Sub-frame `sub_step` of `0..=steps` of the transition from the
    /// previous to the current generation. Without a fade ramp this renders
    /// directly.
    pub fn render_fade(&mut self, world: &World, sub_step: usize) -> &[Rgb] {
        match &self.luminance {
            Some(luminance) => {
                debug_assert!(sub_step <= luminance.steps());
                fill(
                    &mut self.pixels,
                    &self.layout,
                    &self.colors,
                    world,
                    |(previous, current)| {
                        Transition::of(previous, current).brightness(luminance, sub_step)
                    },
                );
            }
            None => fill(&mut self.pixels, &self.layout, &self.colors, world, direct_brightness),
        }
        &self.pixels
    }

    /// Sub-frame `sub_step` in whatever mode the renderer was configured for.
    pub fn render_frame(&mut self, world: &World, sub_step: usize) -> &[Rgb] {
        if self.luminance.is_some() {
            self.render_fade(world, sub_step)
        } else {
            self.render_direct(world)
        }
    }

    /// All grid LEDs black except the one at `(col, row)`.
    pub fn render_probe(&mut self, col: usize, row: usize, color: Rgb) -> &[Rgb] {
        let index = self.layout.translate(col, row);
        self.render_lit(index, color)
    }

    /// All grid LEDs black except chain position `index`. An index past the
    /// grid lights nothing.
    pub fn render_lit(&mut self, index: usize, color: Rgb) -> &[Rgb] {
        let len = self.layout.len();
        self.pixels[..len].fill(BLACK);
        if index < len {
            self.pixels[index] = color;
        }
        &self.pixels
    }
}

#[inline]
fn direct_brightness((_, current): (bool, bool)) -> u8 {
    if current { FULL_BRIGHTNESS } else { 0 }
}

fn fill<F>(
    pixels: &mut [Rgb],
    layout: &PanelLayout,
    colors: &[(Rgb, Rgb)],
    world: &World,
    brightness: F,
) where
    F: Fn((bool, bool)) -> u8,
{
    debug_assert_eq!(world.channel_count(), colors.len());
    debug_assert_eq!((world.cols(), world.rows()), (layout.cols(), layout.rows()));
    for row in 0..layout.rows() {
        for col in 0..layout.cols() {
            let mut color = BLACK;
            for (channel, &(off, on)) in world.channels().iter().zip(colors) {
                let state = (
                    channel.previous().get(col, row),
                    channel.current().get(col, row),
                );
                color = saturating_add(color, blend(off, on, brightness(state)));
            }
            pixels[layout.translate(col, row)] = color;
        }
    }
}
