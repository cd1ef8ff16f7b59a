//! Brightness ramp for fade rendering and colour blending.

use crate::Rgb;
use crate::error::ConfigError;

pub const FULL_BRIGHTNESS: u8 = u8::MAX;

/// Brightness per fade step: `levels[0]` is off, `levels[steps]` is full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Luminance {
    levels: Vec<u8>,
}

impl Luminance {
    /// Evenly spaced ramp from 0 to [`FULL_BRIGHTNESS`].
    pub fn linear(steps: usize) -> Self {
        let steps = steps.max(1);
        let levels = (0..=steps)
            .map(|i| (i * FULL_BRIGHTNESS as usize / steps) as u8)
            .collect();
        Self { levels }
    }

    /// Custom ramp with exactly `steps + 1` entries.
    pub fn from_levels(steps: usize, levels: Vec<u8>) -> Result<Self, ConfigError> {
        if steps == 0 {
            return Err(ConfigError::ZeroFadeSteps);
        }
        if levels.len() != steps + 1 {
            return Err(ConfigError::PaletteLength {
                steps,
                expected: steps + 1,
                got: levels.len(),
            });
        }
        Ok(Self { levels })
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.levels.len() - 1
    }

    #[inline]
    pub fn level(&self, step: usize) -> u8 {
        self.levels[step.min(self.steps())]
    }

    #[inline]
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }
}

/// How a cell changed between the previous and current generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Dead,
    Born,
    Died,
    Alive,
}

impl Transition {
    #[inline]
    pub fn of(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, false) => Transition::Dead,
            (false, true) => Transition::Born,
            (true, false) => Transition::Died,
            (true, true) => Transition::Alive,
        }
    }

    /// Brightness at sub-frame `sub_step` of `0..=steps`.
    #[inline]
    pub fn brightness(self, luminance: &Luminance, sub_step: usize) -> u8 {
        let steps = luminance.steps();
        match self {
            Transition::Dead => 0,
            Transition::Alive => luminance.level(steps),
            Transition::Born => luminance.level(sub_step),
            Transition::Died => luminance.level(steps - sub_step.min(steps)),
        }
    }
}

/// Blend from `off` (brightness 0) to `on` (full brightness).
#[inline]
pub fn blend(off: Rgb, on: Rgb, brightness: u8) -> Rgb {
    #[inline(always)]
    fn mix(a: u8, b: u8, t: u8) -> u8 {
        let (a, b, t) = (a as i32, b as i32, t as i32);
        (a + (b - a) * t / FULL_BRIGHTNESS as i32) as u8
    }
    Rgb::new(
        mix(off.r, on.r, brightness),
        mix(off.g, on.g, brightness),
        mix(off.b, on.b, brightness),
    )
}

#[inline]
pub fn saturating_add(a: Rgb, b: Rgb) -> Rgb {
    Rgb::new(
        a.r.saturating_add(b.r),
        a.g.saturating_add(b.g),
        a.b.saturating_add(b.b),
    )
}
