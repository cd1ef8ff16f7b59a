//! Deployment configuration.
//!
//! Use one of the presets or `LifeConfig::default()` and adjust individual
//! knobs via the builder methods, then call [`LifeConfig::validate`]. Only a
//! [`ValidConfig`] can build a world, a layout or a renderer.

use std::ops::Deref;
use std::time::Duration;

use crate::Rgb;
use crate::error::ConfigError;
use crate::panel::{Luminance, RowParity};

/// Cells packed into one storage byte.
pub const CELLS_PER_BYTE: usize = 8;

/// More steps than this would repeat `u8` brightness levels.
pub const MAX_FADE_STEPS: usize = 255;

const DEFAULT_PANEL_WIDTH: usize = 16;
const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(100);
const DEFAULT_STAGNATION_PATIENCE: u32 = 20;

/// Dim red on black, the colours of the deployed single-panel build.
const DEFAULT_ALIVE: Rgb = Rgb::new(0x08, 0x00, 0x00);
const DEFAULT_DEAD: Rgb = Rgb::new(0x00, 0x00, 0x00);
const DEFAULT_LEVELS: Rgb = Rgb::new(0x08, 0x08, 0x08);

/// How many independent simulations feed one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelMode {
    /// One world; each cell shows `alive` or `dead`.
    Mono {
        alive: smart_leds::RGB8,
        dead: smart_leds::RGB8,
    },
    /// Three worlds, one per colour component. `levels` holds the full
    /// brightness of red, green and blue respectively.
    Rgb { levels: smart_leds::RGB8 },
}

impl ChannelMode {
    pub const fn mono() -> Self {
        Self::Mono {
            alive: DEFAULT_ALIVE,
            dead: DEFAULT_DEAD,
        }
    }

    pub const fn rgb() -> Self {
        Self::Rgb {
            levels: DEFAULT_LEVELS,
        }
    }

    #[inline]
    pub const fn count(&self) -> usize {
        match self {
            Self::Mono { .. } => 1,
            Self::Rgb { .. } => 3,
        }
    }

    /// `(off, on)` colour contributed by channel `index`.
    pub fn channel_colors(&self, index: usize) -> (Rgb, Rgb) {
        match *self {
            Self::Mono { alive, dead } => (dead, alive),
            Self::Rgb { levels } => {
                let off = Rgb::new(0, 0, 0);
                let on = match index {
                    0 => Rgb::new(levels.r, 0, 0),
                    1 => Rgb::new(0, levels.g, 0),
                    _ => Rgb::new(0, 0, levels.b),
                };
                (off, on)
            }
        }
    }
}

impl Default for ChannelMode {
    fn default() -> Self {
        Self::mono()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    /// Grid width in cells. Must be a multiple of 8.
    pub cols: usize,
    /// Grid height in cells. Every chained panel is this tall.
    pub rows: usize,
    /// Native width of one physical panel.
    pub panel_width: usize,
    /// Physical LED count of the whole chain. LEDs past `cols * rows` are
    /// never written.
    pub led_count: usize,
    /// Which rows of a panel run right to left.
    pub row_parity: RowParity,
    pub channels: ChannelMode,
    /// Sub-frames per generation transition. `None` renders directly.
    pub fade_steps: Option<usize>,
    /// Custom brightness ramp with `fade_steps + 1` entries. `None` means
    /// linear.
    pub luminance: Option<Vec<u8>>,
    /// Wall time of one generation, including all fade sub-frames.
    pub generation_delay: Duration,
    pub reseed_on_stagnation: bool,
    /// Generations a repeating pattern may persist before a reseed.
    pub stagnation_patience: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self::single_panel()
    }
}

impl LifeConfig {
    /// One 16x16 panel, 256 LEDs.
    pub fn single_panel() -> Self {
        Self {
            cols: DEFAULT_PANEL_WIDTH,
            rows: 16,
            panel_width: DEFAULT_PANEL_WIDTH,
            led_count: DEFAULT_PANEL_WIDTH * 16,
            row_parity: RowParity::default(),
            channels: ChannelMode::default(),
            fade_steps: None,
            luminance: None,
            generation_delay: DEFAULT_GENERATION_DELAY,
            reseed_on_stagnation: true,
            stagnation_patience: DEFAULT_STAGNATION_PATIENCE,
        }
    }

    /// Two 16x16 panels chained side by side, 512 LEDs.
    pub fn dual_panel() -> Self {
        Self::single_panel().cols(32).led_count(512)
    }

    /// 32x16 grid for the text surface.
    pub fn terminal() -> Self {
        Self::single_panel()
            .cols(32)
            .panel_width(32)
            .led_count(32 * 16)
    }

    pub fn cols(mut self, n: usize) -> Self {
        self.cols = n;
        self
    }

    pub fn rows(mut self, n: usize) -> Self {
        self.rows = n;
        self
    }

    pub fn panel_width(mut self, n: usize) -> Self {
        self.panel_width = n;
        self
    }

    pub fn led_count(mut self, n: usize) -> Self {
        self.led_count = n;
        self
    }

    pub fn row_parity(mut self, parity: RowParity) -> Self {
        self.row_parity = parity;
        self
    }

    pub fn channels(mut self, mode: ChannelMode) -> Self {
        self.channels = mode;
        self
    }

    pub fn fade_steps(mut self, steps: Option<usize>) -> Self {
        self.fade_steps = steps;
        self
    }

    pub fn luminance(mut self, levels: Vec<u8>) -> Self {
        self.luminance = Some(levels);
        self
    }

    pub fn generation_delay(mut self, delay: Duration) -> Self {
        self.generation_delay = delay;
        self
    }

    pub fn reseed_on_stagnation(mut self, enabled: bool) -> Self {
        self.reseed_on_stagnation = enabled;
        self
    }

    pub fn stagnation_patience(mut self, generations: u32) -> Self {
        self.stagnation_patience = generations;
        self
    }

    /// Check every packing and wiring assumption.
    pub fn validate(self) -> Result<ValidConfig, ConfigError> {
        check_grid_dims(self.cols, self.rows)?;
        if self.panel_width == 0 {
            return Err(ConfigError::ZeroPanelWidth);
        }
        if self.cols % self.panel_width != 0 {
            return Err(ConfigError::PanelWidthMismatch {
                cols: self.cols,
                panel_width: self.panel_width,
            });
        }
        let cells = self.cols * self.rows;
        if self.led_count < cells {
            return Err(ConfigError::StripTooShort {
                needed: cells,
                available: self.led_count,
            });
        }
        let luminance = match self.fade_steps {
            None => None,
            Some(0) => return Err(ConfigError::ZeroFadeSteps),
            Some(steps) if steps > MAX_FADE_STEPS => {
                return Err(ConfigError::TooManyFadeSteps {
                    steps,
                    max: MAX_FADE_STEPS,
                });
            }
            Some(steps) => Some(match &self.luminance {
                Some(levels) => Luminance::from_levels(steps, levels.clone())?,
                None => Luminance::linear(steps),
            }),
        };
        Ok(ValidConfig {
            inner: self,
            luminance,
        })
    }
}

/// Dimension checks shared by [`LifeConfig::validate`] and
/// [`BitGrid::new`](crate::BitGrid::new).
pub(crate) fn check_grid_dims(cols: usize, rows: usize) -> Result<(), ConfigError> {
    if cols == 0 || rows == 0 {
        return Err(ConfigError::ZeroDimension { cols, rows });
    }
    if cols % CELLS_PER_BYTE != 0 {
        return Err(ConfigError::ColsNotByteAligned { cols });
    }
    // Neighbour offsets are computed in i32.
    let limit = i32::MAX as usize;
    match cols.checked_mul(rows) {
        Some(_) if cols < limit && rows < limit => Ok(()),
        Some(cells) => Err(ConfigError::GridTooLarge { cells }),
        None => Err(ConfigError::GridTooLarge { cells: usize::MAX }),
    }
}

/// A configuration that passed [`LifeConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub struct ValidConfig {
    inner: LifeConfig,
    luminance: Option<Luminance>,
}

impl ValidConfig {
    #[inline]
    pub fn panel_count(&self) -> usize {
        self.inner.cols / self.inner.panel_width
    }

    #[inline]
    pub fn cells(&self) -> usize {
        self.inner.cols * self.inner.rows
    }

    /// Brightness ramp when fade rendering is enabled.
    #[inline]
    pub fn fade(&self) -> Option<&Luminance> {
        self.luminance.as_ref()
    }

    /// Display refreshes issued per generation.
    #[inline]
    pub fn frames_per_generation(&self) -> usize {
        self.luminance.as_ref().map_or(1, |l| l.steps() + 1)
    }

    pub fn into_inner(self) -> LifeConfig {
        self.inner
    }
}

impl Deref for ValidConfig {
    type Target = LifeConfig;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
