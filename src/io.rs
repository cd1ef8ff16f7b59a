//! Collaborators the engine talks to: randomness, the display, the clock and
//! the text surface used by terminal builds.

use std::io::Write;
use std::time::Duration;

use crate::Rgb;
use crate::life::{BitGrid, World};

/// Cursor to the top-left corner.
const CURSOR_HOME: &[u8] = b"\x1b[0;0H";
const ALIVE_GLYPH: u8 = b'#';
const DEAD_GLYPH: u8 = b' ';

/// Source of one random byte per storage byte during seeding.
pub trait ByteSource {
    fn next_byte(&mut self) -> u8;
}

impl<R: rand::RngCore + ?Sized> ByteSource for R {
    #[inline]
    fn next_byte(&mut self) -> u8 {
        (self.next_u32() & 0xFF) as u8
    }
}

/// Receives one full pixel buffer per display refresh.
pub trait DisplaySink {
    fn push(&mut self, pixels: &[Rgb]);
}

/// Blocking wait between refreshes.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// `std::thread::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Records requested delays without waiting.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    pub sleeps: Vec<Duration>,
}

impl ManualClock {
    pub fn total(&self) -> Duration {
        self.sleeps.iter().sum()
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}

/// Discards frames, for surfaces that draw the world themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DisplaySink for NullSink {
    fn push(&mut self, _pixels: &[Rgb]) {}
}

/// Keeps every pushed frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<Vec<Rgb>>,
}

impl DisplaySink for RecordingSink {
    fn push(&mut self, pixels: &[Rgb]) {
        self.frames.push(pixels.to_vec());
    }
}

/// Writes each frame as one line of `rrggbb` triples separated by spaces.
pub struct HexFrameSink<W: Write> {
    out: W,
}

impl<W: Write> HexFrameSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, pixels: &[Rgb]) -> std::io::Result<()> {
        use std::fmt::Write as _;

        let mut line = String::with_capacity(pixels.len() * 7);
        for (i, px) in pixels.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            write!(line, "{:02x}{:02x}{:02x}", px.r, px.g, px.b).map_err(std::io::Error::other)?;
        }
        line.push('\n');
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySink for HexFrameSink<W> {
    fn push(&mut self, pixels: &[Rgb]) {
        if let Err(err) = self.write_frame(pixels) {
            log::warn!("failed to write frame: {err}");
        }
    }
}

/// Draws a grid as text, one line per row, `#` for alive cells.
pub struct TextSurface<W: Write> {
    out: W,
    home_cursor: bool,
}

impl<W: Write> TextSurface<W> {
    /// Surface that redraws in place with a cursor-home escape.
    pub fn new(out: W) -> Self {
        Self {
            out,
            home_cursor: true,
        }
    }

    /// Surface that appends frames without cursor control.
    pub fn plain(out: W) -> Self {
        Self {
            out,
            home_cursor: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Draw one grid; write errors are logged.
    pub fn draw(&mut self, grid: &BitGrid) {
        let text = grid_to_text(grid);
        self.emit(&text);
    }

    /// Draw a world; a cell is alive if any channel has it alive.
    pub fn draw_world(&mut self, world: &World) {
        let text = world_to_text(world);
        self.emit(&text);
    }

    fn emit(&mut self, text: &[u8]) {
        if let Err(err) = self.write_text(text) {
            log::warn!("failed to draw grid: {err}");
        }
    }

    fn write_text(&mut self, text: &[u8]) -> std::io::Result<()> {
        if self.home_cursor {
            self.out.write_all(CURSOR_HOME)?;
        }
        self.out.write_all(text)?;
        self.out.flush()
    }
}

/// Text rows for `grid`, each ending in `\n`. Each storage byte yields 8
/// glyphs, most significant bit first.
pub fn grid_to_text(grid: &BitGrid) -> Vec<u8> {
    let mut out = Vec::with_capacity((grid.cols() + 1) * grid.rows());
    for row in 0..grid.rows() {
        for group in 0..grid.byte_cols() {
            let mut byte = grid.byte(group, row);
            for _ in 0..8 {
                out.push(if byte & 0x80 != 0 {
                    ALIVE_GLYPH
                } else {
                    DEAD_GLYPH
                });
                byte <<= 1;
            }
        }
        out.push(b'\n');
    }
    out
}

fn world_to_text(world: &World) -> Vec<u8> {
    let mut out = Vec::with_capacity((world.cols() + 1) * world.rows());
    for row in 0..world.rows() {
        for col in 0..world.cols() {
            let alive = world.channels().iter().any(|c| c.current().get(col, row));
            out.push(if alive { ALIVE_GLYPH } else { DEAD_GLYPH });
        }
        out.push(b'\n');
    }
    out
}
