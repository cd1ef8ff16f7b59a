#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io::{self, BufWriter};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use panel_life::io::{Clock, HexFrameSink, NullSink, StdClock, TextSurface};
use panel_life::{ChannelMode, LifeConfig, Rgb, RowParity, Runner};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Output {
    /// `#` per live cell, redrawn in place.
    Text,
    /// One line of hex pixels per display refresh.
    Strip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Parity {
    Even,
    Odd,
}

#[derive(Parser, Debug)]
#[command(name = "panel-life")]
#[command(about = "Bit-packed Game of Life for serpentine LED panels")]
struct Args {
    /// Grid width in cells (multiple of 8)
    #[arg(long, default_value_t = 32)]
    cols: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 16)]
    rows: usize,

    /// Width of one physical panel
    #[arg(long, default_value_t = 16)]
    panel_width: usize,

    /// LEDs in the chain (defaults to cols * rows)
    #[arg(long)]
    leds: Option<usize>,

    /// Which panel rows run right to left
    #[arg(long, value_enum, default_value_t = Parity::Even)]
    parity: Parity,

    /// Three independent worlds, one per colour channel
    #[arg(long)]
    rgb: bool,

    /// Fade sub-frames per generation (strip output only)
    #[arg(long)]
    fade_steps: Option<usize>,

    /// Milliseconds per generation
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Random seed (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many generations
    #[arg(long)]
    generations: Option<u64>,

    /// Keep stagnant worlds instead of reseeding
    #[arg(long)]
    no_reseed: bool,

    /// Light each cell in turn before starting (strip output only)
    #[arg(long)]
    sweep: bool,

    #[arg(long, value_enum, default_value_t = Output::Text)]
    output: Output,
}

impl Args {
    fn config(&self) -> LifeConfig {
        LifeConfig::default()
            .cols(self.cols)
            .rows(self.rows)
            .panel_width(self.panel_width)
            .led_count(self.leds.unwrap_or(self.cols * self.rows))
            .row_parity(match self.parity {
                Parity::Even => RowParity::EvenRowsReversed,
                Parity::Odd => RowParity::OddRowsReversed,
            })
            .channels(if self.rgb {
                ChannelMode::rgb()
            } else {
                ChannelMode::mono()
            })
            .fade_steps(self.fade_steps)
            .generation_delay(Duration::from_millis(self.delay_ms))
            .reseed_on_stagnation(!self.no_reseed)
    }

    fn check_output(&self) -> Result<()> {
        if self.output == Output::Text {
            ensure!(self.fade_steps.is_none(), "--fade-steps needs --output strip");
            ensure!(!self.sweep, "--sweep needs --output strip");
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    args.check_output()?;
    let config = args
        .config()
        .validate()
        .context("invalid panel configuration")?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match args.output {
        Output::Strip => {
            let sink = HexFrameSink::new(BufWriter::new(io::stdout().lock()));
            let mut runner = Runner::new(config, sink, StdClock, rng);
            if args.sweep {
                runner.diagnostic_sweep(Rgb::new(0x08, 0x08, 0x08), Duration::from_millis(20));
            }
            runner.run(args.generations);
        }
        Output::Text => {
            let mut surface = TextSurface::new(io::stdout().lock());
            let delay = config.generation_delay;
            let mut runner = Runner::new(config, NullSink, StdClock, rng);
            let mut remaining = args.generations;
            while remaining != Some(0) {
                surface.draw_world(runner.world());
                runner.clock_mut().sleep(delay);
                runner.advance();
                remaining = remaining.map(|n| n - 1);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("panel-life").chain(extra.iter().copied())).unwrap()
    }

    #[test]
    fn strip_only_flags_are_rejected_in_text_mode() {
        assert!(parse(&["--fade-steps", "4"]).check_output().is_err());
        assert!(parse(&["--sweep"]).check_output().is_err());
        assert!(parse(&["--output", "text"]).check_output().is_ok());
    }

    #[test]
    fn strip_mode_accepts_fade_and_sweep() {
        let args = parse(&["--output", "strip", "--fade-steps", "4", "--sweep"]);
        assert!(args.check_output().is_ok());
        assert!(args.config().validate().is_ok());
    }
}
