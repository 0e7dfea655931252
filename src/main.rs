//! Terminal garden runner (default binary).
//!
//! Emulates a display refresh loop: events are polled with a short timeout and
//! every pass hands the elapsed time to `Garden::on_refresh`, which decides
//! whether a new frame is due. `--once` skips the terminal session entirely and
//! prints a plain-text frame to stdout.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
    time::{Duration, Instant},
};

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyEventKind};

use ascii_garden::engine::Garden;
use ascii_garden::input::map_key;
use ascii_garden::term::{FrameBuffer, GardenView, TerminalSession};
use ascii_garden::types::{GardenAction, GardenConfig, GridSize, Variant};

/// How often the loop wakes up when no input arrives.
const REFRESH: Duration = Duration::from_millis(16);

/// Fallback when the terminal size cannot be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

#[derive(Parser, Debug)]
#[command(name = "ascii-garden", version, about = "Procedural ASCII landscape for the terminal")]
struct Cli {
    /// JSON config file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Presentation variant.
    #[arg(long, value_enum)]
    variant: Option<VariantChoice>,

    /// Logical frames per second.
    #[arg(long)]
    fps: Option<f64>,

    /// Draw every layer in one faint colour.
    #[arg(long)]
    mono: bool,

    /// Print a single frame to stdout and exit.
    #[arg(long)]
    once: bool,

    /// Grid width for `--once` (defaults to the terminal width).
    #[arg(long)]
    cols: Option<u16>,

    /// Grid height for `--once` (defaults to the terminal height).
    #[arg(long)]
    rows: Option<u16>,

    /// With `--once`, number of ticks to simulate before printing.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Write logs to this file (stdout belongs to the animation).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Maximum log level.
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    Full,
    Footer,
    Meadow,
}

impl From<VariantChoice> for Variant {
    fn from(v: VariantChoice) -> Self {
        match v {
            VariantChoice::Full => Variant::Full,
            VariantChoice::Footer => Variant::Footer,
            VariantChoice::Meadow => Variant::Meadow,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.log_level)?;
    let config = load_config(&cli)?;

    if cli.once {
        return print_once(&cli, config);
    }

    tracing::info!(variant = config.variant.as_str(), fps = config.fps, "starting");
    let mut session = TerminalSession::begin()?;
    let result = run(&mut session, config);

    // Always try to restore terminal state, but report the loop's error first.
    let restored = session.end();
    tracing::info!("stopped");
    result.and(restored)
}

fn init_logging(path: Option<&Path>, level: tracing::Level) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = fs::File::create(path)
        .with_context(|| format!("create log file '{}'", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GardenConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            GardenConfig::from_json_str(&text)
                .with_context(|| format!("load config '{}'", path.display()))?
        }
        None => GardenConfig::default(),
    };

    if let Some(variant) = cli.variant {
        config.variant = variant.into();
    }
    if let Some(fps) = cli.fps {
        config.fps = fps;
    }
    if cli.mono {
        config.monochrome = true;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn terminal_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or(FALLBACK_SIZE)
}

fn print_once(cli: &Cli, config: GardenConfig) -> Result<()> {
    let (w, h) = terminal_size();
    let size: GridSize = config.fit_cells(cli.cols.unwrap_or(w), cli.rows.unwrap_or(h));
    let mut garden = Garden::new(size, config)?;
    for _ in 0..cli.frames.max(1) {
        garden.step();
    }

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", garden.frame().to_text())?;
    Ok(())
}

fn run(session: &mut TerminalSession, config: GardenConfig) -> Result<()> {
    let view = GardenView::new(config.monochrome);
    let (w, h) = terminal_size();
    let mut garden = Garden::new(config.fit_cells(w, h), config)?;
    let mut fb = FrameBuffer::new(0, 0);
    let started = Instant::now();

    view.render_into(garden.frame(), None, &mut fb);
    session.present(&mut fb)?;

    loop {
        let mut redraw = false;

        if event::poll(REFRESH)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match map_key(key) {
                    Some(GardenAction::Quit) => return Ok(()),
                    Some(action) => {
                        tracing::debug!(action = action.as_str(), "input");
                        garden.apply(action);
                        redraw = true;
                    }
                    None => {}
                },
                Event::Resize(w, h) => {
                    let size = garden.config().fit_cells(w, h);
                    garden.resize(size);
                    session.invalidate();
                    redraw = true;
                }
                _ => {}
            }
        }

        let now_ms = started.elapsed().as_secs_f64() * 1000.0;
        if garden.on_refresh(now_ms).is_some() || redraw {
            let status = garden.is_paused().then_some("paused");
            view.render_into(garden.frame(), status, &mut fb);
            session.present(&mut fb)?;
        }
    }
}
