//! Terminal frame player (default binary).
//!
//! Rasterizes the demo scenes into a character canvas, captures one frame per
//! scene, and cycles through them. Interactive mode uses crossterm's alternate
//! screen and reads keys between frames; `--plain` writes frames to stdout
//! with clear/home escapes like a classic console loop.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_raster::core::{build_sequence, demo_scenes, Canvas, FrameSequence, StopSignal};
use tui_raster::input::handle_key_event;
use tui_raster::term::{PlainSink, Player, SleepPacer, TerminalRenderer};
use tui_raster::types::{
    PlaybackState, DEFAULT_BACKGROUND, DEFAULT_HEIGHT, DEFAULT_WIDTH, FRAME_DELAY_MS,
    INPUT_POLL_MS,
};

#[derive(Debug, Parser)]
#[command(
    name = "tui-raster",
    version,
    about = "Cycle rasterized line, circle and triangle frames in the terminal"
)]
struct Cli {
    /// Canvas width in columns
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = terminal_extent())]
    width: i32,

    /// Canvas height in rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = terminal_extent())]
    height: i32,

    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = FRAME_DELAY_MS)]
    delay_ms: u64,

    /// Background character
    #[arg(long, default_value_t = DEFAULT_BACKGROUND)]
    background: char,

    /// Write frames to stdout instead of taking over the terminal
    #[arg(long)]
    plain: bool,

    /// Stop after this many full passes over the frames
    #[arg(long)]
    cycles: Option<usize>,

    /// Log level when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

/// Terminal cursor positions are `u16`.
fn terminal_extent() -> clap::builder::RangedI64ValueParser<i32> {
    clap::value_parser!(i32).range(1..=i64::from(u16::MAX))
}

/// Frames shown by `cycles` full passes; saturates rather than wrapping.
fn frame_budget(cycles: usize, frame_count: usize) -> usize {
    cycles.saturating_mul(frame_count)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(cli.log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let mut canvas = Canvas::new(cli.width, cli.height, cli.background)
        .context("cannot create canvas")?;
    let scenes = demo_scenes(cli.width, cli.height);
    let sequence = build_sequence(&mut canvas, &scenes, Duration::from_millis(cli.delay_ms))?;
    tracing::info!(
        width = cli.width,
        height = cli.height,
        frames = sequence.len(),
        "frames captured"
    );

    if cli.plain {
        return run_plain(sequence, cli.cycles);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, sequence, cli.cycles);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run_plain(mut sequence: FrameSequence, cycles: Option<usize>) -> Result<()> {
    let stdout = io::stdout();
    let mut sink = PlainSink::new(stdout.lock());
    let stop = StopSignal::new();

    let shown = match cycles {
        Some(n) => {
            let budget = frame_budget(n, sequence.len());
            sequence.play_frames(budget, &mut sink, &mut SleepPacer, &stop)?
        }
        None => sequence.play(&mut sink, &mut SleepPacer, &stop)?,
    };
    tracing::info!(shown, "plain playback finished");
    Ok(())
}

fn run(term: &mut TerminalRenderer, sequence: FrameSequence, cycles: Option<usize>) -> Result<()> {
    let frame_count = sequence.len();
    let status_row = u16::try_from(sequence.current().height())
        .context("canvas too tall for the status line")?;
    let mut player = Player::new(sequence);
    let idle_poll = Duration::from_millis(INPUT_POLL_MS * 16);

    let mut dirty = true;
    let mut status_dirty = false;
    let mut last_tick = Instant::now();
    let mut last_state = player.state();

    loop {
        if dirty {
            term.draw(player.current())?;
            dirty = false;
        }
        if status_dirty || player.state() != last_state {
            let status = match player.state() {
                PlaybackState::Paused => "paused - space to resume, q to quit",
                _ => "",
            };
            term.draw_status(status_row, status)?;
            last_state = player.state();
            status_dirty = false;
        }

        if let Some(n) = cycles {
            if player.auto_advances() >= frame_budget(n, frame_count) {
                return Ok(());
            }
        }

        // Input with timeout until the next frame is due.
        let timeout = player.time_until_next().unwrap_or(idle_poll);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = handle_key_event(key) {
                        dirty |= player.apply(action);
                        if player.state().is_stopped() {
                            return Ok(());
                        }
                    }
                }
            } else {
                // Resize or focus change: repaint from scratch.
                term.invalidate();
                dirty = true;
                status_dirty = true;
            }
        }

        let now = Instant::now();
        dirty |= player.tick(now - last_tick);
        last_tick = now;
    }
}
