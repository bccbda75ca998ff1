//! Terminal Flappy Bird runner (default binary).
//!
//! Fixed-timestep loop: poll input until the next tick is due, advance the
//! simulation, hand drained events to audio, then redraw through the
//! framebuffer renderer.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_flappy::audio::Audio;
use tui_flappy::core::{GameSnapshot, GameState};
use tui_flappy::input::{handle_key_event, should_quit};
use tui_flappy::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_flappy::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let game = GameState::new(config.game.clone(), seed).context("invalid game configuration")?;
    info!(seed, tick_ms = config.tick_ms, "starting");

    let mut audio = Audio::open(!config.audio_disabled);
    info!(backend = audio.backend(), "audio ready");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, &mut audio, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!("install log subscriber: {err}"))
}

fn run(
    term: &mut TerminalRenderer,
    mut game: GameState,
    audio: &mut Audio,
    config: &AppConfig,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(u64::from(config.tick_ms));
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                // Held keys report Repeat where the terminal supports key event
                // types; only fresh presses jump.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();
        }

        // Jumps from input and collisions from the tick both land here.
        for event in game.drain_events() {
            audio.handle(event);
        }
    }
}
