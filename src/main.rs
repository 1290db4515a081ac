mod audio;
mod config;
mod display;
mod input;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::info;

use asteroid_shooter::assets::Assets;
use asteroid_shooter::game::Game;
use asteroid_shooter::platform::InputSource;
use asteroid_shooter::scene;

use crate::audio::TerminalAudio;
use crate::display::TerminalRenderer;
use crate::input::TerminalInput;

fn init_tracing() -> Result<()> {
    let path = config::log_path();
    let file = File::create(&path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .init();

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits. Every frame: poll input, step the game,
/// render, then sleep off what is left of the frame budget.
fn run<W: Write>(out: &mut W, rx: mpsc::Receiver<Event>, assets: Assets) -> Result<()> {
    let mut rng = thread_rng();
    let mut input = TerminalInput::new(rx);
    let mut audio = TerminalAudio::new(config::bell_enabled());
    let mut renderer = TerminalRenderer::new(out)?;
    let mut game = Game::new(assets);

    loop {
        let frame_start = Instant::now();

        let frame = input.poll();
        if frame.quit {
            info!(high_score = game.high_score(), "quit");
            return Ok(());
        }

        game.step(&frame, &mut rng, &mut audio);
        scene::render(&mut renderer, &game)?;

        let elapsed = frame_start.elapsed();
        if elapsed < config::FRAME {
            thread::sleep(config::FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing()?;
    let assets = Assets::load().context("loading sprites")?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    info!(keyboard_enhanced, "started");
    let result = run(&mut out, rx, assets);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
    }
    result
}
