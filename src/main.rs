//! Terminal blockfall runner (default binary).
//!
//! Two threads of control share one engine behind a single lock: a gravity
//! thread ticks every `TICK_INTERVAL_MS`, while this thread polls for input
//! and redraws from a merged snapshot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Engine, SharedEngine, Snapshot};
use blockfall::input::{handle_key_event, should_quit, should_reset};
use blockfall::term::{GameView, TerminalRenderer};
use blockfall::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, FRAME_INTERVAL_MS, TICK_INTERVAL_MS,
};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Wall-clock seed; tests use fixed seeds instead.
fn entropy_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos() ^ elapsed.as_secs() as u32,
        Err(_) => 1,
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let shared = SharedEngine::new(Engine::new(
        DEFAULT_BOARD_WIDTH,
        DEFAULT_BOARD_HEIGHT,
        entropy_seed(),
    ));

    // Gravity driver: ticks at a fixed cadence until told to stop.
    let running = Arc::new(AtomicBool::new(true));
    let gravity = {
        let shared = shared.clone();
        let running = Arc::clone(&running);
        thread::spawn(move || {
            while running.load(Ordering::Relaxed) {
                shared.tick();
                thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
            }
        })
    };

    let result = input_render_loop(term, &shared);

    running.store(false, Ordering::Relaxed);
    let _ = gravity.join();
    result
}

fn input_render_loop(term: &mut TerminalRenderer, shared: &SharedEngine) -> Result<()> {
    let view = GameView;
    let mut snap = Snapshot::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT);
    let frame = Duration::from_millis(FRAME_INTERVAL_MS);

    loop {
        shared.snapshot_into(&mut snap);
        term.draw(&view.render(&snap))?;

        if event::poll(frame)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if should_reset(key) {
                        shared.reset();
                    } else if let Some(cmd) = handle_key_event(key) {
                        shared.apply_input(cmd);
                    }
                }
            }
        }
    }
}
