//! Terminal runner (default binary).
//!
//! Feeds crossterm key events and real elapsed time into a [`Session`] and
//! draws its snapshot with the framebuffer renderer every frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{debug, info};

use blockfall::config::RunConfig;
use blockfall::core::{GameSnapshot, Phase, RandomSource, Session};
use blockfall::input::action_for_event;
use blockfall::logging::init_file_logger;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::Rules;

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    if let Some(path) = config.log_path.as_deref() {
        init_file_logger(path, config.log_level)?;
    }
    info!("starting: {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let source = match config.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };
    let mut session = Session::new(Rules::default(), source);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(u64::from(config.frame_ms));
    let mut last_tick = Instant::now();

    while session.phase() != Phase::Quit {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = action_for_event(key) {
                        let accepted = session.apply_action(action);
                        debug!("{} accepted={}", action.as_str(), accepted);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the real elapsed time.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            session.tick(elapsed_ms);
        }
    }

    info!(
        "quit: score={} level={} lines={}",
        session.score(),
        session.level(),
        session.lines()
    );
    Ok(())
}
