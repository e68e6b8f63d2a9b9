//! Terminal tile-shifting runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output, and a fixed
//! 16ms timestep driving both the game clock and the animator.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tiles::core::{CoreEvent, GameSnapshot, GameState, SimpleRng};
use tui_tiles::input::{handle_key_event, map_mouse, should_quit, Command, PointerEvent};
use tui_tiles::term::{Animator, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_tiles::types::TICK_MS;
use tui_tiles::{logging, GameConfig};

fn main() -> Result<()> {
    // Configuration errors are reported before the terminal switches modes.
    let config = GameConfig::from_env()?;
    logging::init(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!("run loop failed: {e:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut seed = config.seed;
    let mut game = GameState::with_renderer(
        config.width,
        config.height,
        SimpleRng::new(seed),
        Animator::new(),
        config.timing,
    )
    .with_seed(seed);
    game.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let layout = view.layout(game.width(), game.height(), viewport);
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Some(game.renderer()), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        tracing::info!("quit requested");
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(Command::Restart) => {
                            seed = SimpleRng::new(seed).next_u32();
                            game.renderer_mut().clear();
                            game.restart(seed);
                        }
                        Some(Command::CancelGesture) => game.cancel_gesture(),
                        None => {}
                    }
                }
                Event::Mouse(mouse) => match map_mouse(mouse, &layout) {
                    Some(PointerEvent::Down(id, point)) => {
                        game.pointer_down(id, point);
                    }
                    Some(PointerEvent::Move(id, point)) => game.pointer_move(id, point),
                    Some(PointerEvent::Up(id, point)) => {
                        game.pointer_up(id, point);
                    }
                    None => {}
                },
                Event::Resize(..) => {
                    // The board moved under the pointer; a drag in progress
                    // no longer lines up.
                    game.cancel_gesture();
                    term.invalidate();
                }
                Event::FocusLost => game.cancel_gesture(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.advance(TICK_MS);
            game.renderer_mut().advance(TICK_MS);

            for event in game.take_events() {
                match event {
                    CoreEvent::Matched(m) => tracing::trace!(removed = m.total, "match"),
                    CoreEvent::Shifted { axis, line, steps } => {
                        tracing::debug!(?axis, line, steps, "shift")
                    }
                    CoreEvent::Settled { cascade, stats, turn } => tracing::debug!(
                        cascade,
                        chain = stats.chain,
                        removed = turn.iter().sum::<u32>(),
                        "settled"
                    ),
                }
            }
        }
    }
}
