//! Crystal Dash entry point
//!
//! Sets up the terminal, runs the fixed-timestep game loop, and restores
//! the terminal on the way out.

use std::io::{self, stdout};
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, terminal,
};

use crystal_dash::config::GameConfig;
use crystal_dash::consts::FRAME_MILLIS;
use crystal_dash::sim::{GameState, InputEvent, tick};
use crystal_dash::tui::{self, Tui, Viewport};

const CONFIG_PATH: &str = "crystal-dash.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = GameConfig::load_or_default(Path::new(CONFIG_PATH));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(config, seed)?;
    log::info!("Crystal Dash starting with seed {seed}");

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
    )?;

    let result = run(&mut out, &mut state);

    // Restore the terminal even when the loop bailed with an error.
    execute!(
        out,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    )?;
    terminal::disable_raw_mode()?;
    result?;

    log::info!(
        "Session ended after {} frames with {} crystals",
        state.frame,
        state.player.crystals
    );
    Ok(())
}

fn run(out: &mut io::Stdout, state: &mut GameState) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut vp = Viewport { cols, rows };
    let mut tui = Tui::default();
    let frame_dur = Duration::from_millis(FRAME_MILLIS);
    let mut events: Vec<InputEvent> = Vec::new();

    while state.running {
        let frame_start = Instant::now();

        events.clear();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(input) = tui::translate_key(key, state.mode) {
                        events.push(input);
                    }
                }
                Event::Resize(c, r) => {
                    vp = Viewport { cols: c, rows: r };
                }
                _ => {}
            }
        }

        tick(state, &events);
        if state.game_over {
            log::debug!(
                "Game over at frame {} with {} crystals",
                state.frame,
                state.player.crystals
            );
        }
        tui::render(out, state, vp, &mut tui)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
    log::debug!("Quit requested, leaving the loop");
    Ok(())
}
