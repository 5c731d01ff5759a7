//! `play`: scrub a simulated player in the terminal.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::{cursor, execute, terminal};

use seekbar::input::{bar_geometry, handle_event, InputResult};
use seekbar::{
    ComponentRegistry, Config, EventHub, EventKind, GuidedTimeFormatter, MediaPlayer, SeekBar,
    SimulatedPlayer,
};

use super::progress_row::render_rows;

/// Time between clock ticks and redraws.
const FRAME: Duration = Duration::from_millis(50);

/// Rows used at the bottom of the screen (tooltip, bar, accessibility).
const ROWS_USED: u16 = 3;

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnableMouseCapture, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, DisableMouseCapture, cursor::Show);
        let _ = terminal::disable_raw_mode();
        let _ = writeln!(stdout);
    }
}

/// Run the interactive seek bar until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn handle_play(duration: f64, config: &Config) -> Result<()> {
    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    if rows < ROWS_USED {
        anyhow::bail!("Terminal is too small ({} rows, need {})", rows, ROWS_USED);
    }

    let registry = ComponentRegistry::with_defaults();
    let mut bar = SeekBar::new(config, &registry, bar_geometry(cols), GuidedTimeFormatter)?;
    let mut player = SimulatedPlayer::new(duration, cols as f64);
    let mut hub: EventHub<SeekBar, SimulatedPlayer> = EventHub::new();

    bar.attach(&mut hub, &player);
    measure_tooltip(&mut bar);
    hub.dispatch(EventKind::Ready, &mut bar, &mut player);
    player.play();

    let guard = TerminalGuard::enter()?;
    let result = run_loop(&mut bar, &mut player, &mut hub, cols, rows);
    drop(guard);

    bar.detach(&mut hub);
    result
}

#[cfg(not(tarpaulin_include))]
fn run_loop(
    bar: &mut SeekBar,
    player: &mut SimulatedPlayer,
    hub: &mut EventHub<SeekBar, SimulatedPlayer>,
    mut cols: u16,
    mut rows: u16,
) -> Result<()> {
    let mut stdout = io::stdout();
    let mut last_tick = Instant::now();

    loop {
        let bar_row = rows.saturating_sub(2);

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Resize(new_cols, new_rows) => {
                    cols = new_cols;
                    rows = new_rows;
                    let geometry = bar_geometry(cols);
                    bar.range_mut().set_geometry(geometry.left(), geometry.width());
                    player.set_width(cols as f64);
                    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
                }
                other => {
                    if handle_event(other, bar, player, bar_row) == InputResult::Quit {
                        return Ok(());
                    }
                }
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;

        for kind in player.tick(dt) {
            hub.dispatch(kind, bar, player);
        }

        // Keyboard and pointer input change the scrub state without a clock event
        measure_tooltip(bar);
        bar.update_progress(player);
        render_rows(&mut stdout, bar, player, cols, bar_row)?;
    }
}

/// Terminal cells are the unit of width; the label is one cell per char.
fn measure_tooltip(bar: &mut SeekBar) {
    if let Some(tooltip) = bar.tooltip_mut() {
        let width = tooltip.label().text().chars().count().max(4);
        tooltip.label_mut().set_rendered_width(width as f64);
    }
}
