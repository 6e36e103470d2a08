//! Terminal front end.

mod input;
mod ui;

pub use input::{Action, action_for};
pub use ui::draw;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument, warn};

use crate::session::{Selection, Session};
use crate::store::KeyValueStore;

/// Puts the terminal back into cooked mode on the main screen when dropped.
///
/// Every restore step runs even if an earlier one fails, and the guard also
/// fires while unwinding from a panic.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");

        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to leave raw mode");
        }
        if let Err(err) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %err, "Failed to leave alternate screen");
        }
    }
}

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored whether the loop returns, fails or panics.
#[instrument(skip_all)]
pub fn run<S: KeyValueStore>(session: &mut Session<S>) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let guard = TerminalGuard::new(io::stdout());
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, session);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI loop failed");
    }
    info!("Terminal UI closed");
    res
}

/// Draws, waits for a key, applies it. One input is fully handled before
/// the next is read.
fn run_loop<B, S>(terminal: &mut Terminal<B>, session: &mut Session<S>) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    S: KeyValueStore,
{
    loop {
        terminal.draw(|f| draw(f, session))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            continue;
        }

        let Some(action) = action_for(key.code, session.phase()) else {
            continue;
        };
        debug!(?action, "Key action");

        match action {
            Action::Quit => return Ok(()),
            Action::Start => session.start_game(),
            Action::Move(direction) => session.move_cursor(direction),
            Action::SelectCursor => report(session.select_cursor()),
            Action::SelectCell(index) => report(session.select(index)),
        }
    }
}

fn report(selection: Selection) {
    match selection {
        Selection::Finished(status) => info!(?status, "Game over"),
        Selection::Rejected(err) => debug!(error = %err, "Input had no effect"),
        Selection::Ignored | Selection::Continued => {}
    }
}
