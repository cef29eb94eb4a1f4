use std::io::{self, Stdout};
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::TITLE;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode alternate screen for one game session, restored on drop.
///
/// Also owns the emulator title so it is only rewritten when it changes.
pub struct TerminalSession {
    terminal: AppTerminal,
    title: String,
}

impl TerminalSession {
    /// Switches the terminal into game mode and shows the base title.
    ///
    /// Any failure after raw mode is enabled restores the terminal before
    /// the error is returned.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let title = window_title(None);
        let mut stdout = io::stdout();
        let session = execute!(stdout, EnterAlternateScreen, Hide, SetTitle(&title))
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())))
            .map(|terminal| Self { terminal, title });

        if session.is_err() {
            restore_terminal();
        }
        session
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }

    /// Shows the session best in the title once it exceeds the start length.
    pub fn show_best(&mut self, best_length: usize) -> io::Result<()> {
        let title = window_title(Some(best_length).filter(|best| *best > 1));
        if title == self.title {
            return Ok(());
        }

        execute!(self.terminal.backend_mut(), SetTitle(&title))?;
        self.title = title;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Restores the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}

/// Emulator title, with the session best once there is one.
#[must_use]
pub fn window_title(best_length: Option<usize>) -> String {
    match best_length {
        Some(best) => format!("{TITLE} - Best: {best}"),
        None => TITLE.to_owned(),
    }
}

/// Best-effort restore shared by `Drop`, the panic hook and a failed `enter`.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
