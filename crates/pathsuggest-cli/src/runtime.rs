use std::io;

use crossterm::cursor::Show;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::picker::{Picker, PickerOutcome};
use crate::ui;

type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Full-screen picker surface.
///
/// The shell prompt that launched the picker gets its terminal back when the
/// screen is dropped, including after a failed draw: raw mode is left, the
/// alternate screen is closed and the cursor is shown again.
struct PickerScreen {
    terminal: TuiTerminal,
}

impl PickerScreen {
    /// Takes over the terminal for the picker.
    ///
    /// Key presses arrive unbuffered, and a path pasted from the clipboard
    /// arrives as one `Event::Paste` instead of a stream of keys.
    fn open() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
            restore_terminal();

            return Err(error);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                restore_terminal();

                Err(error)
            }
        }
    }
}

impl Drop for PickerScreen {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableBracketedPaste,
        LeaveAlternateScreen,
        Show
    );
}

/// Runs the picker until the user accepts a path or cancels.
///
/// The terminal is restored before this returns.
///
/// # Errors
/// Returns an error if terminal setup, rendering, or event reading fails.
pub(crate) fn run(picker: &mut Picker<'_>) -> io::Result<Option<String>> {
    let mut screen = PickerScreen::open()?;

    loop {
        screen.terminal.draw(|f| ui::render(f, picker))?;

        let outcome = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => picker.handle_key(key),
            Event::Paste(text) => {
                picker.handle_paste(&text);

                PickerOutcome::Continue
            }
            _ => PickerOutcome::Continue,
        };

        match outcome {
            PickerOutcome::Continue => {}
            PickerOutcome::Cancel => {
                debug!("picker cancelled");

                return Ok(None);
            }
            PickerOutcome::Accept(path) => {
                debug!(%path, "picker accepted path");

                return Ok(Some(path));
            }
        }
    }
}
