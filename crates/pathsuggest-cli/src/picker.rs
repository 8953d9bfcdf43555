use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pathsuggest::DirectoryLister;

use crate::input::PathLine;
use crate::session::CompletionSession;

/// Result of handling one terminal event in the picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PickerOutcome {
    /// Keep the picker open.
    Continue,
    /// Close without a result.
    Cancel,
    /// Close and report the accepted path.
    Accept(String),
}

/// Interactive prompt state: the typed path plus its live suggestions.
pub(crate) struct Picker<'a> {
    input: PathLine,
    lister: &'a dyn DirectoryLister,
    session: CompletionSession,
}

impl<'a> Picker<'a> {
    /// Creates a picker pre-filled with `initial` and computes its first
    /// suggestions.
    pub(crate) fn new(
        initial: String,
        session: CompletionSession,
        lister: &'a dyn DirectoryLister,
    ) -> Self {
        let mut picker = Self {
            input: PathLine::new(initial),
            lister,
            session,
        };
        picker.refresh();

        picker
    }

    /// Returns the prompt input.
    pub(crate) fn input(&self) -> &PathLine {
        &self.input
    }

    /// Returns the suggestion session backing the dropdown.
    pub(crate) fn session(&self) -> &CompletionSession {
        &self.session
    }

    /// Applies one key press.
    ///
    /// `Tab` completes to the highlighted (or first) suggestion, `Up`/`Down`
    /// move the highlight, and `Enter` accepts the highlighted suggestion or
    /// the typed text when nothing is highlighted.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> PickerOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return PickerOutcome::Cancel,
            KeyCode::Char('c') if ctrl => return PickerOutcome::Cancel,
            KeyCode::Enter => {
                let accepted = self
                    .session
                    .selected()
                    .map_or_else(|| self.input.text().to_string(), str::to_string);

                return PickerOutcome::Accept(accepted);
            }
            KeyCode::Tab => self.complete(),
            KeyCode::Down => self.session.select_next(),
            KeyCode::Up | KeyCode::BackTab => self.session.select_previous(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Char('w') if ctrl => {
                self.input.delete_segment_backward();
                self.refresh();
            }
            KeyCode::Backspace => {
                self.input.delete_backward();
                self.refresh();
            }
            KeyCode::Delete => {
                self.input.delete_forward();
                self.refresh();
            }
            KeyCode::Char(ch) if !ctrl => {
                self.input.insert_char(ch);
                self.refresh();
            }
            _ => {}
        }

        PickerOutcome::Continue
    }

    /// Inserts pasted text at the cursor.
    pub(crate) fn handle_paste(&mut self, text: &str) {
        self.input.insert_text(text);
        self.refresh();
    }

    fn complete(&mut self) {
        let completion = self
            .session
            .selected()
            .or_else(|| self.session.visible().first().map(String::as_str))
            .map(str::to_string);

        if let Some(completion) = completion {
            self.input.set_text(&completion);
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        self.session.update(self.input.text(), self.lister);
    }
}
