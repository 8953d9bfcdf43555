use pathsuggest::SEPARATOR;

/// The path being typed into the picker.
///
/// Paths never span lines, so the buffer is one line and the cursor is a
/// byte offset that always sits on a `char` boundary.
pub(crate) struct PathLine {
    cursor: usize,
    text: String,
}

impl PathLine {
    /// Starts editing `text` with the cursor after its last character.
    pub(crate) fn new(text: String) -> Self {
        Self {
            cursor: text.len(),
            text,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Text left of the cursor, used to place the terminal cursor.
    pub(crate) fn text_before_cursor(&self) -> &str {
        &self.text[..self.cursor]
    }

    fn text_after_cursor(&self) -> &str {
        &self.text[self.cursor..]
    }

    pub(crate) fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Inserts pasted text at the cursor, dropping any line breaks.
    pub(crate) fn insert_text(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| !matches!(ch, '\r' | '\n')) {
            self.insert_char(ch);
        }
    }

    /// Replaces the path with an accepted completion.
    pub(crate) fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.cursor = self.text.len();
    }

    pub(crate) fn delete_backward(&mut self) {
        if let Some(ch) = self.text_before_cursor().chars().next_back() {
            self.cursor -= ch.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    pub(crate) fn delete_forward(&mut self) {
        if !self.text_after_cursor().is_empty() {
            self.text.remove(self.cursor);
        }
    }

    /// Removes the path segment left of the cursor together with its
    /// trailing separator, so `~/projects/` becomes `~/` and `/usr/lo`
    /// becomes `/usr/`.
    pub(crate) fn delete_segment_backward(&mut self) {
        let before = self.text_before_cursor();
        let segment_start = before
            .strip_suffix(SEPARATOR)
            .unwrap_or(before)
            .rfind(SEPARATOR)
            .map_or(0, |index| index + SEPARATOR.len_utf8());

        self.text.replace_range(segment_start..self.cursor, "");
        self.cursor = segment_start;
    }

    pub(crate) fn move_left(&mut self) {
        if let Some(ch) = self.text_before_cursor().chars().next_back() {
            self.cursor -= ch.len_utf8();
        }
    }

    pub(crate) fn move_right(&mut self) {
        if let Some(ch) = self.text_after_cursor().chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}
