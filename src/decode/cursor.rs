/// Forward-only byte position over the input text.
///
/// Owned by a single parse call. The offset never moves backwards; every
/// consuming routine dispatches on ASCII bytes, so a multi-byte character
/// simply fails to match any production.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Advance past the byte just inspected with [`peek`](Self::peek).
    pub fn bump(&mut self) {
        debug_assert!(self.pos < self.input.len());
        self.pos += 1;
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Text between `start` and the current offset.
    ///
    /// Callers only ever slice spans whose every byte was matched as ASCII,
    /// so the bounds are char boundaries.
    pub fn slice(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Skip past any run of space, tab, newline, or carriage return.
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }
}
