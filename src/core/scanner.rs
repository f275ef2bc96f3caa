use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::BufRead;

/// Whitespace-delimited token reader that owns its input handle.
///
/// Lines are pulled from the reader only when a token is requested and none
/// is buffered, so a prompt written before `next_token` is visible before the
/// read blocks. Dropping the scanner releases the reader.
pub struct TokenScanner<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
    exhausted: bool,
}

impl<R: BufRead> TokenScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() && !self.exhausted {
            self.fill()?;
        }
        let token = self.pending.pop_front();
        tracing::debug!("Read token: {:?}", token);
        Ok(token)
    }

    fn fill(&mut self) -> Result<()> {
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            self.exhausted = true;
            return Ok(());
        }
        // Undecodable bytes become U+FFFD and fail operand parsing downstream.
        let line = String::from_utf8_lossy(&line);
        self.pending
            .extend(line.split_whitespace().map(str::to_string));
        Ok(())
    }
}

impl<R: BufRead> Drop for TokenScanner<R> {
    fn drop(&mut self) {
        tracing::debug!(
            "Releasing input ({} unread token(s) discarded)",
            self.pending.len()
        );
    }
}
