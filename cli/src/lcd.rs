use std::time::Duration;

use keycalc::{Clock, Screen, LINE_WIDTH};

/// In-memory stand-in for the character display, used when feeding a key
/// string non-interactively.
#[derive(Default)]
pub struct BufferLcd {
    lines: [String; 2],
    line: usize,
}

impl BufferLcd {
    pub fn lines(&self) -> &[String; 2] {
        &self.lines
    }
}

impl Screen for BufferLcd {
    fn clear(&mut self) {
        self.lines = [String::new(), String::new()];
        self.line = 0;
    }

    fn second_line(&mut self) {
        self.line = 1;
    }

    fn write(&mut self, text: &str) {
        let line = &mut self.lines[self.line];
        line.push_str(text);
        // The display ignores everything past its width.
        line.truncate(LINE_WIDTH);
    }
}

/// A [`Clock`] that doesn't wait, for batch feeding.
pub struct NoopClock;

impl Clock for NoopClock {
    fn sleep(&mut self, _: Duration) {}
}
