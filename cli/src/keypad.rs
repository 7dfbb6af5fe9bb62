use std::io::{self, Write as _};
use std::process::ExitCode;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use keycalc::{Calculator, Key, Keypad, Screen, SystemClock, LINE_WIDTH};
use unicode_width::UnicodeWidthStr;

use crate::bprintln;
use crate::style::*;

const HINT: &str = "0-9 + - * / . =   [enter] =   [esc] quit";

/// Drives the calculator from raw-mode terminal key events.
pub fn run() -> ExitCode {
    if terminal::enable_raw_mode().is_err() {
        bprintln!(LRed, "Failed to enable raw terminal mode");
        return ExitCode::FAILURE;
    }

    let result = drive();

    let _ = terminal::disable_raw_mode();
    let _ = execute!(io::stdout(), MoveTo(0, 5), Show);
    println!();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            bprintln!(LRed, "{e}");
            ExitCode::FAILURE
        }
    }
}

/// The polling loop: the calculator sleeps through its injected clock
/// whenever no key is pressed.
fn drive() -> io::Result<()> {
    let mut lcd = TermLcd::new()?;
    let mut clock = SystemClock;
    let mut keypad = TermKeypad::default();
    let mut calc = Calculator::new();
    calc.power_on(&mut lcd, &mut clock);

    while !keypad.quit {
        let key = keypad.poll();
        calc.key(key, &mut lcd, &mut clock);
    }

    Ok(())
}

/// Maps pending terminal events to keypad events without blocking.
#[derive(Default)]
struct TermKeypad {
    quit: bool,
}

impl Keypad for TermKeypad {
    fn poll(&mut self) -> Option<Key> {
        if !event::poll(Duration::ZERO).unwrap_or(false) {
            return None;
        }
        let Ok(Event::Key(key)) = event::read() else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.quit = true;
                None
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
                None
            }
            KeyCode::Enter => Some(Key::Equals),
            KeyCode::Char(c) => Key::from_char(c),
            _ => None,
        }
    }
}

/// The emulated 2×16 character display, repainted on every write.
struct TermLcd {
    out: io::Stdout,
    lines: [String; 2],
    line: usize,
}

impl TermLcd {
    fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(out, Clear(ClearType::All), Hide)?;
        Ok(Self {
            out,
            lines: [String::new(), String::new()],
            line: 0,
        })
    }

    fn repaint(&mut self) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        write!(self.out, "┌{}┐\r\n", "─".repeat(LINE_WIDTH))?;
        for line in &self.lines {
            let pad = LINE_WIDTH.saturating_sub(line.width());
            write!(self.out, "│{line}{}│\r\n", " ".repeat(pad))?;
        }
        write!(self.out, "└{}┘\r\n", "─".repeat(LINE_WIDTH))?;
        write!(self.out, "{HINT}")?;
        self.out.flush()
    }
}

impl Screen for TermLcd {
    fn clear(&mut self) {
        self.lines = [String::new(), String::new()];
        self.line = 0;
        let _ = self.repaint();
    }

    fn second_line(&mut self) {
        self.line = 1;
    }

    fn write(&mut self, text: &str) {
        let line = &mut self.lines[self.line];
        line.push_str(text);
        line.truncate(LINE_WIDTH);
        let _ = self.repaint();
    }
}
