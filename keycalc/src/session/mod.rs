use std::time::Duration;

use crate::{eval, format_result, Error, ErrorState, ExprBuf, NumInput, Op, Token, LINE_WIDTH};

#[cfg(test)]
mod test;

/// Settle time after a display clear command.
const CLEAR_SETTLE: Duration = Duration::from_millis(20);
/// Settle time after moving the cursor to the second line.
const LINE_SETTLE: Duration = Duration::from_millis(5);
/// Poll interval while no key is pressed.
const IDLE_POLL: Duration = Duration::from_millis(50);
/// Pause after each processed key.
const KEY_SETTLE: Duration = Duration::from_millis(100);
/// How long the startup banner stays up.
const BANNER_PAUSE: Duration = Duration::from_secs(1);

/// One debounced keypad event. `Option<Key>` is the full poll result, with
/// `None` meaning no key is pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Op(Op),
    Decimal,
    Equals,
}

impl Key {
    /// Maps the character surface used by the CLI and the tests.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            _ => match Op::from_char(c) {
                Some(op) => Some(Self::Op(op)),
                None => None,
            },
        }
    }
}

/// Debounced key source: every physical press yields exactly one event.
pub trait Keypad {
    fn poll(&mut self) -> Option<Key>;
}

/// Write-only character display, two lines of 16 characters.
pub trait Screen {
    /// Clears the display and puts the cursor at the start of line 1.
    fn clear(&mut self);
    /// Moves the cursor to the start of line 2.
    fn second_line(&mut self);
    /// Writes text at the cursor.
    fn write(&mut self, text: &str);
}

/// Injected time source, so the state machine can be driven in tests
/// without real delays.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// A [`Clock`] that really sleeps.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Collecting input.
    Idle,
    /// A result or error is shown, awaiting the key that starts the next
    /// calculation.
    Displaying { error: bool },
}

/// The session context: every buffer of one calculation plus the state
/// machine driving it.
#[derive(Debug)]
pub struct Calculator {
    num: NumInput,
    expr: ExprBuf,
    error: ErrorState,
    state: State,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            num: NumInput::default(),
            expr: ExprBuf::default(),
            error: ErrorState::default(),
            state: State::Idle,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the startup banner, then the empty input screen.
    pub fn power_on(&mut self, screen: &mut impl Screen, clock: &mut impl Clock) {
        self.reset();
        screen.clear();
        clock.sleep(CLEAR_SETTLE);
        screen.write("Calculator Ready");
        screen.second_line();
        clock.sleep(LINE_SETTLE);
        screen.write("Enter Expression");
        clock.sleep(BANNER_PAUSE);
        self.show_input(screen, clock);
    }

    /// Feeds one poll result through the state machine.
    pub fn key(&mut self, key: Option<Key>, screen: &mut impl Screen, clock: &mut impl Clock) {
        let Some(key) = key else {
            clock.sleep(IDLE_POLL);
            return;
        };

        if let State::Displaying { error } = self.state {
            self.reset();
            // After an error `=` only acknowledges the message, it does not
            // seed the next calculation.
            if error && key == Key::Equals {
                self.show_input(screen, clock);
                return;
            }
        }

        match key {
            Key::Digit(digit) => self.digit(digit),
            Key::Decimal => self.decimal(),
            Key::Op(op) => self.operator(op),
            Key::Equals => {
                self.equals(screen, clock);
                clock.sleep(KEY_SETTLE);
                return;
            }
        }

        match self.error.get() {
            Some(error) => self.show_error(error, screen, clock),
            None => self.show_input(screen, clock),
        }
        clock.sleep(KEY_SETTLE);
    }

    /// Returns every buffer, including the error state, to its initial
    /// empty value.
    pub fn reset(&mut self) {
        self.num.clear();
        self.expr.clear();
        self.error.clear();
        self.state = State::Idle;
    }

    pub fn num(&self) -> &NumInput {
        &self.num
    }

    pub fn expr(&self) -> &ExprBuf {
        &self.expr
    }

    pub fn error(&self) -> Option<Error> {
        self.error.get()
    }

    fn digit(&mut self, digit: u8) {
        if let Err(e) = self.num.push_digit(digit) {
            self.error.set(e);
        }
    }

    fn decimal(&mut self) {
        if let Err(e) = self.num.push_decimal() {
            self.error.set(e);
        }
    }

    /// A `-` at the start of an operand becomes its sign, everything else
    /// is a binary operator.
    fn operator(&mut self, op: Op) {
        let missing_left = self.expr.last().map_or(true, Token::is_op);

        if op == Op::Sub && missing_left && self.num.is_empty() {
            if let Err(e) = self.num.push_sign() {
                self.error.set(e);
            }
            return;
        }

        if !self.num.is_empty() {
            self.push_operand();
        } else if missing_left && op != Op::Add {
            // No left operand. A stray `+` is tolerated here, see DESIGN.md.
            self.error.set(Error::Syntax);
        }

        if !self.error.is_active() {
            if let Err(e) = self.expr.push_op(op) {
                self.error.set(e);
            }
        }
    }

    fn equals(&mut self, screen: &mut impl Screen, clock: &mut impl Clock) {
        if !self.num.is_empty() {
            self.push_operand();
        } else if self.expr.last().is_some_and(Token::is_op) {
            // `=` right after an operator.
            self.error.set(Error::Syntax);
        }

        let mut result = 0.0;
        if !self.error.is_active() {
            match eval(self.expr.tokens()) {
                Ok(val) => result = val,
                Err(e) => self.error.set(e),
            }
        }

        let mut text = String::new();
        if !self.error.is_active() {
            match format_result(result) {
                Ok(t) => text = t,
                Err(e) => self.error.set(e),
            }
        }

        match self.error.get() {
            Some(error) => {
                self.show_message(error.message(), screen, clock);
                self.state = State::Displaying { error: true };
            }
            None => {
                self.show_message(&text, screen, clock);
                self.state = State::Displaying { error: false };
            }
        }
        self.num.clear();
    }

    /// Parses the pending number and pushes it as an operand, recording its
    /// typed text in the history.
    fn push_operand(&mut self) {
        let text = self.num.as_str().to_string();
        match self.num.take() {
            Ok(Some(num)) => {
                if let Err(e) = self.expr.push_num(num) {
                    self.error.set(e);
                } else {
                    self.expr.record(&text);
                }
            }
            Ok(None) => {}
            Err(e) => self.error.set(e),
        }
    }

    /// Redraws the live input screen: the history tail on line 1, the
    /// number being typed on line 2.
    fn show_input(&self, screen: &mut impl Screen, clock: &mut impl Clock) {
        let history = self.expr.history();
        let start = history.len().saturating_sub(LINE_WIDTH);
        screen.clear();
        clock.sleep(CLEAR_SETTLE);
        screen.write(&history[start..]);
        screen.second_line();
        clock.sleep(LINE_SETTLE);
        screen.write(self.num.as_str());
    }

    fn show_message(&self, text: &str, screen: &mut impl Screen, clock: &mut impl Clock) {
        screen.clear();
        clock.sleep(CLEAR_SETTLE);
        screen.write(text);
        screen.second_line();
        clock.sleep(LINE_SETTLE);
        screen.write("");
    }

    fn show_error(&mut self, error: Error, screen: &mut impl Screen, clock: &mut impl Clock) {
        self.show_message(error.message(), screen, clock);
        self.state = State::Displaying { error: true };
    }
}
