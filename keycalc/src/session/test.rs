use crate::MAX_TOKENS;

use super::*;

#[derive(Default)]
struct TestScreen {
    lines: [String; 2],
    line: usize,
    writes: Vec<String>,
}

impl Screen for TestScreen {
    fn clear(&mut self) {
        self.lines = [String::new(), String::new()];
        self.line = 0;
    }

    fn second_line(&mut self) {
        self.line = 1;
    }

    fn write(&mut self, text: &str) {
        self.lines[self.line].push_str(text);
        self.writes.push(text.to_string());
    }
}

#[derive(Default)]
struct TestClock {
    slept: Duration,
}

impl Clock for TestClock {
    fn sleep(&mut self, duration: Duration) {
        self.slept += duration;
    }
}

fn feed(keys: &str) -> (Calculator, TestScreen) {
    let mut calc = Calculator::new();
    let mut screen = TestScreen::default();
    let mut clock = TestClock::default();
    calc.power_on(&mut screen, &mut clock);
    for c in keys.chars() {
        let key = Key::from_char(c).expect("unmapped key");
        calc.key(Some(key), &mut screen, &mut clock);
    }
    (calc, screen)
}

fn assert_shows(line1: &str, keys: &str) {
    let (_, screen) = feed(keys);
    assert_eq!(screen.lines[0], line1, "keys: {keys}");
}

#[test]
fn startup_banner() {
    let mut calc = Calculator::new();
    let mut screen = TestScreen::default();
    let mut clock = TestClock::default();
    calc.power_on(&mut screen, &mut clock);
    assert_eq!(screen.writes[0], "Calculator Ready");
    assert_eq!(screen.writes[1], "Enter Expression");
    // The banner is replaced by the empty input screen.
    assert_eq!(screen.lines, [String::new(), String::new()]);
    assert_eq!(clock.slept, CLEAR_SETTLE * 2 + LINE_SETTLE * 2 + BANNER_PAUSE);
}

#[test]
fn no_key_polls_and_waits() {
    let mut calc = Calculator::new();
    let mut screen = TestScreen::default();
    let mut clock = TestClock::default();
    calc.power_on(&mut screen, &mut clock);
    let before = clock.slept;
    calc.key(None, &mut screen, &mut clock);
    assert_eq!(clock.slept - before, IDLE_POLL);
    assert_eq!(calc.state, State::Idle);
}

#[test]
fn add_scenario() {
    let (_, screen) = feed("12+3=");
    assert_eq!(screen.lines[0], "15");
    assert_eq!(screen.lines[1], "");
}

#[test]
fn div_zero_scenario() {
    assert_shows("Err: Div Zero", "1/0=");
}

#[test]
fn single_number() {
    assert_shows("7", "7=");
}

#[test]
fn equals_on_empty_input() {
    assert_shows("0", "=");
}

#[test]
fn left_to_right() {
    assert_shows("11", "10-2+3=");
}

#[test]
fn precedence() {
    assert_shows("14", "2+3*4=");
    assert_shows("10", "2*3+4=");
}

#[test]
fn fraction() {
    assert_shows("0.5", "1/2=");
}

#[test]
fn decimal_input() {
    assert_shows("4", "2.5+1.5=");
    assert_shows("0.75", ".5+.25=");
}

#[test]
fn unary_minus_at_start() {
    assert_shows("10", "-5*-2=");
}

#[test]
fn unary_minus_after_operator() {
    assert_shows("-4", "8*-0.5=");
}

#[test]
fn leading_plus_is_tolerated() {
    let (calc, screen) = feed("+");
    assert_eq!(calc.error(), None);
    assert_eq!(screen.lines[0], "+");
    // It still fails the arity check once evaluated.
    assert_shows("Err: Syntax", "+5=");
}

#[test]
fn operator_without_operand() {
    assert_shows("Err: Syntax", "*");
    assert_shows("Err: Syntax", "/");
}

#[test]
fn doubled_operator() {
    assert_shows("Err: Syntax", "5**");
}

#[test]
fn trailing_operator_on_equals() {
    assert_shows("Err: Syntax", "5*=");
}

#[test]
fn number_too_long() {
    assert_shows("Err: Num Len", "12345678901234567");
}

#[test]
fn second_decimal_point() {
    assert_shows("Err: Syntax", "1.2.");
}

#[test]
fn expression_too_long() {
    let mut keys = "1+".repeat(MAX_TOKENS / 2);
    keys.push_str("1=");
    assert_shows("Err: Expr Long", &keys);
}

#[test]
fn live_input_display() {
    let (_, screen) = feed("12+3");
    assert_eq!(screen.lines[0], "12+");
    assert_eq!(screen.lines[1], "3");
}

#[test]
fn history_shows_the_tail() {
    let (_, screen) = feed("12345678+12345678+");
    assert_eq!(screen.lines[0], "345678+12345678+");
    assert_eq!(screen.lines[1], "");
}

#[test]
fn any_key_after_result_starts_fresh() {
    let (calc, screen) = feed("12+3=7");
    assert_eq!(calc.error(), None);
    assert!(calc.expr().is_empty());
    assert_eq!(screen.lines[0], "");
    assert_eq!(screen.lines[1], "7");
}

#[test]
fn equals_after_result_is_not_consumed() {
    // The second `=` resets and then evaluates the empty input.
    assert_shows("0", "12+3==");
}

#[test]
fn equals_after_error_only_clears() {
    let (calc, screen) = feed("1/0==");
    assert_eq!(calc.error(), None);
    assert_eq!(screen.lines, [String::new(), String::new()]);
    assert_eq!(calc.state, State::Idle);
}

#[test]
fn key_after_error_seeds_next_calculation() {
    let (calc, screen) = feed("1/0=5");
    assert_eq!(calc.error(), None);
    assert_eq!(screen.lines[1], "5");
}

#[test]
fn reset_clears_every_error_kind() {
    let long_expr = {
        let mut keys = "1+".repeat(MAX_TOKENS / 2);
        keys.push_str("1=");
        keys
    };
    let cases = [
        ("12345678901234567", Error::NumberTooLong),
        ("1.2.", Error::Syntax),
        ("*", Error::Syntax),
        ("1/0=", Error::DivideByZero),
        (long_expr.as_str(), Error::ExpressionTooLong),
    ];

    for (keys, error) in cases {
        let (mut calc, mut screen) = feed(keys);
        assert_eq!(calc.error(), Some(error), "keys: {keys}");

        let mut clock = TestClock::default();
        calc.key(Some(Key::Digit(0)), &mut screen, &mut clock);
        assert_eq!(calc.error(), None);
        assert!(calc.expr().is_empty());
        assert_eq!(calc.expr().history(), "");
        assert_eq!(calc.num().as_str(), "0");
    }
}

#[test]
fn first_error_wins() {
    let mut error = ErrorState::default();
    error.set(Error::DivideByZero);
    error.set(Error::Syntax);
    assert_eq!(error.get(), Some(Error::DivideByZero));
    error.clear();
    assert_eq!(error.get(), None);
}

#[test]
fn input_error_is_displayed_immediately() {
    let (calc, screen) = feed("12345678901234567");
    assert_eq!(calc.error(), Some(Error::NumberTooLong));
    assert_eq!(screen.lines[0], "Err: Num Len");
    assert_eq!(calc.state, State::Displaying { error: true });
}
