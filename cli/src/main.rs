use std::env::args;
use std::process::ExitCode;

use keycalc::{Calculator, Key};

use lcd::*;
pub use style::*;

mod keypad;
mod lcd;
mod style;

enum Action {
    Feed(String),
    Interactive,
    Help,
    Version,
}

macro_rules! error {
    ($($args:tt)*) => {{
        bprintln!(LRed, $($args)*);
        println!();
        help();
        return ExitCode::FAILURE;
    }};
}

fn main() -> ExitCode {
    let mut action = None;

    let mut args = args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "i" | "interactive" => action = Some(Action::Interactive),
            "-h" | "--help" => action = Some(Action::Help),
            "-v" | "--version" => action = Some(Action::Version),
            "--" => {
                let keys = args.collect::<Vec<_>>().join("");
                action = Some(Action::Feed(keys));
                break;
            }
            a => {
                error!("Invalid argument: `{a}`");
            }
        }
    }

    match action {
        Some(Action::Feed(keys)) => feed(&keys),
        Some(Action::Interactive) => keypad::run(),
        Some(Action::Help) => {
            help();
            ExitCode::SUCCESS
        }
        Some(Action::Version) => {
            version();
            ExitCode::SUCCESS
        }
        None => {
            bprintln!(LRed, "Missing arguments\n");
            help();
            ExitCode::FAILURE
        }
    }
}

/// Presses the given keys on a fresh calculator and prints what the display
/// shows afterwards.
fn feed(keys: &str) -> ExitCode {
    let mut calc = Calculator::new();
    let mut lcd = BufferLcd::default();
    let mut clock = NoopClock;
    calc.power_on(&mut lcd, &mut clock);

    for c in keys.chars() {
        if c.is_ascii_whitespace() {
            continue;
        }
        let Some(key) = Key::from_char(c) else {
            bprintln!(LRed, "Invalid key: `{c}`");
            return ExitCode::FAILURE;
        };
        calc.key(Some(key), &mut lcd, &mut clock);
    }

    for line in lcd.lines() {
        if !line.is_empty() {
            println!("{line}");
        }
    }
    ExitCode::SUCCESS
}

fn help() {
    println!(
        "\
{green}keycalc{esc} {vers}
{desc}

{yellow}USAGE:{esc}
    keycalc [COMMAND][OPTIONS] [-- KEYS]

{yellow}KEYS:{esc}
    Key presses fed to the calculator: digits, `+ - * / .` and `=`

{yellow}COMMANDS:{esc}
    {green}i{esc}, {green}interactive{esc}   Drive the keypad from the terminal

{yellow}OPTIONS:{esc}
    {green}-h{esc}, {green}--help{esc}          Show this help message
    {green}-v{esc}, {green}--version{esc}       Print the version
",
        vers = env!("CARGO_PKG_VERSION"),
        desc = env!("CARGO_PKG_DESCRIPTION"),
        green = DGreen::NORMAL,
        yellow = DYellow::NORMAL,
        esc = ANSI_ESC,
    );
}

fn version() {
    println!(env!("CARGO_PKG_VERSION"));
}
