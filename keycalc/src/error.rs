use std::fmt::{self, Display};

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between the first key press and the shown
/// result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The typed operand no longer fits its buffer.
    NumberTooLong,
    /// Malformed number, operator without a left operand, trailing operator
    /// or an arity mismatch found during evaluation.
    Syntax,
    /// The token sequence is at capacity.
    ExpressionTooLong,
    /// The divisor was within epsilon of zero.
    DivideByZero,
    /// An evaluator stack exceeded its capacity.
    StackOverflow,
    /// The result did not fit the display even in scientific notation.
    DisplayOverflow,
}

impl Error {
    /// The message shown on the display, at most 16 characters.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NumberTooLong => "Err: Num Len",
            Self::Syntax => "Err: Syntax",
            Self::ExpressionTooLong => "Err: Expr Long",
            Self::DivideByZero => "Err: Div Zero",
            Self::StackOverflow => "Err: Stack",
            Self::DisplayOverflow => "Err: Display",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Error {}

/// Sticky error slot. The first recorded error wins and is kept unchanged
/// until an explicit reset.
#[derive(Debug, Default)]
pub struct ErrorState {
    error: Option<Error>,
}

impl ErrorState {
    pub fn set(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub const fn get(&self) -> Option<Error> {
        self.error
    }

    pub const fn is_active(&self) -> bool {
        self.error.is_some()
    }

    pub fn clear(&mut self) {
        self.error = None;
    }
}
