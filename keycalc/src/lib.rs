pub use error::*;
pub use eval::*;
pub use expr::*;
pub use fmt::*;
pub use num::*;
pub use session::*;
pub use token::*;

mod error;
mod eval;
mod expr;
mod fmt;
mod num;
mod session;
mod token;

/// Float comparison tolerance, used both for the division-by-zero guard and
/// for deciding whether a result displays as an integer.
pub const EPSILON: f64 = 1e-7;
