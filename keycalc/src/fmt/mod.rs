use unicode_width::UnicodeWidthStr;

use crate::{Error, Result, EPSILON};

#[cfg(test)]
mod test;

/// Character width of one display line.
pub const LINE_WIDTH: usize = 16;

/// Renders a result for the display.
///
/// Results within epsilon of an integer print without decimals, everything
/// else with six fractional digits and trailing zeros stripped. Values that
/// do not fit the line fall back to scientific notation.
pub fn format_result(val: f64) -> Result<String> {
    let mut text = if (val - val.round()).abs() < EPSILON {
        format!("{val:.0}")
    } else {
        let mut text = format!("{val:.6}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        text
    };

    if text.width() > LINE_WIDTH {
        text = format!("{val:.3e}");
    }
    if text.width() > LINE_WIDTH {
        return Err(Error::DisplayOverflow);
    }
    Ok(text)
}
