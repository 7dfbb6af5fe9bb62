use std::fmt::{self, Display};

pub const ANSI_ESC: &str = "\x1B[0m";

#[macro_export]
macro_rules! bprintln {
    ($col:ty, $($args:tt)*) => {{
        print!("{}", <$col>::BOLD);
        print!($($args)*);
        println!("{}", $crate::style::ANSI_ESC);
    }};
}

pub trait Color: Sized {
    const COLOR_CODE: u8;

    const NORMAL: WriteAnsi = WriteAnsi {
        bold: false,
        color: Self::COLOR_CODE,
    };

    const BOLD: WriteAnsi = WriteAnsi {
        bold: true,
        color: Self::COLOR_CODE,
    };
}

pub struct WriteAnsi {
    bold: bool,
    color: u8,
}

impl Display for WriteAnsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\x1B[")?;
        if self.bold {
            f.write_str("1;")?;
        }
        write!(f, "{}m", self.color)?;
        Ok(())
    }
}

pub struct DGreen;
impl Color for DGreen {
    const COLOR_CODE: u8 = 32;
}

pub struct DYellow;
impl Color for DYellow {
    const COLOR_CODE: u8 = 33;
}

pub struct LRed;
impl Color for LRed {
    const COLOR_CODE: u8 = 91;
}
