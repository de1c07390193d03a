//! SGR parameter codes.
//!
//! - [`Code`]: a validated SGR parameter in `0..=255`
//! - [`Style`], [`Fg`], [`Bg`]: the named code tables
//! - [`IntoCode`]: conversion from named codes, integers and text
//! - [`InvalidCodeError`]: the one way conversion can fail
//!
//! Text is parsed as a decimal integer or a code name. Names may be
//! qualified with their table (`sty.bold`, `fg.red`, `bg.red_b`); a bare
//! name is looked up among styles first, then foreground colors.

mod error;
mod named;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

pub use error::InvalidCodeError;
pub use named::{Bg, Fg, NamedCode, Style};

use named::lookup;

/// A single SGR parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "RawCode")]
pub struct Code(u8);

impl Code {
    /// Wraps a raw parameter; every `u8` is in range.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The numeric parameter.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Code> for u8 {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl From<u8> for Code {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Style> for Code {
    fn from(style: Style) -> Self {
        style.code()
    }
}

impl From<Fg> for Code {
    fn from(fg: Fg) -> Self {
        fg.code()
    }
}

impl From<Bg> for Code {
    fn from(bg: Bg) -> Self {
        bg.code()
    }
}

impl TryFrom<i64> for Code {
    type Error = InvalidCodeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(v) => Ok(Self(v)),
            Err(_) => {
                trace!(value, "rejected out-of-range SGR code");
                Err(InvalidCodeError::OutOfRange { value })
            }
        }
    }
}

impl FromStr for Code {
    type Err = InvalidCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Ok(value) = text.parse::<i64>() {
            return Code::try_from(value);
        }

        let found = match text.split_once('.') {
            Some((table, name)) if table.eq_ignore_ascii_case("sty") => {
                lookup(&Style::ALL, name).map(Code::from)
            }
            Some((table, name)) if table.eq_ignore_ascii_case("fg") => {
                lookup(Fg::ALL, name).map(Code::from)
            }
            Some((table, name)) if table.eq_ignore_ascii_case("bg") => {
                lookup(Bg::ALL, name).map(Code::from)
            }
            Some(_) => None,
            None => lookup(&Style::ALL, text)
                .map(Code::from)
                .or_else(|| lookup(Fg::ALL, text).map(Code::from)),
        };

        found.ok_or_else(|| {
            trace!(input = s, "rejected unknown SGR code name");
            InvalidCodeError::NotACode {
                input: s.to_string(),
            }
        })
    }
}

/// Serialized form accepted when deserializing a [`Code`].
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
    Int(i64),
    Name(String),
}

impl TryFrom<RawCode> for Code {
    type Error = InvalidCodeError;

    fn try_from(raw: RawCode) -> Result<Self, Self::Error> {
        match raw {
            RawCode::Int(value) => Code::try_from(value),
            RawCode::Name(name) => name.parse(),
        }
    }
}

/// Conversion into a validated [`Code`].
///
/// Named codes and `u8` always succeed; wider integers and text are checked.
pub trait IntoCode {
    fn into_code(self) -> Result<Code, InvalidCodeError>;
}

macro_rules! infallible_into_code {
    ($($ty:ty),*) => {
        $(
            impl IntoCode for $ty {
                fn into_code(self) -> Result<Code, InvalidCodeError> {
                    Ok(Code::from(self))
                }
            }

            impl IntoCode for &$ty {
                fn into_code(self) -> Result<Code, InvalidCodeError> {
                    Ok(Code::from(*self))
                }
            }
        )*
    };
}

infallible_into_code!(Code, u8, Style, Fg, Bg);

macro_rules! integer_into_code {
    ($($ty:ty),*) => {
        $(impl IntoCode for $ty {
            fn into_code(self) -> Result<Code, InvalidCodeError> {
                // Values too wide for i64 are reported as i64::MAX.
                Code::try_from(i64::try_from(self).unwrap_or(i64::MAX))
            }
        })*
    };
}

integer_into_code!(i8, i16, i32, i64, isize, u16, u32, u64, usize);

impl IntoCode for &str {
    fn into_code(self) -> Result<Code, InvalidCodeError> {
        self.parse()
    }
}

impl IntoCode for String {
    fn into_code(self) -> Result<Code, InvalidCodeError> {
        self.parse()
    }
}

impl IntoCode for &String {
    fn into_code(self) -> Result<Code, InvalidCodeError> {
        self.parse()
    }
}
