//! SGR sequences: ordered code lists rendered as one escape sequence.

use std::fmt;
use std::ops::Add;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::code::{Code, IntoCode, InvalidCodeError};
use crate::output::OutputMode;

/// Control Sequence Introducer, `ESC [`.
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR sequence.
pub const SGR_END: &str = "m";

/// The parameterless SGR sequence, which terminals treat as `ESC [0m`.
pub const RESET: &str = "\x1b[m";

/// An immutable, ordered list of SGR codes.
///
/// The attribute string and the escape sequence are built once at
/// construction. Codes are kept verbatim: duplicates and conflicting
/// attributes are passed through for the terminal to resolve.
///
/// # Example
///
/// ```rust
/// use opg_sgr::{Fg, Sequence, Style};
///
/// let warn = Sequence::builder()
///     .code(Style::Bold)
///     .code(4)
///     .code(Fg::Red)
///     .build()
///     .unwrap();
///
/// assert_eq!(warn.attributes(), "1;4;31");
/// assert_eq!(warn.escape_sequence(), "\x1b[1;4;31m");
/// assert_eq!(warn.render("careful"), "\x1b[1;4;31mcareful\x1b[m");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Code>", from = "Vec<Code>")]
pub struct Sequence {
    codes: Arc<[Code]>,
    attributes: Arc<str>,
    escape: Arc<str>,
}

impl Sequence {
    /// Builds a sequence from values of one type, failing on the first invalid code.
    pub fn new<I>(codes: I) -> Result<Self, InvalidCodeError>
    where
        I: IntoIterator,
        I::Item: IntoCode,
    {
        codes
            .into_iter()
            .map(IntoCode::into_code)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_codes)
    }

    /// The sequence with no codes; it renders as [`RESET`].
    pub fn empty() -> Self {
        Self::from_codes(Vec::new())
    }

    /// Starts a builder that accepts codes of mixed types.
    pub fn builder() -> SequenceBuilder {
        SequenceBuilder::new()
    }

    fn from_codes(codes: Vec<Code>) -> Self {
        let attributes = codes
            .iter()
            .map(Code::to_string)
            .collect::<Vec<_>>()
            .join(";");
        let escape = format!("{CSI}{attributes}{SGR_END}");
        Self {
            codes: codes.into(),
            attributes: attributes.into(),
            escape: escape.into(),
        }
    }

    /// The codes in construction order.
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Semicolon-joined decimal codes, e.g. `1;4;31`.
    pub fn attributes(&self) -> &str {
        &self.attributes
    }

    /// The full escape sequence, `ESC [` + attributes + `m`.
    pub fn escape_sequence(&self) -> &str {
        &self.escape
    }

    /// Wraps `text` in this sequence followed by [`RESET`].
    pub fn render(&self, text: &str) -> String {
        self.render_with(text, true)
    }

    /// Wraps `text` in this sequence, appending [`RESET`] only when `reset` is set.
    pub fn render_with(&self, text: &str, reset: bool) -> String {
        let tail = if reset { RESET } else { "" };
        format!("{}{text}{tail}", self.escape)
    }

    /// Like [`render_with`](Self::render_with), but returns `text` untouched
    /// when `mode` disables color.
    pub fn render_for(&self, text: &str, reset: bool, mode: OutputMode) -> String {
        if mode.should_use_color() {
            self.render_with(text, reset)
        } else {
            text.to_string()
        }
    }

    /// A new sequence with this sequence's codes followed by `other`'s.
    pub fn concat(&self, other: &Sequence) -> Sequence {
        let mut codes = Vec::with_capacity(self.len() + other.len());
        codes.extend_from_slice(&self.codes);
        codes.extend_from_slice(&other.codes);
        Self::from_codes(codes)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escape)
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence({})", self.attributes)
    }
}

impl Add for Sequence {
    type Output = Sequence;

    fn add(self, rhs: Sequence) -> Sequence {
        self.concat(&rhs)
    }
}

impl Add<&Sequence> for &Sequence {
    type Output = Sequence;

    fn add(self, rhs: &Sequence) -> Sequence {
        self.concat(rhs)
    }
}

impl FromIterator<Code> for Sequence {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        Self::from_codes(iter.into_iter().collect())
    }
}

impl From<Vec<Code>> for Sequence {
    fn from(codes: Vec<Code>) -> Self {
        Self::from_codes(codes)
    }
}

impl From<Sequence> for Vec<Code> {
    fn from(seq: Sequence) -> Self {
        seq.codes.to_vec()
    }
}

/// Fluent builder for sequences mixing named codes, integers and names.
///
/// The first invalid code is remembered and returned by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct SequenceBuilder {
    codes: Vec<Code>,
    error: Option<InvalidCodeError>,
}

impl SequenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a code.
    pub fn code<C: IntoCode>(mut self, code: C) -> Self {
        if self.error.is_none() {
            match code.into_code() {
                Ok(code) => self.codes.push(code),
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    /// Appends every code of an existing sequence.
    pub fn extend(mut self, seq: &Sequence) -> Self {
        self.codes.extend_from_slice(seq.codes());
        self
    }

    pub fn build(self) -> Result<Sequence, InvalidCodeError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(Sequence::from_codes(self.codes)),
        }
    }
}

/// Builds a [`Sequence`] from codes of mixed types.
///
/// Expands to a [`SequenceBuilder`] chain and evaluates to
/// `Result<Sequence, InvalidCodeError>`.
///
/// ```rust
/// use opg_sgr::{sgr, Bg, Style};
///
/// let seq = sgr![Style::Bold, Bg::Blue, 97].unwrap();
/// assert_eq!(seq.to_string(), "\x1b[1;44;97m");
/// assert!(sgr![256].is_err());
/// ```
#[macro_export]
macro_rules! sgr {
    ($($code:expr),* $(,)?) => {
        $crate::Sequence::builder()
            $(.code($code))*
            .build()
    };
}
