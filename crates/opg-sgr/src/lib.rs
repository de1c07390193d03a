//! # opg-sgr - SGR escape sequences for styled terminal text
//!
//! Builds ANSI "Select Graphic Rendition" sequences from named styles and
//! colors and wraps text in them.
//!
//! ```rust
//! use opg_sgr::{sgr, Fg, Sequence, Style};
//!
//! let alert = sgr![Style::Bold, Style::Underlined, Fg::Red].unwrap();
//! assert_eq!(alert.escape_sequence(), "\x1b[1;4;31m");
//! assert_eq!(alert.render("fire"), "\x1b[1;4;31mfire\x1b[m");
//! assert_eq!(alert.render_with("fire", false), "\x1b[1;4;31mfire");
//!
//! // Sequences concatenate in order.
//! let base = Sequence::new([1, 4]).unwrap();
//! let red = Sequence::new([Fg::Red]).unwrap();
//! assert_eq!((base + red).attributes(), "1;4;31");
//! ```
//!
//! ## Codes
//!
//! A [`Code`] is any integer in `0..=255`. The named tables are [`Style`]
//! (0-9), [`Fg`] (30-37, 39, 90-97) and [`Bg`] (each foreground plus 10).
//! Anything implementing [`IntoCode`] can go into a sequence: named codes,
//! integers, or text such as `"bold"`, `"fg.red"`, `"bg.cyan_b"` or `"38"`.
//! Values that do not map into range fail with [`InvalidCodeError`].
//!
//! ## Output modes
//!
//! [`OutputMode`] decides whether escapes are emitted at all; see
//! [`Sequence::render_for`].

pub mod cheatsheet;
pub mod code;
mod output;
mod sequence;

pub use cheatsheet::CheatSheet;
pub use code::{Bg, Code, Fg, IntoCode, InvalidCodeError, NamedCode, Style};
pub use output::OutputMode;
pub use sequence::{Sequence, SequenceBuilder, CSI, RESET, SGR_END};
