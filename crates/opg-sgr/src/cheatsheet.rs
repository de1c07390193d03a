//! 16-color cheat sheet for eyeballing style and color combinations.
//!
//! One table is printed per background. Rows are foregrounds, columns are
//! styles, and each cell shows its own attribute string rendered with the
//! combined sequence `style;background;foreground`.

use std::fmt::{self, Write};

use crate::code::{Bg, Fg, NamedCode, Style};
use crate::output::OutputMode;
use crate::sequence::Sequence;

pub const DEFAULT_COL_WIDTH: usize = 16;
pub const DEFAULT_COL_SEPARATOR: &str = "|";

/// Builder and renderer for the cheat sheet.
///
/// # Example
///
/// ```rust
/// use opg_sgr::{CheatSheet, Bg, Fg, OutputMode, Style};
///
/// let sheet = CheatSheet::new()
///     .styles([Style::Reset, Style::Bold])
///     .backgrounds([Bg::Black])
///     .foregrounds([Fg::Red, Fg::Green])
///     .col_width(10);
///
/// let text = sheet.render_for(OutputMode::Text);
/// assert!(text.contains("Table of @background=BG.BLACK:40"));
/// ```
#[derive(Debug, Clone)]
pub struct CheatSheet {
    styles: Vec<Style>,
    backgrounds: Vec<Bg>,
    foregrounds: Vec<Fg>,
    col_width: usize,
    col_sep: String,
}

impl CheatSheet {
    /// A sheet covering every style, background and foreground.
    pub fn new() -> Self {
        Self {
            styles: Style::ALL.to_vec(),
            backgrounds: Bg::ALL.to_vec(),
            foregrounds: Fg::ALL.to_vec(),
            col_width: DEFAULT_COL_WIDTH,
            col_sep: DEFAULT_COL_SEPARATOR.to_string(),
        }
    }

    /// The commonly supported subset: styles 0, 1, 2, 4, 5, 7 and every
    /// color except the terminal defaults.
    pub fn demo() -> Self {
        Self::new()
            .styles([
                Style::Reset,
                Style::Bold,
                Style::Dim,
                Style::Underlined,
                Style::Blinked,
                Style::Reversed,
            ])
            .backgrounds(Bg::ALL.iter().copied().filter(|bg| *bg != Bg::Default))
            .foregrounds(Fg::ALL.iter().copied().filter(|fg| *fg != Fg::Default))
    }

    pub fn styles<I: IntoIterator<Item = Style>>(mut self, styles: I) -> Self {
        self.styles = styles.into_iter().collect();
        self
    }

    pub fn backgrounds<I: IntoIterator<Item = Bg>>(mut self, backgrounds: I) -> Self {
        self.backgrounds = backgrounds.into_iter().collect();
        self
    }

    pub fn foregrounds<I: IntoIterator<Item = Fg>>(mut self, foregrounds: I) -> Self {
        self.foregrounds = foregrounds.into_iter().collect();
        self
    }

    pub fn col_width(mut self, width: usize) -> Self {
        self.col_width = width;
        self
    }

    pub fn col_separator(mut self, sep: impl Into<String>) -> Self {
        self.col_sep = sep.into();
        self
    }

    /// Renders the sheet with escape sequences in every cell.
    pub fn render(&self) -> String {
        self.render_for(OutputMode::Term)
    }

    /// Renders the sheet, leaving cells plain when `mode` disables color.
    pub fn render_for(&self, mode: OutputMode) -> String {
        self.display(mode).to_string()
    }

    /// A `Display` adapter rendering the sheet in `mode`.
    pub fn display(&self, mode: OutputMode) -> impl fmt::Display + '_ {
        Rendered { sheet: self, mode }
    }

    /// Writes the sheet into `out`.
    pub fn write_to(&self, out: &mut impl fmt::Write, mode: OutputMode) -> fmt::Result {
        let width = self.col_width;
        let sep = &self.col_sep;

        writeln!(out, "ANSI 16-Color Cheat Sheet\n")?;
        writeln!(out, "@styles: {}\n", labels(&self.styles))?;
        writeln!(out, "@backgrounds: {}\n", labels(&self.backgrounds))?;
        writeln!(out, "@foregrounds: {}", labels(&self.foregrounds))?;

        for bg in &self.backgrounds {
            write!(
                out,
                "\nTable of @background={}\n{:^width$}",
                bg.label(),
                "@FG & @STY"
            )?;
            for style in &self.styles {
                write!(out, "{sep}{:^width$}", style.label())?;
            }
            writeln!(out)?;

            for fg in &self.foregrounds {
                write!(out, "{:^width$}", fg.label())?;
                for style in &self.styles {
                    let cell: Sequence = [style.code(), bg.code(), fg.code()]
                        .into_iter()
                        .collect();
                    let text = format!("{:^width$}", cell.attributes());
                    write!(out, "{sep}{}", cell.render_for(&text, true, mode))?;
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

struct Rendered<'a> {
    sheet: &'a CheatSheet,
    mode: OutputMode,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sheet.write_to(f, self.mode)
    }
}

impl Default for CheatSheet {
    fn default() -> Self {
        Self::new()
    }
}

fn labels<T: NamedCode>(members: &[T]) -> String {
    members
        .iter()
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(", ")
}
