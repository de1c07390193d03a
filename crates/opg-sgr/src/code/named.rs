//! Named SGR codes: text styles, foreground and background colors.

use super::Code;

/// A member of one of the named code tables.
pub trait NamedCode: Copy {
    /// Table prefix used in labels and qualified names (`STY`, `FG`, `BG`).
    const CATEGORY: &'static str;

    /// Upper-case member name, e.g. `RED_B`.
    fn name(self) -> &'static str;

    /// The numeric SGR code.
    fn code(self) -> Code;

    /// Short description such as `FG.RED:31`.
    fn label(self) -> String {
        format!("{}.{}:{}", Self::CATEGORY, self.name(), self.code())
    }
}

/// Text style attributes (codes 0-9).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Reset = 0,
    Bold = 1,
    Dim = 2,
    Italic = 3,
    Underlined = 4,
    Blinked = 5,
    Rapid = 6,
    Reversed = 7,
    Hidden = 8,
    Crossed = 9,
}

impl Style {
    /// Every style, in code order.
    pub const ALL: [Style; 10] = [
        Style::Reset,
        Style::Bold,
        Style::Dim,
        Style::Italic,
        Style::Underlined,
        Style::Blinked,
        Style::Rapid,
        Style::Reversed,
        Style::Hidden,
        Style::Crossed,
    ];

    /// Looks up a style by its numeric code.
    pub fn from_code(code: u8) -> Option<Style> {
        Self::ALL.get(usize::from(code)).copied()
    }
}

impl NamedCode for Style {
    const CATEGORY: &'static str = "STY";

    fn name(self) -> &'static str {
        match self {
            Style::Reset => "RESET",
            Style::Bold => "BOLD",
            Style::Dim => "DIM",
            Style::Italic => "ITALIC",
            Style::Underlined => "UNDERLINED",
            Style::Blinked => "BLINKED",
            Style::Rapid => "RAPID",
            Style::Reversed => "REVERSED",
            Style::Hidden => "HIDDEN",
            Style::Crossed => "CROSSED",
        }
    }

    fn code(self) -> Code {
        Code::new(self as u8)
    }
}

// Both color tables come from one list; backgrounds sit 10 above foregrounds.
macro_rules! color_tables {
    ($($variant:ident = $value:literal => $name:literal),+ $(,)?) => {
        /// Foreground colors (30-37, 39, 90-97).
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Fg {
            $($variant = $value),+
        }

        /// Background colors, each the matching [`Fg`] code plus 10.
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Bg {
            $($variant = $value + 10),+
        }

        impl Fg {
            /// Every foreground color, `DEFAULT` first.
            pub const ALL: &'static [Fg] = &[$(Fg::$variant),+];

            /// The background color with the same hue.
            pub fn bg(self) -> Bg {
                Bg::from(self)
            }
        }

        impl Bg {
            /// Every background color, `DEFAULT` first.
            pub const ALL: &'static [Bg] = &[$(Bg::$variant),+];

            /// The foreground color with the same hue.
            pub fn fg(self) -> Fg {
                match self {
                    $(Bg::$variant => Fg::$variant),+
                }
            }
        }

        impl From<Fg> for Bg {
            fn from(fg: Fg) -> Self {
                match fg {
                    $(Fg::$variant => Bg::$variant),+
                }
            }
        }

        impl NamedCode for Fg {
            const CATEGORY: &'static str = "FG";

            fn name(self) -> &'static str {
                match self {
                    $(Fg::$variant => $name),+
                }
            }

            fn code(self) -> Code {
                Code::new(self as u8)
            }
        }

        impl NamedCode for Bg {
            const CATEGORY: &'static str = "BG";

            fn name(self) -> &'static str {
                self.fg().name()
            }

            fn code(self) -> Code {
                Code::new(self as u8)
            }
        }
    };
}

color_tables! {
    Default = 39 => "DEFAULT",
    Black = 30 => "BLACK",
    Red = 31 => "RED",
    Green = 32 => "GREEN",
    Yellow = 33 => "YELLOW",
    Blue = 34 => "BLUE",
    Magenta = 35 => "MAGENTA",
    Cyan = 36 => "CYAN",
    White = 37 => "WHITE",
    BrightBlack = 90 => "BLACK_B",
    BrightRed = 91 => "RED_B",
    BrightGreen = 92 => "GREEN_B",
    BrightYellow = 93 => "YELLOW_B",
    BrightBlue = 94 => "BLUE_B",
    BrightMagenta = 95 => "MAGENTA_B",
    BrightCyan = 96 => "CYAN_B",
    BrightWhite = 97 => "WHITE_B",
}

/// Finds a table member by case-insensitive name.
pub(crate) fn lookup<T: NamedCode>(table: &[T], name: &str) -> Option<T> {
    table
        .iter()
        .copied()
        .find(|member| member.name().eq_ignore_ascii_case(name))
}
