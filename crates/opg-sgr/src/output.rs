//! Output mode selection.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Whether rendering should emit escape sequences.
///
/// `Auto` defers to the `console` crate, which checks that stdout is a
/// terminal and honors `NO_COLOR`/`CLICOLOR_FORCE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Emit escapes when stdout supports color.
    #[default]
    Auto,
    /// Always emit escapes.
    Term,
    /// Never emit escapes.
    Text,
}

impl OutputMode {
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_fixed_modes() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
    }

    #[test]
    #[serial]
    fn test_auto_follows_console() {
        let previous = console::colors_enabled();

        console::set_colors_enabled(true);
        assert!(OutputMode::Auto.should_use_color());
        console::set_colors_enabled(false);
        assert!(!OutputMode::Auto.should_use_color());

        console::set_colors_enabled(previous);
    }

    #[test]
    fn test_value_enum_names() {
        let names: Vec<String> = OutputMode::value_variants()
            .iter()
            .filter_map(|m| m.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, ["auto", "term", "text"]);
    }

    #[test]
    fn test_value_enum_parse() {
        assert_eq!(OutputMode::from_str("TERM", true), Ok(OutputMode::Term));
        assert_eq!(OutputMode::from_str("text", false), Ok(OutputMode::Text));
        assert!(OutputMode::from_str("json", true).is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&OutputMode::Auto).unwrap(), "\"auto\"");
        let mode: OutputMode = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(mode, OutputMode::Text);
    }
}
