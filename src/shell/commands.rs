//! Parsing of interactive input lines.

use crate::config::SearchMode;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input
    Empty,
    /// `:quit`
    Quit,
    /// `:help`
    Help,
    /// `:highlight on|off`
    Highlight(bool),
    /// `:search-mode AND|OR`
    SearchMode(SearchMode),
    /// Recognized command with bad arguments; holds the usage text
    Usage(&'static str),
    /// Unrecognized `:` command
    Unknown(String),
    /// Search query, trimmed
    Query(String),
}

pub const HIGHLIGHT_USAGE: &str = "Usage: :highlight on|off";
pub const SEARCH_MODE_USAGE: &str = "Usage: :search-mode AND|OR";

impl Command {
    /// Parse a raw input line.
    pub fn parse(raw: &str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if !line.starts_with(':') {
            return Self::Query(line.to_string());
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [":quit"] => Self::Quit,
            [":help"] => Self::Help,
            [":highlight", arg] => match arg.to_ascii_lowercase().as_str() {
                "on" => Self::Highlight(true),
                "off" => Self::Highlight(false),
                _ => Self::Usage(HIGHLIGHT_USAGE),
            },
            [":highlight", ..] => Self::Usage(HIGHLIGHT_USAGE),
            [":search-mode", arg] => match arg.parse() {
                Ok(mode) => Self::SearchMode(mode),
                Err(_) => Self::Usage(SEARCH_MODE_USAGE),
            },
            [":search-mode", ..] => Self::Usage(SEARCH_MODE_USAGE),
            _ => Self::Unknown(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   \t"), Command::Empty);
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(
            Command::parse("  summer day \n"),
            Command::Query("summer day".to_string())
        );
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(Command::parse(":quit"), Command::Quit);
        assert_eq!(Command::parse(":help"), Command::Help);
    }

    #[test]
    fn test_highlight() {
        assert_eq!(Command::parse(":highlight ON"), Command::Highlight(true));
        assert_eq!(Command::parse(":highlight off"), Command::Highlight(false));
        assert_eq!(Command::parse(":highlight"), Command::Usage(HIGHLIGHT_USAGE));
        assert_eq!(Command::parse(":highlight maybe"), Command::Usage(HIGHLIGHT_USAGE));
    }

    #[test]
    fn test_search_mode() {
        assert_eq!(
            Command::parse(":search-mode or"),
            Command::SearchMode(SearchMode::Or)
        );
        assert_eq!(
            Command::parse(":search-mode AND"),
            Command::SearchMode(SearchMode::And)
        );
        assert_eq!(
            Command::parse(":search-mode xor"),
            Command::Usage(SEARCH_MODE_USAGE)
        );
        assert_eq!(
            Command::parse(":search-mode and or"),
            Command::Usage(SEARCH_MODE_USAGE)
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse(":sort title"),
            Command::Unknown(":sort title".to_string())
        );
    }
}
