//! Message parser - Extracts prefix commands from message text

/// A prefix command split into name and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Parses message text that starts with the configured prefix
pub struct MessageParser {
    command_prefix: String,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    /// Returns `None` for plain text, a bare prefix, or when the prefix is empty
    pub fn parse(&self, text: &str) -> Option<ParsedCommand> {
        if self.command_prefix.is_empty() {
            return None;
        }

        let cmd_text = text.trim_start().strip_prefix(self.command_prefix.as_str())?;

        // The command name must follow the prefix directly
        if cmd_text.starts_with(char::is_whitespace) {
            return None;
        }

        let mut parts = cmd_text.split_whitespace();
        let name = parts.next()?.to_lowercase();
        let args = parts.map(str::to_string).collect();

        Some(ParsedCommand { name, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_with_args() {
        let parser = MessageParser::new("!");
        assert_eq!(
            parser.parse("  !Help ping  extra"),
            Some(ParsedCommand {
                name: "help".to_string(),
                args: vec!["ping".to_string(), "extra".to_string()],
            })
        );
    }

    #[test]
    fn test_plain_text_and_bare_prefix() {
        let parser = MessageParser::new("!");
        assert_eq!(parser.parse("hello there"), None);
        assert_eq!(parser.parse("!"), None);
        assert_eq!(parser.parse("! ping"), None);
    }

    #[test]
    fn test_multi_char_prefix() {
        let parser = MessageParser::new("sb.");
        assert_eq!(parser.parse("sb.ping").map(|c| c.name), Some("ping".to_string()));
        assert_eq!(parser.parse("sb ping"), None);
    }

    #[test]
    fn test_empty_prefix_disables_parsing() {
        assert_eq!(MessageParser::new("").parse("ping"), None);
    }
}
