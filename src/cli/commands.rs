//! Command parsing for the interactive session

/// One line of user input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search the catalog by drink name
    Search(String),
    /// Add all ingredients of a 1-based result card (raw argument, validated by the session)
    Add(String),
    /// Show the shopping list
    List,
    /// Print the shopping list
    Print,
    /// Switch measurement system (raw argument, validated by the session)
    Units(String),
    Help,
    Quit,
    /// Blank line
    Empty,
    /// Anything else
    Unknown(String),
}

impl Command {
    /// Parse a line of input; the command word is case-insensitive
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "search" | "s" => Command::Search(rest.to_string()),
            "add" | "a" => Command::Add(rest.to_string()),
            "list" | "ls" => Command::List,
            "print" => Command::Print,
            "units" => Command::Units(rest.to_string()),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(word.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("search  whiskey sour "), Command::Search("whiskey sour".to_string()));
        assert_eq!(Command::parse("ADD 2"), Command::Add("2".to_string()));
        assert_eq!(Command::parse("list"), Command::List);
        assert_eq!(Command::parse("print"), Command::Print);
        assert_eq!(Command::parse("units metric"), Command::Units("metric".to_string()));
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("shake it"), Command::Unknown("shake".to_string()));
    }

    #[test]
    fn test_search_without_query() {
        assert_eq!(Command::parse("search"), Command::Search(String::new()));
    }
}
