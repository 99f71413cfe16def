//! Parsing of raw input lines into commands.

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Lower-cased first token, empty for a blank line.
    pub name: String,
    /// Remaining tokens, unmodified.
    pub args: Vec<String>,
}

/// The entries of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Exit,
    /// A line with no tokens.
    Empty,
    Unknown,
}

impl Command {
    /// Split a line on whitespace. No quoting is supported.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().map(str::to_lowercase).unwrap_or_default();
        let args = tokens.map(ToString::to_string).collect();
        Self { name, args }
    }

    #[must_use]
    pub fn kind(&self) -> CommandKind {
        CommandKind::from_name(&self.name)
    }
}

impl CommandKind {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "" => Self::Empty,
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}
