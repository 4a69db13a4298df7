//! Command line tokenizer
//!
//! The only grammar is whitespace: the first token names the command, the
//! rest are positional arguments. The full text handed to handlers is the
//! arguments rejoined with single spaces, so runs of whitespace between
//! arguments collapse.

/// A tokenized command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Command name or alias as typed
    pub identifier: String,
    /// Positional arguments
    pub args: Vec<String>,
}

impl CommandLine {
    /// Tokenize a raw line. Returns `None` for blank input.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let identifier = tokens.next()?.to_string();
        let args = tokens.map(str::to_string).collect();
        Some(Self { identifier, args })
    }

    /// Arguments rejoined with single spaces
    #[must_use]
    pub fn full_text(&self) -> String {
        self.args.join(" ")
    }
}
