use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Error {
    #[error("Empty input")]
    EmptyInput,
    #[error("{}", describe_syntax(.0))]
    Syntax(Option<usize>),
}

fn describe_syntax(position: &Option<usize>) -> String {
    match position {
        Some(position) => format!("Syntax error at position {position}"),
        None => "Syntax error at end of input".to_string(),
    }
}

impl Error {
    /// Builds a syntax error for the character that begins at byte offset
    /// `offset` of `source`. The recorded position is a character index.
    pub(crate) fn syntax_at(source: &str, offset: usize) -> Self {
        Error::Syntax(Some(source[..offset].chars().count()))
    }

    /// The character index the error points at, if one was recorded.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::EmptyInput => None,
            Error::Syntax(position) => *position,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    fn format_message(
        message: &dyn ToString,
        source: &str,
        position: usize,
    ) -> String {
        let message = message.to_string();
        // Walk through the characters up to `position` to find line number
        // and line start
        let mut line_number = 1;
        let mut line_start = 0;
        for (idx, ch) in source.chars().enumerate() {
            if idx >= position {
                break;
            }
            if ch == '\n' {
                line_number += 1;
                line_start = idx + 1;
            }
        }
        let line = source.lines().nth(line_number - 1).unwrap_or("");
        let column = position.saturating_sub(line_start);
        let caret = " ".repeat(column) + "^";
        format!("line {line_number}: {message}\n{line}\n{caret}")
    }

    #[rustfmt::skip]
    pub fn full_message(&self, source: &str) -> String {
        match self {
            Error::EmptyInput => Self::format_message(self, source, 0),
            Error::Syntax(Some(position)) => Self::format_message(self, source, *position),
            Error::Syntax(None) => Self::format_message(self, source, source.chars().count()),
        }
    }
}

impl Default for Error {
    fn default() -> Self { Error::Syntax(None) }
}

pub type Result<T> = std::result::Result<T, Error>;
