//! A line-oriented command language for driving a [`History`](crate::History).
//!
//! ```text
//! # comments and blank lines are skipped
//! push 0
//! push "Hello"
//! commit
//! set 1 "World"
//! draw
//! undo
//! ```

use crate::Error;
use thiserror::Error;

/// The script replayed by the command-line tool when no script is given.
pub const DEMO: &str = include_str!("../demo.script");

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Integer(i64),
    Real(f64),
    Bool(bool),
    Text(String),
    /// A copy of the current snapshot, nested as a single element.
    Current,
    /// The [`Entry`](crate::Entry) placeholder.
    Entry,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Push(Literal),
    Set(usize, Literal),
    Commit,
    Undo,
    Save(String),
    Rewind(String),
    Draw,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub number: usize,
    pub command: Command,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` expects {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("Unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("Invalid index `{0}`")]
    InvalidIndex(String),
    #[error("Invalid literal `{0}`")]
    InvalidLiteral(String),
    #[error("Unterminated string `{0}`")]
    UnterminatedString(String),
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Line {line}: {error}")]
    Parse { line: usize, error: ParseError },
    #[error("Line {line}: {error}")]
    Execute { line: usize, error: Error },
}

/// Parses a whole script. Nothing is returned unless every line parses.
pub fn parse_script(script: &str) -> Result<Vec<Line>, ScriptError> {
    let mut lines = vec![];
    for (index, text) in script.lines().enumerate() {
        let number = index + 1;
        let command =
            parse_command(text).map_err(|error| ScriptError::Parse { line: number, error })?;
        if let Some(command) = command {
            lines.push(Line { number, command });
        }
    }
    Ok(lines)
}

/// Parses a single line, returning `None` for blank lines and comments.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (keyword, rest) = split_word(line);
    let command = match keyword {
        "push" => Command::Push(parse_literal(required(rest, "push", "a value")?)?),
        "set" => {
            let (index, value) = split_word(required(rest, "set", "an index and a value")?);
            let index = index
                .parse()
                .map_err(|_| ParseError::InvalidIndex(index.to_string()))?;
            Command::Set(index, parse_literal(required(value, "set", "a value")?)?)
        }
        "commit" => no_argument(rest, Command::Commit)?,
        "undo" => no_argument(rest, Command::Undo)?,
        "draw" => no_argument(rest, Command::Draw)?,
        "save" => Command::Save(parse_name(required(rest, "save", "a name")?)?),
        "rewind" => Command::Rewind(parse_name(required(rest, "rewind", "a name")?)?),
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

pub fn parse_literal(text: &str) -> Result<Literal, ParseError> {
    if let Some(quoted) = text.strip_prefix('"') {
        // Strings have no escapes: the next quote closes the string.
        let (inner, rest) = quoted
            .split_once('"')
            .ok_or_else(|| ParseError::UnterminatedString(text.to_string()))?;
        let rest = rest.trim_start();
        if !rest.is_empty() {
            return Err(ParseError::UnexpectedArgument(rest.to_string()));
        }
        return Ok(Literal::Text(inner.to_string()));
    }
    let invalid = || ParseError::InvalidLiteral(text.to_string());
    match text {
        "true" => Ok(Literal::Bool(true)),
        "false" => Ok(Literal::Bool(false)),
        "current" => Ok(Literal::Current),
        "entry" => Ok(Literal::Entry),
        _ => {
            let digits = text.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(text);
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                text.parse().map(Literal::Integer).map_err(|_| invalid())
            } else {
                match text.parse::<f64>() {
                    Ok(x) if x.is_finite() => Ok(Literal::Real(x)),
                    _ => Err(invalid()),
                }
            }
        }
    }
}

fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

fn required<'a>(
    text: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, ParseError> {
    if text.is_empty() {
        Err(ParseError::MissingArgument { command, argument })
    } else {
        Ok(text)
    }
}

fn no_argument(rest: &str, command: Command) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::UnexpectedArgument(rest.to_string()))
    }
}

fn parse_name(text: &str) -> Result<String, ParseError> {
    match split_word(text) {
        (name, "") => Ok(name.to_string()),
        (_, extra) => Err(ParseError::UnexpectedArgument(extra.to_string())),
    }
}
