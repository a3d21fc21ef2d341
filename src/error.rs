use std::fmt;
use std::fmt::{Display, Formatter};

use thiserror::Error;

#[derive(Error, Debug, Clone)]
#[cfg_attr(test, derive(PartialEq))]
#[error("invalid state: {}", msg)]
pub struct InvalidState {
    msg: String,
}

impl InvalidState {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParseStateError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidState(#[from] InvalidState),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParseStateErrorType,
    token: Option<String>,
    index: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(error_type: ParseStateErrorType, token: impl Display, index: usize) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            index: Some(index),
        }
    }

    pub(crate) const fn from_type(error_type: ParseStateErrorType) -> Self {
        Self {
            error_type,
            token: None,
            index: None,
        }
    }

    pub fn error_type(&self) -> &ParseStateErrorType {
        &self.error_type
    }
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParseStateErrorType {
    InvalidToken,
    UnexpectedEnd,
    UnexpectedToken,
}

impl Display for ParseStateErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseStateErrorType::InvalidToken => "Invalid token",
            ParseStateErrorType::UnexpectedEnd => "Unexpected end",
            ParseStateErrorType::UnexpectedToken => "Unexpected token",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(index) = &self.index {
            write!(f, " at {}", index)?;
        }
        Ok(())
    }
}

/// An unrecognized search strategy name
#[derive(Debug, Error)]
#[error("unknown strategy \"{0}\" (expected a-star, dijkstra or bfs)")]
pub struct ParseStrategyError(pub(crate) String);

/// An unrecognized difficulty name
#[derive(Debug, Error)]
#[error("unknown difficulty \"{0}\" (expected easy, hard or no-path)")]
pub struct ParseDifficultyError(pub(crate) String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("no path to the target state")]
    NoPath,
    #[error("no predecessor recorded for state {0}")]
    Broken(String),
    #[error("predecessor chain does not terminate after {0} states")]
    Cycle(usize),
    #[error("state {0} is not one move from state {1}")]
    NotAdjacent(String, String),
}
