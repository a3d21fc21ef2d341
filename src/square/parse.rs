//! Parse square layouts from text

use std::str::FromStr;

use crate::error::{ParseError, ParseStateError, ParseStateErrorType};
use crate::square::{SquareState, Value, BLANK, LEN};

const UNEXPECTED_END: ParseError = ParseError::from_type(ParseStateErrorType::UnexpectedEnd);

/// Parses nine values in position order, e.g. `"_ 1 2 / 4 6 3 / 7 5 8"` or `"912463758"`.
///
/// Values are digits 1-9. The blank may be written as `9` or `_`.
/// Whitespace, `,` and `/` are ignored.
impl FromStr for SquareState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = [0; LEN];
        let mut count = 0;
        for (i, c) in s.char_indices() {
            if c.is_whitespace() || c == ',' || c == '/' {
                continue;
            }
            let value = parse_value(c).ok_or_else(|| ParseError::new(ParseStateErrorType::InvalidToken, c, i))?;
            if count == LEN {
                return Err(ParseError::new(ParseStateErrorType::UnexpectedToken, c, i).into());
            }
            values[count] = value;
            count += 1;
        }
        if count < LEN {
            return Err(UNEXPECTED_END.into());
        }
        Ok(SquareState::from_values(values)?)
    }
}

fn parse_value(c: char) -> Option<Value> {
    match c {
        '_' => Some(BLANK),
        '1'..='9' => c.to_digit(10).map(|d| d as Value),
        _ => None,
    }
}
