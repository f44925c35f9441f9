// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

/// Rejection of an extraction range before any result is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeError {
    Inverted { start: usize, end: usize },
    OutOfBounds { start: usize, end: usize, size: usize },
}

impl RangeError {
    pub fn stringly(&self) -> StringlyError {
        use self::RangeError::*;
        let message = match self {
            Inverted { start, end } => {
                format!("Invalid range [{}, {}): start after end", start, end)
            }
            OutOfBounds { start, end, size } => format!(
                "Invalid range [{}, {}): out of bounds for size {}",
                start, end, size
            ),
        };
        StringlyError { message }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DescError {
    Syntax { message: String },
    InvalidShape,
    InvalidReference { value: String },
}

impl DescError {
    pub fn stringly(&self) -> StringlyError {
        use self::DescError::*;
        let message = match self {
            Syntax { message } => format!("Invalid aggregate description: {}", message),
            InvalidShape => "Aggregate description must have exactly one of tuple, array".to_string(),
            InvalidReference { value } => {
                format!("Invalid reference {}, expected lvalue or rvalue", value)
            }
        };
        StringlyError { message }
    }
}

pub struct StringlyError {
    pub message: String,
}
