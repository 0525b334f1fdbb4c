/// Returned when a string is not a base-10 integer literal of the form `[+-]?[0-9]+`
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to parse integer {text:?}")]
pub struct ParseIntError {
    text: String,
}
impl ParseIntError {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }

    /// The input that failed to parse
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Raised when the divisor of a division is zero
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("attempted to divide by zero")]
pub struct DivisionError;

/// Errors produced when decoding a value from one of the supported encodings
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error(transparent)]
    Parse(#[from] ParseIntError),
    #[error("unsupported attribute value shape, expected a null flag or a numeric field")]
    UnsupportedShape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_mentions_input() {
        let err = ParseIntError::new("12x");
        assert_eq!(err.text(), "12x");
        assert_eq!(err.to_string(), "failed to parse integer \"12x\"");
    }

    #[test]
    fn decode_error_is_transparent_over_parse_errors() {
        let err: DecodeError = ParseIntError::new("--1").into();
        assert_eq!(err.to_string(), "failed to parse integer \"--1\"");
        assert!(DecodeError::UnsupportedShape
            .to_string()
            .starts_with("unsupported attribute value shape"));
    }
}
