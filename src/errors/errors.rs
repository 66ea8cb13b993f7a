use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexical error: the first invalid construct found during a scan. The
/// scan never partially succeeds, so a single error is all a caller ever
/// sees from one `tokenize` call.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::LeadingDecimalPoint { .. } => "LeadingDecimalPoint",
            ErrorImpl::SecondDecimalPoint { .. } => "SecondDecimalPoint",
            ErrorImpl::IncompleteAssignment { .. } => "IncompleteAssignment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` is not part of the language",
                character
            )),
            ErrorImpl::LeadingDecimalPoint { .. } => ErrorTip::Suggestion(String::from(
                "a decimal point must follow at least one digit, write `0.5` instead of `.5`",
            )),
            ErrorImpl::SecondDecimalPoint { token } => ErrorTip::Suggestion(format!(
                "number `{}` already has a decimal point",
                token
            )),
            ErrorImpl::IncompleteAssignment { .. } => ErrorTip::Suggestion(String::from(
                "`:` is only valid as part of the assignment operator `:=`",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at position {}", self.internal_error, self.position.0)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("decimal point with no preceding digit: {token:?}")]
    LeadingDecimalPoint { token: String },
    #[error("second decimal point in number: {token:?}")]
    SecondDecimalPoint { token: String },
    #[error("incomplete assignment operator: {token:?}")]
    IncompleteAssignment { token: String },
}
