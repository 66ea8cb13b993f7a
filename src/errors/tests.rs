//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: "@".to_string(),
        },
        Position(10, Rc::new("test.dec".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.dec".to_string()));
    let error = Error::new(
        ErrorImpl::IncompleteAssignment {
            token: ":".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_leading_decimal_point_error() {
    let error = Error::new(
        ErrorImpl::LeadingDecimalPoint {
            token: ".".to_string(),
        },
        Position(0, Rc::new("test.dec".to_string())),
    );

    assert_eq!(error.get_error_name(), "LeadingDecimalPoint");
}

#[test]
fn test_second_decimal_point_error() {
    let error = Error::new(
        ErrorImpl::SecondDecimalPoint {
            token: "1.2.".to_string(),
        },
        Position(3, Rc::new("test.dec".to_string())),
    );

    assert_eq!(error.get_error_name(), "SecondDecimalPoint");

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        assert!(tip.contains("1.2."));
    } else {
        panic!("expected a suggestion tip");
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: "#".to_string(),
        },
        Position(7, Rc::new("test.dec".to_string())),
    );

    let message = format!("{}", error);
    assert!(message.contains("#"));
    assert!(message.contains("7"));
}
