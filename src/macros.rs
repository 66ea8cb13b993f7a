//! Utility macros for the tokenizer.
//!
//! This module defines the helper macro used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! It reduces boilerplate when finalizing lexemes in the scanner.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}
