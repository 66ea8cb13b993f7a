//! Error types and error handling for the tokenizer.
//!
//! This module defines the lexical error type produced during scanning.
//! It includes:
//!
//! - An error structure with source position information
//! - Specific error variants for each invalid construct
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
