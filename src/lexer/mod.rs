//! Lexical analysis module for the DEC language.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into an ordered sequence of tokens for parsing. It handles:
//!
//! - Single-pass tokenization with one character of lookahead
//! - Recognition of the `return` keyword, variables, and numeric literals
//! - Two-character operators (`:=`, `//`, `**`) via maximal munch
//! - Token position tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;
