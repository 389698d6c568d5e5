//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens. It handles:
//!
//! - Recognition of keywords, identifiers and integer literals
//! - Single and two-character operators (`=`/`==`, `!`/`!=`)
//! - Whitespace skipping
//! - Marking unrecognised bytes as `Illegal` tokens

pub mod lexer;
pub mod tokens;
