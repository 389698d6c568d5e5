//! Error types for the lexer front end.
//!
//! The lexer itself never fails; these errors come from the pieces around
//! it:
//!
//! - Reading and writing the interactive session
//! - Reading a source file
//! - Parsing command line arguments

pub mod errors;
