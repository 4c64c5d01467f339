//! Tree output formatting
//!
//! `TextFormatter` renders the walker's stream as connector-drawn UTF-8 text
//! into any `io::Write`.

mod text;

pub use text::TextFormatter;
