//! Grammar productions for the configuration language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Statements are layout sensitive: a line break ends a statement, and a `(` or `{`
//! only continues the construct before it when it starts on the same line.

mod atoms;
mod expressions;
mod items;
