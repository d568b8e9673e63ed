pub mod ast;
pub mod check;
pub mod loader;
pub mod quote;
pub mod spacing;
pub mod tokens;
