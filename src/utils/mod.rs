pub mod tokens;
pub mod validation;
