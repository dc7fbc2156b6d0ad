/// Grammar tiers and the token cursor.
///
/// Holds the [`core::Parser`] state, the `expr`/`term`/`factor` rules and the
/// entry point that insists the whole token sequence is consumed.
pub mod core;

/// Left-associative binary operator folding.
///
/// One routine implements every precedence tier; a tier is just an operand
/// rule plus the operators it accepts.
pub mod binary;

pub use self::core::{ParseResult, Parser};
