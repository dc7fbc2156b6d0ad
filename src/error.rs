/// Source-located diagnostics.
///
/// Defines the single error value produced by the front end. Both the
/// tokenizer and the parser report failures as a [`Diagnostic`] carrying the
/// offending span, an [`ErrorKind`] and a human-readable detail string.
pub mod diagnostic;

pub use diagnostic::{Diagnostic, ErrorKind};
