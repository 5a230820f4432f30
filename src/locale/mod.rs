//! Locale data for rendering.

mod builtin;

pub use builtin::Locale;
