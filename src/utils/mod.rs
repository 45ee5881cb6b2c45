//! Utility functions
//!
//! Pure helpers shared by the console: input validation, display
//! formatting, random fixtures, deep cloning and timing. None of these
//! modules hold state.

pub mod clone;
pub mod formatting;
pub mod random;
pub mod time;
pub mod validation;
