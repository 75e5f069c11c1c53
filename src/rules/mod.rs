//! Individual rule predicates
//!
//! Each module checks one aspect of a password. The predicates are pure and
//! take the password as a plain `&str`; the evaluator owns the exposure of
//! the secret and the mapping of results onto rule identifiers.

mod classes;
mod length;
mod pattern;

pub use classes::{has_digit, has_lowercase, has_uppercase};
pub use length::length_in_bounds;
pub use pattern::pattern_warnings;
