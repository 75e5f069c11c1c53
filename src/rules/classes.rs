//! Character-class rules - uppercase, lowercase, digit presence.
//!
//! The classes are ASCII ranges (`A-Z`, `a-z`, `0-9`); membership in the
//! policy's special set is tested through the compiled class on
//! [`PolicyConfig`](crate::PolicyConfig) instead, since the set is
//! configurable.

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}
