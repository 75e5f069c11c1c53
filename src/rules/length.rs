//! Length rule - checks that the password length lies within policy bounds.

/// Checks that the password length, counted in characters, lies in
/// `[min, max]` inclusive.
pub fn length_in_bounds(password: &str, min: usize, max: usize) -> bool {
    let len = password.chars().count();
    len >= min && len <= max
}
