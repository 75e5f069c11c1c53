//! Pattern analysis - advisory detection of repetitive and sequential runs.
//!
//! Findings here are warnings only; they never affect validity or the point
//! score.

use crate::types::Warning;

const SEQUENTIAL_RUN: usize = 4;
const REPEATED_RUN: usize = 3;

/// Scans the password for easily guessable patterns.
pub fn pattern_warnings(password: &str) -> Vec<Warning> {
    let chars: Vec<char> = password.chars().collect();
    let mut warnings = Vec::new();

    if has_sequential_run(&chars) {
        warnings.push(Warning::SequentialPattern);
    }
    if has_repeated_run(&chars) {
        warnings.push(Warning::RepeatedPattern);
    }
    warnings
}

/// A run of `SEQUENTIAL_RUN` characters whose code points all step by +1,
/// or all by -1.
fn has_sequential_run(chars: &[char]) -> bool {
    if chars.len() < SEQUENTIAL_RUN {
        return false;
    }
    chars.windows(SEQUENTIAL_RUN).any(|window| {
        let ascending = window
            .windows(2)
            .all(|pair| pair[1] as u32 == pair[0] as u32 + 1);
        let descending = window
            .windows(2)
            .all(|pair| pair[0] as u32 == pair[1] as u32 + 1);
        ascending || descending
    })
}

/// A run of `REPEATED_RUN` identical characters.
fn has_repeated_run(chars: &[char]) -> bool {
    if chars.len() < REPEATED_RUN {
        return false;
    }
    chars
        .windows(REPEATED_RUN)
        .any(|window| window.iter().all(|&c| c == window[0]))
}
