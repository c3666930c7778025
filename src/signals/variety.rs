//! Character variety signal - one point per ASCII character class present.
//!
//! The class helpers here also back the default requirement set, so the
//! checklist and the variety score can never disagree on what a class
//! means.

pub(crate) fn has_ascii_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_ascii_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_ascii_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Anything outside `[A-Za-z0-9]` counts as special, including
/// non-ASCII letters. The letter and digit classes are ASCII-only.
pub(crate) fn has_special(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Scores character variety: +1 for each of lowercase, uppercase,
/// digit, and special.
pub(crate) fn variety_signal(password: &str) -> u32 {
    [
        has_ascii_lowercase(password),
        has_ascii_uppercase(password),
        has_ascii_digit(password),
        has_special(password),
    ]
    .iter()
    .filter(|&&present| present)
    .count() as u32
}
