//! Requirement sets and checklist evaluation.

use std::sync::LazyLock;

use secrecy::{ExposeSecret, SecretString};

use crate::signals::{has_ascii_digit, has_ascii_lowercase, has_ascii_uppercase, has_special};
use crate::types::{Requirement, RequirementResult};

static DEFAULT_REQUIREMENTS: LazyLock<[Requirement; 4]> = LazyLock::new(|| {
    [
        Requirement::new(
            "At least one special character (!, @, #, etc.)",
            has_special,
        ),
        Requirement::new("At least one uppercase letter (A-Z)", has_ascii_uppercase),
        Requirement::new("At least one lowercase letter (a-z)", has_ascii_lowercase),
        Requirement::new("At least one number (0-9)", has_ascii_digit),
    ]
});

/// Returns the built-in requirement set, in display order: special
/// character, uppercase, lowercase, digit.
///
/// The set is frozen; callers extend it by cloning into a `Vec` and
/// pushing their own entries:
///
/// ```
/// use pwd_meter::{default_requirements, Requirement};
///
/// let mut requirements = default_requirements().to_vec();
/// requirements.push(Requirement::new("At least 10 characters", |pwd| {
///     pwd.chars().count() >= 10
/// }));
/// assert_eq!(requirements.len(), 5);
/// ```
pub fn default_requirements() -> &'static [Requirement] {
    &*DEFAULT_REQUIREMENTS
}

/// Evaluates each requirement against the password and returns one
/// checklist row per requirement, in input order.
///
/// With `None` the built-in set from [`default_requirements`] is used.
/// Each predicate runs exactly once and receives only the exposed
/// password. An empty set produces an empty checklist.
///
/// ```
/// use pwd_meter::evaluate_requirements;
/// use secrecy::SecretString;
///
/// let pwd = SecretString::new("Abc123!".to_string().into());
/// let checklist = evaluate_requirements(&pwd, None);
/// assert_eq!(checklist.len(), 4);
/// assert!(checklist.iter().all(|row| row.satisfied));
/// ```
pub fn evaluate_requirements(
    password: &SecretString,
    requirements: Option<&[Requirement]>,
) -> Vec<RequirementResult> {
    let pwd = password.expose_secret();
    requirements
        .unwrap_or_else(|| default_requirements())
        .iter()
        .map(|req| RequirementResult {
            satisfied: req.is_satisfied_by(pwd),
            description: req.description().to_string(),
        })
        .collect()
}
