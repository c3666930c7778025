//! Strength scorer and aggregate evaluation - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::resolve_strength_config;
use crate::requirements::evaluate_requirements;
use crate::signals::{coverage_signal, length_signal, variety_signal};
use crate::types::{
    Requirement, RequirementResult, StrengthConfigOverrides, StrengthEvaluation, StrengthLevel,
};

/// Debounce delay for the async adapter.
#[cfg(feature = "async")]
const DEBOUNCE_DELAY_MS: u64 = 300;

/// Derives the strength level from a password and its already-computed
/// checklist. The empty password is `Weak` unconditionally.
fn level_from_checklist(pwd: &str, checklist: &[RequirementResult]) -> StrengthLevel {
    if pwd.is_empty() {
        return StrengthLevel::Weak;
    }

    let score = length_signal(pwd) + variety_signal(pwd) + coverage_signal(checklist);

    match score {
        0..=2 => StrengthLevel::Weak,
        3..=4 => StrengthLevel::Fair,
        5 => StrengthLevel::Good,
        _ => StrengthLevel::Strong,
    }
}

/// Scores a password against a requirement set and returns its level.
///
/// With `None` the built-in set is used. The coverage bonus is computed
/// over the same set the checklist displays, so with the default pairing
/// the numeric strength and the visible checklist never contradict each
/// other. A wholly custom set (say, pure length rules) can diverge from
/// the fixed character-class signals; that trade-off is inherent to the
/// heuristic and intentionally left alone.
///
/// The empty password is `Weak` immediately; no predicate runs in that
/// case.
///
/// ```
/// use pwd_meter::{score_strength, StrengthLevel};
/// use secrecy::SecretString;
///
/// let pwd = SecretString::new("Abcdefghij1!".to_string().into());
/// assert_eq!(score_strength(&pwd, None), StrengthLevel::Strong);
/// ```
pub fn score_strength(
    password: &SecretString,
    requirements: Option<&[Requirement]>,
) -> StrengthLevel {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthLevel::Weak;
    }
    let checklist = evaluate_requirements(password, requirements);
    level_from_checklist(pwd, &checklist)
}

/// Evaluates everything the meter displays in one pass: the checklist,
/// the strength level, and the resolved display entry for that level.
///
/// Each predicate runs exactly once; the checklist results feed the
/// coverage signal rather than being recomputed.
///
/// ```
/// use pwd_meter::{evaluate_password_strength, StrengthLevel};
/// use secrecy::SecretString;
///
/// let pwd = SecretString::new("Abcdefghij1!".to_string().into());
/// let evaluation = evaluate_password_strength(&pwd, None, None);
///
/// assert_eq!(evaluation.level, StrengthLevel::Strong);
/// assert_eq!(evaluation.display.label, "Strong Password");
/// assert!(evaluation.requirements.iter().all(|row| row.satisfied));
/// ```
pub fn evaluate_password_strength(
    password: &SecretString,
    requirements: Option<&[Requirement]>,
    overrides: Option<&StrengthConfigOverrides>,
) -> StrengthEvaluation {
    let checklist = evaluate_requirements(password, requirements);
    let level = level_from_checklist(password.expose_secret(), &checklist);
    let table = resolve_strength_config(overrides);

    #[cfg(feature = "tracing")]
    tracing::debug!(level = %level, "password evaluated");

    StrengthEvaluation {
        display: table[level].clone(),
        requirements: checklist,
        level,
    }
}

/// Async version that debounces, then sends the evaluation via channel.
///
/// Sleeps a 300 ms debounce first; if the token was cancelled in the
/// meantime (a newer keystroke superseded this evaluation) nothing is
/// sent. The evaluation itself stays synchronous and pure.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    requirements: Option<&[Requirement]>,
    overrides: Option<&StrengthConfigOverrides>,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthEvaluation>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(DEBOUNCE_DELAY_MS)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation superseded, dropping");
        return;
    }

    let evaluation = evaluate_password_strength(password, requirements, overrides);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
