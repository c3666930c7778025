//! Password strength meter core
//!
//! This library provides the evaluation engine behind a password
//! strength meter UI: a requirement checklist, a four-level rule-based
//! strength score, and a display configuration (label, color, progress)
//! with field-by-field override merging.
//!
//! The scorer is a deterministic heuristic for real-time feedback, not
//! a cryptographic strength estimator: no entropy modeling, no
//! dictionary checks.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, StrengthLevel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password, None, None);
//!
//! assert_eq!(evaluation.level, StrengthLevel::Strong);
//! println!("{} ({}/4 bars)", evaluation.display.label, evaluation.display.progress);
//! for row in &evaluation.requirements {
//!     println!("[{}] {}", if row.satisfied { "x" } else { " " }, row.description);
//! }
//! ```

// Internal modules
mod config;
mod evaluator;
mod requirements;
mod signals;
mod types;

// Public API
pub use config::{resolve_strength_config, DANGER_COLOR, SUCCESS_COLOR, WARNING_COLOR};
pub use evaluator::{evaluate_password_strength, score_strength};
pub use requirements::{default_requirements, evaluate_requirements};
pub use types::{
    PartialStrengthConfig, Requirement, RequirementResult, StrengthConfig,
    StrengthConfigOverrides, StrengthConfigTable, StrengthEvaluation, StrengthLevel,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
