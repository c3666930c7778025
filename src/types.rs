//! Value types shared across the meter: strength levels, requirements,
//! checklist results, and display configuration tables.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// Categorical password strength, ordered `Weak < Fair < Good < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// All levels, weakest first.
    pub const ALL: [StrengthLevel; 4] = [
        StrengthLevel::Weak,
        StrengthLevel::Fair,
        StrengthLevel::Good,
        StrengthLevel::Strong,
    ];

    /// Lowercase name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Fair => "fair",
            StrengthLevel::Good => "good",
            StrengthLevel::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named boolean predicate over a password, used for the checklist
/// display and (by default) for strength scoring.
///
/// Predicates receive the exposed password as `&str` and must be pure
/// and total over all string inputs, including the empty string. A
/// predicate that panics propagates unmodified to the caller.
#[derive(Clone)]
pub struct Requirement {
    description: String,
    predicate: Arc<dyn Fn(&str) -> bool + Send + Sync>,
}

impl Requirement {
    /// Creates a requirement from a display description and a predicate.
    pub fn new<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// The display text for this requirement.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Runs the predicate against the given password.
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        (self.predicate)(password)
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The predicate is opaque; never format anything password-derived.
        f.debug_struct("Requirement")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// One checklist row: whether a requirement was satisfied, plus its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementResult {
    pub satisfied: bool,
    pub description: String,
}

/// Display metadata for one strength level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthConfig {
    /// Color for the indicator bars and the label text.
    pub color: String,
    /// Label shown next to the indicator.
    pub label: String,
    /// How many of the 4 indicator bars to fill. Nominally in `0..=4`;
    /// not validated, out-of-range values pass through verbatim.
    pub progress: u8,
}

/// Fully-populated display configuration: one [`StrengthConfig`] per level.
///
/// Always has all four levels with all three fields set; the resolver
/// backfills any field an override leaves out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthConfigTable {
    pub weak: StrengthConfig,
    pub fair: StrengthConfig,
    pub good: StrengthConfig,
    pub strong: StrengthConfig,
}

impl StrengthConfigTable {
    /// Returns the entry for the given level.
    pub fn get(&self, level: StrengthLevel) -> &StrengthConfig {
        match level {
            StrengthLevel::Weak => &self.weak,
            StrengthLevel::Fair => &self.fair,
            StrengthLevel::Good => &self.good,
            StrengthLevel::Strong => &self.strong,
        }
    }
}

impl Index<StrengthLevel> for StrengthConfigTable {
    type Output = StrengthConfig;

    fn index(&self, level: StrengthLevel) -> &Self::Output {
        self.get(level)
    }
}

/// Per-level override; `None` fields keep the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialStrengthConfig {
    pub color: Option<String>,
    pub label: Option<String>,
    pub progress: Option<u8>,
}

/// Caller-supplied overrides for the display configuration, merged
/// field-by-field over the defaults by
/// [`resolve_strength_config`](crate::resolve_strength_config).
///
/// A level left at its all-`None` default is copied from the built-in
/// table unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrengthConfigOverrides {
    pub weak: PartialStrengthConfig,
    pub fair: PartialStrengthConfig,
    pub good: PartialStrengthConfig,
    pub strong: PartialStrengthConfig,
}

/// Aggregate result of one evaluation pass: the checklist, the level,
/// and the resolved display entry for that level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEvaluation {
    /// Checklist results, in requirement-set order.
    pub requirements: Vec<RequirementResult>,
    /// Derived strength level.
    pub level: StrengthLevel,
    /// Resolved display entry for `level`.
    pub display: StrengthConfig,
}
