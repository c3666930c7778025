//! Requirement coverage signal - scores how much of the displayed
//! checklist the password satisfies.

use crate::types::RequirementResult;

/// Scores checklist coverage: +2 when every requirement is satisfied,
/// +1 when at least three quarters are, 0 otherwise.
///
/// An empty checklist has an undefined ratio and earns no bonus.
pub(crate) fn coverage_signal(results: &[RequirementResult]) -> u32 {
    let total = results.len();
    if total == 0 {
        return 0;
    }
    let satisfied = results.iter().filter(|r| r.satisfied).count();

    if satisfied == total {
        2
    } else if 4 * satisfied >= 3 * total {
        // satisfied / total >= 0.75, kept in integer arithmetic
        1
    } else {
        0
    }
}
