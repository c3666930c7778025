//! Display configuration: default table, palette, and override merging.

use crate::types::{PartialStrengthConfig, StrengthConfig, StrengthConfigOverrides, StrengthConfigTable};

/// Palette used by the default table. Exported so callers building
/// custom tables can reuse the stock colors.
pub const DANGER_COLOR: &str = "#EF4444";
pub const WARNING_COLOR: &str = "#FBBF24";
pub const SUCCESS_COLOR: &str = "#22C55E";

impl Default for StrengthConfigTable {
    /// The built-in table: weak/danger/1, fair/warning/2, good/warning/3,
    /// strong/success/4.
    fn default() -> Self {
        Self {
            weak: StrengthConfig {
                color: DANGER_COLOR.to_string(),
                label: "Weak Password".to_string(),
                progress: 1,
            },
            fair: StrengthConfig {
                color: WARNING_COLOR.to_string(),
                label: "Fair Password".to_string(),
                progress: 2,
            },
            good: StrengthConfig {
                color: WARNING_COLOR.to_string(),
                label: "Good Password".to_string(),
                progress: 3,
            },
            strong: StrengthConfig {
                color: SUCCESS_COLOR.to_string(),
                label: "Strong Password".to_string(),
                progress: 4,
            },
        }
    }
}

/// Resolves the display configuration, merging overrides field-by-field
/// over the built-in defaults.
///
/// A `Some` override field replaces the default for that level; a `None`
/// field keeps it. Override values are not validated; an out-of-range
/// `progress` passes through verbatim. The result always has all four
/// levels fully populated.
///
/// ```
/// use pwd_meter::{resolve_strength_config, StrengthConfigOverrides};
///
/// let mut overrides = StrengthConfigOverrides::default();
/// overrides.weak.label = Some("Too weak".to_string());
///
/// let table = resolve_strength_config(Some(&overrides));
/// assert_eq!(table.weak.label, "Too weak");
/// assert_eq!(table.weak.progress, 1);
/// ```
pub fn resolve_strength_config(
    overrides: Option<&StrengthConfigOverrides>,
) -> StrengthConfigTable {
    let defaults = StrengthConfigTable::default();
    let Some(overrides) = overrides else {
        return defaults;
    };

    StrengthConfigTable {
        weak: merge_entry(defaults.weak, &overrides.weak),
        fair: merge_entry(defaults.fair, &overrides.fair),
        good: merge_entry(defaults.good, &overrides.good),
        strong: merge_entry(defaults.strong, &overrides.strong),
    }
}

/// Explicit per-field merge, kept free of any reflection-like tricks so
/// the fallback behavior stays auditable.
fn merge_entry(default: StrengthConfig, overrides: &PartialStrengthConfig) -> StrengthConfig {
    StrengthConfig {
        color: overrides.color.clone().unwrap_or(default.color),
        label: overrides.label.clone().unwrap_or(default.label),
        progress: overrides.progress.unwrap_or(default.progress),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StrengthLevel;

    #[test]
    fn test_resolve_no_overrides_is_default_table() {
        let table = resolve_strength_config(None);
        assert_eq!(table, StrengthConfigTable::default());

        assert_eq!(table.weak.color, DANGER_COLOR);
        assert_eq!(table.weak.label, "Weak Password");
        assert_eq!(table.weak.progress, 1);
        assert_eq!(table.fair.color, WARNING_COLOR);
        assert_eq!(table.fair.label, "Fair Password");
        assert_eq!(table.fair.progress, 2);
        assert_eq!(table.good.color, WARNING_COLOR);
        assert_eq!(table.good.label, "Good Password");
        assert_eq!(table.good.progress, 3);
        assert_eq!(table.strong.color, SUCCESS_COLOR);
        assert_eq!(table.strong.label, "Strong Password");
        assert_eq!(table.strong.progress, 4);
    }

    #[test]
    fn test_resolve_single_field_override() {
        let mut overrides = StrengthConfigOverrides::default();
        overrides.weak.label = Some("X".to_string());

        let table = resolve_strength_config(Some(&overrides));
        let defaults = StrengthConfigTable::default();

        assert_eq!(table.weak.label, "X");
        assert_eq!(table.weak.color, defaults.weak.color);
        assert_eq!(table.weak.progress, defaults.weak.progress);
        assert_eq!(table.fair, defaults.fair);
        assert_eq!(table.good, defaults.good);
        assert_eq!(table.strong, defaults.strong);
    }

    #[test]
    fn test_resolve_full_level_override() {
        let mut overrides = StrengthConfigOverrides::default();
        overrides.strong = crate::types::PartialStrengthConfig {
            color: Some("#000000".to_string()),
            label: Some("Fortress".to_string()),
            progress: Some(4),
        };

        let table = resolve_strength_config(Some(&overrides));
        assert_eq!(table.strong.color, "#000000");
        assert_eq!(table.strong.label, "Fortress");
        assert_eq!(table.strong.progress, 4);
    }

    #[test]
    fn test_resolve_out_of_range_progress_passes_through() {
        let mut overrides = StrengthConfigOverrides::default();
        overrides.fair.progress = Some(9);

        let table = resolve_strength_config(Some(&overrides));
        assert_eq!(table.fair.progress, 9);
    }

    #[test]
    fn test_resolve_all_none_overrides_is_default_table() {
        let overrides = StrengthConfigOverrides::default();
        let table = resolve_strength_config(Some(&overrides));
        assert_eq!(table, StrengthConfigTable::default());
    }

    #[test]
    fn test_table_index_by_level() {
        let table = StrengthConfigTable::default();
        assert_eq!(table[StrengthLevel::Weak].progress, 1);
        assert_eq!(table[StrengthLevel::Fair].progress, 2);
        assert_eq!(table[StrengthLevel::Good].progress, 3);
        assert_eq!(table[StrengthLevel::Strong].progress, 4);
        for level in StrengthLevel::ALL {
            assert_eq!(&table[level], table.get(level));
        }
    }
}
