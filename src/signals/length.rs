//! Length signal - scores password length against two thresholds.

/// Passwords at least this long earn the first length point.
const LONG: usize = 8;

/// Passwords at least this long earn a second, cumulative point.
const EXTRA_LONG: usize = 12;

/// Scores password length: +1 at 8 characters, +1 more at 12.
///
/// Length is counted in Unicode scalar values, not bytes, so a
/// multi-byte character contributes one toward the thresholds.
pub(crate) fn length_signal(password: &str) -> u32 {
    let len = password.chars().count();
    let mut score = 0;
    if len >= LONG {
        score += 1;
    }
    if len >= EXTRA_LONG {
        score += 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_signal_short() {
        assert_eq!(length_signal("abc"), 0);
        assert_eq!(length_signal("1234567"), 0);
    }

    #[test]
    fn test_length_signal_exactly_eight() {
        assert_eq!(length_signal("12345678"), 1);
    }

    #[test]
    fn test_length_signal_twelve_is_cumulative() {
        assert_eq!(length_signal("123456789012"), 2);
        assert_eq!(length_signal("12345678901"), 1);
    }

    #[test]
    fn test_length_signal_counts_chars_not_bytes() {
        // 8 characters, more than 8 bytes
        assert_eq!(length_signal("pässwörd"), 1);
        // 4 characters, 16 bytes
        assert_eq!(length_signal("🔒🔒🔒🔒"), 0);
    }

    #[test]
    fn test_length_signal_empty() {
        assert_eq!(length_signal(""), 0);
    }
}
