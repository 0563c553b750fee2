//! Scoring module - classic line-clear scoring, leveling and gravity
//!
//! - Line clears score from [`LINE_SCORES`] scaled by `level + 1`.
//! - A level is gained every [`LINES_PER_LEVEL`] lines.
//! - Gravity is linear in the level with a floor.

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_DROP_MS};

/// Calculate line clear score
/// lines: number of lines cleared at once (0-4)
/// level: level before the clear (0-based)
///
/// More than four lines cannot be cleared by a single piece and scores 0.
pub fn calculate_score(lines: u32, level: u32) -> u32 {
    let base = LINE_SCORES.get(lines as usize).copied().unwrap_or(0);
    base.saturating_mul(level.saturating_add(1))
}

/// Level management
/// Level increases every 10 lines cleared
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Get drop interval for a level (in milliseconds)
pub fn drop_speed_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_mul(DROP_STEP_MS))
        .max(MIN_DROP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_line_scores() {
        // Level 0
        assert_eq!(calculate_score(0, 0), 0);
        assert_eq!(calculate_score(1, 0), 40);
        assert_eq!(calculate_score(2, 0), 100);
        assert_eq!(calculate_score(3, 0), 300);
        assert_eq!(calculate_score(4, 0), 1200);

        // Level 1 and 5
        assert_eq!(calculate_score(1, 1), 80);
        assert_eq!(calculate_score(1, 5), 40 * 6);
        assert_eq!(calculate_score(4, 5), 1200 * 6);
    }

    #[test]
    fn test_no_lines_never_scores() {
        for level in [0, 1, 7, 100, u32::MAX] {
            assert_eq!(calculate_score(0, level), 0);
        }
    }

    #[test]
    fn test_out_of_contract_line_count() {
        assert_eq!(calculate_score(5, 0), 0);
        assert_eq!(calculate_score(20, 3), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 0);
        assert_eq!(calculate_level(9), 0);
        assert_eq!(calculate_level(10), 1);
        assert_eq!(calculate_level(25), 2);
        assert_eq!(calculate_level(100), 10);
    }

    #[test]
    fn test_drop_speed() {
        assert_eq!(drop_speed_ms(0), 500);
        assert_eq!(drop_speed_ms(1), 450);
        assert_eq!(drop_speed_ms(8), 100);
        assert_eq!(drop_speed_ms(9), 50);
        assert_eq!(drop_speed_ms(20), 50); // Floor at 50
        assert_eq!(drop_speed_ms(u32::MAX), 50);
    }
}
