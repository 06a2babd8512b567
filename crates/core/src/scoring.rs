//! Scoring module - line-clear rewards, level progression and the fall-speed curve
//!
//! Invoked once per lock with the number of rows the board just cleared:
//! - 1/2/3/4 lines award 100/300/500/800 points times the current level
//! - level is `total_lines / 10 + 1`
//! - fall interval is `max(100ms, 500ms - (level - 1) * 50ms)`

use crate::types::Rules;

/// Score calculation result for one lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub lines_cleared: u32,
    /// Points added by this lock.
    pub score_delta: u32,
    /// Whether this lock moved the session to a higher level.
    pub leveled_up: bool,
}

/// Score, level and fall speed of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
}

impl Progress {
    /// Fresh progress: no score, level 1, base fall interval.
    pub fn new(rules: &Rules) -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: rules.fall_interval_ms(1),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Apply one lock's line clear.
    ///
    /// The reward uses the level in effect before the clear; level and fall
    /// interval are then recomputed from the new line total.
    pub fn apply_clear(&mut self, lines_cleared: usize, rules: &Rules) -> ScoreResult {
        let score_delta = calculate_line_score(lines_cleared, self.level, rules);
        self.score = self.score.saturating_add(score_delta);
        self.lines = self.lines.saturating_add(lines_cleared as u32);

        let previous_level = self.level;
        self.level = calculate_level(self.lines, rules);
        self.fall_interval_ms = fall_interval_ms(self.level, rules);

        ScoreResult {
            lines_cleared: lines_cleared as u32,
            score_delta,
            leveled_up: self.level > previous_level,
        }
    }
}

/// Calculate line clear score
/// lines: number of lines cleared in one lock
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32, rules: &Rules) -> u32 {
    rules.line_clear_score(lines, level)
}

/// Level management
/// Level increases every `lines_per_level` lines cleared, starting at 1
pub fn calculate_level(total_lines: u32, rules: &Rules) -> u32 {
    rules.level_for_lines(total_lines)
}

/// Get fall interval for a level (in milliseconds), clamped at the rules' floor
pub fn fall_interval_ms(level: u32, rules: &Rules) -> u32 {
    rules.fall_interval_ms(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_scale_with_level() {
        let rules = Rules::default();
        assert_eq!(calculate_line_score(0, 1, &rules), 0);
        assert_eq!(calculate_line_score(1, 1, &rules), 100);
        assert_eq!(calculate_line_score(2, 1, &rules), 300);
        assert_eq!(calculate_line_score(3, 1, &rules), 500);
        assert_eq!(calculate_line_score(4, 1, &rules), 800);

        assert_eq!(calculate_line_score(1, 3, &rules), 300);
        assert_eq!(calculate_line_score(4, 7, &rules), 5600);
    }

    #[test]
    fn test_counts_outside_table_score_zero() {
        let rules = Rules::default();
        assert_eq!(calculate_line_score(5, 2, &rules), 0);
    }

    #[test]
    fn test_level_calculation() {
        let rules = Rules::default();
        assert_eq!(calculate_level(0, &rules), 1);
        assert_eq!(calculate_level(9, &rules), 1);
        assert_eq!(calculate_level(10, &rules), 2);
        assert_eq!(calculate_level(29, &rules), 3);
        assert_eq!(calculate_level(100, &rules), 11);
    }

    #[test]
    fn test_fall_intervals() {
        let rules = Rules::default();
        assert_eq!(fall_interval_ms(1, &rules), 500);
        assert_eq!(fall_interval_ms(5, &rules), 300);
        assert_eq!(fall_interval_ms(9, &rules), 100);
        assert_eq!(fall_interval_ms(20, &rules), 100);
    }

    #[test]
    fn test_progress_uses_level_before_clear() {
        let rules = Rules::default();
        let mut progress = Progress::new(&rules);

        // 9 singles at level 1.
        for _ in 0..9 {
            progress.apply_clear(1, &rules);
        }
        assert_eq!(progress.score(), 900);
        assert_eq!(progress.level(), 1);

        // A four-line clear crossing 10 lines still pays at level 1.
        let result = progress.apply_clear(4, &rules);
        assert_eq!(result.score_delta, 800);
        assert!(result.leveled_up);
        assert_eq!(progress.score(), 1700);
        assert_eq!(progress.lines(), 13);
        assert_eq!(progress.level(), 2);
        assert_eq!(progress.fall_interval_ms(), 450);

        let result = progress.apply_clear(2, &rules);
        assert_eq!(result.score_delta, 600);
        assert!(!result.leveled_up);
    }

    #[test]
    fn test_zero_line_lock_changes_nothing() {
        let rules = Rules::default();
        let mut progress = Progress::new(&rules);
        let before = progress;
        let result = progress.apply_clear(0, &rules);
        assert_eq!(result, ScoreResult::default());
        assert_eq!(progress, before);
    }
}
