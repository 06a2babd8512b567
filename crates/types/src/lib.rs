//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! by the simulation core, the terminal view and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Rules
//!
//! Timing and scoring parameters live in [`Rules`]. The defaults are the
//! classic values:
//!
//! | Field | Default | Description |
//! |-------|---------|-------------|
//! | `base_fall_ms` | 500 | Fall interval at level 1 |
//! | `min_fall_ms` | 100 | Fall interval floor |
//! | `fall_step_ms` | 50 | Speed-up per level |
//! | `lines_per_level` | 10 | Cleared lines needed per level |
//! | `line_scores` | `[0, 100, 300, 500, 800]` | Points per clear, times level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, GameAction, PieceKind, Rules, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(1), Some(PieceKind::O));
//! assert_eq!(PieceKind::O.color(), Color::Yellow);
//!
//! assert_eq!(GameAction::RotateCw.as_str(), "rotateCw");
//!
//! assert_eq!(Rules::default().fall_interval_ms(1), 500);
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of distinct shape templates
pub const SHAPE_COUNT: usize = 7;

/// Default frame period of the terminal shell in milliseconds (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// The seven shape kinds, in template index order.
///
/// The index order matters: the random shape selector draws an index in
/// `[0, 7)` and maps it through [`PieceKind::from_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in template index order.
    pub const ALL: [PieceKind; SHAPE_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Map a template index in `[0, 7)` to its kind.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Template index of this kind.
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Color paired with this kind's template.
    ///
    /// L and Z used to share blue; Z is orange here so the two stay apart.
    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Magenta,
            PieceKind::L => Color::Blue,
            PieceKind::J => Color::Red,
            PieceKind::S => Color::Green,
            PieceKind::Z => Color::Orange,
        }
    }

    /// Single uppercase letter, used in log records.
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Color tag of a locked cell or a falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Magenta,
    Blue,
    Red,
    Green,
    Orange,
}

impl Color {
    /// 24-bit RGB value used by renderers.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Cyan => (0, 255, 255),
            Color::Yellow => (255, 255, 0),
            Color::Magenta => (255, 0, 255),
            Color::Blue => (0, 0, 255),
            Color::Red => (255, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Orange => (255, 165, 0),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Occupied cell with its color
///
/// Occupancy and color live in one value, so a cell can never be occupied
/// without a color or colored without being occupied.
pub type Cell = Option<Color>;

/// Discrete commands delivered by the shell to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; never locks on its own
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Toggle pause state
    Pause,
    /// Start a fresh session (also accepted after game over)
    Restart,
    /// Stop the session for good
    Quit,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

/// Timing and scoring parameters of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Fall interval at level 1, in milliseconds per row.
    pub base_fall_ms: u32,
    /// Fall interval floor, in milliseconds per row.
    pub min_fall_ms: u32,
    /// Fall interval decrease per level, in milliseconds.
    pub fall_step_ms: u32,
    /// Cleared lines needed to advance one level.
    pub lines_per_level: u32,
    /// Base points indexed by lines cleared in one lock (0..=4); multiplied by level.
    pub line_scores: [u32; 5],
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            base_fall_ms: 500,
            min_fall_ms: 100,
            fall_step_ms: 50,
            lines_per_level: 10,
            line_scores: [0, 100, 300, 500, 800],
        }
    }
}

impl Rules {
    /// Level (1-based) reached after `total_lines` cleared lines.
    pub fn level_for_lines(&self, total_lines: u32) -> u32 {
        total_lines / self.lines_per_level.max(1) + 1
    }

    /// Fall interval for `level`: linear speed-up floored at `min_fall_ms`.
    pub fn fall_interval_ms(&self, level: u32) -> u32 {
        let speed_up = level.saturating_sub(1).saturating_mul(self.fall_step_ms);
        self.base_fall_ms
            .saturating_sub(speed_up)
            .max(self.min_fall_ms)
    }

    /// Points for clearing `lines` rows at `level`; 0 for counts outside the table.
    pub fn line_clear_score(&self, lines: usize, level: u32) -> u32 {
        self.line_scores
            .get(lines)
            .copied()
            .unwrap_or(0)
            .saturating_mul(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_match_classic_constants() {
        let rules = Rules::default();
        assert_eq!(rules.base_fall_ms, 500);
        assert_eq!(rules.min_fall_ms, 100);
        assert_eq!(rules.fall_step_ms, 50);
        assert_eq!(rules.lines_per_level, 10);
        assert_eq!(rules.line_scores, [0, 100, 300, 500, 800]);
    }

    #[test]
    fn fall_interval_reaches_floor_at_level_nine() {
        let rules = Rules::default();
        assert_eq!(rules.fall_interval_ms(1), 500);
        assert_eq!(rules.fall_interval_ms(2), 450);
        assert_eq!(rules.fall_interval_ms(8), 150);
        assert_eq!(rules.fall_interval_ms(9), 100);
        assert_eq!(rules.fall_interval_ms(50), 100);
    }

    #[test]
    fn level_is_one_based() {
        let rules = Rules::default();
        assert_eq!(rules.level_for_lines(0), 1);
        assert_eq!(rules.level_for_lines(9), 1);
        assert_eq!(rules.level_for_lines(10), 2);
        assert_eq!(rules.level_for_lines(35), 4);
    }

    #[test]
    fn kind_index_roundtrips_through_table() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i), Some(*kind));
        }
        assert_eq!(PieceKind::from_index(SHAPE_COUNT), None);
    }

    #[test]
    fn l_and_z_have_distinct_colors() {
        assert_ne!(PieceKind::L.color(), PieceKind::Z.color());
    }

    #[test]
    fn action_names_are_camel_case() {
        assert_eq!(GameAction::MoveLeft.as_str(), "moveLeft");
        assert_eq!(GameAction::SoftDrop.as_str(), "softDrop");
        assert_eq!(GameAction::Quit.as_str(), "quit");
    }
}
