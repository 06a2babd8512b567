//! Session module - the game loop state machine
//!
//! A [`Session`] owns the board, the falling piece and the scoring state. The
//! shell feeds it elapsed time through [`Session::tick`] and discrete commands
//! through [`Session::apply_action`]; everything else is derived.
//!
//! Every state change is proposed first and validated against the collision
//! rule. A rejected proposal restores the exact previous piece and reports
//! `false`; nothing is ever signalled as an error.
//!
//! ```text
//! Falling --gravity blocked--> lock + clear + spawn --ok--> Falling
//!                                                  \--blocked--> GameOver
//! Falling <--pause--> Paused
//! any --restart--> Falling        any --quit--> Quit
//! ```

use std::time::Duration;

use log::{debug, info, trace};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{RandomSource, ShapeSource};
use crate::scoring::Progress;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Rules};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Normal play: gravity runs and inputs are accepted.
    Falling,
    /// Time is frozen and piece inputs are ignored.
    Paused,
    /// A fresh piece collided at spawn. Only restart and quit are accepted.
    GameOver,
    /// The shell asked to stop.
    Quit,
}

/// What a call to [`Session::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not enough time has accumulated, or the session is not falling.
    Idle,
    /// The piece descended one row.
    Fell,
    /// The piece locked and a new piece spawned.
    Locked { lines_cleared: u32, score_delta: u32 },
    /// The piece locked and the next piece could not spawn.
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<S = RandomSource> {
    rules: Rules,
    source: S,
    board: Board,
    active: Option<Piece>,
    progress: Progress,
    /// Milliseconds since the last automatic descent.
    fall_accumulator_ms: u32,
    phase: Phase,
}

impl<S: ShapeSource> Session<S> {
    /// Start a session on an empty board and spawn the first piece.
    pub fn new(rules: Rules, source: S) -> Self {
        Self::with_board(Board::new(), rules, source)
    }

    /// Start a session on a prepared board and spawn the first piece.
    ///
    /// If the first piece already collides, the session starts in
    /// [`Phase::GameOver`].
    pub fn with_board(board: Board, rules: Rules, source: S) -> Self {
        let mut session = Self {
            rules,
            source,
            board,
            active: None,
            progress: Progress::new(&rules),
            fall_accumulator_ms: 0,
            phase: Phase::Falling,
        };
        session.spawn_piece();
        session
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while the session still schedules ticks and inputs.
    pub fn running(&self) -> bool {
        matches!(self.phase, Phase::Falling | Phase::Paused)
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines()
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.progress.fall_interval_ms()
    }

    pub fn fall_interval(&self) -> Duration {
        Duration::from_millis(self.progress.fall_interval_ms() as u64)
    }

    pub fn fall_accumulator_ms(&self) -> u32 {
        self.fall_accumulator_ms
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active;
        out.score = self.progress.score();
        out.level = self.progress.level();
        out.lines = self.progress.lines();
        out.fall_interval_ms = self.progress.fall_interval_ms();
        out.paused = self.paused();
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a new piece and check it against the board.
    ///
    /// A blocked spawn ends the session without touching the board.
    fn spawn_piece(&mut self) -> bool {
        let piece = Piece::spawn(self.source.next_kind());

        if self.board.is_blocked(&piece.shape, piece.x, piece.y) {
            info!(
                "game over: {} blocked at spawn; score={} level={} lines={}",
                piece.kind.letter(),
                self.progress.score(),
                self.progress.level(),
                self.progress.lines()
            );
            self.active = None;
            self.phase = Phase::GameOver;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Advance the gravity clock by `elapsed_ms`.
    ///
    /// Once the accumulated time reaches the fall interval the piece tries to
    /// descend one row. A blocked descent locks the piece, clears full rows,
    /// updates score and level, and spawns the next piece. The accumulator is
    /// reset after every triggered descent, whichever branch it takes.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickOutcome {
        if self.phase != Phase::Falling {
            return TickOutcome::Idle;
        }

        self.fall_accumulator_ms = self.fall_accumulator_ms.saturating_add(elapsed_ms);
        if self.fall_accumulator_ms < self.progress.fall_interval_ms() {
            return TickOutcome::Idle;
        }
        self.fall_accumulator_ms = 0;

        if self.try_move(0, 1) {
            return TickOutcome::Fell;
        }
        self.lock_piece()
    }

    /// Lock the active piece onto the board and handle line clears
    fn lock_piece(&mut self) -> TickOutcome {
        let Some(piece) = self.active.take() else {
            return TickOutcome::Idle;
        };

        self.board.lock(&piece.shape, piece.x, piece.y, piece.color);
        let lines_cleared = self.board.clear_full_lines();
        let result = self.progress.apply_clear(lines_cleared, &self.rules);

        debug!(
            "locked {} at ({}, {}): lines={} delta={} score={}",
            piece.kind.letter(),
            piece.x,
            piece.y,
            result.lines_cleared,
            result.score_delta,
            self.progress.score()
        );
        if result.leveled_up {
            info!(
                "level {} reached; fall interval {}ms",
                self.progress.level(),
                self.progress.fall_interval_ms()
            );
        }

        if !self.spawn_piece() {
            return TickOutcome::GameOver;
        }

        TickOutcome::Locked {
            lines_cleared: result.lines_cleared,
            score_delta: result.score_delta,
        }
    }

    /// Try to move the active piece; restore the previous origin when blocked.
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let prior = *piece;
        piece.translate(dx, dy);
        if self.board.is_blocked(&piece.shape, piece.x, piece.y) {
            *piece = prior;
            trace!("move ({}, {}) rejected at ({}, {})", dx, dy, prior.x, prior.y);
            return false;
        }

        true
    }

    /// Try to rotate the active piece clockwise in place; restore the previous
    /// shape when blocked.
    fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let prior = piece.shape;
        piece.shape = piece.rotated_cw();
        if self.board.is_blocked(&piece.shape, piece.x, piece.y) {
            piece.shape = prior;
            trace!("rotation rejected at ({}, {})", piece.x, piece.y);
            return false;
        }

        true
    }

    /// Replace board, piece and scoring state with a fresh session.
    fn restart(&mut self) {
        info!(
            "restart after score={} level={} lines={}",
            self.progress.score(),
            self.progress.level(),
            self.progress.lines()
        );
        self.board.clear();
        self.progress = Progress::new(&self.rules);
        self.fall_accumulator_ms = 0;
        self.phase = Phase::Falling;
        self.spawn_piece();
    }

    /// Apply a game action. Returns whether it was accepted.
    ///
    /// Soft drop never locks: a blocked soft drop simply reverts, and only the
    /// gravity tick locks a piece.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Quit => {
                self.phase = Phase::Quit;
                true
            }
            GameAction::Restart => {
                if self.phase == Phase::Quit {
                    return false;
                }
                self.restart();
                true
            }
            GameAction::Pause => {
                self.phase = match self.phase {
                    Phase::Falling => Phase::Paused,
                    Phase::Paused => Phase::Falling,
                    _ => return false,
                };
                true
            }
            _ if self.phase != Phase::Falling => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::RotateCw => self.try_rotate(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Rules::default(), RandomSource::seeded(1))
    }
}
