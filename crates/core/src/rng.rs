//! RNG module - shape selection for newly spawned pieces
//!
//! Each spawn picks one of the seven templates uniformly at random. The
//! selector sits behind [`ShapeSource`] so tests can swap in a seeded
//! generator or a fixed script.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{PieceKind, SHAPE_COUNT};

/// Supplies the kind of the next spawned piece.
pub trait ShapeSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform random selection over the seven shapes.
#[derive(Debug, Clone)]
pub struct RandomSource<R = StdRng> {
    rng: R,
}

impl RandomSource<StdRng> {
    /// Deterministic source: the same seed yields the same shape sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource<R> {
    /// Wrap any `rand` generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ShapeSource for RandomSource<R> {
    fn next_kind(&mut self) -> PieceKind {
        let index = self.rng.gen_range(0..SHAPE_COUNT);
        PieceKind::ALL[index]
    }
}

/// Cycles through a fixed list of kinds. Handy for reproducing a scenario.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "scripted source needs at least one kind");
        Self { kinds, next: 0 }
    }
}

impl ShapeSource for ScriptedSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

impl<S: ShapeSource + ?Sized> ShapeSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}
