//! Randomness sources for rolling dice.
//!
//! ## Key Features
//!
//! - **Substitutable**: the engine only sees the `FaceSource` trait
//! - **Deterministic**: `GameRng` with the same seed produces identical rolls
//! - **Serializable**: O(1) state capture and restore via `GameRngState`
//! - **Loaded dice**: `LoadedDice` replays a fixed script of faces for tests
//!
//! ## Usage
//!
//! ```
//! use ship_captain_crew::core::{FaceSource, GameRng, LoadedDice};
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.next_face(6);
//! assert!((1..=6).contains(&face));
//!
//! let mut loaded = LoadedDice::new([6, 5, 4]);
//! assert_eq!(loaded.next_face(6), 6);
//! assert_eq!(loaded.next_face(6), 5);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of die faces.
///
/// Implementations must return a value in `1..=sides`.
pub trait FaceSource {
    /// Produce the next face for a die with `sides` faces.
    fn next_face(&mut self, sides: u8) -> u8;
}

impl<T: FaceSource + ?Sized> FaceSource for &mut T {
    fn next_face(&mut self, sides: u8) -> u8 {
        (**self).next_face(sides)
    }
}

impl<T: FaceSource + ?Sized> FaceSource for Box<T> {
    fn next_face(&mut self, sides: u8) -> u8 {
        (**self).next_face(sides)
    }
}

/// Seedable RNG for dice rolls.
///
/// Uses ChaCha8 for speed while keeping uniform, reproducible sequences.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl FaceSource for GameRng {
    fn next_face(&mut self, sides: u8) -> u8 {
        self.gen_range(1..=sides.max(1))
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Loaded dice: replays a fixed script of faces, cycling when exhausted.
///
/// Faces outside `1..=sides` are clamped into range so the die invariant
/// holds whatever the script says. An empty script always yields 1.
#[derive(Clone, Debug, Default)]
pub struct LoadedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl LoadedDice {
    /// Create loaded dice from a script of faces.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of faces handed out so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl FaceSource for LoadedDice {
    fn next_face(&mut self, sides: u8) -> u8 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face.clamp(1, sides.max(1))
    }
}
