//! A single die: face value, hold flag, and a stable label.

use serde::{Deserialize, Serialize};

use super::rng::FaceSource;

/// Number of faces on a standard die.
pub const DEFAULT_SIDES: u8 = 6;

/// Stable die label assigned at construction.
///
/// Labels are 1-based positions: the first die is `DieLabel(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DieLabel(pub u8);

impl DieLabel {
    /// Create a new die label.
    #[must_use]
    pub const fn new(label: u8) -> Self {
        Self(label)
    }

    /// Get the raw label value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for DieLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A die with `sides` faces.
///
/// The face value is always within `1..=sides`. A held die keeps its face
/// across rolls until it is released.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    label: DieLabel,
    sides: u8,
    face_value: u8,
    held: bool,
}

impl Die {
    /// Create an unheld die showing a face drawn from `source`.
    pub fn new(label: DieLabel, sides: u8, source: &mut impl FaceSource) -> Self {
        let sides = sides.max(1);
        Self {
            label,
            sides,
            face_value: source.next_face(sides).clamp(1, sides),
            held: false,
        }
    }

    /// Roll the die. Held dice keep their face.
    pub fn roll(&mut self, source: &mut impl FaceSource) {
        if !self.held {
            self.face_value = source.next_face(self.sides).clamp(1, self.sides);
        }
    }

    /// Hold the die. Idempotent.
    pub fn hold(&mut self) {
        self.held = true;
    }

    /// Release a held die.
    pub fn release(&mut self) {
        self.held = false;
    }

    /// Reset for a new turn. The face value is left as-is.
    pub fn reset(&mut self) {
        self.release();
    }

    #[must_use]
    pub fn face_value(&self) -> u8 {
        self.face_value
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    #[must_use]
    pub fn label(&self) -> DieLabel {
        self.label
    }

    #[must_use]
    pub fn sides(&self) -> u8 {
        self.sides
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}: {}]", self.label, self.face_value)?;
        if self.held {
            write!(f, "*")?;
        }
        Ok(())
    }
}
