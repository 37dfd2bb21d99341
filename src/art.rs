//! Progressive gallows art as a finite, restartable frame sequence.

use derive_more::{Display, Error};

/// Lowest accepted escalation level.
pub const MIN_LEVEL: i32 = 1;
/// Highest accepted escalation level.
pub const MAX_LEVEL: i32 = 6;

/// Gallows frames in escalation order. A renderer at level `L` serves the
/// first `L + 1` of these, one per wrong-guess count.
const FRAMES: [&str; 7] = [
    r#"
  +---+
  |   |
      |
      |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
      |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
  |   |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
 /|   |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
========="#,
    r#"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
========="#,
];

/// Failure modes of the frame cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ArtError {
    /// `next` was called after the sequence was drained.
    #[display("no more frames in the art sequence")]
    Exhausted,
    /// `current` was called before the first `next` or after exhaustion.
    #[display("frame cursor out of range")]
    OutOfBounds,
}

/// Bounded cursor over the gallows frames for one round.
///
/// Construction accepts levels in `[MIN_LEVEL, MAX_LEVEL]`; anything
/// outside that range falls back to the minimum level. The resulting
/// sequence holds exactly `level + 1` frames. The cursor starts before the
/// first frame, so `current` is an error until the first `next`.
#[derive(Debug, Clone)]
pub struct ArtRenderer {
    frames: &'static [&'static str],
    cursor: isize,
}

impl ArtRenderer {
    /// Creates a renderer for the given escalation level. Any level
    /// outside `[MIN_LEVEL, MAX_LEVEL]` falls back to the minimum, so a
    /// bad level still yields a two-frame sequence.
    pub fn new(level: i32) -> Self {
        let level = if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            level as usize
        } else {
            MIN_LEVEL as usize
        };
        Self {
            frames: &FRAMES[..=level],
            cursor: -1,
        }
    }

    /// True while the cursor has not drained the sequence.
    pub fn has_next(&self) -> bool {
        self.cursor.saturating_add(1) < self.frames.len() as isize
    }

    /// Advances the cursor and returns the frame it lands on.
    ///
    /// # Errors
    ///
    /// [`ArtError::Exhausted`] once all frames have been produced. The
    /// cursor still moves past the end, so a subsequent `current` is out of
    /// range as well.
    pub fn next(&mut self) -> Result<&'static str, ArtError> {
        self.cursor = self.cursor.saturating_add(1);
        self.frame_at(self.cursor).ok_or(ArtError::Exhausted)
    }

    /// Returns the frame under the cursor without advancing.
    ///
    /// # Errors
    ///
    /// [`ArtError::OutOfBounds`] before the first `next` and after
    /// exhaustion.
    pub fn current(&self) -> Result<&'static str, ArtError> {
        self.frame_at(self.cursor).ok_or(ArtError::OutOfBounds)
    }

    /// Jumps the cursor directly to the final frame. Equivalent, as seen by
    /// `current`, to draining the sequence with repeated `next`.
    pub fn move_to_last(&mut self) {
        self.cursor = self.frames.len() as isize - 1;
    }

    fn frame_at(&self, cursor: isize) -> Option<&'static str> {
        usize::try_from(cursor)
            .ok()
            .and_then(|pos| self.frames.get(pos))
            .copied()
    }
}
