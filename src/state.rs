//! Discrete game states and the structured player response.

use strum::Display;

/// Discrete state of a hangman round.
///
/// `Playing`, `Success`, `Wrong` and `Hint` are ongoing states; `Win`,
/// `Lose` and `Surrender` are terminal and stop the round loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum State {
    /// Round in progress, no guess applied yet.
    Playing,
    /// Last guess revealed at least one letter.
    Success,
    /// Last guess missed; an attempt was consumed.
    Wrong,
    /// Player asked for the hint.
    Hint,
    /// Whole word revealed.
    Win,
    /// Attempts exhausted.
    Lose,
    /// Player gave up.
    Surrender,
}

impl State {
    /// True for the terminal states that stop the round loop.
    pub fn is_over(self) -> bool {
        matches!(self, State::Win | State::Lose | State::Surrender)
    }
}

/// One structured player input event: a guessed character or a control
/// signal. Never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// A single guessed character.
    Guess(char),
    /// A control signal carrying the state it requests
    /// (`Hint`, `Surrender`, or a `Wrong` marker for a deliberate miss).
    Control(State),
}
