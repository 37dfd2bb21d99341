//! Boundary between the state machine and the interactive world.

use crate::art::{ArtError, ArtRenderer};
use crate::settings::Settings;
use crate::state::{Response, State};
use crate::word::HiddenWord;
use derive_more::{Display, Error, From};

/// Failure raised at the gameplay boundary.
///
/// An I/O failure is fatal to the round; `NotConfigured` marks a usage
/// error (a call that requires [`GameplayHandler::configure`] to have run
/// first).
#[derive(Debug, Display, Error, From)]
pub enum HandlerError {
    /// Stream read/write failure during settings acquisition or stepping.
    #[display("i/o failure: {_0}")]
    #[from]
    Io(std::io::Error),
    /// The art frame sequence was driven past its bounds.
    #[display("art sequence failure: {_0}")]
    #[from]
    Art(ArtError),
    /// A session-dependent call arrived before `configure`.
    #[display("handler used before configure")]
    NotConfigured,
}

/// Polymorphic capability interface the state machine drives a round
/// through.
///
/// Exactly one production implementation exists
/// ([`ConsoleHandler`](crate::ConsoleHandler)); tests substitute scripted
/// doubles. Calls may block until the input source produces data. The
/// implementer owns its streams and releases them on drop, whatever the
/// exit path.
pub trait GameplayHandler {
    /// Resolves the round settings, prompting the player as needed.
    fn get_settings(&mut self, categories: &[&str]) -> Result<Settings, HandlerError>;

    /// One-shot setup before the round begins: hands over the display view
    /// of the settings and the art frame sequence for this round.
    fn configure(&mut self, settings: &Settings, frames: ArtRenderer) -> Result<(), HandlerError>;

    /// Blocks until the next structured player response is available.
    ///
    /// The current reveal mask is passed so the implementer can render the
    /// prompt; it must not be mutated through this path.
    fn step(
        &mut self,
        state: State,
        attempt: u32,
        hinted: bool,
        word: &HiddenWord,
    ) -> Result<Response, HandlerError>;

    /// Notifies of a win; returns the terminal state to propagate.
    fn win(&mut self, attempt: u32) -> Result<State, HandlerError>;

    /// Notifies of a loss or surrender with the triggering reason; returns
    /// the terminal state to propagate.
    fn lose(&mut self, reason: State) -> Result<State, HandlerError>;

    /// Signals one wrong guess; the implementer advances the art sequence.
    fn next_frame(&mut self) -> Result<(), HandlerError>;
}
