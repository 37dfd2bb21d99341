//! The round state machine.

use crate::art::ArtRenderer;
use crate::handler::{GameplayHandler, HandlerError};
use crate::settings::Settings;
use crate::state::{Response, State};
use crate::words;
use tracing::{debug, error, instrument};

/// Drives one guessing round against an injected [`GameplayHandler`].
///
/// The game owns the round's settings, hidden word, attempt counter and
/// hint flag; the handler only supplies responses and renders output. The
/// handler is consumed on construction and dropped with the game, which
/// releases its streams on every exit path.
pub struct Game<H> {
    handler: H,
    settings: Option<Settings>,
    state: State,
    attempt: u32,
    hinted: bool,
}

impl<H: GameplayHandler> Game<H> {
    /// Creates a round over the given handler. Settings are acquired
    /// separately so scripted rounds can be stepped by hand.
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            settings: None,
            state: State::Playing,
            attempt: 0,
            hinted: false,
        }
    }

    /// Acquires settings through the handler and arms the round.
    #[instrument(skip(self))]
    pub fn set_settings(&mut self) -> Result<(), HandlerError> {
        self.settings = Some(self.handler.get_settings(&words::CATEGORIES)?);
        self.state = State::Playing;
        Ok(())
    }

    /// Plays the round to a terminal state.
    ///
    /// Boundary failures abort the round: they are logged and absorbed
    /// here, never propagated to the caller.
    #[instrument(skip(self))]
    pub fn run(&mut self) {
        if let Err(err) = self.set_settings() {
            error!(%err, "failed to acquire settings");
            return;
        }
        if let Err(err) = self.start() {
            error!(%err, "failed to configure the handler");
            return;
        }
        while !self.state.is_over() {
            match self.step() {
                Ok(state) => self.state = state,
                Err(err) => {
                    error!(%err, "round aborted");
                    return;
                }
            }
        }
        debug!(state = %self.state, attempt = self.attempt, "round over");
    }

    /// Advances the round by one discrete transition.
    ///
    /// Exhausted attempts take priority over everything else, then a fully
    /// revealed word; only after those does the handler get asked for a
    /// response.
    #[instrument(skip(self))]
    pub fn step(&mut self) -> Result<State, HandlerError> {
        let Some(settings) = &mut self.settings else {
            return Err(HandlerError::NotConfigured);
        };
        if self.attempt >= Settings::MAX_ATTEMPTS {
            return self.handler.lose(State::Lose);
        }
        if settings.word().is_guessed() {
            return self.handler.win(self.attempt);
        }
        let response = self
            .handler
            .step(self.state, self.attempt, self.hinted, settings.word())?;
        match response {
            Response::Control(State::Surrender) => self.handler.lose(State::Surrender),
            Response::Control(State::Hint) => {
                // Idempotent: a second request does not reset the flag.
                self.hinted = true;
                Ok(State::Hint)
            }
            Response::Guess(ch) if settings.word_mut().guess(ch) => Ok(State::Success),
            _ => {
                self.attempt += 1;
                self.handler.next_frame()?;
                Ok(State::Wrong)
            }
        }
    }

    fn start(&mut self) -> Result<(), HandlerError> {
        let Some(settings) = &self.settings else {
            return Err(HandlerError::NotConfigured);
        };
        self.handler
            .configure(settings, ArtRenderer::new(Settings::MAX_ATTEMPTS as i32))
    }

    /// The state the round loop last observed.
    pub fn state(&self) -> State {
        self.state
    }

    /// Wrong guesses consumed so far.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Whether the one-time hint has been requested this round.
    pub fn hinted(&self) -> bool {
        self.hinted
    }
}
