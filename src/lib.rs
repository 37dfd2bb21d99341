//! Console hangman - a word-guessing round as a small state machine.
//!
//! # Architecture
//!
//! - **Game**: the round state machine (attempts, hint flag, transitions)
//! - **HiddenWord / Settings**: the round's value objects
//! - **ArtRenderer**: clamped, restartable gallows frame sequence
//! - **GameplayHandler**: boundary trait the state machine drives a round
//!   through, with a console implementation and scripted test doubles
//!
//! # Example
//!
//! ```no_run
//! use hangman::{ConsoleHandler, Game};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use std::io;
//!
//! let handler = ConsoleHandler::new(
//!     io::stdin().lock(),
//!     io::stdout().lock(),
//!     StdRng::from_entropy(),
//! );
//! Game::new(handler).run();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod art;
mod console;
mod difficulty;
mod game;
mod handler;
mod settings;
mod state;
mod word;
mod words;

pub use art::{ArtError, ArtRenderer, MAX_LEVEL, MIN_LEVEL};
pub use console::ConsoleHandler;
pub use difficulty::Difficulty;
pub use game::Game;
pub use handler::{GameplayHandler, HandlerError};
pub use settings::Settings;
pub use state::{Response, State};
pub use word::{HiddenWord, MASK};
pub use words::{CATEGORIES, Unit, units_for};
