//! Production gameplay handler over a character input/output pair.

use crate::art::ArtRenderer;
use crate::difficulty::Difficulty;
use crate::handler::{GameplayHandler, HandlerError};
use crate::settings::Settings;
use crate::state::{Response, State};
use crate::word::HiddenWord;
use derive_new::new;
use rand::Rng;
use std::io::{self, BufRead, Write};
use strum::IntoEnumIterator;
use tracing::debug;

/// Per-round display state, armed by `configure`. The hint stays on the
/// [`HiddenWord`] handed to `step`; only the terminal-state reveal and the
/// frame cursor live here.
#[derive(Debug)]
struct Session {
    answer: String,
    frames: ArtRenderer,
}

/// Console implementation of [`GameplayHandler`].
///
/// Reads structured responses from any [`BufRead`] source and writes
/// prompts to any [`Write`] sink, so tests can drive it with in-memory
/// buffers. Random category/word selection goes through the injected RNG.
/// The output is flushed when the handler is dropped, on every exit path.
#[derive(new)]
pub struct ConsoleHandler<In: BufRead, Out: Write, R: Rng> {
    input: In,
    output: Out,
    rng: R,
    #[new(default)]
    session: Option<Session>,
}

impl<In: BufRead, Out: Write, R: Rng> ConsoleHandler<In, Out, R> {
    /// Reads one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, HandlerError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

impl<In: BufRead, Out: Write, R: Rng> GameplayHandler for ConsoleHandler<In, Out, R> {
    fn get_settings(&mut self, categories: &[&str]) -> Result<Settings, HandlerError> {
        writeln!(self.output, "Welcome to hangman!")?;
        writeln!(
            self.output,
            "Pick a category by number or name (anything else for random):"
        )?;
        for (pos, name) in categories.iter().enumerate() {
            writeln!(self.output, "  {}. {name}", pos + 1)?;
        }
        self.output.flush()?;
        // End of input during settings degrades to defaults, it is not an
        // error yet.
        let picked = self.read_line()?.unwrap_or_default();
        let category = resolve_category(&picked, categories);

        let buckets = Difficulty::iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" / ");
        write!(self.output, "Pick a difficulty ({buckets}, default easy): ")?;
        self.output.flush()?;
        let difficulty = self.read_line()?.unwrap_or_default();

        Ok(Settings::resolve(category, &difficulty, &mut self.rng))
    }

    fn configure(&mut self, settings: &Settings, mut frames: ArtRenderer) -> Result<(), HandlerError> {
        writeln!(
            self.output,
            "Category: {} ({})",
            settings.category(),
            settings.difficulty()
        )?;
        writeln!(
            self.output,
            "You get {} wrong guesses. Type a letter, '?' for a hint, '!' to give up.",
            Settings::MAX_ATTEMPTS
        )?;
        // Opening frame now; one frame per wrong guess from here on.
        let opening = frames.next()?;
        writeln!(self.output, "{opening}")?;
        self.output.flush()?;
        self.session = Some(Session {
            answer: settings.word().answer(),
            frames,
        });
        debug!(category = %settings.category(), "console session configured");
        Ok(())
    }

    fn step(
        &mut self,
        state: State,
        attempt: u32,
        hinted: bool,
        word: &HiddenWord,
    ) -> Result<Response, HandlerError> {
        if self.session.is_none() {
            return Err(HandlerError::NotConfigured);
        }
        if state == State::Wrong {
            writeln!(self.output, "Miss!")?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "Word: {}", word.masked())?;
        if hinted {
            writeln!(self.output, "Hint: {}", word.hint())?;
        }
        writeln!(
            self.output,
            "Wrong guesses left: {}",
            Settings::MAX_ATTEMPTS - attempt
        )?;
        loop {
            write!(self.output, "Your guess: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
            };
            let token = line.to_lowercase();
            match token.as_str() {
                "?" | "hint" => return Ok(Response::Control(State::Hint)),
                "!" | "quit" | "surrender" => return Ok(Response::Control(State::Surrender)),
                _ => {}
            }
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_alphabetic() => return Ok(Response::Guess(ch)),
                _ => writeln!(
                    self.output,
                    "Enter a single letter, '?' for a hint or '!' to give up."
                )?,
            }
        }
    }

    fn win(&mut self, attempt: u32) -> Result<State, HandlerError> {
        let session = self.session.as_ref().ok_or(HandlerError::NotConfigured)?;
        writeln!(
            self.output,
            "You won! The word was '{}' ({attempt} wrong guesses).",
            session.answer
        )?;
        self.output.flush()?;
        Ok(State::Win)
    }

    fn lose(&mut self, reason: State) -> Result<State, HandlerError> {
        let session = self.session.as_mut().ok_or(HandlerError::NotConfigured)?;
        session.frames.move_to_last();
        let frame = session.frames.current()?;
        writeln!(self.output, "{frame}")?;
        if reason == State::Surrender {
            writeln!(self.output, "You gave up. The word was '{}'.", session.answer)?;
        } else {
            writeln!(
                self.output,
                "Out of attempts! The word was '{}'.",
                session.answer
            )?;
        }
        self.output.flush()?;
        Ok(reason)
    }

    fn next_frame(&mut self) -> Result<(), HandlerError> {
        let session = self.session.as_mut().ok_or(HandlerError::NotConfigured)?;
        let frame = session.frames.next()?;
        writeln!(self.output, "{frame}")?;
        self.output.flush()?;
        Ok(())
    }
}

impl<In: BufRead, Out: Write, R: Rng> Drop for ConsoleHandler<In, Out, R> {
    fn drop(&mut self) {
        let _ = self.output.flush();
    }
}

/// Maps free text onto a valid category: a 1-based index or a
/// case-insensitive name. Anything else means "pick one at random".
fn resolve_category<'a>(picked: &str, categories: &'a [&'a str]) -> Option<&'a str> {
    if let Ok(pos) = picked.parse::<usize>() {
        return (1..=categories.len())
            .contains(&pos)
            .then(|| categories[pos - 1]);
    }
    categories
        .iter()
        .copied()
        .find(|name| name.eq_ignore_ascii_case(picked))
}
