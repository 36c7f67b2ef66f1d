use crate::drill::{Drill, Round};
use crate::speech::SpeechInvoker;
use crate::stats::{SessionStats, SessionSummary};
use clap::ValueEnum;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use rand::RngCore;
use std::collections::VecDeque;
use std::io::{self, Write};

/// What happens after a wrong answer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DrillMode {
    /// show the correct answer and move on
    Learn,
    /// repeat the question until it is answered correctly
    Test,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub rounds: u32,
    pub mode: DrillMode,
    pub wait_between_rounds: bool,
}

/// One line of text per prompt. `None` means the stream is exhausted.
pub trait InputSource {
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Production input source reading from stdin.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let n = io::stdin().read_line(&mut buf)?;
        if n == 0 {
            Ok(None)
        } else {
            Ok(Some(buf))
        }
    }
}

/// Canned input source for tests.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Strips every whitespace character, so answers match with or without
/// spaces between the words.
pub fn normalize_answer(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Runs drill rounds until they are exhausted or input ends: present a
/// question, read and check an answer, retry or advance by mode.
pub struct DrillSession<I: InputSource, W: Write, S: SpeechInvoker> {
    config: SessionConfig,
    drill: Box<dyn Drill>,
    input: I,
    output: W,
    speech: S,
    rng: Box<dyn RngCore>,
}

impl<I: InputSource, W: Write, S: SpeechInvoker> DrillSession<I, W, S> {
    pub fn new(
        config: SessionConfig,
        drill: Box<dyn Drill>,
        input: I,
        output: W,
        speech: S,
        rng: Box<dyn RngCore>,
    ) -> Self {
        Self {
            config,
            drill,
            input,
            output,
            speech,
            rng,
        }
    }

    pub fn run(&mut self) -> io::Result<SessionSummary> {
        let mut stats = SessionStats::start(self.config.rounds);

        for round_no in 0..self.config.rounds {
            let round = self.drill.next_round(self.rng.as_mut());
            self.present(&round)?;

            let mut first_try = true;
            loop {
                let Some(line) = self.input.read_line()? else {
                    return Ok(stats.finish_early());
                };

                if normalize_answer(&line) == round.reference {
                    if first_try {
                        stats.correct += 1;
                    }
                    break;
                }

                stats.mistakes += 1;
                first_try = false;
                self.show_reference(&round)?;
                if self.config.mode == DrillMode::Learn {
                    break;
                }
                self.present(&round)?;
            }

            if let Some(after) = &round.after {
                writeln!(self.output, "{after}")?;
            }
            writeln!(self.output)?;
            stats.rounds_completed += 1;

            if self.config.wait_between_rounds && round_no + 1 < self.config.rounds {
                if self.input.read_line()?.is_none() {
                    return Ok(stats.finish_early());
                }
            }
        }

        Ok(stats.finish())
    }

    fn present(&mut self, round: &Round) -> io::Result<()> {
        if let Some(text) = &round.display {
            // The answer is typed on the same line.
            write!(self.output, "{text} ")?;
            self.output.flush()?;
        }
        if let Some(text) = &round.speech {
            self.speech.say(text)?;
        }
        Ok(())
    }

    fn show_reference(&mut self, round: &Round) -> io::Result<()> {
        writeln!(
            self.output,
            "{}{}{}",
            SetForegroundColor(Color::Red),
            round.reference,
            ResetColor
        )
    }
}
