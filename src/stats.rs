use std::time::{Duration, Instant};

/// Counters accumulated while a session runs. Owned and mutated by the
/// session only.
#[derive(Debug)]
pub struct SessionStats {
    pub rounds_total: u32,
    pub rounds_completed: u32,
    pub correct: u32,
    pub mistakes: u32,
    started: Instant,
}

impl SessionStats {
    pub fn start(rounds_total: u32) -> Self {
        Self {
            rounds_total,
            rounds_completed: 0,
            correct: 0,
            mistakes: 0,
            started: Instant::now(),
        }
    }

    pub fn finish(self) -> SessionSummary {
        self.into_summary(false)
    }

    /// Input ran out before the rounds did.
    pub fn finish_early(self) -> SessionSummary {
        self.into_summary(true)
    }

    fn into_summary(self, ended_early: bool) -> SessionSummary {
        SessionSummary {
            rounds_total: self.rounds_total,
            rounds_completed: self.rounds_completed,
            correct: self.correct,
            mistakes: self.mistakes,
            elapsed: self.started.elapsed(),
            ended_early,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub rounds_total: u32,
    pub rounds_completed: u32,
    /// Rounds answered correctly on the first try.
    pub correct: u32,
    /// Wrong answers over the whole session, counting every retry.
    pub mistakes: u32,
    pub elapsed: Duration,
    pub ended_early: bool,
}

impl SessionSummary {
    pub fn percent_correct(&self) -> f64 {
        if self.rounds_total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.rounds_total as f64 * 100.0
    }

    pub fn report(&self) -> String {
        let mut line = format!(
            "Correct : {} of {} ({:.2}%). {} seconds.",
            self.correct,
            self.rounds_total,
            self.percent_correct(),
            self.elapsed.as_secs()
        );
        if self.mistakes > 0 {
            line.push_str(&format!(" {} wrong answers.", self.mistakes));
        }
        line
    }
}
