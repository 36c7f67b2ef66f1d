use crate::clock::{self, ClockTime};
use crate::digits::DigitSequence;
use crate::numeral::{self, ReadingConvention};
use crate::script::ScriptTable;
use clap::ValueEnum;
use itertools::Itertools;
use rand::RngCore;
use std::ops::RangeInclusive;

/// Script a question is presented in. Audio is a question-only script: it is
/// an action, not a text the user could type back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum QuestionScript {
    Arabic,
    Hiragana,
    Kanji,
    Audio,
}

/// Script a correct answer must be typed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum AnswerScript {
    Arabic,
    Hiragana,
}

/// One question/answer pair. The reference is the single source of truth the
/// typed answer is compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Text shown before the prompt, if the question is visual.
    pub display: Option<String>,
    /// Text handed to the speech invoker, if the question is spoken.
    pub speech: Option<String>,
    pub reference: String,
    /// Extra renderings revealed after the round, if configured.
    pub after: Option<String>,
}

/// Draws one round at a time from the session's random source.
pub trait Drill {
    fn next_round(&mut self, rng: &mut dyn RngCore) -> Round;
}

/// Number-reading drill: random digit sequences rendered under one reading
/// convention.
pub struct NumberDrill {
    convention: ReadingConvention,
    question: QuestionScript,
    answer: AnswerScript,
    lengths: RangeInclusive<usize>,
    hiragana: ScriptTable,
    kanji: ScriptTable,
    show_after: bool,
}

impl NumberDrill {
    pub fn new(
        convention: ReadingConvention,
        question: QuestionScript,
        answer: AnswerScript,
        lengths: RangeInclusive<usize>,
        show_after: bool,
    ) -> Self {
        Self {
            convention,
            question,
            answer,
            lengths,
            hiragana: ScriptTable::load("hiragana"),
            kanji: ScriptTable::load("kanji"),
            show_after,
        }
    }

    fn question_for(&self, seq: &DigitSequence) -> (Option<String>, Option<String>) {
        match self.question {
            QuestionScript::Arabic => (Some(numeral::render_arabic(seq)), None),
            QuestionScript::Hiragana => (
                Some(numeral::render_text(seq, self.convention, &self.hiragana)),
                None,
            ),
            QuestionScript::Kanji => (
                Some(numeral::render_text(seq, self.convention, &self.kanji)),
                None,
            ),
            QuestionScript::Audio => {
                let spoken = match self.convention {
                    ReadingConvention::DigitSequence => numeral::render_spoken_digits(seq),
                    ReadingConvention::PositionalNumber => numeral::render_arabic(seq),
                };
                (None, Some(spoken))
            }
        }
    }

    fn reference_for(&self, seq: &DigitSequence) -> String {
        match self.answer {
            AnswerScript::Arabic => numeral::render_arabic(seq),
            AnswerScript::Hiragana => numeral::render_text(seq, self.convention, &self.hiragana),
        }
    }
}

impl Drill for NumberDrill {
    fn next_round(&mut self, rng: &mut dyn RngCore) -> Round {
        let seq = DigitSequence::random(self.lengths.clone(), rng);
        let (display, speech) = self.question_for(&seq);
        let reference = self.reference_for(&seq);
        let after = self.show_after.then(|| {
            [
                numeral::render_arabic(&seq),
                numeral::render_text(&seq, self.convention, &self.hiragana),
                numeral::render_text(&seq, self.convention, &self.kanji),
            ]
            .iter()
            .join("  ")
        });

        Round {
            display,
            speech,
            reference,
            after,
        }
    }
}

/// Clock-time drill: the question is an H:MM time, the answer its hiragana
/// reading.
pub struct ClockDrill {
    audio: bool,
    hiragana: ScriptTable,
    show_after: bool,
}

impl ClockDrill {
    pub fn new(audio: bool, show_after: bool) -> Self {
        Self {
            audio,
            hiragana: ScriptTable::load("hiragana"),
            show_after,
        }
    }
}

impl Drill for ClockDrill {
    fn next_round(&mut self, rng: &mut dyn RngCore) -> Round {
        let time = ClockTime::random(rng);
        let reference = clock::render_clock(&time, &self.hiragana);
        let (display, speech) = if self.audio {
            (None, Some(time.arabic()))
        } else {
            (Some(time.arabic()), None)
        };
        let after = self
            .show_after
            .then(|| format!("{}  {}", time.arabic(), reference));

        Round {
            display,
            speech,
            reference,
            after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn number_round_is_self_consistent() {
        // Question shown in arabic, answered in hiragana: the reference must
        // be the positional reading of whatever digits were drawn.
        let mut drill = NumberDrill::new(
            ReadingConvention::PositionalNumber,
            QuestionScript::Arabic,
            AnswerScript::Hiragana,
            1..=9,
            false,
        );
        let mut rng = StdRng::seed_from_u64(11);
        let table = ScriptTable::load("hiragana");

        for _ in 0..50 {
            let round = drill.next_round(&mut rng);
            let shown = round.display.expect("arabic questions are displayed");
            let seq = DigitSequence::parse_arabic(&shown).expect("question is a valid numeral");
            assert_eq!(round.reference, numeral::render_positional(&seq, &table));
            assert!(round.speech.is_none());
        }
    }

    #[test]
    fn digit_sequence_round_reads_per_digit() {
        let mut drill = NumberDrill::new(
            ReadingConvention::DigitSequence,
            QuestionScript::Arabic,
            AnswerScript::Hiragana,
            3..=3,
            false,
        );
        let mut rng = StdRng::seed_from_u64(5);
        let table = ScriptTable::load("hiragana");

        let round = drill.next_round(&mut rng);
        let seq = DigitSequence::parse_arabic(round.display.as_ref().unwrap()).unwrap();
        assert_eq!(round.reference, numeral::render_digit_sequence(&seq, &table));
    }

    #[test]
    fn audio_question_has_no_display() {
        let mut drill = NumberDrill::new(
            ReadingConvention::DigitSequence,
            QuestionScript::Audio,
            AnswerScript::Arabic,
            4..=4,
            false,
        );
        let mut rng = StdRng::seed_from_u64(2);

        let round = drill.next_round(&mut rng);
        assert!(round.display.is_none());
        let spoken = round.speech.expect("audio questions are spoken");
        // One digit per word, trailing space included.
        assert_eq!(spoken.len(), 8);
        assert!(spoken.ends_with(' '));
        assert_eq!(spoken.split_whitespace().count(), 4);
    }

    #[test]
    fn reveal_lists_every_script() {
        let mut drill = NumberDrill::new(
            ReadingConvention::PositionalNumber,
            QuestionScript::Hiragana,
            AnswerScript::Arabic,
            2..=2,
            true,
        );
        let mut rng = StdRng::seed_from_u64(8);

        let round = drill.next_round(&mut rng);
        let after = round.after.expect("reveal requested");
        assert_eq!(after.split("  ").count(), 3);
        assert!(after.starts_with(&round.reference));
    }

    #[test]
    fn clock_round_is_self_consistent() {
        let mut drill = ClockDrill::new(false, false);
        let mut rng = StdRng::seed_from_u64(21);
        let table = ScriptTable::load("hiragana");

        for _ in 0..50 {
            let round = drill.next_round(&mut rng);
            let shown = round.display.expect("clock questions are displayed");
            let (h, m) = shown.split_once(':').unwrap();
            let time = ClockTime::new(h.parse().unwrap(), m.parse().unwrap());
            assert_eq!(round.reference, clock::render_clock(&time, &table));
        }
    }

    #[test]
    fn clock_audio_speaks_the_time() {
        let mut drill = ClockDrill::new(true, false);
        let mut rng = StdRng::seed_from_u64(13);

        let round = drill.next_round(&mut rng);
        assert!(round.display.is_none());
        assert!(round.speech.unwrap().contains(':'));
    }
}
