use std::io;
use std::process::{Command, Stdio};

/// Produces an audible rendering of a piece of text.
pub trait SpeechInvoker {
    /// Blocks until the text has been spoken. Any failure of the external
    /// program is fatal to the session.
    fn say(&self, text: &str) -> io::Result<()>;
}

/// Speaks by running `<program> <args...> <text>` and discarding stdout.
pub struct CommandSpeech {
    program: String,
    args: Vec<String>,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// translate-shell; `-p` plays the text aloud, `-b` keeps output brief.
    pub fn translate_shell() -> Self {
        Self::new(
            "trans",
            vec!["-b".into(), "-p".into(), ":en".into(), ":jpn".into()],
        )
    }
}

impl SpeechInvoker for CommandSpeech {
    fn say(&self, text: &str) -> io::Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdout(Stdio::null())
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} exited with {status}", self.program),
            ))
        }
    }
}

/// For sessions that never speak.
pub struct NullSpeech;

impl SpeechInvoker for NullSpeech {
    fn say(&self, _text: &str) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_speech_always_succeeds() {
        assert!(NullSpeech.say("なな").is_ok());
    }

    #[test]
    fn failing_command_is_an_error() {
        let speech = CommandSpeech::new("false", vec![]);
        assert!(speech.say("7 4 2 5 ").is_err());
    }

    #[test]
    fn missing_program_is_an_error() {
        let speech = CommandSpeech::new("suuji-no-such-program", vec![]);
        assert!(speech.say("なな").is_err());
    }

    #[test]
    fn succeeding_command_is_ok() {
        let speech = CommandSpeech::new("true", vec![]);
        assert!(speech.say("なな").is_ok());
    }
}
