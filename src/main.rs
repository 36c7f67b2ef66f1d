use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand, ValueEnum};
use rand::RngCore;
use std::error::Error;
use std::io;

use suuji::config::{ConfigStore, Defaults, FileConfigStore};
use suuji::drill::{AnswerScript, ClockDrill, Drill, NumberDrill, QuestionScript};
use suuji::numeral::{ReadingConvention, MAX_POSITIONAL_DIGITS};
use suuji::session::{DrillMode, DrillSession, SessionConfig, StdinInput};
use suuji::speech::CommandSpeech;
use suuji::stats::SessionSummary;

/// japanese numeral reading drills for the terminal
#[derive(Parser, Debug)]
#[clap(
    version,
    about,
    long_about = "Drills reading Japanese numerals: random digit sequences or whole numbers \
shown in arabic, hiragana or kanji (or spoken aloud), answered by typing the reading."
)]
struct Cli {
    #[command(subcommand)]
    method: Method,
}

#[derive(Subcommand, Debug)]
enum Method {
    /// digit sequences read one digit at a time, like phone numbers (7425 -> ななよんにご)
    Digits(NumberArgs),
    /// whole numbers with place-value words (7425 -> ななせんよんひゃくにじゅうご)
    Numbers(NumberArgs),
    /// clock times (7:25 -> しちじにじゅうごふん)
    Time(TimeArgs),
}

#[derive(Args, Debug, Clone)]
struct NumberArgs {
    /// number of rounds to run
    #[clap(short = 'r', long)]
    rounds: Option<u32>,

    /// shortest sequence to draw
    #[clap(short = 'f', long)]
    digits_from: Option<usize>,

    /// longest sequence to draw (at most 9 in numbers mode)
    #[clap(short = 't', long)]
    digits_to: Option<usize>,

    /// script the question is shown or spoken in
    #[clap(short = 'q', long, value_enum)]
    question: Option<QuestionScript>,

    /// script a correct answer must be typed in
    #[clap(short = 'a', long, value_enum)]
    answer: Option<AnswerScript>,

    /// what happens after a wrong answer
    #[clap(short = 'm', long, value_enum, default_value_t = DrillMode::Learn)]
    mode: DrillMode,

    /// wait for enter between rounds
    #[clap(short = 'w', long)]
    wait: bool,

    /// reveal every rendering of the number after each round
    #[clap(long)]
    show_after: bool,

    /// remember these options as defaults
    #[clap(long)]
    save: bool,
}

#[derive(Args, Debug, Clone)]
struct TimeArgs {
    /// number of rounds to run
    #[clap(short = 'r', long)]
    rounds: Option<u32>,

    /// speak the time instead of printing it
    #[clap(long)]
    audio: bool,

    /// what happens after a wrong answer
    #[clap(short = 'm', long, value_enum, default_value_t = DrillMode::Learn)]
    mode: DrillMode,

    /// wait for enter between rounds
    #[clap(short = 'w', long)]
    wait: bool,

    /// reveal the time and its reading after each round
    #[clap(long)]
    show_after: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let summary = match cli.method {
        Method::Digits(args) => run_number_drill(ReadingConvention::DigitSequence, args)?,
        Method::Numbers(args) => run_number_drill(ReadingConvention::PositionalNumber, args)?,
        Method::Time(args) => run_clock_drill(args)?,
    };

    println!("{}", summary.report());
    Ok(())
}

fn run_number_drill(
    convention: ReadingConvention,
    args: NumberArgs,
) -> io::Result<SessionSummary> {
    let store = FileConfigStore::new();
    let defaults = store.load();

    let rounds = args.rounds.unwrap_or(defaults.rounds);
    let digits_from = args.digits_from.unwrap_or(defaults.digits_from);
    let digits_to = args.digits_to.unwrap_or(defaults.digits_to);
    let question = args
        .question
        .unwrap_or_else(|| parse_saved(&defaults.question, QuestionScript::Hiragana));
    let answer = args
        .answer
        .unwrap_or_else(|| parse_saved(&defaults.answer, AnswerScript::Arabic));

    if let Err(msg) = validate_number_options(convention, rounds, digits_from, digits_to) {
        Cli::command().error(ErrorKind::ValueValidation, msg).exit();
    }

    if args.save {
        let _ = store.save(&Defaults {
            rounds,
            digits_from,
            digits_to,
            question: question.to_string(),
            answer: answer.to_string(),
        });
    }

    let drill = NumberDrill::new(
        convention,
        question,
        answer,
        digits_from..=digits_to,
        args.show_after,
    );
    run_session(Box::new(drill), rounds, args.mode, args.wait)
}

fn run_clock_drill(args: TimeArgs) -> io::Result<SessionSummary> {
    let rounds = args.rounds.unwrap_or_else(|| FileConfigStore::new().load().rounds);
    if rounds == 0 {
        Cli::command()
            .error(ErrorKind::ValueValidation, "rounds must be at least 1")
            .exit();
    }

    let drill = ClockDrill::new(args.audio, args.show_after);
    run_session(Box::new(drill), rounds, args.mode, args.wait)
}

fn run_session(
    drill: Box<dyn Drill>,
    rounds: u32,
    mode: DrillMode,
    wait: bool,
) -> io::Result<SessionSummary> {
    let config = SessionConfig {
        rounds,
        mode,
        wait_between_rounds: wait,
    };
    let rng: Box<dyn RngCore> = Box::new(rand::thread_rng());
    let mut session = DrillSession::new(
        config,
        drill,
        StdinInput,
        io::stdout(),
        CommandSpeech::translate_shell(),
        rng,
    );
    session.run()
}

/// Saved script names are advisory; an unparseable one falls back rather
/// than failing the run.
fn parse_saved<T: ValueEnum>(value: &str, fallback: T) -> T {
    T::from_str(value, true).unwrap_or(fallback)
}

fn validate_number_options(
    convention: ReadingConvention,
    rounds: u32,
    from: usize,
    to: usize,
) -> Result<(), String> {
    if rounds == 0 {
        return Err("rounds must be at least 1".into());
    }
    if from == 0 {
        return Err("the digit range starts at 1".into());
    }
    if from > to {
        return Err(format!("digit range {from}..{to} is empty"));
    }
    if convention == ReadingConvention::PositionalNumber && to > MAX_POSITIONAL_DIGITS {
        return Err(format!(
            "number readings are defined up to {MAX_POSITIONAL_DIGITS} digits"
        ));
    }
    Ok(())
}
