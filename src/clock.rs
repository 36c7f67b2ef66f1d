use crate::script::ScriptTable;
use rand::Rng;

/// A time of day on the 12-hour dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

/// Hour readings carry their own irregulars (よじ, しちじ, くじ), so they
/// cannot be built from the digit tables.
const HOUR_READINGS: [&str; 12] = [
    "いちじ",
    "にじ",
    "さんじ",
    "よじ",
    "ごじ",
    "ろくじ",
    "しちじ",
    "はちじ",
    "くじ",
    "じゅうじ",
    "じゅういちじ",
    "じゅうにじ",
];

/// Unit-minute readings; 1, 3, 4, 6 and 8 contract to ぷん.
const MINUTE_UNITS: [&str; 10] = [
    "",
    "いっぷん",
    "にふん",
    "さんぷん",
    "よんぷん",
    "ごふん",
    "ろっぷん",
    "ななふん",
    "はっぷん",
    "きゅうふん",
];

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Self {
        assert!((1..=12).contains(&hour), "hours run 1..=12");
        assert!(minute < 60, "minutes run 0..=59");
        Self { hour, minute }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hour: rng.gen_range(1..=12),
            minute: rng.gen_range(0..60),
        }
    }

    /// The familiar H:MM form shown as a question.
    pub fn arabic(&self) -> String {
        format!("{}:{:02}", self.hour, self.minute)
    }
}

/// Hiragana reading of the full time; zero minutes read as the bare hour.
pub fn render_clock(time: &ClockTime, table: &ScriptTable) -> String {
    let mut out = String::from(HOUR_READINGS[(time.hour - 1) as usize]);
    out.push_str(&minute_reading(time.minute, table));
    out
}

fn minute_reading(minute: u8, table: &ScriptTable) -> String {
    assert!(minute < 60, "minutes run 0..=59");
    if minute == 0 {
        return String::new();
    }

    let tens = (minute / 10) as usize;
    let unit = (minute % 10) as usize;
    let mut out = String::new();

    if unit == 0 {
        // Exact tens take the contracted じゅっぷん form.
        if tens > 1 {
            out.push_str(&table.digits[tens]);
        }
        out.push_str("じゅっぷん");
    } else {
        if tens > 0 {
            if tens > 1 {
                out.push_str(&table.digits[tens]);
            }
            out.push_str(&table.places.ten);
        }
        out.push_str(MINUTE_UNITS[unit]);
    }
    out
}
