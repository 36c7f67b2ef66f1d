use crate::digits::DigitSequence;
use crate::script::{ContractedPlace, ScriptTable};
use itertools::Itertools;

/// Place words run out above the hundred-millions place, which bounds
/// positional readings to nine digits.
pub const MAX_POSITIONAL_DIGITS: usize = 9;

/// How a sequence of digits is read aloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingConvention {
    /// Each digit on its own, like a phone number (7425 -> ななよんにご).
    DigitSequence,
    /// One integer with place-value words (7425 -> ななせんよんひゃくにじゅうご).
    PositionalNumber,
}

/// Renders under `convention` using the given script table.
pub fn render_text(
    seq: &DigitSequence,
    convention: ReadingConvention,
    table: &ScriptTable,
) -> String {
    match convention {
        ReadingConvention::DigitSequence => render_digit_sequence(seq, table),
        ReadingConvention::PositionalNumber => render_positional(seq, table),
    }
}

/// Concatenates the script's glyph for each digit in order. Zero keeps its
/// own glyph here; there is no place-value logic.
pub fn render_digit_sequence(seq: &DigitSequence, table: &ScriptTable) -> String {
    seq.digits()
        .iter()
        .map(|&d| table.digits[d as usize].as_str())
        .join("")
}

/// The sequence as a plain Arabic numeral.
pub fn render_arabic(seq: &DigitSequence) -> String {
    seq.digits().iter().map(|&d| char::from(b'0' + d)).collect()
}

/// One digit per word, each followed by a space, so a speech program reads
/// the digits separately instead of as one number.
pub fn render_spoken_digits(seq: &DigitSequence) -> String {
    seq.digits().iter().map(|d| format!("{d} ")).collect()
}

/// Reads the sequence as a single integer with place-value words.
///
/// One traversal serves every script: the digit's exponent (count of digits
/// to its right) selects the place rule, the table supplies the glyphs and
/// any euphonic contractions. A digit of 1 is implicit before the tens,
/// hundreds and thousands words but read out at the myriad and
/// hundred-million group boundaries.
pub fn render_positional(seq: &DigitSequence, table: &ScriptTable) -> String {
    assert!(
        seq.len() <= MAX_POSITIONAL_DIGITS,
        "positional readings are defined up to the hundred-millions place"
    );

    let mut out = String::new();
    // True once the 10^5..10^7 block has contributed; the myriad word must
    // still close that block even when the 10^4 digit itself is zero
    // (100001 reads じゅうまんいち).
    let mut upper_myriad = false;

    for (idx, &digit) in seq.digits().iter().enumerate() {
        let exp = seq.len() - idx - 1;
        match exp {
            0 => {
                if digit > 0 {
                    out.push_str(&table.digits[digit as usize]);
                }
            }
            1 | 5 => {
                if digit > 1 {
                    out.push_str(&table.digits[digit as usize]);
                }
                if digit > 0 {
                    out.push_str(&table.places.ten);
                    if exp == 5 {
                        upper_myriad = true;
                    }
                }
            }
            2 | 3 | 6 | 7 => {
                let (place, word) = if exp == 2 || exp == 6 {
                    (ContractedPlace::Hundred, &table.places.hundred)
                } else {
                    (ContractedPlace::Thousand, &table.places.thousand)
                };
                if exp >= 5 && digit > 0 {
                    upper_myriad = true;
                }
                if let Some(fused) = table.contraction(place, digit) {
                    out.push_str(fused);
                } else {
                    if digit > 1 {
                        out.push_str(&table.digits[digit as usize]);
                    }
                    if digit > 0 {
                        out.push_str(word);
                    }
                }
            }
            4 => {
                if digit > 0 {
                    out.push_str(&table.digits[digit as usize]);
                }
                if digit > 0 || upper_myriad {
                    out.push_str(&table.places.myriad);
                }
            }
            8 => {
                if digit > 0 {
                    out.push_str(&table.digits[digit as usize]);
                    out.push_str(&table.places.hundred_million);
                }
            }
            _ => unreachable!("sequence length is checked above"),
        }
    }

    if out.is_empty() {
        out.push_str(&table.zero);
    }
    out
}
