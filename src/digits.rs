use rand::Rng;
use std::ops::RangeInclusive;

/// An ordered run of decimal digits, most significant first.
///
/// The first digit is never zero except for the single-digit sequence `[0]`,
/// so every sequence reads as a plain integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence {
    digits: Vec<u8>,
}

impl DigitSequence {
    pub fn new(digits: Vec<u8>) -> Self {
        assert!(!digits.is_empty(), "a digit sequence holds at least one digit");
        assert!(digits.iter().all(|&d| d <= 9), "digits must be in 0..=9");
        assert!(
            digits[0] != 0 || digits.len() == 1,
            "the leading digit of a multi-digit sequence must be nonzero"
        );
        Self { digits }
    }

    /// Draws a sequence whose length is uniform over `lengths`; the leading
    /// digit is drawn from 1..=9, every other digit from 0..=9.
    pub fn random<R: Rng + ?Sized>(lengths: RangeInclusive<usize>, rng: &mut R) -> Self {
        assert!(
            *lengths.start() >= 1 && lengths.start() <= lengths.end(),
            "length range must be nonempty and start at 1"
        );

        let len = rng.gen_range(lengths);
        let mut digits = Vec::with_capacity(len);
        digits.push(rng.gen_range(1..=9));
        for _ in 1..len {
            digits.push(rng.gen_range(0..=9));
        }
        Self { digits }
    }

    /// Parses a string of ASCII digits back into a sequence. Rejects empty
    /// input, non-digit characters, and redundant leading zeros.
    pub fn parse_arabic(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        let mut digits = Vec::with_capacity(text.len());
        for ch in text.chars() {
            digits.push(ch.to_digit(10)? as u8);
        }
        if digits[0] == 0 && digits.len() > 1 {
            return None;
        }
        Some(Self { digits })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_respects_length_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let seq = DigitSequence::random(2..=5, &mut rng);
            assert!((2..=5).contains(&seq.len()));
        }
    }

    #[test]
    fn random_never_leads_with_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let seq = DigitSequence::random(1..=9, &mut rng);
            assert_ne!(seq.digits()[0], 0);
            assert!(seq.digits().iter().all(|&d| d <= 9));
        }
    }

    #[test]
    fn random_fixed_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let seq = DigitSequence::random(4..=4, &mut rng);
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn parse_arabic_roundtrip() {
        let seq = DigitSequence::parse_arabic("7425").unwrap();
        assert_eq!(seq.digits(), &[7, 4, 2, 5]);
    }

    #[test]
    fn parse_arabic_single_zero() {
        let seq = DigitSequence::parse_arabic("0").unwrap();
        assert_eq!(seq.digits(), &[0]);
    }

    #[test]
    fn parse_arabic_rejects_leading_zero() {
        assert_eq!(DigitSequence::parse_arabic("042"), None);
    }

    #[test]
    fn parse_arabic_rejects_non_digits() {
        assert_eq!(DigitSequence::parse_arabic("12a"), None);
        assert_eq!(DigitSequence::parse_arabic(""), None);
    }

    #[test]
    #[should_panic(expected = "leading digit")]
    fn new_rejects_leading_zero() {
        DigitSequence::new(vec![0, 1]);
    }

    #[test]
    fn new_allows_single_zero() {
        let seq = DigitSequence::new(vec![0]);
        assert_eq!(seq.len(), 1);
    }
}
