use rand::Rng;

use crate::batch;
use crate::error::TokenError;

pub const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-={}|[]:;<>?,./";

/// Which optional character classes join the always-present letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Charset {
    pub numbers: bool,
    pub symbols: bool,
}

impl Charset {
    pub fn new(numbers: bool, symbols: bool) -> Self {
        Self { numbers, symbols }
    }

    /// Letters first, then digits, then symbols.
    pub fn alphabet(&self) -> Vec<u8> {
        let mut chars = Vec::with_capacity(self.size());
        chars.extend_from_slice(LETTERS);
        if self.numbers {
            chars.extend_from_slice(DIGITS);
        }
        if self.symbols {
            chars.extend_from_slice(SYMBOLS);
        }
        chars
    }

    pub fn size(&self) -> usize {
        let mut size = LETTERS.len();
        if self.numbers {
            size += DIGITS.len();
        }
        if self.symbols {
            size += SYMBOLS.len();
        }
        size
    }

    pub fn contains(&self, c: char) -> bool {
        let Ok(b) = u8::try_from(c) else {
            return false;
        };
        LETTERS.contains(&b)
            || (self.numbers && DIGITS.contains(&b))
            || (self.symbols && SYMBOLS.contains(&b))
    }
}

#[derive(Debug, Clone)]
pub struct TokenGenerator {
    alphabet: Vec<u8>,
    length: usize,
}

impl TokenGenerator {
    pub fn new(charset: Charset, length: usize) -> Self {
        Self {
            alphabet: charset.alphabet(),
            length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Every position is drawn independently and uniformly, with replacement.
    pub fn generate_with<R>(&self, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        (0..self.length)
            .map(|_| {
                let idx = rng.gen_range(0..self.alphabet.len());
                self.alphabet[idx] as char
            })
            .collect()
    }

    /// Number of distinct tokens this generator can emit. Saturates at
    /// `u128::MAX`.
    pub fn capacity(&self) -> u128 {
        let Ok(exp) = u32::try_from(self.length) else {
            return u128::MAX;
        };
        (self.alphabet.len() as u128)
            .checked_pow(exp)
            .unwrap_or(u128::MAX)
    }

    /// Build `count` distinct tokens. Configuration bounds are not applied
    /// here, only the entropy guard.
    pub fn batch_with<R>(&self, rng: &mut R, count: usize) -> Result<Vec<String>, TokenError>
    where
        R: Rng + ?Sized,
    {
        batch::collect_unique(count, self.capacity(), || self.generate_with(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(Charset::new(false, false).size(), 52);
        assert_eq!(Charset::new(true, false).size(), 62);
        assert_eq!(Charset::new(false, true).size(), 79);
        assert_eq!(Charset::new(true, true).size(), 89);

        for (numbers, symbols) in [(false, false), (true, false), (false, true), (true, true)] {
            let charset = Charset::new(numbers, symbols);
            assert_eq!(charset.alphabet().len(), charset.size());
        }
    }

    #[test]
    fn test_alphabet_order() {
        let alphabet = Charset::new(true, true).alphabet();
        assert_eq!(&alphabet[..52], LETTERS);
        assert_eq!(&alphabet[52..62], DIGITS);
        assert_eq!(&alphabet[62..], SYMBOLS);
    }

    #[test]
    fn test_token_generation() {
        let generator = TokenGenerator::new(Charset::default(), 6);
        let token = generator.generate();

        assert_eq!(token.len(), 6);
        assert!(token.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_custom_length() {
        let generator = TokenGenerator::new(Charset::new(true, true), 100);
        let token = generator.generate();

        assert_eq!(token.len(), 100);
        assert!(token.chars().all(|c| Charset::new(true, true).contains(c)));
    }

    #[test]
    fn test_zero_length_is_empty() {
        let generator = TokenGenerator::new(Charset::default(), 0);
        assert_eq!(generator.generate(), "");
        assert_eq!(generator.capacity(), 1);
    }

    #[test]
    fn test_digits_show_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let generator = TokenGenerator::new(Charset::new(true, false), 100);
        let seen_digit = (0..50)
            .map(|_| generator.generate_with(&mut rng))
            .any(|t| t.bytes().any(|b| b.is_ascii_digit()));
        assert!(seen_digit);
    }

    #[test]
    fn test_seeded_rng_repeats() {
        let generator = TokenGenerator::new(Charset::new(true, true), 32);
        let a = generator.generate_with(&mut StdRng::seed_from_u64(42));
        let b = generator.generate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_capacity() {
        assert_eq!(TokenGenerator::new(Charset::default(), 1).capacity(), 52);
        assert_eq!(TokenGenerator::new(Charset::new(true, false), 2).capacity(), 62 * 62);
        assert_eq!(TokenGenerator::new(Charset::new(true, true), 100).capacity(), u128::MAX);
    }

    #[test]
    fn test_contains_rejects_non_ascii() {
        let charset = Charset::new(true, true);
        assert!(!charset.contains('é'));
        assert!(!charset.contains(' '));
        assert!(charset.contains('?'));
        assert!(!Charset::default().contains('7'));
    }

    #[test]
    fn test_contains_matches_alphabet() {
        for (numbers, symbols) in [(false, false), (true, false), (false, true), (true, true)] {
            let charset = Charset::new(numbers, symbols);
            let alphabet = charset.alphabet();
            for b in 0..=u8::MAX {
                assert_eq!(charset.contains(b as char), alphabet.contains(&b), "byte {b}");
            }
        }
    }
}
