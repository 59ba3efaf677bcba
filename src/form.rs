use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TokenError;
use crate::token::{Charset, TokenGenerator};

/// Slider bounds of the form.
pub const LENGTH_RANGE: RangeInclusive<usize> = 6..=100;
/// What `generate_batch` accepts. Shorter lengths are left to the entropy guard.
pub const BATCH_LENGTH_RANGE: RangeInclusive<usize> = 1..=100;
pub const COUNT_RANGE: RangeInclusive<usize> = 1..=10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub length: usize,
    pub numbers: bool,
    pub symbols: bool,
    pub count: usize,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            length: 8,
            numbers: false,
            symbols: false,
            count: 1,
        }
    }
}

fn check(field: &'static str, value: usize, range: &RangeInclusive<usize>) -> Result<(), TokenError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(TokenError::InvalidConfiguration {
        field,
        value,
        min: *range.start(),
        max: *range.end(),
    })
}

impl TokenConfig {
    /// Form bounds.
    pub fn validate(&self) -> Result<(), TokenError> {
        check("length", self.length, &LENGTH_RANGE)?;
        check("count", self.count, &COUNT_RANGE)
    }

    fn validate_batch(&self) -> Result<(), TokenError> {
        check("length", self.length, &BATCH_LENGTH_RANGE)?;
        check("count", self.count, &COUNT_RANGE)
    }

    pub fn charset(&self) -> Charset {
        Charset::new(self.numbers, self.symbols)
    }

    pub fn generator(&self) -> TokenGenerator {
        TokenGenerator::new(self.charset(), self.length)
    }
}

pub fn generate_batch(config: &TokenConfig) -> Result<Vec<String>, TokenError> {
    generate_batch_with(config, &mut rand::thread_rng())
}

pub fn generate_batch_with<R>(config: &TokenConfig, rng: &mut R) -> Result<Vec<String>, TokenError>
where
    R: Rng + ?Sized,
{
    config.validate_batch()?;
    let generator = config.generator();
    debug!(
        length = generator.length(),
        count = config.count,
        alphabet = config.charset().size(),
        "generating batch"
    );
    generator.batch_with(rng, config.count)
}

/// Partial change to a form. Unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FormUpdate {
    pub length: Option<usize>,
    pub numbers: Option<bool>,
    pub symbols: Option<bool>,
    pub count: Option<usize>,
}

impl FormUpdate {
    fn applied_to(&self, config: &TokenConfig) -> TokenConfig {
        TokenConfig {
            length: self.length.unwrap_or(config.length),
            numbers: self.numbers.unwrap_or(config.numbers),
            symbols: self.symbols.unwrap_or(config.symbols),
            count: self.count.unwrap_or(config.count),
        }
    }
}

/// A configuration together with the batch generated for it. The batch is
/// always the one produced by the current configuration.
#[derive(Debug, Clone, Serialize)]
pub struct TokenForm {
    config: TokenConfig,
    tokens: Vec<String>,
}

impl TokenForm {
    pub fn new(config: TokenConfig) -> Result<Self, TokenError> {
        Self::new_with(config, &mut rand::thread_rng())
    }

    pub fn new_with<R>(config: TokenConfig, rng: &mut R) -> Result<Self, TokenError>
    where
        R: Rng + ?Sized,
    {
        config.validate()?;
        let tokens = generate_batch_with(&config, rng)?;
        Ok(Self { config, tokens })
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn apply(&mut self, update: FormUpdate) -> Result<(), TokenError> {
        self.apply_with(update, &mut rand::thread_rng())
    }

    /// Any change recomputes the whole batch. On error nothing changes.
    pub fn apply_with<R>(&mut self, update: FormUpdate, rng: &mut R) -> Result<(), TokenError>
    where
        R: Rng + ?Sized,
    {
        let config = update.applied_to(&self.config);
        *self = Self::new_with(config, rng)?;
        Ok(())
    }

    pub fn regenerate(&mut self) -> Result<(), TokenError> {
        self.apply(FormUpdate::default())
    }
}
