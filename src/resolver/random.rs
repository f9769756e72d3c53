//! Random variables.

use rand::Rng;

use crate::snippet::Variable;

use super::VariableResolver;

/// Answers `RANDOM` (six decimal digits) and `RANDOM_HEX` (six hexadecimal
/// digits), drawing fresh from the source on every call. No seeding, no
/// state between calls.
pub struct RandomResolver {
    draw: Box<dyn Fn() -> u32>,
}

impl RandomResolver {
    pub fn new() -> Self {
        Self::with_source(|| rand::thread_rng().gen())
    }

    /// Replace the draw source, e.g. with a fixed value in tests.
    pub fn with_source(draw: impl Fn() -> u32 + 'static) -> Self {
        Self {
            draw: Box::new(draw),
        }
    }
}

impl Default for RandomResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableResolver for RandomResolver {
    fn resolve(&self, variable: &Variable<'_>) -> Option<String> {
        match variable.name {
            "RANDOM" => Some(format!("{:06}", (self.draw)() % 1_000_000)),
            "RANDOM_HEX" => Some(format!("{:06x}", (self.draw)() % 0x100_0000)),
            _ => None,
        }
    }
}
