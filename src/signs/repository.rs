//! Where signs come from

use super::sign::{Sign, SignKey};

/// Batch lookup of signs
///
/// Returns every sign answering to at least one of the keys, in any order. Keys with no
/// sign are simply missing from the result.
pub trait SignRepository {
    fn search_many(&self, keys: &[SignKey]) -> Vec<Sign>;
}

/// A sign list held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySignRepository {
    signs: Vec<Sign>,
}

impl MemorySignRepository {
    pub fn new(signs: Vec<Sign>) -> Self {
        Self { signs }
    }

    /// Load a JSON array of signs
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    pub fn create(&mut self, sign: Sign) {
        self.signs.push(sign);
    }

    pub fn len(&self) -> usize {
        self.signs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }
}

impl SignRepository for MemorySignRepository {
    fn search_many(&self, keys: &[SignKey]) -> Vec<Sign> {
        self.signs
            .iter()
            .filter(|sign| keys.iter().any(|key| sign.matches(key)))
            .cloned()
            .collect()
    }
}
