use rand::{rngs::StdRng, Rng, SeedableRng};
use sha2::{Digest, Sha256};

/// Picks among equivalent phrasings of the same narrative.
///
/// Always seeded explicitly so a reading can be reproduced.
pub struct VariantSelector {
    rng: StdRng,
}

impl VariantSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from a pinned value when present, else from a hash of `subject`.
    pub fn for_subject(pinned_seed: Option<u64>, subject: &str) -> Self {
        Self::new(pinned_seed.unwrap_or_else(|| stable_hash64(subject)))
    }

    pub fn pick<'a, T>(&mut self, variants: &'a [T]) -> Option<&'a T> {
        if variants.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..variants.len());
        variants.get(index)
    }
}

pub fn stable_hash64(value: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
