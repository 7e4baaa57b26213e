use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::snapshot::ArenaSnapshot;
use crate::types::{Facing, Intent};

/// SHA-256 over a per-tick intent transcript.
pub fn hash_intents(transcript: &[[Intent; 2]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for tick_intents in transcript {
        for intent in tick_intents {
            hasher.update([intent.buttons]);
            let face = match intent.face {
                None => 0u8,
                Some(Facing::Left) => 1,
                Some(Facing::Right) => 2,
            };
            hasher.update([face]);
        }
    }
    hasher.finalize().into()
}

/// SHA-256 over a snapshot's JSON encoding.
pub fn hash_snapshot(snapshot: &ArenaSnapshot) -> Result<[u8; 32]> {
    let bytes = serde_json::to_vec(snapshot)?;
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    Ok(hasher.finalize().into())
}

/// SHA-256 commitment of the seed.
pub fn hash_seed(seed: u32) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.finalize().into()
}
