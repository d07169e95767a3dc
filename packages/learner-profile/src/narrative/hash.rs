use sha2::{Digest, Sha256};

/// Cache key for a rendered narrative.
///
/// SHA256 of the whitespace-normalized narrative. Hosts compare it with the
/// key stored next to an embedding to decide whether the learner's vector
/// needs regenerating. Unlike search-text hashes, case and punctuation are
/// kept: they change what the embedding model sees.
pub fn narrative_hash(narrative: &str) -> String {
    let normalized = narrative.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    format!("{:x}", hasher.finalize())
}
