use sha2::{Digest, Sha256};

/// Hash reference (hex-encoded SHA256)
pub type HashRef = String;

pub fn compute_hash(data: &[u8]) -> HashRef {
    hex::encode(Sha256::digest(data))
}

/// Hash of the JSON encoding; BTreeMap-backed state serializes deterministically
pub fn compute_json_hash<T: serde::Serialize>(data: &T) -> Result<HashRef, serde_json::Error> {
    let json = serde_json::to_vec(data)?;
    Ok(compute_hash(&json))
}
