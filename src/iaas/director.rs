use crate::state::BoshState;
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

pub const DIRECTOR_USERNAME: &str = "admin";
pub const DIRECTOR_PORT: u16 = 25555;

/// Records the director deployed into an environment's internal network.
pub fn provision(env_id: &str, internal_ip: &str) -> BoshState {
    BoshState {
        director_name: format!("bosh-{}", env_id),
        director_address: format!("https://{}:{}", internal_ip, DIRECTOR_PORT),
        director_username: DIRECTOR_USERNAME.to_string(),
        director_password: format!("p-{}", random_hex(env_id, 24)),
        director_ssl_ca: String::new(),
    }
}

/// Hex string of `len` characters, unique per call.
pub fn random_hex(seed: &str, len: usize) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(nanos.to_le_bytes());
    hasher.update(std::process::id().to_le_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..len.min(digest.len())].to_string()
}
