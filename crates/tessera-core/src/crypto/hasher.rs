//! Keyed one-way hashing.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{Error, ErrorKind, Result};

type HmacSha256 = Hmac<Sha256>;

/// Length in characters of a hex-encoded digest.
pub const DIGEST_LEN: usize = 64;

/// A keyed one-way hash over a configured secret.
///
/// Produces lowercase hex HMAC-SHA256 digests. The same construction is
/// used for password hashes and for deriving token storage keys, so two
/// deployments with different secrets produce disjoint digest spaces.
#[derive(Clone)]
pub struct Hasher {
    mac: HmacSha256,
}

impl Hasher {
    /// Creates a hasher keyed with the given secret.
    ///
    /// # Errors
    ///
    /// Returns an error if the HMAC instance cannot be constructed from
    /// the secret.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(secret.as_ref()).map_err(|err| {
            Error::new(ErrorKind::Crypto)
                .with_message("failed to construct keyed hash")
                .with_source(err)
        })?;

        Ok(Self { mac })
    }

    /// Returns the hex digest of the given input.
    pub fn digest(&self, input: impl AsRef<[u8]>) -> String {
        let mut mac = self.mac.clone();
        mac.update(input.as_ref());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material is never printed.
        f.debug_struct("Hasher").finish_non_exhaustive()
    }
}
