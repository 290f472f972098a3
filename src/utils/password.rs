//! Password hashing and verification.
//!
//! Credentials are stored as a hex PBKDF2-HMAC-SHA512 digest alongside the
//! hex salt used to derive it. The parameters below are shared by hashing
//! and verification; changing them invalidates every stored credential, so
//! they are pinned by tests rather than made configurable.

use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha512;
use subtle::ConstantTimeEq;

const PBKDF2_ROUNDS: u32 = 1_000;
const DIGEST_LEN: usize = 64;
const SALT_LEN: usize = 16;

/// Fixed salt for the decoy derivation performed when no account matches a
/// login email. Keeps the "no such user" path as slow as a real verify.
const DECOY_SALT: &str = "d3b07384d113edec49eaa6238ad5ff00";

/// A freshly derived credential, ready for storage.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedCredential {
    pub digest: String,
    pub salt: String,
}

impl std::fmt::Debug for HashedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashedCredential")
            .field("digest", &"[REDACTED]")
            .field("salt", &self.salt)
            .finish()
    }
}

/// Stateless hasher handle, constructed once and carried in the application
/// state. Derivation is CPU-bound; callers run it on a blocking thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a password under a fresh random salt.
    pub fn hash(&self, password: &str) -> HashedCredential {
        let mut salt_bytes = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt_bytes);
        let salt = hex::encode(salt_bytes);
        let digest = hex::encode(derive(password, &salt));

        HashedCredential { digest, salt }
    }

    /// Re-derive the candidate under the stored salt and compare against the
    /// stored digest without leaking the position of the first mismatch.
    pub fn verify(&self, candidate: &str, salt: &str, expected_digest: &str) -> bool {
        let derived = hex::encode(derive(candidate, salt));
        derived.as_bytes().ct_eq(expected_digest.as_bytes()).into()
    }

    /// Always false, after burning a full derivation against [`DECOY_SALT`]
    /// so that a login for an unknown email takes as long as a failed verify
    /// for a known one. The all-zero digest is unreachable from PBKDF2
    /// output, so the comparison can never succeed.
    pub fn verify_against_missing_account(&self, candidate: &str) -> bool {
        self.verify(candidate, DECOY_SALT, &hex::encode([0u8; DIGEST_LEN]))
    }
}

fn derive(password: &str, salt: &str) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    pbkdf2::pbkdf2_hmac::<Sha512>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut out,
    );
    out
}
