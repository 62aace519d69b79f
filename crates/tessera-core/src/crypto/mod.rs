//! Cryptographic primitives for credential handling.
//!
//! Everything here is deliberately one-way: passwords and token secrets
//! are folded through the keyed [`Hasher`] and only the digests are ever
//! stored or compared.

mod hasher;
mod random;

pub use hasher::{DIGEST_LEN, Hasher};
pub use random::random_string;
