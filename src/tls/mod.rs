//! Static TLS lookups used when tagging handshake metadata
//!
//! Pure mappings from numeric identifiers to names and classifications. All
//! results are either `'static` strings or freshly owned ones; there is no
//! shared formatting buffer.

pub mod cipher;
pub mod version;

pub use cipher::{cipher_name, cipher_strength, known_cipher_name, CipherStrength};
pub use version::{tls_version_label, TlsVersionLabel};
