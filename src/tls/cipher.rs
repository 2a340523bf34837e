//! Cipher-suite names and strength classification
//!
//! Identifiers are the 16-bit IANA TLS cipher-suite values; the 24-bit SSLv2
//! cipher kinds (`0x010080` and up) share the same namespace.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Security classification of a negotiated cipher suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherStrength {
    Safe,
    /// No forward secrecy or a legacy block cipher
    Weak,
    /// RC4-based
    Insecure,
}

impl CipherStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherStrength::Safe => "safe",
            CipherStrength::Weak => "weak",
            CipherStrength::Insecure => "insecure",
        }
    }
}

impl std::fmt::Display for CipherStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a cipher suite; anything not listed as weak or insecure is safe
pub fn cipher_strength(id: u32) -> CipherStrength {
    match id {
        // TLS_ECDHE_RSA_WITH_RC4_128_SHA, TLS_RSA_WITH_RC4_128_SHA, TLS_RSA_WITH_RC4_128_MD5
        0xc011 | 0x0005 | 0x0004 => CipherStrength::Insecure,
        0x009d | 0x003d | 0x0035 | 0x0084 | 0x009c | 0x003c | 0x002f | 0x0041 | 0xc012
        | 0x0016 | 0x000a | 0x0096 | 0x0007 => CipherStrength::Weak,
        _ => CipherStrength::Safe,
    }
}

/// Look up the registered name of a cipher suite.
///
/// Unknown identifiers are rendered as `0X` followed by at least four
/// upper-case hex digits.
pub fn cipher_name(id: u32) -> Cow<'static, str> {
    match known_cipher_name(id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("0X{:04X}", id)),
    }
}

/// Registered name of a cipher suite, if known
pub fn known_cipher_name(id: u32) -> Option<&'static str> {
    let name = match id {
        0x000000 => "TLS_NULL_WITH_NULL_NULL",
        0x000001 => "TLS_RSA_WITH_NULL_MD5",
        0x000002 => "TLS_RSA_WITH_NULL_SHA",
        0x000003 => "TLS_RSA_EXPORT_WITH_RC4_40_MD5",
        0x000004 => "TLS_RSA_WITH_RC4_128_MD5",
        0x000005 => "TLS_RSA_WITH_RC4_128_SHA",
        0x000006 => "TLS_RSA_EXPORT_WITH_RC2_CBC_40_MD5",
        0x000007 => "TLS_RSA_WITH_IDEA_CBC_SHA",
        0x000008 => "TLS_RSA_EXPORT_WITH_DES40_CBC_SHA",
        0x000009 => "TLS_RSA_WITH_DES_CBC_SHA",
        0x00000a => "TLS_RSA_WITH_3DES_EDE_CBC_SHA",
        0x00000b => "TLS_DH_DSS_EXPORT_WITH_DES40_CBC_SHA",
        0x00000c => "TLS_DH_DSS_WITH_DES_CBC_SHA",
        0x00000d => "TLS_DH_DSS_WITH_3DES_EDE_CBC_SHA",
        0x00000e => "TLS_DH_RSA_EXPORT_WITH_DES40_CBC_SHA",
        0x00000f => "TLS_DH_RSA_WITH_DES_CBC_SHA",
        0x000010 => "TLS_DH_RSA_WITH_3DES_EDE_CBC_SHA",
        0x000011 => "TLS_DHE_DSS_EXPORT_WITH_DES40_CBC_SHA",
        0x000012 => "TLS_DHE_DSS_WITH_DES_CBC_SHA",
        0x000013 => "TLS_DHE_DSS_WITH_3DES_EDE_CBC_SHA",
        0x000014 => "TLS_DHE_RSA_EXPORT_WITH_DES40_CBC_SHA",
        0x000015 => "TLS_DHE_RSA_WITH_DES_CBC_SHA",
        0x000016 => "TLS_DHE_RSA_WITH_3DES_EDE_CBC_SHA",
        0x000017 => "TLS_DH_anon_EXPORT_WITH_RC4_40_MD5",
        0x000018 => "TLS_DH_anon_WITH_RC4_128_MD5",
        0x000019 => "TLS_DH_anon_EXPORT_WITH_DES40_CBC_SHA",
        0x00001a => "TLS_DH_anon_WITH_DES_CBC_SHA",
        0x00001b => "TLS_DH_anon_WITH_3DES_EDE_CBC_SHA",
        0x00001c => "TLS_FORTEZZA_KEA_WITH_NULL_SHA",
        0x00001d => "TLS_FORTEZZA_KEA_WITH_FORTEZZA_CBC_SHA",
        0x00001e => "TLS_KRB5_WITH_DES_CBC_SHA",
        0x00001f => "TLS_KRB5_WITH_3DES_EDE_CBC_SHA",
        0x000020 => "TLS_KRB5_WITH_RC4_128_SHA",
        0x000021 => "TLS_KRB5_WITH_IDEA_CBC_SHA",
        0x000022 => "TLS_KRB5_WITH_DES_CBC_MD5",
        0x000023 => "TLS_KRB5_WITH_3DES_EDE_CBC_MD5",
        0x000024 => "TLS_KRB5_WITH_RC4_128_MD5",
        0x000025 => "TLS_KRB5_WITH_IDEA_CBC_MD5",
        0x000026 => "TLS_KRB5_EXPORT_WITH_DES_CBC_40_SHA",
        0x000027 => "TLS_KRB5_EXPORT_WITH_RC2_CBC_40_SHA",
        0x000028 => "TLS_KRB5_EXPORT_WITH_RC4_40_SHA",
        0x000029 => "TLS_KRB5_EXPORT_WITH_DES_CBC_40_MD5",
        0x00002a => "TLS_KRB5_EXPORT_WITH_RC2_CBC_40_MD5",
        0x00002b => "TLS_KRB5_EXPORT_WITH_RC4_40_MD5",
        0x00002c => "TLS_PSK_WITH_NULL_SHA",
        0x00002d => "TLS_DHE_PSK_WITH_NULL_SHA",
        0x00002e => "TLS_RSA_PSK_WITH_NULL_SHA",
        0x00002f => "TLS_RSA_WITH_AES_128_CBC_SHA",
        0x000030 => "TLS_DH_DSS_WITH_AES_128_CBC_SHA",
        0x000031 => "TLS_DH_RSA_WITH_AES_128_CBC_SHA",
        0x000032 => "TLS_DHE_DSS_WITH_AES_128_CBC_SHA",
        0x000033 => "TLS_DHE_RSA_WITH_AES_128_CBC_SHA",
        0x000034 => "TLS_DH_anon_WITH_AES_128_CBC_SHA",
        0x000035 => "TLS_RSA_WITH_AES_256_CBC_SHA",
        0x000036 => "TLS_DH_DSS_WITH_AES_256_CBC_SHA",
        0x000037 => "TLS_DH_RSA_WITH_AES_256_CBC_SHA",
        0x000038 => "TLS_DHE_DSS_WITH_AES_256_CBC_SHA",
        0x000039 => "TLS_DHE_RSA_WITH_AES_256_CBC_SHA",
        0x00003a => "TLS_DH_anon_WITH_AES_256_CBC_SHA",
        0x00003b => "TLS_RSA_WITH_NULL_SHA256",
        0x00003c => "TLS_RSA_WITH_AES_128_CBC_SHA256",
        0x00003d => "TLS_RSA_WITH_AES_256_CBC_SHA256",
        0x00003e => "TLS_DH_DSS_WITH_AES_128_CBC_SHA256",
        0x00003f => "TLS_DH_RSA_WITH_AES_128_CBC_SHA256",
        0x000040 => "TLS_DHE_DSS_WITH_AES_128_CBC_SHA256",
        0x000041 => "TLS_RSA_WITH_CAMELLIA_128_CBC_SHA",
        0x000042 => "TLS_DH_DSS_WITH_CAMELLIA_128_CBC_SHA",
        0x000043 => "TLS_DH_RSA_WITH_CAMELLIA_128_CBC_SHA",
        0x000044 => "TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA",
        0x000045 => "TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA",
        0x000046 => "TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA",
        0x000047 => "TLS_ECDH_ECDSA_WITH_NULL_SHA",
        0x000048 => "TLS_ECDH_ECDSA_WITH_RC4_128_SHA",
        0x000049 => "TLS_ECDH_ECDSA_WITH_DES_CBC_SHA",
        0x00004a => "TLS_ECDH_ECDSA_WITH_3DES_EDE_CBC_SHA",
        0x00004b => "TLS_ECDH_ECDSA_WITH_AES_128_CBC_SHA",
        0x00004c => "TLS_ECDH_ECDSA_WITH_AES_256_CBC_SHA",
        0x000060 => "TLS_RSA_EXPORT1024_WITH_RC4_56_MD5",
        0x000061 => "TLS_RSA_EXPORT1024_WITH_RC2_CBC_56_MD5",
        0x000062 => "TLS_RSA_EXPORT1024_WITH_DES_CBC_SHA",
        0x000063 => "TLS_DHE_DSS_EXPORT1024_WITH_DES_CBC_SHA",
        0x000064 => "TLS_RSA_EXPORT1024_WITH_RC4_56_SHA",
        0x000065 => "TLS_DHE_DSS_EXPORT1024_WITH_RC4_56_SHA",
        0x000066 => "TLS_DHE_DSS_WITH_RC4_128_SHA",
        0x000067 => "TLS_DHE_RSA_WITH_AES_128_CBC_SHA256",
        0x000068 => "TLS_DH_DSS_WITH_AES_256_CBC_SHA256",
        0x000069 => "TLS_DH_RSA_WITH_AES_256_CBC_SHA256",
        0x00006a => "TLS_DHE_DSS_WITH_AES_256_CBC_SHA256",
        0x00006b => "TLS_DHE_RSA_WITH_AES_256_CBC_SHA256",
        0x00006c => "TLS_DH_anon_WITH_AES_128_CBC_SHA256",
        0x00006d => "TLS_DH_anon_WITH_AES_256_CBC_SHA256",
        0x000084 => "TLS_RSA_WITH_CAMELLIA_256_CBC_SHA",
        0x000085 => "TLS_DH_DSS_WITH_CAMELLIA_256_CBC_SHA",
        0x000086 => "TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA",
        0x000087 => "TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA",
        0x000088 => "TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA",
        0x000089 => "TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA",
        0x00008a => "TLS_PSK_WITH_RC4_128_SHA",
        0x00008b => "TLS_PSK_WITH_3DES_EDE_CBC_SHA",
        0x00008c => "TLS_PSK_WITH_AES_128_CBC_SHA",
        0x00008d => "TLS_PSK_WITH_AES_256_CBC_SHA",
        0x00008e => "TLS_DHE_PSK_WITH_RC4_128_SHA",
        0x00008f => "TLS_DHE_PSK_WITH_3DES_EDE_CBC_SHA",
        0x000090 => "TLS_DHE_PSK_WITH_AES_128_CBC_SHA",
        0x000091 => "TLS_DHE_PSK_WITH_AES_256_CBC_SHA",
        0x000092 => "TLS_RSA_PSK_WITH_RC4_128_SHA",
        0x000093 => "TLS_RSA_PSK_WITH_3DES_EDE_CBC_SHA",
        0x000094 => "TLS_RSA_PSK_WITH_AES_128_CBC_SHA",
        0x000095 => "TLS_RSA_PSK_WITH_AES_256_CBC_SHA",
        0x000096 => "TLS_RSA_WITH_SEED_CBC_SHA",
        0x000097 => "TLS_DH_DSS_WITH_SEED_CBC_SHA",
        0x000098 => "TLS_DH_RSA_WITH_SEED_CBC_SHA",
        0x000099 => "TLS_DHE_DSS_WITH_SEED_CBC_SHA",
        0x00009a => "TLS_DHE_RSA_WITH_SEED_CBC_SHA",
        0x00009b => "TLS_DH_anon_WITH_SEED_CBC_SHA",
        0x00009c => "TLS_RSA_WITH_AES_128_GCM_SHA256",
        0x00009d => "TLS_RSA_WITH_AES_256_GCM_SHA384",
        0x00009e => "TLS_DHE_RSA_WITH_AES_128_GCM_SHA256",
        0x00009f => "TLS_DHE_RSA_WITH_AES_256_GCM_SHA384",
        0x0000a0 => "TLS_DH_RSA_WITH_AES_128_GCM_SHA256",
        0x0000a1 => "TLS_DH_RSA_WITH_AES_256_GCM_SHA384",
        0x0000a2 => "TLS_DHE_DSS_WITH_AES_128_GCM_SHA256",
        0x0000a3 => "TLS_DHE_DSS_WITH_AES_256_GCM_SHA384",
        0x0000a4 => "TLS_DH_DSS_WITH_AES_128_GCM_SHA256",
        0x0000a5 => "TLS_DH_DSS_WITH_AES_256_GCM_SHA384",
        0x0000a6 => "TLS_DH_anon_WITH_AES_128_GCM_SHA256",
        0x0000a7 => "TLS_DH_anon_WITH_AES_256_GCM_SHA384",
        0x0000a8 => "TLS_PSK_WITH_AES_128_GCM_SHA256",
        0x0000a9 => "TLS_PSK_WITH_AES_256_GCM_SHA384",
        0x0000aa => "TLS_DHE_PSK_WITH_AES_128_GCM_SHA256",
        0x0000ab => "TLS_DHE_PSK_WITH_AES_256_GCM_SHA384",
        0x0000ac => "TLS_RSA_PSK_WITH_AES_128_GCM_SHA256",
        0x0000ad => "TLS_RSA_PSK_WITH_AES_256_GCM_SHA384",
        0x0000ae => "TLS_PSK_WITH_AES_128_CBC_SHA256",
        0x0000af => "TLS_PSK_WITH_AES_256_CBC_SHA384",
        0x0000b0 => "TLS_PSK_WITH_NULL_SHA256",
        0x0000b1 => "TLS_PSK_WITH_NULL_SHA384",
        0x0000b2 => "TLS_DHE_PSK_WITH_AES_128_CBC_SHA256",
        0x0000b3 => "TLS_DHE_PSK_WITH_AES_256_CBC_SHA384",
        0x0000b4 => "TLS_DHE_PSK_WITH_NULL_SHA256",
        0x0000b5 => "TLS_DHE_PSK_WITH_NULL_SHA384",
        0x0000b6 => "TLS_RSA_PSK_WITH_AES_128_CBC_SHA256",
        0x0000b7 => "TLS_RSA_PSK_WITH_AES_256_CBC_SHA384",
        0x0000b8 => "TLS_RSA_PSK_WITH_NULL_SHA256",
        0x0000b9 => "TLS_RSA_PSK_WITH_NULL_SHA384",
        0x0000ba => "TLS_RSA_WITH_CAMELLIA_128_CBC_SHA256",
        0x0000bb => "TLS_DH_DSS_WITH_CAMELLIA_128_CBC_SHA256",
        0x0000bc => "TLS_DH_RSA_WITH_CAMELLIA_128_CBC_SHA256",
        0x0000bd => "TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA256",
        0x0000be => "TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA256",
        0x0000bf => "TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA256",
        0x0000c0 => "TLS_RSA_WITH_CAMELLIA_256_CBC_SHA256",
        0x0000c1 => "TLS_DH_DSS_WITH_CAMELLIA_256_CBC_SHA256",
        0x0000c2 => "TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA256",
        0x0000c3 => "TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA256",
        0x0000c4 => "TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA256",
        0x0000c5 => "TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA256",
        0x0000ff => "TLS_EMPTY_RENEGOTIATION_INFO_SCSV",
        0x00c001 => "TLS_ECDH_ECDSA_WITH_NULL_SHA",
        0x00c002 => "TLS_ECDH_ECDSA_WITH_RC4_128_SHA",
        0x00c003 => "TLS_ECDH_ECDSA_WITH_3DES_EDE_CBC_SHA",
        0x00c004 => "TLS_ECDH_ECDSA_WITH_AES_128_CBC_SHA",
        0x00c005 => "TLS_ECDH_ECDSA_WITH_AES_256_CBC_SHA",
        0x00c006 => "TLS_ECDHE_ECDSA_WITH_NULL_SHA",
        0x00c007 => "TLS_ECDHE_ECDSA_WITH_RC4_128_SHA",
        0x00c008 => "TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA",
        0x00c009 => "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA",
        0x00c00a => "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA",
        0x00c00b => "TLS_ECDH_RSA_WITH_NULL_SHA",
        0x00c00c => "TLS_ECDH_RSA_WITH_RC4_128_SHA",
        0x00c00d => "TLS_ECDH_RSA_WITH_3DES_EDE_CBC_SHA",
        0x00c00e => "TLS_ECDH_RSA_WITH_AES_128_CBC_SHA",
        0x00c00f => "TLS_ECDH_RSA_WITH_AES_256_CBC_SHA",
        0x00c010 => "TLS_ECDHE_RSA_WITH_NULL_SHA",
        0x00c011 => "TLS_ECDHE_RSA_WITH_RC4_128_SHA",
        0x00c012 => "TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA",
        0x00c013 => "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA",
        0x00c014 => "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA",
        0x00c015 => "TLS_ECDH_anon_WITH_NULL_SHA",
        0x00c016 => "TLS_ECDH_anon_WITH_RC4_128_SHA",
        0x00c017 => "TLS_ECDH_anon_WITH_3DES_EDE_CBC_SHA",
        0x00c018 => "TLS_ECDH_anon_WITH_AES_128_CBC_SHA",
        0x00c019 => "TLS_ECDH_anon_WITH_AES_256_CBC_SHA",
        0x00c01a => "TLS_SRP_SHA_WITH_3DES_EDE_CBC_SHA",
        0x00c01b => "TLS_SRP_SHA_RSA_WITH_3DES_EDE_CBC_SHA",
        0x00c01c => "TLS_SRP_SHA_DSS_WITH_3DES_EDE_CBC_SHA",
        0x00c01d => "TLS_SRP_SHA_WITH_AES_128_CBC_SHA",
        0x00c01e => "TLS_SRP_SHA_RSA_WITH_AES_128_CBC_SHA",
        0x00c01f => "TLS_SRP_SHA_DSS_WITH_AES_128_CBC_SHA",
        0x00c020 => "TLS_SRP_SHA_WITH_AES_256_CBC_SHA",
        0x00c021 => "TLS_SRP_SHA_RSA_WITH_AES_256_CBC_SHA",
        0x00c022 => "TLS_SRP_SHA_DSS_WITH_AES_256_CBC_SHA",
        0x00c023 => "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256",
        0x00c024 => "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384",
        0x00c025 => "TLS_ECDH_ECDSA_WITH_AES_128_CBC_SHA256",
        0x00c026 => "TLS_ECDH_ECDSA_WITH_AES_256_CBC_SHA384",
        0x00c027 => "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256",
        0x00c028 => "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384",
        0x00c029 => "TLS_ECDH_RSA_WITH_AES_128_CBC_SHA256",
        0x00c02a => "TLS_ECDH_RSA_WITH_AES_256_CBC_SHA384",
        0x00c02b => "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
        0x00c02c => "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
        0x00c02d => "TLS_ECDH_ECDSA_WITH_AES_128_GCM_SHA256",
        0x00c02e => "TLS_ECDH_ECDSA_WITH_AES_256_GCM_SHA384",
        0x00c02f => "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
        0x00c030 => "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
        0x00c031 => "TLS_ECDH_RSA_WITH_AES_128_GCM_SHA256",
        0x00c032 => "TLS_ECDH_RSA_WITH_AES_256_GCM_SHA384",
        0x00c033 => "TLS_ECDHE_PSK_WITH_RC4_128_SHA",
        0x00c034 => "TLS_ECDHE_PSK_WITH_3DES_EDE_CBC_SHA",
        0x00c035 => "TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA",
        0x00c036 => "TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA",
        0x00c037 => "TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA256",
        0x00c038 => "TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA384",
        0x00c039 => "TLS_ECDHE_PSK_WITH_NULL_SHA",
        0x00c03a => "TLS_ECDHE_PSK_WITH_NULL_SHA256",
        0x00c03b => "TLS_ECDHE_PSK_WITH_NULL_SHA384",
        0x00cc13 => "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
        0x00cc14 => "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256",
        0x00cc15 => "TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
        0x00cca8 => "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
        0x00cca9 => "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256",
        0x00ccaa => "TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
        0x00ccab => "TLS_PSK_WITH_CHACHA20_POLY1305_SHA256",
        0x00ccac => "TLS_ECDHE_PSK_WITH_CHACHA20_POLY1305_SHA256",
        0x00ccad => "TLS_DHE_PSK_WITH_CHACHA20_POLY1305_SHA256",
        0x00ccae => "TLS_RSA_PSK_WITH_CHACHA20_POLY1305_SHA256",
        0x00e410 => "TLS_RSA_WITH_ESTREAM_SALSA20_SHA1",
        0x00e411 => "TLS_RSA_WITH_SALSA20_SHA1",
        0x00e412 => "TLS_ECDHE_RSA_WITH_ESTREAM_SALSA20_SHA1",
        0x00e413 => "TLS_ECDHE_RSA_WITH_SALSA20_SHA1",
        0x00e414 => "TLS_ECDHE_ECDSA_WITH_ESTREAM_SALSA20_SHA1",
        0x00e415 => "TLS_ECDHE_ECDSA_WITH_SALSA20_SHA1",
        0x00e416 => "TLS_PSK_WITH_ESTREAM_SALSA20_SHA1",
        0x00e417 => "TLS_PSK_WITH_SALSA20_SHA1",
        0x00e418 => "TLS_ECDHE_PSK_WITH_ESTREAM_SALSA20_SHA1",
        0x00e419 => "TLS_ECDHE_PSK_WITH_SALSA20_SHA1",
        0x00e41a => "TLS_RSA_PSK_WITH_ESTREAM_SALSA20_SHA1",
        0x00e41b => "TLS_RSA_PSK_WITH_SALSA20_SHA1",
        0x00e41c => "TLS_DHE_PSK_WITH_ESTREAM_SALSA20_SHA1",
        0x00e41d => "TLS_DHE_PSK_WITH_SALSA20_SHA1",
        0x00e41e => "TLS_DHE_RSA_WITH_ESTREAM_SALSA20_SHA1",
        0x00e41f => "TLS_DHE_RSA_WITH_SALSA20_SHA1",
        0x00fefe => "TLS_RSA_FIPS_WITH_DES_CBC_SHA",
        0x00feff => "TLS_RSA_FIPS_WITH_3DES_EDE_CBC_SHA",
        0x00ffe0 => "TLS_RSA_FIPS_WITH_3DES_EDE_CBC_SHA",
        0x00ffe1 => "TLS_RSA_FIPS_WITH_DES_CBC_SHA",
        0x010080 => "SSL2_RC4_128_WITH_MD5",
        0x020080 => "SSL2_RC4_128_EXPORT40_WITH_MD5",
        0x030080 => "SSL2_RC2_128_CBC_WITH_MD5",
        0x040080 => "SSL2_RC2_128_CBC_EXPORT40_WITH_MD5",
        0x050080 => "SSL2_IDEA_128_CBC_WITH_MD5",
        0x060040 => "SSL2_DES_64_CBC_WITH_MD5",
        0x0700c0 => "SSL2_DES_192_EDE3_CBC_WITH_MD5",
        0x080080 => "SSL2_RC4_64_WITH_MD5",
        0x001301 => "TLS_AES_128_GCM_SHA256",
        0x001302 => "TLS_AES_256_GCM_SHA384",
        0x001303 => "TLS_CHACHA20_POLY1305_SHA256",
        0x001304 => "TLS_AES_128_CCM_SHA256",
        0x001305 => "TLS_AES_128_CCM_8_SHA256",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_cipher_names() {
        assert_eq!(cipher_name(0x0000), "TLS_NULL_WITH_NULL_NULL");
        assert_eq!(cipher_name(0xc02f), "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256");
        assert_eq!(cipher_name(0x1301), "TLS_AES_128_GCM_SHA256");
        assert_eq!(cipher_name(0xcca8), "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256");
        assert_eq!(cipher_name(0x0700c0), "SSL2_DES_192_EDE3_CBC_WITH_MD5");
    }

    #[test]
    fn test_unknown_cipher_formats_hex() {
        assert_eq!(cipher_name(0x1a2b), "0X1A2B");
        assert_eq!(cipher_name(0x00fe), "0X00FE");
        assert!(known_cipher_name(0x00fe).is_none());
        assert!(known_cipher_name(0x00ab).is_some());
        assert_eq!(cipher_name(0x123456), "0X123456");
        assert!(known_cipher_name(0x1a2b).is_none());
    }

    #[test]
    fn test_cipher_strength() {
        assert_eq!(cipher_strength(0x0004), CipherStrength::Insecure);
        assert_eq!(cipher_strength(0xc011), CipherStrength::Insecure);
        assert_eq!(cipher_strength(0x002f), CipherStrength::Weak);
        assert_eq!(cipher_strength(0x000a), CipherStrength::Weak);
        assert_eq!(cipher_strength(0xc02f), CipherStrength::Safe);
        assert_eq!(cipher_strength(0x1301), CipherStrength::Safe);
        assert_eq!(cipher_strength(0xdead), CipherStrength::Safe);
    }

    #[test]
    fn test_strength_serialises_lowercase() {
        let json = serde_json::to_string(&CipherStrength::Insecure).unwrap();
        assert_eq!(json, "\"insecure\"");
        assert_eq!(CipherStrength::Weak.to_string(), "weak");
    }
}
