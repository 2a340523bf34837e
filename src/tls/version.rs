use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Display label for a record-layer or handshake protocol version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsVersionLabel {
    pub name: Cow<'static, str>,
    /// `false` when the version is not a recognised SSL/TLS/DTLS value
    pub known: bool,
}

/// Label a protocol version as seen on the wire.
///
/// Draft TLS 1.3 versions (`0x7f00..=0x7fff`) share one label; anything
/// unrecognised is rendered as `TLS (XXXX)` and flagged unknown.
pub fn tls_version_label(version: u16) -> TlsVersionLabel {
    let name = match version {
        0x0300 => "SSLv3",
        0x0301 => "TLSv1",
        0x0302 => "TLSv1.1",
        0x0303 => "TLSv1.2",
        0x0304 => "TLSv1.3",
        0xfb1a => "TLSv1.3 (Fizz)",
        0xfeff => "DTLSv1.0",
        0xfefd => "DTLSv1.2",
        0x7f00..=0x7fff => "TLSv1.3 (draft)",
        _ => {
            return TlsVersionLabel {
                name: Cow::Owned(format!("TLS ({:04X})", version)),
                known: false,
            }
        }
    };

    TlsVersionLabel {
        name: Cow::Borrowed(name),
        known: true,
    }
}
