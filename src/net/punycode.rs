/// IDNA ACE prefix marking a punycode-encoded label
const ACE_PREFIX: &[u8; 4] = b"xn--";

/// Returns `true` if `host` contains the lower-case `xn--` label prefix.
///
/// Every window is bounded by the slice, so hosts shorter than four bytes are
/// simply not punycode.
pub fn is_punycode(host: &[u8]) -> bool {
    host.windows(ACE_PREFIX.len())
        .any(|window| window == ACE_PREFIX)
}
