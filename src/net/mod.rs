//! Address and host-name predicates used alongside payload classification

pub mod punycode;

pub use punycode::is_punycode;

use crate::errors::AppError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An IPv4 network in `a.b.c.d/bits` form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Prefix {
    pub net: Ipv4Addr,
    pub bits: u32,
}

impl Ipv4Prefix {
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        net_match(ip, self.net, self.bits)
    }
}

impl FromStr for Ipv4Prefix {
    type Err = AppError;

    /// A bare address is treated as a /32
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, bits) = match s.split_once('/') {
            Some((addr, bits)) => {
                let bits = bits
                    .parse::<u32>()
                    .ok()
                    .filter(|bits| *bits <= 32)
                    .ok_or_else(|| {
                        AppError::InvalidData(format!("Invalid prefix length in {s:?}"))
                    })?;
                (addr, bits)
            }
            None => (s, 32),
        };
        let net = addr
            .parse::<Ipv4Addr>()
            .map_err(|e| AppError::InvalidData(format!("Invalid IPv4 address {addr:?}: {e}")))?;
        Ok(Self { net, bits })
    }
}

impl std::fmt::Display for Ipv4Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.net, self.bits)
    }
}

/// Check whether `ip` falls inside `net/bits`.
///
/// `bits == 0` matches every address; `bits >= 32` requires an exact match.
pub fn net_match(ip: Ipv4Addr, net: Ipv4Addr, bits: u32) -> bool {
    let mask = prefix_mask(bits);
    (u32::from(ip) & mask) == (u32::from(net) & mask)
}

/// Check whether either endpoint of a flow falls inside `net/bits`
pub fn ips_match(src: Ipv4Addr, dst: Ipv4Addr, net: Ipv4Addr, bits: u32) -> bool {
    net_match(src, net, bits) || net_match(dst, net, bits)
}

#[inline]
fn prefix_mask(bits: u32) -> u32 {
    // checked_shr avoids the overflow on a full 32-bit shift
    !u32::MAX.checked_shr(bits).unwrap_or(0)
}
