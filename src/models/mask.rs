//! Network prefix mask.

use super::Addr;
use crate::error::NetError;

/// Maximum length for an IPv4 network prefix (32 bits).
pub const MAX_PREFIX_LEN: u8 = 32;

/// A network mask, counting the leading bits of an address that
/// identify its network.
///
/// Only the prefix length is stored; the bitmask form is derived on
/// demand via [`Mask::as_addr`]. Two masks are equal iff their prefix
/// lengths are equal.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Mask {
    network_bits: u8,
}

impl Mask {
    /// Creates a mask with the given prefix length (0-32).
    pub fn new(network_bits: u8) -> Result<Mask, NetError> {
        if network_bits > MAX_PREFIX_LEN {
            return Err(NetError::Range(format!(
                "prefix length {network_bits} is longer than {MAX_PREFIX_LEN} bits"
            )));
        }
        Ok(Mask { network_bits })
    }

    /// The number of leading network bits in any address applied to
    /// this mask.
    pub const fn network_bits(&self) -> u8 {
        self.network_bits
    }

    /// The number of trailing host-identifier bits.
    pub const fn host_bits(&self) -> u8 {
        MAX_PREFIX_LEN - self.network_bits
    }

    /// The bitmask form of this mask: `network_bits` leading ones
    /// followed by zeros, e.g. /24 -> `255.255.255.0`.
    pub fn as_addr(&self) -> Addr {
        let right_len = self.host_bits() as u32;
        let all_bits = u32::MAX as u64;
        Addr::new(((all_bits >> right_len) << right_len) as u32)
    }

    /// Clears the host bits of `addr`, leaving the network part.
    pub fn apply(&self, addr: Addr) -> Addr {
        self.as_addr().and(addr)
    }

    /// Shrinks the prefix by `amt` bits, widening the network a mask of
    /// this length describes; a negative `amt` widens the prefix
    /// instead. Fails if the result leaves the 0-32 range.
    pub fn shift(&self, amt: i8) -> Result<Mask, NetError> {
        let new_bits = self.network_bits as i16 - amt as i16;
        if !(0..=MAX_PREFIX_LEN as i16).contains(&new_bits) {
            return Err(NetError::Range(format!(
                "shifting /{} by {amt} leaves no valid prefix",
                self.network_bits
            )));
        }
        Mask::new(new_bits as u8)
    }
}
