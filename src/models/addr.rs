//! IPv4 host address value type.

use crate::error::NetError;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single IPv4 address, identifying one host on a network.
///
/// Stored as a plain big-endian `u32`, so the 32-bit range invariant is
/// enforced by the representation itself. All transformations return a
/// new value; nothing is mutated in place. Ordering is numeric on the
/// underlying integer.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Addr {
    num: u32,
}

impl Addr {
    /// The address used to communicate with the local network, `0.0.0.0`.
    pub const LOCAL: Addr = Addr { num: 0 };
    /// The loopback address, `127.0.0.0`.
    pub const LOOPBACK: Addr = Addr::from_octets([127, 0, 0, 0]);
    /// The broadcast address on the local network, `255.255.255.255`.
    pub const BROADCAST: Addr = Addr { num: u32::MAX };

    /// Creates an address from its numeric representation.
    pub const fn new(num: u32) -> Addr {
        Addr { num }
    }

    /// Combines four octets, most significant first.
    pub const fn from_octets(octets: [u8; 4]) -> Addr {
        Addr {
            num: u32::from_be_bytes(octets),
        }
    }

    /// The numeric representation of this address.
    pub const fn num(&self) -> u32 {
        self.num
    }

    /// The four octets of this address, most significant first.
    pub const fn octets(&self) -> [u8; 4] {
        self.num.to_be_bytes()
    }

    /// Bitwise AND with another address.
    pub const fn and(&self, other: Addr) -> Addr {
        Addr {
            num: self.num & other.num,
        }
    }

    /// Ones'-complement of this address.
    pub const fn not(&self) -> Addr {
        Addr { num: !self.num }
    }

    /// Shifts left, discarding bits pushed past the 32-bit boundary.
    /// A shift of 32 or more yields `0.0.0.0`.
    pub const fn shift_left(&self, amt: u32) -> Addr {
        match self.num.checked_shl(amt) {
            Some(num) => Addr { num },
            None => Addr { num: 0 },
        }
    }

    /// Unsigned right shift. A shift of 32 or more yields `0.0.0.0`.
    pub const fn shift_right(&self, amt: u32) -> Addr {
        match self.num.checked_shr(amt) {
            Some(num) => Addr { num },
            None => Addr { num: 0 },
        }
    }
}

impl From<u32> for Addr {
    fn from(num: u32) -> Addr {
        Addr::new(num)
    }
}

impl From<[u8; 4]> for Addr {
    fn from(octets: [u8; 4]) -> Addr {
        Addr::from_octets(octets)
    }
}

impl From<Addr> for u32 {
    fn from(addr: Addr) -> u32 {
        addr.num
    }
}

impl FromStr for Addr {
    type Err = NetError;

    /// Parses the dotted-decimal form: exactly four `.`-separated
    /// decimal octets, each 0-255.
    fn from_str(s: &str) -> Result<Addr, NetError> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(NetError::Format(format!(
                "expected 4 octets in {s:?}, found {}",
                parts.len()
            )));
        }
        let mut octets = [0u8; 4];
        for (octet, part) in octets.iter_mut().zip(&parts) {
            *octet = part
                .parse()
                .map_err(|_| NetError::Format(format!("invalid octet {part:?} in {s:?}")))?;
        }
        Ok(Addr::from_octets(octets))
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl Serialize for Addr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Addr {
    fn deserialize<D>(deserializer: D) -> Result<Addr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Addr::from_str(&s).map_err(de::Error::custom)
    }
}
