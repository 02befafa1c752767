//! IPv4 network: a canonical address/mask pair.

use super::{Addr, Mask};
use crate::error::NetError;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// An IPv4 network, the set of hosts sharing a common masked prefix.
///
/// The stored address is always canonical: the constructor applies the
/// mask to whatever base it is given, so two networks built from any
/// two addresses of the same block compare equal. Equality and ordering
/// consider the address first, then the prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Net {
    addr: Addr,
    mask: Mask,
}

impl Net {
    /// Builds a network from any base address within it; host bits are
    /// cleared immediately.
    pub fn new(base: Addr, mask: Mask) -> Net {
        let addr = mask.apply(base);
        if addr != base {
            log::trace!(
                "canonicalized base {base} to {addr}/{}",
                mask.network_bits()
            );
        }
        Net { addr, mask }
    }

    /// The canonical base address of this network.
    pub const fn addr(&self) -> Addr {
        self.addr
    }

    /// The mask associated with this network.
    pub const fn mask(&self) -> Mask {
        self.mask
    }

    /// The number of unique addresses within this network. A /0 block
    /// holds all 2^32 of them, hence the wide return type.
    pub const fn num_hosts(&self) -> u64 {
        1u64 << self.mask.host_bits()
    }

    /// The numerically smallest address in this network.
    pub const fn min_addr(&self) -> Addr {
        self.addr
    }

    /// The numerically largest address in this network, the
    /// conventional broadcast address of the block.
    pub fn max_addr(&self) -> Addr {
        // The base is mask-aligned, so the offset never leaves u32.
        Addr::new((self.addr.num() as u64 + self.num_hosts() - 1) as u32)
    }

    /// Whether the host identified by `addr` lies within this network.
    pub fn contains(&self, addr: Addr) -> bool {
        self.mask.apply(addr) == self.addr
    }

    /// Whether `other` is the sibling of this network: a distinct block
    /// of the same size that merges with this one into the block one
    /// prefix bit shorter. A /0 network has no sibling and fails.
    pub fn is_adjacent(&self, other: &Net) -> Result<bool, NetError> {
        let wider = self.mask.shift(1)?;
        if self == other || self.mask != other.mask {
            return Ok(false);
        }
        Ok(wider.apply(self.addr) == wider.apply(other.addr))
    }

    /// The two half-size child blocks of this network, lower half
    /// first. Fails for a /32, which cannot be split further.
    pub fn subnets(&self) -> Result<(Net, Net), NetError> {
        let narrower = self.mask.shift(-1)?;
        let half = (self.num_hosts() / 2) as u32;
        let lower = Net::new(self.addr, narrower);
        let upper = Net::new(Addr::new(self.addr.num() + half), narrower);
        Ok((lower, upper))
    }

    /// The parent block with the prefix shortened by one bit. Fails for
    /// a /0, which has no parent.
    pub fn supernet(&self) -> Result<Net, NetError> {
        Ok(Net::new(self.addr, self.mask.shift(1)?))
    }

    /// Whether this network strictly contains `other`.
    pub fn is_supernet_of(&self, other: &Net) -> bool {
        self.mask.network_bits() < other.mask.network_bits() && self.contains(other.addr)
    }

    /// Whether this network is strictly contained within `other`.
    pub fn is_subnet_of(&self, other: &Net) -> bool {
        other.is_supernet_of(self)
    }

    /// The equal-size block immediately following this one. Fails at
    /// the top of the address space.
    pub fn next(&self) -> Result<Net, NetError> {
        let base = self.addr.num() as u64 + self.num_hosts();
        let base = u32::try_from(base)
            .map_err(|_| NetError::Range(format!("no network follows {self}")))?;
        Ok(Net::new(Addr::new(base), self.mask))
    }

    /// Re-sizes the block around the same base address by shifting the
    /// mask; see [`Mask::shift`].
    pub fn shift(&self, amt: i8) -> Result<Net, NetError> {
        Ok(Net::new(self.addr, self.mask.shift(amt)?))
    }

    /// Iterates every address of this network from [`Net::min_addr`] to
    /// [`Net::max_addr`] inclusive, network and broadcast addresses
    /// included. Each call starts a fresh pass; the sequence is lazy,
    /// so walking even a /0 allocates nothing up front.
    pub fn hosts(&self) -> Hosts {
        Hosts {
            next: self.addr.num() as u64,
            last: self.max_addr().num() as u64,
        }
    }
}

impl fmt::Display for Net {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask.network_bits())
    }
}

impl FromStr for Net {
    type Err = NetError;

    /// Parses CIDR notation, e.g. `10.0.0.0/8`. The base address is
    /// canonicalized like any other constructor input.
    fn from_str(s: &str) -> Result<Net, NetError> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        if parts.len() != 2 {
            return Err(NetError::Format(format!(
                "expected address/prefix in {s:?}"
            )));
        }
        let addr: Addr = parts[0].parse()?;
        let bits: u8 = parts[1]
            .parse()
            .map_err(|_| NetError::Format(format!("invalid prefix length {:?}", parts[1])))?;
        Ok(Net::new(addr, Mask::new(bits)?))
    }
}

impl Serialize for Net {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Net {
    fn deserialize<D>(deserializer: D) -> Result<Net, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Net::from_str(&s).map_err(de::Error::custom)
    }
}

impl IntoIterator for &Net {
    type Item = Addr;
    type IntoIter = Hosts;

    fn into_iter(self) -> Hosts {
        self.hosts()
    }
}

/// Lazy iterator over every address of a network, in ascending order.
#[derive(Debug, Clone)]
pub struct Hosts {
    next: u64,
    last: u64,
}

impl Iterator for Hosts {
    type Item = Addr;

    fn next(&mut self) -> Option<Addr> {
        if self.next > self.last {
            return None;
        }
        let addr = Addr::new(self.next as u32);
        self.next += 1;
        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.last + 1 - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> Net {
        s.parse().expect("test network should parse")
    }

    #[test]
    fn test_canonicalization() {
        let base = Addr::from_octets([192, 168, 1, 10]);
        let n = Net::new(base, Mask::new(24).unwrap());
        assert_eq!(n.addr(), Addr::from_octets([192, 168, 1, 0]));
        // Applying the mask again is a no-op.
        assert_eq!(n.mask().apply(n.addr()), n.addr());
        // Any two bases in the block build the same network.
        assert_eq!(
            n,
            Net::new(Addr::from_octets([192, 168, 1, 254]), Mask::new(24).unwrap())
        );
    }

    #[test]
    fn test_scenario_192_168_1_0_24() {
        let n = Net::new(
            Addr::from_octets([192, 168, 1, 10]),
            Mask::new(24).unwrap(),
        );
        assert_eq!(n.num_hosts(), 256);
        assert_eq!(n.min_addr(), Addr::from_octets([192, 168, 1, 0]));
        assert_eq!(n.max_addr(), Addr::from_octets([192, 168, 1, 255]));
        assert_eq!(n.to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_num_hosts_extremes() {
        assert_eq!(net("10.0.0.1/32").num_hosts(), 1);
        assert_eq!(net("0.0.0.0/0").num_hosts(), 1u64 << 32);
        assert_eq!(net("0.0.0.0/0").max_addr(), Addr::BROADCAST);
    }

    #[test]
    fn test_contains() {
        let n = net("10.1.0.0/16");
        assert!(n.contains(n.min_addr()));
        assert!(n.contains(n.max_addr()));
        assert!(n.contains(Addr::from_octets([10, 1, 200, 3])));
        assert!(!n.contains(Addr::from_octets([10, 2, 0, 0])));
        assert!(!n.contains(Addr::new(n.max_addr().num() + 1)));
    }

    #[test]
    fn test_adjacency() {
        let lower = net("10.0.0.0/25");
        let upper = net("10.0.0.128/25");
        let apart = net("10.0.1.0/25");
        assert!(lower.is_adjacent(&upper).unwrap());
        assert!(upper.is_adjacent(&lower).unwrap());
        // Same network is not its own sibling.
        assert!(!lower.is_adjacent(&lower).unwrap());
        // 10.0.1.0/25 merges with 10.0.1.128/25, not with 10.0.0.128/25.
        assert!(!upper.is_adjacent(&apart).unwrap());
        // Different sizes never merge.
        assert!(!lower.is_adjacent(&net("10.0.0.128/26")).unwrap());
        // A /0 has no bit to drop.
        assert!(matches!(
            net("0.0.0.0/0").is_adjacent(&net("0.0.0.0/0")),
            Err(NetError::Range(_))
        ));
    }

    #[test]
    fn test_subnets() {
        let (lower, upper) = net("10.0.0.0/8").subnets().unwrap();
        assert_eq!(lower, net("10.0.0.0/9"));
        assert_eq!(upper, net("10.128.0.0/9"));
        assert!(lower.is_adjacent(&upper).unwrap());

        // The children split this block's own range, wherever it sits.
        let (lower, upper) = net("192.168.1.0/24").subnets().unwrap();
        assert_eq!(lower, net("192.168.1.0/25"));
        assert_eq!(upper, net("192.168.1.128/25"));

        assert!(matches!(
            net("10.0.0.1/32").subnets(),
            Err(NetError::Range(_))
        ));
    }

    #[test]
    fn test_supernet() {
        let n = net("10.128.0.0/9");
        let parent = n.supernet().unwrap();
        assert_eq!(parent, net("10.0.0.0/8"));
        assert!(parent.is_supernet_of(&n));
        assert!(n.is_subnet_of(&parent));
        assert!(matches!(
            net("0.0.0.0/0").supernet(),
            Err(NetError::Range(_))
        ));
    }

    #[test]
    fn test_supernet_subnet_relations() {
        let big = net("10.0.0.0/8");
        let small = net("10.0.10.0/24");
        assert!(big.is_supernet_of(&small));
        assert!(small.is_subnet_of(&big));
        assert!(!small.is_supernet_of(&big));
        // A network neither contains nor is contained by itself.
        assert!(!big.is_supernet_of(&big));
        assert!(!big.is_subnet_of(&big));
        // Disjoint blocks are unrelated.
        assert!(!big.is_supernet_of(&net("11.0.0.0/24")));
    }

    #[test]
    fn test_next() {
        assert_eq!(net("10.1.1.0/28").next().unwrap(), net("10.1.1.16/28"));
        assert_eq!(net("10.1.1.8/29").next().unwrap(), net("10.1.1.16/29"));
        assert_eq!(net("192.0.0.0/8").next().unwrap(), net("193.0.0.0/8"));
        assert!(matches!(
            net("255.255.255.0/24").next(),
            Err(NetError::Range(_))
        ));
    }

    #[test]
    fn test_shift() {
        assert_eq!(net("10.0.10.0/24").shift(8).unwrap(), net("10.0.0.0/16"));
        assert_eq!(net("10.0.10.0/24").shift(-1).unwrap(), net("10.0.10.0/25"));
        assert!(matches!(net("10.0.0.0/8").shift(9), Err(NetError::Range(_))));
    }

    #[test]
    fn test_display_and_parse() {
        let n = net("10.0.0.0/8");
        assert_eq!(n.to_string(), "10.0.0.0/8");
        assert_eq!(n.to_string().parse::<Net>().unwrap(), n);
        // Parsing canonicalizes too.
        assert_eq!(net("192.168.1.42/24"), net("192.168.1.0/24"));

        assert!(matches!("10.0.0.0".parse::<Net>(), Err(NetError::Format(_))));
        assert!(matches!(
            "10.0.0.0/8/2".parse::<Net>(),
            Err(NetError::Format(_))
        ));
        assert!(matches!(
            "10.0.0.0/x".parse::<Net>(),
            Err(NetError::Format(_))
        ));
        assert!(matches!(
            "10.0.0.0/33".parse::<Net>(),
            Err(NetError::Range(_))
        ));
        assert!(matches!(
            "10.0.0/8".parse::<Net>(),
            Err(NetError::Format(_))
        ));
    }

    #[test]
    fn test_ordering() {
        assert!(net("10.0.0.0/8") < net("10.0.10.0/24"));
        assert!(net("10.0.10.0/24") < net("10.0.10.64/26"));
        assert!(net("10.0.0.0/8") < net("10.0.0.0/16"));
    }

    #[test]
    fn test_hosts_iteration() {
        let n = net("10.0.0.0/30");
        let hosts: Vec<Addr> = n.hosts().collect();
        assert_eq!(
            hosts,
            vec![
                Addr::from_octets([10, 0, 0, 0]),
                Addr::from_octets([10, 0, 0, 1]),
                Addr::from_octets([10, 0, 0, 2]),
                Addr::from_octets([10, 0, 0, 3]),
            ]
        );
        // Restartable: a second pass yields the same sequence.
        let again: Vec<Addr> = n.hosts().collect();
        assert_eq!(hosts, again);
        // Direct iteration over a borrowed network.
        assert_eq!((&n).into_iter().count(), 4);
    }

    #[test]
    fn test_hosts_at_address_space_top() {
        let hosts: Vec<Addr> = net("255.255.255.252/30").hosts().collect();
        assert_eq!(hosts.len(), 4);
        assert_eq!(hosts[3], Addr::BROADCAST);
    }

    #[test]
    fn test_hosts_single_address() {
        let mut hosts = net("10.0.0.1/32").hosts();
        assert_eq!(hosts.size_hint(), (1, Some(1)));
        assert_eq!(hosts.next(), Some(Addr::from_octets([10, 0, 0, 1])));
        assert_eq!(hosts.next(), None);
    }

    #[test]
    fn test_hosts_is_lazy() {
        // A /8 holds ~16.7M addresses; take a prefix without walking it.
        let first: Vec<Addr> = net("10.0.0.0/8").hosts().take(2).collect();
        assert_eq!(
            first,
            vec![Addr::from_octets([10, 0, 0, 0]), Addr::from_octets([10, 0, 0, 1])]
        );
    }
}
