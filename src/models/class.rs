//! Legacy classful addressing.

use super::{Addr, Mask};
use std::fmt;

/// An obsolete address classification scheme, predating CIDR subnetting.
///
/// Membership is decided by the first octet alone:
///
/// | class | first octet | leading bits |
/// |-------|-------------|--------------|
/// | A     |   0-127     | `0***_****`  |
/// | B     | 128-191     | `10**_****`  |
/// | C     | 192-223     | `110*_****`  |
/// | D     | 224-239     | `1110_****`  |
/// | E     | 240-255     | `1111_****`  |
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum NetClass {
    A,
    B,
    C,
    D,
    E,
}

impl NetClass {
    /// Classifies an address by its first octet. Total: every address
    /// falls into exactly one class.
    pub fn from_addr(addr: Addr) -> NetClass {
        let [first, _, _, _] = addr.octets();
        match first {
            0..=127 => NetClass::A,
            128..=191 => NetClass::B,
            192..=223 => NetClass::C,
            224..=239 => NetClass::D,
            _ => NetClass::E,
        }
    }

    /// The historical mask associated with this class. Classes D and E
    /// were never subnettable and have none.
    pub fn mask(&self) -> Option<Mask> {
        let network_bits = match self {
            NetClass::A => 8,
            NetClass::B => 16,
            NetClass::C => 24,
            NetClass::D | NetClass::E => return None,
        };
        // The classful prefix lengths are all within 0-32.
        Mask::new(network_bits).ok()
    }
}

impl fmt::Display for NetClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            NetClass::A => "A",
            NetClass::B => "B",
            NetClass::C => "C",
            NetClass::D => "D",
            NetClass::E => "E",
        };
        write!(f, "{name}")
    }
}
