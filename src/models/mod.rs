//! Value types for IPv4 addressing and CIDR arithmetic.
//!
//! This module contains the core data structures of the crate:
//! - [`Addr`] - a single 32-bit host address
//! - [`Mask`] - a network prefix length with bitmask conversions
//! - [`Net`] - a canonical address/mask pair
//! - [`NetClass`] - the legacy classful address classifier

mod addr;
mod class;
mod mask;
mod net;

// Re-export public types
pub use addr::Addr;
pub use class::NetClass;
pub use mask::{Mask, MAX_PREFIX_LEN};
pub use net::{Hosts, Net};
