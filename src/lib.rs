//! IPv4 addressing and CIDR arithmetic.
//!
//! Immutable value types for working with IPv4 networks: bit-level
//! address manipulation, prefix masks, canonical CIDR blocks with
//! containment/adjacency/subnet relationships and host enumeration,
//! plus the legacy classful classifier. Everything is a pure value
//! computation; the crate performs no I/O and holds no shared state.
//!
//! ```
//! use cidr_calc::{Addr, Mask, Net, NetClass};
//!
//! let net = Net::new("192.168.1.10".parse::<Addr>()?, Mask::new(24)?);
//! assert_eq!(net.to_string(), "192.168.1.0/24");
//! assert_eq!(net.num_hosts(), 256);
//! assert_eq!(NetClass::from_addr(net.addr()), NetClass::C);
//! # Ok::<(), cidr_calc::NetError>(())
//! ```

mod error;
pub mod models;

pub use error::NetError;
pub use models::{Addr, Hosts, Mask, Net, NetClass, MAX_PREFIX_LEN};
