//! IPv4 address codec and CIDR mask utilities.
//!
//! Provides conversions between dotted-decimal strings, `u32` and binary strings,
//! the [`Prefix`] length type and the [`Cidr`] pair used as calculator input.

use crate::error::{ValidationError, ValidationResult};
use itertools::Itertools;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Prefix length of a subnet mask, always within `0..=32`.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Serialize)]
#[serde(transparent)]
pub struct Prefix(u8);

impl Prefix {
    /// Create a [`Prefix`], rejecting lengths above 32.
    ///
    /// # Examples
    /// ```
    /// use subnet_calc::models::Prefix;
    /// assert_eq!(Prefix::new(24).unwrap().length(), 24);
    /// assert!(Prefix::new(33).is_err());
    /// ```
    pub fn new(len: u32) -> ValidationResult<Prefix> {
        if len > MAX_LENGTH as u32 {
            Err(ValidationError::PrefixOutOfRange { prefix: len })
        } else {
            Ok(Prefix(len as u8))
        }
    }

    pub fn length(&self) -> u8 {
        self.0
    }

    /// Number of host bits (`32 - len`).
    pub fn host_bits(&self) -> u8 {
        MAX_LENGTH - self.0
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a dotted-decimal address.
///
/// Requires exactly four parts, each an integer in `0..=255`. Leading zeros are
/// accepted and dropped (`"010.1.1.1"` parses as `10.1.1.1`).
pub fn parse_address(s: &str) -> ValidationResult<Ipv4Addr> {
    let invalid = || ValidationError::InvalidFormat {
        input: s.to_string(),
    };

    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return Err(invalid());
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *octet = part.parse().map_err(|_| invalid())?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// `(o0 << 24) + (o1 << 16) + (o2 << 8) + o3`
pub fn to_integer(addr: Ipv4Addr) -> u32 {
    let [o0, o1, o2, o3] = addr.octets();
    ((o0 as u32) << 24) + ((o1 as u32) << 16) + ((o2 as u32) << 8) + o3 as u32
}

/// Inverse of [`to_integer`].
pub fn from_integer(bits: u32) -> Ipv4Addr {
    Ipv4Addr::new(
        ((bits >> 24) & 0xFF) as u8,
        ((bits >> 16) & 0xFF) as u8,
        ((bits >> 8) & 0xFF) as u8,
        (bits & 0xFF) as u8,
    )
}

/// Dotted-decimal form of a 32-bit address.
pub fn format_address(bits: u32) -> String {
    from_integer(bits).to_string()
}

/// Each octet as 8 zero-padded bits, joined with `.`.
///
/// # Examples
/// ```
/// use subnet_calc::models::to_binary_string;
/// assert_eq!(
///     to_binary_string(0xFFFFFF00),
///     "11111111.11111111.11111111.00000000"
/// );
/// ```
pub fn to_binary_string(bits: u32) -> String {
    bits.to_be_bytes()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}

/// Convert a prefix length to a subnet mask as u32.
///
/// A shift by the full 32 bits is not defined for `u32`, so prefix 0 maps to an
/// all-zero mask explicitly.
///
/// # Examples
/// ```
/// use subnet_calc::models::{mask_from_prefix, Prefix};
/// assert_eq!(mask_from_prefix(Prefix::new(24).unwrap()), 0xFFFFFF00);
/// assert_eq!(mask_from_prefix(Prefix::new(0).unwrap()), 0);
/// ```
pub fn mask_from_prefix(prefix: Prefix) -> u32 {
    u32::MAX.checked_shl(prefix.host_bits() as u32).unwrap_or(0)
}

/// Bitwise complement of a subnet mask.
pub fn wildcard_from_mask(mask: u32) -> u32 {
    !mask
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: u32, prefix: Prefix) -> u32 {
    addr & mask_from_prefix(prefix)
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: u32, prefix: Prefix) -> u32 {
    let mask = mask_from_prefix(prefix);
    (addr & mask) | wildcard_from_mask(mask)
}

/// Number of addresses covered by a prefix, `2^(32 - len)`.
pub fn total_addresses(prefix: Prefix) -> u64 {
    1u64 << prefix.host_bits()
}

/// IPv4 address together with its prefix length, e.g. `192.168.1.10/24`.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Cidr {
    /// The IPv4 address as entered (not reduced to the network address).
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: Prefix,
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Cidr {
    pub fn new(addr: Ipv4Addr, prefix: Prefix) -> Cidr {
        Cidr { addr, prefix }
    }

    /// The address as u32.
    pub fn bits(&self) -> u32 {
        to_integer(self.addr)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
