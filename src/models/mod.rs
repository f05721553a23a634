//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Prefix`] and [`Cidr`] - prefix length and address/prefix input pair
//! - [`SubnetReport`] - the facts derived from one calculation
//! - [`AddressClass`], [`AddressType`], [`CidrSize`] - classification labels

mod ipv4;
mod report;

// Re-export public types
pub use ipv4::{
    broadcast_addr, format_address, from_integer, mask_from_prefix, network_addr, parse_address,
    to_binary_string, to_integer, total_addresses, wildcard_from_mask, Cidr, Prefix, MAX_LENGTH,
};
pub use report::{AddressClass, AddressType, CidrSize, SubnetReport};
