//! Subnet fact engine.
//!
//! Derives every [`SubnetReport`] field from an address and prefix length using
//! plain `u32` arithmetic. Total over validated input; never fails.

use crate::models::{
    broadcast_addr, mask_from_prefix, network_addr, to_binary_string, total_addresses,
    wildcard_from_mask, AddressClass, AddressType, Cidr, CidrSize, Prefix, SubnetReport,
};

/// Usable host range for a subnet.
///
/// | prefix | min       | max         |
/// |--------|-----------|-------------|
/// | 32     | network   | network     |
/// | 31     | network   | broadcast   |
/// | 0-30   | network+1 | broadcast-1 |
pub fn host_range(network: u32, broadcast: u32, prefix: Prefix) -> (u32, u32) {
    match prefix.length() {
        32 => (network, network),
        31 => (network, broadcast),
        // at least 4 addresses, so neither end can wrap
        _ => (network + 1, broadcast - 1),
    }
}

/// Compute the report for one address/prefix pair.
pub fn compute_report(cidr: Cidr) -> SubnetReport {
    let prefix = cidr.prefix;
    let address = cidr.bits();

    let mask = mask_from_prefix(prefix);
    let wildcard = wildcard_from_mask(mask);
    let network = network_addr(address, prefix);
    let broadcast = broadcast_addr(address, prefix);
    let total_hosts = total_addresses(prefix);
    let (host_min, host_max) = host_range(network, broadcast, prefix);

    let class = AddressClass::from_first_octet(cidr.addr.octets()[0]);
    let address_type = AddressType::of(cidr.addr);
    let cidr_size = CidrSize::describe(prefix, address_type);

    log::debug!(
        "compute_report({cidr}) network={network:#010x} broadcast={broadcast:#010x} hosts={total_hosts}"
    );

    SubnetReport {
        cidr,
        address,
        mask,
        mask_binary: to_binary_string(mask),
        wildcard,
        wildcard_binary: to_binary_string(wildcard),
        network,
        broadcast,
        host_min,
        host_max,
        total_hosts,
        usable_hosts: total_hosts.saturating_sub(2),
        class,
        address_type,
        cidr_size,
    }
}
