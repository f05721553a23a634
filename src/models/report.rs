//! Subnet report data model.

use super::ipv4::{Cidr, Prefix};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Classful network label derived from the first octet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
    Special,
}

impl AddressClass {
    pub fn from_first_octet(first: u8) -> AddressClass {
        match first {
            1..=126 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            240..=255 => AddressClass::E,
            // 0 and 127
            _ => AddressClass::Special,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressClass::A => "Class A",
            AddressClass::B => "Class B",
            AddressClass::C => "Class C",
            AddressClass::D => "Class D (Multicast)",
            AddressClass::E => "Class E (Reserved)",
            AddressClass::Special => "Special",
        }
    }

    /// True for the unicast classes A, B and C.
    pub fn is_unicast(&self) -> bool {
        matches!(self, AddressClass::A | AddressClass::B | AddressClass::C)
    }
}

/// Special-purpose range an address belongs to.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressType {
    Private,
    Loopback,
    LinkLocal,
    Multicast,
    LimitedBroadcast,
    Public,
}

impl AddressType {
    /// Ranges are checked in a fixed order and the first match wins.
    pub fn of(addr: Ipv4Addr) -> AddressType {
        match addr.octets() {
            [10, _, _, _] => AddressType::Private,
            [172, 16..=31, _, _] => AddressType::Private,
            [192, 168, _, _] => AddressType::Private,
            [127, _, _, _] => AddressType::Loopback,
            [169, 254, _, _] => AddressType::LinkLocal,
            [224..=239, _, _, _] => AddressType::Multicast,
            [255, 255, 255, 255] => AddressType::LimitedBroadcast,
            _ => AddressType::Public,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressType::Private => "Private (RFC-1918)",
            AddressType::Loopback => "Loopback",
            AddressType::LinkLocal => "Link-local (APIPA)",
            AddressType::Multicast => "Multicast",
            AddressType::LimitedBroadcast => "Limited broadcast",
            AddressType::Public => "Public",
        }
    }
}

/// Size band of a prefix length.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CidrSize {
    SingleHost,
    PointToPoint,
    Small,
    Medium,
    Large,
    VeryLarge,
    PrivateRange,
    Unlabeled,
}

impl CidrSize {
    pub fn describe(prefix: Prefix, address_type: AddressType) -> CidrSize {
        let len = prefix.length();
        if len == 32 {
            CidrSize::SingleHost
        } else if len == 31 {
            CidrSize::PointToPoint
        } else if (24..=30).contains(&len) {
            CidrSize::Small
        } else if (16..24).contains(&len) {
            CidrSize::Medium
        } else if (8..16).contains(&len) {
            CidrSize::Large
        } else if len < 8 {
            CidrSize::VeryLarge
        } else if address_type == AddressType::Private {
            // Every prefix in 0..=32 is covered above; kept as the last resort.
            CidrSize::PrivateRange
        } else {
            CidrSize::Unlabeled
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CidrSize::SingleHost => "single host",
            CidrSize::PointToPoint => "point-to-point network",
            CidrSize::Small => "small network",
            CidrSize::Medium => "medium network",
            CidrSize::Large => "large network",
            CidrSize::VeryLarge => "very large network",
            CidrSize::PrivateRange => "private network addresses (RFC-1918)",
            CidrSize::Unlabeled => "",
        }
    }
}

/// Result of one subnet calculation.
///
/// Addresses and masks are kept as `u32`. Built by
/// [`compute_report`](crate::processing::compute_report).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    /// Input address and prefix.
    pub cidr: Cidr,
    pub address: u32,
    pub mask: u32,
    pub mask_binary: String,
    pub wildcard: u32,
    pub wildcard_binary: String,
    pub network: u32,
    pub broadcast: u32,
    pub host_min: u32,
    pub host_max: u32,
    /// `2^(32 - prefix)`.
    pub total_hosts: u64,
    /// `total_hosts - 2`, floored at 0.
    pub usable_hosts: u64,
    pub class: AddressClass,
    pub address_type: AddressType,
    pub cidr_size: CidrSize,
}

impl SubnetReport {
    pub fn prefix(&self) -> Prefix {
        self.cidr.prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_class() {
        assert_eq!(AddressClass::from_first_octet(0), AddressClass::Special);
        assert_eq!(AddressClass::from_first_octet(1), AddressClass::A);
        assert_eq!(AddressClass::from_first_octet(126), AddressClass::A);
        assert_eq!(AddressClass::from_first_octet(127), AddressClass::Special);
        assert_eq!(AddressClass::from_first_octet(128), AddressClass::B);
        assert_eq!(AddressClass::from_first_octet(191), AddressClass::B);
        assert_eq!(AddressClass::from_first_octet(192), AddressClass::C);
        assert_eq!(AddressClass::from_first_octet(223), AddressClass::C);
        assert_eq!(AddressClass::from_first_octet(224), AddressClass::D);
        assert_eq!(AddressClass::from_first_octet(239), AddressClass::D);
        assert_eq!(AddressClass::from_first_octet(240), AddressClass::E);
        assert_eq!(AddressClass::from_first_octet(255), AddressClass::E);
        assert_eq!(AddressClass::D.label(), "Class D (Multicast)");
        assert!(AddressClass::C.is_unicast());
        assert!(!AddressClass::Special.is_unicast());
    }

    #[test]
    fn test_address_type() {
        let of = |a, b, c, d| AddressType::of(Ipv4Addr::new(a, b, c, d));
        assert_eq!(of(10, 20, 30, 40), AddressType::Private);
        assert_eq!(of(172, 15, 0, 1), AddressType::Public);
        assert_eq!(of(172, 16, 0, 1), AddressType::Private);
        assert_eq!(of(172, 31, 255, 255), AddressType::Private);
        assert_eq!(of(172, 32, 0, 1), AddressType::Public);
        assert_eq!(of(192, 168, 0, 1), AddressType::Private);
        assert_eq!(of(192, 169, 0, 1), AddressType::Public);
        assert_eq!(of(127, 0, 0, 1), AddressType::Loopback);
        assert_eq!(of(169, 254, 10, 1), AddressType::LinkLocal);
        assert_eq!(of(169, 253, 10, 1), AddressType::Public);
        assert_eq!(of(224, 0, 0, 251), AddressType::Multicast);
        assert_eq!(of(239, 255, 255, 250), AddressType::Multicast);
        assert_eq!(of(255, 255, 255, 255), AddressType::LimitedBroadcast);
        assert_eq!(of(255, 255, 255, 254), AddressType::Public);
        assert_eq!(of(8, 8, 8, 8), AddressType::Public);
        assert_eq!(AddressType::Private.label(), "Private (RFC-1918)");
    }

    #[test]
    fn test_cidr_size() {
        let describe = |len| CidrSize::describe(Prefix::new(len).unwrap(), AddressType::Public);
        assert_eq!(describe(32), CidrSize::SingleHost);
        assert_eq!(describe(31), CidrSize::PointToPoint);
        assert_eq!(describe(30), CidrSize::Small);
        assert_eq!(describe(24), CidrSize::Small);
        assert_eq!(describe(23), CidrSize::Medium);
        assert_eq!(describe(16), CidrSize::Medium);
        assert_eq!(describe(15), CidrSize::Large);
        assert_eq!(describe(8), CidrSize::Large);
        assert_eq!(describe(7), CidrSize::VeryLarge);
        assert_eq!(describe(0), CidrSize::VeryLarge);
        assert_eq!(CidrSize::PointToPoint.label(), "point-to-point network");
    }

    #[test]
    fn test_cidr_size_never_falls_through() {
        for len in 0..=32 {
            let size = CidrSize::describe(Prefix::new(len).unwrap(), AddressType::Private);
            assert_ne!(size, CidrSize::PrivateRange, "prefix /{len}");
            assert_ne!(size, CidrSize::Unlabeled, "prefix /{len}");
        }
    }
}
