//! Display strings for a [`SubnetReport`].
//!
//! Produces the named fields a front end writes into its result view. Nothing
//! here touches stdout; see [`super::terminal`], [`super::csv`] and [`super::json`].

use crate::models::{format_address, to_binary_string, AddressType, SubnetReport};
use serde::ser::SerializeMap;
use serde::Serialize;

/// Field keys in display order.
pub const FIELD_KEYS: [&str; 24] = [
    "address-decimal",
    "address-binary",
    "netmask-decimal",
    "netmask-binary",
    "cidr-value",
    "cidr-desc",
    "cidr-binary",
    "wildcard-decimal",
    "wildcard-binary",
    "network-decimal",
    "network-binary",
    "broadcast-decimal",
    "broadcast-binary",
    "hosts-total",
    "hostmin-decimal",
    "hostmin-binary",
    "hostmax-decimal",
    "hostmax-binary",
    "network-class",
    "address-type",
    "address-range",
    "decimal-ip",
    "address-type-badge",
    "network-class-badge",
];

/// Styling hint for the class and type labels.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Private,
    Public,
    Default,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Private => "private",
            Badge::Public => "public",
            Badge::Default => "default",
        }
    }
}

/// Ordered mapping of field key to display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFields {
    fields: Vec<(&'static str, String)>,
}

impl DisplayFields {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl Serialize for DisplayFields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Group decimal digits in threes, e.g. `16777214` -> `16,777,214`.
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Leading part of the dotted binary mask, followed by `...` unless the prefix is 32.
///
/// Cuts at `prefix + prefix / 8 - 1` characters, so the cut can land on a
/// separator or one bit short of the prefix. Existing output depends on this.
pub fn significant_mask_bits(mask_binary: &str, prefix: u8) -> String {
    if prefix >= 32 {
        return mask_binary.to_string();
    }
    let len = prefix as usize + prefix as usize / 8;
    let end = len.saturating_sub(1).min(mask_binary.len());
    format!("{}...", &mask_binary[..end])
}

pub fn format_host_count(report: &SubnetReport, separator: char) -> String {
    match report.prefix().length() {
        32 => "1 (single host)".to_string(),
        31 => "2 (point-to-point)".to_string(),
        _ => format!(
            "{} (of {} total)",
            group_thousands(report.usable_hosts, separator),
            group_thousands(report.total_hosts, separator)
        ),
    }
}

pub fn format_address_range(report: &SubnetReport) -> String {
    let min = format_address(report.host_min);
    let max = format_address(report.host_max);
    match report.prefix().length() {
        32 => format!("{min} (single host)"),
        31 => format!("{min} - {max} (both usable)"),
        _ => format!("{min} - {max}"),
    }
}

pub fn address_type_badge(report: &SubnetReport) -> Badge {
    match report.address_type {
        AddressType::Private => Badge::Private,
        AddressType::Public => Badge::Public,
        _ => Badge::Default,
    }
}

/// Classes A-C take the address-type badge; D, E and special get the default.
pub fn network_class_badge(report: &SubnetReport) -> Badge {
    if report.class.is_unicast() {
        address_type_badge(report)
    } else {
        Badge::Default
    }
}

/// Render every display field of a report.
pub fn format_report(report: &SubnetReport, thousands_separator: char) -> DisplayFields {
    let description = report.cidr_size.label();
    let cidr_desc = if description.is_empty() {
        String::new()
    } else {
        format!("({description})")
    };

    let fields = vec![
        ("address-decimal", report.cidr.addr.to_string()),
        ("address-binary", to_binary_string(report.address)),
        ("netmask-decimal", format_address(report.mask)),
        ("netmask-binary", report.mask_binary.clone()),
        ("cidr-value", format!("/{}", report.prefix())),
        ("cidr-desc", cidr_desc),
        (
            "cidr-binary",
            significant_mask_bits(&report.mask_binary, report.prefix().length()),
        ),
        ("wildcard-decimal", format_address(report.wildcard)),
        ("wildcard-binary", report.wildcard_binary.clone()),
        ("network-decimal", format_address(report.network)),
        ("network-binary", to_binary_string(report.network)),
        ("broadcast-decimal", format_address(report.broadcast)),
        ("broadcast-binary", to_binary_string(report.broadcast)),
        ("hosts-total", format_host_count(report, thousands_separator)),
        ("hostmin-decimal", format_address(report.host_min)),
        ("hostmin-binary", to_binary_string(report.host_min)),
        ("hostmax-decimal", format_address(report.host_max)),
        ("hostmax-binary", to_binary_string(report.host_max)),
        ("network-class", report.class.label().to_string()),
        ("address-type", report.address_type.label().to_string()),
        ("address-range", format_address_range(report)),
        (
            "decimal-ip",
            group_thousands(report.address as u64, thousands_separator),
        ),
        (
            "address-type-badge",
            address_type_badge(report).as_str().to_string(),
        ),
        (
            "network-class-badge",
            network_class_badge(report).as_str().to_string(),
        ),
    ];
    debug_assert_eq!(fields.len(), FIELD_KEYS.len());

    DisplayFields { fields }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;

    fn fields(input: &str) -> DisplayFields {
        format_report(&calculate(input).unwrap(), ',')
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, ','), "0");
        assert_eq!(group_thousands(999, ','), "999");
        assert_eq!(group_thousands(1000, ','), "1,000");
        assert_eq!(group_thousands(65534, '.'), "65.534");
        assert_eq!(group_thousands(16777214, ','), "16,777,214");
        assert_eq!(group_thousands(4294967296, ' '), "4 294 967 296");
    }

    #[test]
    fn test_significant_mask_bits() {
        let mask = |len: u32| to_binary_string(u32::MAX.checked_shl(32 - len).unwrap_or(0));
        assert_eq!(significant_mask_bits(&mask(24), 24), "11111111.11111111.11111111...");
        assert_eq!(significant_mask_bits(&mask(8), 8), "11111111...");
        // cut lands on the separator
        assert_eq!(significant_mask_bits(&mask(9), 9), "11111111....");
        assert_eq!(significant_mask_bits(&mask(1), 1), "...");
        assert_eq!(significant_mask_bits(&mask(0), 0), "...");
        assert_eq!(
            significant_mask_bits(&mask(32), 32),
            "11111111.11111111.11111111.11111111"
        );
    }

    #[test]
    fn test_format_report_class_c() {
        let f = fields("192.168.1.0/24");
        assert_eq!(f.get("address-decimal"), Some("192.168.1.0"));
        assert_eq!(
            f.get("address-binary"),
            Some("11000000.10101000.00000001.00000000")
        );
        assert_eq!(f.get("netmask-decimal"), Some("255.255.255.0"));
        assert_eq!(f.get("cidr-value"), Some("/24"));
        assert_eq!(f.get("cidr-desc"), Some("(small network)"));
        assert_eq!(f.get("wildcard-decimal"), Some("0.0.0.255"));
        assert_eq!(
            f.get("wildcard-binary"),
            Some("00000000.00000000.00000000.11111111")
        );
        assert_eq!(f.get("network-decimal"), Some("192.168.1.0"));
        assert_eq!(f.get("broadcast-decimal"), Some("192.168.1.255"));
        assert_eq!(f.get("hosts-total"), Some("254 (of 256 total)"));
        assert_eq!(f.get("hostmin-decimal"), Some("192.168.1.1"));
        assert_eq!(f.get("hostmax-decimal"), Some("192.168.1.254"));
        assert_eq!(f.get("network-class"), Some("Class C"));
        assert_eq!(f.get("address-type"), Some("Private (RFC-1918)"));
        assert_eq!(f.get("address-range"), Some("192.168.1.1 - 192.168.1.254"));
        assert_eq!(f.get("decimal-ip"), Some("3,232,235,776"));
        assert_eq!(f.get("address-type-badge"), Some("private"));
        assert_eq!(f.get("network-class-badge"), Some("private"));
    }

    #[test]
    fn test_format_report_small_prefixes() {
        let f = fields("203.0.113.5/31");
        assert_eq!(f.get("hosts-total"), Some("2 (point-to-point)"));
        assert_eq!(
            f.get("address-range"),
            Some("203.0.113.4 - 203.0.113.5 (both usable)")
        );
        assert_eq!(f.get("cidr-desc"), Some("(point-to-point network)"));

        let f = fields("203.0.113.5/32");
        assert_eq!(f.get("hosts-total"), Some("1 (single host)"));
        assert_eq!(f.get("address-range"), Some("203.0.113.5 (single host)"));
        assert_eq!(
            f.get("cidr-binary"),
            Some("11111111.11111111.11111111.11111111")
        );
        assert_eq!(f.get("address-type-badge"), Some("public"));
    }

    #[test]
    fn test_format_report_large_counts() {
        let f = format_report(&calculate("10.0.0.1/8").unwrap(), '.');
        assert_eq!(f.get("hosts-total"), Some("16.777.214 (of 16.777.216 total)"));
    }

    #[test]
    fn test_badges() {
        let f = fields("224.0.0.1/4");
        assert_eq!(f.get("address-type"), Some("Multicast"));
        assert_eq!(f.get("address-type-badge"), Some("default"));
        assert_eq!(f.get("network-class-badge"), Some("default"));

        let f = fields("127.0.0.1/8");
        assert_eq!(f.get("network-class"), Some("Special"));
        assert_eq!(f.get("network-class-badge"), Some("default"));

        let f = fields("169.254.1.1/16");
        assert_eq!(f.get("network-class"), Some("Class B"));
        assert_eq!(f.get("network-class-badge"), Some("default"));
    }

    #[test]
    fn test_field_order_and_serialize() {
        let f = fields("10.1.2.3/20");
        let keys: Vec<&str> = f.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, FIELD_KEYS.to_vec());

        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["network-decimal"], "10.1.0.0");
        assert_eq!(json["broadcast-decimal"], "10.1.15.255");
    }
}
