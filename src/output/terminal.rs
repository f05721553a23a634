//! Terminal output.
//!
//! Renders a calculation as a two-column table (decimal and binary) followed by
//! the address information block, or an error line with the placeholder view.

use super::display::{Badge, DisplayFields};
use crate::error::ValidationError;
use colored::{ColoredString, Colorize};

/// Rows shown in the results table: label, decimal key, binary key.
const RESULT_ROWS: [(&str, &str, &str); 8] = [
    ("Address", "address-decimal", "address-binary"),
    ("Netmask", "netmask-decimal", "netmask-binary"),
    ("Wildcard", "wildcard-decimal", "wildcard-binary"),
    ("Network", "network-decimal", "network-binary"),
    ("Broadcast", "broadcast-decimal", "broadcast-binary"),
    ("HostMin", "hostmin-decimal", "hostmin-binary"),
    ("HostMax", "hostmax-decimal", "hostmax-binary"),
    ("CIDR", "cidr-value", "cidr-binary"),
];

const PLACEHOLDER: &str = "No calculation yet. Enter an address such as 192.168.1.0/24.";

fn badge_colored(text: &str, badge: Badge) -> ColoredString {
    match badge {
        Badge::Private => text.green(),
        Badge::Public => text.cyan(),
        Badge::Default => text.yellow(),
    }
}

fn field<'a>(fields: &'a DisplayFields, key: &str) -> &'a str {
    fields.get(key).unwrap_or_default()
}

fn badge_of(fields: &DisplayFields, key: &str) -> Badge {
    match fields.get(key) {
        Some("private") => Badge::Private,
        Some("public") => Badge::Public,
        _ => Badge::Default,
    }
}

/// Render the result table and address information for one calculation.
pub fn render_report(input: &str, fields: &DisplayFields) -> String {
    let mut out = Vec::new();

    out.push(format!("{} {}", "Subnet".bold(), input.trim().bold()));
    for (label, decimal, binary) in RESULT_ROWS {
        let value = if label == "CIDR" {
            format!("{} {}", field(fields, decimal), field(fields, "cidr-desc"))
        } else {
            field(fields, decimal).to_string()
        };
        out.push(format!(
            "  {label:<10} {value:<28} {binary}",
            label = format!("{label}:"),
            binary = field(fields, binary).dimmed()
        ));
    }
    out.push(format!("  {:<10} {}", "Hosts:", field(fields, "hosts-total")));
    out.push(String::new());
    out.push(format!(
        "  {:<10} {}",
        "Class:",
        badge_colored(field(fields, "network-class"), badge_of(fields, "network-class-badge"))
    ));
    out.push(format!(
        "  {:<10} {}",
        "Type:",
        badge_colored(field(fields, "address-type"), badge_of(fields, "address-type-badge"))
    ));
    out.push(format!("  {:<10} {}", "Range:", field(fields, "address-range")));
    out.push(format!("  {:<10} {}", "Decimal:", field(fields, "decimal-ip")));
    out.join("\n")
}

/// Render a validation failure followed by the placeholder view.
pub fn render_error(input: &str, error: &ValidationError) -> String {
    let input = input.trim();
    let shown = if input.is_empty() { "(empty)" } else { input };
    format!(
        "{} {}: {}\n  {}",
        "error".on_red(),
        shown,
        error.to_string().red(),
        PLACEHOLDER.dimmed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;
    use crate::output::format_report;

    #[test]
    fn test_render_report() {
        let fields = format_report(&calculate("192.168.1.0/24").unwrap(), ',');
        let text = render_report("192.168.1.0/24", &fields);
        assert!(text.contains("192.168.1.0/24"));
        assert!(text.contains("255.255.255.0"));
        assert!(text.contains("11111111.11111111.11111111.00000000"));
        assert!(text.contains("/24 (small network)"));
        assert!(text.contains("254 (of 256 total)"));
        assert!(text.contains("Private (RFC-1918)"));
        assert!(text.contains("192.168.1.1 - 192.168.1.254"));
    }

    #[test]
    fn test_render_error() {
        let text = render_error("  ", &ValidationError::EmptyInput);
        assert!(text.contains("(empty)"));
        assert!(text.contains("Enter an IP address in CIDR notation"));
        assert!(text.contains(PLACEHOLDER));

        let text = render_error(
            "1.2.3.4/40",
            &ValidationError::PrefixOutOfRange { prefix: 40 },
        );
        assert!(text.contains("1.2.3.4/40"));
        assert!(text.contains("between 0 and 32"));
    }
}
