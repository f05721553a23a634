//! Input validation for `a.b.c.d/n` strings.
//!
//! Checks run in a fixed order so the user sees the most specific message:
//! empty input, then shape, then prefix range, then octet range.

use crate::error::{ValidationError, ValidationResult};
use crate::models::{parse_address, Cidr, Prefix};
use regex::Regex;
use std::sync::OnceLock;

/// Four dot-separated groups of 1-3 digits, `/`, then 1-2 digits.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}/[0-9]{1,2}$").expect("Invalid Regex")
    })
}

/// Validate raw user text and return the address/prefix pair.
///
/// Surrounding whitespace is ignored.
///
/// # Examples
/// ```
/// use subnet_calc::processing::validate_input;
/// let cidr = validate_input(" 192.168.1.0/24 ").unwrap();
/// assert_eq!(cidr.to_string(), "192.168.1.0/24");
/// assert!(validate_input("1.2.3.4/40").is_err());
/// ```
pub fn validate_input(input: &str) -> ValidationResult<Cidr> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if !get_cidr_regex().is_match(input) {
        log::debug!("input '{input}' does not match a.b.c.d/n");
        return Err(ValidationError::InvalidFormat {
            input: input.to_string(),
        });
    }

    let (addr_part, prefix_part) =
        input
            .split_once('/')
            .ok_or_else(|| ValidationError::InvalidFormat {
                input: input.to_string(),
            })?;

    let len: u32 = prefix_part
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            input: input.to_string(),
        })?;
    let prefix = Prefix::new(len)?;

    if let Some(octet) = addr_part
        .split('.')
        .find(|octet| !matches!(octet.parse::<u32>(), Ok(value) if value <= 255))
    {
        return Err(ValidationError::OctetOutOfRange {
            octet: octet.to_string(),
        });
    }

    let addr = parse_address(addr_part)?;
    Ok(Cidr::new(addr, prefix))
}
