// cargo watch -x 'fmt' -x 'test'

pub mod cli;
pub mod config;
pub mod error;
mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{ValidationError, ValidationResult};
pub use logging::init_logging;

use models::SubnetReport;

/// Validate `a.b.c.d/n` text and compute its subnet report.
///
/// # Examples
/// ```
/// use subnet_calc::calculate;
/// let report = calculate("10.0.0.1/8").unwrap();
/// assert_eq!(report.usable_hosts, 16_777_214);
/// ```
pub fn calculate(input: &str) -> ValidationResult<SubnetReport> {
    let cidr = processing::validate_input(input)?;
    Ok(processing::compute_report(cidr))
}
