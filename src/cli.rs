//! Command-line front end.
//!
//! Each input line is one independent request. It is validated, calculated and
//! rendered in the configured [`OutputFormat`]. A rejected input never stops
//! the run.

use crate::config::{Config, OutputFormat};
use crate::error::ValidationError;
use crate::models::SubnetReport;
use crate::output::{
    csv_error_row, csv_header, csv_row, format_report, json_entry, json_error_entry,
    render_error, render_report, DisplayFields,
};
use clap::Parser;
use std::error::Error;
use std::io::{BufRead, Write};

/// Preset inputs offered as hints on the calculator page.
pub const EXAMPLE_INPUTS: [&str; 5] = [
    "192.168.1.0/24",
    "10.0.0.0/8",
    "172.16.0.0/12",
    "192.168.1.128/25",
    "8.8.8.8/32",
];

#[derive(Parser, Debug)]
#[command(version, about = "subnet-calc - IPv4 subnet calculator")]
pub struct Args {
    /// Address in CIDR notation, e.g. 192.168.1.0/24. One per line from stdin when omitted.
    pub inputs: Vec<String>,

    /// Calculate the built-in example subnets.
    #[arg(long, conflicts_with = "inputs")]
    pub examples: bool,

    /// Output format (overrides SUBNET_CALC_FORMAT).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

/// Command-line flags take precedence over environment configuration.
pub fn apply_args(mut config: Config, args: &Args) -> Config {
    if let Some(format) = args.format {
        config.format = format;
    }
    if args.no_color {
        config.color = false;
    }
    config
}

/// Result of handling one input.
#[derive(Debug)]
pub enum Outcome {
    Calculated {
        input: String,
        report: SubnetReport,
        fields: DisplayFields,
    },
    Rejected {
        input: String,
        error: ValidationError,
    },
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }
}

/// Validate, calculate and format a single input.
pub fn evaluate(input: &str, config: &Config) -> Outcome {
    match crate::calculate(input) {
        Ok(report) => {
            let fields = format_report(&report, config.thousands_separator);
            Outcome::Calculated {
                input: input.to_string(),
                report,
                fields,
            }
        }
        Err(error) => {
            log::warn!("rejected '{}': {}", input.trim(), error);
            Outcome::Rejected {
                input: input.to_string(),
                error,
            }
        }
    }
}

/// Inputs from the arguments, the preset examples, or stdin (blank lines skipped).
///
/// An empty input set yields a single empty input so the user still gets the
/// empty-input message.
pub fn collect_inputs<R: BufRead>(args: &Args, stdin: R) -> Result<Vec<String>, Box<dyn Error>> {
    let inputs: Vec<String> = if args.examples {
        EXAMPLE_INPUTS.iter().map(|s| s.to_string()).collect()
    } else if !args.inputs.is_empty() {
        args.inputs.clone()
    } else {
        let mut lines = Vec::new();
        for line in stdin.lines() {
            let line = line.map_err(|e| format!("Error reading stdin: {e}"))?;
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
        lines
    };

    if inputs.is_empty() {
        return Ok(vec![String::new()]);
    }
    Ok(inputs)
}

fn write_outcomes<W: Write>(
    outcomes: &[Outcome],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Text => {
            for (i, outcome) in outcomes.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                let text = match outcome {
                    Outcome::Calculated { input, fields, .. } => render_report(input, fields),
                    Outcome::Rejected { input, error } => render_error(input, error),
                };
                writeln!(out, "{text}")?;
            }
        }
        OutputFormat::Csv => {
            writeln!(out, "{}", csv_header())?;
            for outcome in outcomes {
                let row = match outcome {
                    Outcome::Calculated { input, fields, .. } => csv_row(input, fields),
                    Outcome::Rejected { input, error } => csv_error_row(input, error),
                };
                writeln!(out, "{row}")?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = outcomes
                .iter()
                .map(|outcome| match outcome {
                    Outcome::Calculated {
                        input,
                        report,
                        fields,
                    } => json_entry(input, report, fields),
                    Outcome::Rejected { input, error } => json_error_entry(input, error),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)
                .map_err(|e| format!("Error writing JSON: {e}"))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Plain-text summary line for the log.
fn rejection_summary(rejected: usize, total: usize) -> String {
    format!("rejected {rejected} of {total} input(s)")
}

/// Handle every input and write the results.
///
/// # Returns
/// * `Ok(true)` - every input was calculated
/// * `Ok(false)` - at least one input was rejected
/// * `Err` - reading stdin or writing output failed
pub fn run<R: BufRead, W: Write>(
    args: &Args,
    config: &Config,
    stdin: R,
    out: &mut W,
) -> Result<bool, Box<dyn Error>> {
    let inputs = collect_inputs(args, stdin)?;
    log::info!(
        "#Start run() inputs={} format={:?}",
        inputs.len(),
        config.format
    );

    let outcomes: Vec<Outcome> = inputs
        .iter()
        .map(|input| evaluate(input, config))
        .collect();
    write_outcomes(&outcomes, config.format, out)?;

    let rejected = outcomes.iter().filter(|o| o.is_rejected()).count();
    if rejected > 0 {
        log::warn!("{}", rejection_summary(rejected, outcomes.len()));
    }
    Ok(rejected == 0)
}
