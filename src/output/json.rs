//! JSON output.

use super::display::DisplayFields;
use crate::error::ValidationError;
use crate::models::SubnetReport;
use serde_json::{json, Value};

/// Entry for a successful calculation: the raw report plus its display fields.
pub fn json_entry(input: &str, report: &SubnetReport, fields: &DisplayFields) -> Value {
    json!({
        "input": input.trim(),
        "report": report,
        "display": fields,
    })
}

pub fn json_error_entry(input: &str, error: &ValidationError) -> Value {
    json!({
        "input": input.trim(),
        "error": {
            "kind": error.kind(),
            "message": error.to_string(),
        },
    })
}
