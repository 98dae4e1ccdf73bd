//! Shape checks for raw review API responses.

use serde_json::Value;
use tracing::debug;

use crate::error::CycleError;
use crate::types::SubmissionRecord;

const HOMEWORKS_KEY: &str = "homeworks";
const CURRENT_DATE_KEY: &str = "current_date";

/// Validates a decoded response and returns its most recent submission.
///
/// An empty `homeworks` list is the normal "nothing changed" answer and yields `None`.
pub fn extract_latest(response: &Value) -> Result<Option<SubmissionRecord>, CycleError> {
    let object = response
        .as_object()
        .ok_or_else(|| CycleError::incorrect("response is not a JSON object"))?;

    for key in [HOMEWORKS_KEY, CURRENT_DATE_KEY] {
        if !object.contains_key(key) {
            return Err(CycleError::incorrect(format!(
                "response has no `{key}` field"
            )));
        }
    }

    let homeworks = object[HOMEWORKS_KEY]
        .as_array()
        .ok_or_else(|| CycleError::incorrect("`homeworks` is not a list"))?;

    debug!(count = homeworks.len(), "response has correct format");
    Ok(homeworks.first().map(SubmissionRecord::from_value))
}
