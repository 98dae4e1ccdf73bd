//! Verdict table and message rendering.

use tracing::debug;

use crate::error::CycleError;
use crate::types::SubmissionRecord;

/// Review status codes and the sentences reported for them.
const VERDICTS: [(&str, &str); 3] = [
    (
        "approved",
        "Работа проверена: ревьюеру всё понравилось. Ура!",
    ),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
    ("reviewing", "Работа взята на проверку ревьюером."),
];

/// Looks up the verdict sentence for a status code.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, verdict)| *verdict)
}

/// Renders the notification text for a submission.
///
/// Fails when the name or status is missing or the status is not a known code.
pub fn render_status(record: &SubmissionRecord) -> Result<String, CycleError> {
    let (Some(name), Some(status)) = (record.name.as_deref(), record.status.as_deref()) else {
        return Err(CycleError::incorrect(
            "submission has no `homework_name` or `status`",
        ));
    };

    let verdict = verdict_for(status)
        .ok_or_else(|| CycleError::incorrect(format!("unknown homework status `{status}`")))?;

    debug!(homework = name, status, "status parsed");
    Ok(format!(
        "Изменился статус проверки работы \"{name}\".\n\n{verdict}"
    ))
}

/// Renders the diagnostic sent to the chat when a cycle fails.
pub fn render_failure(error: &CycleError) -> String {
    format!("Сбой в работе программы:\n{}", error.describe())
}
