use crate::types::report::RoundReport;

/// A single report renders as an object, several as an array.
pub fn to_json(reports: &[RoundReport]) -> Result<String, serde_json::Error> {
    match reports {
        [report] => serde_json::to_string_pretty(report),
        reports => serde_json::to_string_pretty(reports),
    }
}
