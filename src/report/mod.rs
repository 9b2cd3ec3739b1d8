pub mod json;
pub mod md;

use crate::error::GolfError;
use crate::types::report::RoundReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(reports: &[RoundReport], format: OutputFormat) -> Result<String, GolfError> {
    match format {
        OutputFormat::Json => json::to_json(reports).map_err(GolfError::Json),
        OutputFormat::Md => Ok(reports
            .iter()
            .map(md::to_markdown)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
