use anyhow::Result;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::service::TranscriptResult;

/// Render a transcript result in the requested format
pub fn render(result: &TranscriptResult, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(result.transcript.clone()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// Save a transcript result to file
pub async fn save_to_file(
    result: &TranscriptResult,
    path: &Path,
    format: &OutputFormat,
) -> Result<()> {
    let content = render(result, format)?;
    fs_err::write(path, content)?;
    Ok(())
}

/// Print a transcript result to console
pub fn print_to_console(result: &TranscriptResult, format: &OutputFormat) -> Result<()> {
    println!("{}", render(result, format)?);
    Ok(())
}
