use std::path::Path;

use tokio::io::{AsyncWriteExt, BufWriter};

use crate::dispatch::RequestOutcome;
use crate::error::ReportError;

/// Writes the full outcome list as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error when serialization fails or the file cannot be written.
pub async fn write_json(path: &Path, outcomes: &[RequestOutcome]) -> Result<(), ReportError> {
    let json =
        serde_json::to_vec_pretty(outcomes).map_err(|err| ReportError::Serialize { source: err })?;
    let to_report = |err: std::io::Error| ReportError::WriteOutput {
        path: path.to_path_buf(),
        source: err,
    };

    let file = tokio::fs::File::create(path).await.map_err(to_report)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&json).await.map_err(to_report)?;
    writer.write_all(b"\n").await.map_err(to_report)?;
    writer.flush().await.map_err(to_report)?;
    Ok(())
}
