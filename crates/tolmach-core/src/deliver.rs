use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::Result;

pub const DEFAULT_BASENAME: &str = "translated_output";

/// Where delivered files land when the caller does not choose a directory:
/// the user's download directory, or the working directory as a fallback.
pub fn default_output_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Materialize `text` as a plain-text file `<suggested_name>.txt` in
/// `out_dir` and return the written path. No framing around the content.
pub async fn deliver(text: &str, suggested_name: &str, out_dir: &Path) -> Result<PathBuf> {
    let base = suggested_name.strip_suffix(".txt").unwrap_or(suggested_name);
    let path = out_dir.join(format!("{base}.txt"));
    fs::write(&path, text).await?;
    log::info!("delivered {}", path.display());
    Ok(path)
}
