use crate::result::Result;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::macros::format_description;

/// Resolve the plugin project directory from the optional --path argument
pub fn resolve_base_dir(path: Option<&Path>) -> Result<PathBuf> {
    let base_dir = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir()?,
    };

    if !base_dir.is_dir() {
        return Err(crate::error::Error::Custom(format!(
            "Project directory not found: {}",
            base_dir.display()
        )));
    }

    Ok(base_dir)
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Current calendar date as a YYYYMMDD stamp, local time when the offset
/// is known, UTC otherwise.
pub fn date_stamp() -> Result<String> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let format = format_description!("[year][month][day]");
    Ok(now.format(&format)?)
}
