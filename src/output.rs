use crate::errors::AppError;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;

pub fn resolve_output_path() -> PathBuf {
    if let Ok(path) = env::var("HEATMAP_OUTPUT_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("heatmap.html")
}

pub async fn persist_page(path: &Path, html: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::OutputDirCreation(parent.to_path_buf(), e))?;
    }
    fs::write(path, html)
        .await
        .map_err(|e| AppError::OutputWrite(path.to_path_buf(), e))?;
    Ok(())
}
